// DXCC country records
//
// Fields used by the resolver:
// - dxcc_index: country index the prefix table points at
// - continent: two-letter continent code (NA, SA, EU, AF, AS, OC, AN)
//
// Index 0 is conventionally the "no country" record; whether the table
// has one is up to the application.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::CountryTable;
use crate::error::TableError;

/// Longest continent code the resolver publishes
pub const MAX_CONTINENT_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub dxcc_index: u32,
    pub continent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CountryRecord {
    pub fn new(dxcc_index: u32, continent: impl Into<String>) -> Self {
        Self {
            dxcc_index,
            continent: continent.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// In-memory country table with O(1) lookup by DXCC index
#[derive(Debug, Clone, Default)]
pub struct CountryList {
    records: Vec<CountryRecord>,
    by_index: HashMap<u32, usize>,
}

impl CountryList {
    /// Build the table. Continent codes longer than two characters and
    /// duplicate indices are rejected.
    pub fn new(records: Vec<CountryRecord>) -> Result<Self, TableError> {
        let mut by_index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if record.continent.chars().count() > MAX_CONTINENT_LEN {
                return Err(TableError::InvalidEntry(format!(
                    "country {} has continent '{}'",
                    record.dxcc_index, record.continent
                )));
            }
            if by_index.insert(record.dxcc_index, pos).is_some() {
                return Err(TableError::InvalidEntry(format!(
                    "duplicate country index {}",
                    record.dxcc_index
                )));
            }
        }
        Ok(Self { records, by_index })
    }

    /// Parse a JSON array of country records
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let records: Vec<CountryRecord> = serde_json::from_str(json)?;
        let list = Self::new(records)?;
        log::debug!("Loaded {} country records", list.records.len());
        Ok(list)
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CountryTable for CountryList {
    fn record_for(&self, dxcc_index: u32) -> Option<&CountryRecord> {
        self.by_index.get(&dxcc_index).map(|&pos| &self.records[pos])
    }
}
