// Prefix table entries and the two prefix searches
//
// Exact search is used for full-call exceptions (e.g. a listed
// "DL1XYZ/PA"); longest-prefix search is the general rule. Both are linear
// scans in table order, so the first of several equal candidates wins.

use serde::{Deserialize, Serialize};

use super::PrefixTable;
use crate::error::TableError;

/// One row of the prefix table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixEntry {
    /// Prefix or full exception call (e.g. "DL", "KH6", "DL1XYZ/PA")
    pub prefix: String,
    /// DXCC country index this prefix maps to
    pub dxcc_index: u32,
    pub cq_zone: u8,
    pub itu_zone: u8,
}

impl PrefixEntry {
    pub fn new(prefix: impl Into<String>, dxcc_index: u32, cq_zone: u8, itu_zone: u8) -> Self {
        Self {
            prefix: prefix.into(),
            dxcc_index,
            cq_zone,
            itu_zone,
        }
    }
}

/// Search for an entry whose prefix equals `call` exactly.
pub fn find_exact<T: PrefixTable + ?Sized>(table: &T, call: &str) -> Option<usize> {
    (0..table.count()).find(|&i| table.entry_at(i).prefix == call)
}

/// Search for the longest prefix of `call` in the table.
///
/// Only entries starting with the same character as `call` are considered.
/// A candidate must be strictly longer than the current best to replace it.
pub fn find_longest_prefix<T: PrefixTable + ?Sized>(table: &T, call: &str) -> Option<usize> {
    let first = *call.as_bytes().first()?;
    let mut best_len = 0;
    let mut best = None;

    for i in 0..table.count() {
        let prefix = table.entry_at(i).prefix.as_str();
        if prefix.as_bytes().first() != Some(&first) {
            continue;
        }
        if prefix.len() <= best_len {
            continue;
        }
        if call.starts_with(prefix) {
            best_len = prefix.len();
            best = Some(i);
        }
    }
    best
}

/// In-memory prefix table, kept in load order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PrefixList {
    entries: Vec<PrefixEntry>,
}

impl PrefixList {
    /// Build a table, rejecting entries with an empty prefix.
    pub fn new(entries: Vec<PrefixEntry>) -> Result<Self, TableError> {
        if let Some(pos) = entries.iter().position(|e| e.prefix.is_empty()) {
            return Err(TableError::InvalidEntry(format!("prefix entry {} has an empty prefix", pos)));
        }
        Ok(Self { entries })
    }

    /// Parse a JSON array of prefix entries
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let entries: Vec<PrefixEntry> = serde_json::from_str(json)?;
        let list = Self::new(entries)?;
        log::debug!("Loaded {} prefix entries", list.entries.len());
        Ok(list)
    }

    pub fn entries(&self) -> &[PrefixEntry] {
        &self.entries
    }

    /// All prefixes mapping to a given DXCC index
    pub fn prefixes_for(&self, dxcc_index: u32) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.dxcc_index == dxcc_index)
            .map(|e| e.prefix.as_str())
            .collect()
    }
}

impl PrefixTable for PrefixList {
    fn count(&self) -> usize {
        self.entries.len()
    }

    fn entry_at(&self, index: usize) -> &PrefixEntry {
        &self.entries[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn table() -> Vec<PrefixEntry> {
        vec![
            PrefixEntry::new("K", 291, 5, 8),
            PrefixEntry::new("KH6", 110, 31, 61),
            PrefixEntry::new("DL", 230, 14, 28),
            PrefixEntry::new("DL1XYZ/PA", 263, 14, 27),
            PrefixEntry::new("KH", 291, 5, 8),
            PrefixEntry::new("KH7", 110, 31, 61),
            PrefixEntry::new("KH6", 999, 1, 1),
        ]
    }

    #[test]
    fn test_find_exact() {
        let t = table();
        assert_eq!(find_exact(&t, "DL1XYZ/PA"), Some(3));
        assert_eq!(find_exact(&t, "DL"), Some(2));
        assert_eq!(find_exact(&t, "DL1XYZ"), None);
        assert_eq!(find_exact(&t, ""), None);
    }

    #[test]
    fn test_find_exact_first_duplicate_wins() {
        assert_eq!(find_exact(&table(), "KH6"), Some(1));
    }

    #[test]
    fn test_find_longest_prefix() {
        let t = table();
        assert_eq!(find_longest_prefix(&t, "W1AW"), None);
        assert_eq!(find_longest_prefix(&t, "K2ND"), Some(0));
        assert_eq!(find_longest_prefix(&t, "KH6ABC"), Some(1));
        assert_eq!(find_longest_prefix(&t, "KH0ABC"), Some(4));
        assert_eq!(find_longest_prefix(&t, "DL1ABC"), Some(2));
        assert_eq!(find_longest_prefix(&t, "DL1XYZ/PA"), Some(3));
    }

    #[test]
    fn test_find_longest_prefix_tie_goes_to_first() {
        // Both KH6 rows match with length 3; the earlier row wins
        assert_eq!(find_longest_prefix(&table(), "KH6XX"), Some(1));
    }

    #[test]
    fn test_find_longest_prefix_empty_call() {
        assert_eq!(find_longest_prefix(&table(), ""), None);
        let empty: Vec<PrefixEntry> = Vec::new();
        assert_eq!(find_longest_prefix(&empty, "K2ND"), None);
    }

    #[test]
    fn test_prefix_list_rejects_empty_prefix() {
        let err = PrefixList::new(vec![PrefixEntry::new("", 1, 1, 1)]).unwrap_err();
        assert!(matches!(err, TableError::InvalidEntry(_)));
    }

    #[test]
    fn test_prefix_list_from_json() {
        let json = r#"[
            {"prefix": "DL", "dxcc_index": 230, "cq_zone": 14, "itu_zone": 28},
            {"prefix": "PA", "dxcc_index": 263, "cq_zone": 14, "itu_zone": 27}
        ]"#;
        let list = PrefixList::from_json(json).unwrap();
        assert_eq!(list.count(), 2);
        assert_eq!(list.entry_at(1).prefix, "PA");
        assert_eq!(list.prefixes_for(230), vec!["DL"]);
        assert_eq!(find_longest_prefix(&list, "PA3ABC"), Some(1));
    }

    #[test]
    fn test_prefix_list_bad_json() {
        assert!(matches!(PrefixList::from_json("{"), Err(TableError::Json(_))));
    }

    proptest! {
        #[test]
        fn prop_find_exact_finds_every_unique_prefix(
            prefixes in prop::collection::hash_set("[A-Z0-9/]{1,8}", 1..40)
        ) {
            let entries: Vec<PrefixEntry> = prefixes
                .into_iter()
                .enumerate()
                .map(|(i, p)| PrefixEntry::new(p, i as u32, 1, 1))
                .collect();
            for (i, e) in entries.iter().enumerate() {
                prop_assert_eq!(find_exact(&entries, &e.prefix), Some(i));
            }
        }

        #[test]
        fn prop_longest_prefix_is_a_prefix_of_call(
            prefixes in prop::collection::vec("[A-D][A-D0-9]{0,3}", 0..30),
            call in "[A-D][A-D0-9]{0,7}"
        ) {
            let entries: Vec<PrefixEntry> = prefixes
                .iter()
                .map(|p| PrefixEntry::new(p.clone(), 1, 1, 1))
                .collect();
            let longest = entries
                .iter()
                .filter(|e| call.starts_with(e.prefix.as_str()))
                .map(|e| e.prefix.len())
                .max();
            match find_longest_prefix(&entries, &call) {
                Some(i) => {
                    prop_assert!(call.starts_with(entries[i].prefix.as_str()));
                    prop_assert_eq!(Some(entries[i].prefix.len()), longest);
                    // first entry of that length wins
                    let first = entries
                        .iter()
                        .position(|e| e.prefix.len() == entries[i].prefix.len()
                            && call.starts_with(e.prefix.as_str()));
                    prop_assert_eq!(first, Some(i));
                }
                None => prop_assert_eq!(longest, None),
            }
        }
    }
}
