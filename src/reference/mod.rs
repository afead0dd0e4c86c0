// Reference data interfaces - prefix table and DXCC country records
//
// The resolver never owns this data. The surrounding application loads its
// country file however it likes and hands the resolver read-only views
// through the traits below. `PrefixList` and `CountryList` are plain
// in-memory implementations for applications that keep the data as JSON.

pub mod dxcc;
pub mod prefixes;

pub use dxcc::{CountryList, CountryRecord};
pub use prefixes::{find_exact, find_longest_prefix, PrefixEntry, PrefixList};

/// Ordered prefix table. Order matters: it breaks ties in both searches.
pub trait PrefixTable {
    /// Number of entries in the table
    fn count(&self) -> usize;

    /// Entry at position `index`; `index` is always `< count()`
    fn entry_at(&self, index: usize) -> &PrefixEntry;
}

/// Country records keyed by DXCC index.
pub trait CountryTable {
    fn record_for(&self, dxcc_index: u32) -> Option<&CountryRecord>;
}

impl PrefixTable for [PrefixEntry] {
    fn count(&self) -> usize {
        self.len()
    }

    fn entry_at(&self, index: usize) -> &PrefixEntry {
        &self[index]
    }
}

impl PrefixTable for Vec<PrefixEntry> {
    fn count(&self) -> usize {
        self.len()
    }

    fn entry_at(&self, index: usize) -> &PrefixEntry {
        &self[index]
    }
}
