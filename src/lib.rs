// ctyresolve library
// Callsign normalization and DXCC country/zone resolution for contest logging

pub mod callsign;
pub mod error;
pub mod reference;
pub mod resolver;

pub use error::TableError;
pub use reference::{CountryList, CountryRecord, CountryTable, PrefixEntry, PrefixList, PrefixTable};
pub use resolver::{
    country_for, resolve, ContestConfig, Lookup, PrefixExtractor, Resolution, ResolutionContext,
    Resolver, NO_COUNTRY,
};
