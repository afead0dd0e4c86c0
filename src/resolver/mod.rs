// Callsign resolver
//
// Ties the pieces together:
//   raw call -> suffix stripping -> compound normalization
//            -> prefix search (stripped call, then normalized call)
//            -> country / zone / continent
//
// Unresolvable calls are not errors: the table index is None and the
// country index is 0.

pub mod context;

pub use context::{ContestConfig, PrefixExtractor, ResolutionContext};

use serde::Serialize;

use crate::callsign::{cap_call, normalize_compound, strip_suffixes};
use crate::reference::dxcc::MAX_CONTINENT_LEN;
use crate::reference::{find_exact, find_longest_prefix, CountryTable, PrefixTable};

/// Country index meaning "no country found"
pub const NO_COUNTRY: u32 = 0;

/// Outcome of a prefix table lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Index into the prefix table, None if nothing matched
    pub table_index: Option<usize>,
    /// Working form of the call (e.g. DL1XYZ/PA gives PA)
    pub normalized_call: String,
}

/// Look a raw callsign up in the prefix table.
///
/// Calls whose parts had to be swapped (DL1XYZ/PA) are first checked as a
/// whole against the exception entries; everything else goes straight to
/// the longest-prefix search. If that finds nothing and normalization
/// changed the call, the normalized call gets a second try.
pub fn resolve<P: PrefixTable + ?Sized>(prefixes: &P, raw_call: &str) -> Resolution {
    let stripped = strip_suffixes(cap_call(raw_call));
    let (checkcall, abnormal) = normalize_compound(stripped);

    let mut table_index = if abnormal {
        find_exact(prefixes, stripped)
    } else {
        find_longest_prefix(prefixes, stripped)
    };

    if table_index.is_none() && checkcall != stripped {
        table_index = find_longest_prefix(prefixes, &checkcall);
    }

    log::debug!(
        "Resolved {} (checked as {}): {:?}",
        raw_call,
        checkcall,
        table_index
    );

    Resolution {
        table_index,
        normalized_call: checkcall,
    }
}

/// DXCC country index for a callsign, `NO_COUNTRY` if unknown
pub fn country_for<P: PrefixTable + ?Sized>(prefixes: &P, raw_call: &str) -> u32 {
    match resolve(prefixes, raw_call).table_index {
        Some(index) => prefixes.entry_at(index).dxcc_index,
        None => NO_COUNTRY,
    }
}

/// Full lookup result for display
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Lookup {
    pub call: String,
    pub normalized_call: String,
    pub table_index: Option<usize>,
    pub dxcc: Option<u32>,
    pub country: Option<String>,
    pub continent: Option<String>,
    pub cqz: Option<u8>,
    pub ituz: Option<u8>,
}

/// Resolver bound to a prefix table, a country table and contest settings
#[derive(Debug)]
pub struct Resolver<'a, P: ?Sized, C: ?Sized> {
    prefixes: &'a P,
    countries: &'a C,
    config: ContestConfig,
}

impl<'a, P, C> Resolver<'a, P, C>
where
    P: PrefixTable + ?Sized,
    C: CountryTable + ?Sized,
{
    pub fn new(prefixes: &'a P, countries: &'a C, config: ContestConfig) -> Self {
        Self {
            prefixes,
            countries,
            config,
        }
    }

    pub fn config(&self) -> ContestConfig {
        self.config
    }

    pub fn resolve(&self, raw_call: &str) -> Resolution {
        resolve(self.prefixes, raw_call)
    }

    pub fn country_for(&self, raw_call: &str) -> u32 {
        country_for(self.prefixes, raw_call)
    }

    /// Resolve a call and publish its country data into `ctx`.
    ///
    /// Zones are only overwritten when the call resolves; an unknown call
    /// leaves the previous zone strings in place and sets the country to 0.
    /// The exported zone and the continent are refreshed every time.
    pub fn resolve_and_publish<E>(
        &self,
        ctx: &mut ResolutionContext,
        extractor: &mut E,
        raw_call: &str,
    ) -> u32
    where
        E: PrefixExtractor + ?Sized,
    {
        let resolution = self.resolve(raw_call);

        if self.config.needs_prefix() {
            extractor.extract(&resolution.normalized_call);
        }

        let mut country_nr = NO_COUNTRY;
        if let Some(index) = resolution.table_index {
            let entry = self.prefixes.entry_at(index);
            country_nr = entry.dxcc_index;
            ctx.cq_zone = format!("{:02}", entry.cq_zone);
            ctx.itu_zone = format!("{:02}", entry.itu_zone);
        }

        ctx.zone_export = if self.config.itu_mult {
            ctx.itu_zone.clone()
        } else {
            ctx.cq_zone.clone()
        };

        ctx.country_nr = country_nr;
        ctx.continent = match self.countries.record_for(country_nr) {
            Some(record) => record.continent.chars().take(MAX_CONTINENT_LEN).collect(),
            None => {
                if country_nr != NO_COUNTRY {
                    log::warn!("No country record for DXCC index {}", country_nr);
                }
                String::new()
            }
        };

        country_nr
    }

    /// Resolve a call into a self-contained summary without touching any
    /// published state.
    pub fn lookup(&self, raw_call: &str) -> Lookup {
        let resolution = self.resolve(raw_call);
        let mut lookup = Lookup {
            call: raw_call.to_string(),
            normalized_call: resolution.normalized_call,
            table_index: resolution.table_index,
            ..Default::default()
        };

        if let Some(index) = resolution.table_index {
            let entry = self.prefixes.entry_at(index);
            lookup.dxcc = Some(entry.dxcc_index);
            lookup.cqz = Some(entry.cq_zone);
            lookup.ituz = Some(entry.itu_zone);
            if let Some(record) = self.countries.record_for(entry.dxcc_index) {
                lookup.continent = Some(record.continent.clone());
                lookup.country = record.name.clone();
            }
        }
        lookup
    }
}
