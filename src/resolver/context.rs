// Contest configuration and published resolution state
//
// The logger reads zone, continent and country out of `ResolutionContext`
// after every lookup. Each caller owns its own context, so two logging
// windows never see each other's results.

use serde::{Deserialize, Serialize};

/// Scoring switches that change what a resolution publishes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContestConfig {
    /// WPX contest: prefixes are multipliers
    pub wpx: bool,
    /// Other prefix-multiplier contests
    pub pfx_mult: bool,
    /// ITU zones are multipliers instead of CQ zones
    pub itu_mult: bool,
}

impl ContestConfig {
    /// Whether the WPX prefix of each call must be extracted
    pub fn needs_prefix(&self) -> bool {
        self.wpx || self.pfx_mult
    }
}

/// State written by `Resolver::resolve_and_publish`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionContext {
    /// CQ zone of the last resolved call, two digits ("05")
    pub cq_zone: String,
    /// ITU zone of the last resolved call, two digits ("08")
    pub itu_zone: String,
    /// Zone used for scoring: ITU zone in ITU-multiplier contests, else CQ
    pub zone_export: String,
    /// Continent code of the resolved country, at most two characters
    pub continent: String,
    /// DXCC index of the resolved country, 0 if none
    pub country_nr: u32,
}

impl ResolutionContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Receives the normalized call in WPX and prefix-multiplier contests.
///
/// What it does with the call (prefix extraction, multiplier bookkeeping)
/// is none of the resolver's business.
pub trait PrefixExtractor {
    fn extract(&mut self, normalized_call: &str);
}

impl<F: FnMut(&str)> PrefixExtractor for F {
    fn extract(&mut self, normalized_call: &str) {
        self(normalized_call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_prefix() {
        assert!(!ContestConfig::default().needs_prefix());
        assert!(ContestConfig { wpx: true, ..Default::default() }.needs_prefix());
        assert!(ContestConfig { pfx_mult: true, ..Default::default() }.needs_prefix());
        assert!(!ContestConfig { itu_mult: true, ..Default::default() }.needs_prefix());
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: ContestConfig = serde_json::from_str(r#"{"itu_mult": true}"#).unwrap();
        assert_eq!(config, ContestConfig { itu_mult: true, ..Default::default() });
    }
}
