// Callsign suffix handling
//
// /QRP only says something about power, so it is dropped before lookup.
// /AM (aeronautical mobile) and /MM (maritime mobile) stations have no
// country and no zone; such calls resolve to nothing.

use regex::Regex;
use std::sync::OnceLock;

const POWER_SUFFIX: &str = "/QRP";

static LOCATION_UNKNOWN: OnceLock<Regex> = OnceLock::new();

fn location_unknown_regex() -> &'static Regex {
    LOCATION_UNKNOWN.get_or_init(|| Regex::new(r"/AM$|/MM$").expect("static regex is valid"))
}

/// True if the call is airborne or maritime mobile (`.../AM`, `.../MM`).
/// Case-sensitive, anchored at the end of the call.
pub fn is_location_unknown(call: &str) -> bool {
    location_unknown_regex().is_match(call)
}

/// Drop a trailing `/QRP`.
///
/// Only the first `/QRP` in the call is considered: `X/QRP/QRP` is left
/// alone because its first occurrence is not at the end.
pub fn strip_power_suffix(call: &str) -> &str {
    match (call.find(POWER_SUFFIX), call.len().checked_sub(POWER_SUFFIX.len())) {
        (Some(found), Some(tail)) if found == tail => &call[..tail],
        _ => call,
    }
}

/// Strip the power suffix, then blank out calls without a known location.
///
/// An empty result means no country can be determined for this call.
pub fn strip_suffixes(call: &str) -> &str {
    let stripped = strip_power_suffix(call);
    if is_location_unknown(stripped) {
        log::debug!("No location for {}, not resolving", call);
        return "";
    }
    stripped
}

/// Replace the call area digit (K2ND/4 -> K4ND).
///
/// Scans backwards from the end and rewrites the first digit found; the
/// first character is never touched. Calls with several digits (LZ1000) get
/// their *last* digit replaced, which is not always the area digit.
pub fn apply_area_digit(call: &mut String, digit: char) {
    let found = call
        .char_indices()
        .rev()
        .take_while(|&(idx, _)| idx > 0)
        .find(|(_, c)| c.is_ascii_digit())
        .map(|(idx, _)| idx);

    if let Some(idx) = found {
        let mut buf = [0u8; 4];
        call.replace_range(idx..idx + 1, digit.encode_utf8(&mut buf));
    }
}
