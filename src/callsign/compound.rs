// Compound callsign normalization
//
// Decides which part of a call containing '/' carries the country prefix.
// Contest convention, as encoded by the length thresholds below:
//
//   DL1XYZ/PA   -> PA          short trailing part is a country indicator
//   PA/DJ0LN/P  -> PA          short leading part wins over the rest
//   DJ0LN/P     -> DJ0LN       single-char suffix is dropped
//   K2ND/4      -> K4ND        single-digit suffix replaces the call area
//   W1AW/KH6XX  -> KH6XX       long trailing part is taken as the call
//
// These are heuristics, not a callsign grammar. Calls with three or more
// segments are only handled as far as the thresholds reach.

use super::suffix::apply_area_digit;

/// A separator position above this means the leading segment is long enough
/// to be a full call rather than a prefix.
const MIN_ROOT_SEPARATOR: usize = 3;

/// A separator position below this marks the leading segment as a country
/// indicator; everything from the separator on is dropped.
const MAX_INDICATOR_SEPARATOR: usize = 5;

/// Reduce a stripped call to its working form.
///
/// Returns the normalized call and whether the parts were swapped
/// ("abnormal" order, e.g. `DL1XYZ/PA`). Abnormal calls are first looked up
/// verbatim in the exception list before any prefix search.
pub fn normalize_compound(stripped: &str) -> (String, bool) {
    let Some(split) = stripped.find('/') else {
        return (stripped.to_string(), false);
    };

    let (root, indicator) = (&stripped[..split], &stripped[split + 1..]);
    let mut checkcall = stripped.to_string();
    let mut abnormal = false;
    let mut pos = split;

    if indicator.len() < root.len() && indicator.len() > 1 {
        checkcall = format!("{}/{}", indicator, root);
        abnormal = true;
        pos = separator(&checkcall);
    }

    // Trailing segment after a full-length leading call
    let mut trailing = String::new();
    if pos > MIN_ROOT_SEPARATOR {
        trailing = checkcall[pos + 1..].to_string();
        if trailing.len() == 1 {
            checkcall.truncate(pos);
        }
        pos = separator(&checkcall);
    }

    if pos < checkcall.len() && pos < MAX_INDICATOR_SEPARATOR {
        checkcall.truncate(pos); // PA/DJ0LN/P
    }

    let mut chars = trailing.chars();
    match (chars.next(), chars.next()) {
        (Some(area), None) if area.is_ascii_digit() => apply_area_digit(&mut checkcall, area),
        (Some(_), Some(_)) => checkcall = trailing,
        _ => {}
    }

    log::trace!("Normalized {} -> {} (abnormal={})", stripped, checkcall, abnormal);
    (checkcall, abnormal)
}

/// Position of the first '/', or the length of the call if there is none.
fn separator(call: &str) -> usize {
    call.find('/').unwrap_or(call.len())
}
