// Callsign normalization
//
// Turns a raw logged callsign into the working form used for prefix lookup:
// power and mobile suffixes are stripped first, then compound calls
// (DL1XYZ/PA, PA/DJ0LN/P, K2ND/4) are reduced to the segment that carries
// the country prefix.

pub mod compound;
pub mod suffix;

pub use compound::normalize_compound;
pub use suffix::{apply_area_digit, is_location_unknown, strip_power_suffix, strip_suffixes};

/// Longest callsign the resolver looks at, in bytes. Anything past this is
/// silently dropped.
pub const MAX_CALL_LEN: usize = 16;

/// Truncate a raw callsign to `MAX_CALL_LEN` bytes.
///
/// Cuts at the last char boundary that fits, so non-ASCII garbage from the
/// input field can never split a character.
pub fn cap_call(raw: &str) -> &str {
    if raw.len() <= MAX_CALL_LEN {
        return raw;
    }
    let mut end = MAX_CALL_LEN;
    while !raw.is_char_boundary(end) {
        end -= 1;
    }
    &raw[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_call_short_untouched() {
        assert_eq!(cap_call("W1AW"), "W1AW");
        assert_eq!(cap_call(""), "");
    }

    #[test]
    fn test_cap_call_truncates_at_16() {
        assert_eq!(cap_call("ABCDEFGHIJKLMNOPQRST"), "ABCDEFGHIJKLMNOP");
        assert_eq!(cap_call("ABCDEFGHIJKLMNOP").len(), 16);
    }

    #[test]
    fn test_cap_call_respects_char_boundary() {
        // 15 ASCII bytes followed by a two-byte char straddling the cap
        let raw = "ABCDEFGHIJKLMNOÄ";
        assert_eq!(cap_call(raw), "ABCDEFGHIJKLMNO");
    }
}
