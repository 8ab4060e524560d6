//! Decoding of ns-3 time attributes.
//!
//! FlowMonitor serializes `ns3::Time` values as a signed nanosecond count
//! with a unit suffix, e.g. `"+950000000ns"`, `"+2.001e+10ns"` or `"-5ns"`.

use std::num::ParseFloatError;

/// Sign marker written in front of non-negative values.
const SIGN: char = '+';

/// Unit suffix for nanoseconds.
const UNIT: &str = "ns";

/// Value used when a time attribute is absent.
pub const ZERO_NANOS: &str = "+0ns";

/// Parse a FlowMonitor time string into a nanosecond count.
///
/// Strips surrounding whitespace, one leading `+` and one trailing `ns`,
/// then parses the remainder as an `f64`. Both strips are no-ops when the
/// marker is absent, so `"42"`, `"+42"`, `"42ns"` and `"+42ns"` all yield
/// `42.0`.
pub fn parse_nanos(s: &str) -> Result<f64, ParseFloatError> {
    let s = s.trim();
    let s = s.strip_prefix(SIGN).unwrap_or(s);
    let s = s.strip_suffix(UNIT).unwrap_or(s);
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_signed_with_unit() {
        assert_eq!(parse_nanos("+950000000ns").unwrap(), 950_000_000.0);
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(parse_nanos("+2.001e+10ns").unwrap(), 2.001e10);
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(parse_nanos("-5ns").unwrap(), -5.0);
    }

    #[test]
    fn test_strip_is_idempotent() {
        for s in ["42", "+42", "42ns", "+42ns", " +42ns "] {
            assert_eq!(parse_nanos(s).unwrap(), 42.0, "input {s:?}");
        }
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(parse_nanos(ZERO_NANOS).unwrap(), 0.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_nanos("+1.5sns").is_err());
        assert!(parse_nanos("").is_err());
        assert!(parse_nanos("+ns").is_err());
        assert!(parse_nanos("10ms").is_err());
    }
}
