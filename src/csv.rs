//! # CheckSequenceVerify Value Encoding
//!
//! Bitcoin Script numbers are little-endian sign-magnitude. A relative timelock
//! is pushed in its minimal form, with one extra zero byte whenever the top bit
//! of the most significant byte is set, so the value is never read back as
//! negative.
//!
//! ```text
//! 127   -> 7f
//! 128   -> 80 00
//! 14907 -> 3b 3a
//! 58766 -> 8e e5 00
//! ```

use crate::config::csv::{MAX_VALUE, MIN_VALUE};
use crate::error::{RedeemScriptError, RedeemScriptResult};
use bitcoin::script::write_scriptint;
use std::fmt;
use std::str::FromStr;

/// A relative timelock in the closed range `[1, 65535]`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CsvValue(u16);

impl CsvValue {
    pub fn value(self) -> u16 {
        self.0
    }

    /// Minimal signed little-endian encoding for a script push
    pub fn encode(self) -> Vec<u8> {
        let mut buf = [0u8; 8];
        let len = write_scriptint(&mut buf, i64::from(self.0));
        buf[..len].to_vec()
    }
}

impl TryFrom<i64> for CsvValue {
    type Error = RedeemScriptError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
            return Err(RedeemScriptError::csv(value));
        }
        u16::try_from(value)
            .map(CsvValue)
            .map_err(|_| RedeemScriptError::csv(value))
    }
}

impl TryFrom<u32> for CsvValue {
    type Error = RedeemScriptError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl FromStr for CsvValue {
    type Err = RedeemScriptError;

    /// Accepts decimal integers only; fractional or non-numeric text is rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s.trim().parse().map_err(|_| RedeemScriptError::csv(s))?;
        Self::try_from(value)
    }
}

impl fmt::Display for CsvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate a CSV value and return its script-number encoding
pub fn encode_csv(value: i64) -> RedeemScriptResult<Vec<u8>> {
    Ok(CsvValue::try_from(value)?.encode())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        let vectors = [
            (32, "20"),
            (64, "40"),
            (123, "7b"),
            (127, "7f"),
            (128, "8000"),
            (58_766, "8ee500"),
            (51_138, "c2c700"),
            (14_907, "3b3a"),
            (2_149, "6508"),
            (44_175, "8fac00"),
            (52_560, "50cd00"),
            (500, "f401"),
        ];
        for (value, expected) in vectors {
            assert_eq!(hex::encode(encode_csv(value).unwrap()), expected, "csv {}", value);
        }
    }

    #[test]
    fn test_range_edges() {
        assert_eq!(encode_csv(1).unwrap(), vec![0x01]);
        assert_eq!(encode_csv(65_535).unwrap(), vec![0xff, 0xff, 0x00]);
        assert_eq!(encode_csv(32_768).unwrap(), vec![0x00, 0x80, 0x00]);
        assert_eq!(encode_csv(255).unwrap(), vec![0xff, 0x00]);
        assert_eq!(encode_csv(256).unwrap(), vec![0x00, 0x01]);
    }

    #[test]
    fn test_invalid_values() {
        for value in [0, -1, -500, 65_536, i64::MAX, i64::MIN] {
            assert!(
                matches!(encode_csv(value), Err(RedeemScriptError::InvalidCsvValue { .. })),
                "csv {} should fail",
                value
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        assert_eq!("52560".parse::<CsvValue>().unwrap().value(), 52_560);
        for text in ["", "abc", "1.5", "12e3", "0", "-3", "70000"] {
            assert!(text.parse::<CsvValue>().is_err(), "{:?} should fail", text);
        }
    }

    #[test]
    fn test_matches_script_number_push() {
        use bitcoin::script::Builder;

        // push_int uses OP_1..OP_16 for small values, so compare above that
        for value in (17..=65_535i64).step_by(97).chain([127, 128, 32_767, 32_768, 65_535]) {
            let encoded = encode_csv(value).unwrap();
            let pushed = Builder::new().push_int(value).into_script();
            assert_eq!(&pushed.as_bytes()[1..], encoded.as_slice(), "csv {}", value);
        }
    }
}
