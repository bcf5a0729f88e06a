//! Station code types.

use std::fmt;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A valid 3-letter station code.
///
/// Station codes are always stored as 3 uppercase ASCII letters. This type
/// guarantees that any `StationCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use train_status::domain::StationCode;
///
/// let was = StationCode::parse("WAS").unwrap();
/// assert_eq!(was.as_str(), "WAS");
///
/// // Lowercase is rejected by `parse`, but accepted by `parse_normalized`
/// assert!(StationCode::parse("was").is_err());
/// assert_eq!(StationCode::parse_normalized("was").unwrap(), was);
///
/// // Wrong length is rejected
/// assert!(StationCode::parse("WA").is_err());
/// assert!(StationCode::parse("WASH").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationCode([u8; 3]);

impl StationCode {
    /// Parse a station code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidStationCode {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidStationCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(StationCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse a station code in either case, normalizing to uppercase.
    ///
    /// User input arrives in whatever case was typed into the URL.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStationCode> {
        if !s.is_ascii() {
            return Err(InvalidStationCode {
                reason: "must be ASCII letters A-Z",
            });
        }
        Self::parse(&s.to_ascii_uppercase())
    }

    /// Returns the station code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.as_str())
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
