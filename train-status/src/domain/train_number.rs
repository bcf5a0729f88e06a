//! Train number type.

use std::fmt;

/// Maximum number of digits in a train number.
const MAX_DIGITS: usize = 5;

/// Error returned when parsing an invalid train number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid train number: {reason}")]
pub struct InvalidTrainNumber {
    reason: &'static str,
}

/// A validated train number: 1 to 5 ASCII digits.
///
/// The number is kept as text rather than an integer. Upstream train
/// identifiers are matched on their literal digits, so `"023"` and `"23"`
/// are different trains.
///
/// # Examples
///
/// ```
/// use train_status::domain::TrainNumber;
///
/// let n = TrainNumber::parse("123").unwrap();
/// assert_eq!(n.as_str(), "123");
///
/// assert!(TrainNumber::parse("").is_err());
/// assert!(TrainNumber::parse("123456").is_err());
/// assert!(TrainNumber::parse("12a").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TrainNumber(String);

impl TrainNumber {
    /// Parse a train number from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidTrainNumber> {
        if s.is_empty() || s.len() > MAX_DIGITS {
            return Err(InvalidTrainNumber {
                reason: "must be 1 to 5 digits",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidTrainNumber {
                reason: "must contain only digits 0-9",
            });
        }

        Ok(TrainNumber(s.to_string()))
    }

    /// Returns the train number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TrainNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainNumber({})", self.0)
    }
}

impl fmt::Display for TrainNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
