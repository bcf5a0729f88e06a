//! Domain types for the train status service.
//!
//! Request inputs are validated into these types before any upstream call,
//! so code that receives them can trust their shape.

mod station;
mod time;
mod train_number;

pub use station::{InvalidStationCode, StationCode};
pub use time::{TimestampError, minutes_between, parse_timestamp};
pub use train_number::{InvalidTrainNumber, TrainNumber};
