//! Delay calculation for a single station visit.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::domain::{minutes_between, parse_timestamp};
use crate::upstream::StationVisit;

/// Compute how late a train is at a stop, in whole minutes.
///
/// Departure times win over arrival times: if both the actual and scheduled
/// departure are known, their difference is used. Otherwise the arrival
/// pair is used. With neither pair complete the delay is 0, since "no
/// data" is normal for stops the train has not reached.
///
/// Minutes are floored, so leaving one second early gives -1.
pub fn compute_delay_minutes(visit: &StationVisit) -> i64 {
    if let Some(delay) = pair_delay(visit.dep.as_deref(), visit.sch_dep.as_deref()) {
        return delay;
    }

    if let Some(delay) = pair_delay(visit.arr.as_deref(), visit.sch_arr.as_deref()) {
        return delay;
    }

    0
}

fn pair_delay(actual: Option<&str>, scheduled: Option<&str>) -> Option<i64> {
    let actual = timestamp(actual?)?;
    let scheduled = timestamp(scheduled?)?;
    Some(minutes_between(scheduled, actual))
}

/// Parse a visit timestamp, treating unreadable values as absent.
fn timestamp(value: &str) -> Option<DateTime<Utc>> {
    match parse_timestamp(value) {
        Ok(t) => t,
        Err(e) => {
            warn!(error = %e, "ignoring unreadable station visit timestamp");
            None
        }
    }
}
