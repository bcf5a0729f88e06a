//! Data transfer objects for web responses.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::delay::compute_delay_minutes;
use crate::domain::{StationCode, TrainNumber, parse_timestamp};
use crate::itinerary::ResolvedVisit;

/// Where a train is and how late it is at one station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainStationResponse {
    /// Train number as requested
    pub train_number: String,

    /// Origin station code
    pub origin: String,

    /// Destination station code
    pub destination: String,

    /// Station the visit record was resolved at
    pub current_station: String,

    /// Station as queried (normalized)
    pub queried_station: String,

    /// Delay at this station in whole minutes; negative when early
    pub delay_minutes: i64,

    /// Visit status label from upstream
    pub status: String,

    /// When this information was current
    pub as_of: DateTime<Utc>,
}

impl TrainStationResponse {
    /// Assemble the response for a resolved visit.
    ///
    /// `now` is only used when upstream gives no usable update time for
    /// the run, in which case the response is stamped with the time it
    /// was built rather than the time the data was current.
    pub fn from_resolved(
        train: &TrainNumber,
        station: &StationCode,
        resolved: &ResolvedVisit,
        now: DateTime<Utc>,
    ) -> Self {
        let run = &resolved.run;
        let visit = &resolved.visit;

        let as_of = run
            .updated_at
            .as_deref()
            .and_then(|s| {
                parse_timestamp(s)
                    .inspect_err(|e| warn!(error = %e, "ignoring unreadable updatedAt"))
                    .ok()
                    .flatten()
            })
            .unwrap_or(now);

        Self {
            train_number: train.as_str().to_string(),
            origin: run.orig_code.clone().unwrap_or_default(),
            destination: run.dest_code.clone().unwrap_or_default(),
            current_station: visit.code.clone(),
            queried_station: station.as_str().to_string(),
            delay_minutes: compute_delay_minutes(visit),
            status: visit.status.clone().unwrap_or_default(),
            as_of,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable description of what went wrong
    pub detail: String,
}
