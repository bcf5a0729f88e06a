//! Upstream API response DTOs.
//!
//! Both feeds are JSON objects keyed by the thing that was asked for
//! (station code or train identifier). The wrappers here pull out the
//! requested entry and decode only the fields this service reads. Fields
//! are `Option` because the feed omits what it does not know yet.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

use crate::domain::StationCode;

use super::client::JsonObject;
use super::error::UpstreamError;

/// Response from `/v3/stations/{CODE}`.
#[derive(Debug, Clone)]
pub struct StationListing(JsonObject);

impl StationListing {
    /// Wrap a decoded station listing body.
    pub fn new(object: JsonObject) -> Self {
        Self(object)
    }

    /// Look up the entry for a station.
    ///
    /// Returns `Ok(None)` when the listing has no (or a `null`) entry for
    /// the code.
    pub fn station(&self, code: &StationCode) -> Result<Option<StationEntry>, UpstreamError> {
        match self.0.get(code.as_str()) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => StationEntry::deserialize(value)
                .map(Some)
                .map_err(|e| UpstreamError::Payload {
                    message: format!("station {code}: {e}"),
                }),
        }
    }
}

/// One station in the listing feed.
#[derive(Debug, Clone, Deserialize)]
pub struct StationEntry {
    /// Human-readable station name.
    pub name: Option<String>,

    /// Station code as reported by upstream.
    pub code: Option<String>,

    /// Identifiers of trains currently associated with the station,
    /// e.g. `"123-1"`.
    pub trains: Option<Vec<String>>,
}

/// Response from `/v3/trains/{ID}`.
#[derive(Debug, Clone)]
pub struct TrainDetail(JsonObject);

impl TrainDetail {
    /// Wrap a decoded train detail body.
    pub fn new(object: JsonObject) -> Self {
        Self(object)
    }

    /// The first run listed under a train identifier.
    ///
    /// Only the first list entry is decoded; later runs are never read, so
    /// a malformed one cannot fail the lookup. Returns `Ok(None)` when the
    /// identifier is absent, `null`, or maps to an empty list.
    pub fn first_run(&self, train_id: &str) -> Result<Option<TrainRun>, UpstreamError> {
        let payload_error = |message: String| UpstreamError::Payload {
            message: format!("train {train_id}: {message}"),
        };

        let runs = match self.0.get(train_id) {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Array(runs)) => runs,
            Some(other) => {
                return Err(payload_error(format!("expected a list of runs, got {other}")));
            }
        };

        match runs.first() {
            None => Ok(None),
            Some(run) => TrainRun::deserialize(run)
                .map(Some)
                .map_err(|e| payload_error(e.to_string())),
        }
    }
}

/// One run of a train, from the detail feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainRun {
    /// Train number label as upstream reports it.
    #[serde(default, deserialize_with = "string_or_number")]
    pub train_num: Option<String>,

    /// Composite train identifier, e.g. `"123-1"`.
    #[serde(rename = "trainID")]
    pub train_id: Option<String>,

    /// Route name, e.g. "Northeast Regional".
    pub route_name: Option<String>,

    /// Origin station code.
    pub orig_code: Option<String>,

    /// Destination station code.
    pub dest_code: Option<String>,

    /// When upstream last updated this run (ISO 8601).
    pub updated_at: Option<String>,

    /// Calling points in itinerary order. Stops that fail to decode are
    /// dropped.
    #[serde(default, deserialize_with = "lenient_visits")]
    pub stations: Vec<StationVisit>,
}

/// One stop in a train's itinerary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationVisit {
    /// Station code; empty when upstream sends none.
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,

    /// Status label, e.g. "Departed", "Enroute", "Station".
    pub status: Option<String>,

    /// Actual (or estimated) arrival time.
    pub arr: Option<String>,

    /// Actual (or estimated) departure time.
    pub dep: Option<String>,

    /// Scheduled arrival time.
    pub sch_arr: Option<String>,

    /// Scheduled departure time.
    pub sch_dep: Option<String>,
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode an itinerary, skipping stops that do not decode.
fn lenient_visits<'de, D>(deserializer: D) -> Result<Vec<StationVisit>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();

    Ok(values
        .into_iter()
        .filter_map(|value| {
            StationVisit::deserialize(value)
                .inspect_err(|e| warn!(error = %e, "skipping undecodable itinerary stop"))
                .ok()
        })
        .collect())
}

/// Accept a label sent either as a JSON string or a bare number.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}
