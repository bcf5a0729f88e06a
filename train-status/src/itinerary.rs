//! Itinerary resolution.
//!
//! Given a station and a train number, find the train's identifier in the
//! station listing, fetch that train's detail feed, and locate the visit
//! record for the station in its itinerary. Every lookup is a first-match
//! linear scan; later duplicates upstream are ignored.

use crate::domain::{StationCode, TrainNumber};
use crate::upstream::{StationVisit, TrainRun, UpstreamClient, UpstreamError};

/// Separator between the train number and the run suffix in an identifier.
const TRAIN_ID_SEPARATOR: char = '-';

/// The lookup steps that can come up empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFound {
    /// The station listing has no entry for the code
    #[error("station {0} not found")]
    UnknownStation(StationCode),

    /// The station exists but lists no trains
    #[error("station {0} has no active train data")]
    NoTrainData(StationCode),

    /// None of the station's trains carries the requested number
    #[error("train {train} not found at station {station}")]
    TrainNotAtStation {
        train: TrainNumber,
        station: StationCode,
    },

    /// The detail feed has no run for the matched identifier
    #[error("no detail feed for train {train} (id {train_id})")]
    NoTrainDetail { train: TrainNumber, train_id: String },

    /// The train's itinerary does not call at the station
    #[error("station {station} is not in the active itinerary of train {train}")]
    StationNotInItinerary {
        train: TrainNumber,
        station: StationCode,
    },
}

/// Errors from resolving a train at a station.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// A train run together with its visit record at the requested station.
#[derive(Debug, Clone)]
pub struct ResolvedVisit {
    /// Identifier the train was matched under, e.g. `"123-1"`.
    pub train_id: String,
    /// The train's current run.
    pub run: TrainRun,
    /// The visit record for the requested station.
    pub visit: StationVisit,
}

/// Select the first identifier whose leading segment is exactly `train`.
///
/// The comparison is on the literal digits: `"123-45"` matches `"123"` but
/// not `"1234"` or `"0123"`. An identifier without a separator is compared
/// whole.
pub fn match_train_id<'a, S: AsRef<str>>(ids: &'a [S], train: &TrainNumber) -> Option<&'a str> {
    ids.iter().map(|id| AsRef::<str>::as_ref(id)).find(|id| {
        id.split(TRAIN_ID_SEPARATOR)
            .next()
            .is_some_and(|number| number == train.as_str())
    })
}

/// Select the first visit at `station`.
pub fn find_station_visit<'a>(
    visits: &'a [StationVisit],
    station: &StationCode,
) -> Option<&'a StationVisit> {
    visits.iter().find(|v| v.code == station.as_str())
}

/// Resolve `train` at `station` against the upstream feeds.
///
/// Makes two upstream calls in sequence: the station listing, then the
/// detail feed for the matched train identifier.
pub async fn resolve_station(
    upstream: &UpstreamClient,
    station: &StationCode,
    train: &TrainNumber,
) -> Result<ResolvedVisit, ResolveError> {
    let listing = upstream.fetch_station_listing(station).await?;

    let entry = listing
        .station(station)?
        .ok_or(NotFound::UnknownStation(*station))?;

    let train_ids = entry
        .trains
        .filter(|ids| !ids.is_empty())
        .ok_or(NotFound::NoTrainData(*station))?;

    let train_id = match_train_id(train_ids.as_slice(), train)
        .ok_or_else(|| NotFound::TrainNotAtStation {
            train: train.clone(),
            station: *station,
        })?
        .to_string();

    let detail = upstream.fetch_train_detail(&train_id).await?;

    let run = detail
        .first_run(&train_id)?
        .ok_or_else(|| NotFound::NoTrainDetail {
            train: train.clone(),
            train_id: train_id.clone(),
        })?;

    let visit = find_station_visit(&run.stations, station)
        .cloned()
        .ok_or_else(|| NotFound::StationNotInItinerary {
            train: train.clone(),
            station: *station,
        })?;

    Ok(ResolvedVisit {
        train_id,
        run,
        visit,
    })
}
