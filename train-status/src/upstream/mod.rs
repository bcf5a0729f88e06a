//! Upstream train-tracking API client.
//!
//! The upstream exposes two JSON feeds:
//! - `/v3/stations/{CODE}`: station code → station entry with its train ids
//! - `/v3/trains/{ID}`: train id → list of runs (normally one)
//!
//! The same API is served from more than one host. Hosts are tried in a
//! fixed order and the first JSON object returned wins.

mod client;
mod error;
#[cfg(test)]
pub(crate) mod mock;
mod types;

pub use client::{JsonObject, UpstreamClient, UpstreamConfig, UpstreamHost};
pub use error::UpstreamError;
pub use types::{StationEntry, StationListing, StationVisit, TrainDetail, TrainRun};
