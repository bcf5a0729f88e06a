//! Train status server.
//!
//! A small web service that answers: "where is train X, and how late is
//! it at station Y?" by querying an upstream train-tracking API.

pub mod config;
pub mod delay;
pub mod domain;
pub mod itinerary;
pub mod upstream;
pub mod web;
