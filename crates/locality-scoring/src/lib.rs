//! Locality, walkability, and amenities scoring for property listings.
//!
//! The [`scoring`] module holds the engine; [`config`], [`telemetry`], and [`error`] carry the
//! runtime plumbing shared with the API service.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
