//! Test fixtures for route-guidance.
//!
//! Provides:
//! - Real Las Vegas Strip locations (from OpenStreetMap)
//! - In-memory routing, signal and geocoding services
//! - Builders for straight-line route candidates

#![allow(dead_code)]

pub mod las_vegas_locations;
pub mod services;

pub use las_vegas_locations::*;
pub use services::*;
