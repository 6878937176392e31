//! Shared helpers for sevens-backend integration tests: one-time logging
//! setup and unique room/player identifiers.

pub mod logging;
pub mod unique_helpers;
