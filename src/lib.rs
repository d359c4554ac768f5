//! Emerging Threats ruleset fetcher
//!
//! Builds the ETOPEN/ETPRO download URL, fetches the bundle and unpacks it
//! into a local directory. Used by the `etsigs` CLI.

pub mod commands;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::commands::fetch::{fetch_rules, fetch_with, FetchSummary};
pub use crate::core::config::{AccessCode, Edition, FetchConfig, Sensor};
pub use crate::error::{FetchError, Result};
