//! Data model: splitter configuration and record helpers.

pub mod config;
pub mod record;
