//! Core library for header/detail document splitting.
//!
//! This crate provides:
//! - A line-classification state machine that separates a document into a
//!   header section, a detail column header, and detail lines
//! - Regex-based extraction of named fields from configured header lines
//! - Emission of one output record per detail line, each carrying the
//!   extracted header fields

pub mod error;
pub mod models;
pub mod split;

pub use error::{ConfigError, HdsplitError, RecordError, Result};
pub use models::config::{HeaderExtractor, SplitterConfig};
pub use split::{
    ClassifiedLines, HEADER_SEPARATOR, HeaderDetailSplitter, PatternCache, classify_lines,
};
