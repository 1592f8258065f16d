//! Header/detail splitting: pattern cache, line classifier, splitter.

mod classifier;
mod pattern;
mod splitter;

pub use classifier::{ClassifiedLines, HEADER_SEPARATOR, classify_lines};
pub use pattern::PatternCache;
pub use splitter::HeaderDetailSplitter;
