//! Configuration structures for the splitter.

use serde::{Deserialize, Serialize};

/// One header extraction rule: binds a header line number and a regex to
/// an output key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderExtractor {
    /// 1-based index into the collected header lines. An index beyond the
    /// header lines of a given document skips the rule for that document.
    pub line_number: usize,

    /// Pattern with at least two capture groups: group 1 is the fallback
    /// output key, group 2 the output value.
    pub regex: String,

    /// Explicit output key. When empty, the text matched by capture
    /// group 1 is used instead.
    #[serde(default)]
    pub key: String,
}

/// Main configuration for the splitter.
///
/// Supplied once at setup and static for the lifetime of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// Slash-separated path of the record field holding the document text.
    pub field_path_to_parse: String,

    /// Copy the original record fields into every output record.
    pub keep_original_fields: bool,

    /// Optional field under which parsed output is nested. When unset,
    /// extracted header fields and the detail line are written at the
    /// record root.
    pub output_field: Option<String>,

    /// Output field name for the detail line itself.
    pub detail_line_field: String,

    /// Header extraction rules, applied in order. Rules writing the same
    /// output key overwrite earlier ones.
    pub header_extractors: Vec<HeaderExtractor>,

    /// Optional cap on the number of header lines. When unset the header
    /// ends at the `-----` separator line.
    pub nof_header_lines: Option<usize>,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            field_path_to_parse: "/text".to_string(),
            keep_original_fields: true,
            output_field: None,
            detail_line_field: "detail".to_string(),
            header_extractors: Vec::new(),
            nof_header_lines: None,
        }
    }
}

impl SplitterConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
