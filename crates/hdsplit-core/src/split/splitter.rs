//! Header/detail document splitter.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ConfigError, RecordError};
use crate::models::config::SplitterConfig;
use crate::models::record::{get_field, render_value, type_name};

use super::classifier::classify_lines;
use super::pattern::PatternCache;

/// Splits one "header + detail" document into output records.
///
/// Construction precompiles every configured extractor pattern, so a
/// misconfigured regex fails setup rather than the first document. After
/// construction the splitter is immutable; documents are processed one at
/// a time with no state carried between calls, and the splitter can be
/// shared across threads by the host.
#[derive(Debug)]
pub struct HeaderDetailSplitter {
    config: SplitterConfig,
    patterns: PatternCache,
}

impl HeaderDetailSplitter {
    /// Create a splitter, eagerly compiling all extractor patterns.
    pub fn new(config: SplitterConfig) -> Result<Self, ConfigError> {
        let patterns = PatternCache::precompile(&config.header_extractors)?;
        Ok(Self { config, patterns })
    }

    /// Borrow the configuration.
    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// Split the document carried by `record`.
    ///
    /// Returns one output record per detail line, in detail-line order.
    /// A record without the designated field is skipped (empty output, no
    /// error). A record or field with an incompatible type is rejected
    /// with [`RecordError::InvalidInputType`]; short or malformed
    /// documents degrade to fewer fields or fewer records instead.
    pub fn split_record(&self, record: &Value) -> Result<Vec<Value>, RecordError> {
        if self.config.keep_original_fields && !record.is_object() {
            return Err(RecordError::InvalidInputType {
                type_name: type_name(record).to_string(),
                value: render_value(record),
                record: render_value(record),
            });
        }

        let Some(field) = get_field(record, &self.config.field_path_to_parse) else {
            debug!(
                "record has no field at {}, skipping",
                self.config.field_path_to_parse
            );
            return Ok(Vec::new());
        };

        let Value::String(document) = field else {
            return Err(RecordError::InvalidInputType {
                type_name: type_name(field).to_string(),
                value: render_value(field),
                record: render_value(record),
            });
        };

        let base = if self.config.keep_original_fields {
            // type-checked above
            record.as_object().cloned().unwrap_or_default()
        } else {
            Map::new()
        };

        Ok(self.split_document(document, &base))
    }

    /// Split a bare document with no enclosing record.
    pub fn split_text(&self, document: &str) -> Vec<Value> {
        self.split_document(document, &Map::new())
    }

    fn split_document(&self, document: &str, base: &Map<String, Value>) -> Vec<Value> {
        let classified = classify_lines(document.trim(), self.config.nof_header_lines);
        let header_fields = self.extract_header_fields(&classified.header_lines);

        classified
            .detail_lines
            .iter()
            .map(|detail| {
                let mut parsed = header_fields.clone();
                // written last so it wins a collision with an extracted key
                parsed.insert(
                    self.config.detail_line_field.clone(),
                    Value::String((*detail).to_string()),
                );

                let mut record = base.clone();
                match &self.config.output_field {
                    Some(field) => {
                        record.insert(field.clone(), Value::Object(parsed));
                    }
                    None => record.extend(parsed),
                }
                Value::Object(record)
            })
            .collect()
    }

    /// Run every extractor against its header line, in configured order.
    ///
    /// Out-of-range line numbers and non-matching patterns are skipped
    /// silently; rules writing the same key overwrite earlier ones.
    fn extract_header_fields(&self, header_lines: &[&str]) -> Map<String, Value> {
        let mut fields = Map::new();

        for extractor in &self.config.header_extractors {
            let Some(header) = extractor
                .line_number
                .checked_sub(1)
                .and_then(|idx| header_lines.get(idx))
            else {
                debug!(
                    "extractor line {} out of range ({} header lines), skipping",
                    extractor.line_number,
                    header_lines.len()
                );
                continue;
            };

            // every configured pattern was compiled in `new`
            let Some(pattern) = self.patterns.get(&extractor.regex) else {
                continue;
            };

            let Some(captures) = pattern.captures(header) else {
                debug!("pattern {} did not match header line", extractor.regex);
                continue;
            };

            let key = if extractor.key.is_empty() {
                captures.get(1).map(|m| m.as_str())
            } else {
                Some(extractor.key.as_str())
            };

            if let (Some(key), Some(value)) = (key, captures.get(2)) {
                fields.insert(key.to_string(), Value::String(value.as_str().to_string()));
            }
        }

        fields
    }
}
