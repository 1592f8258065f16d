//! Record helpers: field path lookup and diagnostic rendering.
//!
//! Records are plain `serde_json::Value` objects. Fields are addressed by
//! slash-separated paths in the style of pipeline field locators, e.g.
//! `/text` or `/payload/body`.

use serde_json::Value;

/// Maximum length of a value rendering in error messages.
const MAX_RENDERED: usize = 256;

/// Look up a field in a record by slash-separated path.
///
/// `/text` selects the `text` key of the root object; numeric segments
/// index into arrays, so `/lines/0` selects the first element of `lines`.
/// Empty segments are skipped, making `text` and `/text` equivalent.
pub fn get_field<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = record;
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Structural type name of a JSON value, used in error diagnostics.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}

/// Render a value for error diagnostics, truncated so a large document
/// does not flood the error message.
pub fn render_value(value: &Value) -> String {
    let rendered = value.to_string();
    if rendered.len() <= MAX_RENDERED {
        return rendered;
    }

    let mut end = MAX_RENDERED;
    while !rendered.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &rendered[..end])
}
