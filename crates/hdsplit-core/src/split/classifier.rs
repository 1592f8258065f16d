//! Line classification state machine.
//!
//! Walks the lines of one document in a single pass, assigning each to
//! the header section, the detail-section column header, or the detail
//! section. Transitions only move forward within a document.

use tracing::debug;

/// Literal line that terminates the header section. The separator itself
/// is consumed, not stored.
pub const HEADER_SEPARATOR: &str = "-----";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    /// Collecting header lines.
    WithinHeader,
    /// Header done; the next line is the detail column header label.
    AwaitingDetailHeader,
    /// Every remaining line is a detail line.
    InDetail,
}

/// The lines of one document, classified.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ClassifiedLines<'a> {
    /// Header lines in input order.
    pub header_lines: Vec<&'a str>,
    /// Detail lines in input order; each emits one output record.
    pub detail_lines: Vec<&'a str>,
    /// Column header label consumed from the first detail-section line.
    /// Kept for diagnostics, never emitted as a field.
    pub column_header: Option<&'a str>,
}

/// Classify the lines of a document.
///
/// Lines are split on line feeds and empty lines are dropped; carriage
/// returns are not special-cased, so a CR before an interior line feed
/// stays part of its line.
///
/// With `nof_header_lines` unset the header runs until the `-----`
/// separator; a document without a separator is all header and produces
/// no detail lines. With it set, the line after the cap is handed to the
/// next state and becomes the detail column header.
pub fn classify_lines(document: &str, nof_header_lines: Option<usize>) -> ClassifiedLines<'_> {
    let mut classified = ClassifiedLines::default();
    let mut state = LineState::WithinHeader;

    for line in document.split('\n').filter(|l| !l.is_empty()) {
        // A capped header hands the boundary line straight to the next
        // state, so a single line may be visited twice.
        loop {
            match state {
                LineState::WithinHeader => {
                    if line == HEADER_SEPARATOR {
                        state = LineState::AwaitingDetailHeader;
                    } else if nof_header_lines
                        .is_some_and(|max| classified.header_lines.len() >= max)
                    {
                        state = LineState::AwaitingDetailHeader;
                        continue;
                    } else {
                        classified.header_lines.push(line);
                    }
                }
                LineState::AwaitingDetailHeader => {
                    classified.column_header = Some(line);
                    state = LineState::InDetail;
                }
                LineState::InDetail => {
                    classified.detail_lines.push(line);
                }
            }
            break;
        }
    }

    debug!(
        "classified document: {} header lines, {} detail lines",
        classified.header_lines.len(),
        classified.detail_lines.len()
    );

    classified
}
