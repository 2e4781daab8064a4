//! File content rendering with line and length limits
//!
//! This module reads a file's bytes, decides text-vs-binary, and produces a
//! line-numbered rendering capped by the configured limits. It never fails:
//! unreadable files render as a single inline error line so one bad file
//! cannot abort a whole run.

use std::path::Path;

/// Marker appended to a line cut at the length limit.
pub const LINE_TRUNCATION_MARKER: &str = "...";

/// How many leading bytes are inspected for binary classification.
const BINARY_SNIFF_LEN: usize = 1024;

/// Rendered content of a single file, consumed immediately by the formatter.
#[derive(Debug, Clone, Default)]
pub struct RenderedContent {
    /// `(line_number, text)` pairs, numbered from 1. Text is already
    /// truncated to the length limit where one applies.
    pub lines: Vec<(usize, String)>,
    /// Exact number of source lines omitted by the per-file line limit.
    pub truncated_lines: usize,
    /// True for binary files; `lines` is empty and the formatter emits a
    /// fixed placeholder instead.
    pub is_binary: bool,
    /// Set when the file could not be read; the inline error line is already
    /// in `lines`, this copy feeds the run's warnings list.
    pub read_error: Option<String>,
}

/// Render a file's content with the given limits (0 = unlimited).
///
/// Read failures become a single `[Error reading file: <kind>]` line rather
/// than an error. The whole file is read in one pass, so the truncated-line
/// count is exact.
pub fn render_content(path: &Path, max_lines: usize, max_line_length: usize) -> RenderedContent {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            return RenderedContent {
                lines: vec![(1, format!("[Error reading file: {}]", e.kind()))],
                truncated_lines: 0,
                is_binary: false,
                read_error: Some(e.kind().to_string()),
            };
        }
    };

    if looks_binary(&bytes) {
        return RenderedContent {
            lines: Vec::new(),
            truncated_lines: 0,
            is_binary: true,
            read_error: None,
        };
    }

    // UTF-8 first; fall back to a lossy decode that substitutes invalid
    // sequences with U+FFFD instead of failing the render.
    let text = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    };

    let all_lines: Vec<&str> = text.lines().collect();
    let total = all_lines.len();
    let keep = if max_lines > 0 {
        total.min(max_lines)
    } else {
        total
    };

    let lines = all_lines[..keep]
        .iter()
        .enumerate()
        .map(|(i, line)| (i + 1, truncate_line(line, max_line_length)))
        .collect();

    RenderedContent {
        lines,
        truncated_lines: total - keep,
        is_binary: false,
        read_error: None,
    }
}

/// Classify a byte buffer as binary from its leading bytes.
///
/// A NUL anywhere in the sniffed prefix is decisive; otherwise a high
/// density of non-whitespace control bytes tips the classification.
fn looks_binary(bytes: &[u8]) -> bool {
    let sniff = &bytes[..bytes.len().min(BINARY_SNIFF_LEN)];
    if sniff.is_empty() {
        return false;
    }
    if sniff.contains(&0) {
        return true;
    }
    let control = sniff
        .iter()
        .filter(|&&b| b < 0x09 || (b > 0x0D && b < 0x20))
        .count();
    control * 8 > sniff.len()
}

/// Cap a line at `max` characters (not bytes), appending the truncation
/// marker. The truncated line still counts as one numbered line.
fn truncate_line(line: &str, max: usize) -> String {
    if max == 0 {
        return line.to_string();
    }
    match line.char_indices().nth(max) {
        Some((byte_idx, _)) => format!("{}{}", &line[..byte_idx], LINE_TRUNCATION_MARKER),
        None => line.to_string(),
    }
}
