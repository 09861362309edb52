//! Load reports and their exact wording
//!
//! Downstream tooling matches the report text verbatim, so the message
//! builders live in one place and are pinned by tests.

/// A line that failed to decode or was rejected by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadLine {
    /// 1-based line number within the source.
    pub number: usize,
    /// The raw line text, kept verbatim for manual inspection.
    pub content: String,
}

/// Summary of one reload invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Human-readable collection label, e.g. `fruits.Love`.
    pub label: String,
    /// Number of pre-existing records wiped (0 when the collection was empty).
    pub wiped: usize,
    /// Number of lines that decoded and were accepted by the store.
    pub loaded: usize,
    /// Skipped lines in line-number order.
    pub bad_lines: Vec<BadLine>,
}

impl LoadReport {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            wiped: 0,
            loaded: 0,
            bad_lines: Vec::new(),
        }
    }

    /// Number of lines skipped.
    pub fn skipped(&self) -> usize {
        self.bad_lines.len()
    }
}

pub(crate) fn wipe_message(label: &str, deleted: usize) -> String {
    format!("Clearing the database of {label} objects.\n{deleted} objects deleted.\n")
}

pub(crate) fn bad_line_message(source: &str, number: usize, content: &str) -> String {
    format!(
        "Bad payload in fixture file at {source}:\n---- Line no.: {number}\n---- Content : {content}\n"
    )
}

pub(crate) fn created_message(loaded: usize, label: &str) -> String {
    format!("Created: {loaded} objects of the model {label}")
}

pub(crate) fn skip_trailer(skipped: usize) -> String {
    format!(
        "Encountered {skipped} bad lines in the fixture file.\n\
         Please find rich info about the bad lines in the trace above."
    )
}
