//! Reporter seam for human-readable report text

/// Append-only sink for report text.
///
/// Each `write` call appends the message followed by a newline, so messages
/// that end in `\n` themselves produce a blank separator line.
pub trait Reporter {
    fn write(&mut self, text: &str);
}

/// Reporter that prints to stdout.
///
/// Log output goes to stderr via `env_logger`, so report text stays
/// machine-readable on stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn write(&mut self, text: &str) {
        println!("{text}");
    }
}

// Buffer reporter, mainly for tests
impl Reporter for String {
    fn write(&mut self, text: &str) {
        self.push_str(text);
        self.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_reporter_appends_newline() {
        let mut buffer = String::new();
        buffer.write("first");
        buffer.write("second\n");
        assert_eq!(buffer, "first\nsecond\n\n");
    }
}
