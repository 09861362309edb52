//! The atomic wipe-and-reload core
//!
//! One invocation of [`BulkReloader::reload`] replaces a collection's entire
//! contents with the records decoded from a line source, inside a single
//! atomic transaction. Individual bad lines are skipped and reported; every
//! other failure rolls the whole invocation back.

mod reloader;
mod report;
mod reporter;
mod source;

pub use reloader::{BulkReloader, ReloadError};
pub use report::{BadLine, LoadReport};
pub use reporter::{ConsoleReporter, Reporter};
pub use source::{LineSource, SourceError};
