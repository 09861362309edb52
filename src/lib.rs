//! Loadlines
//!
//! Atomically replaces a collection's contents with records decoded from a
//! JSON Lines fixture file, tolerating malformed lines without aborting the
//! whole load.

pub mod reload;
pub mod settings;
pub mod storage;
pub mod store;

// Re-exports for convenience
pub use reload::{
    BadLine, BulkReloader, ConsoleReporter, LineSource, LoadReport, ReloadError, Reporter,
    SourceError,
};
pub use settings::Settings;
pub use storage::{FixtureFile, ModelSpec, ModelsManifest};
pub use store::{
    Collection, FieldType, FileCollection, Record, Registry, Schema, StoreError, Transaction,
};
