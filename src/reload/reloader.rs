//! The atomic wipe-and-reload procedure with per-record fault isolation

use super::report::{self, BadLine, LoadReport};
use super::reporter::Reporter;
use super::source::{LineSource, SourceError};
use crate::store::{Collection, Record, StoreError, Transaction};
use thiserror::Error;

/// Failure of a whole reload invocation.
///
/// Individual bad lines never surface here; they are absorbed into the
/// [`LoadReport`].
#[derive(Debug, Error)]
pub enum ReloadError {
    /// The line source could not be located. Raised before any mutation,
    /// so the collection is untouched.
    #[error(transparent)]
    SourceNotFound(SourceError),

    /// The wipe, an insert, or the commit failed in a way that is not
    /// attributable to a single line. The transaction was rolled back.
    #[error("transaction was not committed due to: {0}")]
    TransactionFault(Box<dyn std::error::Error + Send + Sync>),
}

fn fault(error: impl std::error::Error + Send + Sync + 'static) -> ReloadError {
    ReloadError::TransactionFault(Box::new(error))
}

/// Orchestrates the wipe-and-reload of one collection from one line source.
///
/// The whole invocation runs inside a single atomic transaction: either the
/// wipe and every accepted insert become durable together, or none of them
/// do. Lines that fail to decode, or decode but are rejected by the store,
/// are skipped and reported without aborting the load.
pub struct BulkReloader<R: Reporter> {
    reporter: R,
}

impl<R: Reporter> BulkReloader<R> {
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Atomically replace `collection`'s contents with the records decoded
    /// from `source`.
    ///
    /// # Errors
    /// [`ReloadError::SourceNotFound`] if the source cannot be located
    /// (no mutation performed); [`ReloadError::TransactionFault`] for any
    /// failure beyond a single bad line (transaction rolled back).
    pub fn reload<C, S>(
        &mut self,
        collection: &mut C,
        source: &S,
    ) -> Result<LoadReport, ReloadError>
    where
        C: Collection,
        S: LineSource,
    {
        // The availability check precedes the wipe: a missing source must
        // leave the collection exactly as it was.
        let lines = source.open().map_err(|error| match error {
            SourceError::NotFound { .. } => ReloadError::SourceNotFound(error),
            SourceError::Io(_) => fault(error),
        })?;

        let label = collection.label().to_string();
        let source_label = source.label();
        log::debug!("Reloading {} from {}", label, source_label);

        // Dropping the transaction on any early return rolls it back.
        let mut txn = collection.begin().map_err(fault)?;
        let mut loadreport = LoadReport::new(&label);

        let prior = txn.count();
        if prior > 0 {
            txn.delete_all();
            loadreport.wiped = prior;
            self.reporter.write(&report::wipe_message(&label, prior));
        }

        for (index, line) in lines.enumerate() {
            let line = line.map_err(fault)?;
            let number = index + 1;
            match Self::load_line(&mut txn, &line) {
                Ok(true) => loadreport.loaded += 1,
                Ok(false) => {
                    self.reporter
                        .write(&report::bad_line_message(&source_label, number, &line));
                    loadreport.bad_lines.push(BadLine {
                        number,
                        content: line,
                    });
                }
                Err(error) => return Err(fault(error)),
            }
        }

        self.reporter
            .write(&report::created_message(loadreport.loaded, &label));
        if !loadreport.bad_lines.is_empty() {
            self.reporter
                .write(&report::skip_trailer(loadreport.skipped()));
        }

        txn.commit().map_err(fault)?;
        log::info!(
            "Committed {} record(s) to {} ({} skipped)",
            loadreport.loaded,
            label,
            loadreport.skipped()
        );

        Ok(loadreport)
    }

    /// Decode one line and hand it to the store.
    ///
    /// `Ok(true)` = loaded, `Ok(false)` = skipped. A line that decodes to
    /// something other than a JSON object, or that the store rejects, is a
    /// skip; any other store failure is transaction-fatal.
    fn load_line<T: Transaction>(txn: &mut T, line: &str) -> Result<bool, StoreError> {
        let record: Record = match serde_json::from_str(line) {
            Ok(record) => record,
            Err(_) => return Ok(false),
        };
        match txn.insert(record) {
            Ok(()) => Ok(true),
            Err(StoreError::Rejected { .. }) => Ok(false),
            Err(error) => Err(error),
        }
    }
}
