//! Argument source interfaces.
//!
//! Ownership model:
//! - `ArgumentSource` yields every record of one split, in file order.
//! - `TsvSource` reads a tab-separated split file from disk.
//! - `InMemorySource` serves prebuilt records (tests and embedding callers).

use std::sync::Arc;

use crate::data::ArgumentRecord;
use crate::errors::CorpusError;
use crate::splits::SplitLabel;
use crate::types::SourceId;

/// Source implementation modules.
pub mod sources;

pub use sources::tsv_source::{TsvSource, TsvSourceConfig};

/// Ingestion-facing source of argument records for one split.
///
/// For a fixed input, `load` must return the same records in the same order.
pub trait ArgumentSource {
    /// Stable source identifier used in logs and errors.
    fn id(&self) -> &str;
    /// Split every record of this source is tagged with.
    fn split(&self) -> SplitLabel;
    /// Load all records, preserving source order.
    fn load(&self) -> Result<Vec<ArgumentRecord>, CorpusError>;
}

/// Source backed by an in-memory record list.
pub struct InMemorySource {
    id: SourceId,
    split: SplitLabel,
    records: Arc<Vec<ArgumentRecord>>,
}

impl InMemorySource {
    /// Create an in-memory source; every record is retagged with `split`.
    pub fn new(id: impl Into<SourceId>, split: SplitLabel, records: Vec<ArgumentRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| ArgumentRecord { split, ..record })
            .collect();
        Self {
            id: id.into(),
            split,
            records: Arc::new(records),
        }
    }
}

impl ArgumentSource for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn split(&self) -> SplitLabel {
        self.split
    }

    fn load(&self) -> Result<Vec<ArgumentRecord>, CorpusError> {
        Ok(self.records.as_ref().clone())
    }
}
