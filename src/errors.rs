use std::io;

use thiserror::Error;

use crate::splits::SplitLabel;
use crate::types::{ArgumentId, SourceId};

/// Error type for ingestion, graph building, and serialization failures.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// A split file could not be opened.
    #[error("source '{source_id}' is unavailable: {reason}")]
    SourceUnavailable {
        /// Failing source.
        source_id: SourceId,
        /// Underlying failure.
        reason: String,
    },
    /// A split file header lacks a required column.
    #[error("source '{source_id}' is missing required column '{column}'")]
    MissingColumn {
        /// Failing source.
        source_id: SourceId,
        /// Header that was not found.
        column: String,
    },
    /// A split file row cannot be turned into a record.
    #[error("source '{source_id}' row {row} is malformed: {details}")]
    MalformedRecord {
        /// Failing source.
        source_id: SourceId,
        /// 1-based line number in the source file, header included.
        row: usize,
        /// What is wrong with the row.
        details: String,
    },
    /// A record handed to graph building has no argument id.
    #[error("{split} record {split_row} has an empty argument id")]
    EmptyArgumentId {
        /// Split of the offending record.
        split: SplitLabel,
        /// 1-based position among the input records of `split`.
        split_row: usize,
    },
    /// A stance has no relation mapping under the strict policy.
    #[error("argument '{argument_id}' has unmapped stance '{stance}'")]
    UnmappedStance {
        /// Argument carrying the stance.
        argument_id: ArgumentId,
        /// Raw stance label.
        stance: String,
    },
    /// An emitted corpus breaks a graph invariant or cannot be parsed.
    #[error("corpus graph invariant violated at line {line}: {details}")]
    InvariantViolation {
        /// 1-based line in the corpus file.
        line: usize,
        /// Violated invariant.
        details: String,
    },
    /// Filesystem failure.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// TSV parsing failure.
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// JSON encoding failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Configuration(String),
}
