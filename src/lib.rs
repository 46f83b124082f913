#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Command-line runners used by the `argcorpus` binary.
pub mod cli;
/// Normalizer configuration and environment resolution.
pub mod config;
/// Centralized constants for dataset layout, columns, and hashing.
pub mod constants;
/// Argument records and output node types.
pub mod data;
/// Position/premise graph construction.
pub mod graph;
/// Content ids and seeded hashing.
pub mod hash;
/// Split concatenation.
pub mod ingestion;
/// Aggregate corpus statistics.
pub mod metrics;
/// End-to-end normalizer driver.
pub mod pipeline;
/// Stance to relation mapping.
pub mod relations;
/// Argument source trait and built-in sources.
pub mod source;
/// Dataset split labels.
pub mod splits;
/// Filesystem transport for split files and JSON lines.
pub mod transport;
/// Shared type aliases.
pub mod types;
/// Text normalization helpers.
pub mod utils;
/// Structural verification of emitted corpora.
pub mod verify;

mod errors;

pub use config::NormalizerConfig;
pub use data::{
    ArgumentRecord, CorpusNode, NodeMetadata, PositionKind, PositionMetadata, PremiseMetadata,
};
pub use errors::CorpusError;
pub use graph::{GraphOptions, build_graph};
pub use hash::{ContentId, content_id};
pub use ingestion::{DynSource, IngestedCorpus, ingest};
pub use metrics::{CorpusStats, corpus_stats};
pub use pipeline::{NormalizeReport, Normalizer};
pub use relations::{RelationType, StancePolicy, relation_for_stance};
pub use source::{ArgumentSource, InMemorySource, TsvSource, TsvSourceConfig};
pub use splits::SplitLabel;
pub use types::{ArgumentId, DatasetTag, SourceId, SubdatasetCode};
pub use utils::{display_text, identity_key};
pub use verify::{VerifySummary, verify_file, verify_nodes};
