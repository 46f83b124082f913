use indexmap::IndexMap;
use tracing::{debug, info};

use crate::data::ArgumentRecord;
use crate::errors::CorpusError;
use crate::source::ArgumentSource;
use crate::types::SourceId;

/// Boxed source used by the pipeline and CLI.
pub type DynSource = Box<dyn ArgumentSource + 'static>;

/// Concatenated records of every source, in source order.
#[derive(Clone, Debug, Default)]
pub struct IngestedCorpus {
    /// All records; rows of earlier sources come first.
    pub records: Vec<ArgumentRecord>,
    /// Row count per source id, in ingestion order.
    pub rows_per_source: IndexMap<SourceId, usize>,
}

impl IngestedCorpus {
    /// Total number of ingested rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no rows were ingested.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Load every source in order and concatenate the rows.
///
/// Row order inside each source is preserved. The first failing source
/// aborts ingestion.
pub fn ingest(sources: &[DynSource]) -> Result<IngestedCorpus, CorpusError> {
    let mut corpus = IngestedCorpus::default();
    for source in sources {
        let records = source.load()?;
        debug_assert!(records.iter().all(|record| record.split == source.split()));
        info!(
            "[argcorpus:ingest] source '{}' ({}) contributed {} rows",
            source.id(),
            source.split(),
            records.len()
        );
        *corpus
            .rows_per_source
            .entry(source.id().to_string())
            .or_insert(0) += records.len();
        corpus.records.extend(records);
    }
    debug!(
        "[argcorpus:ingest] {} rows from {} sources",
        corpus.len(),
        sources.len()
    );
    Ok(corpus)
}
