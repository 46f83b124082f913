use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use crate::config::NormalizerConfig;
use crate::data::CorpusNode;
use crate::errors::CorpusError;
use crate::graph::build_graph;
use crate::ingestion::{DynSource, IngestedCorpus, ingest};
use crate::metrics::{CorpusStats, corpus_stats};
use crate::transport::fs::write_jsonl;

/// Summary of one normalizer run.
#[derive(Clone, Debug)]
pub struct NormalizeReport {
    /// File the corpus was written to.
    pub output: PathBuf,
    /// Number of input rows across all sources.
    pub input_rows: usize,
    /// Number of JSON lines written.
    pub lines_written: usize,
    /// Statistics over the written nodes.
    pub stats: CorpusStats,
}

/// Drives ingestion, grouping and serialization for one dataset.
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    /// Create a normalizer after validating `config`.
    pub fn new(config: NormalizerConfig) -> Result<Self, CorpusError> {
        Ok(Self {
            config: config.validated()?,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Run against the configured split files.
    pub fn run(&self) -> Result<NormalizeReport, CorpusError> {
        let sources = self.config.split_sources();
        self.run_with_sources(&sources)
    }

    /// Run against caller-provided sources, concatenated in slice order.
    pub fn run_with_sources(&self, sources: &[DynSource]) -> Result<NormalizeReport, CorpusError> {
        let started = Instant::now();
        let corpus = ingest(sources)?;
        let nodes = self.build(&corpus)?;

        let output = self.config.output_path();
        let lines_written = write_jsonl(&output, &nodes)?;
        let stats = corpus_stats(&nodes);

        info!(
            "[argcorpus:pipeline] wrote {} nodes ({} positions, {} premises) to {} in {:.2}s",
            lines_written,
            stats.positions,
            stats.premises,
            output.display(),
            started.elapsed().as_secs_f64()
        );
        info!("[argcorpus:pipeline] {}", run_summary(&corpus, &stats));

        Ok(NormalizeReport {
            output,
            input_rows: corpus.len(),
            lines_written,
            stats,
        })
    }

    /// Build the node sequence without writing it.
    pub fn build(&self, corpus: &IngestedCorpus) -> Result<Vec<CorpusNode>, CorpusError> {
        build_graph(&corpus.records, &self.config.graph_options())
    }
}

/// One-line breakdown of input rows and emitted premises.
fn run_summary(corpus: &IngestedCorpus, stats: &CorpusStats) -> String {
    let rows = corpus
        .rows_per_source
        .iter()
        .map(|(source, count)| format!("{source}={count}"))
        .collect::<Vec<_>>()
        .join(", ");
    let splits = stats
        .premises_per_split
        .iter()
        .map(|(split, count)| format!("{split}={count}"))
        .collect::<Vec<_>>()
        .join(", ");
    let subdatasets = stats
        .premises_per_subdataset
        .iter()
        .map(|(code, count)| format!("{code}={count}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "rows per source [{rows}]; premises per split [{splits}]; per subdataset [{subdatasets}]; \
         attacks={} supports={} unmapped={} shared premise ids={}",
        stats.attacks, stats.supports, stats.unmapped_relations, stats.shared_premise_ids
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ArgumentRecord;
    use crate::relations::StancePolicy;
    use crate::source::InMemorySource;
    use crate::splits::SplitLabel;
    use tempfile::tempdir;

    fn sources() -> Vec<DynSource> {
        vec![
            Box::new(InMemorySource::new(
                "train",
                SplitLabel::Train,
                vec![ArgumentRecord::new(
                    "A01",
                    "We should ban plastic",
                    "Plastic harms oceans",
                    "in favor of",
                    SplitLabel::Train,
                )],
            )),
            Box::new(InMemorySource::new(
                "test",
                SplitLabel::Test,
                vec![ArgumentRecord::new(
                    "D07",
                    "we should ban plastic",
                    "It is convenient",
                    "against",
                    SplitLabel::Test,
                )],
            )),
        ]
    }

    #[test]
    fn run_with_sources_writes_report() {
        let temp = tempdir().unwrap();
        let output = temp.path().join("out").join("corpus.jsonl");
        let normalizer =
            Normalizer::new(NormalizerConfig::new(temp.path()).with_output(&output)).unwrap();

        let report = normalizer.run_with_sources(&sources()).unwrap();

        assert_eq!(report.output, output);
        assert_eq!(report.input_rows, 2);
        assert_eq!(report.lines_written, 3);
        assert_eq!(report.stats.positions, 1);
        assert_eq!(report.stats.premises, 2);
        let body = std::fs::read_to_string(&output).unwrap();
        assert_eq!(body.lines().count(), 3);
    }

    #[test]
    fn run_summary_lists_sources_splits_and_subdatasets() {
        let corpus = ingest(&sources()).unwrap();
        let nodes = build_graph(&corpus.records, &Default::default()).unwrap();
        let summary = run_summary(&corpus, &corpus_stats(&nodes));

        assert_eq!(
            summary,
            "rows per source [train=1, test=1]; premises per split [train=1, test=1]; \
             per subdataset [A=1, D=1]; attacks=1 supports=1 unmapped=0 shared premise ids=0"
        );
    }

    #[test]
    fn empty_argument_id_from_memory_source_is_rejected() {
        let temp = tempdir().unwrap();
        let normalizer = Normalizer::new(
            NormalizerConfig::new(temp.path()).with_output(temp.path().join("corpus.jsonl")),
        )
        .unwrap();
        let rows: Vec<DynSource> = vec![Box::new(InMemorySource::new(
            "validation",
            SplitLabel::Validation,
            vec![
                ArgumentRecord::new("E1", "c", "p", "against", SplitLabel::Validation),
                ArgumentRecord::new("", "c", "p", "against", SplitLabel::Validation),
            ],
        ))];

        let err = normalizer.run_with_sources(&rows).unwrap_err();
        assert!(matches!(
            err,
            CorpusError::EmptyArgumentId { split: SplitLabel::Validation, split_row: 2 }
        ));
    }

    #[test]
    fn strict_policy_aborts_before_writing() {
        let temp = tempdir().unwrap();
        let output = temp.path().join("corpus.jsonl");
        let normalizer = Normalizer::new(
            NormalizerConfig::new(temp.path())
                .with_output(&output)
                .with_stance_policy(StancePolicy::Strict),
        )
        .unwrap();
        let bad: Vec<DynSource> = vec![Box::new(InMemorySource::new(
            "train",
            SplitLabel::Train,
            vec![ArgumentRecord::new("A1", "c", "p", "unsure", SplitLabel::Train)],
        ))];

        let err = normalizer.run_with_sources(&bad).unwrap_err();

        assert!(matches!(err, CorpusError::UnmappedStance { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = NormalizerConfig::default().with_ingest_order(Vec::new());
        assert!(matches!(
            Normalizer::new(config),
            Err(CorpusError::Configuration(_))
        ));
    }
}
