use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use crate::constants::dataset::{
    DATASET_DIR_ENV, DATASET_TAG, DEFAULT_DATASET_DIR, INGEST_ORDER, OUTPUT_FILENAME,
};
use crate::constants::hash::{CONTENT_SEED_ENV, DEFAULT_CONTENT_SEED};
use crate::errors::CorpusError;
use crate::graph::GraphOptions;
use crate::ingestion::DynSource;
use crate::relations::StancePolicy;
use crate::source::{TsvSource, TsvSourceConfig};
use crate::splits::SplitLabel;
use crate::types::DatasetTag;

/// Top-level normalizer configuration.
#[derive(Clone, Debug)]
pub struct NormalizerConfig {
    /// Directory holding the split files.
    pub dataset_dir: PathBuf,
    /// Per-split file name overrides, relative to `dataset_dir`.
    pub split_files: HashMap<SplitLabel, PathBuf>,
    /// Output path; defaults to `touche23.jsonl` inside `dataset_dir`.
    pub output: Option<PathBuf>,
    /// Tag written on every node.
    pub dataset_tag: DatasetTag,
    /// Seed for content ids.
    pub seed: u64,
    /// Handling of stances without a relation mapping.
    pub stance_policy: StancePolicy,
    /// Order in which split files are concatenated.
    pub ingest_order: Vec<SplitLabel>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            dataset_dir: PathBuf::from(DEFAULT_DATASET_DIR),
            split_files: HashMap::new(),
            output: None,
            dataset_tag: DATASET_TAG.to_string(),
            seed: DEFAULT_CONTENT_SEED,
            stance_policy: StancePolicy::default(),
            ingest_order: INGEST_ORDER.to_vec(),
        }
    }
}

impl NormalizerConfig {
    /// Create a config rooted at `dataset_dir` with default settings.
    pub fn new(dataset_dir: impl Into<PathBuf>) -> Self {
        Self {
            dataset_dir: dataset_dir.into(),
            ..Self::default()
        }
    }

    /// Override the file used for `split`.
    pub fn with_split_file(mut self, split: SplitLabel, file: impl Into<PathBuf>) -> Self {
        self.split_files.insert(split, file.into());
        self
    }

    /// Override the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Override the dataset tag.
    pub fn with_dataset_tag(mut self, dataset_tag: impl Into<DatasetTag>) -> Self {
        self.dataset_tag = dataset_tag.into();
        self
    }

    /// Override the content id seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Override the stance policy.
    pub fn with_stance_policy(mut self, stance_policy: StancePolicy) -> Self {
        self.stance_policy = stance_policy;
        self
    }

    /// Override the split concatenation order.
    pub fn with_ingest_order(mut self, ingest_order: Vec<SplitLabel>) -> Self {
        self.ingest_order = ingest_order;
        self
    }

    /// Validate that the ingest order names each split at most once.
    pub fn validated(self) -> Result<Self, CorpusError> {
        if self.ingest_order.is_empty() {
            return Err(CorpusError::Configuration(
                "ingest order must name at least one split".to_string(),
            ));
        }
        let mut seen = self.ingest_order.clone();
        seen.sort();
        seen.dedup();
        if seen.len() != self.ingest_order.len() {
            return Err(CorpusError::Configuration(
                "ingest order names a split more than once".to_string(),
            ));
        }
        if self.dataset_tag.trim().is_empty() {
            return Err(CorpusError::Configuration(
                "dataset tag must not be empty".to_string(),
            ));
        }
        Ok(self)
    }

    /// Path of the file read for `split`.
    pub fn split_path(&self, split: SplitLabel) -> PathBuf {
        let file = self
            .split_files
            .get(&split)
            .map(PathBuf::as_path)
            .unwrap_or_else(|| Path::new(split.default_filename()));
        self.dataset_dir.join(file)
    }

    /// Path the corpus is written to.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.dataset_dir.join(OUTPUT_FILENAME))
    }

    /// Graph options derived from this config.
    pub fn graph_options(&self) -> GraphOptions {
        GraphOptions {
            dataset_tag: self.dataset_tag.clone(),
            seed: self.seed,
            stance_policy: self.stance_policy,
        }
    }

    /// One TSV source per split, in ingest order.
    pub fn split_sources(&self) -> Vec<DynSource> {
        self.ingest_order
            .iter()
            .map(|split| {
                let path = self.split_path(*split);
                Box::new(TsvSource::new(
                    TsvSourceConfig::new(&path, *split)
                        .with_source_id(path.display().to_string()),
                )) as DynSource
            })
            .collect()
    }
}

/// Resolve the dataset directory: explicit value, then environment, then default.
pub fn resolve_dataset_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| env_value(DATASET_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_DIR))
}

/// Resolve the content seed: explicit value, then environment, then default.
pub fn resolve_seed(explicit: Option<u64>) -> Result<u64, CorpusError> {
    if let Some(seed) = explicit {
        return Ok(seed);
    }
    match env_value(CONTENT_SEED_ENV) {
        Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
            CorpusError::Configuration(format!(
                "{CONTENT_SEED_ENV}='{raw}' is not an unsigned integer"
            ))
        }),
        None => Ok(DEFAULT_CONTENT_SEED),
    }
}

fn env_value(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
