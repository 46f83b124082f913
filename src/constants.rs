use crate::splits::SplitLabel;

/// Constants describing the dataset layout on disk.
pub mod dataset {
    use super::SplitLabel;

    /// Tag written to the `dataset` field of every emitted node.
    pub const DATASET_TAG: &str = "touche-23";
    /// Default dataset directory, relative to the working directory.
    pub const DEFAULT_DATASET_DIR: &str = "data/touche23";
    /// Environment variable consulted when no dataset directory is passed.
    pub const DATASET_DIR_ENV: &str = "ARGCORPUS_DATASET_DIR";
    /// Default training split file name.
    pub const TRAIN_FILENAME: &str = "arguments-training.tsv";
    /// Default validation split file name.
    pub const VALIDATION_FILENAME: &str = "arguments-validation.tsv";
    /// Default test split file name.
    pub const TEST_FILENAME: &str = "arguments-test.tsv";
    /// Default output file name, written inside the dataset directory.
    pub const OUTPUT_FILENAME: &str = "touche23.jsonl";
    /// Order in which split files are concatenated before grouping.
    pub const INGEST_ORDER: [SplitLabel; 3] =
        [SplitLabel::Train, SplitLabel::Test, SplitLabel::Validation];
}

/// Constants used by tabular source parsing.
pub mod columns {
    /// Field delimiter for split files.
    pub const TSV_DELIMITER: u8 = b'\t';
    /// Header of the argument id column.
    pub const COL_ARGUMENT_ID: &str = "Argument ID";
    /// Header of the conclusion column.
    pub const COL_CONCLUSION: &str = "Conclusion";
    /// Header of the premise column.
    pub const COL_PREMISE: &str = "Premise";
    /// Header of the stance column.
    pub const COL_STANCE: &str = "Stance";
    /// Columns every split file must provide.
    pub const REQUIRED_COLUMNS: [&str; 4] =
        [COL_ARGUMENT_ID, COL_CONCLUSION, COL_PREMISE, COL_STANCE];
}

/// Constants used by the stance-to-relation lookup.
pub mod relations {
    /// Stance label that maps to an attack relation.
    pub const STANCE_AGAINST: &str = "against";
    /// Stance label that maps to a support relation.
    pub const STANCE_IN_FAVOR: &str = "in favor of";
}

/// Constants used by content hashing.
pub mod hash {
    /// Seed used for content ids unless overridden.
    pub const DEFAULT_CONTENT_SEED: u64 = 0;
    /// Environment variable consulted when no seed is passed.
    pub const CONTENT_SEED_ENV: &str = "ARGCORPUS_SEED";
    /// Width of the zero-padded hex rendering of a content id.
    pub const CONTENT_ID_HEX_WIDTH: usize = 16;
}

/// Constants used by binary logging setup.
pub mod logging {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub const DEFAULT_LOG_DIRECTIVE: &str = "argcorpus=info";
}
