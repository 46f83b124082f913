use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::constants::columns::{
    COL_ARGUMENT_ID, COL_CONCLUSION, COL_PREMISE, COL_STANCE, TSV_DELIMITER,
};
use crate::data::ArgumentRecord;
use crate::errors::CorpusError;
use crate::source::ArgumentSource;
use crate::splits::SplitLabel;
use crate::transport::fs::open_reader;
use crate::types::SourceId;

/// Configuration for a tab-separated split file.
#[derive(Clone, Debug)]
pub struct TsvSourceConfig {
    /// Stable source identifier used in logs and errors.
    pub source_id: SourceId,
    /// Path of the split file.
    pub path: PathBuf,
    /// Split assigned to every row of the file.
    pub split: SplitLabel,
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Whether fields starting with `"` are parsed as quoted.
    pub quoting: bool,
}

impl TsvSourceConfig {
    /// Create a config for `path`; the source id defaults to the split label.
    pub fn new(path: impl Into<PathBuf>, split: SplitLabel) -> Self {
        Self {
            source_id: split.as_str().to_string(),
            path: path.into(),
            split,
            delimiter: TSV_DELIMITER,
            quoting: true,
        }
    }

    /// Override the source identifier.
    pub fn with_source_id(mut self, source_id: impl Into<SourceId>) -> Self {
        self.source_id = source_id.into();
        self
    }

    /// Override the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enable or disable quoted-field parsing.
    pub fn with_quoting(mut self, quoting: bool) -> Self {
        self.quoting = quoting;
        self
    }
}

/// Positions of the required columns within a header row.
#[derive(Clone, Copy, Debug)]
struct ColumnLayout {
    argument_id: usize,
    conclusion: usize,
    premise: usize,
    stance: usize,
}

impl ColumnLayout {
    fn from_headers(source_id: &str, headers: &StringRecord) -> Result<Self, CorpusError> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|header| header.trim() == column)
                .ok_or_else(|| CorpusError::MissingColumn {
                    source_id: source_id.to_string(),
                    column: column.to_string(),
                })
        };
        Ok(Self {
            argument_id: find(COL_ARGUMENT_ID)?,
            conclusion: find(COL_CONCLUSION)?,
            premise: find(COL_PREMISE)?,
            stance: find(COL_STANCE)?,
        })
    }
}

/// Split file source backed by a tab-separated file with a header row.
pub struct TsvSource {
    config: TsvSourceConfig,
}

impl TsvSource {
    /// Create a TSV source from configuration.
    pub fn new(config: TsvSourceConfig) -> Self {
        Self { config }
    }

    /// Path of the underlying split file.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    fn build_record(
        &self,
        layout: ColumnLayout,
        row: usize,
        record: &StringRecord,
    ) -> Result<ArgumentRecord, CorpusError> {
        let field = |idx: usize, column: &str| {
            record
                .get(idx)
                .ok_or_else(|| CorpusError::MalformedRecord {
                    source_id: self.config.source_id.clone(),
                    row,
                    details: format!("missing value for column '{column}'"),
                })
        };
        let argument_id = field(layout.argument_id, COL_ARGUMENT_ID)?.trim();
        if argument_id.is_empty() {
            return Err(CorpusError::MalformedRecord {
                source_id: self.config.source_id.clone(),
                row,
                details: "empty argument id".to_string(),
            });
        }
        Ok(ArgumentRecord::new(
            argument_id,
            field(layout.conclusion, COL_CONCLUSION)?,
            field(layout.premise, COL_PREMISE)?,
            field(layout.stance, COL_STANCE)?,
            self.config.split,
        ))
    }
}

impl ArgumentSource for TsvSource {
    fn id(&self) -> &str {
        &self.config.source_id
    }

    fn split(&self) -> SplitLabel {
        self.config.split
    }

    fn load(&self) -> Result<Vec<ArgumentRecord>, CorpusError> {
        let reader = open_reader(&self.config.source_id, &self.config.path)?;
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .quoting(self.config.quoting)
            .has_headers(true)
            .from_reader(reader);

        let layout = ColumnLayout::from_headers(&self.config.source_id, csv_reader.headers()?)?;

        let mut records = Vec::new();
        let mut row = StringRecord::new();
        while csv_reader.read_record(&mut row)? {
            // Header occupies line 1.
            let line = row
                .position()
                .map(|pos| pos.line() as usize)
                .unwrap_or(records.len() + 2);
            records.push(self.build_record(layout, line, &row)?);
        }

        debug!(
            "[argcorpus:source] loaded {} rows from {} (split={})",
            records.len(),
            self.config.path.display(),
            self.config.split
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const HEADER: &str = "Argument ID\tConclusion\tStance\tPremise\n";

    #[test]
    fn reads_rows_in_file_order_with_split_tag() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("arguments-training.tsv");
        std::fs::write(
            &path,
            format!(
                "{HEADER}A01\tWe should ban plastic\tin favor of\tPlastic harms oceans\n\
                 D02\tWe should ban plastic\tagainst\tPlastic is cheap\n"
            ),
        )
        .unwrap();

        let source = TsvSource::new(TsvSourceConfig::new(&path, SplitLabel::Train));
        let records = source.load().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].argument_id, "A01");
        assert_eq!(records[0].premise, "Plastic harms oceans");
        assert_eq!(records[0].stance, "in favor of");
        assert_eq!(records[1].argument_id, "D02");
        assert!(records.iter().all(|r| r.split == SplitLabel::Train));
    }

    #[test]
    fn ignores_extra_columns() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("split.tsv");
        std::fs::write(
            &path,
            "Usage\tArgument ID\tConclusion\tStance\tPremise\n\
             x\tE07\tClaim\tagainst\tReason\n",
        )
        .unwrap();

        let records = TsvSource::new(TsvSourceConfig::new(&path, SplitLabel::Test))
            .load()
            .unwrap();
        assert_eq!(records[0].argument_id, "E07");
        assert_eq!(records[0].conclusion, "Claim");
    }

    #[test]
    fn missing_column_is_reported() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("split.tsv");
        std::fs::write(&path, "Argument ID\tConclusion\tPremise\nA1\tc\tp\n").unwrap();

        let err = TsvSource::new(TsvSourceConfig::new(&path, SplitLabel::Train))
            .load()
            .unwrap_err();
        match err {
            CorpusError::MissingColumn { source_id, column } => {
                assert_eq!(source_id, "train");
                assert_eq!(column, "Stance");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_argument_id_is_malformed() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("split.tsv");
        std::fs::write(&path, format!("{HEADER}\tc\tagainst\tp\n")).unwrap();

        let err = TsvSource::new(
            TsvSourceConfig::new(&path, SplitLabel::Validation).with_source_id("dev"),
        )
        .load()
        .unwrap_err();
        assert!(matches!(
            err,
            CorpusError::MalformedRecord { ref source_id, row: 2, .. } if source_id == "dev"
        ));
    }

    #[test]
    fn missing_file_is_unavailable() {
        let temp = tempdir().unwrap();
        let err = TsvSource::new(TsvSourceConfig::new(
            temp.path().join("absent.tsv"),
            SplitLabel::Test,
        ))
        .load()
        .unwrap_err();
        assert!(matches!(err, CorpusError::SourceUnavailable { .. }));
    }
}
