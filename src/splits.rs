use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::dataset::{TEST_FILENAME, TRAIN_FILENAME, VALIDATION_FILENAME};

/// Dataset partition a record was read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitLabel {
    /// Training split.
    Train,
    /// Validation split.
    Validation,
    /// Test split.
    Test,
}

impl SplitLabel {
    /// Label as written to the `original_split` field.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SplitLabel::Train => "train",
            SplitLabel::Validation => "validation",
            SplitLabel::Test => "test",
        }
    }

    /// File name of this split inside the dataset directory.
    pub const fn default_filename(&self) -> &'static str {
        match self {
            SplitLabel::Train => TRAIN_FILENAME,
            SplitLabel::Validation => VALIDATION_FILENAME,
            SplitLabel::Test => TEST_FILENAME,
        }
    }
}

impl fmt::Display for SplitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SplitLabel {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "train" => Ok(SplitLabel::Train),
            "validation" => Ok(SplitLabel::Validation),
            "test" => Ok(SplitLabel::Test),
            other => Err(format!("unknown split label '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&SplitLabel::Validation).unwrap(),
            "\"validation\""
        );
        let parsed: SplitLabel = serde_json::from_str("\"test\"").unwrap();
        assert_eq!(parsed, SplitLabel::Test);
    }

    #[test]
    fn labels_round_trip_through_strings() {
        for label in [SplitLabel::Train, SplitLabel::Validation, SplitLabel::Test] {
            assert_eq!(label.as_str().parse::<SplitLabel>(), Ok(label));
            assert_eq!(label.to_string(), label.as_str());
        }
        assert!("dev".parse::<SplitLabel>().is_err());
    }

    #[test]
    fn default_filenames_are_distinct() {
        assert_eq!(SplitLabel::Train.default_filename(), "arguments-training.tsv");
        assert_ne!(
            SplitLabel::Validation.default_filename(),
            SplitLabel::Test.default_filename()
        );
    }
}
