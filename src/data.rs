use serde::{Deserialize, Serialize};

use crate::hash::ContentId;
use crate::relations::RelationType;
use crate::splits::SplitLabel;

pub use crate::types::{ArgumentId, DatasetTag, SubdatasetCode};

/// One raw row of a split file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentRecord {
    /// Dataset-assigned id; its first character is the sub-dataset code.
    pub argument_id: ArgumentId,
    /// Claim the row argues for or against.
    pub conclusion: String,
    /// Argument text of the row.
    pub premise: String,
    /// Raw stance label (`against` / `in favor of`).
    pub stance: String,
    /// Split the row was read from.
    pub split: SplitLabel,
}

impl ArgumentRecord {
    /// Build a record from raw column values.
    pub fn new(
        argument_id: impl Into<ArgumentId>,
        conclusion: impl Into<String>,
        premise: impl Into<String>,
        stance: impl Into<String>,
        split: SplitLabel,
    ) -> Self {
        Self {
            argument_id: argument_id.into(),
            conclusion: conclusion.into(),
            premise: premise.into(),
            stance: stance.into(),
            split,
        }
    }

    /// Sub-dataset code, or `None` when the argument id is empty.
    pub fn subdataset(&self) -> Option<SubdatasetCode> {
        self.argument_id.chars().next()
    }
}

/// One line of the output corpus.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusNode {
    /// Dataset tag shared by every node of a corpus.
    pub dataset: DatasetTag,
    /// Content id of the node text.
    pub id: ContentId,
    /// Display form of the text.
    pub text: String,
    /// Position or premise metadata.
    pub metadata: NodeMetadata,
}

impl CorpusNode {
    /// Whether this node is a position (conclusion) node.
    pub fn is_position(&self) -> bool {
        matches!(self.metadata, NodeMetadata::Position(_))
    }

    /// Premise metadata, when this node is a premise.
    pub fn as_premise(&self) -> Option<&PremiseMetadata> {
        match &self.metadata {
            NodeMetadata::Premise(meta) => Some(meta),
            NodeMetadata::Position(_) => None,
        }
    }
}

/// Node-kind specific metadata.
///
/// Premise is listed first so untagged decoding does not mistake a premise
/// for a position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeMetadata {
    /// Metadata of a premise node.
    Premise(PremiseMetadata),
    /// Metadata of a position node.
    Position(PositionMetadata),
}

/// Marker serialized as the `type` of position nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionKind {
    /// Serialized as `"Position"`.
    #[default]
    Position,
}

/// Metadata of a position (conclusion) node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PositionMetadata {
    /// Sub-dataset code of the first row in the group.
    pub subdataset: SubdatasetCode,
    /// Always [`PositionKind::Position`].
    #[serde(rename = "type")]
    pub kind: PositionKind,
}

/// Metadata of a premise node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiseMetadata {
    /// Argument id of the source row.
    pub argument_id: ArgumentId,
    /// First character of `argument_id`.
    pub subdataset: SubdatasetCode,
    /// Id of the owning position node.
    pub related_to: ContentId,
    /// Split the source row came from.
    pub original_split: SplitLabel,
    /// `None` when the stance had no known mapping.
    #[serde(rename = "type")]
    pub relation: Option<RelationType>,
}
