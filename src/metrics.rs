use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::data::{CorpusNode, NodeMetadata};
use crate::hash::ContentId;
use crate::relations::RelationType;
use crate::splits::SplitLabel;
use crate::types::SubdatasetCode;

/// Aggregate counts over an emitted corpus.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    /// Position node lines.
    pub positions: usize,
    /// Premise node lines.
    pub premises: usize,
    /// Premises by original split.
    pub premises_per_split: BTreeMap<SplitLabel, usize>,
    /// Premises by sub-dataset code.
    pub premises_per_subdataset: BTreeMap<SubdatasetCode, usize>,
    /// Premises with an `Attack` relation.
    pub attacks: usize,
    /// Premises with a `Support` relation.
    pub supports: usize,
    /// Premises whose stance had no relation mapping.
    pub unmapped_relations: usize,
    /// Distinct premise ids carried by more than one premise line.
    pub shared_premise_ids: usize,
    /// Largest number of premises attached to one position.
    pub max_premises_per_position: usize,
}

impl CorpusStats {
    /// Total number of node lines.
    pub fn total_nodes(&self) -> usize {
        self.positions + self.premises
    }

    /// Mean premises per position, `0.0` for an empty corpus.
    pub fn mean_premises_per_position(&self) -> f64 {
        if self.positions == 0 {
            0.0
        } else {
            self.premises as f64 / self.positions as f64
        }
    }
}

/// Compute aggregate counts from an emitted node sequence.
pub fn corpus_stats(nodes: &[CorpusNode]) -> CorpusStats {
    let mut stats = CorpusStats::default();
    let mut premise_ids: HashMap<ContentId, usize> = HashMap::new();
    let mut per_position: HashMap<ContentId, usize> = HashMap::new();

    for node in nodes {
        match &node.metadata {
            NodeMetadata::Position(_) => stats.positions += 1,
            NodeMetadata::Premise(meta) => {
                stats.premises += 1;
                *stats.premises_per_split.entry(meta.original_split).or_insert(0) += 1;
                *stats
                    .premises_per_subdataset
                    .entry(meta.subdataset)
                    .or_insert(0) += 1;
                match meta.relation {
                    Some(RelationType::Attack) => stats.attacks += 1,
                    Some(RelationType::Support) => stats.supports += 1,
                    None => stats.unmapped_relations += 1,
                }
                *premise_ids.entry(node.id).or_insert(0) += 1;
                *per_position.entry(meta.related_to).or_insert(0) += 1;
            }
        }
    }

    stats.shared_premise_ids = premise_ids.values().filter(|count| **count > 1).count();
    stats.max_premises_per_position = per_position.values().copied().max().unwrap_or(0);
    stats
}
