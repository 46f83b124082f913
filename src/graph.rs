//! Position/premise graph construction.
//!
//! Records are grouped by the content id of their conclusion. Groups are
//! emitted in ascending id order; inside a group the position node comes
//! first, followed by one premise node per record in encounter order.

use std::collections::BTreeMap;

use tracing::warn;

use crate::constants::dataset::DATASET_TAG;
use crate::constants::hash::DEFAULT_CONTENT_SEED;
use crate::data::{
    ArgumentRecord, CorpusNode, NodeMetadata, PositionKind, PositionMetadata, PremiseMetadata,
};
use crate::errors::CorpusError;
use crate::hash::{ContentId, content_id};
use crate::relations::{StancePolicy, relation_for_stance};
use crate::splits::SplitLabel;
use crate::types::{DatasetTag, SubdatasetCode};
use crate::utils::display_text;

/// Settings that shape emitted nodes.
#[derive(Clone, Debug)]
pub struct GraphOptions {
    /// Tag written to every node.
    pub dataset_tag: DatasetTag,
    /// Seed for content ids.
    pub seed: u64,
    /// Handling of stances without a relation mapping.
    pub stance_policy: StancePolicy,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            dataset_tag: DATASET_TAG.to_string(),
            seed: DEFAULT_CONTENT_SEED,
            stance_policy: StancePolicy::default(),
        }
    }
}

/// Group `records` by conclusion and emit the flattened node sequence.
pub fn build_graph(
    records: &[ArgumentRecord],
    options: &GraphOptions,
) -> Result<Vec<CorpusNode>, CorpusError> {
    let subdatasets = subdataset_codes(records)?;
    let mut groups: BTreeMap<ContentId, Vec<usize>> = BTreeMap::new();
    for (idx, record) in records.iter().enumerate() {
        groups
            .entry(content_id(options.seed, &record.conclusion))
            .or_default()
            .push(idx);
    }

    let mut nodes = Vec::with_capacity(groups.len() + records.len());
    let mut unmapped = 0usize;
    for (position_id, members) in &groups {
        let first = &records[members[0]];
        nodes.push(CorpusNode {
            dataset: options.dataset_tag.clone(),
            id: *position_id,
            text: display_text(&first.conclusion),
            metadata: NodeMetadata::Position(PositionMetadata {
                subdataset: subdatasets[members[0]],
                kind: PositionKind::Position,
            }),
        });

        for &idx in members {
            let record = &records[idx];
            let relation = relation_for_stance(&record.stance);
            if relation.is_none() {
                if options.stance_policy == StancePolicy::Strict {
                    return Err(CorpusError::UnmappedStance {
                        argument_id: record.argument_id.clone(),
                        stance: record.stance.clone(),
                    });
                }
                unmapped += 1;
            }
            nodes.push(CorpusNode {
                dataset: options.dataset_tag.clone(),
                id: content_id(options.seed, &record.premise),
                text: display_text(&record.premise),
                metadata: NodeMetadata::Premise(PremiseMetadata {
                    argument_id: record.argument_id.clone(),
                    subdataset: subdatasets[idx],
                    related_to: *position_id,
                    original_split: record.split,
                    relation,
                }),
            });
        }
    }

    if unmapped > 0 {
        warn!(
            "[argcorpus:graph] {} premises have an unmapped stance and no relation type",
            unmapped
        );
    }
    Ok(nodes)
}

/// Sub-dataset code of every record, rejecting empty argument ids.
fn subdataset_codes(records: &[ArgumentRecord]) -> Result<Vec<SubdatasetCode>, CorpusError> {
    let mut seen_per_split: BTreeMap<SplitLabel, usize> = BTreeMap::new();
    records
        .iter()
        .map(|record| {
            let split_row = seen_per_split.entry(record.split).or_insert(0);
            *split_row += 1;
            record
                .subdataset()
                .ok_or(CorpusError::EmptyArgumentId {
                    split: record.split,
                    split_row: *split_row,
                })
        })
        .collect()
}
