//! Structural checks over an emitted corpus.
//!
//! A valid corpus is a sequence of groups. Each group is one position node
//! followed by at least one premise whose `related_to` names that position.
//! Group ids are strictly ascending and every node carries the same dataset
//! tag.

use std::path::Path;

use crate::data::{CorpusNode, NodeMetadata};
use crate::errors::CorpusError;
use crate::hash::ContentId;
use crate::metrics::{CorpusStats, corpus_stats};
use crate::transport::fs::read_jsonl;
use crate::types::DatasetTag;

/// Outcome of a successful verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifySummary {
    /// Tag shared by every node, `None` for an empty corpus.
    pub dataset_tag: Option<DatasetTag>,
    /// Statistics over the verified nodes.
    pub stats: CorpusStats,
}

/// Check graph invariants over `(line, node)` pairs in file order.
pub fn verify_nodes(nodes: &[(usize, CorpusNode)]) -> Result<VerifySummary, CorpusError> {
    let mut dataset_tag: Option<&str> = None;
    let mut current: Option<(usize, ContentId, usize)> = None;

    for (line, node) in nodes {
        let line = *line;
        match dataset_tag {
            None => dataset_tag = Some(node.dataset.as_str()),
            Some(tag) if tag != node.dataset => {
                return Err(violation(
                    line,
                    format!("dataset tag '{}' differs from '{tag}'", node.dataset),
                ));
            }
            Some(_) => {}
        }

        match &node.metadata {
            NodeMetadata::Position(_) => {
                if let Some((start, previous, premises)) = current {
                    if premises == 0 {
                        return Err(violation(
                            start,
                            format!("position {previous} has no premises"),
                        ));
                    }
                    if node.id <= previous {
                        return Err(violation(
                            line,
                            format!(
                                "position {} is out of order or repeated after {previous}",
                                node.id
                            ),
                        ));
                    }
                }
                current = Some((line, node.id, 0));
            }
            NodeMetadata::Premise(meta) => {
                let Some((_, position, premises)) = current.as_mut() else {
                    return Err(violation(line, "premise precedes any position".to_string()));
                };
                if meta.related_to != *position {
                    return Err(violation(
                        line,
                        format!(
                            "premise of '{}' relates to {} inside the group of {}",
                            meta.argument_id, meta.related_to, position
                        ),
                    ));
                }
                *premises += 1;
            }
        }
    }

    if let Some((start, position, 0)) = current {
        return Err(violation(
            start,
            format!("position {position} has no premises"),
        ));
    }

    let flat: Vec<CorpusNode> = nodes.iter().map(|(_, node)| node.clone()).collect();
    Ok(VerifySummary {
        dataset_tag: dataset_tag.map(str::to_string),
        stats: corpus_stats(&flat),
    })
}

/// Read a JSON-lines corpus from `path` and verify it.
pub fn verify_file(path: &Path) -> Result<VerifySummary, CorpusError> {
    let nodes: Vec<(usize, CorpusNode)> = read_jsonl(path)?;
    verify_nodes(&nodes)
}

fn violation(line: usize, details: String) -> CorpusError {
    CorpusError::InvariantViolation { line, details }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ArgumentRecord;
    use crate::graph::{GraphOptions, build_graph};
    use crate::splits::SplitLabel;

    fn numbered(nodes: Vec<CorpusNode>) -> Vec<(usize, CorpusNode)> {
        nodes
            .into_iter()
            .enumerate()
            .map(|(idx, node)| (idx + 1, node))
            .collect()
    }

    fn built() -> Vec<CorpusNode> {
        let records = vec![
            ArgumentRecord::new("A1", "Ban plastic", "Oceans", "in favor of", SplitLabel::Train),
            ArgumentRecord::new("D2", "Tax sugar", "Health", "against", SplitLabel::Test),
            ArgumentRecord::new("E3", "ban plastic", "Jobs", "against", SplitLabel::Validation),
        ];
        build_graph(&records, &GraphOptions::default()).unwrap()
    }

    fn line_of(err: CorpusError) -> usize {
        match err {
            CorpusError::InvariantViolation { line, .. } => line,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn built_graph_verifies() {
        let summary = verify_nodes(&numbered(built())).unwrap();
        assert_eq!(summary.dataset_tag.as_deref(), Some("touche-23"));
        assert_eq!(summary.stats.positions, 2);
        assert_eq!(summary.stats.premises, 3);
    }

    #[test]
    fn empty_corpus_verifies() {
        let summary = verify_nodes(&[]).unwrap();
        assert_eq!(summary.dataset_tag, None);
        assert_eq!(summary.stats.total_nodes(), 0);
    }

    #[test]
    fn leading_premise_is_rejected() {
        let mut nodes = built();
        nodes.remove(0);
        assert_eq!(line_of(verify_nodes(&numbered(nodes)).unwrap_err()), 1);
    }

    #[test]
    fn repeated_position_is_rejected() {
        let mut nodes = built();
        let first_group: Vec<CorpusNode> = nodes
            .iter()
            .take_while(|n| !n.is_position() || n.id == nodes[0].id)
            .cloned()
            .collect();
        nodes.extend(first_group);
        assert!(verify_nodes(&numbered(nodes)).is_err());
    }

    #[test]
    fn dangling_related_to_is_rejected() {
        let mut nodes = built();
        if let NodeMetadata::Premise(meta) = &mut nodes[1].metadata {
            meta.related_to = ContentId::from_raw(meta.related_to.as_u64() ^ 1);
        }
        assert_eq!(line_of(verify_nodes(&numbered(nodes)).unwrap_err()), 2);
    }

    #[test]
    fn position_without_premises_is_rejected() {
        let mut nodes = built();
        nodes.pop();
        let last_position = nodes.iter().rposition(|n| n.is_position()).unwrap();
        nodes.truncate(last_position + 1);
        assert!(verify_nodes(&numbered(nodes)).is_err());
    }

    #[test]
    fn mixed_dataset_tags_are_rejected() {
        let mut nodes = built();
        let last = nodes.len() - 1;
        nodes[last].dataset = "other".to_string();
        assert_eq!(
            line_of(verify_nodes(&numbered(nodes)).unwrap_err()),
            last + 1
        );
    }
}
