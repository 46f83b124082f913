use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::relations::{STANCE_AGAINST, STANCE_IN_FAVOR};

/// Relation a premise holds toward its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationType {
    /// Premise argues against the position.
    Attack,
    /// Premise argues in favor of the position.
    Support,
}

impl RelationType {
    /// Label as written to the `type` field.
    pub const fn as_str(&self) -> &'static str {
        match self {
            RelationType::Attack => "Attack",
            RelationType::Support => "Support",
        }
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How stances outside the known mapping are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StancePolicy {
    /// Emit the premise with no relation type.
    #[default]
    Lenient,
    /// Abort the run.
    Strict,
}

/// Exact lookup of a raw stance label. Unknown labels yield `None`.
pub fn relation_for_stance(stance: &str) -> Option<RelationType> {
    match stance {
        STANCE_AGAINST => Some(RelationType::Attack),
        STANCE_IN_FAVOR => Some(RelationType::Support),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_stances_map_to_relations() {
        assert_eq!(relation_for_stance("against"), Some(RelationType::Attack));
        assert_eq!(
            relation_for_stance("in favor of"),
            Some(RelationType::Support)
        );
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(relation_for_stance("Against"), None);
        assert_eq!(relation_for_stance(" against"), None);
        assert_eq!(relation_for_stance("neutral"), None);
        assert_eq!(relation_for_stance(""), None);
    }

    #[test]
    fn relation_labels_serialize_capitalized() {
        assert_eq!(
            serde_json::to_string(&RelationType::Attack).unwrap(),
            "\"Attack\""
        );
        assert_eq!(RelationType::Support.to_string(), "Support");
    }

    #[test]
    fn lenient_is_default_policy() {
        assert_eq!(StancePolicy::default(), StancePolicy::Lenient);
    }
}
