use serde::{Deserialize, Serialize};

use super::{NodeRecord, QcTest};

/// A flagged node: identifier and position. Serialized as the tuple
/// `(node_id, x, y, z)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(i64, f64, f64, f64)", into = "(i64, f64, f64, f64)")]
pub struct NodeRef {
    pub node_id: i64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl NodeRef {
    /// Placeholder offender for checks that flag the whole tree or file
    /// rather than a particular node.
    pub const SYNTHETIC: NodeRef = NodeRef {
        node_id: 1,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
}

impl From<&NodeRecord> for NodeRef {
    fn from(record: &NodeRecord) -> Self {
        Self {
            node_id: record.node_id,
            x: record.x,
            y: record.y,
            z: record.z,
        }
    }
}

impl From<(i64, f64, f64, f64)> for NodeRef {
    fn from((node_id, x, y, z): (i64, f64, f64, f64)) -> Self {
        Self { node_id, x, y, z }
    }
}

impl From<NodeRef> for (i64, f64, f64, f64) {
    fn from(node: NodeRef) -> Self {
        (node.node_id, node.x, node.y, node.z)
    }
}

/// What a single rule concluded about a tree.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleOutcome {
    Pass,
    Fail(Vec<NodeRef>),
    /// The rule's precondition was not met, so it could not be evaluated.
    Inconclusive { reason: String },
}

impl RuleOutcome {
    /// `Fail` with an empty offender list collapses to `Pass`.
    pub fn from_offenders(offenders: Vec<NodeRef>) -> Self {
        if offenders.is_empty() {
            Self::Pass
        } else {
            Self::Fail(offenders)
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    pub fn offenders(&self) -> &[NodeRef] {
        match self {
            Self::Fail(offenders) => offenders,
            _ => &[],
        }
    }
}

/// One rule's outcome in report form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub test: QcTest,
    pub description: String,
    /// `None` when the rule passed or could not be evaluated.
    pub offenders: Option<Vec<NodeRef>>,
}

impl Finding {
    pub fn new(test: QcTest, description: impl Into<String>, outcome: &RuleOutcome) -> Self {
        let offenders = match outcome {
            RuleOutcome::Fail(nodes) if !nodes.is_empty() => Some(nodes.clone()),
            _ => None,
        };
        Self {
            test,
            description: description.into(),
            offenders,
        }
    }

    /// Whether the finding names at least one offender and belongs in a report.
    pub fn has_offenders(&self) -> bool {
        self.offenders.as_ref().is_some_and(|o| !o.is_empty())
    }

    pub fn offender_ids(&self) -> Vec<i64> {
        self.offenders
            .iter()
            .flatten()
            .map(|node| node.node_id)
            .collect()
    }
}
