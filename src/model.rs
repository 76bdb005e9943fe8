use serde::Serialize;
use serde_json::Value;

/// The kind of JSON location a node represents.
///
/// Containers (objects and arrays) have children; everything else (strings,
/// numbers, booleans, `null`) is a primitive leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A JSON object (`{}`). Children follow key insertion order.
    Object,
    /// A JSON array (`[]`). Children follow index order.
    Array,
    /// A leaf value: string, number, boolean, or `null`.
    Primitive,
}

/// One location in a JSON document, addressed by its path.
///
/// Paths double as node identifiers: `id` always equals `path`, and no two
/// nodes in a tree share a path. The rendering layer depends on this
/// invariant.
#[derive(Debug, Clone, Serialize)]
pub struct TreeNode {
    /// Unique identifier; equal to `path`.
    pub id: String,
    /// Dot/bracket address of this location, rooted at `$`.
    pub path: String,
    /// Human-readable summary, e.g. `root: {Object}` or `age: 30`.
    pub label: String,
    /// The JSON value at this location (kept for preview rendering).
    pub value: Value,
    pub kind: NodeKind,
    /// Ordered child nodes. Empty for primitives.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Total number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }
}

/// A render-ready node: a [`TreeNode`] flattened out of its tree, with a 2D
/// coordinate assigned by layout and a highlight flag driven by search.
#[derive(Debug, Clone, Serialize)]
pub struct PositionedNode {
    pub id: String,
    pub path: String,
    pub label: String,
    pub value: Value,
    pub kind: NodeKind,
    pub x: f64,
    pub y: f64,
    /// Set by the matcher, never by layout.
    pub highlighted: bool,
}

/// A directed parent-to-child connection between two positioned nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// `"<parent id>-<child id>"`.
    pub id: String,
    pub from: String,
    pub to: String,
}

impl Edge {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            id: format!("{}-{}", from, to),
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// The complete output of a visualization run: every node with its position,
/// plus the parent→child edges, both in level order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Diagram {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<Edge>,
}

/// A position within raw JSON input text, as reported by the decoder.
///
/// Both values are one-indexed, matching `serde_json`'s error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecodePosition {
    pub line: usize,
    pub column: usize,
}
