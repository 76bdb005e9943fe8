use serde::Serialize;
use serde_json::Value;

use crate::builder;
use crate::error::JsonGraphError;
use crate::layout;
use crate::matcher;
use crate::model::{Diagram, PositionedNode, TreeNode};
use crate::options::JsonGraphOptions;

/// The main entry point for turning JSON into a positioned tree diagram.
///
/// A `Visualizer` holds a [`JsonGraphOptions`] and exposes the three core
/// operations — build, flatten, match — plus convenience methods that run
/// the whole pipeline from raw text or a serializable value. Every call
/// rebuilds its output from scratch; nothing persists between runs.
pub struct Visualizer {
    /// Layout and construction settings. Modify freely between calls.
    pub options: JsonGraphOptions,
}

impl Visualizer {
    /// Creates a new `Visualizer` with default options.
    pub fn new() -> Self {
        Self { options: JsonGraphOptions::default() }
    }

    /// Decodes raw JSON text and produces a diagram at the configured
    /// origin.
    ///
    /// Decode failures surface as a [`JsonGraphError`] carrying the
    /// decoder's line/column position.
    pub fn generate(&self, input: &str) -> Result<Diagram, JsonGraphError> {
        let value: Value = serde_json::from_str(input)?;
        self.generate_value(&value)
    }

    /// Produces a diagram from an already-decoded JSON value.
    pub fn generate_value(&self, value: &Value) -> Result<Diagram, JsonGraphError> {
        let root = self.build(value)?;
        Ok(self.flatten(&root, self.options.origin_x, self.options.origin_y))
    }

    /// Produces a diagram from any [`serde::Serialize`] type.
    pub fn generate_from<T: Serialize>(&self, value: &T) -> Result<Diagram, JsonGraphError> {
        let value = serde_json::to_value(value)?;
        self.generate_value(&value)
    }

    /// Builds the node tree for a decoded JSON value, honoring the
    /// configured depth limit.
    pub fn build(&self, value: &Value) -> Result<TreeNode, JsonGraphError> {
        builder::build_tree(value, self.options.max_depth)
    }

    /// Flattens a built tree into positioned nodes and edges, rooted at the
    /// given origin.
    pub fn flatten(&self, root: &TreeNode, origin_x: f64, origin_y: f64) -> Diagram {
        layout::flatten(root, origin_x, origin_y, &self.options)
    }

    /// Returns the ids of the nodes matching a search query. See
    /// [`match_paths`](crate::match_paths) for the matching policy.
    pub fn find_matches(&self, nodes: &[PositionedNode], query: &str) -> Vec<String> {
        matcher::match_paths(nodes, query)
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generates_diagram_from_raw_text() {
        let visualizer = Visualizer::new();
        let diagram = visualizer.generate(r#"{"a":1,"b":[2,3]}"#).unwrap();
        assert_eq!(diagram.nodes.len(), 5);
        assert_eq!(diagram.edges.len(), 4);
    }

    #[test]
    fn decode_failure_reports_location() {
        let visualizer = Visualizer::new();
        let err = visualizer.generate("{\"a\": }").unwrap_err();
        assert!(err.decode_position.is_some());
        assert!(err.message.contains("line 1"));
    }

    #[test]
    fn generate_from_serializable_type() {
        #[derive(Serialize)]
        struct Player {
            name: String,
            scores: Vec<i32>,
        }

        let player = Player { name: "Alice".into(), scores: vec![95, 87] };
        let diagram = Visualizer::new().generate_from(&player).unwrap();

        let paths: Vec<&str> = diagram.nodes.iter().map(|n| n.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["$", "$.name", "$.scores", "$.scores[0]", "$.scores[1]"]
        );
    }

    #[test]
    fn origin_defaults_come_from_options() {
        let mut visualizer = Visualizer::new();
        visualizer.options.origin_x = 320.0;
        visualizer.options.origin_y = 40.0;

        let diagram = visualizer.generate_value(&json!(null)).unwrap();
        assert_eq!(diagram.nodes[0].x, 320.0);
        assert_eq!(diagram.nodes[0].y, 40.0);
    }

    #[test]
    fn depth_limit_is_honored() {
        let mut visualizer = Visualizer::new();
        visualizer.options.max_depth = 3;

        let shallow = json!({"a": {"b": 1}});
        assert!(visualizer.generate_value(&shallow).is_ok());

        let deep = json!({"a": {"b": {"c": {"d": 1}}}});
        let err = visualizer.generate_value(&deep).unwrap_err();
        assert!(err.message.contains("too deep"));
    }
}
