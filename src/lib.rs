//! # JsonGraph
//!
//! Converts an arbitrary JSON document into a positioned tree diagram, and
//! finds nodes in it by path expression.
//!
//! JsonGraph walks a decoded JSON value, gives every location a canonical
//! dot/bracket path (`$.user.tags[0]`) that doubles as its unique id, and
//! lays the resulting tree out on a simple level-order grid:
//!
//! - Every object key and array element becomes one node, labeled with its
//!   path segment and a short summary of its value
//! - A breadth-first pass assigns each node a 2D coordinate, with one
//!   horizontal band per depth level and each parent's children centered
//!   under it
//! - A permissive path matcher highlights nodes from a user-typed query,
//!   tolerating partial paths like `user.name`
//!
//! The output is a flat node list plus parent→child edge list, ready to hand
//! to any graph-drawing surface. Rendering, pan/zoom, and editing are the
//! host's concern.
//!
//! ## Command-Line Tool
//!
//! This crate includes the `jgraph` CLI tool for producing diagram JSON from
//! the terminal:
//!
//! ```sh
//! # Install
//! cargo install jsongraph
//!
//! # Diagram JSON from stdin
//! echo '{"a":1,"b":[2,3]}' | jgraph
//!
//! # Diagram a file, highlighting matches for a path query
//! jgraph input.json --query '$.b' -o diagram.json
//! ```
//!
//! Run `jgraph --help` for all options.
//!
//! ## Quick Start
//!
//! ```rust
//! use jsongraph::Visualizer;
//!
//! let input = r#"{"name":"Alice","scores":[95,87,92]}"#;
//!
//! let visualizer = Visualizer::new();
//! let diagram = visualizer.generate(input).unwrap();
//!
//! assert_eq!(diagram.nodes.len(), 6);
//! assert_eq!(diagram.edges.len(), 5);
//! assert_eq!(diagram.nodes[0].path, "$");
//! ```
//!
//! ## Searching
//!
//! Path queries match permissively: exact paths, partial paths without the
//! `$` root, and prefixes of deeper paths all work:
//!
//! ```rust
//! use jsongraph::{match_paths, Visualizer};
//!
//! let diagram = Visualizer::new()
//!     .generate(r#"{"user":{"name":"Alice"},"active":true}"#)
//!     .unwrap();
//!
//! // matches the node itself, and its ancestors contained in the query
//! let ids = match_paths(&diagram.nodes, "user.name");
//! assert_eq!(ids, vec!["$.user", "$.user.name"]);
//! ```
//!
//! ## Serializing Rust Types
//!
//! Any type implementing [`serde::Serialize`] can be diagrammed directly:
//!
//! ```rust
//! use jsongraph::Visualizer;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Player {
//!     name: String,
//!     scores: Vec<i32>,
//! }
//!
//! let player = Player {
//!     name: "Alice".into(),
//!     scores: vec![95, 87, 92],
//! };
//!
//! let diagram = Visualizer::new().generate_from(&player).unwrap();
//! ```
//!
//! ## Configuration
//!
//! Layout spacing, the default origin, and the recursion limit live in
//! [`JsonGraphOptions`]:
//!
//! ```rust
//! use jsongraph::Visualizer;
//!
//! let mut visualizer = Visualizer::new();
//! visualizer.options.horizontal_gap = 220.0;
//! visualizer.options.vertical_gap = 100.0;
//! visualizer.options.max_depth = 64;
//!
//! let diagram = visualizer.generate(r#"{"values":[1,2,3]}"#).unwrap();
//! ```

mod builder;
mod error;
mod layout;
mod matcher;
mod model;
mod options;
mod visualizer;

pub use crate::builder::{build_nodes, build_tree};
pub use crate::error::JsonGraphError;
pub use crate::layout::flatten;
pub use crate::matcher::{highlight, is_valid_path, match_paths};
pub use crate::model::{
    DecodePosition, Diagram, Edge, NodeKind, PositionedNode, TreeNode,
};
pub use crate::options::JsonGraphOptions;
pub use crate::visualizer::Visualizer;
