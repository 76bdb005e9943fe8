use std::collections::{HashMap, VecDeque};

use crate::model::{Diagram, Edge, PositionedNode, TreeNode};
use crate::options::JsonGraphOptions;

/// Flattens a node tree into a positioned node list plus edge list.
///
/// Traversal is breadth-first: the output is in level order, which the
/// rendering layer relies on for paint order. Every tree node appears
/// exactly once and the edge count is always `nodes.len() - 1`.
///
/// Layout is a simple level-order grid. Each depth level occupies one
/// horizontal band; a parent's children are centered under it and spaced by
/// `horizontal_gap`. Centering is purely local, so distant subtrees of
/// deeply unbalanced trees can overlap.
pub fn flatten(
    root: &TreeNode,
    origin_x: f64,
    origin_y: f64,
    options: &JsonGraphOptions,
) -> Diagram {
    let mut nodes: Vec<PositionedNode> = Vec::new();
    let mut edges: Vec<Edge> = Vec::new();

    // y coordinate of each populated depth level; only ever moves downward
    let mut level_y: HashMap<usize, f64> = HashMap::new();

    let mut queue: VecDeque<(&TreeNode, Option<String>, f64, f64)> = VecDeque::new();
    queue.push_back((root, None, origin_x, origin_y));

    while let Some((node, parent_id, x, y)) = queue.pop_front() {
        nodes.push(PositionedNode {
            id: node.id.clone(),
            path: node.path.clone(),
            label: node.label.clone(),
            value: node.value.clone(),
            kind: node.kind,
            x,
            y,
            highlighted: false,
        });
        if let Some(parent) = &parent_id {
            edges.push(Edge::new(parent, &node.id));
        }

        if node.children.is_empty() {
            continue;
        }

        // All children share one row per depth level. Taking the max against
        // the level's previous row keeps bands from climbing back up when a
        // later parent at the same depth populates the level again.
        let child_depth = path_depth(&node.path) + 1;
        let row_y = {
            let slot = level_y.entry(child_depth).or_insert(f64::MIN);
            *slot = slot.max(y + options.vertical_gap);
            *slot
        };

        let span = (node.children.len() as f64 * options.horizontal_gap)
            .max(options.min_child_span);
        let first_x = x - span / 2.0 + options.horizontal_gap / 2.0;

        for (idx, child) in node.children.iter().enumerate() {
            let child_x = first_x + idx as f64 * options.horizontal_gap;
            queue.push_back((child, Some(node.id.clone()), child_x, row_y));
        }
    }

    Diagram { nodes, edges }
}

/// Depth of a node, derived from its path rather than tracked during
/// traversal: the number of non-empty tokens when splitting on `.`, `[` and
/// `]`, minus one. `$` is depth 0.
fn path_depth(path: &str) -> usize {
    path.split(['.', '[', ']'])
        .filter(|token| !token.is_empty())
        .count()
        .saturating_sub(1)
}
