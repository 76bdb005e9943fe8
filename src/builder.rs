use serde_json::Value;

use crate::error::JsonGraphError;
use crate::model::{NodeKind, TreeNode};

/// Converts a decoded JSON value into a tree of typed nodes rooted at `$`.
///
/// `recursion_limit` bounds nesting depth; exceeding it returns a
/// "structure too deep" error rather than overflowing the call stack.
pub fn build_tree(value: &Value, recursion_limit: usize) -> Result<TreeNode, JsonGraphError> {
    let mut nodes = build_nodes(value, "$", recursion_limit)?;
    if nodes.len() != 1 {
        return Err(JsonGraphError::simple("Tree builder logic error"));
    }
    Ok(nodes.remove(0))
}

/// Recursive worker behind [`build_tree`].
///
/// Returns a sequence so that array/object iteration can splice the results
/// of a recursive call directly into a child list; at the top level the
/// sequence always has length one.
pub fn build_nodes(
    value: &Value,
    current_path: &str,
    recursion_limit: usize,
) -> Result<Vec<TreeNode>, JsonGraphError> {
    if recursion_limit == 0 {
        return Err(JsonGraphError::simple(
            "Structure too deep - recursion limit exceeded",
        ));
    }

    let at_root = current_path == "$";
    let segment = if at_root { "root" } else { last_segment(current_path) };

    let node = match value {
        Value::Array(arr) => {
            let kind_text = if at_root {
                "[Array]".to_string()
            } else {
                format!("[Array({})]", arr.len())
            };
            let mut children = Vec::with_capacity(arr.len());
            for (idx, elem) in arr.iter().enumerate() {
                let child_path = format!("{}[{}]", current_path, idx);
                children.extend(build_nodes(elem, &child_path, recursion_limit - 1)?);
            }
            TreeNode {
                id: current_path.to_string(),
                path: current_path.to_string(),
                label: format!("{}: {}", segment, kind_text),
                value: value.clone(),
                kind: NodeKind::Array,
                children,
            }
        }
        Value::Object(map) => {
            let mut children = Vec::with_capacity(map.len());
            for (key, elem) in map.iter() {
                let child_path = format!("{}.{}", current_path, key);
                children.extend(build_nodes(elem, &child_path, recursion_limit - 1)?);
            }
            TreeNode {
                id: current_path.to_string(),
                path: current_path.to_string(),
                label: format!("{}: {{Object}}", segment),
                value: value.clone(),
                kind: NodeKind::Object,
                children,
            }
        }
        _ => TreeNode {
            id: current_path.to_string(),
            path: current_path.to_string(),
            label: format!("{}: {}", segment, stringify_primitive(value)),
            value: value.clone(),
            kind: NodeKind::Primitive,
            children: Vec::new(),
        },
    };

    Ok(vec![node])
}

/// The path segment appended at this node: the object key, or `[i]` for an
/// array element.
fn last_segment(path: &str) -> &str {
    match (path.rfind('.'), path.rfind('[')) {
        (Some(dot), Some(bracket)) if bracket > dot => &path[bracket..],
        (Some(dot), _) => &path[dot + 1..],
        (None, Some(bracket)) => &path[bracket..],
        (None, None) => path,
    }
}

fn stringify_primitive(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // Containers never reach here
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn collect_paths(node: &TreeNode, out: &mut Vec<String>) {
        out.push(node.path.clone());
        for child in &node.children {
            collect_paths(child, out);
        }
    }

    #[test]
    fn builds_mixed_document() {
        let value = json!({"a": 1, "b": [2, 3]});
        let root = build_tree(&value, 500).unwrap();

        assert_eq!(root.kind, NodeKind::Object);
        assert_eq!(root.label, "root: {Object}");
        assert_eq!(root.node_count(), 5);

        let mut paths = Vec::new();
        collect_paths(&root, &mut paths);
        assert_eq!(paths, vec!["$", "$.a", "$.b", "$.b[0]", "$.b[1]"]);
    }

    #[test]
    fn id_equals_path_everywhere() {
        let value = json!({"user": {"name": "Alice", "tags": ["x", "y"]}});
        let root = build_tree(&value, 500).unwrap();

        let mut stack = vec![&root];
        while let Some(node) = stack.pop() {
            assert_eq!(node.id, node.path);
            stack.extend(node.children.iter());
        }
    }

    #[test]
    fn null_root_is_primitive_leaf() {
        let root = build_tree(&Value::Null, 500).unwrap();
        assert_eq!(root.kind, NodeKind::Primitive);
        assert_eq!(root.path, "$");
        assert!(root.label.contains("null"));
        assert!(root.children.is_empty());
    }

    #[test]
    fn empty_array_root_has_no_children() {
        let root = build_tree(&json!([]), 500).unwrap();
        assert_eq!(root.kind, NodeKind::Array);
        assert_eq!(root.label, "root: [Array]");
        assert!(root.children.is_empty());
    }

    #[test]
    fn non_root_array_label_carries_count() {
        let root = build_tree(&json!({"items": [1, 2, 3]}), 500).unwrap();
        assert_eq!(root.children[0].label, "items: [Array(3)]");
    }

    #[test]
    fn array_element_labels_use_bracket_segments() {
        let root = build_tree(&json!([true, "hi"]), 500).unwrap();
        assert_eq!(root.children[0].label, "[0]: true");
        assert_eq!(root.children[1].label, "[1]: hi");
    }

    #[test]
    fn object_children_keep_insertion_order() {
        let value: Value = serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let root = build_tree(&value, 500).unwrap();
        let keys: Vec<&str> = root
            .children
            .iter()
            .map(|c| c.path.rsplit('.').next().unwrap())
            .collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn same_key_at_different_locations_gets_distinct_paths() {
        let value = json!({"a": {"id": 1}, "b": {"id": 2}});
        let root = build_tree(&value, 500).unwrap();

        let mut paths = Vec::new();
        collect_paths(&root, &mut paths);
        let mut deduped = paths.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), paths.len());
        assert!(paths.contains(&"$.a.id".to_string()));
        assert!(paths.contains(&"$.b.id".to_string()));
    }

    #[test]
    fn recursion_limit_fails_instead_of_overflowing() {
        let value = json!({"a": {"b": {"c": 1}}});
        let err = build_tree(&value, 2).unwrap_err();
        assert!(err.message.contains("too deep"));
    }

    #[test]
    fn stored_value_mirrors_input() {
        let value = json!({"nested": {"k": [1]}});
        let root = build_tree(&value, 500).unwrap();
        assert_eq!(root.value, value);
        assert_eq!(root.children[0].value, json!({"k": [1]}));
    }
}
