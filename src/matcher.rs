use std::collections::HashSet;

use crate::model::PositionedNode;

/// Returns the ids of every node whose path matches `query`, in traversal
/// order, one entry per node.
///
/// The query is trimmed and, unless it already starts with `$`, prefixed
/// with `$.`. Matching is permissive textual containment rather than
/// structured path evaluation: besides exact equality, a node matches when
/// its path contains the root-stripped query (so `user.name` finds
/// `$.user.name`, and `$.user` finds everything under `$.user`), or when
/// the root-stripped query contains the node's root-stripped path. This
/// tolerates partial paths but also lets `$.item` match inside `$.item2`.
pub fn match_paths(nodes: &[PositionedNode], query: &str) -> Vec<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let normalized = if trimmed.starts_with('$') {
        trimmed.to_string()
    } else {
        format!("$.{}", trimmed)
    };
    let needle = strip_root(&normalized);

    let mut ids = Vec::new();
    for node in nodes {
        let is_exact = node.path == normalized;
        // The fallback runs even for exact hits; the per-node check keeps
        // each node to a single entry.
        let is_loose = node.path.contains(needle)
            || node.path == normalized
            || needle.contains(strip_root(&node.path));
        if is_exact || is_loose {
            ids.push(node.id.clone());
        }
    }
    ids
}

/// Recomputes every node's highlight flag from the current match set,
/// leaving positions untouched. Returns the number of matching nodes.
pub fn highlight(nodes: &mut [PositionedNode], query: &str) -> usize {
    let matched: HashSet<String> = match_paths(nodes, query).into_iter().collect();
    for node in nodes.iter_mut() {
        node.highlighted = matched.contains(&node.id);
    }
    matched.len()
}

/// Checks whether `text` is a well-formed path: `$` followed by any run of
/// `.identifier` or `[index]` segments.
///
/// This is a UI-side input hint only; [`match_paths`] accepts any string and
/// never consults this predicate.
pub fn is_valid_path(text: &str) -> bool {
    let mut chars = text.trim().chars().peekable();
    if chars.next() != Some('$') {
        return false;
    }
    loop {
        match chars.next() {
            None => return true,
            Some('.') => {
                // member segment: at least one non-delimiter character
                let mut seen = false;
                while let Some(&c) = chars.peek() {
                    if c == '.' || c == '[' || c == ']' {
                        break;
                    }
                    chars.next();
                    seen = true;
                }
                if !seen {
                    return false;
                }
            }
            Some('[') => {
                // index segment: one or more digits, closed by ]
                let mut seen = false;
                while let Some(&c) = chars.peek() {
                    if !c.is_ascii_digit() {
                        break;
                    }
                    chars.next();
                    seen = true;
                }
                if !seen || chars.next() != Some(']') {
                    return false;
                }
            }
            Some(_) => return false,
        }
    }
}

/// A path with its `$.` root prefix removed; bare `$` is left alone, which
/// keeps the root node from matching every `$`-prefixed query by
/// containment.
fn strip_root(path: &str) -> &str {
    path.strip_prefix("$.").unwrap_or(path)
}
