/// Configuration options for tree layout and construction.
///
/// This struct contains all settings that control how a JSON tree is built
/// and positioned. Use [`Default::default()`] or
/// [`JsonGraphOptions::recommended()`] to get sensible defaults, then modify
/// individual fields as needed.
///
/// # Example
///
/// ```rust
/// use jsongraph::JsonGraphOptions;
///
/// let mut options = JsonGraphOptions::default();
/// options.horizontal_gap = 220.0;
/// options.vertical_gap = 100.0;
/// ```
#[derive(Debug, Clone)]
pub struct JsonGraphOptions {
    /// Horizontal distance between adjacent siblings. Each parent's children
    /// are centered under it and step by this amount.
    /// Default: 180.0.
    pub horizontal_gap: f64,

    /// Vertical distance between a parent's row and its children's row.
    /// Rows are shared per depth level and only ever move downward.
    /// Default: 120.0.
    pub vertical_gap: f64,

    /// Minimum total width reserved for a parent's children, even when there
    /// are few of them. Keeps single children from sitting flush against
    /// neighboring subtrees.
    /// Default: 180.0.
    pub min_child_span: f64,

    /// Default x coordinate of the root node, used when the caller doesn't
    /// supply an origin. Default: 0.0.
    pub origin_x: f64,

    /// Default y coordinate of the root node, used when the caller doesn't
    /// supply an origin. Default: 0.0.
    pub origin_y: f64,

    /// Maximum nesting depth the tree builder will descend before failing
    /// with a "structure too deep" error instead of overflowing the stack.
    /// Default: 500.
    pub max_depth: usize,
}

impl Default for JsonGraphOptions {
    fn default() -> Self {
        Self {
            horizontal_gap: 180.0,
            vertical_gap: 120.0,
            min_child_span: 180.0,
            origin_x: 0.0,
            origin_y: 0.0,
            max_depth: 500,
        }
    }
}

impl JsonGraphOptions {
    /// Creates a new `JsonGraphOptions` with recommended settings.
    ///
    /// Currently identical to [`Default::default()`], but may include
    /// improved defaults in future versions without breaking compatibility.
    pub fn recommended() -> Self {
        Self::default()
    }
}
