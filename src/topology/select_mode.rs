/// Which element types the host mesh editor is selecting.
///
/// Several may be active at once, as in most mesh editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectMode {
    pub vertex: bool,
    pub edge: bool,
    pub face: bool,
}

impl SelectMode {
    /// Edge selection only.
    pub const EDGE: Self = Self {
        vertex: false,
        edge: true,
        face: false,
    };

    /// Returns `true` if edges, and nothing else, are selectable.
    #[must_use]
    pub fn is_edge_only(self) -> bool {
        self == Self::EDGE
    }
}

impl Default for SelectMode {
    fn default() -> Self {
        Self::EDGE
    }
}
