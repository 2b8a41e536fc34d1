use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the mesh store.
    pub struct EdgeId;
}

/// Data associated with a mesh edge.
///
/// An edge joins two distinct vertices. Its only mutable state is the
/// selection flag.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// The two endpoints. Order carries no meaning.
    pub vertices: [VertexId; 2],
    /// Whether the edge is currently selected.
    pub selected: bool,
}

impl EdgeData {
    /// Creates a new, unselected edge between `a` and `b`.
    #[must_use]
    pub fn new(a: VertexId, b: VertexId) -> Self {
        Self {
            vertices: [a, b],
            selected: false,
        }
    }

    /// Returns the endpoint opposite to `vertex`, if `vertex` is an endpoint.
    #[must_use]
    pub fn other_vertex(&self, vertex: VertexId) -> Option<VertexId> {
        match self.vertices {
            [a, b] if a == vertex => Some(b),
            [a, b] if b == vertex => Some(a),
            _ => None,
        }
    }
}
