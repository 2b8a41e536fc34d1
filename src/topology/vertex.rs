use crate::math::Point3;

use super::edge::EdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the mesh store.
    pub struct VertexId;
}

/// Data associated with a mesh vertex.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// The 3D position of the vertex.
    pub point: Point3,
    /// Incident edges, in the order they were attached.
    pub(crate) edges: Vec<EdgeId>,
}

impl VertexData {
    /// Creates a new vertex at the given point with no incident edges.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self {
            point,
            edges: Vec::new(),
        }
    }

    /// Returns the incident edges in attachment order.
    #[must_use]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }
}
