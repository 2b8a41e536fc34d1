pub mod edge;
pub mod graph;
pub mod select_mode;
pub mod vertex;

pub use edge::{EdgeData, EdgeId};
pub use graph::MeshGraph;
pub use select_mode::SelectMode;
pub use vertex::{VertexData, VertexId};

use crate::error::TopologyError;
use crate::math::Point3;
use slotmap::SlotMap;

/// Central arena that owns all mesh vertices and edges.
///
/// Entities reference each other via typed IDs (generational indices).
/// Besides geometry and adjacency the store keeps the editor-side
/// selection state: per-edge flags, the selection history that decides
/// the active edge, the select mode and a revision counter bumped on
/// every selection-change notification.
#[derive(Debug, Default)]
pub struct MeshStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    select_history: Vec<EdgeId>,
    select_mode: SelectMode,
    selection_revision: u64,
}

impl MeshStore {
    /// Creates a new, empty mesh store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Inserts a vertex at `point` and returns its ID.
    pub fn add_vertex(&mut self, point: Point3) -> VertexId {
        self.vertices.insert(VertexData::new(point))
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::missing_vertex(id))
    }

    /// Number of vertices in the store.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // --- Edge operations ---

    /// Inserts an edge between two existing, distinct vertices and
    /// attaches it to both vertices' incidence lists.
    ///
    /// # Errors
    ///
    /// Returns an error if either vertex is missing or `a == b`.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<EdgeId, TopologyError> {
        self.vertex(a)?;
        self.vertex(b)?;
        if a == b {
            return Err(TopologyError::InvalidTopology(
                "an edge must join two distinct vertices".into(),
            ));
        }

        let id = self.edges.insert(EdgeData::new(a, b));
        for v in [a, b] {
            self.vertices
                .get_mut(v)
                .ok_or_else(|| TopologyError::missing_vertex(v))?
                .edges
                .push(id);
        }
        Ok(id)
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges
            .get(id)
            .ok_or_else(|| TopologyError::missing_edge(id))
    }

    fn edge_mut(&mut self, id: EdgeId) -> Result<&mut EdgeData, TopologyError> {
        self.edges
            .get_mut(id)
            .ok_or_else(|| TopologyError::missing_edge(id))
    }

    /// Number of edges in the store.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // --- Selection ---

    /// Selects `id` as a user pick: the edge becomes the active edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not found.
    pub fn select_edge(&mut self, id: EdgeId) -> Result<(), TopologyError> {
        self.edge_mut(id)?.selected = true;
        self.select_history.retain(|&e| e != id);
        self.select_history.push(id);
        Ok(())
    }

    /// Deselects `id` and drops it from the selection history.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not found.
    pub fn deselect_edge(&mut self, id: EdgeId) -> Result<(), TopologyError> {
        self.edge_mut(id)?.selected = false;
        self.select_history.retain(|&e| e != id);
        Ok(())
    }

    /// Deselects every edge and forgets the selection history.
    pub fn clear_selection(&mut self) {
        for edge in self.edges.values_mut() {
            edge.selected = false;
        }
        self.select_history.clear();
    }

    /// IDs of all currently selected edges.
    #[must_use]
    pub fn selected_edges(&self) -> Vec<EdgeId> {
        self.edges
            .iter()
            .filter(|(_, e)| e.selected)
            .map(|(id, _)| id)
            .collect()
    }

    /// Sets the element types being selected.
    pub fn set_select_mode(&mut self, mode: SelectMode) {
        self.select_mode = mode;
    }

    /// Number of selection-change notifications received so far.
    #[must_use]
    pub fn selection_revision(&self) -> u64 {
        self.selection_revision
    }
}

impl MeshGraph for MeshStore {
    fn edge_ids(&self) -> Vec<EdgeId> {
        self.edges.keys().collect()
    }

    fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices.keys().collect()
    }

    fn position(&self, vertex: VertexId) -> Result<Point3, TopologyError> {
        Ok(self.vertex(vertex)?.point)
    }

    fn incident_edges(&self, vertex: VertexId) -> Result<&[EdgeId], TopologyError> {
        Ok(self.vertex(vertex)?.edges())
    }

    fn edge_vertices(&self, edge: EdgeId) -> Result<[VertexId; 2], TopologyError> {
        Ok(self.edge(edge)?.vertices)
    }

    fn is_selected(&self, edge: EdgeId) -> Result<bool, TopologyError> {
        Ok(self.edge(edge)?.selected)
    }

    fn set_selected(&mut self, edge: EdgeId, selected: bool) -> Result<(), TopologyError> {
        self.edge_mut(edge)?.selected = selected;
        Ok(())
    }

    /// The most recent history entry that is still a selected edge.
    fn active_edge(&self) -> Option<EdgeId> {
        self.select_history
            .iter()
            .rev()
            .copied()
            .find(|&id| self.edges.get(id).is_some_and(|e| e.selected))
    }

    fn select_mode(&self) -> SelectMode {
        self.select_mode
    }

    fn selection_changed(&mut self) {
        self.selection_revision += 1;
        tracing::trace!(revision = self.selection_revision, "selection changed");
    }
}
