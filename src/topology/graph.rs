use crate::error::TopologyError;
use crate::math::Point3;

use super::{EdgeId, SelectMode, VertexId};

/// Capabilities the edge tracer needs from a host mesh.
///
/// Positions and adjacency are read-only; the selection flag is the only
/// state the tracer writes. Implementors must grant exclusive access for
/// the duration of one trace: a reentrant trace on the same mesh is not
/// supported.
pub trait MeshGraph {
    /// All edges of the mesh, in a stable order.
    fn edge_ids(&self) -> Vec<EdgeId>;

    /// All vertices of the mesh, in a stable order.
    fn vertex_ids(&self) -> Vec<VertexId>;

    /// Position of `vertex`.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex does not exist.
    fn position(&self, vertex: VertexId) -> Result<Point3, TopologyError>;

    /// Edges incident to `vertex`, in enumeration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex does not exist.
    fn incident_edges(&self, vertex: VertexId) -> Result<&[EdgeId], TopologyError>;

    /// The two endpoints of `edge`.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge does not exist.
    fn edge_vertices(&self, edge: EdgeId) -> Result<[VertexId; 2], TopologyError>;

    /// Whether `edge` is selected.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge does not exist.
    fn is_selected(&self, edge: EdgeId) -> Result<bool, TopologyError>;

    /// Sets the selection flag of `edge`.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge does not exist.
    fn set_selected(&mut self, edge: EdgeId, selected: bool) -> Result<(), TopologyError>;

    /// The single active edge, if the host has one.
    fn active_edge(&self) -> Option<EdgeId>;

    /// The element types the host is currently selecting.
    fn select_mode(&self) -> SelectMode;

    /// Called once after the tracer has finished changing selection.
    fn selection_changed(&mut self);
}
