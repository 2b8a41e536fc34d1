use thiserror::Error;

use crate::topology::{EdgeId, VertexId};

/// Top-level error type for edge tracing.
#[derive(Debug, Error)]
pub enum TracerError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// An edge collapses to a point, so no direction can be taken from it.
    #[error("degenerate edge: endpoints coincide (length {length:e})")]
    DegenerateEdge { length: f64 },
}

/// Errors related to the mesh graph.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    /// Two edges expected to meet at exactly one vertex share zero or two.
    #[error("edges {first:?} and {second:?} share {shared} vertices, expected exactly 1")]
    AmbiguousAdjacency {
        first: EdgeId,
        second: EdgeId,
        shared: usize,
    },

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors raised by a selection session before or while it runs.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no active edge: select an edge first")]
    NoActiveEdge,

    #[error("edge tracing requires edge-only select mode")]
    UnsupportedSelectMode,
}

/// Errors related to mesh-building operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl TopologyError {
    pub(crate) fn missing_vertex(id: VertexId) -> Self {
        Self::EntityNotFound(format!("vertex {id:?}"))
    }

    pub(crate) fn missing_edge(id: EdgeId) -> Self {
        Self::EntityNotFound(format!("edge {id:?}"))
    }
}

/// Convenience type alias for results using [`TracerError`].
pub type Result<T> = std::result::Result<T, TracerError>;
