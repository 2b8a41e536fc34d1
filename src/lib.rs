//! Selects chains of mesh edges that continue "straight" from an active
//! edge, judged by the angle formed at each shared vertex.
//!
//! The mesh itself is provided through [`topology::MeshGraph`];
//! [`topology::MeshStore`] is the bundled arena implementation.

pub mod error;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{Result, TracerError};
pub use operations::select::{trace_edge_path, AngleThreshold, ThresholdMode, TraceEdgePath};
