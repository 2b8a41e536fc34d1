//! Angle-based edge path selection.
//!
//! [`TraceEdgePath`] is the host-facing operation; the pieces it is built
//! from are public for hosts that manage the active edge themselves.

mod candidate;
mod session;
mod threshold;
mod trace_edge_path;
mod tracer;

pub use candidate::{CandidateSelector, Continuation};
pub use session::{SelectionSession, TraceOutcome};
pub use threshold::{AngleThreshold, ThresholdMode, DEFAULT_ANGLE_THRESHOLD, EPSILON};
pub use trace_edge_path::{trace_edge_path, TraceEdgePath};
pub use tracer::PathTracer;
