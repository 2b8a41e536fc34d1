use tracing::{debug, warn};

use crate::error::{Result, SessionError};
use crate::topology::{EdgeId, MeshGraph};

use super::candidate::CandidateSelector;
use super::threshold::AngleThreshold;
use super::tracer::PathTracer;

/// Result of a successful trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceOutcome {
    /// The active edge the trace started from.
    pub seed: EdgeId,
    /// Edges added to the path, in the order they were selected.
    pub traced: Vec<EdgeId>,
    /// Number of previously selected edges restored after tracing.
    pub restored: usize,
}

/// One trace invocation against a mesh.
///
/// Other selected edges are set aside before tracing so they cannot stop
/// the path, then put back. The final selection is the union of the
/// previous selection and the traced path. If tracing fails, the
/// selection is returned to exactly what it was before the call.
pub struct SelectionSession {
    active: EdgeId,
    threshold: AngleThreshold,
}

impl SelectionSession {
    /// Creates a session tracing from `active` with `threshold`.
    #[must_use]
    pub fn new(active: EdgeId, threshold: AngleThreshold) -> Self {
        Self { active, threshold }
    }

    /// Runs the session.
    ///
    /// The mesh must not be traced concurrently or reentrantly while this
    /// runs.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoActiveEdge`] without touching selection if
    /// the active edge is not selected. Errors met while tracing are
    /// returned after the selection has been rolled back.
    pub fn run<G: MeshGraph + ?Sized>(&self, mesh: &mut G) -> Result<TraceOutcome> {
        if !mesh.is_selected(self.active)? {
            return Err(SessionError::NoActiveEdge.into());
        }

        let mut snapshot = Vec::new();
        for edge in mesh.edge_ids() {
            if edge != self.active && mesh.is_selected(edge)? {
                snapshot.push(edge);
            }
        }
        for (cleared, &edge) in snapshot.iter().enumerate() {
            if let Err(err) = mesh.set_selected(edge, false) {
                warn!(error = %err, ?edge, "could not set selection aside, restoring");
                if let Err(cleanup) = restore(mesh, &snapshot[..cleared]) {
                    warn!(error = %cleanup, "selection only partly restored");
                }
                return Err(err.into());
            }
        }
        debug!(
            seed = ?self.active,
            threshold = self.threshold.degrees(),
            set_aside = snapshot.len(),
            "tracing edge path"
        );

        let tracer = PathTracer::new(CandidateSelector::new(self.threshold));
        let traced = match tracer.trace(mesh, self.active) {
            Ok(traced) => traced,
            Err(err) => {
                warn!(error = %err, "edge trace failed, restoring selection");
                let rolled_back = self.roll_back(mesh);
                let restored = restore(mesh, &snapshot);
                if let Err(cleanup) = rolled_back.and(restored) {
                    warn!(error = %cleanup, "selection only partly restored");
                }
                return Err(err);
            }
        };

        restore(mesh, &snapshot)?;
        mesh.selection_changed();
        debug!(traced = traced.len(), restored = snapshot.len(), "edge path traced");

        Ok(TraceOutcome {
            seed: self.active,
            traced,
            restored: snapshot.len(),
        })
    }

    /// Deselects everything the tracer selected.
    ///
    /// Only the active edge was selected when tracing began, so every other
    /// selected edge belongs to the partial path. Keeps going past edges the
    /// mesh refuses and returns the first error.
    fn roll_back<G: MeshGraph + ?Sized>(&self, mesh: &mut G) -> Result<()> {
        let mut first_err = None;
        for edge in mesh.edge_ids() {
            if edge == self.active {
                continue;
            }
            let result = match mesh.is_selected(edge) {
                Ok(true) => mesh.set_selected(edge, false),
                Ok(false) => Ok(()),
                Err(err) => Err(err),
            };
            if let Err(err) = result {
                first_err.get_or_insert(err);
            }
        }
        first_err.map_or(Ok(()), |err| Err(err.into()))
    }
}

/// Reselects every edge in `snapshot`, continuing past failures.
///
/// Returns the first error met.
fn restore<G: MeshGraph + ?Sized>(mesh: &mut G, snapshot: &[EdgeId]) -> Result<()> {
    let mut first_err = None;
    for &edge in snapshot {
        if let Err(err) = mesh.set_selected(edge, true) {
            first_err.get_or_insert(err);
        }
    }
    first_err.map_or(Ok(()), |err| Err(err.into()))
}
