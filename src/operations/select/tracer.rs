use tracing::trace;

use crate::error::Result;
use crate::topology::{EdgeId, MeshGraph, VertexId};

use super::candidate::CandidateSelector;

/// Grows a path of selected edges outwards from a seed edge.
///
/// At each endpoint of the current edge the best qualifying neighbour is
/// selected and expanded in turn, depth first, so the path grows in both
/// directions from the seed. Expansion stops at an endpoint when no
/// neighbour qualifies, or when any other edge at that vertex is already
/// selected (the path has closed on itself).
///
/// The seed must already be selected.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathTracer {
    selector: CandidateSelector,
}

impl PathTracer {
    /// Creates a tracer using `selector` to judge continuations.
    #[must_use]
    pub fn new(selector: CandidateSelector) -> Self {
        Self { selector }
    }

    /// Traces from `seed`, selecting every edge added to the path.
    ///
    /// Returns the newly selected edges in the order they were selected.
    /// On error, edges selected before the failure stay selected; the
    /// caller is responsible for rolling them back.
    ///
    /// # Errors
    ///
    /// Propagates mesh lookup failures, degenerate edges and ambiguous
    /// adjacency met while evaluating candidates.
    pub fn trace<G: MeshGraph + ?Sized>(&self, mesh: &mut G, seed: EdgeId) -> Result<Vec<EdgeId>> {
        let mut traced = Vec::new();

        // Each frame holds a path edge and the index of its next endpoint to expand.
        let mut stack: Vec<(EdgeId, usize)> = vec![(seed, 0)];
        while let Some(frame) = stack.last_mut() {
            let (edge, endpoint) = *frame;
            if endpoint == 2 {
                stack.pop();
                continue;
            }
            frame.1 += 1;

            let vertex = mesh.edge_vertices(edge)?[endpoint];
            if let Some(next) = self.best_continuation(mesh, edge, vertex)? {
                mesh.set_selected(next, true)?;
                traced.push(next);
                stack.push((next, 0));
            }
        }

        Ok(traced)
    }

    /// Picks the edge at `vertex` that best continues `current`.
    ///
    /// Among qualifying candidates the widest angle wins; on a tie the
    /// later-enumerated candidate wins.
    fn best_continuation<G: MeshGraph + ?Sized>(
        &self,
        mesh: &G,
        current: EdgeId,
        vertex: VertexId,
    ) -> Result<Option<EdgeId>> {
        let others: Vec<EdgeId> = mesh
            .incident_edges(vertex)?
            .iter()
            .copied()
            .filter(|&e| e != current)
            .collect();

        for &other in &others {
            if mesh.is_selected(other)? {
                trace!(?vertex, ?other, "vertex already on path, stopping");
                return Ok(None);
            }
        }

        let mut best: Option<(EdgeId, f64)> = None;
        for &candidate in &others {
            let continuation = self.selector.evaluate(mesh, current, candidate)?;
            trace!(
                ?candidate,
                angle = continuation.angle,
                qualifies = continuation.qualifies,
                "candidate"
            );
            if continuation.qualifies
                && best.is_none_or(|(_, angle)| continuation.angle >= angle)
            {
                best = Some((candidate, continuation.angle));
            }
        }

        Ok(best.map(|(edge, _)| edge))
    }
}
