use crate::error::{Result, TopologyError};
use crate::math::angle_degrees;
use crate::topology::{EdgeId, MeshGraph, VertexId};

use super::threshold::AngleThreshold;

/// How well one edge continues another across their shared vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Continuation {
    /// Whether the angle meets the threshold.
    pub qualifies: bool,
    /// Angle at the shared vertex, in degrees.
    pub angle: f64,
}

/// Decides whether an edge continues the path of another edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateSelector {
    threshold: AngleThreshold,
}

impl CandidateSelector {
    /// Creates a selector judging against `threshold`.
    #[must_use]
    pub fn new(threshold: AngleThreshold) -> Self {
        Self { threshold }
    }

    /// Returns the threshold this selector judges against.
    #[must_use]
    pub fn threshold(&self) -> AngleThreshold {
        self.threshold
    }

    /// Measures the angle between `current` and `candidate` at their shared
    /// vertex.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::AmbiguousAdjacency`] if the edges do not share
    /// exactly one vertex, and a degenerate-edge error if either edge has zero
    /// length.
    pub fn evaluate<G: MeshGraph + ?Sized>(
        &self,
        mesh: &G,
        current: EdgeId,
        candidate: EdgeId,
    ) -> Result<Continuation> {
        let (mid, far_current, far_candidate) = split_at_shared_vertex(
            current,
            mesh.edge_vertices(current)?,
            candidate,
            mesh.edge_vertices(candidate)?,
        )?;

        let angle = angle_degrees(
            &mesh.position(far_current)?,
            &mesh.position(mid)?,
            &mesh.position(far_candidate)?,
        )?;

        Ok(Continuation {
            qualifies: self.threshold.admits(angle),
            angle,
        })
    }
}

/// Splits two edges into `(mid, far_a, far_b)` by vertex identity.
fn split_at_shared_vertex(
    a: EdgeId,
    a_verts: [VertexId; 2],
    b: EdgeId,
    b_verts: [VertexId; 2],
) -> std::result::Result<(VertexId, VertexId, VertexId), TopologyError> {
    let mut shared = 0;
    let mut split = None;
    for (i, &va) in a_verts.iter().enumerate() {
        for (j, &vb) in b_verts.iter().enumerate() {
            if va == vb {
                shared += 1;
                split = Some((va, a_verts[1 - i], b_verts[1 - j]));
            }
        }
    }

    match split {
        Some(split) if shared == 1 => Ok(split),
        _ => Err(TopologyError::AmbiguousAdjacency {
            first: a,
            second: b,
            shared,
        }),
    }
}
