use crate::error::{Result, SessionError};
use crate::topology::MeshGraph;

use super::session::{SelectionSession, TraceOutcome};
use super::threshold::ThresholdMode;

/// Extends the mesh's active edge into a straight path of selected edges.
///
/// This is the entry point for hosts: it checks the editor state, finds
/// the active edge and runs a [`SelectionSession`] with the threshold
/// picked by the configured [`ThresholdMode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceEdgePath {
    mode: ThresholdMode,
}

impl TraceEdgePath {
    /// Creates a new `TraceEdgePath` operation.
    #[must_use]
    pub fn new(mode: ThresholdMode) -> Self {
        Self { mode }
    }

    /// Executes the operation on `mesh`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnsupportedSelectMode`] unless the mesh is in
    /// edge-only select mode, [`SessionError::NoActiveEdge`] if it has no
    /// active edge, and any error from the session itself. Selection is
    /// left as it was whenever an error is returned.
    pub fn execute<G: MeshGraph + ?Sized>(&self, mesh: &mut G) -> Result<TraceOutcome> {
        if !mesh.select_mode().is_edge_only() {
            return Err(SessionError::UnsupportedSelectMode.into());
        }
        let active = mesh.active_edge().ok_or(SessionError::NoActiveEdge)?;
        SelectionSession::new(active, self.mode.resolve()).run(mesh)
    }
}

/// Traces from the mesh's active edge with a threshold of
/// `angle_threshold_degrees`.
///
/// # Errors
///
/// Returns an error if the threshold is outside `[0, 180]`, or as
/// [`TraceEdgePath::execute`].
pub fn trace_edge_path<G: MeshGraph + ?Sized>(
    mesh: &mut G,
    angle_threshold_degrees: f64,
) -> Result<TraceOutcome> {
    let mode = ThresholdMode::from_degrees(angle_threshold_degrees)?;
    TraceEdgePath::new(mode).execute(mesh)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GeometryError, TracerError};
    use crate::math::Point3;
    use crate::operations::creation::{MakePolyline, Polyline};
    use crate::operations::select::threshold::AngleThreshold;
    use crate::topology::{MeshStore, SelectMode};

    fn hexagon(store: &mut MeshStore) -> Polyline {
        let points = (0..6)
            .map(|i| {
                let (sin, cos) = (f64::from(i) * 60.0).to_radians().sin_cos();
                Point3::new(cos, sin, 0.0)
            })
            .collect();
        MakePolyline::new(points, true).execute(store).unwrap()
    }

    #[test]
    fn hexagon_selects_every_edge() {
        let mut store = MeshStore::new();
        let hex = hexagon(&mut store);
        store.select_edge(hex.edges[3]).unwrap();

        let outcome = trace_edge_path(&mut store, 100.0).unwrap();
        assert_eq!(outcome.seed, hex.edges[3]);
        assert_eq!(outcome.traced.len(), 5);
        assert_eq!(store.selected_edges().len(), 6);
        assert_eq!(store.selection_revision(), 1);
    }

    #[test]
    fn default_threshold_rejects_hexagon_corners() {
        let mut store = MeshStore::new();
        let hex = hexagon(&mut store);
        store.select_edge(hex.edges[0]).unwrap();

        let outcome = TraceEdgePath::default().execute(&mut store).unwrap();
        assert!(outcome.traced.is_empty());
        assert_eq!(store.selected_edges(), vec![hex.edges[0]]);
    }

    #[test]
    fn manual_mode_uses_its_threshold() {
        let mut store = MeshStore::new();
        let hex = hexagon(&mut store);
        store.select_edge(hex.edges[0]).unwrap();

        let mode = ThresholdMode::Manual(AngleThreshold::new(119.0).unwrap());
        let outcome = TraceEdgePath::new(mode).execute(&mut store).unwrap();
        assert_eq!(outcome.traced.len(), 5);
    }

    #[test]
    fn no_active_edge_fails_without_side_effects() {
        let mut store = MeshStore::new();
        hexagon(&mut store);

        let err = trace_edge_path(&mut store, 160.0).unwrap_err();
        assert!(matches!(err, TracerError::Session(SessionError::NoActiveEdge)));
        assert!(store.selected_edges().is_empty());
        assert_eq!(store.selection_revision(), 0);
    }

    #[test]
    fn requires_edge_select_mode() {
        let mut store = MeshStore::new();
        let hex = hexagon(&mut store);
        store.select_edge(hex.edges[0]).unwrap();
        store.set_select_mode(SelectMode {
            vertex: true,
            edge: true,
            face: false,
        });

        let err = trace_edge_path(&mut store, 100.0).unwrap_err();
        assert!(matches!(
            err,
            TracerError::Session(SessionError::UnsupportedSelectMode)
        ));
        assert_eq!(store.selected_edges(), vec![hex.edges[0]]);
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let mut store = MeshStore::new();
        let hex = hexagon(&mut store);
        store.select_edge(hex.edges[0]).unwrap();

        let err = trace_edge_path(&mut store, 181.0).unwrap_err();
        assert!(matches!(
            err,
            TracerError::Geometry(GeometryError::ParameterOutOfRange { .. })
        ));
    }
}
