use crate::error::{OperationError, Result};
use crate::math::Point3;
use crate::topology::{EdgeId, MeshStore, VertexId};

/// Creates a chain of vertices and edges from a sequence of 3D points.
pub struct MakePolyline {
    points: Vec<Point3>,
    close: bool,
}

/// Vertices and edges created by [`MakePolyline`], in input order.
#[derive(Debug, Clone)]
pub struct Polyline {
    pub vertices: Vec<VertexId>,
    pub edges: Vec<EdgeId>,
}

impl MakePolyline {
    /// Creates a new `MakePolyline` operation.
    ///
    /// When `close` is set, a final edge joins the last point back to the first.
    #[must_use]
    pub fn new(points: Vec<Point3>, close: bool) -> Self {
        Self { points, close }
    }

    /// Executes the operation, creating the vertices and edges in the store.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two points are given, or fewer than
    /// three for a closed polyline.
    pub fn execute(&self, store: &mut MeshStore) -> Result<Polyline> {
        let min_points = if self.close { 3 } else { 2 };
        if self.points.len() < min_points {
            return Err(OperationError::InvalidInput(format!(
                "polyline needs at least {min_points} points, got {}",
                self.points.len()
            ))
            .into());
        }

        let vertices: Vec<VertexId> = self.points.iter().map(|&p| store.add_vertex(p)).collect();

        let mut edges = Vec::with_capacity(vertices.len());
        for pair in vertices.windows(2) {
            edges.push(store.add_edge(pair[0], pair[1])?);
        }
        if self.close {
            if let (Some(&first), Some(&last)) = (vertices.first(), vertices.last()) {
                edges.push(store.add_edge(last, first)?);
            }
        }

        Ok(Polyline { vertices, edges })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::topology::MeshGraph;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn open_chain() {
        let mut store = MeshStore::new();
        let line = MakePolyline::new(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)],
            false,
        )
        .execute(&mut store)
        .unwrap();

        assert_eq!(line.vertices.len(), 3);
        assert_eq!(line.edges.len(), 2);
        assert_eq!(store.incident_edges(line.vertices[1]).unwrap().len(), 2);
        assert_eq!(store.incident_edges(line.vertices[2]).unwrap().len(), 1);
    }

    #[test]
    fn closed_triangle() {
        let mut store = MeshStore::new();
        let line = MakePolyline::new(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();

        assert_eq!(line.edges.len(), 3);
        assert_eq!(
            store.edge_vertices(line.edges[2]).unwrap(),
            [line.vertices[2], line.vertices[0]]
        );
        for v in &line.vertices {
            assert_eq!(store.incident_edges(*v).unwrap().len(), 2);
        }
    }

    #[test]
    fn too_few_points_fails() {
        let mut store = MeshStore::new();
        assert!(MakePolyline::new(vec![p(0.0, 0.0, 0.0)], false)
            .execute(&mut store)
            .is_err());
        assert!(
            MakePolyline::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)], true)
                .execute(&mut store)
                .is_err()
        );
        assert_eq!(store.vertex_count(), 0);
    }
}
