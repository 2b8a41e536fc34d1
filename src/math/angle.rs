use crate::error::GeometryError;

use super::{Point3, Vector3, TOLERANCE};

/// Angle in degrees at `mid` between the rays towards `far_a` and `far_b`.
///
/// The result lies in `[0, 180]`: 180 means the three points are colinear
/// with `mid` between them, 0 means both rays point the same way. The
/// cosine is clamped to `[-1, 1]` before `acos` so rounding never yields NaN.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateEdge`] if either ray is shorter than
/// [`TOLERANCE`].
pub fn angle_degrees(far_a: &Point3, mid: &Point3, far_b: &Point3) -> Result<f64, GeometryError> {
    let u: Vector3 = far_a - mid;
    let v: Vector3 = far_b - mid;

    let len_u = u.norm();
    let len_v = v.norm();
    for length in [len_u, len_v] {
        if length < TOLERANCE {
            return Err(GeometryError::DegenerateEdge { length });
        }
    }

    let cosine = (u.dot(&v) / (len_u * len_v)).clamp(-1.0, 1.0);
    Ok(cosine.acos().to_degrees())
}
