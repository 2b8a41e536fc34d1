pub mod angle;

pub use angle::angle_degrees;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance: vectors shorter than this are treated as zero.
pub const TOLERANCE: f64 = 1e-10;
