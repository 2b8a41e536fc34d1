mod make_polyline;

pub use make_polyline::{MakePolyline, Polyline};
