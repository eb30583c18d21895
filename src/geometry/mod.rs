pub mod curve;
pub mod path;
pub mod shape;

pub use curve::{CubicBezier, Curve2d, EllipseArc, LineSegment, PathSegment, QuadraticBezier};
pub use path::Path;
pub use shape::{Shape, ShapePoints};
