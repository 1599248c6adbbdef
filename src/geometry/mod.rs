//! Geometrie-Kern: Vektor-Algebra, Segmente, Bézier-Kurven, Projektion und Offset.
//!
//! Layer-neutral und rein funktional; kennt weder Spuren noch Editor-Zustand.

pub mod cubic;
pub mod curve;
pub mod line;
pub mod point;
pub mod quadratic;
pub mod segment;

pub use cubic::CubicCurve;
pub use curve::{BezierCurve, SampleTable};
pub use line::Line;
pub use point::{line_intersection, LineIntersection, Point, PointExt, Projection};
pub use quadratic::QuadraticCurve;
pub use segment::Segment;
