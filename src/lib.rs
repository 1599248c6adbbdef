//! Lane-Sketch Library.
//! Geometrie-Kern eines 2D-Straßen-Skizzeneditors, als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod geometry;
pub mod shared;

pub use app::{grid_snap, resolve_cursor, ResolvedCursor};
pub use core::{
    find_lane_snap, pick_control_point, Camera2D, ControlPointPick, Endpoint, Junction, Lane,
    LaneId, LaneKind, LaneSnap, Road, RoadGraph,
};
pub use geometry::{
    line_intersection, BezierCurve, CubicCurve, Line, LineIntersection, Point, PointExt,
    Projection, QuadraticCurve, SampleTable, Segment,
};
pub use shared::{CurveAccuracy, KernelOptions};
