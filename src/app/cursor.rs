//! Auflösung der Cursor-Position: Snap auf Spuren, sonst Raster.

use crate::core::{LaneId, LaneSnap, RoadGraph};
use crate::geometry::Point;
use crate::shared::KernelOptions;

/// Aufgelöste Cursor-Position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedCursor {
    /// Position, mit der weitergearbeitet wird
    pub point: Point,
    /// Snap-Ergebnis, falls der Cursor von einer Spur angezogen wurde
    pub snap: Option<LaneSnap>,
}

/// Rastet `p` auf die Mitte seiner Rasterzelle ein.
pub fn grid_snap(p: Point, cell: f64) -> Point {
    (p / cell).floor() * cell + Point::splat(cell / 2.0)
}

/// Löst die rohe Welt-Position des Cursors auf.
///
/// Bei aktivem Snapping (`options.snapping_enabled`) und vorhandenem Ziel wird
/// der Snap-Punkt verwendet, ansonsten die Mitte der Rasterzelle. `exclude`
/// enthält z.B. die gerade gezogene Spur.
pub fn resolve_cursor(
    raw: Point,
    graph: &RoadGraph,
    exclude: &[LaneId],
    options: &KernelOptions,
) -> ResolvedCursor {
    let snap = if options.snapping_enabled {
        graph.find_lane_snap(raw, exclude)
    } else {
        None
    };

    match snap {
        Some(snap) => ResolvedCursor {
            point: snap.point,
            snap: Some(snap),
        },
        None => ResolvedCursor {
            point: grid_snap(raw, options.grid_cell_size),
            snap: None,
        },
    }
}
