//! Magnetisches Einrasten eines freien Punktes auf bestehende Spuren.

use crate::core::{Lane, LaneId};
use crate::geometry::{Point, PointExt};
use crate::shared::options::SNAP_PULL_RANGE_FACTOR;

/// Ergebnis einer Snap-Abfrage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneSnap {
    /// Resultierender Punkt (Projektion oder angezogene Position)
    pub point: Point,
    /// Spur, auf die gesnappt wurde
    pub lane: LaneId,
    /// `true` = exakt auf der Mittellinie, `false` = nur angezogen
    pub is_hard_snap: bool,
}

/// Sucht die nächste Spur zu `query` und entscheidet über das Einrasten.
///
/// Ghost-Spuren und Spuren in `exclude` werden übersprungen. Mit
/// `d_snap = (width / 2)²` der nächsten Spur gilt:
/// - Abstand² > 8·d_snap → kein Ziel
/// - Abstand² < d_snap → harter Snap auf die Projektion
/// - sonst → Projektion um `width` in Richtung `query` verschoben
///
/// Bei gleichem Abstand gewinnt die zuerst iterierte Spur.
pub fn find_lane_snap<'a>(
    query: Point,
    lanes: impl IntoIterator<Item = (LaneId, &'a Lane)>,
    exclude: &[LaneId],
) -> Option<LaneSnap> {
    let mut closest: Option<(LaneId, &Lane, Point, f64)> = None;

    for (id, lane) in lanes {
        if lane.ghost || exclude.contains(&id) {
            continue;
        }
        let projection = lane.line.closest(query).point;
        let sqd = (projection - query).length_squared();
        if matches!(closest, Some((_, _, _, best)) if sqd >= best) {
            continue;
        }
        closest = Some((id, lane, projection, sqd));
    }

    let (id, lane, projection, sqd) = closest?;
    let d_snap = lane.width * lane.width / 4.0;

    if sqd > d_snap * SNAP_PULL_RANGE_FACTOR {
        log::trace!("Snap: Spur {} zu weit entfernt ({:.2})", id, sqd.sqrt());
        return None;
    }

    let pull = query - projection;
    if sqd < d_snap || pull == Point::ZERO {
        log::trace!("Snap: harter Snap auf Spur {}", id);
        return Some(LaneSnap {
            point: projection,
            lane: id,
            is_hard_snap: true,
        });
    }

    log::trace!("Snap: Anziehung durch Spur {}", id);
    Some(LaneSnap {
        point: projection + pull.norm_to(lane.width),
        lane: id,
        is_hard_snap: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LaneKind;
    use crate::geometry::{QuadraticCurve, Segment};
    use approx::assert_relative_eq;

    fn horizontal_lane(y: f64) -> Lane {
        Lane::new(
            LaneKind::Car,
            Segment::new(Point::new(0.0, y), Point::new(200.0, y)),
        )
    }

    fn lanes(list: &[Lane]) -> impl Iterator<Item = (LaneId, &Lane)> {
        list.iter()
            .enumerate()
            .map(|(i, lane)| (LaneId(i as u64), lane))
    }

    #[test]
    fn test_on_centerline_is_hard_snap() {
        let list = [horizontal_lane(0.0)];
        let snap = find_lane_snap(Point::new(50.0, 0.0), lanes(&list), &[])
            .expect("Snap erwartet");
        assert!(snap.is_hard_snap);
        assert_eq!(snap.lane, LaneId(0));
        assert_eq!(snap.point, Point::new(50.0, 0.0));
    }

    #[test]
    fn test_inside_half_width_snaps_to_projection() {
        let list = [horizontal_lane(0.0)];
        let snap = find_lane_snap(Point::new(70.0, 19.0), lanes(&list), &[])
            .expect("Snap erwartet");
        assert!(snap.is_hard_snap);
        assert_relative_eq!(snap.point.x, 70.0);
        assert_relative_eq!(snap.point.y, 0.0);
    }

    #[test]
    fn test_far_away_has_no_target() {
        let list = [horizontal_lane(0.0)];
        // √8 · 20 ≈ 56.57
        assert!(find_lane_snap(Point::new(50.0, 57.0), lanes(&list), &[]).is_none());
    }

    #[test]
    fn test_pull_moves_projection_by_width_toward_query() {
        let list = [horizontal_lane(0.0)];
        let query = Point::new(80.0, 50.0);
        let snap = find_lane_snap(query, lanes(&list), &[]).expect("Snap erwartet");
        assert!(!snap.is_hard_snap);
        assert_relative_eq!(snap.point.x, 80.0);
        assert_relative_eq!(snap.point.y, 40.0);
        // Strikt zwischen Projektion (y=0) und Anfragepunkt (y=50)
        assert!(snap.point.y > 0.0 && snap.point.y < query.y);
    }

    #[test]
    fn test_ghost_and_excluded_lanes_are_skipped() {
        let mut ghost = horizontal_lane(0.0);
        ghost.ghost = true;
        let list = [ghost, horizontal_lane(30.0)];
        let snap = find_lane_snap(Point::new(10.0, 5.0), lanes(&list), &[])
            .expect("Snap erwartet");
        assert_eq!(snap.lane, LaneId(1));

        assert!(find_lane_snap(Point::new(10.0, 5.0), lanes(&list), &[LaneId(1)]).is_none());
    }

    #[test]
    fn test_no_lanes_has_no_target() {
        assert!(find_lane_snap(Point::new(0.0, 0.0), lanes(&[]), &[]).is_none());
    }

    #[test]
    fn test_closest_lane_wins_and_tie_keeps_first() {
        let list = [horizontal_lane(0.0), horizontal_lane(10.0)];
        let snap = find_lane_snap(Point::new(10.0, 8.0), lanes(&list), &[])
            .expect("Snap erwartet");
        assert_eq!(snap.lane, LaneId(1));

        let tie = find_lane_snap(Point::new(10.0, 5.0), lanes(&list), &[])
            .expect("Snap erwartet");
        assert_eq!(tie.lane, LaneId(0));
    }

    #[test]
    fn test_snap_onto_curve_lane() {
        let curve = QuadraticCurve::new(
            Point::new(0.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(200.0, 0.0),
        );
        let list = [Lane::new(LaneKind::Car, curve)];
        let apex = Point::new(100.0, 50.0);
        let snap = find_lane_snap(apex + Point::new(0.0, 3.0), lanes(&list), &[])
            .expect("Snap erwartet");
        assert!(snap.is_hard_snap);
        assert_relative_eq!(snap.point.x, apex.x, epsilon = 1e-2);
        assert_relative_eq!(snap.point.y, apex.y, epsilon = 1e-2);
    }

    #[test]
    fn test_zero_width_lane_on_line_is_hard_snap() {
        let list = [Lane::with_width(
            LaneKind::Car,
            0.0,
            Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
        )];
        let snap = find_lane_snap(Point::new(3.0, 0.0), lanes(&list), &[])
            .expect("Snap erwartet");
        assert!(snap.is_hard_snap);
        assert!(find_lane_snap(Point::new(3.0, 0.1), lanes(&list), &[]).is_none());
    }
}
