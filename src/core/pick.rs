//! Greifen von Kontrollpunkten (Start, innere Kontrollpunkte, Ende) einer Spur.

use crate::core::{Endpoint, Lane, LaneId};
use crate::geometry::Point;

/// Gegriffener Kontrollpunkt einer Spur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPointPick {
    /// Spur, zu der der Punkt gehört
    pub lane: LaneId,
    /// Index im Kontrollpolygon (0 = Start)
    pub index: usize,
    /// Quadrierter Abstand zum Suchpunkt
    pub squared_distance: f64,
}

impl ControlPointPick {
    /// Übersetzt den Index in einen Endpunkt; innere Kontrollpunkte liefern `None`.
    pub fn endpoint(&self, lane: &Lane) -> Option<Endpoint> {
        let last = lane.line.control_points().len().saturating_sub(1);
        match self.index {
            0 => Some(Endpoint::Start),
            i if i == last => Some(Endpoint::End),
            _ => None,
        }
    }
}

/// Findet den Kontrollpunkt, der `query` am nächsten liegt.
///
/// Ghost-Spuren werden mit berücksichtigt. Bei gleichem Abstand gewinnt die
/// später iterierte Spur, innerhalb einer Spur der kleinere Index. Ein Treffer
/// zählt nur, wenn der Abstand höchstens der Spurbreite entspricht.
pub fn pick_control_point<'a>(
    query: Point,
    lanes: impl IntoIterator<Item = (LaneId, &'a Lane)>,
) -> Option<ControlPointPick> {
    let mut best: Option<(ControlPointPick, f64)> = None;

    for (id, lane) in lanes {
        let nearest = lane
            .line
            .control_points()
            .into_iter()
            .enumerate()
            .map(|(index, p)| (index, (query - p).length_squared()))
            .min_by(|a, b| a.1.total_cmp(&b.1));
        let Some((index, sqd)) = nearest else {
            continue;
        };
        if matches!(best, Some((current, _)) if sqd > current.squared_distance) {
            continue;
        }
        best = Some((
            ControlPointPick {
                lane: id,
                index,
                squared_distance: sqd,
            },
            lane.width,
        ));
    }

    let (pick, width) = best?;
    (pick.squared_distance <= width * width).then_some(pick)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LaneKind;
    use crate::geometry::{QuadraticCurve, Segment};

    fn lanes(list: &[Lane]) -> impl Iterator<Item = (LaneId, &Lane)> {
        list.iter()
            .enumerate()
            .map(|(i, lane)| (LaneId(i as u64), lane))
    }

    #[test]
    fn test_picks_nearest_endpoint() {
        let list = [Lane::new(
            LaneKind::Car,
            Segment::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0)),
        )];
        let pick = pick_control_point(Point::new(95.0, 3.0), lanes(&list)).expect("Treffer");
        assert_eq!(pick.index, 1);
        assert_eq!(pick.endpoint(&list[0]), Some(Endpoint::End));
        assert_eq!(pick.squared_distance, 34.0);
    }

    #[test]
    fn test_interior_control_point_has_no_endpoint() {
        let list = [Lane::new(
            LaneKind::Car,
            QuadraticCurve::new(
                Point::new(0.0, 0.0),
                Point::new(50.0, 80.0),
                Point::new(100.0, 0.0),
            ),
        )];
        let pick = pick_control_point(Point::new(52.0, 78.0), lanes(&list)).expect("Treffer");
        assert_eq!(pick.index, 1);
        assert_eq!(pick.endpoint(&list[0]), None);
    }

    #[test]
    fn test_outside_lane_width_is_none() {
        let list = [Lane::new(
            LaneKind::Sidewalk,
            Segment::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0)),
        )];
        assert!(pick_control_point(Point::new(0.0, 21.0), lanes(&list)).is_none());
        assert!(pick_control_point(Point::new(0.0, 20.0), lanes(&list)).is_some());
    }

    #[test]
    fn test_tie_prefers_later_lane() {
        let list = [
            Lane::new(
                LaneKind::Car,
                Segment::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0)),
            ),
            Lane::new(
                LaneKind::Car,
                Segment::new(Point::new(0.0, 0.0), Point::new(0.0, 100.0)),
            ),
        ];
        let pick = pick_control_point(Point::new(1.0, 1.0), lanes(&list)).expect("Treffer");
        assert_eq!(pick.lane, LaneId(1));
        assert_eq!(pick.index, 0);
    }

    #[test]
    fn test_ghost_lanes_are_pickable() {
        let mut lane = Lane::new(
            LaneKind::Car,
            Segment::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0)),
        );
        lane.ghost = true;
        let list = [lane];
        assert!(pick_control_point(Point::new(2.0, 0.0), lanes(&list)).is_some());
    }
}
