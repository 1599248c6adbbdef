//! Integrationstests für das Einrasten auf Spuren:
//! - Harter Snap, Anziehung, kein Ziel
//! - Ghost- und Ausschluss-Spuren
//! - Determinismus über wiederholte Abfragen

use approx::assert_relative_eq;
use lane_sketch::app::lane_edit;
use lane_sketch::{
    resolve_cursor, Endpoint, KernelOptions, Lane, LaneKind, Point, QuadraticCurve, RoadGraph,
    Segment,
};

/// Erstellt einen Graphen mit einer horizontalen Fahrspur (Breite 40) und einem Bogen.
fn graph_with_two_lanes() -> RoadGraph {
    let mut graph = RoadGraph::new();
    graph.add_lane(Lane::new(
        LaneKind::Car,
        Segment::new(Point::new(0.0, 0.0), Point::new(400.0, 0.0)),
    ));
    graph.add_lane(Lane::new(
        LaneKind::Car,
        QuadraticCurve::new(
            Point::new(0.0, 300.0),
            Point::new(200.0, 500.0),
            Point::new(400.0, 300.0),
        ),
    ));
    graph
}

#[test]
fn test_query_on_centerline_is_hard_snap() {
    let graph = graph_with_two_lanes();
    let snap = graph
        .find_lane_snap(Point::new(150.0, 0.0), &[])
        .expect("Snap erwartet");
    assert!(snap.is_hard_snap);
    assert_eq!(snap.point, Point::new(150.0, 0.0));

    let (curve_id, on_curve) = graph
        .lanes()
        .nth(1)
        .map(|(id, lane)| (id, lane.line.at(0.3)))
        .expect("Bogen erwartet");
    let snap = graph.find_lane_snap(on_curve, &[]).expect("Snap erwartet");
    assert_eq!(snap.lane, curve_id);
    assert!(snap.is_hard_snap);
}

#[test]
fn test_query_far_away_has_no_target() {
    let graph = graph_with_two_lanes();
    // √8 · 20 ≈ 56.57
    assert!(graph.find_lane_snap(Point::new(200.0, -57.0), &[]).is_none());
    assert!(graph.find_lane_snap(Point::new(-100.0, 150.0), &[]).is_none());
}

#[test]
fn test_pull_lies_between_query_and_projection() {
    let graph = graph_with_two_lanes();
    let query = Point::new(200.0, -50.0);
    let snap = graph.find_lane_snap(query, &[]).expect("Anziehung erwartet");

    assert!(!snap.is_hard_snap);
    // Projektion (200, 0), um Spurbreite 40 Richtung Anfrage verschoben
    assert_relative_eq!(snap.point.x, 200.0);
    assert_relative_eq!(snap.point.y, -40.0);
    assert!(snap.point.y < 0.0 && snap.point.y > query.y);
}

#[test]
fn test_pull_inside_lane_width_overshoots_query() {
    let graph = graph_with_two_lanes();
    // Abstand 30: zwischen halber Breite (20) und Breite (40)
    let query = Point::new(120.0, -30.0);
    let snap = graph.find_lane_snap(query, &[]).expect("Anziehung erwartet");

    assert!(!snap.is_hard_snap);
    // Immer Projektion + 40, also jenseits der Anfrage
    assert_relative_eq!(snap.point.x, 120.0);
    assert_relative_eq!(snap.point.y, -40.0);
    assert!(snap.point.y < query.y);
}

#[test]
fn test_ghost_and_excluded_lanes_are_skipped() {
    let mut graph = graph_with_two_lanes();
    let query = Point::new(100.0, 5.0);
    let snap = graph.find_lane_snap(query, &[]).expect("Snap erwartet");

    assert!(graph.find_lane_snap(query, &[snap.lane]).is_none());

    graph.set_ghost(snap.lane, true);
    assert!(graph.find_lane_snap(query, &[]).is_none());
}

#[test]
fn test_snap_is_deterministic() {
    let graph = graph_with_two_lanes();
    let queries = [
        Point::new(12.5, 3.25),
        Point::new(200.0, 420.0),
        Point::new(390.0, 330.0),
        Point::new(210.0, -45.0),
    ];

    for query in queries {
        let first = graph.find_lane_snap(query, &[]);
        for _ in 0..5 {
            let again = graph.find_lane_snap(query, &[]);
            assert_eq!(first.map(|s| s.point.to_array()), again.map(|s| s.point.to_array()));
            assert_eq!(first.map(|s| s.lane), again.map(|s| s.lane));
        }
    }
}

#[test]
fn test_drag_endpoint_onto_other_lane() {
    let mut graph = graph_with_two_lanes();
    let options = KernelOptions::default();
    let dragged = lane_edit::begin_paint(&mut graph, LaneKind::Car, Point::new(500.0, 150.0));

    // Cursor nahe der Fahrspur: eigene Spur ausgeschlossen, Snap auf die Fahrspur
    let cursor = resolve_cursor(Point::new(380.0, 6.0), &graph, &[dragged], &options);
    assert!(cursor.snap.is_some_and(|s| s.is_hard_snap));
    assert!(lane_edit::update_paint(&mut graph, dragged, cursor.point));
    assert!(lane_edit::commit(&mut graph, dragged));
    assert_eq!(
        graph.lane(dragged).map(|l| l.line.end()),
        Some(Point::new(380.0, 0.0))
    );

    // Endpunkt zurück ins Freie ziehen: Raster greift
    let cursor = resolve_cursor(Point::new(505.0, 250.0), &graph, &[dragged], &options);
    assert!(cursor.snap.is_none());
    assert!(lane_edit::move_endpoint(&mut graph, dragged, Endpoint::End, cursor.point));
    assert!(lane_edit::commit(&mut graph, dragged));
    assert_eq!(
        graph.lane(dragged).map(|l| l.line.end()),
        Some(Point::new(500.0, 260.0))
    );
}
