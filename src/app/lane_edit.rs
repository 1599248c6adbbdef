//! Use-Cases zum Zeichnen, Verschieben und Löschen von Spuren.
//!
//! Jede Bearbeitung ersetzt die Geometrie einer Spur vollständig; die
//! Lookup-Tabellen alter Kurven verfallen damit automatisch.

use crate::core::{Endpoint, Lane, LaneId, LaneKind, LaneSnap, RoadGraph};
use crate::geometry::{Point, QuadraticCurve, Segment};
use crate::shared::KernelOptions;

/// Beginnt eine neue Spur als Ghost mit Länge 0 an `at`.
pub fn begin_paint(graph: &mut RoadGraph, kind: LaneKind, at: Point) -> LaneId {
    let mut lane = Lane::new(kind, Segment::new(at, at));
    lane.ghost = true;
    graph.add_lane(lane)
}

/// Zieht das Ende der gerade gezeichneten Spur zum Cursor.
pub fn update_paint(graph: &mut RoadGraph, id: LaneId, cursor: Point) -> bool {
    let Some(start) = graph.lane(id).map(|lane| lane.line.start()) else {
        return false;
    };
    graph.replace_line(id, Segment::new(start, cursor).into())
}

/// Schließt das Zeichnen bzw. Verschieben ab: die Spur wird zum Snap-Ziel.
pub fn commit(graph: &mut RoadGraph, id: LaneId) -> bool {
    let committed = graph.set_ghost(id, false);
    if committed {
        log::debug!("Spur {} übernommen", id);
    }
    committed
}

/// Verschiebt einen Endpunkt der Spur; innere Kontrollpunkte bleiben erhalten.
///
/// Die Spur wird dabei als Ghost markiert, bis `commit` aufgerufen wird.
pub fn move_endpoint(graph: &mut RoadGraph, id: LaneId, endpoint: Endpoint, cursor: Point) -> bool {
    let Some(lane) = graph.lane(id) else {
        return false;
    };
    let (s, e) = match endpoint {
        Endpoint::Start => (cursor, lane.line.end()),
        Endpoint::End => (lane.line.start(), cursor),
    };
    let line = lane.line.with_endpoints(s, e);
    graph.set_ghost(id, true);
    graph.replace_line(id, line)
}

/// Legt eine parallele Spur gleichen Typs im Abstand `distance` (positiv = links) an.
///
/// Kubische Spuren haben keinen Offset und liefern `None`.
pub fn add_parallel_lane(graph: &mut RoadGraph, id: LaneId, distance: f64) -> Option<LaneId> {
    let lane = graph.lane(id)?;
    let line = lane.line.offset(distance)?;
    let parallel = Lane::with_width(lane.kind, lane.width, line);
    Some(graph.add_lane(parallel))
}

/// Löscht die Spur eines harten Snaps; weiche Anziehung löscht nichts.
pub fn delete_snapped_lane(graph: &mut RoadGraph, snap: &LaneSnap) -> Option<Lane> {
    if !snap.is_hard_snap {
        return None;
    }
    graph.remove_lane(snap.lane)
}

/// Biegt die Spur zu einer quadratischen Kurve durch ihre Endpunkte und `control`.
pub fn bend_lane(graph: &mut RoadGraph, id: LaneId, control: Point, options: &KernelOptions) -> bool {
    let Some(lane) = graph.lane(id) else {
        return false;
    };
    let curve = QuadraticCurve::with_accuracy(
        lane.line.start(),
        control,
        lane.line.end(),
        options.curve_accuracy,
    );
    graph.replace_line(id, curve.into())
}
