//! Die zentrale Spur-Sammlung mit Straßen und Kreuzungen.

use indexmap::IndexMap;

use super::pick::{pick_control_point, ControlPointPick};
use super::snap::{find_lane_snap, LaneSnap};
use super::{Lane, LaneId};
use crate::geometry::{Line, Point};

/// Kreuzung: strukturelle Verknüpfung mehrerer Spuren (vom Kern nicht ausgewertet).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Junction {
    /// Verbundene Spuren
    pub connected: Vec<LaneId>,
}

/// Straße: Gruppe nebeneinanderliegender Spuren.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Road {
    /// Spuren der Straße, von links nach rechts
    pub lanes: Vec<LaneId>,
    /// Provisorisch (wird gerade gezeichnet)
    pub ghost: bool,
}

/// Container für alle Spuren eines Straßennetzes.
///
/// Die Iterationsreihenfolge entspricht der Einfügereihenfolge und ist damit
/// deterministisch (relevant für Gleichstände beim Snapping).
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    /// Alle Spuren, indexiert nach ihrer ID
    lanes: IndexMap<LaneId, Lane>,
    /// Nächste zu vergebende ID
    next_id: u64,
    /// Kreuzungen
    pub junctions: Vec<Junction>,
    /// Straßen
    pub roads: Vec<Road>,
}

impl RoadGraph {
    /// Erstellt einen leeren Graphen
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt eine Spur hinzu und vergibt eine neue ID
    pub fn add_lane(&mut self, lane: Lane) -> LaneId {
        let id = LaneId(self.next_id);
        self.next_id += 1;
        log::debug!("Spur {} hinzugefügt ({:?}, Breite {})", id, lane.kind, lane.width);
        self.lanes.insert(id, lane);
        id
    }

    /// Entfernt eine Spur inklusive aller Verweise aus Straßen und Kreuzungen
    pub fn remove_lane(&mut self, id: LaneId) -> Option<Lane> {
        let removed = self.lanes.shift_remove(&id);
        if removed.is_some() {
            for road in &mut self.roads {
                road.lanes.retain(|lane| *lane != id);
            }
            for junction in &mut self.junctions {
                junction.connected.retain(|lane| *lane != id);
            }
            log::debug!("Spur {} entfernt", id);
        }
        removed
    }

    /// Gibt die Spur mit der ID zurück
    pub fn lane(&self, id: LaneId) -> Option<&Lane> {
        self.lanes.get(&id)
    }

    /// Veränderbarer Zugriff auf eine Spur (Typ, Breite, Ghost-Flag)
    pub fn lane_mut(&mut self, id: LaneId) -> Option<&mut Lane> {
        self.lanes.get_mut(&id)
    }

    /// Ersetzt die Geometrie einer Spur vollständig
    pub fn replace_line(&mut self, id: LaneId, line: Line) -> bool {
        let Some(lane) = self.lanes.get_mut(&id) else {
            return false;
        };
        lane.line = line;
        true
    }

    /// Setzt das Ghost-Flag einer Spur
    pub fn set_ghost(&mut self, id: LaneId, ghost: bool) -> bool {
        let Some(lane) = self.lanes.get_mut(&id) else {
            return false;
        };
        lane.ghost = ghost;
        true
    }

    /// Iterator über alle Spuren in Einfügereihenfolge
    pub fn lanes(&self) -> impl Iterator<Item = (LaneId, &Lane)> + '_ {
        self.lanes.iter().map(|(id, lane)| (*id, lane))
    }

    /// Anzahl der Spuren
    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    /// Prüft ob eine Spur existiert
    pub fn contains_lane(&self, id: LaneId) -> bool {
        self.lanes.contains_key(&id)
    }

    /// Legt eine Straße aus bestehenden Spuren an; unbekannte IDs werden verworfen
    pub fn add_road(&mut self, lanes: Vec<LaneId>) -> usize {
        let lanes = lanes
            .into_iter()
            .filter(|id| self.lanes.contains_key(id))
            .collect();
        self.roads.push(Road {
            lanes,
            ghost: false,
        });
        self.roads.len() - 1
    }

    /// Legt eine Kreuzung an; unbekannte IDs werden verworfen
    pub fn add_junction(&mut self, connected: Vec<LaneId>) -> usize {
        let connected = connected
            .into_iter()
            .filter(|id| self.lanes.contains_key(id))
            .collect();
        self.junctions.push(Junction { connected });
        self.junctions.len() - 1
    }

    /// Snap-Abfrage gegen alle Spuren des Graphen
    pub fn find_lane_snap(&self, query: Point, exclude: &[LaneId]) -> Option<LaneSnap> {
        find_lane_snap(query, self.lanes(), exclude)
    }

    /// Sucht den nächsten greifbaren Kontrollpunkt
    pub fn pick_control_point(&self, query: Point) -> Option<ControlPointPick> {
        pick_control_point(query, self.lanes())
    }
}
