//! Core-Domänentypen: Spuren, Spur-Sammlung, Snapping, Kontrollpunkt-Auswahl, Kamera.

pub mod camera;
/// Spur-Datenmodell
///
/// - Lane: Spur mit Typ, Breite, Geometrie und Ghost-Flag
/// - LaneKind: Fahrspur, Gehweg oder Leitplanke
/// - Endpoint: gegriffener Endpunkt beim Verschieben
pub mod lane;
pub mod pick;
pub mod road_graph;
pub mod snap;

pub use camera::Camera2D;
pub use lane::{Endpoint, Lane, LaneId, LaneKind};
pub use pick::{pick_control_point, ControlPointPick};
pub use road_graph::{Junction, Road, RoadGraph};
pub use snap::{find_lane_snap, LaneSnap};
