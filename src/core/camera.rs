//! 2D-Kamera für Pan (mit Trägheit) und Zoom.

use crate::geometry::Point;

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Position der Kamera in Welt-Koordinaten (Bildschirm-Mitte)
    pub position: Point,
    /// Zoom-Faktor (1.0 = ein Pixel pro Welteinheit)
    pub scale: f64,
    /// Aktuelle Pan-Geschwindigkeit in Welteinheiten pro Schritt
    velocity: Point,
    /// Letzte Screen-Position während eines Drags
    drag_last: Option<Point>,
}

impl Camera2D {
    /// Minimaler Zoom-Faktor.
    pub const SCALE_MIN: f64 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const SCALE_MAX: f64 = 10.0;
    /// Verstärkung der Drag-Bewegung beim Loslassen.
    const RELEASE_GAIN: f64 = 5.0;
    /// Dämpfung der Geschwindigkeit pro Trägheits-Schritt.
    const DAMPING: f64 = 0.9;
    /// Unterhalb dieser Geschwindigkeit stoppt die Kamera.
    const REST_SPEED: f64 = 0.1;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: Point::ZERO,
            scale: 1.0,
            velocity: Point::ZERO,
            drag_last: None,
        }
    }

    /// Konvertiert Screen-Koordinaten zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Point, viewport: Point) -> Point {
        (screen_pos - viewport / 2.0) / self.scale + self.position
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: Point) {
        self.position += delta;
    }

    /// Ändert den Zoom-Faktor
    pub fn zoom_by(&mut self, factor: f64) {
        self.scale = (self.scale * factor).clamp(Self::SCALE_MIN, Self::SCALE_MAX);
    }

    /// Startet einen Drag an der Screen-Position
    pub fn begin_drag(&mut self, screen_pos: Point) {
        self.drag_last = Some(screen_pos);
    }

    /// Zieht die Kamera mit; die Geschwindigkeit folgt der letzten Bewegung
    pub fn drag_to(&mut self, screen_pos: Point) {
        let Some(last) = self.drag_last else {
            return;
        };
        let delta = last - screen_pos;
        self.position += delta;
        self.velocity = delta * Self::RELEASE_GAIN;
        self.drag_last = Some(screen_pos);
    }

    /// Beendet den Drag, die Kamera gleitet danach aus
    pub fn end_drag(&mut self) {
        self.drag_last = None;
    }

    /// Gibt `true` zurück, solange ein Drag läuft
    pub fn is_dragging(&self) -> bool {
        self.drag_last.is_some()
    }

    /// Aktuelle Pan-Geschwindigkeit
    pub fn velocity(&self) -> Point {
        self.velocity
    }

    /// Ein Trägheits-Schritt (pro Frame aufrufen).
    ///
    /// Während eines Drags wird nur gedämpft, nicht bewegt.
    pub fn step_inertia(&mut self) {
        if self.velocity.length_squared() <= Self::REST_SPEED * Self::REST_SPEED {
            self.velocity = Point::ZERO;
            return;
        }
        if !self.is_dragging() {
            self.position += self.velocity;
        }
        self.velocity *= Self::DAMPING;
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
