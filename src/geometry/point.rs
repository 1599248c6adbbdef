//! Vektor-Algebra auf `glam::DVec2` sowie Ergebnis-Typen für Projektion und Geradenschnitt.
//!
//! Alle Operationen liefern neue Werte, kein Punkt wird nach der Konstruktion verändert.
//! Koordinatensystem ist das Screen-System (y wächst nach unten), daher die
//! gespiegelte y-Achse in den Winkelfunktionen.

use glam::DVec2;
use std::f64::consts::TAU;

/// 2D-Punkt bzw. -Vektor des Kerns.
pub type Point = DVec2;

/// Ergänzende Vektor-Operationen, die glam nicht direkt anbietet.
pub trait PointExt: Sized {
    /// Addiert `dx`/`dy` achsenweise (Subtraktion: negative Werte übergeben).
    fn offset(self, dx: f64, dy: f64) -> Self;
    /// Multipliziert achsenweise mit getrennten Faktoren.
    fn scale_xy(self, sx: f64, sy: f64) -> Self;
    /// Dividiert achsenweise durch getrennte Divisoren.
    fn div_xy(self, dx: f64, dy: f64) -> Self;
    /// Komponentenweises Produkt `(a.x*b.x, a.y*b.y)`.
    ///
    /// Liefert bewusst einen Punkt, nicht das Skalarprodukt. Die Summe beider
    /// Komponenten ergibt das echte Skalarprodukt.
    fn dot_components(self, other: Self) -> Self;
    /// Dreht um 90° gegen den Uhrzeigersinn um den Ursprung.
    fn rotate90_ccw(self) -> Self;
    /// Dreht um 90° im Uhrzeigersinn um den Ursprung.
    fn rotate90_cw(self) -> Self;
    /// Skaliert den Vektor auf Länge `d`.
    ///
    /// Für den Nullvektor ist das Ergebnis undefiniert (NaN-Komponenten),
    /// Aufrufer müssen vorher prüfen.
    fn norm_to(self, d: f64) -> Self;
    /// Winkel mit gespiegelter y-Achse, Intervall (−π, π].
    fn screen_angle(self) -> f64;
    /// Winkel mit gespiegelter y-Achse, Intervall [0, 2π).
    fn screen_angle_tau(self) -> f64;
}

impl PointExt for DVec2 {
    fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    fn scale_xy(self, sx: f64, sy: f64) -> Self {
        Self::new(self.x * sx, self.y * sy)
    }

    fn div_xy(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x / dx, self.y / dy)
    }

    fn dot_components(self, other: Self) -> Self {
        self * other
    }

    fn rotate90_ccw(self) -> Self {
        Self::new(-self.y, self.x)
    }

    fn rotate90_cw(self) -> Self {
        Self::new(self.y, -self.x)
    }

    fn norm_to(self, d: f64) -> Self {
        self / (self.length() / d)
    }

    fn screen_angle(self) -> f64 {
        (-self.y).atan2(self.x)
    }

    fn screen_angle_tau(self) -> f64 {
        let v = self.screen_angle();
        if v < 0.0 { v + TAU } else { v }
    }
}

/// Ergebnis einer Projektion: Punkt auf der Linie plus zugehöriger Parameter t ∈ [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Projizierter Punkt
    pub point: Point,
    /// Parameter des Punktes entlang der Linie
    pub t: f64,
}

impl Projection {
    /// Quadrierte Distanz zwischen Projektion und Anfragepunkt.
    pub fn distance_squared_to(&self, query: Point) -> f64 {
        (self.point - query).length_squared()
    }
}

/// Schnittpunkt zweier unendlicher Geraden.
///
/// `on_first`/`on_second` markieren, ob der Punkt strikt im Inneren des
/// jeweiligen Ursprungs-Segments liegt (Parameter in (0, 1)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineIntersection {
    /// Schnittpunkt
    pub point: Point,
    /// Liegt strikt innerhalb von Segment 1
    pub on_first: bool,
    /// Liegt strikt innerhalb von Segment 2
    pub on_second: bool,
}

/// Schneidet die Geraden durch `(p1s, p1e)` und `(p2s, p2e)`.
///
/// Gibt `None` zurück, wenn die Richtungsvektoren parallel sind (Determinante exakt 0),
/// parallele und deckungsgleiche Geraden werden nicht unterschieden.
pub fn line_intersection(
    p1s: Point,
    p1e: Point,
    p2s: Point,
    p2e: Point,
) -> Option<LineIntersection> {
    let p1v = p1e - p1s;
    let p2v = p2e - p2s;
    let denominator = p2v.y * p1v.x - p2v.x * p1v.y;
    if denominator == 0.0 {
        return None;
    }

    let dy = p1s.y - p2s.y;
    let dx = p1s.x - p2s.x;
    let a = (p2v.x * dy - p2v.y * dx) / denominator;
    let b = (p1v.x * dy - p1v.y * dx) / denominator;

    Some(LineIntersection {
        point: p1s + p1v * a,
        on_first: a > 0.0 && a < 1.0,
        on_second: b > 0.0 && b < 1.0,
    })
}
