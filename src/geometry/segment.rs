//! Gerades Liniensegment mit geschlossener Projektion.

use super::point::{Point, PointExt, Projection};

/// Gerades Segment von `s` nach `e`.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    s: Point,
    e: Point,
    /// Richtungsvektor `e - s`
    direction: Point,
    length: f64,
}

impl Segment {
    /// Erstellt ein Segment; Länge und Richtung werden einmalig berechnet.
    pub fn new(s: Point, e: Point) -> Self {
        let direction = e - s;
        Self {
            s,
            e,
            direction,
            length: direction.length(),
        }
    }

    /// Startpunkt
    pub fn start(&self) -> Point {
        self.s
    }

    /// Endpunkt
    pub fn end(&self) -> Point {
        self.e
    }

    /// Euklidische Länge
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Punkt bei Parameter `t`, an den Rändern exakt die Endpunkte.
    pub fn at(&self, t: f64) -> Point {
        if t <= 0.0 {
            self.s
        } else if t >= 1.0 {
            self.e
        } else {
            self.s + self.direction * t
        }
    }

    /// Projiziert `p` auf das Segment.
    ///
    /// Ein Segment der Länge 0 liefert immer `(s, 0)`. An den geklemmten Rändern
    /// werden die gespeicherten Endpunkte unverändert zurückgegeben.
    pub fn closest(&self, p: Point) -> Projection {
        if self.length == 0.0 {
            return Projection { point: self.s, t: 0.0 };
        }
        let weighted = (p - self.s).dot_components(self.direction) / (self.length * self.length);
        let t = weighted.x + weighted.y;
        if t <= 0.0 {
            return Projection { point: self.s, t: 0.0 };
        }
        if t >= 1.0 {
            return Projection { point: self.e, t: 1.0 };
        }
        Projection {
            point: self.s + self.direction * t,
            t,
        }
    }

    /// Normale nach links, konstant entlang des Segments.
    ///
    /// Nicht normiert: die Länge entspricht der Segmentlänge.
    pub fn norm_l(&self) -> Point {
        self.direction.rotate90_ccw()
    }

    /// Normale nach rechts, konstant und nicht normiert.
    pub fn norm_r(&self) -> Point {
        self.direction.rotate90_cw()
    }

    /// Parallel verschobenes Segment im Abstand `d` (positiv = links).
    ///
    /// Ein Segment der Länge 0 hat keine Richtung und wird unverändert kopiert.
    pub fn offset(&self, d: f64) -> Segment {
        let shift = self.norm_l().normalize_or_zero() * d;
        Segment::new(self.s + shift, self.e + shift)
    }
}
