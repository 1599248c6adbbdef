//! Quadratische Bézier-Kurve mit Parallel-Offset (Tiller-Hanson).

use super::curve::{BezierCurve, SampleTable};
use super::point::{line_intersection, Point, PointExt};
use crate::shared::CurveAccuracy;

/// B(t) = (1-t)²·S + 2(1-t)t·C + t²·E
pub fn quadratic_point(s: Point, c: Point, e: Point, t: f64) -> Point {
    let inv = 1.0 - t;
    s * (inv * inv) + c * (2.0 * inv * t) + e * (t * t)
}

/// B'(t) = 2(1-t)·(C-S) + 2t·(E-C)
pub fn quadratic_derivative(s: Point, c: Point, e: Point, t: f64) -> Point {
    (c - s) * (2.0 * (1.0 - t)) + (e - c) * (2.0 * t)
}

/// Quadratische Bézier-Kurve mit einem Kontrollpunkt.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticCurve {
    s: Point,
    c: Point,
    e: Point,
    accuracy: CurveAccuracy,
    table: SampleTable,
}

impl QuadraticCurve {
    /// Erstellt eine Kurve mit Standard-Genauigkeit.
    pub fn new(s: Point, c: Point, e: Point) -> Self {
        Self::with_accuracy(s, c, e, CurveAccuracy::default())
    }

    /// Erstellt eine Kurve mit eigener Genauigkeit; die Tabelle wird sofort gebaut.
    pub fn with_accuracy(s: Point, c: Point, e: Point, accuracy: CurveAccuracy) -> Self {
        let accuracy = accuracy.sanitized();
        let table = SampleTable::build(s, e, accuracy.lut_points, |t| quadratic_point(s, c, e, t));
        Self {
            s,
            c,
            e,
            accuracy,
            table,
        }
    }

    /// Kontrollpunkt
    pub fn control(&self) -> Point {
        self.c
    }

    /// Kontrollpolygon `[s, c, e]`
    pub fn control_points(&self) -> [Point; 3] {
        [self.s, self.c, self.e]
    }

    /// Approximiert die um `d` nach links (entlang `norm_l`) verschobene Kurve.
    ///
    /// Endpunkte werden entlang ihrer Normalen verschoben, der neue Kontrollpunkt
    /// ist der Schnitt der beiden Tangenten-Strahlen durch die verschobenen
    /// Endpunkte. Je spitzer der Innenwinkel am Kontrollpunkt, desto ungenauer.
    /// Sind die Strahlen parallel (gerades Kontrollpolygon), wird der
    /// Kontrollpunkt entlang der Normalen bei t = 0.5 verschoben.
    pub fn offset(&self, d: f64) -> QuadraticCurve {
        let s_offset = self.s + self.norm_l(0.0) * d;
        let e_offset = self.e + self.norm_l(1.0) * d;

        let s_ray = (self.c - self.s).norm_to(d);
        let e_ray = (self.e - self.c).norm_to(d);

        let control = match line_intersection(s_offset, s_offset + s_ray, e_offset, e_offset + e_ray)
        {
            Some(intx) => intx.point,
            None => self.c + self.norm_l(0.5) * d,
        };

        QuadraticCurve::with_accuracy(s_offset, control, e_offset, self.accuracy)
    }
}

impl BezierCurve for QuadraticCurve {
    fn start(&self) -> Point {
        self.s
    }

    fn end(&self) -> Point {
        self.e
    }

    fn at(&self, t: f64) -> Point {
        quadratic_point(self.s, self.c, self.e, t)
    }

    fn atd(&self, t: f64) -> Point {
        quadratic_derivative(self.s, self.c, self.e, t)
    }

    fn sample_table(&self) -> &SampleTable {
        &self.table
    }

    fn accuracy(&self) -> CurveAccuracy {
        self.accuracy
    }
}
