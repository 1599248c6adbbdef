//! Kubische Bézier-Kurve.

use super::curve::{BezierCurve, SampleTable};
use super::point::Point;
use crate::shared::CurveAccuracy;

/// B(t) = (1-t)³·S + 3(1-t)²t·CL + 3(1-t)t²·CR + t³·E
pub fn cubic_point(s: Point, cl: Point, cr: Point, e: Point, t: f64) -> Point {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    s * (inv2 * inv) + cl * (3.0 * inv2 * t) + cr * (3.0 * inv * t2) + e * (t2 * t)
}

/// B'(t) = 3(1-t)²·(CL-S) + 6(1-t)t·(CR-CL) + 3t²·(E-CR)
pub fn cubic_derivative(s: Point, cl: Point, cr: Point, e: Point, t: f64) -> Point {
    let inv = 1.0 - t;
    (cl - s) * (3.0 * inv * inv) + (cr - cl) * (6.0 * inv * t) + (e - cr) * (3.0 * t * t)
}

/// Kubische Bézier-Kurve mit zwei Kontrollpunkten.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicCurve {
    s: Point,
    cl: Point,
    cr: Point,
    e: Point,
    accuracy: CurveAccuracy,
    table: SampleTable,
}

impl CubicCurve {
    /// Erstellt eine Kurve mit Standard-Genauigkeit.
    pub fn new(s: Point, cl: Point, cr: Point, e: Point) -> Self {
        Self::with_accuracy(s, cl, cr, e, CurveAccuracy::default())
    }

    /// Erstellt eine Kurve mit eigener Genauigkeit.
    pub fn with_accuracy(
        s: Point,
        cl: Point,
        cr: Point,
        e: Point,
        accuracy: CurveAccuracy,
    ) -> Self {
        let accuracy = accuracy.sanitized();
        let table = SampleTable::build(s, e, accuracy.lut_points, |t| {
            cubic_point(s, cl, cr, e, t)
        });
        Self {
            s,
            cl,
            cr,
            e,
            accuracy,
            table,
        }
    }

    /// Kontrollpunkt auf der Startseite
    pub fn control_start(&self) -> Point {
        self.cl
    }

    /// Kontrollpunkt auf der Endseite
    pub fn control_end(&self) -> Point {
        self.cr
    }

    /// Kontrollpolygon `[s, cl, cr, e]`
    pub fn control_points(&self) -> [Point; 4] {
        [self.s, self.cl, self.cr, self.e]
    }
}

impl BezierCurve for CubicCurve {
    fn start(&self) -> Point {
        self.s
    }

    fn end(&self) -> Point {
        self.e
    }

    fn at(&self, t: f64) -> Point {
        cubic_point(self.s, self.cl, self.cr, self.e, t)
    }

    fn atd(&self, t: f64) -> Point {
        cubic_derivative(self.s, self.cl, self.cr, self.e, t)
    }

    fn sample_table(&self) -> &SampleTable {
        &self.table
    }

    fn accuracy(&self) -> CurveAccuracy {
        self.accuracy
    }
}
