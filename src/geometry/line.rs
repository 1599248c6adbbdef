//! Geschlossene Menge aller Linien-Varianten einer Spur.

use super::cubic::CubicCurve;
use super::curve::{BezierCurve, SampleTable};
use super::point::{Point, Projection};
use super::quadratic::QuadraticCurve;
use super::segment::Segment;

/// Geometrie einer Spur: Segment oder Bézier-Kurve.
///
/// Alle Varianten sind unveränderlich. Bearbeitungen erzeugen eine neue `Line`,
/// der Besitzer tauscht die Referenz aus.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// Gerades Segment
    Segment(Segment),
    /// Quadratische Bézier-Kurve
    Quadratic(QuadraticCurve),
    /// Kubische Bézier-Kurve
    Cubic(CubicCurve),
}

impl Line {
    /// Startpunkt
    pub fn start(&self) -> Point {
        match self {
            Line::Segment(seg) => seg.start(),
            Line::Quadratic(curve) => curve.start(),
            Line::Cubic(curve) => curve.start(),
        }
    }

    /// Endpunkt
    pub fn end(&self) -> Point {
        match self {
            Line::Segment(seg) => seg.end(),
            Line::Quadratic(curve) => curve.end(),
            Line::Cubic(curve) => curve.end(),
        }
    }

    /// Länge (Segment exakt, Kurven über die Lookup-Tabelle).
    pub fn length(&self) -> f64 {
        match self {
            Line::Segment(seg) => seg.length(),
            Line::Quadratic(curve) => curve.length(),
            Line::Cubic(curve) => curve.length(),
        }
    }

    /// Punkt bei Parameter `t`.
    pub fn at(&self, t: f64) -> Point {
        match self {
            Line::Segment(seg) => seg.at(t),
            Line::Quadratic(curve) => curve.at(t),
            Line::Cubic(curve) => curve.at(t),
        }
    }

    /// Tangente bei `t`; für Segmente der konstante Richtungsvektor.
    pub fn atd(&self, t: f64) -> Point {
        match self {
            Line::Segment(seg) => seg.end() - seg.start(),
            Line::Quadratic(curve) => curve.atd(t),
            Line::Cubic(curve) => curve.atd(t),
        }
    }

    /// Nächster Punkt auf der Linie samt Parameter.
    pub fn closest(&self, p: Point) -> Projection {
        match self {
            Line::Segment(seg) => seg.closest(p),
            Line::Quadratic(curve) => curve.closest(p),
            Line::Cubic(curve) => curve.closest(p),
        }
    }

    /// Linke Normale. Kurven: normiert; Segmente: Länge = Segmentlänge, `t` ignoriert.
    pub fn norm_l(&self, t: f64) -> Point {
        match self {
            Line::Segment(seg) => seg.norm_l(),
            Line::Quadratic(curve) => curve.norm_l(t),
            Line::Cubic(curve) => curve.norm_l(t),
        }
    }

    /// Rechte Normale, gleiche Konvention wie `norm_l`.
    pub fn norm_r(&self, t: f64) -> Point {
        match self {
            Line::Segment(seg) => seg.norm_r(),
            Line::Quadratic(curve) => curve.norm_r(t),
            Line::Cubic(curve) => curve.norm_r(t),
        }
    }

    /// Lookup-Tabelle der Kurve, `None` für Segmente.
    pub fn sample_table(&self) -> Option<&SampleTable> {
        self.as_curve().map(|curve| curve.sample_table())
    }

    /// Zugriff auf die gemeinsame Kurven-Schnittstelle.
    pub fn as_curve(&self) -> Option<&dyn BezierCurve> {
        match self {
            Line::Segment(_) => None,
            Line::Quadratic(curve) => Some(curve as &dyn BezierCurve),
            Line::Cubic(curve) => Some(curve as &dyn BezierCurve),
        }
    }

    /// Kontrollpolygon in Reihenfolge: Start, innere Kontrollpunkte, Ende.
    pub fn control_points(&self) -> Vec<Point> {
        match self {
            Line::Segment(seg) => vec![seg.start(), seg.end()],
            Line::Quadratic(curve) => curve.control_points().to_vec(),
            Line::Cubic(curve) => curve.control_points().to_vec(),
        }
    }

    /// Neue Linie gleicher Variante mit ersetzten Endpunkten.
    ///
    /// Innere Kontrollpunkte und Genauigkeit bleiben erhalten.
    pub fn with_endpoints(&self, s: Point, e: Point) -> Line {
        match self {
            Line::Segment(_) => Line::Segment(Segment::new(s, e)),
            Line::Quadratic(curve) => Line::Quadratic(QuadraticCurve::with_accuracy(
                s,
                curve.control(),
                e,
                curve.accuracy(),
            )),
            Line::Cubic(curve) => Line::Cubic(CubicCurve::with_accuracy(
                s,
                curve.control_start(),
                curve.control_end(),
                e,
                curve.accuracy(),
            )),
        }
    }

    /// Parallele Linie im Abstand `d` (positiv = links).
    ///
    /// Kubische Kurven werden nicht unterstützt (`None`).
    pub fn offset(&self, d: f64) -> Option<Line> {
        match self {
            Line::Segment(seg) => Some(Line::Segment(seg.offset(d))),
            Line::Quadratic(curve) => Some(Line::Quadratic(curve.offset(d))),
            Line::Cubic(_) => None,
        }
    }
}

impl From<Segment> for Line {
    fn from(seg: Segment) -> Self {
        Line::Segment(seg)
    }
}

impl From<QuadraticCurve> for Line {
    fn from(curve: QuadraticCurve) -> Self {
        Line::Quadratic(curve)
    }
}

impl From<CubicCurve> for Line {
    fn from(curve: CubicCurve) -> Self {
        Line::Cubic(curve)
    }
}
