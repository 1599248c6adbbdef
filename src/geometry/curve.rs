//! Gemeinsame Basis der Bézier-Kurven: Lookup-Tabelle und Projektions-Suche.
//!
//! Kurven sind nach der Konstruktion unveränderlich. Die Lookup-Tabelle bleibt
//! deshalb ohne Invalidierung gültig; jede Bearbeitung erzeugt eine neue Kurve.

use super::point::{Point, PointExt, Projection};
use crate::shared::CurveAccuracy;

/// Unveränderliche Tabelle von `N + 1` Kurvenpunkten bei gleichmäßigen t-Schritten.
///
/// Index 0 ist exakt der Startpunkt, Index N exakt der Endpunkt.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    points: Vec<Point>,
    length: f64,
}

impl SampleTable {
    /// Baut die Tabelle über `eval` mit `intervals` Schritten (mindestens 1).
    pub fn build(s: Point, e: Point, intervals: usize, eval: impl Fn(f64) -> Point) -> Self {
        let intervals = intervals.max(1);
        let mut points = Vec::with_capacity(intervals + 1);
        points.push(s);
        for i in 1..intervals {
            points.push(eval(i as f64 / intervals as f64));
        }
        points.push(e);

        let length = points.windows(2).map(|w| w[0].distance(w[1])).sum();
        Self { points, length }
    }

    /// Geordnete, read-only Sicht auf die Tabelle.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Anzahl der Intervalle N (Tabelle hat N + 1 Einträge).
    pub fn intervals(&self) -> usize {
        self.points.len() - 1
    }

    /// Approximierte Bogenlänge über alle Tabellen-Intervalle.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Index des Tabellenpunkts mit minimaler quadrierter Distanz zu `p`.
    ///
    /// Bei Gleichstand gewinnt der kleinere Index.
    pub fn nearest_index(&self, p: Point) -> usize {
        let mut nearest = 0;
        let mut nearest_sqd = f64::INFINITY;
        for (i, sample) in self.points.iter().enumerate() {
            let sqd = (*sample - p).length_squared();
            if sqd < nearest_sqd {
                nearest = i;
                nearest_sqd = sqd;
            }
        }
        nearest
    }
}

/// Fähigkeiten einer Bézier-Kurve.
///
/// Implementierungen liefern Auswertung, Ableitung und ihre Tabelle;
/// Normalen und Projektion sind für alle Grade identisch.
pub trait BezierCurve {
    /// Startpunkt
    fn start(&self) -> Point;
    /// Endpunkt
    fn end(&self) -> Point;
    /// Punkt bei Parameter `t` (explizite Bernstein-Form).
    fn at(&self, t: f64) -> Point;
    /// Erste Ableitung (Tangente) bei `t`, nicht normiert.
    fn atd(&self, t: f64) -> Point;
    /// Bei der Konstruktion erzeugte Lookup-Tabelle.
    fn sample_table(&self) -> &SampleTable;
    /// Genauigkeit, mit der die Kurve erzeugt wurde.
    fn accuracy(&self) -> CurveAccuracy;

    /// Approximierte Bogenlänge.
    fn length(&self) -> f64 {
        self.sample_table().length()
    }

    /// Normierte Normale nach links.
    ///
    /// Undefiniert (NaN), wenn die Ableitung bei `t` der Nullvektor ist.
    fn norm_l(&self, t: f64) -> Point {
        self.atd(t).rotate90_ccw().norm_to(1.0)
    }

    /// Normierte Normale nach rechts, gleiche Einschränkung wie `norm_l`.
    fn norm_r(&self, t: f64) -> Point {
        self.atd(t).rotate90_cw().norm_to(1.0)
    }

    /// Projiziert `p` auf die Kurve.
    ///
    /// Grobphase: nächster Tabellenpunkt. Feinphase: Suchfenster mit halber
    /// Tabellen-Schrittweite um diesen Punkt; pro Schritt werden beide
    /// Fensterränder verglichen und die entferntere Hälfte verworfen, bis die
    /// Fensterbreite `t_epsilon` erreicht oder sich nicht mehr teilen lässt. Liegen zwei lokale Minima im selben
    /// Tabellen-Intervall, kann das falsche gefunden werden.
    fn closest(&self, p: Point) -> Projection {
        let table = self.sample_table();
        let n = table.intervals() as f64;
        let center = table.nearest_index(p) as f64 / n;
        let half_step = 0.5 / n;

        let mut tl = (center - half_step).max(0.0);
        let mut tr = (center + half_step).min(1.0);
        let epsilon = self.accuracy().t_epsilon;

        loop {
            let middle = (tl + tr) / 2.0;
            let quarter = (tr - tl) / 2.0;
            // Fenster schrumpft nicht mehr (benachbarte f64-Werte)
            if quarter * 2.0 <= epsilon || middle <= tl || middle >= tr {
                return Projection {
                    point: self.at(middle),
                    t: middle,
                };
            }

            let ml = self.at(middle - quarter);
            let mr = self.at(middle + quarter);
            if (ml - p).length_squared() < (mr - p).length_squared() {
                tr = middle;
            } else {
                tl = middle;
            }
        }
    }
}
