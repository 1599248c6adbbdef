//! Eine einzelne Fahrbahn-Spur samt Typ, Breite und Geometrie.

use std::fmt;

use crate::geometry::Line;
use crate::shared::options::{LANE_WIDTH_BARRIER, LANE_WIDTH_CAR, LANE_WIDTH_SIDEWALK};

/// Stabile ID einer Spur innerhalb eines `RoadGraph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LaneId(pub u64);

impl fmt::Display for LaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Art der Spur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaneKind {
    /// Fahrspur für Autos
    #[default]
    Car,
    /// Gehweg
    Sidewalk,
    /// Leitplanke / Absperrung
    Barrier,
}

impl LaneKind {
    /// Standardbreite beim Zeichnen einer neuen Spur.
    pub fn default_width(self) -> f64 {
        match self {
            LaneKind::Car => LANE_WIDTH_CAR,
            LaneKind::Sidewalk => LANE_WIDTH_SIDEWALK,
            LaneKind::Barrier => LANE_WIDTH_BARRIER,
        }
    }
}

/// Endpunkt einer Spur, der beim Verschieben gegriffen wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Startpunkt `s`
    Start,
    /// Endpunkt `e`
    End,
}

/// Eine Spur: reiner Datenhalter ohne eigenes Verhalten.
///
/// `line` wird bei Bearbeitung komplett ersetzt, nie in-place verändert.
#[derive(Debug, Clone, PartialEq)]
pub struct Lane {
    /// Art der Spur
    pub kind: LaneKind,
    /// Breite in Welteinheiten
    pub width: f64,
    /// Mittellinie der Spur
    pub line: Line,
    /// Provisorisch (wird gerade gezeichnet/gezogen), kein Snap-Ziel
    pub ghost: bool,
}

impl Lane {
    /// Erstellt eine Spur mit Standardbreite ihres Typs.
    pub fn new(kind: LaneKind, line: impl Into<Line>) -> Self {
        Self::with_width(kind, kind.default_width(), line)
    }

    /// Erstellt eine Spur mit eigener Breite (negative Werte werden auf 0 begrenzt).
    pub fn with_width(kind: LaneKind, width: f64, line: impl Into<Line>) -> Self {
        Self {
            kind,
            width: width.max(0.0),
            line: line.into(),
            ghost: false,
        }
    }
}
