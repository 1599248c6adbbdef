//! Zentrale Konfiguration für den Geometrie-Kern.
//!
//! `KernelOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kurven ──────────────────────────────────────────────────────────

/// Anzahl der Intervalle der Kurven-Lookup-Tabelle (Tabelle hat N+1 Einträge).
pub const CURVE_LUT_POINTS: usize = 100;
/// Genauigkeit des t-Parameters in der Feinphase der Kurven-Projektion.
pub const CURVE_PROJECT_T_EPSILON: f64 = 1e-5;
/// Obergrenze der LUT-Intervalle pro Kurve.
pub const CURVE_LUT_POINTS_MAX: usize = 100_000;

// ── Snapping ────────────────────────────────────────────────────────

/// Faktor auf `(width / 2)²`, ab dem eine Spur nicht mehr anzieht.
pub const SNAP_PULL_RANGE_FACTOR: f64 = 8.0;
/// Kantenlänge der Rasterzellen, auf die ein nicht gesnappter Cursor einrastet.
pub const GRID_CELL_SIZE: f64 = 40.0;

// ── Spuren ──────────────────────────────────────────────────────────

/// Standardbreite einer Fahrspur.
pub const LANE_WIDTH_CAR: f64 = 40.0;
/// Standardbreite eines Gehwegs.
pub const LANE_WIDTH_SIDEWALK: f64 = 20.0;
/// Standardbreite einer Leitplanke.
pub const LANE_WIDTH_BARRIER: f64 = 50.0;

/// Genauigkeits-/Performance-Abwägung einer einzelnen Kurve.
///
/// Wird bei der Konstruktion fixiert, die Lookup-Tabelle hängt direkt davon ab.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveAccuracy {
    /// Anzahl der LUT-Intervalle (mindestens 1)
    pub lut_points: usize,
    /// Abbruchbreite des Suchfensters in der Feinphase
    pub t_epsilon: f64,
}

impl CurveAccuracy {
    /// Erstellt eine Genauigkeit; ungültige Werte fallen auf die Defaults zurück.
    pub fn new(lut_points: usize, t_epsilon: f64) -> Self {
        Self {
            lut_points,
            t_epsilon,
        }
        .sanitized()
    }

    /// Korrigiert ungültige Werte.
    ///
    /// `lut_points` wird auf `1..=CURVE_LUT_POINTS_MAX` begrenzt, `t_epsilon`
    /// nach unten auf `f64::EPSILON`; nicht-positive Werte und NaN werden zum Default.
    pub fn sanitized(self) -> Self {
        let t_epsilon = if self.t_epsilon > 0.0 {
            self.t_epsilon.max(f64::EPSILON)
        } else {
            CURVE_PROJECT_T_EPSILON
        };
        Self {
            lut_points: self.lut_points.clamp(1, CURVE_LUT_POINTS_MAX),
            t_epsilon,
        }
    }
}

impl Default for CurveAccuracy {
    fn default() -> Self {
        Self {
            lut_points: CURVE_LUT_POINTS,
            t_epsilon: CURVE_PROJECT_T_EPSILON,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Kern-Optionen.
/// Wird vom Aufrufer als TOML-Datei gespeichert und geladen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelOptions {
    // ── Snapping ────────────────────────────────────────────────
    /// Snapping auf bestehende Spuren aktiv
    #[serde(default = "default_snapping_enabled")]
    pub snapping_enabled: bool,
    /// Rasterweite für nicht gesnappte Cursor-Positionen
    #[serde(default = "default_grid_cell_size")]
    pub grid_cell_size: f64,

    // ── Kurven ──────────────────────────────────────────────────
    /// Genauigkeit neu erzeugter Kurven
    #[serde(default)]
    pub curve_accuracy: CurveAccuracy,
}

impl Default for KernelOptions {
    fn default() -> Self {
        Self {
            snapping_enabled: true,
            grid_cell_size: GRID_CELL_SIZE,
            curve_accuracy: CurveAccuracy::default(),
        }
    }
}

/// Serde-Default für `snapping_enabled`.
fn default_snapping_enabled() -> bool {
    true
}

/// Serde-Default für `grid_cell_size` (Abwärtskompatibilität).
fn default_grid_cell_size() -> f64 {
    GRID_CELL_SIZE
}

impl KernelOptions {
    /// Parst Optionen aus TOML-Text und korrigiert ungültige Werte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let mut opts: Self = toml::from_str(content)?;
        let accuracy = opts.curve_accuracy.sanitized();
        if accuracy != opts.curve_accuracy {
            log::warn!(
                "Ungültige Kurven-Genauigkeit {:?}, verwende {:?}",
                opts.curve_accuracy,
                accuracy
            );
            opts.curve_accuracy = accuracy;
        }
        if opts.grid_cell_size.is_nan() || opts.grid_cell_size <= 0.0 {
            log::warn!(
                "Ungültige Rasterweite {}, verwende {}",
                opts.grid_cell_size,
                GRID_CELL_SIZE
            );
            opts.grid_cell_size = GRID_CELL_SIZE;
        }
        Ok(opts)
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }
}
