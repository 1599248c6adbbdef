//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Konfiguration, die von `geometry`, `core` und `app`
//! gleichermaßen gelesen wird, um direkte Abhängigkeiten zu vermeiden.

pub mod options;

pub use options::{CurveAccuracy, KernelOptions};
pub use options::{CURVE_LUT_POINTS, CURVE_PROJECT_T_EPSILON, GRID_CELL_SIZE};
