//! Editor-Use-Cases auf Basis des Kerns: Cursor-Auflösung und Spur-Bearbeitung.
//!
//! Enthält keinen UI-Zustand; Eingabe-Routing und Rendering liegen beim Aufrufer.

pub mod cursor;
pub mod lane_edit;

pub use cursor::{grid_snap, resolve_cursor, ResolvedCursor};
