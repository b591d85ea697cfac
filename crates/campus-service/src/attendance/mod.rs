//! Attendance reconciliation.
//!
//! Merges bulk attendance sources (the configured master CSV or an
//! uploaded CSV) into canonical storage without creating duplicate rows,
//! keeping the roster populated as a side effect.

mod csv;
mod normalize;
mod reconciler;

pub use csv::CsvTable;
pub use normalize::{normalize_date, normalize_status};
pub use reconciler::{
    AttendanceReconciler, ImportMode, ImportReport, ManualRecord, RowOutcome,
};
