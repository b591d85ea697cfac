//! The attendance reconciler: idempotent merge of bulk attendance rows
//! into canonical storage.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{info, warn};

use campus_auth::CredentialVault;
use campus_core::error::AppError;
use campus_core::result::AppResult;
use campus_database::repositories::attendance::AttendanceRepository;
use campus_database::repositories::student::StudentRepository;
use campus_entity::attendance::AttendanceEntry;

use super::csv::CsvTable;
use super::normalize::{normalize_date, normalize_status};

/// Columns every attendance source must carry. `remarks` is optional.
const REQUIRED_COLUMNS: [&str; 6] = [
    "student_id",
    "student_name",
    "course",
    "batch",
    "date",
    "attendance_status",
];

/// How a batch interacts with existing attendance rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Clear all prior attendance rows before merging (full resync).
    Replace,
    /// Merge on top of existing rows (append-only).
    Append,
}

/// The fate of one source row. Failures at row granularity never abort
/// the batch; they are recorded here instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RowOutcome {
    /// The row was inserted.
    Inserted {
        /// 1-based source line.
        line: usize,
    },
    /// An identical row (all seven fields) already existed.
    Duplicate {
        /// 1-based source line.
        line: usize,
    },
    /// The row was dropped before insertion.
    Invalid {
        /// 1-based source line.
        line: usize,
        /// Which required field was empty.
        field: &'static str,
    },
}

/// Result of a reconciliation batch.
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    /// Rows inserted.
    pub inserted: u64,
    /// Rows skipped: duplicates plus invalid rows.
    pub skipped: u64,
    /// Per-row outcomes in source order.
    pub outcomes: Vec<RowOutcome>,
}

/// A manually entered attendance record for one date.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ManualRecord {
    /// Student identifier.
    pub student_id: String,
    /// Student name.
    pub student_name: String,
    /// Course.
    #[serde(default)]
    pub course: String,
    /// Batch.
    #[serde(default)]
    pub batch: String,
    /// Raw status, normalized on insert.
    pub attendance_status: String,
    /// Remarks.
    #[serde(default)]
    pub remarks: String,
}

/// Merges bulk attendance sources into storage.
///
/// The whole merge for a batch runs under a process-wide mutex: two
/// racing imports serialize rather than interleave their
/// delete-then-insert sequences.
pub struct AttendanceReconciler {
    attendance_repo: Arc<AttendanceRepository>,
    student_repo: Arc<StudentRepository>,
    vault: Arc<CredentialVault>,
    import_lock: Mutex<()>,
}

impl AttendanceReconciler {
    /// Create a reconciler.
    pub fn new(
        attendance_repo: Arc<AttendanceRepository>,
        student_repo: Arc<StudentRepository>,
        vault: Arc<CredentialVault>,
    ) -> Self {
        Self {
            attendance_repo,
            student_repo,
            vault,
            import_lock: Mutex::new(()),
        }
    }

    /// Reconcile a CSV source into storage.
    ///
    /// Structural problems (missing required columns, no data rows)
    /// abort the whole batch with a validation error. Row-level problems
    /// are absorbed as [`RowOutcome::Invalid`] and the batch continues.
    pub async fn import_csv(&self, text: &str, mode: ImportMode) -> AppResult<ImportReport> {
        let table = CsvTable::parse(text)?;

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|c| table.column(c).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(AppError::validation(format!(
                "Missing CSV columns: {}",
                missing.join(", ")
            )));
        }

        let id_col = table.column("student_id");
        let name_col = table.column("student_name");
        let course_col = table.column("course");
        let batch_col = table.column("batch");
        let date_col = table.column("date");
        let status_col = table.column("attendance_status");
        let remarks_col = table.column("remarks");

        // Slot per source row: either a final outcome (invalid) or the
        // index of the entry handed to storage.
        let mut outcomes: Vec<Option<RowOutcome>> = Vec::new();
        let mut entry_lines: Vec<usize> = Vec::new();
        let mut entries: Vec<AttendanceEntry> = Vec::new();

        for (idx, row) in table.rows().iter().enumerate() {
            let line = idx + 2;
            let student_id = table.cell(row, id_col).to_string();
            let date = normalize_date(table.cell(row, date_col));
            let status = normalize_status(table.cell(row, status_col));

            let invalid_field = if student_id.is_empty() {
                Some("student_id")
            } else if date.is_empty() {
                Some("date")
            } else if status.is_empty() {
                Some("attendance_status")
            } else {
                None
            };

            if let Some(field) = invalid_field {
                outcomes.push(Some(RowOutcome::Invalid { line, field }));
                continue;
            }

            entries.push(AttendanceEntry {
                student_id,
                student_name: table.cell(row, name_col).to_string(),
                course: table.cell(row, course_col).to_string(),
                batch: table.cell(row, batch_col).to_string(),
                date,
                attendance_status: status,
                remarks: table.cell(row, remarks_col).to_string(),
            });
            entry_lines.push(line);
            outcomes.push(None);
        }

        self.merge(entries, entry_lines, outcomes, mode).await
    }

    /// Reconcile the configured master CSV file (full resync).
    pub async fn sync_from_master(&self, path: &str) -> AppResult<ImportReport> {
        let text = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::storage(format!("Failed to read attendance master {path}: {e}"))
        })?;
        self.import_csv(&text, ImportMode::Replace).await
    }

    /// Record a manually entered batch for one date (append-only, same
    /// duplicate suppression as bulk imports).
    pub async fn record_manual(
        &self,
        date: &str,
        records: &[ManualRecord],
    ) -> AppResult<ImportReport> {
        if date.trim().is_empty() || records.is_empty() {
            return Err(AppError::validation("No attendance records provided"));
        }

        let date = normalize_date(date.trim());
        let mut outcomes: Vec<Option<RowOutcome>> = Vec::new();
        let mut entry_lines: Vec<usize> = Vec::new();
        let mut entries: Vec<AttendanceEntry> = Vec::new();

        for (idx, record) in records.iter().enumerate() {
            let line = idx + 1;
            let student_id = record.student_id.trim().to_string();
            if student_id.is_empty() {
                outcomes.push(Some(RowOutcome::Invalid {
                    line,
                    field: "student_id",
                }));
                continue;
            }

            entries.push(AttendanceEntry {
                student_id,
                student_name: record.student_name.trim().to_string(),
                course: record.course.trim().to_string(),
                batch: record.batch.trim().to_string(),
                date: date.clone(),
                attendance_status: normalize_status(&record.attendance_status),
                remarks: record.remarks.trim().to_string(),
            });
            entry_lines.push(line);
            outcomes.push(None);
        }

        self.merge(entries, entry_lines, outcomes, ImportMode::Append)
            .await
    }

    /// Hand the prepared entries to storage and assemble the report.
    async fn merge(
        &self,
        entries: Vec<AttendanceEntry>,
        entry_lines: Vec<usize>,
        mut outcomes: Vec<Option<RowOutcome>>,
        mode: ImportMode,
    ) -> AppResult<ImportReport> {
        let _guard = self.import_lock.lock().await;
        let replace = mode == ImportMode::Replace;

        let inserted_flags = self.attendance_repo.merge_batch(&entries, replace).await?;

        // Map storage results back onto their source rows.
        let mut flag_iter = inserted_flags.iter().zip(entry_lines);
        for slot in outcomes.iter_mut() {
            if slot.is_none() {
                let (inserted, line) = flag_iter
                    .next()
                    .ok_or_else(|| AppError::internal("Import row bookkeeping mismatch"))?;
                *slot = Some(if *inserted {
                    RowOutcome::Inserted { line }
                } else {
                    RowOutcome::Duplicate { line }
                });
            }
        }

        let outcomes: Vec<RowOutcome> = outcomes.into_iter().flatten().collect();
        let inserted = outcomes
            .iter()
            .filter(|o| matches!(o, RowOutcome::Inserted { .. }))
            .count() as u64;
        let skipped = outcomes.len() as u64 - inserted;

        // Keep credentials aligned with the (possibly grown) roster.
        let roster_ids = self.student_repo.list_ids().await?;
        if let Err(e) = self.vault.reconcile(&roster_ids).await {
            warn!(error = %e, "Credential reconcile after import failed");
        }

        info!(inserted, skipped, replace, "Attendance batch merged");

        Ok(ImportReport {
            inserted,
            skipped,
            outcomes,
        })
    }
}
