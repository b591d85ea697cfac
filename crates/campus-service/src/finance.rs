//! Finance service — fee-plan totals, balances, and summaries.

use std::sync::Arc;

use serde::Serialize;

use campus_core::result::AppResult;
use campus_database::repositories::fee::FeeRepository;
use campus_database::repositories::student::StudentRepository;
use campus_entity::student::Student;

use crate::context::RequestContext;

/// Planned course fees in INR. Courses not listed here fall back to the
/// largest agreed total on the student's ledger.
const COURSE_FEES_INR: &[(&str, f64)] = &[
    ("ground operations", 150_000.0),
    ("cabin crew", 250_000.0),
];

/// GST rate quoted alongside student-facing amounts.
pub const GST_PERCENT: u8 = 18;

/// One student's financial position.
#[derive(Debug, Clone, Serialize)]
pub struct StudentFinancials {
    /// The roster entry.
    pub student: Student,
    /// Planned (or ledger-derived) total.
    pub total: f64,
    /// Total paid so far.
    pub paid: f64,
    /// Outstanding amount, floored at zero.
    pub due: f64,
    /// Number of ledger entries.
    pub transactions: i64,
}

/// Scope-dependent fee summary.
#[derive(Debug, Clone, Serialize)]
pub struct FeeSummary {
    /// Total agreed amount in scope.
    pub total: f64,
    /// Total paid in scope.
    pub paid: f64,
    /// Outstanding amount in scope.
    pub due: f64,
    /// Ledger entry count in scope.
    pub transactions: i64,
    /// The student's course (self-scoped summaries only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    /// GST rate (self-scoped summaries only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_percent: Option<u8>,
}

/// Financial queries over the fee ledger and the roster.
pub struct FinanceService {
    fee_repo: Arc<FeeRepository>,
    student_repo: Arc<StudentRepository>,
}

impl FinanceService {
    /// Create a finance service.
    pub fn new(fee_repo: Arc<FeeRepository>, student_repo: Arc<StudentRepository>) -> Self {
        Self {
            fee_repo,
            student_repo,
        }
    }

    /// Planned total for a course, if the course has a fee plan.
    pub fn planned_total(course: &str) -> Option<f64> {
        let key = course.trim().to_lowercase();
        COURSE_FEES_INR
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, amount)| *amount)
    }

    /// A student's financial position, or `None` for an unknown student.
    pub async fn financials(&self, student_id: &str) -> AppResult<Option<StudentFinancials>> {
        let Some(student) = self.student_repo.find_by_id(student_id).await? else {
            return Ok(None);
        };

        let totals = self.fee_repo.totals_for_student(student_id).await?;
        let total = Self::planned_total(&student.course).unwrap_or(totals.max_total);
        let due = (total - totals.paid).max(0.0);

        Ok(Some(StudentFinancials {
            student,
            total,
            paid: totals.paid,
            due,
            transactions: totals.transactions,
        }))
    }

    /// Fee summary under the caller's scope: ledger-wide for the
    /// superuser, the personal position for a student.
    pub async fn summary(&self, ctx: &RequestContext) -> AppResult<FeeSummary> {
        if ctx.is_superuser() {
            let totals = self.fee_repo.totals().await?;
            return Ok(FeeSummary {
                total: totals.total,
                paid: totals.paid,
                due: totals.total - totals.paid,
                transactions: totals.transactions,
                course: None,
                gst_percent: None,
            });
        }

        match self.financials(&ctx.principal).await? {
            Some(info) => Ok(FeeSummary {
                total: info.total,
                paid: info.paid,
                due: info.due,
                transactions: info.transactions,
                course: Some(info.student.course),
                gst_percent: Some(GST_PERCENT),
            }),
            None => Ok(FeeSummary {
                total: 0.0,
                paid: 0.0,
                due: 0.0,
                transactions: 0,
                course: None,
                gst_percent: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_plan_lookup_is_case_insensitive() {
        assert_eq!(FinanceService::planned_total("Cabin Crew"), Some(250_000.0));
        assert_eq!(
            FinanceService::planned_total("ground operations"),
            Some(150_000.0)
        );
        assert_eq!(FinanceService::planned_total("Typing"), None);
    }
}
