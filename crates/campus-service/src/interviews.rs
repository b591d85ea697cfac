//! Interview statistics service.
//!
//! Interview items come from two places: stats entered by hand, and
//! attendance rows whose remarks mention an interview. Both are merged
//! and sorted by date for a single listing.

use std::sync::Arc;
use std::sync::LazyLock;

use regex::Regex;

use campus_auth::AccessScope;
use campus_core::result::AppResult;
use campus_database::repositories::attendance::AttendanceRepository;
use campus_database::repositories::interview::InterviewRepository;
use campus_entity::interview::{InterviewItem, InterviewSource};

/// `interview: AirName` / `interview - AirName`
static AIRLINE_AFTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)interview\s*[:\-]\s*([A-Za-z0-9 .&-]+)").expect("valid regex")
});

/// `AirName interview`
static AIRLINE_BEFORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([A-Za-z][A-Za-z .&-]{2,})\s+interview").expect("valid regex")
});

/// Extract an airline name from an attendance remark, falling back to a
/// generic label.
pub fn airline_from_remark(remark: &str) -> String {
    let text = remark.trim();

    if let Some(caps) = AIRLINE_AFTER.captures(text) {
        return caps[1].trim().to_string();
    }
    if let Some(caps) = AIRLINE_BEFORE.captures(text) {
        return caps[1].trim().to_string();
    }
    "Interview".to_string()
}

/// Merged interview listings.
pub struct InterviewService {
    interview_repo: Arc<InterviewRepository>,
    attendance_repo: Arc<AttendanceRepository>,
}

impl InterviewService {
    /// Create an interview service.
    pub fn new(
        interview_repo: Arc<InterviewRepository>,
        attendance_repo: Arc<AttendanceRepository>,
    ) -> Self {
        Self {
            interview_repo,
            attendance_repo,
        }
    }

    /// List interview items under the caller's scope. Manual stats are
    /// visible to everyone; remark-derived rows follow the attendance
    /// scope.
    pub async fn list(&self, scope: &AccessScope) -> AppResult<Vec<InterviewItem>> {
        let mut items = Vec::new();

        for stat in self.interview_repo.list().await? {
            items.push(InterviewItem {
                interview_id: stat.interview_id.to_string(),
                airline_name: stat.airline_name,
                interview_date: stat.interview_date,
                notes: stat.notes,
                source: InterviewSource::Manual,
                student_id: None,
                student_name: None,
            });
        }

        for row in self.attendance_repo.interview_remarks(scope.filter()).await? {
            items.push(InterviewItem {
                interview_id: format!("attendance-{}", row.attendance_id),
                airline_name: airline_from_remark(&row.remarks),
                interview_date: row.date,
                notes: row.remarks,
                source: InterviewSource::AttendanceRemark,
                student_id: Some(row.student_id),
                student_name: Some(row.student_name),
            });
        }

        items.sort_by(|a, b| b.interview_date.cmp(&a.interview_date));
        Ok(items)
    }

    /// Record a manual stat.
    pub async fn create(
        &self,
        airline_name: &str,
        interview_date: &str,
        notes: &str,
    ) -> AppResult<i64> {
        self.interview_repo
            .insert(airline_name, interview_date, notes)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_airline_after_keyword() {
        assert_eq!(airline_from_remark("Interview: IndiGo"), "IndiGo");
        assert_eq!(airline_from_remark("interview - Air India"), "Air India");
    }

    #[test]
    fn extracts_airline_before_keyword() {
        assert_eq!(airline_from_remark("Vistara interview today"), "Vistara");
    }

    #[test]
    fn falls_back_to_generic_label() {
        assert_eq!(airline_from_remark("interview"), "Interview");
        assert_eq!(airline_from_remark(""), "Interview");
    }
}
