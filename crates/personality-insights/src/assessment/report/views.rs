use super::super::categories::CategoryDiagnostics;
use super::super::domain::TestAttempt;
use super::super::normalizer::NormalizationDiagnostics;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Candidate and attempt metadata carried through to the report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CandidateInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent_seconds: Option<u64>,
    /// Score stored on the attempt by the test runner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_score: Option<f64>,
}

impl CandidateInfo {
    pub fn from_attempt(attempt: &TestAttempt) -> Self {
        Self {
            attempt_id: attempt.id.clone(),
            name: attempt.candidate_name.clone(),
            email: attempt.candidate_email.clone(),
            test_id: attempt.test_id.clone(),
            test_title: attempt.test_title.clone(),
            completed_at: attempt.completed_at,
            time_spent_seconds: attempt.time_spent,
            stored_score: attempt.score,
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed candidate")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportDiagnostics {
    pub normalization: NormalizationDiagnostics,
    pub categories: CategoryDiagnostics,
}
