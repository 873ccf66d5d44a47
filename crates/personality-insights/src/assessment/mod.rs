//! Psychometric scoring pipeline: raw responses are normalized, averaged per
//! primary factor, combined into Global Factors, interpreted into insights and
//! packaged into an [`AssessmentReport`].

pub mod categories;
mod config;
pub mod domain;
pub mod fallback;
pub mod global_factors;
pub mod inputs;
pub mod insights;
pub mod normalizer;
pub mod report;

#[cfg(test)]
mod tests;

pub use categories::{
    aggregate_categories, CategoryAggregation, CategoryScores, DataQuality, EmptyResponsePolicy,
};
pub use config::ScoringConfig;
pub use domain::{GlobalFactor, PrimaryFactor, Question, QuestionId, TestAttempt};
pub use global_factors::{
    aggregate_global_factors, GlobalFactorAggregation, GlobalFactorScores, GlobalFactorSource,
};
pub use inputs::{AttemptLoadError, QuestionBank, QuestionBankError};
pub use insights::{generate_insights, CareerRecommendation, PersonalityInsights};
pub use normalizer::{normalize, NormalizedResponse, NormalizedResponses};
pub use report::{assemble, AssessmentReport, CandidateInfo};

use tracing::{debug, debug_span, info};

/// Stateless engine running the full pipeline for one attempt at a time.
/// Safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> ScoringConfig {
        self.config
    }

    pub fn score(&self, attempt: &TestAttempt, questions: &[Question]) -> AssessmentReport {
        let span = debug_span!("score_attempt", attempt_id = attempt.id.as_deref().unwrap_or("-"));
        let _entered = span.enter();

        let responses = normalize(&attempt.responses);
        let categories =
            aggregate_categories(&responses, questions, self.config.empty_response_policy);
        debug!(
            categories = categories.scores.len(),
            quality = ?categories.quality,
            "aggregated category scores"
        );

        let global = GlobalFactorAggregation::from_categories(&categories.scores);
        debug!(scores = ?global.scores, "aggregated global factors");

        let insights = generate_insights(&categories.scores, &global.scores);
        let report = assemble(
            CandidateInfo::from_attempt(attempt),
            categories,
            global,
            insights,
            responses,
        );

        info!(
            attempt_id = report.candidate().attempt_id.as_deref().unwrap_or("-"),
            overall_score = report.overall_score(),
            data_quality = report.data_quality().label(),
            "assessment report assembled"
        );
        report
    }
}
