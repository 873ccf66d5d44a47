mod views;

pub use views::{CandidateInfo, ReportDiagnostics};

use super::categories::{CategoryAggregation, CategoryScores, DataQuality};
use super::domain::GlobalFactor;
use super::fallback::DEFAULT_OVERALL_SCORE;
use super::global_factors::{GlobalFactorAggregation, GlobalFactorScores, GlobalFactorSource};
use super::insights::PersonalityInsights;
use super::normalizer::{NormalizedResponse, NormalizedResponses};
use serde::Serialize;
use std::collections::BTreeMap;

/// Scored assessment for one attempt. Built once by [`assemble`] and read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    candidate: CandidateInfo,
    overall_score: u8,
    data_quality: DataQuality,
    is_synthetic: bool,
    category_scores: CategoryScores,
    global_factor_scores: GlobalFactorScores,
    global_factor_sources: BTreeMap<GlobalFactor, GlobalFactorSource>,
    insights: PersonalityInsights,
    responses: Vec<NormalizedResponse>,
    diagnostics: ReportDiagnostics,
}

pub fn assemble(
    candidate: CandidateInfo,
    categories: CategoryAggregation,
    global: GlobalFactorAggregation,
    insights: PersonalityInsights,
    responses: NormalizedResponses,
) -> AssessmentReport {
    let overall_score = overall_score(global.scores.values(), candidate.stored_score);
    let diagnostics = ReportDiagnostics {
        normalization: responses.diagnostics(),
        categories: categories.diagnostics,
    };

    AssessmentReport {
        candidate,
        overall_score,
        data_quality: categories.quality,
        is_synthetic: categories.quality == DataQuality::Synthetic,
        category_scores: categories.scores,
        global_factor_scores: global.scores,
        global_factor_sources: global.sources,
        insights,
        responses: responses.responses().to_vec(),
        diagnostics,
    }
}

/// Rounded mean of the Global Factor scores; the stored attempt score and then
/// [`DEFAULT_OVERALL_SCORE`] stand in when there are none.
pub fn overall_score(values: impl IntoIterator<Item = f64>, stored_score: Option<f64>) -> u8 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

    let score = if count > 0 {
        sum / count as f64
    } else {
        match stored_score.filter(|score| score.is_finite()) {
            Some(score) => score,
            None => return DEFAULT_OVERALL_SCORE,
        }
    };

    score.round().clamp(0.0, 100.0) as u8
}

impl AssessmentReport {
    pub fn candidate(&self) -> &CandidateInfo {
        &self.candidate
    }

    pub fn overall_score(&self) -> u8 {
        self.overall_score
    }

    pub fn data_quality(&self) -> DataQuality {
        self.data_quality
    }

    /// True when the scores were synthesized rather than measured.
    pub fn is_synthetic(&self) -> bool {
        self.is_synthetic
    }

    pub fn category_scores(&self) -> &CategoryScores {
        &self.category_scores
    }

    pub fn global_factor_scores(&self) -> &GlobalFactorScores {
        &self.global_factor_scores
    }

    pub fn global_factor_source(&self, factor: GlobalFactor) -> Option<GlobalFactorSource> {
        self.global_factor_sources.get(&factor).copied()
    }

    pub fn insights(&self) -> &PersonalityInsights {
        &self.insights
    }

    pub fn responses(&self) -> &[NormalizedResponse] {
        &self.responses
    }

    pub fn diagnostics(&self) -> ReportDiagnostics {
        self.diagnostics
    }

    /// Plain-text rendering, one line per entry.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let candidate = &self.candidate;

        lines.push(format!("Candidate: {}", candidate.display_name()));
        if let Some(title) = &candidate.test_title {
            lines.push(format!("Assessment: {title}"));
        }
        if let Some(completed_at) = candidate.completed_at {
            lines.push(format!("Completed: {}", completed_at.format("%Y-%m-%d %H:%M UTC")));
        }
        if let Some(seconds) = candidate.time_spent_seconds {
            lines.push(format!("Time spent: {} min {} s", seconds / 60, seconds % 60));
        }
        lines.push(format!("Overall score: {}", self.overall_score));
        match self.data_quality {
            DataQuality::Measured => {}
            DataQuality::InsufficientData => lines.push(
                "WARNING: no usable responses; Global Factors show baseline values only"
                    .to_string(),
            ),
            DataQuality::Synthetic => lines.push(
                "WARNING: synthetic placeholder profile; not derived from candidate responses"
                    .to_string(),
            ),
        }

        lines.push(String::new());
        lines.push("Primary factors".to_string());
        if self.category_scores.is_empty() {
            lines.push("- none scored".to_string());
        }
        for (factor, score) in self.category_scores.iter() {
            lines.push(format!(
                "- {} ({}): {score:.1}",
                factor.label(),
                factor.trait_name()
            ));
        }

        lines.push(String::new());
        lines.push("Global factors".to_string());
        for (factor, score) in self.global_factor_scores.iter() {
            let note = match self.global_factor_source(factor) {
                Some(GlobalFactorSource::ProportionalFallback) => " (estimated)",
                Some(GlobalFactorSource::BaselineFallback) => " (baseline)",
                _ => "",
            };
            lines.push(format!("- {}: {score:.1}{note}", factor.label()));
        }

        if !self.insights.primary_highlights.is_empty() {
            lines.push(String::new());
            lines.push("Notable traits".to_string());
            for highlight in &self.insights.primary_highlights {
                lines.push(format!("- {}", highlight.describe()));
            }
        }

        lines.push(String::new());
        lines.push("Strengths".to_string());
        for strength in &self.insights.strengths {
            lines.push(format!("- {strength}"));
        }

        lines.push(String::new());
        lines.push("Development areas".to_string());
        for area in &self.insights.development_areas {
            lines.push(format!("- {area}"));
        }

        lines.push(String::new());
        lines.push("Career recommendations".to_string());
        for recommendation in &self.insights.career_recommendations {
            lines.push(format!("- {}: {}", recommendation.role, recommendation.reason));
        }

        lines
    }
}
