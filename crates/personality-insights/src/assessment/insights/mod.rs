mod tables;

use super::categories::CategoryScores;
use super::domain::{GlobalFactor, PrimaryFactor};
use super::global_factors::GlobalFactorScores;
use serde::Serialize;
use tables::{
    bands_for, statements_for, CareerBundle, CAREER_RULES, DEFAULT_CAREER_BUNDLE,
    GENERIC_DEVELOPMENT_AREAS, GENERIC_STRENGTHS,
};

/// Number of leading Global Factors considered for career matching.
pub const TOP_FACTOR_COUNT: usize = 3;

/// Primary factors further than this from the midpoint are called out.
pub const HIGHLIGHT_DISTANCE: f64 = 20.0;
pub const MAX_HIGHLIGHTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerRecommendation {
    pub role: String,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pole {
    High,
    Low,
}

/// A primary factor that sits well away from the midpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorHighlight {
    pub factor: PrimaryFactor,
    pub trait_name: &'static str,
    pub score: f64,
    pub pole: Pole,
}

impl FactorHighlight {
    pub fn describe(&self) -> String {
        let pole = match self.pole {
            Pole::High => "High",
            Pole::Low => "Low",
        };
        format!(
            "{pole} {} ({}): {:.1}",
            self.trait_name,
            self.factor.label(),
            self.score
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalityInsights {
    pub strengths: Vec<String>,
    pub development_areas: Vec<String>,
    pub career_recommendations: Vec<CareerRecommendation>,
    /// Global Factors used for career matching, highest first.
    pub top_factors: Vec<GlobalFactor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub primary_highlights: Vec<FactorHighlight>,
}

/// Derives strengths, development areas and career recommendations. Pure and
/// deterministic.
pub fn generate_insights(
    categories: &CategoryScores,
    global: &GlobalFactorScores,
) -> PersonalityInsights {
    let mut strengths = Vec::new();
    let mut development_areas = Vec::new();

    for (factor, score) in global.iter() {
        let bands = bands_for(factor);
        let statements = statements_for(factor);

        if bands.strong_strength.contains(score) {
            strengths.extend(statements.strong_strengths.iter().map(|s| s.to_string()));
        } else if bands.moderate_strength.contains(score) {
            strengths.push(statements.moderate_strength.to_string());
        }

        if bands.strong_concern.contains(score) {
            development_areas.extend(statements.strong_concerns.iter().map(|s| s.to_string()));
        } else if bands.moderate_concern.contains(score) {
            development_areas.push(statements.moderate_concern.to_string());
        }
    }

    if strengths.is_empty() {
        strengths.extend(GENERIC_STRENGTHS.iter().map(|s| s.to_string()));
    }
    if development_areas.is_empty() {
        development_areas.extend(GENERIC_DEVELOPMENT_AREAS.iter().map(|s| s.to_string()));
    }

    let top_factors: Vec<GlobalFactor> = global
        .ranked()
        .into_iter()
        .take(TOP_FACTOR_COUNT)
        .map(|(factor, _)| factor)
        .collect();

    let career_recommendations = select_career_bundle(&top_factors)
        .iter()
        .map(|(role, reason)| CareerRecommendation {
            role: role.to_string(),
            reason: reason.to_string(),
        })
        .collect();

    PersonalityInsights {
        strengths,
        development_areas,
        career_recommendations,
        top_factors,
        primary_highlights: primary_highlights(categories),
    }
}

fn select_career_bundle(top_factors: &[GlobalFactor]) -> CareerBundle {
    CAREER_RULES
        .iter()
        .find(|(condition, _)| condition.matches(top_factors))
        .map(|(_, bundle)| *bundle)
        .unwrap_or(DEFAULT_CAREER_BUNDLE)
}

fn primary_highlights(categories: &CategoryScores) -> Vec<FactorHighlight> {
    let mut highlights: Vec<FactorHighlight> = categories
        .iter()
        .filter(|(_, score)| (score - 50.0).abs() > HIGHLIGHT_DISTANCE)
        .map(|(factor, score)| FactorHighlight {
            factor,
            trait_name: factor.trait_name(),
            score,
            pole: if score > 50.0 { Pole::High } else { Pole::Low },
        })
        .collect();

    // Stable sort keeps factor order among equally distant scores.
    highlights.sort_by(|left, right| {
        (right.score - 50.0)
            .abs()
            .total_cmp(&(left.score - 50.0).abs())
    });
    highlights.truncate(MAX_HIGHLIGHTS);
    highlights
}
