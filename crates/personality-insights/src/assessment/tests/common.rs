use crate::assessment::categories::CategoryScores;
use crate::assessment::domain::{GlobalFactor, PrimaryFactor, Question};
use crate::assessment::global_factors::GlobalFactorScores;

/// One question per primary factor, ids `q1`..`q16` in factor order.
pub(super) fn sixteen_factor_bank() -> Vec<Question> {
    PrimaryFactor::ordered()
        .into_iter()
        .enumerate()
        .map(|(index, factor)| Question::new(format!("q{}", index + 1), factor.label()))
        .collect()
}

pub(super) fn uniform_categories(score: f64) -> CategoryScores {
    PrimaryFactor::ordered()
        .into_iter()
        .map(|factor| (factor, score))
        .collect()
}

/// Global Factor scores with every unspecified factor at 50.
pub(super) fn global_scores(entries: &[(GlobalFactor, f64)]) -> GlobalFactorScores {
    GlobalFactorScores::from_fn(|factor| {
        entries
            .iter()
            .find(|(candidate, _)| *candidate == factor)
            .map(|(_, score)| *score)
            .unwrap_or(50.0)
    })
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
