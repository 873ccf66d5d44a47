use super::common::{assert_close, sixteen_factor_bank};
use crate::assessment::categories::{
    aggregate_categories, positional_category, synthetic_profile, DataQuality,
    EmptyResponsePolicy,
};
use crate::assessment::domain::{PrimaryFactor, Question};
use crate::assessment::fallback::category_baseline;
use crate::assessment::global_factors::aggregate_global_factors;
use crate::assessment::normalizer::normalize;
use serde_json::json;

fn small_bank() -> Vec<Question> {
    vec![
        Question::new("q1", "Factor A"),
        Question::new("q2", "Factor A"),
        Question::new("q3", "Factor A"),
        Question::new("q4", "Factor Q3"),
        Question::new("q5", "Leadership"),
    ]
}

#[test]
fn averages_responses_per_category_to_one_decimal() {
    let responses = normalize(&json!([
        { "questionId": "q1", "selectedValue": 5 },
        { "questionId": "q2", "selectedValue": 4 },
        { "questionId": "q3", "selectedValue": "Agree" },
        { "questionId": "q4", "selectedValue": 2 },
    ]));

    let aggregation = aggregate_categories(&responses, &small_bank(), EmptyResponsePolicy::Signal);

    assert_eq!(aggregation.quality, DataQuality::Measured);
    assert_eq!(aggregation.scores.len(), 2);
    assert_close(aggregation.scores.get(PrimaryFactor::A).expect("A scored"), 83.3);
    assert_close(aggregation.scores.get(PrimaryFactor::Q3).expect("Q3 scored"), 25.0);
    assert_eq!(aggregation.diagnostics.resolved, 4);
    assert!(!aggregation.diagnostics.positional);
}

#[test]
fn unresolvable_responses_are_dropped_not_zeroed() {
    let responses = normalize(&json!([
        { "questionId": "q1", "selectedValue": 5 },
        { "questionId": "q5", "selectedValue": 1 },
        { "questionId": "missing", "selectedValue": 1 },
    ]));

    let aggregation = aggregate_categories(&responses, &small_bank(), EmptyResponsePolicy::Signal);

    assert_eq!(aggregation.scores.len(), 1);
    assert_eq!(aggregation.scores.get(PrimaryFactor::A), Some(100.0));
    assert_eq!(aggregation.diagnostics.unresolved, 2);
}

#[test]
fn resolves_by_position_when_no_response_has_an_id() {
    let bank = sixteen_factor_bank();
    let responses = normalize(&json!([null, 5, "Never"]));

    let aggregation = aggregate_categories(&responses, &bank, EmptyResponsePolicy::Signal);

    assert!(aggregation.diagnostics.positional);
    assert_eq!(aggregation.scores.get(PrimaryFactor::A), None);
    assert_eq!(aggregation.scores.get(PrimaryFactor::B), Some(100.0));
    assert_eq!(aggregation.scores.get(PrimaryFactor::C), Some(0.0));
}

#[test]
fn positional_lookup_is_skipped_once_any_id_is_present() {
    let bank = sixteen_factor_bank();
    let responses = normalize(&json!([
        { "questionId": "q2", "selectedValue": 5 },
        { "selectedValue": 1 },
    ]));

    let aggregation = aggregate_categories(&responses, &bank, EmptyResponsePolicy::Signal);

    assert!(!aggregation.diagnostics.positional);
    assert_eq!(aggregation.scores.get(PrimaryFactor::B), Some(100.0));
    assert_eq!(aggregation.scores.len(), 1);
    assert_eq!(aggregation.diagnostics.unresolved, 1);
}

#[test]
fn positional_category_handles_out_of_range_positions() {
    let bank = sixteen_factor_bank();
    assert_eq!(positional_category(&bank, 15), Some(PrimaryFactor::Q4));
    assert_eq!(positional_category(&bank, 16), None);
}

#[test]
fn empty_responses_signal_insufficient_data() {
    let bank = sixteen_factor_bank();
    let aggregation =
        aggregate_categories(&normalize(&json!([])), &bank, EmptyResponsePolicy::Signal);

    assert!(aggregation.scores.is_empty());
    assert_eq!(aggregation.quality, DataQuality::InsufficientData);

    let global = aggregate_global_factors(&aggregation.scores);
    assert_eq!(global.iter().count(), 5);
    assert!(global.values().all(|score| (0.0..=100.0).contains(&score)));
}

#[test]
fn empty_responses_synthesize_only_when_asked() {
    let bank = sixteen_factor_bank();
    let aggregation = aggregate_categories(
        &normalize(&json!("garbage")),
        &bank,
        EmptyResponsePolicy::Synthesize,
    );

    assert_eq!(aggregation.quality, DataQuality::Synthetic);
    assert_eq!(aggregation.scores.len(), 16);
    for factor in PrimaryFactor::ordered() {
        assert_eq!(
            aggregation.scores.get(factor),
            Some(category_baseline(factor).midpoint())
        );
    }
    assert_eq!(aggregation.scores, synthetic_profile());

    let global = aggregate_global_factors(&aggregation.scores);
    assert!(global.values().all(|score| (0.0..=100.0).contains(&score)));
}
