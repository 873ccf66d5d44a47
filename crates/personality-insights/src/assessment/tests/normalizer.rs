use super::common::assert_close;
use crate::assessment::domain::QuestionId;
use crate::assessment::normalizer::{likert_value, normalize, rescale};
use serde_json::json;

fn values(payload: serde_json::Value) -> Vec<f64> {
    normalize(&payload).iter().map(|response| response.value).collect()
}

#[test]
fn rescales_integer_scale_points_exactly() {
    assert_eq!(rescale(1.0), 0.0);
    assert_eq!(rescale(2.0), 25.0);
    assert_eq!(rescale(3.0), 50.0);
    assert_eq!(rescale(4.0), 75.0);
    assert_eq!(rescale(5.0), 100.0);
}

#[test]
fn reads_values_from_any_supported_field() {
    let normalized = normalize(&json!([
        { "questionId": "q1", "selectedValue": 5 },
        { "questionId": "q2", "selectedAnswer": "Agree" },
        { "question_id": 3, "answer": "never" },
        { "questionId": "q4", "selectedValue": null, "answer": "Strongly Disagree" },
    ]));

    let values: Vec<f64> = normalized.iter().map(|response| response.value).collect();
    assert_eq!(values, vec![100.0, 75.0, 0.0, 0.0]);
    assert_eq!(
        normalized.responses()[2].question_id,
        Some(QuestionId::new("3"))
    );
    assert_eq!(normalized.diagnostics().accepted, 4);
}

#[test]
fn first_present_value_field_wins() {
    assert_eq!(
        values(json!([{ "questionId": "q1", "selectedValue": 2, "answer": 5 }])),
        vec![25.0]
    );
}

#[test]
fn accepts_wrapped_and_encoded_payloads() {
    let records = json!([
        { "questionId": "q1", "selectedValue": 4 },
        { "questionId": "q2", "selectedValue": "Sometimes" },
    ]);
    let expected = vec![75.0, 50.0];

    assert_eq!(values(json!({ "responses": records.clone() })), expected);
    assert_eq!(values(json!({ "detailedAnswers": records.clone() })), expected);
    assert_eq!(values(json!(records.to_string())), expected);
    assert_eq!(
        values(json!(json!({ "responses": records }).to_string())),
        expected
    );
}

#[test]
fn unparseable_payloads_degrade_to_empty() {
    for payload in [json!("{not json"), json!(42), json!({ "responses": 7 })] {
        let normalized = normalize(&payload);
        assert!(normalized.is_empty(), "{payload} should normalize to nothing");
        assert!(normalized.diagnostics().unparseable_payload);
    }

    let missing = normalize(&json!(null));
    assert!(missing.is_empty());
    assert!(!missing.diagnostics().unparseable_payload);
}

#[test]
fn unknown_labels_default_to_midpoint_and_are_counted() {
    let normalized = normalize(&json!([
        { "questionId": "q1", "selectedValue": "Maybe" },
        { "questionId": "q2", "selectedValue": "4" },
        { "questionId": "q3", "selectedValue": "4.7" },
        { "questionId": "q4", "selectedValue": "  STRONGLY   agree " },
    ]));

    let values: Vec<f64> = normalized.iter().map(|response| response.value).collect();
    assert_eq!(values, vec![50.0, 75.0, 75.0, 100.0]);
    assert_eq!(normalized.diagnostics().defaulted, 1);
}

#[test]
fn records_without_values_are_skipped_not_imputed() {
    let normalized = normalize(&json!([
        { "questionId": "q1" },
        { "questionId": "q2", "answer": true },
        { "questionId": "q3", "answer": 3 },
    ]));

    assert_eq!(normalized.len(), 1);
    assert_eq!(normalized.diagnostics().skipped, 2);
    assert_eq!(normalized.responses()[0].position, 2);
}

#[test]
fn blank_answers_default_to_the_neutral_midpoint() {
    let normalized = normalize(&json!([
        { "questionId": "q1", "answer": "" },
        { "questionId": "q2", "selectedValue": "   ", "answer": 5 },
    ]));

    let values: Vec<f64> = normalized.iter().map(|response| response.value).collect();
    assert_eq!(values, vec![50.0, 50.0]);
    assert_eq!(normalized.diagnostics().defaulted, 2);
    assert_eq!(normalized.diagnostics().skipped, 0);
}

#[test]
fn out_of_range_values_are_clamped_into_the_scale() {
    assert_eq!(values(json!([7, 0, -3.5])), vec![100.0, 0.0, 0.0]);
}

#[test]
fn answer_maps_are_read_in_key_order() {
    let normalized = normalize(&json!({
        "q2": "Agree",
        "q1": { "selectedValue": 1 },
    }));

    let ids: Vec<&str> = normalized
        .iter()
        .filter_map(|response| response.question_id.as_ref().map(QuestionId::as_str))
        .collect();
    assert_eq!(ids, vec!["q1", "q2"]);
    assert_eq!(normalized.responses()[1].value, 75.0);
    assert_eq!(normalized.responses()[1].position, 1);
}

#[test]
fn bare_value_lists_carry_positions_only() {
    let normalized = normalize(&json!([1, "Often", 3]));
    assert!(!normalized.has_explicit_ids());
    let positions: Vec<usize> = normalized.iter().map(|response| response.position).collect();
    assert_eq!(positions, vec![0, 1, 2]);
}

#[test]
fn normalizing_the_reencoded_output_is_a_fixed_point() {
    let first = normalize(&json!([
        { "questionId": "q1", "selectedValue": 1 },
        { "questionId": "q2", "selectedValue": "Agree" },
        { "questionId": "q3", "selectedValue": 5 },
    ]));
    let second = normalize(&first.to_payload());

    assert_eq!(first.responses(), second.responses());
    assert_close(second.responses()[1].value, 75.0);
}

#[test]
fn likert_lookup_covers_both_scales() {
    assert_eq!(likert_value("Strongly Disagree"), Some(1.0));
    assert_eq!(likert_value("neutral"), Some(3.0));
    assert_eq!(likert_value("ALWAYS"), Some(5.0));
    assert_eq!(likert_value("Rarely"), Some(2.0));
    assert_eq!(likert_value("Somewhat"), None);
}
