use super::common::{assert_close, uniform_categories};
use crate::assessment::categories::CategoryScores;
use crate::assessment::domain::{GlobalFactor, PrimaryFactor};
use crate::assessment::fallback::{global_baseline, proportional_adjustment};
use crate::assessment::global_factors::{
    aggregate_global_factors, primary_factors_for, GlobalFactorAggregation, GlobalFactorSource,
};

#[test]
fn mapping_table_matches_the_published_model() {
    use PrimaryFactor::*;
    assert_eq!(primary_factors_for(GlobalFactor::Extraversion), &[A, F, H, N]);
    assert_eq!(primary_factors_for(GlobalFactor::Anxiety), &[C, L, O, Q4]);
    assert_eq!(primary_factors_for(GlobalFactor::ToughMindedness), &[A, I, M, Q1]);
    assert_eq!(primary_factors_for(GlobalFactor::Independence), &[E, L, Q1]);
    assert_eq!(primary_factors_for(GlobalFactor::SelfControl), &[G, Q3]);
}

#[test]
fn empty_input_yields_all_five_baselines() {
    let aggregation = GlobalFactorAggregation::from_categories(&CategoryScores::default());

    for factor in GlobalFactor::ordered() {
        let score = aggregation.scores.get(factor);
        assert!(global_baseline(factor).contains(score), "{factor} = {score}");
        assert_eq!(
            aggregation.sources.get(&factor),
            Some(&GlobalFactorSource::BaselineFallback)
        );
    }
    assert_eq!(aggregation.scores.get(GlobalFactor::Extraversion), 65.0);
    assert_eq!(aggregation.scores.get(GlobalFactor::Anxiety), 45.0);
}

#[test]
fn missing_primaries_are_excluded_from_the_mean() {
    let categories: CategoryScores = [(PrimaryFactor::A, 80.0), (PrimaryFactor::F, 60.0)]
        .into_iter()
        .collect();

    let aggregation = GlobalFactorAggregation::from_categories(&categories);
    let scores = aggregation.scores;

    assert_close(scores.get(GlobalFactor::Extraversion), 70.0);
    assert_close(scores.get(GlobalFactor::ToughMindedness), 80.0);
    assert_eq!(
        aggregation.sources.get(&GlobalFactor::Extraversion),
        Some(&GlobalFactorSource::PrimaryFactors)
    );

    // No Anxiety, Independence or Self-Control primaries: overall mean 70
    // scaled by each factor's adjustment midpoint.
    assert_close(scores.get(GlobalFactor::Anxiety), 63.0);
    assert_close(scores.get(GlobalFactor::Independence), 66.5);
    assert_close(scores.get(GlobalFactor::SelfControl), 77.0);
    for factor in [
        GlobalFactor::Anxiety,
        GlobalFactor::Independence,
        GlobalFactor::SelfControl,
    ] {
        let range = proportional_adjustment(factor);
        let score = scores.get(factor);
        assert!(score >= 70.0 * range.min - 0.05 && score <= 70.0 * range.max + 0.05);
        assert_eq!(
            aggregation.sources.get(&factor),
            Some(&GlobalFactorSource::ProportionalFallback)
        );
    }
}

#[test]
fn proportional_fallback_is_clamped_to_the_scale() {
    let categories: CategoryScores = PrimaryFactor::ordered()
        .into_iter()
        .filter(|factor| !matches!(factor, PrimaryFactor::G | PrimaryFactor::Q3))
        .map(|factor| (factor, 100.0))
        .collect();

    let scores = aggregate_global_factors(&categories);
    assert_eq!(scores.get(GlobalFactor::SelfControl), 100.0);
}

#[test]
fn uniformly_high_categories_push_every_factor_above_seventy() {
    let scores = aggregate_global_factors(&uniform_categories(80.0));
    for (factor, score) in scores.iter() {
        assert!(score > 70.0, "{factor} = {score}");
    }
}

#[test]
fn output_always_contains_exactly_five_factors_in_range() {
    let inputs = [
        CategoryScores::default(),
        uniform_categories(0.0),
        uniform_categories(100.0),
        [(PrimaryFactor::Q2, 12.0)].into_iter().collect(),
    ];

    for categories in inputs {
        let scores = aggregate_global_factors(&categories);
        let factors: Vec<GlobalFactor> = scores.iter().map(|(factor, _)| factor).collect();
        assert_eq!(factors, GlobalFactor::ordered().to_vec());
        assert!(scores.values().all(|score| (0.0..=100.0).contains(&score)));
    }
}

#[test]
fn serializes_as_a_label_keyed_map() {
    let scores = aggregate_global_factors(&uniform_categories(50.0));
    let value = serde_json::to_value(scores).expect("scores serialize");

    let object = value.as_object().expect("map");
    assert_eq!(object.len(), 5);
    assert_eq!(value["Tough-mindedness"], 50.0);
    assert_eq!(value["Self-Control"], 50.0);
}
