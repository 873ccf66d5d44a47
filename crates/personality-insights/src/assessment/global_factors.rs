use super::categories::CategoryScores;
use super::domain::{GlobalFactor, PrimaryFactor};
use super::fallback::{global_baseline, proportional_adjustment};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use tracing::debug;

/// Primary factors contributing to each Global Factor.
pub const fn primary_factors_for(factor: GlobalFactor) -> &'static [PrimaryFactor] {
    use PrimaryFactor::*;
    match factor {
        GlobalFactor::Extraversion => &[A, F, H, N],
        GlobalFactor::Anxiety => &[C, L, O, Q4],
        GlobalFactor::ToughMindedness => &[A, I, M, Q1],
        GlobalFactor::Independence => &[E, L, Q1],
        GlobalFactor::SelfControl => &[G, Q3],
    }
}

/// Scores for all five Global Factors, each in [0,100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalFactorScores {
    scores: [f64; 5],
}

impl GlobalFactorScores {
    /// Builds a score set from a per-factor function. Values are clamped into
    /// [0,100]; non-finite values become 0.
    pub fn from_fn(mut score: impl FnMut(GlobalFactor) -> f64) -> Self {
        let mut scores = [0.0; 5];
        for factor in GlobalFactor::ordered() {
            let value = score(factor);
            scores[factor.index()] = if value.is_finite() {
                value.clamp(0.0, 100.0)
            } else {
                0.0
            };
        }
        Self { scores }
    }

    pub fn get(&self, factor: GlobalFactor) -> f64 {
        self.scores[factor.index()]
    }

    /// Entries in canonical factor order.
    pub fn iter(&self) -> impl Iterator<Item = (GlobalFactor, f64)> + '_ {
        GlobalFactor::ordered()
            .into_iter()
            .map(move |factor| (factor, self.get(factor)))
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.scores.iter().copied()
    }

    /// Factors by descending score; ties keep canonical order.
    pub fn ranked(&self) -> Vec<(GlobalFactor, f64)> {
        let mut ranked: Vec<(GlobalFactor, f64)> = self.iter().collect();
        ranked.sort_by(|left, right| right.1.total_cmp(&left.1));
        ranked
    }
}

impl Serialize for GlobalFactorScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.scores.len()))?;
        for (factor, score) in self.iter() {
            map.serialize_entry(&factor, &score)?;
        }
        map.end()
    }
}

/// Where a Global Factor value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GlobalFactorSource {
    PrimaryFactors,
    ProportionalFallback,
    BaselineFallback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalFactorAggregation {
    pub scores: GlobalFactorScores,
    pub sources: BTreeMap<GlobalFactor, GlobalFactorSource>,
}

impl GlobalFactorAggregation {
    pub fn from_categories(categories: &CategoryScores) -> Self {
        let mut sources = BTreeMap::new();
        let scores = GlobalFactorScores::from_fn(|factor| {
            let (score, source) = score_global_factor(factor, categories);
            sources.insert(factor, source);
            score
        });

        Self { scores, sources }
    }
}

/// Combines category scores into the five Global Factors. Always yields all
/// five, falling back as documented on [`GlobalFactorSource`].
pub fn aggregate_global_factors(categories: &CategoryScores) -> GlobalFactorScores {
    GlobalFactorAggregation::from_categories(categories).scores
}

fn score_global_factor(
    factor: GlobalFactor,
    categories: &CategoryScores,
) -> (f64, GlobalFactorSource) {
    let present: Vec<f64> = primary_factors_for(factor)
        .iter()
        .filter_map(|primary| categories.get(*primary))
        .collect();

    if !present.is_empty() {
        let mean = present.iter().sum::<f64>() / present.len() as f64;
        return (mean, GlobalFactorSource::PrimaryFactors);
    }

    match categories.mean() {
        Some(mean) => {
            let adjusted = mean * proportional_adjustment(factor).midpoint();
            debug!(%factor, mean, adjusted, "no primary factors scored; proportional fallback");
            (
                adjusted.clamp(0.0, 100.0),
                GlobalFactorSource::ProportionalFallback,
            )
        }
        None => {
            let baseline = global_baseline(factor).midpoint();
            debug!(%factor, baseline, "no category data; baseline fallback");
            (baseline, GlobalFactorSource::BaselineFallback)
        }
    }
}
