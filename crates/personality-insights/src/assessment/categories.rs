use super::domain::{PrimaryFactor, Question, QuestionId};
use super::fallback::category_baseline;
use super::normalizer::NormalizedResponses;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// Average 0-100 score per primary factor. A factor is present only when at
/// least one response backs it (or the profile is an explicit synthetic one).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CategoryScores(BTreeMap<PrimaryFactor, f64>);

impl CategoryScores {
    pub fn get(&self, factor: PrimaryFactor) -> Option<f64> {
        self.0.get(&factor).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PrimaryFactor, f64)> + '_ {
        self.0.iter().map(|(factor, score)| (*factor, *score))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Mean of every present category, `None` when empty.
    pub fn mean(&self) -> Option<f64> {
        if self.0.is_empty() {
            return None;
        }
        Some(self.0.values().sum::<f64>() / self.0.len() as f64)
    }
}

impl FromIterator<(PrimaryFactor, f64)> for CategoryScores {
    fn from_iter<T: IntoIterator<Item = (PrimaryFactor, f64)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(factor, score)| (factor, score.clamp(0.0, 100.0)))
                .collect(),
        )
    }
}

/// What to do when an attempt has no usable responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyResponsePolicy {
    /// Leave the category map empty and mark the report as lacking data.
    #[default]
    Signal,
    /// Fill every category from its baseline midpoint and mark the report
    /// synthetic. Intended for demos only.
    Synthesize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataQuality {
    Measured,
    InsufficientData,
    Synthetic,
}

impl DataQuality {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Measured => "Measured",
            Self::InsufficientData => "Insufficient data",
            Self::Synthetic => "Synthetic placeholder",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryDiagnostics {
    pub resolved: usize,
    /// Responses whose question or category could not be resolved.
    pub unresolved: usize,
    /// Categories were resolved by list position instead of question id.
    pub positional: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAggregation {
    pub scores: CategoryScores,
    pub quality: DataQuality,
    pub diagnostics: CategoryDiagnostics,
}

pub fn aggregate_categories(
    responses: &NormalizedResponses,
    questions: &[Question],
    policy: EmptyResponsePolicy,
) -> CategoryAggregation {
    let by_id: HashMap<&QuestionId, &Question> =
        questions.iter().map(|question| (&question.id, question)).collect();
    let positional = !responses.is_empty() && !responses.has_explicit_ids();
    let mut diagnostics = CategoryDiagnostics {
        positional,
        ..CategoryDiagnostics::default()
    };
    let mut totals: BTreeMap<PrimaryFactor, (f64, usize)> = BTreeMap::new();

    for response in responses.iter() {
        let factor = if positional {
            positional_category(questions, response.position)
        } else {
            response
                .question_id
                .as_ref()
                .and_then(|id| by_id.get(id))
                .and_then(|question| question.primary_factor())
        };

        match factor {
            Some(factor) => {
                let entry = totals.entry(factor).or_insert((0.0, 0));
                entry.0 += response.value;
                entry.1 += 1;
                diagnostics.resolved += 1;
            }
            None => {
                debug!(
                    position = response.position,
                    question_id = ?response.question_id,
                    "response has no resolvable category"
                );
                diagnostics.unresolved += 1;
            }
        }
    }

    if diagnostics.unresolved > 0 {
        warn!(
            unresolved = diagnostics.unresolved,
            "responses dropped from category scoring"
        );
    }

    let scores: CategoryScores = totals
        .into_iter()
        .map(|(factor, (sum, count))| (factor, round_to_tenth(sum / count as f64)))
        .collect();

    if !scores.is_empty() {
        return CategoryAggregation {
            scores,
            quality: DataQuality::Measured,
            diagnostics,
        };
    }

    match policy {
        EmptyResponsePolicy::Signal => {
            warn!("no usable responses; category scores left empty");
            CategoryAggregation {
                scores,
                quality: DataQuality::InsufficientData,
                diagnostics,
            }
        }
        EmptyResponsePolicy::Synthesize => {
            warn!("no usable responses; substituting synthetic baseline profile");
            CategoryAggregation {
                scores: synthetic_profile(),
                quality: DataQuality::Synthetic,
                diagnostics,
            }
        }
    }
}

/// Compatibility lookup for payloads that carry no question ids: the response
/// at raw position `n` is assumed to answer the `n`th question of the bank.
pub(crate) fn positional_category(
    questions: &[Question],
    position: usize,
) -> Option<PrimaryFactor> {
    questions.get(position).and_then(Question::primary_factor)
}

/// Every category at the midpoint of its baseline range.
pub fn synthetic_profile() -> CategoryScores {
    PrimaryFactor::ordered()
        .into_iter()
        .map(|factor| (factor, category_baseline(factor).midpoint()))
        .collect()
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
