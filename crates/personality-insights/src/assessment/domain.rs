use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier of a question in the external question bank.
///
/// Banks and attempts disagree on whether ids are strings or numbers, so both
/// collapse to the same textual form (`7` and `"7"` compare equal).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) if !text.trim().is_empty() => Some(Self::new(text)),
            Value::Number(number) => Some(Self(number_text(number))),
            _ => None,
        }
    }
}

/// Renders integral floats without a fractional part so `7.0` reads as `7`.
fn number_text(number: &serde_json::Number) -> String {
    if number.is_f64() {
        if let Some(value) = number
            .as_f64()
            .filter(|value| value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15)
        {
            return format!("{}", value as i64);
        }
    }
    number.to_string()
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value).ok_or_else(|| {
            serde::de::Error::custom("question id must be a non-empty string or a number")
        })
    }
}

/// The sixteen primary personality factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PrimaryFactor {
    #[serde(rename = "Factor A")]
    A,
    #[serde(rename = "Factor B")]
    B,
    #[serde(rename = "Factor C")]
    C,
    #[serde(rename = "Factor E")]
    E,
    #[serde(rename = "Factor F")]
    F,
    #[serde(rename = "Factor G")]
    G,
    #[serde(rename = "Factor H")]
    H,
    #[serde(rename = "Factor I")]
    I,
    #[serde(rename = "Factor L")]
    L,
    #[serde(rename = "Factor M")]
    M,
    #[serde(rename = "Factor N")]
    N,
    #[serde(rename = "Factor O")]
    O,
    #[serde(rename = "Factor Q1")]
    Q1,
    #[serde(rename = "Factor Q2")]
    Q2,
    #[serde(rename = "Factor Q3")]
    Q3,
    #[serde(rename = "Factor Q4")]
    Q4,
}

impl PrimaryFactor {
    pub const fn ordered() -> [Self; 16] {
        [
            Self::A,
            Self::B,
            Self::C,
            Self::E,
            Self::F,
            Self::G,
            Self::H,
            Self::I,
            Self::L,
            Self::M,
            Self::N,
            Self::O,
            Self::Q1,
            Self::Q2,
            Self::Q3,
            Self::Q4,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
            Self::H => "H",
            Self::I => "I",
            Self::L => "L",
            Self::M => "M",
            Self::N => "N",
            Self::O => "O",
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
        }
    }

    /// Category label as it appears in question banks.
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "Factor A",
            Self::B => "Factor B",
            Self::C => "Factor C",
            Self::E => "Factor E",
            Self::F => "Factor F",
            Self::G => "Factor G",
            Self::H => "Factor H",
            Self::I => "Factor I",
            Self::L => "Factor L",
            Self::M => "Factor M",
            Self::N => "Factor N",
            Self::O => "Factor O",
            Self::Q1 => "Factor Q1",
            Self::Q2 => "Factor Q2",
            Self::Q3 => "Factor Q3",
            Self::Q4 => "Factor Q4",
        }
    }

    pub const fn trait_name(self) -> &'static str {
        match self {
            Self::A => "Warmth",
            Self::B => "Reasoning",
            Self::C => "Emotional Stability",
            Self::E => "Dominance",
            Self::F => "Liveliness",
            Self::G => "Rule-Consciousness",
            Self::H => "Social Boldness",
            Self::I => "Sensitivity",
            Self::L => "Vigilance",
            Self::M => "Abstractedness",
            Self::N => "Privateness",
            Self::O => "Apprehension",
            Self::Q1 => "Openness to Change",
            Self::Q2 => "Self-Reliance",
            Self::Q3 => "Perfectionism",
            Self::Q4 => "Tension",
        }
    }

    /// Accepts `"Factor Q4"`, `"q4"`, `" factor  a "` and similar spellings.
    pub fn parse(raw: &str) -> Option<Self> {
        let collapsed = raw
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_uppercase();
        let code = collapsed
            .strip_prefix("FACTOR")
            .map(str::trim)
            .unwrap_or(&collapsed);

        Self::ordered()
            .into_iter()
            .find(|factor| factor.code() == code)
    }
}

impl fmt::Display for PrimaryFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The five higher-order dimensions derived from the primary factors.
///
/// Declaration order is the canonical order used for iteration and tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GlobalFactor {
    Extraversion,
    Anxiety,
    #[serde(rename = "Tough-mindedness")]
    ToughMindedness,
    Independence,
    #[serde(rename = "Self-Control")]
    SelfControl,
}

impl GlobalFactor {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Extraversion,
            Self::Anxiety,
            Self::ToughMindedness,
            Self::Independence,
            Self::SelfControl,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Extraversion => "Extraversion",
            Self::Anxiety => "Anxiety",
            Self::ToughMindedness => "Tough-mindedness",
            Self::Independence => "Independence",
            Self::SelfControl => "Self-Control",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Extraversion => 0,
            Self::Anxiety => 1,
            Self::ToughMindedness => 2,
            Self::Independence => 3,
            Self::SelfControl => 4,
        }
    }
}

impl fmt::Display for GlobalFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A question as owned by the external question bank. Only `id` and
/// `category` take part in scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Question {
    pub fn new(id: impl AsRef<str>, category: impl Into<String>) -> Self {
        Self {
            id: QuestionId::new(id),
            category: category.into(),
            text: None,
        }
    }

    pub fn primary_factor(&self) -> Option<PrimaryFactor> {
        PrimaryFactor::parse(&self.category)
    }
}

/// A stored test attempt as handed over by the attempts store.
///
/// Everything except `responses` is optional; `responses` stays an untyped
/// JSON value because its shape is not trusted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestAttempt {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub candidate_name: Option<String>,
    #[serde(default)]
    pub candidate_email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub test_id: Option<String>,
    #[serde(default)]
    pub test_title: Option<String>,
    #[serde(default)]
    pub responses: Value,
    #[serde(default, deserialize_with = "lenient_number")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub time_spent: Option<u64>,
}

impl TestAttempt {
    pub fn with_responses(responses: Value) -> Self {
        Self {
            responses,
            ..Self::default()
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Some(Value::Number(number)) => Some(number_text(&number)),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_value))
}

// Fractional seconds are truncated; negative durations are dropped.
fn lenient_seconds<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_value)
        .filter(|seconds| *seconds >= 0.0)
        .map(|seconds| seconds.trunc() as u64))
}

fn number_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|value| value.is_finite())
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.as_deref().and_then(parse_timestamp))
}

pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primary_factor_parse_accepts_label_variants() {
        assert_eq!(PrimaryFactor::parse("Factor A"), Some(PrimaryFactor::A));
        assert_eq!(PrimaryFactor::parse("  factor   q4 "), Some(PrimaryFactor::Q4));
        assert_eq!(PrimaryFactor::parse("Q1"), Some(PrimaryFactor::Q1));
        assert_eq!(PrimaryFactor::parse("Factor D"), None);
        assert_eq!(PrimaryFactor::parse("Leadership"), None);
        assert_eq!(PrimaryFactor::parse(""), None);
    }

    #[test]
    fn question_ids_from_numbers_and_strings_compare_equal() {
        let from_number: QuestionId = serde_json::from_value(json!(7)).expect("numeric id");
        let from_string: QuestionId = serde_json::from_value(json!(" 7 ")).expect("string id");
        assert_eq!(from_number, from_string);
        assert!(serde_json::from_value::<QuestionId>(json!(null)).is_err());
    }

    #[test]
    fn integral_float_ids_match_integer_ids() {
        assert_eq!(QuestionId::from_json(&json!(7.0)), Some(QuestionId::new("7")));
        assert_eq!(QuestionId::from_json(&json!(7.5)), Some(QuestionId::new("7.5")));
    }

    #[test]
    fn stored_score_and_time_spent_accept_text_and_fractions() {
        let attempt: TestAttempt = serde_json::from_value(json!({
            "testId": 16.0,
            "score": "64",
            "timeSpent": 12.5,
        }))
        .expect("attempt parses");

        assert_eq!(attempt.test_id.as_deref(), Some("16"));
        assert_eq!(attempt.score, Some(64.0));
        assert_eq!(attempt.time_spent, Some(12));

        let attempt: TestAttempt = serde_json::from_value(json!({
            "score": "n/a",
            "timeSpent": -4,
        }))
        .expect("attempt parses");
        assert!(attempt.score.is_none());
        assert!(attempt.time_spent.is_none());
    }

    #[test]
    fn attempt_deserializes_with_partial_fields() {
        let attempt: TestAttempt = serde_json::from_value(json!({
            "id": 42,
            "candidateName": "Jordan Lee",
            "completedAt": "2025-03-04T09:30:00Z",
            "timeSpent": 1260,
            "responses": "[]"
        }))
        .expect("attempt parses");

        assert_eq!(attempt.id.as_deref(), Some("42"));
        assert_eq!(attempt.candidate_name.as_deref(), Some("Jordan Lee"));
        assert_eq!(attempt.time_spent, Some(1260));
        assert_eq!(attempt.responses, json!("[]"));
        assert!(attempt.score.is_none());
        assert_eq!(
            attempt.completed_at.map(|dt| dt.to_rfc3339()),
            Some("2025-03-04T09:30:00+00:00".to_string())
        );
    }

    #[test]
    fn unparseable_completion_timestamp_is_dropped() {
        let attempt: TestAttempt =
            serde_json::from_value(json!({ "completedAt": "yesterday-ish" })).expect("parses");
        assert!(attempt.completed_at.is_none());

        let attempt: TestAttempt =
            serde_json::from_value(json!({ "completedAt": "2025-03-04" })).expect("parses");
        assert!(attempt.completed_at.is_some());
    }
}
