//! Turns untrusted response payloads into an ordered list of scored answers.
//!
//! Accepted payload shapes:
//! - an array of response records (or of bare values),
//! - an object carrying a `responses` or `detailedAnswers` array (or answer map),
//! - an object mapping question ids to values,
//! - a JSON-encoded string of any of the above.
//!
//! Anything else degrades to an empty list flagged in the diagnostics.

use super::domain::QuestionId;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

pub const SCALE_MIN: f64 = 1.0;
pub const SCALE_MAX: f64 = 5.0;

/// Scale value assumed for text that is neither a Likert label nor a number.
pub const NEUTRAL_MIDPOINT: f64 = 3.0;

const ID_FIELDS: [&str; 3] = ["questionId", "question_id", "id"];
const VALUE_FIELDS: [&str; 3] = ["selectedValue", "selectedAnswer", "answer"];
const CONTAINER_FIELDS: [&str; 2] = ["responses", "detailedAnswers"];

const LIKERT_LABELS: [(&str, f64); 10] = [
    ("strongly disagree", 1.0),
    ("disagree", 2.0),
    ("neutral", 3.0),
    ("agree", 4.0),
    ("strongly agree", 5.0),
    ("never", 1.0),
    ("rarely", 2.0),
    ("sometimes", 3.0),
    ("often", 4.0),
    ("always", 5.0),
];

/// One answer on the 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedResponse {
    /// Index of the record in the raw payload, kept for positional lookups.
    pub position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_id: Option<QuestionId>,
    /// Answer on the 1-5 scale after clamping.
    pub scale_value: f64,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NormalizationDiagnostics {
    pub accepted: usize,
    /// Records that carried no usable value.
    pub skipped: usize,
    /// Values replaced by [`NEUTRAL_MIDPOINT`].
    pub defaulted: usize,
    pub unparseable_payload: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedResponses {
    responses: Vec<NormalizedResponse>,
    diagnostics: NormalizationDiagnostics,
}

impl NormalizedResponses {
    pub fn responses(&self) -> &[NormalizedResponse] {
        &self.responses
    }

    pub fn diagnostics(&self) -> NormalizationDiagnostics {
        self.diagnostics
    }

    pub fn iter(&self) -> impl Iterator<Item = &NormalizedResponse> {
        self.responses.iter()
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// True when at least one response names its question.
    pub fn has_explicit_ids(&self) -> bool {
        self.responses
            .iter()
            .any(|response| response.question_id.is_some())
    }

    /// Re-encodes the responses as a record array accepted by [`normalize`].
    pub fn to_payload(&self) -> Value {
        Value::Array(
            self.responses
                .iter()
                .map(|response| match &response.question_id {
                    Some(id) => json!({ "questionId": id, "selectedValue": response.scale_value }),
                    None => json!({ "selectedValue": response.scale_value }),
                })
                .collect(),
        )
    }
}

/// Normalizes a raw response payload. Never fails.
pub fn normalize(raw: &Value) -> NormalizedResponses {
    let mut diagnostics = NormalizationDiagnostics::default();

    let Some(records) = extract_records(raw, true) else {
        warn!("response payload could not be parsed; treating attempt as unanswered");
        diagnostics.unparseable_payload = true;
        return NormalizedResponses {
            responses: Vec::new(),
            diagnostics,
        };
    };

    let mut responses = Vec::with_capacity(records.len());
    for record in records {
        let scale_value = record
            .value
            .as_ref()
            .and_then(|value| scale_value(value, record.question_id.as_ref(), &mut diagnostics));

        match scale_value {
            Some(scale_value) => {
                let scale_value = scale_value.clamp(SCALE_MIN, SCALE_MAX);
                responses.push(NormalizedResponse {
                    position: record.position,
                    question_id: record.question_id,
                    scale_value,
                    value: rescale(scale_value),
                });
            }
            None => diagnostics.skipped += 1,
        }
    }

    diagnostics.accepted = responses.len();
    debug!(
        accepted = diagnostics.accepted,
        skipped = diagnostics.skipped,
        defaulted = diagnostics.defaulted,
        "normalized responses"
    );

    NormalizedResponses {
        responses,
        diagnostics,
    }
}

/// Linear map of the 1-5 scale onto 0-100.
pub fn rescale(scale_value: f64) -> f64 {
    (scale_value.clamp(SCALE_MIN, SCALE_MAX) - SCALE_MIN) / (SCALE_MAX - SCALE_MIN) * 100.0
}

/// Resolves a Likert label (case and spacing insensitive).
pub fn likert_value(label: &str) -> Option<f64> {
    let key = collapse(label);
    LIKERT_LABELS
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
}

struct RawRecord {
    position: usize,
    question_id: Option<QuestionId>,
    value: Option<Value>,
}

// A JSON string is decoded once; a string that decodes to another string is
// rejected rather than unwrapped again.
fn extract_records(raw: &Value, allow_encoded: bool) -> Option<Vec<RawRecord>> {
    match raw {
        Value::Null => Some(Vec::new()),
        Value::Array(items) => Some(records_from_array(items)),
        Value::Object(map) => {
            let container = CONTAINER_FIELDS
                .iter()
                .find_map(|field| map.get(*field).filter(|value| !value.is_null()));
            match container {
                Some(Value::Array(items)) => Some(records_from_array(items)),
                Some(Value::Object(answers)) => Some(records_from_answer_map(answers)),
                Some(Value::String(text)) if allow_encoded => decode(text),
                Some(_) => None,
                None => Some(records_from_answer_map(map)),
            }
        }
        Value::String(text) if allow_encoded => decode(text),
        _ => None,
    }
}

fn decode(text: &str) -> Option<Vec<RawRecord>> {
    let decoded: Value = serde_json::from_str(text).ok()?;
    extract_records(&decoded, false)
}

fn records_from_array(items: &[Value]) -> Vec<RawRecord> {
    items
        .iter()
        .enumerate()
        .map(|(position, item)| match item {
            Value::Object(record) => RawRecord {
                position,
                question_id: first_present(record, &ID_FIELDS).and_then(QuestionId::from_json),
                value: first_present(record, &VALUE_FIELDS).cloned(),
            },
            other => RawRecord {
                position,
                question_id: None,
                value: Some(other.clone()),
            },
        })
        .collect()
}

fn records_from_answer_map(map: &Map<String, Value>) -> Vec<RawRecord> {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_by(|left, right| left.0.cmp(right.0));

    entries
        .into_iter()
        .enumerate()
        .map(|(position, (key, value))| {
            let value = match value {
                Value::Object(record) => first_present(record, &VALUE_FIELDS),
                other => Some(other),
            };
            RawRecord {
                position,
                question_id: Some(QuestionId::new(key)),
                value: value.cloned(),
            }
        })
        .collect()
}

fn first_present<'a>(record: &'a Map<String, Value>, fields: &[&str]) -> Option<&'a Value> {
    fields
        .iter()
        .find_map(|field| record.get(*field).filter(|value| !value.is_null()))
}

fn scale_value(
    value: &Value,
    question_id: Option<&QuestionId>,
    diagnostics: &mut NormalizationDiagnostics,
) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|value| value.is_finite()),
        Value::String(text) => parse_label(text, question_id, diagnostics),
        _ => None,
    }
}

fn parse_label(
    text: &str,
    question_id: Option<&QuestionId>,
    diagnostics: &mut NormalizationDiagnostics,
) -> Option<f64> {
    let key = collapse(text);
    if let Some(value) = likert_value(&key) {
        return Some(value);
    }

    // Numeric text is read as an integer, dropping any fractional part.
    if let Some(value) = key
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(f64::trunc)
    {
        return Some(value);
    }

    warn!(
        question_id = question_id.map(QuestionId::as_str).unwrap_or("<positional>"),
        label = %text,
        "unrecognized answer label; defaulting to neutral midpoint"
    );
    diagnostics.defaulted += 1;
    Some(NEUTRAL_MIDPOINT)
}

fn collapse(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}
