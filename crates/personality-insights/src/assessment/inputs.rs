use super::domain::{Question, QuestionId, TestAttempt};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum QuestionBankError {
    #[error("failed to read question bank: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid question bank CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid question bank JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported question bank format '{0}' (expected .json or .csv)")]
    UnsupportedFormat(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AttemptLoadError {
    #[error("failed to read test attempt: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid test attempt JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Question bank loaded from an export of the external question store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        let bank = Self { questions };
        bank.warn_unresolved();
        bank
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, QuestionBankError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let bank = match extension.as_str() {
            "json" => Self::from_json_reader(std::fs::File::open(path)?)?,
            "csv" => Self::from_csv_reader(std::fs::File::open(path)?)?,
            other => return Err(QuestionBankError::UnsupportedFormat(other.to_string())),
        };

        info!(path = %path.display(), questions = bank.len(), "loaded question bank");
        Ok(bank)
    }

    /// Reads either a bare array of questions or `{ "questions": [...] }`.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, QuestionBankError> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum BankDocument {
            Bare(Vec<Question>),
            Wrapped { questions: Vec<Question> },
        }

        let questions = match serde_json::from_reader(reader)? {
            BankDocument::Bare(questions) => questions,
            BankDocument::Wrapped { questions } => questions,
        };
        Ok(Self::new(questions))
    }

    /// Reads rows with `id`, `category` and an optional `text` column.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, QuestionBankError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut questions = Vec::new();

        for row in csv_reader.deserialize::<QuestionRow>() {
            let row = row?;
            questions.push(Question {
                id: QuestionId::new(&row.id),
                category: row.category,
                text: row.text.filter(|text| !text.is_empty()),
            });
        }

        Ok(Self::new(questions))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions whose category is not one of the sixteen primary factors.
    pub fn unresolved(&self) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(|question| question.primary_factor().is_none())
    }

    fn warn_unresolved(&self) {
        for question in self.unresolved() {
            warn!(
                question_id = %question.id,
                category = %question.category,
                "question category is not a primary factor; its answers will not be scored"
            );
        }
    }
}

#[derive(Debug, Deserialize)]
struct QuestionRow {
    id: String,
    category: String,
    #[serde(default)]
    text: Option<String>,
}

impl TestAttempt {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AttemptLoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AttemptLoadError> {
        Ok(serde_json::from_reader(reader)?)
    }
}
