use serde::{Deserialize, Serialize};

/// A single quiz entry.
///
/// Both fields are stored trimmed and non-empty. Question text is unique
/// within a store under case-insensitive comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub answer: String,
}

impl QuestionRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Whether `other` names the same question, ignoring case.
    pub fn same_question(&self, other: &str) -> bool {
        self.question.to_lowercase() == other.to_lowercase()
    }
}

/// Input for adding a question over HTTP.
///
/// Both fields are optional so that a missing key is reported as a
/// validation failure instead of a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddQuestionInput {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

/// Response body for `/add_question`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddQuestionResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AddQuestionResponse {
    pub fn ok() -> Self {
        Self { ok: true, error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
        }
    }
}

/// The records a fresh store starts with.
pub fn default_questions() -> Vec<QuestionRecord> {
    vec![
        QuestionRecord::new("What is the capital of France?", "Paris"),
        QuestionRecord::new("What is 2 + 2?", "4"),
        QuestionRecord::new(
            "What color do you get when you mix blue and yellow?",
            "Green",
        ),
        QuestionRecord::new("Who wrote 'Romeo and Juliet'?", "William Shakespeare"),
        QuestionRecord::new("What planet is known as the Red Planet?", "Mars"),
    ]
}
