//! Quiz document model
//!
//! Missing fields decode to their zero values and a `null` list decodes as
//! empty, so partially filled payloads and legacy documents are accepted.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{QuizError, Result};

/// A titled set of questions plus the results submitted against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    /// Store-assigned identifier, absent until the quiz is created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quiz_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub questions: Vec<Question>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<QuizResult>,
}

/// A single question with its candidate answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(default, deserialize_with = "null_as_default")]
    pub question_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub possible_answers: Vec<String>,
    /// Indices into `possible_answers`; not range-checked
    #[serde(default, deserialize_with = "null_as_default")]
    pub correct_answers: Vec<i64>,
}

/// One participant's per-question correctness, as reported by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub person_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub responses: Vec<bool>,
}

impl Quiz {
    /// Checks that `result` holds exactly one response per question.
    pub fn validate_result(&self, result: &QuizResult) -> Result<()> {
        if result.responses.len() != self.questions.len() {
            return Err(QuizError::ResponseCountMismatch {
                expected: self.questions.len(),
                actual: result.responses.len(),
            });
        }
        Ok(())
    }
}

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
