//! Quiz identifiers
//!
//! Quizzes are keyed by the store's ObjectId; clients see it as 24 hex digits.

use std::fmt;
use std::str::FromStr;

use mongodb::bson::oid::ObjectId;

use crate::error::QuizError;

/// Store-assigned quiz identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuizId(ObjectId);

impl QuizId {
    /// Generates a fresh identifier.
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }
}

impl Default for QuizId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectId> for QuizId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for QuizId {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| QuizError::InvalidId)
    }
}

impl fmt::Display for QuizId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}
