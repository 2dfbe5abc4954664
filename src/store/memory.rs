//! In-process quiz store
//!
//! Keeps quizzes in insertion order behind a tokio RwLock. Used by tests
//! and anywhere a MongoDB deployment is not available.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{Quiz, QuizId, QuizResult};
use crate::store::{QuizStore, StoreResult};

// == Memory Quiz Store ==
#[derive(Debug, Clone, Default)]
pub struct MemoryQuizStore {
    quizzes: Arc<RwLock<Vec<(QuizId, Quiz)>>>,
}

impl MemoryQuizStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored quizzes.
    pub async fn len(&self) -> usize {
        self.quizzes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn with_id(id: QuizId, quiz: &Quiz) -> Quiz {
    Quiz {
        id: Some(id.to_string()),
        ..quiz.clone()
    }
}

#[async_trait]
impl QuizStore for MemoryQuizStore {
    async fn insert(&self, mut quiz: Quiz) -> StoreResult<QuizId> {
        let id = QuizId::new();
        quiz.id = None;
        self.quizzes.write().await.push((id, quiz));
        Ok(id)
    }

    async fn find_all(&self) -> StoreResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.iter().map(|(id, quiz)| with_id(*id, quiz)).collect())
    }

    async fn find_by_id(&self, id: QuizId) -> StoreResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes
            .iter()
            .find(|(stored, _)| *stored == id)
            .map(|(stored, quiz)| with_id(*stored, quiz)))
    }

    async fn update(&self, id: QuizId, quiz: Quiz) -> StoreResult<()> {
        let mut quizzes = self.quizzes.write().await;
        if let Some((_, stored)) = quizzes.iter_mut().find(|(stored, _)| *stored == id) {
            stored.quiz_title = quiz.quiz_title;
            stored.questions = quiz.questions;
            stored.results = quiz.results;
        }
        Ok(())
    }

    async fn delete(&self, id: QuizId) -> StoreResult<()> {
        self.quizzes.write().await.retain(|(stored, _)| *stored != id);
        Ok(())
    }

    async fn push_result(
        &self,
        id: QuizId,
        result: QuizResult,
        question_count: usize,
    ) -> StoreResult<bool> {
        let mut quizzes = self.quizzes.write().await;
        match quizzes.iter_mut().find(|(stored, _)| *stored == id) {
            Some((_, quiz)) if quiz.questions.len() == question_count => {
                quiz.results.push(result);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
