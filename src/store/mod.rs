//! Store Module
//!
//! Persistence for quiz documents behind the `QuizStore` trait. The server
//! runs against MongoDB; tests use the in-process store.

mod memory;
mod mongo;


use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{Quiz, QuizId, QuizResult};

// Re-export public types
pub use memory::MemoryQuizStore;
pub use mongo::MongoQuizStore;

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

// == Quiz Store Trait ==
/// Operations on a single collection of quiz documents.
///
/// Implementations must be safe to share between concurrently running
/// requests.
#[async_trait]
pub trait QuizStore: Send + Sync {
    /// Inserts a quiz and returns the identifier the store assigned.
    /// Any `id` carried by `quiz` is ignored.
    async fn insert(&self, quiz: Quiz) -> StoreResult<QuizId>;

    /// Returns every quiz in store iteration order.
    async fn find_all(&self) -> StoreResult<Vec<Quiz>>;

    async fn find_by_id(&self, id: QuizId) -> StoreResult<Option<Quiz>>;

    /// Replaces title, questions and results. Updating an absent quiz is not
    /// an error.
    async fn update(&self, id: QuizId, quiz: Quiz) -> StoreResult<()>;

    /// Deletes a quiz. Deleting an absent quiz is not an error.
    async fn delete(&self, id: QuizId) -> StoreResult<()>;

    /// Atomically appends `result` if the quiz exists and currently has
    /// exactly `question_count` questions. Returns whether it was appended.
    async fn push_result(
        &self,
        id: QuizId,
        result: QuizResult,
        question_count: usize,
    ) -> StoreResult<bool>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> StoreResult<()>;
}

/// Runs a store operation under a deadline.
pub async fn with_deadline<F, T>(timeout: Duration, op: F) -> StoreResult<T>
where
    F: Future<Output = StoreResult<T>>,
{
    tokio::time::timeout(timeout, op)
        .await
        .map_err(|_| StoreError::Timeout(timeout))?
}
