//! Domain models and response DTOs for the quiz server API
//!
//! Quiz documents travel as camelCase JSON; responses are small wrappers
//! around identifiers and status messages.

mod id;
mod quiz;
pub mod responses;

// Re-export commonly used types
pub use id::QuizId;
pub(crate) use quiz::null_as_default;
pub use quiz::{Question, Quiz, QuizResult};
pub use responses::{CreatedResponse, ErrorResponse, HealthResponse};
