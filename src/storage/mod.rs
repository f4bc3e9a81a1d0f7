//! Storage collaborator for categories and questions.
//!
//! The service only ever talks to [`TriviaStore`]; `postgres` is the production
//! backend and `memory` backs tests and database-less development runs.

pub mod memory;
pub mod postgres;

pub use memory::MemoryTriviaStore;
pub use postgres::PostgresTriviaStore;

use crate::domain::model::{Category, NewQuestion, Question};
use crate::domain::TriviaResult;
use async_trait::async_trait;

/// Equality filters and full scans over the two tables. Listings are ordered by
/// ascending identifier.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// Cheap round-trip used by the health endpoint.
    async fn ping(&self) -> TriviaResult<()>;

    async fn list_categories(&self) -> TriviaResult<Vec<Category>>;

    async fn get_category(&self, id: i32) -> TriviaResult<Option<Category>>;

    async fn insert_category(&self, kind: &str) -> TriviaResult<Category>;

    async fn list_questions(&self) -> TriviaResult<Vec<Question>>;

    async fn get_question(&self, id: i32) -> TriviaResult<Option<Question>>;

    async fn questions_in_category(&self, category: i32) -> TriviaResult<Vec<Question>>;

    /// Case-insensitive substring match on the question text. The term is literal.
    async fn search_questions(&self, term: &str) -> TriviaResult<Vec<Question>>;

    async fn insert_question(&self, question: &NewQuestion) -> TriviaResult<Question>;

    /// Returns false when no row had that identifier.
    async fn delete_question(&self, id: i32) -> TriviaResult<bool>;
}
