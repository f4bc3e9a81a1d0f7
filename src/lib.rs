pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::TriviaService;
pub use domain::model::{Category, NewQuestion, Question, QuestionDraft};
pub use domain::quiz::{QuizScope, QuizSelector, SelectionPolicy};
pub use domain::{TriviaError, TriviaResult};
pub use storage::{MemoryTriviaStore, PostgresTriviaStore, TriviaStore};
