pub mod trivia_service;

pub use trivia_service::{CategoryQuestions, QuestionListing, QuestionPage, TriviaService};
