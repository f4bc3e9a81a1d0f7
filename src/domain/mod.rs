pub mod error;
pub mod model;
pub mod pagination;
pub mod quiz;

pub use error::{TriviaError, TriviaResult};
