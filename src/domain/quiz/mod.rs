//! Quiz turns: which pool to draw from and how to draw.

pub mod selector;

pub use selector::{QuizSelector, SelectionPolicy};

use crate::domain::error::{TriviaError, TriviaResult};
use serde_json::Value as JsonValue;

/// The candidate pool a quiz turn draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    AllCategories,
    Category(i32),
}

impl QuizScope {
    /// Interprets `quiz_category.id`. Clients send it as a number or a numeric
    /// string; `0` selects every category.
    pub fn from_category_id(id: &JsonValue) -> TriviaResult<Self> {
        let parsed = match id {
            JsonValue::Number(n) => n.as_i64(),
            JsonValue::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        match parsed.map(i32::try_from) {
            Some(Ok(0)) => Ok(QuizScope::AllCategories),
            Some(Ok(id)) => Ok(QuizScope::Category(id)),
            _ => Err(TriviaError::not_found(format!("quiz category {}", id))),
        }
    }
}
