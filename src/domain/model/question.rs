use crate::domain::error::{TriviaError, TriviaResult};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

/// A stored trivia question in its wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Raw create payload. Every field is optional and loosely typed; the store
/// constraints are applied when it is turned into a [`NewQuestion`].
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
pub struct QuestionDraft {
    #[serde(default)]
    #[schema(value_type = String)]
    pub question: Option<JsonValue>,
    #[serde(default)]
    #[schema(value_type = String)]
    pub answer: Option<JsonValue>,
    #[serde(default)]
    #[schema(value_type = i32)]
    pub difficulty: Option<JsonValue>,
    #[serde(default)]
    #[schema(value_type = i32)]
    pub category: Option<JsonValue>,
}

/// A question that satisfies the column constraints and can be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i32,
}

impl TryFrom<QuestionDraft> for NewQuestion {
    type Error = TriviaError;

    fn try_from(draft: QuestionDraft) -> TriviaResult<Self> {
        let question = coerce_text("question", draft.question.as_ref())?;
        let answer = coerce_text("answer", draft.answer.as_ref())?;
        let difficulty = coerce_int("difficulty", draft.difficulty.as_ref())?;
        let category = coerce_int("category", draft.category.as_ref())?;
        Ok(NewQuestion {
            question,
            answer,
            difficulty,
            category,
        })
    }
}

/// Non-empty text column. Numbers and bools stringify.
fn coerce_text(field: &str, v: Option<&JsonValue>) -> TriviaResult<String> {
    let text = match v {
        None | Some(JsonValue::Null) => String::new(),
        Some(JsonValue::String(s)) => s.clone(),
        Some(JsonValue::Number(n)) => n.to_string(),
        Some(JsonValue::Bool(b)) => b.to_string(),
        Some(_) => {
            return Err(TriviaError::validation(format!("{} must be text", field)));
        }
    };
    if text.is_empty() {
        return Err(TriviaError::validation(format!("{} must not be empty", field)));
    }
    Ok(text)
}

/// INTEGER column. Accepts JSON integers and numeric strings (e.g. `"1"`).
fn coerce_int(field: &str, v: Option<&JsonValue>) -> TriviaResult<i32> {
    let parsed = match v {
        Some(JsonValue::Number(n)) => n.as_i64(),
        Some(JsonValue::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
    .ok_or_else(|| TriviaError::validation(format!("{} must be an integer", field)))?;

    i32::try_from(parsed)
        .map_err(|_| TriviaError::validation(format!("{} out of range for int: {}", field, parsed)))
}
