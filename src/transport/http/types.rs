use crate::app::TriviaService;
use crate::domain::model::{CategoryMap, Question};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TriviaService>,
}

/// `?page=N`. Kept as a string so that junk falls back to page 1 instead of
/// rejecting the request.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// 1-based page number (10 questions per page, default 1).
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    /// Category types keyed by identifier.
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Size of the whole question set, not of this page.
    pub total_questions: usize,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
    /// Always null: no category filter applies to this listing.
    pub current_category: Option<String>,
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Number of matches across all pages.
    pub total_questions: usize,
    pub current_category: Option<String>,
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// The type label of the requested category.
    pub current_category: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<i32>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct SearchRequest {
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct QuizRequest {
    /// Identifiers already served in this quiz session. Entries that are not
    /// integers are accepted and never match a question.
    #[serde(default)]
    #[schema(value_type = Option<Vec<i32>>)]
    pub previous_questions: Option<Vec<JsonValue>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct QuizCategory {
    /// Category identifier as a number or numeric string; `0` means every category.
    #[serde(default)]
    #[schema(value_type = String)]
    pub id: JsonValue,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Question,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
