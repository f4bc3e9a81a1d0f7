use crate::domain::quiz::QuizScope;
use crate::transport::http::error::{ApiError, ErrorResponse};
use crate::transport::http::handlers::common::collapse;
use crate::transport::http::types::{AppState, QuizRequest, QuizResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value as JsonValue;
use tracing::debug;

/// Every failure on this endpoint, including a missing field, is reported as 404.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "Next quiz question", body = QuizResponse),
        (status = 404, description = "Missing field, exhausted pool, or any other failure", body = ErrorResponse)
    )
)]
pub async fn play_quiz_handler(
    State(state): State<AppState>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(request) = body.map_err(|e| {
        debug!("POST /quizzes: invalid JSON body: {}", e);
        ApiError::NotFound
    })?;

    let (previous, category) = match (request.previous_questions, request.quiz_category) {
        (Some(previous), Some(category)) => (previous, category),
        _ => {
            debug!("POST /quizzes: previous_questions or quiz_category missing");
            return Err(ApiError::NotFound);
        }
    };

    let scope = QuizScope::from_category_id(&category.id)
        .map_err(|e| collapse("POST /quizzes", e, ApiError::NotFound))?;
    let previous = played_ids(&previous);

    let question = state
        .service
        .next_quiz_question(&previous, scope)
        .await
        .map_err(|e| collapse("POST /quizzes", e, ApiError::NotFound))?;

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Integer entries of `previous_questions`; anything else can never name a question.
fn played_ids(entries: &[JsonValue]) -> Vec<i32> {
    entries
        .iter()
        .filter_map(|v| v.as_i64().and_then(|n| i32::try_from(n).ok()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn played_ids_skips_non_integers() {
        let entries = [json!(5), json!("9"), json!(null), json!(1.5), json!(12), json!(1u64 << 40)];
        assert_eq!(played_ids(&entries), vec![5, 12]);
    }
}
