use crate::domain::model::QuestionDraft;
use crate::transport::http::error::{ApiError, ErrorResponse};
use crate::transport::http::handlers::common::{collapse, collapse_listing, requested_page};
use crate::transport::http::types::{
    AppState, MessageResponse, PageParams, QuestionsResponse, SearchRequest, SearchResponse,
};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

#[utoipa::path(
    get,
    path = "/questions",
    params(PageParams),
    responses(
        (status = 200, description = "A page of questions", body = QuestionsResponse),
        (status = 404, description = "No categories, or the page is empty", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_questions_handler(
    State(state): State<AppState>,
    query: Option<Query<PageParams>>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let page = requested_page(query);
    let listing = state
        .service
        .list_questions(page)
        .await
        .map_err(|e| collapse_listing("GET /questions", e))?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions: listing.page.questions,
        total_questions: listing.page.total,
        categories: listing.categories,
        current_category: None,
    }))
}

#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question identifier")
    ),
    responses(
        (status = 200, description = "Question deleted", body = MessageResponse),
        (status = 404, description = "Unknown question or any other failure", body = ErrorResponse)
    )
)]
pub async fn delete_question_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::NotFound)?;

    state
        .service
        .delete_question(id)
        .await
        .map_err(|e| collapse("DELETE /questions/{id}", e, ApiError::NotFound))?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Question deleted successfully".to_string(),
        created: None,
        deleted: Some(id),
    }))
}

#[utoipa::path(
    post,
    path = "/questions",
    request_body = QuestionDraft,
    responses(
        (status = 201, description = "Question created", body = MessageResponse),
        (status = 422, description = "Malformed body or rejected record", body = ErrorResponse)
    )
)]
pub async fn create_question_handler(
    State(state): State<AppState>,
    body: Result<Json<QuestionDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(draft) = body.map_err(|e| {
        debug!("POST /questions: invalid JSON body: {}", e);
        ApiError::Unprocessable
    })?;

    let created = state
        .service
        .create_question(draft)
        .await
        .map_err(|e| collapse("POST /questions", e, ApiError::Unprocessable))?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            success: true,
            message: "Question created successfully".to_string(),
            created: Some(created.id),
            deleted: None,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/questions/search",
    params(PageParams),
    request_body = SearchRequest,
    responses(
        (status = 200, description = "A page of matching questions (possibly empty)", body = SearchResponse),
        (status = 422, description = "Blank search term or any other failure", body = ErrorResponse)
    )
)]
pub async fn search_questions_handler(
    State(state): State<AppState>,
    query: Option<Query<PageParams>>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(request) = body.map_err(|e| {
        debug!("POST /questions/search: invalid JSON body: {}", e);
        ApiError::Unprocessable
    })?;
    let term = request.search_term.unwrap_or_default();
    let page = requested_page(query);

    let results = state
        .service
        .search(&term, page)
        .await
        .map_err(|e| collapse("POST /questions/search", e, ApiError::Unprocessable))?;

    Ok(Json(SearchResponse {
        success: true,
        questions: results.questions,
        total_questions: results.total,
        current_category: None,
    }))
}
