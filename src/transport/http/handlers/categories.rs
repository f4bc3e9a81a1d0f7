use crate::transport::http::error::{ApiError, ErrorResponse};
use crate::transport::http::handlers::common::{collapse, collapse_listing, requested_page};
use crate::transport::http::types::{
    AppState, CategoriesResponse, CategoryQuestionsResponse, PageParams,
};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::Json;

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories keyed by id", body = CategoriesResponse),
        (status = 404, description = "No categories stored", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_categories_handler(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state
        .service
        .categories()
        .await
        .map_err(|e| collapse_listing("GET /categories", e))?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category identifier"),
        PageParams
    ),
    responses(
        (status = 200, description = "A page of the category's questions", body = CategoryQuestionsResponse),
        (status = 404, description = "Unknown category, empty page, or any other failure", body = ErrorResponse)
    )
)]
pub async fn category_questions_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    query: Option<Query<PageParams>>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::NotFound)?;
    let page = requested_page(query);

    let listing = state
        .service
        .category_questions(id, page)
        .await
        .map_err(|e| collapse("GET /categories/{id}/questions", e, ApiError::NotFound))?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: listing.page.questions,
        total_questions: listing.page.total,
        current_category: listing.category.kind,
    }))
}
