use crate::domain::model::{Category, Question, QuestionDraft};
use crate::transport::http::error::{
    method_not_allowed_envelope, not_found_fallback, panic_response, ErrorResponse,
};
use crate::transport::http::handlers::{categories, health, questions, quizzes};
use crate::transport::http::types::{
    ApiResponse, AppState, CategoriesResponse, CategoryQuestionsResponse, MessageResponse,
    QuestionsResponse, QuizCategory, QuizRequest, QuizResponse, SearchRequest, SearchResponse,
};
use axum::http::{header, Method};
use axum::middleware::map_response;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        categories::list_categories_handler,
        categories::category_questions_handler,
        questions::list_questions_handler,
        questions::delete_question_handler,
        questions::create_question_handler,
        questions::search_questions_handler,
        quizzes::play_quiz_handler
    ),
    components(schemas(
        ApiResponse,
        ErrorResponse,
        Category,
        Question,
        QuestionDraft,
        CategoriesResponse,
        QuestionsResponse,
        CategoryQuestionsResponse,
        MessageResponse,
        SearchRequest,
        SearchResponse,
        QuizRequest,
        QuizCategory,
        QuizResponse
    ))
)]
pub struct ApiDoc;

/// The trivia routes, without documentation or middleware.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/categories", get(categories::list_categories_handler))
        .route(
            "/categories/:id/questions",
            get(categories::category_questions_handler),
        )
        .route(
            "/questions",
            get(questions::list_questions_handler).post(questions::create_question_handler),
        )
        .route("/questions/:id", delete(questions::delete_question_handler))
        .route("/questions/search", post(questions::search_questions_handler))
        .route("/quizzes", post(quizzes::play_quiz_handler))
        .with_state(app_state)
}

/// Allows every origin; headers and methods match what the frontend sends.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

/// Error envelopes for framework-level faults (unknown path, wrong method, panic),
/// request tracing and CORS.
pub fn with_middleware(router: Router) -> Router {
    router
        .fallback(not_found_fallback)
        .layer(map_response(method_not_allowed_envelope))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// The full application: routes, Swagger UI and middleware.
pub fn build_app(app_state: AppState) -> Router {
    with_middleware(
        create_router(app_state)
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())),
    )
}
