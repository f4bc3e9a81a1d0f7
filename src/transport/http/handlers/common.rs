use crate::domain::pagination::parse_page;
use crate::domain::TriviaError;
use crate::transport::http::error::ApiError;
use crate::transport::http::types::PageParams;
use axum::extract::Query;
use tracing::{debug, warn};

/// Reports a domain failure as the endpoint's fixed status. The cause is logged and
/// dropped.
pub fn collapse(endpoint: &str, err: TriviaError, as_status: ApiError) -> ApiError {
    if err.is_expected() {
        debug!("{}: {} -> {}", endpoint, err, as_status.status());
    } else {
        warn!("{}: {} -> {}", endpoint, err, as_status.status());
    }
    as_status
}

/// Listing endpoints have no catch of their own: storage faults surface as 500 and
/// everything else as not found.
pub fn collapse_listing(endpoint: &str, err: TriviaError) -> ApiError {
    let status = match err {
        TriviaError::Storage(_) => ApiError::Internal,
        _ => ApiError::NotFound,
    };
    collapse(endpoint, err, status)
}

pub fn requested_page(query: Option<Query<PageParams>>) -> i64 {
    parse_page(query.as_ref().and_then(|Query(p)| p.page.as_deref()))
}
