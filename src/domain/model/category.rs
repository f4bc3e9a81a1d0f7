use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// A labeled grouping of questions (e.g. "Science").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Categories keyed by identifier, serialized as `{"1": "Science", ...}`.
pub type CategoryMap = BTreeMap<i32, String>;

/// Builds the identifier -> type mapping served by the listing endpoints.
pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

/// Categories the `preflight` binary seeds into an empty store.
pub const STANDARD_CATEGORIES: &[&str] = &[
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];
