pub mod error;
pub mod router;
pub mod types;
pub mod handlers {
    pub mod categories;
    pub mod common;
    pub mod health;
    pub mod questions;
    pub mod quizzes;
}

pub use error::ApiError;
pub use router::{build_app, create_router, with_middleware, ApiDoc};
pub use types::AppState;
