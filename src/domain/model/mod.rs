//! Domain records: categories and questions.

pub mod category;
pub mod question;

pub use category::{category_map, Category, CategoryMap, STANDARD_CATEGORIES};
pub use question::{NewQuestion, Question, QuestionDraft};
