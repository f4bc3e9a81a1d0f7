//! In-memory store (no external dependencies).
//!
//! Mirrors the PostgreSQL backend: identifiers are assigned sequentially starting
//! at 1 and never reused, and listings come back in identifier order.

use crate::domain::model::{Category, NewQuestion, Question};
use crate::domain::{TriviaError, TriviaResult};
use crate::storage::TriviaStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    last_category_id: i32,
    last_question_id: i32,
}

#[derive(Default)]
pub struct MemoryTriviaStore {
    tables: RwLock<Tables>,
}

impl MemoryTriviaStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TriviaStore for MemoryTriviaStore {
    async fn ping(&self) -> TriviaResult<()> {
        Ok(())
    }

    async fn list_categories(&self) -> TriviaResult<Vec<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: i32) -> TriviaResult<Option<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.get(&id).cloned())
    }

    async fn insert_category(&self, kind: &str) -> TriviaResult<Category> {
        let mut tables = self.tables.write().await;
        tables.last_category_id += 1;
        let category = Category {
            id: tables.last_category_id,
            kind: kind.to_string(),
        };
        tables.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn list_questions(&self) -> TriviaResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables.questions.values().cloned().collect())
    }

    async fn get_question(&self, id: i32) -> TriviaResult<Option<Question>> {
        let tables = self.tables.read().await;
        Ok(tables.questions.get(&id).cloned())
    }

    async fn questions_in_category(&self, category: i32) -> TriviaResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> TriviaResult<Vec<Question>> {
        let needle = term.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn insert_question(&self, question: &NewQuestion) -> TriviaResult<Question> {
        // Same CHECK constraints as the questions table.
        if question.question.is_empty() || question.answer.is_empty() {
            return Err(TriviaError::validation("question and answer must not be empty"));
        }
        let mut tables = self.tables.write().await;
        tables.last_question_id += 1;
        let stored = Question {
            id: tables.last_question_id,
            question: question.question.clone(),
            answer: question.answer.clone(),
            category: question.category,
            difficulty: question.difficulty,
        };
        tables.questions.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete_question(&self, id: i32) -> TriviaResult<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables.questions.remove(&id).is_some())
    }
}
