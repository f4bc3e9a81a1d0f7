//! PostgreSQL-backed store.

use crate::domain::model::{Category, NewQuestion, Question};
use crate::domain::TriviaResult;
use crate::storage::TriviaStore;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

#[derive(Clone)]
pub struct PostgresTriviaStore {
    pool: PgPool,
}

impl PostgresTriviaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects a pool and creates the tables if they are missing.
    pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        let store = Self::new(pool);
        store.run_migrations().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> anyhow::Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS categories (
                id SERIAL PRIMARY KEY,
                type TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        // No foreign key on category: dangling references are tolerated.
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS questions (
                id SERIAL PRIMARY KEY,
                question TEXT NOT NULL CHECK (question <> ''),
                answer TEXT NOT NULL CHECK (answer <> ''),
                category INTEGER NOT NULL,
                difficulty INTEGER NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Escapes LIKE metacharacters so the term matches literally (with `ESCAPE '\'`).
fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[async_trait]
impl TriviaStore for PostgresTriviaStore {
    async fn ping(&self) -> TriviaResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_categories(&self) -> TriviaResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_category(&self, id: i32) -> TriviaResult<Option<Category>> {
        let row = sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_category(&self, kind: &str) -> TriviaResult<Category> {
        let row = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (type) VALUES ($1) RETURNING id, type",
        )
        .bind(kind)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_questions(&self) -> TriviaResult<Vec<Question>> {
        let sql = format!("SELECT {} FROM questions ORDER BY id", QUESTION_COLUMNS);
        let rows = sqlx::query_as::<_, Question>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_question(&self, id: i32) -> TriviaResult<Option<Question>> {
        let sql = format!("SELECT {} FROM questions WHERE id = $1", QUESTION_COLUMNS);
        let row = sqlx::query_as::<_, Question>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn questions_in_category(&self, category: i32) -> TriviaResult<Vec<Question>> {
        let sql = format!(
            "SELECT {} FROM questions WHERE category = $1 ORDER BY id",
            QUESTION_COLUMNS
        );
        let rows = sqlx::query_as::<_, Question>(&sql)
            .bind(category)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn search_questions(&self, term: &str) -> TriviaResult<Vec<Question>> {
        let sql = format!(
            r"SELECT {} FROM questions
             WHERE question ILIKE '%' || $1 || '%' ESCAPE '\'
             ORDER BY id",
            QUESTION_COLUMNS
        );
        let rows = sqlx::query_as::<_, Question>(&sql)
            .bind(escape_like(term))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert_question(&self, question: &NewQuestion) -> TriviaResult<Question> {
        let sql = format!(
            "INSERT INTO questions (question, answer, category, difficulty)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            QUESTION_COLUMNS
        );
        let row = sqlx::query_as::<_, Question>(&sql)
            .bind(&question.question)
            .bind(&question.answer)
            .bind(question.category)
            .bind(question.difficulty)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_question(&self, id: i32) -> TriviaResult<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
