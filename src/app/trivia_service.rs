//! The trivia service.
//!
//! This module is the domain boundary between the HTTP handlers and the store.
//! Each operation backs exactly one endpoint and reports failures through
//! [`TriviaError`]; choosing a status code for them is left to the handlers.

use crate::domain::model::{category_map, Category, CategoryMap, NewQuestion, Question, QuestionDraft};
use crate::domain::pagination::paginate;
use crate::domain::quiz::{QuizScope, QuizSelector};
use crate::domain::{TriviaError, TriviaResult};
use crate::storage::TriviaStore;
use std::sync::Arc;
use tracing::{debug, info};

/// One page of questions plus the size of the unpaginated result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total: usize,
}

impl QuestionPage {
    fn slice(all: &[Question], page: i64) -> Self {
        Self {
            questions: paginate(all, page).to_vec(),
            total: all.len(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuestionListing {
    pub page: QuestionPage,
    pub categories: CategoryMap,
}

#[derive(Debug, Clone)]
pub struct CategoryQuestions {
    pub page: QuestionPage,
    pub category: Category,
}

pub struct TriviaService {
    store: Arc<dyn TriviaStore>,
    selector: QuizSelector,
}

impl TriviaService {
    pub fn new(store: Arc<dyn TriviaStore>, selector: QuizSelector) -> Self {
        Self { store, selector }
    }

    pub fn store(&self) -> &Arc<dyn TriviaStore> {
        &self.store
    }

    /// Every category as `id -> type`. An empty table is reported as not found.
    pub async fn categories(&self) -> TriviaResult<CategoryMap> {
        let categories = self.store.list_categories().await?;
        if categories.is_empty() {
            return Err(TriviaError::not_found("categories"));
        }
        Ok(category_map(&categories))
    }

    /// A page of all questions together with the category mapping.
    ///
    /// Categories are loaded first and an empty category table fails the request even
    /// though questions are what was asked for. An empty page is not found, so a page
    /// past the end looks the same as an empty store.
    pub async fn list_questions(&self, page: i64) -> TriviaResult<QuestionListing> {
        let categories = self.categories().await?;

        let all = self.store.list_questions().await?;
        let page = QuestionPage::slice(&all, page);
        if page.questions.is_empty() {
            return Err(TriviaError::not_found("questions page"));
        }

        Ok(QuestionListing { page, categories })
    }

    pub async fn delete_question(&self, id: i32) -> TriviaResult<()> {
        if self.store.get_question(id).await?.is_none() {
            return Err(TriviaError::not_found(format!("question {}", id)));
        }
        if !self.store.delete_question(id).await? {
            // Deleted by a concurrent request between lookup and removal.
            return Err(TriviaError::not_found(format!("question {}", id)));
        }
        info!("Deleted question {}", id);
        Ok(())
    }

    /// Builds a record from the loosely-typed draft under the column constraints and
    /// persists it. The category reference is not checked.
    pub async fn create_question(&self, draft: QuestionDraft) -> TriviaResult<Question> {
        let new = NewQuestion::try_from(draft)?;
        let stored = self.store.insert_question(&new).await?;
        info!(
            "Created question {} (category={}, difficulty={})",
            stored.id, stored.category, stored.difficulty
        );
        Ok(stored)
    }

    /// Case-insensitive substring search over question text. Unlike the listings, an
    /// empty page is a valid (empty) result.
    pub async fn search(&self, term: &str, page: i64) -> TriviaResult<QuestionPage> {
        if term.is_empty() {
            return Err(TriviaError::validation("search term must not be empty"));
        }
        let matches = self.store.search_questions(term).await?;
        debug!("Search {:?} matched {} question(s)", term, matches.len());
        Ok(QuestionPage::slice(&matches, page))
    }

    pub async fn category_questions(&self, id: i32, page: i64) -> TriviaResult<CategoryQuestions> {
        let category = self
            .store
            .get_category(id)
            .await?
            .ok_or_else(|| TriviaError::not_found(format!("category {}", id)))?;

        let all = self.store.questions_in_category(id).await?;
        let page = QuestionPage::slice(&all, page);
        if page.questions.is_empty() {
            return Err(TriviaError::not_found(format!("questions page for category {}", id)));
        }

        Ok(CategoryQuestions { page, category })
    }

    /// Draws the next quiz question for a client-held session.
    pub async fn next_quiz_question(
        &self,
        previous: &[i32],
        scope: QuizScope,
    ) -> TriviaResult<Question> {
        let candidates = match scope {
            QuizScope::AllCategories => self.store.list_questions().await?,
            QuizScope::Category(id) => self.store.questions_in_category(id).await?,
        };
        let pick = self
            .selector
            .select(&candidates, previous, &mut rand::thread_rng())?
            .clone();
        debug!(
            "Quiz turn {:?}: served question {} ({} previous, pool of {})",
            scope,
            pick.id,
            previous.len(),
            candidates.len()
        );
        Ok(pick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quiz::SelectionPolicy;
    use crate::storage::MemoryTriviaStore;
    use serde_json::json;

    async fn service_with(categories: &[&str], questions: &[(&str, i32)]) -> TriviaService {
        let store = MemoryTriviaStore::new();
        for kind in categories {
            store.insert_category(kind).await.unwrap();
        }
        for (text, category) in questions {
            store
                .insert_question(&NewQuestion {
                    question: text.to_string(),
                    answer: "answer".to_string(),
                    difficulty: 1,
                    category: *category,
                })
                .await
                .unwrap();
        }
        TriviaService::new(Arc::new(store), QuizSelector::new(SelectionPolicy::Exclude))
    }

    #[tokio::test]
    async fn test_listing_requires_categories() {
        let service = service_with(&[], &[("q", 1)]).await;
        let err = service.list_questions(1).await.unwrap_err();
        assert!(matches!(err, TriviaError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_listing_counts_unpaginated_total() {
        let questions: Vec<(String, i32)> = (0..13).map(|i| (format!("q{}", i), 1)).collect();
        let refs: Vec<(&str, i32)> = questions.iter().map(|(q, c)| (q.as_str(), *c)).collect();
        let service = service_with(&["Science"], &refs).await;

        let second = service.list_questions(2).await.unwrap();
        assert_eq!(second.page.total, 13);
        assert_eq!(second.page.questions.len(), 3);
        assert_eq!(second.page.questions[0].id, 11);
        assert!(service.list_questions(3).await.is_err());
    }

    #[tokio::test]
    async fn test_search_empty_page_is_ok() {
        let service = service_with(&["Science"], &[("What is H2O?", 1)]).await;
        let page = service.search("what", 5).await.unwrap();
        assert_eq!(page.total, 1);
        assert!(page.questions.is_empty());

        let err = service.search("", 1).await.unwrap_err();
        assert!(matches!(err, TriviaError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let service = service_with(&["Science"], &[("q", 1)]).await;
        service.delete_question(1).await.unwrap();
        let err = service.delete_question(1).await.unwrap_err();
        assert!(matches!(err, TriviaError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_tolerates_dangling_category() {
        let service = service_with(&["Science"], &[]).await;
        let draft: QuestionDraft = serde_json::from_value(json!({
            "question": "Orphan?",
            "answer": "yes",
            "difficulty": 2,
            "category": 99
        }))
        .unwrap();
        let created = service.create_question(draft).await.unwrap();
        assert_eq!(created.category, 99);
    }

    #[tokio::test]
    async fn test_category_questions_carry_category() {
        let service = service_with(&["Science", "Art"], &[("q1", 1), ("q2", 2)]).await;
        let listing = service.category_questions(2, 1).await.unwrap();
        assert_eq!(listing.category.kind, "Art");
        assert_eq!(listing.page.total, 1);

        // Category exists but has nothing on page 2.
        assert!(service.category_questions(2, 2).await.is_err());
        assert!(service.category_questions(7, 1).await.is_err());
    }

    #[tokio::test]
    async fn test_quiz_scopes() {
        let service = service_with(&["Science", "Art"], &[("q1", 1), ("q2", 2), ("q3", 2)]).await;
        let pick = service
            .next_quiz_question(&[2], QuizScope::Category(2))
            .await
            .unwrap();
        assert_eq!(pick.id, 3);

        let pick = service
            .next_quiz_question(&[1, 2], QuizScope::AllCategories)
            .await
            .unwrap();
        assert_eq!(pick.id, 3);

        let err = service
            .next_quiz_question(&[], QuizScope::Category(5))
            .await
            .unwrap_err();
        assert!(matches!(err, TriviaError::Exhausted));
    }
}
