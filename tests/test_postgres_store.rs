//! Postgres store against a live database.
//!
//! Skipped unless DATABASE_URL is set. Only rows created here are touched, and they are
//! removed again before the test returns.

use std::env;
use trivia_api::{NewQuestion, PostgresTriviaStore, TriviaStore};

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_postgres_store_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let Ok(database_url) = env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set; skipping");
        return Ok(());
    };

    let store = PostgresTriviaStore::connect(&database_url, 2).await?;
    store.ping().await?;

    let category = store.insert_category("Preflight Trivia").await?;
    assert_eq!(
        store.get_category(category.id).await?.map(|c| c.kind),
        Some("Preflight Trivia".to_string())
    );

    // The marker contains LIKE metacharacters, which must match literally.
    let marker = format!("zq%_{}", category.id);
    let created = store
        .insert_question(&NewQuestion {
            question: format!("Which marker is {}?", marker),
            answer: "this one".to_string(),
            difficulty: 3,
            category: category.id,
        })
        .await?;
    assert!(created.id > 0);

    let hits = store.search_questions(&marker.to_uppercase()).await?;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, created.id);

    // Unescaped, `_` would match the `%` in the stored text.
    let literal_miss = store.search_questions(&format!("zq__{}", category.id)).await?;
    assert!(literal_miss.iter().all(|q| q.id != created.id));

    let in_category = store.questions_in_category(category.id).await?;
    assert_eq!(in_category.len(), 1);
    assert_eq!(in_category[0].difficulty, 3);

    let blank = store
        .insert_question(&NewQuestion {
            question: String::new(),
            answer: "x".to_string(),
            difficulty: 1,
            category: category.id,
        })
        .await;
    assert!(blank.is_err());

    assert!(store.delete_question(created.id).await?);
    assert!(!store.delete_question(created.id).await?);
    assert!(store.get_question(created.id).await?.is_none());

    sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(category.id)
        .execute(store.pool())
        .await?;
    Ok(())
}
