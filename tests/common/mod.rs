//! Shared fixtures: an in-process API server over a seeded in-memory store.

#![allow(dead_code)]

use std::sync::Arc;
use trivia_api::domain::model::STANDARD_CATEGORIES;
use trivia_api::transport;
use trivia_api::{MemoryTriviaStore, NewQuestion, QuizSelector, SelectionPolicy, TriviaService, TriviaStore};

/// (question, category). Identifiers are assigned 1..=12 in this order; category 4
/// (History) holds 5, 9, 10 and 12.
pub const SEED_QUESTIONS: &[(&str, i32)] = &[
    ("What is the heaviest organ in the human body?", 1),
    ("Who discovered penicillin?", 1),
    ("Which Dutch graphic artist created optical illusions?", 2),
    ("What is the largest lake in Africa?", 3),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", 4),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", 5),
    ("Which country won the first ever soccer World Cup in 1930?", 6),
    ("Hematology is a branch of medicine involving the study of what?", 1),
    ("Who invented Peanut Butter?", 4),
    ("Which dung beetle was worshipped by the ancient Egyptians?", 4),
    ("The Taj Mahal is located in which Indian city?", 3),
    ("What boxer's original name is Cassius Clay?", 4),
];

/// Number of seed questions containing "what", any case.
pub const WHAT_MATCHES: usize = 5;

pub async fn seeded_store() -> MemoryTriviaStore {
    let store = MemoryTriviaStore::new();
    for kind in STANDARD_CATEGORIES {
        store.insert_category(kind).await.unwrap();
    }
    for (text, category) in SEED_QUESTIONS {
        store
            .insert_question(&NewQuestion {
                question: text.to_string(),
                answer: "answer".to_string(),
                difficulty: 2,
                category: *category,
            })
            .await
            .unwrap();
    }
    store
}

/// Serves the full application on an ephemeral port and returns its base URL.
pub async fn spawn_app(store: MemoryTriviaStore, policy: SelectionPolicy) -> String {
    let service = TriviaService::new(Arc::new(store), QuizSelector::new(policy));
    let app_state = transport::http::AppState {
        service: Arc::new(service),
    };
    serve(transport::http::build_app(app_state)).await
}

pub async fn serve(router: axum::Router) -> String {
    // Bind to an ephemeral port to avoid conflicts with a running server.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

pub async fn spawn_seeded() -> String {
    spawn_app(seeded_store().await, SelectionPolicy::default()).await
}

pub fn assert_envelope(body: &serde_json::Value, code: u16, message: &str) {
    assert_eq!(body["success"], false, "body: {}", body);
    assert_eq!(body["error"], code, "body: {}", body);
    assert_eq!(body["message"], message, "body: {}", body);
}
