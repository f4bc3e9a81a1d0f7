use anyhow::Context;
use trivia_api::domain::model::STANDARD_CATEGORIES;
use trivia_api::infra::config;
use trivia_api::{PostgresTriviaStore, TriviaStore};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--seed-categories]\n\
         \n\
         Requires env vars:\n\
           DATABASE_URL\n\
         Optional:\n\
           DB_MAX_CONNECTIONS, BIND_ADDRESS, QUIZ_SELECTION, QUIZ_RETRY_BUDGET\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let seed_categories = args.iter().any(|a| a == "--seed-categories");

    // Force-read config (nice error messages if missing)
    let database_url = config::database_url()?;
    let max_connections = config::db_max_connections()?;
    let bind = config::bind_address()?;
    let policy = config::selection_policy()?;

    println!("> Preflight:");
    println!("  BIND_ADDRESS={}", bind);
    println!("  DB_MAX_CONNECTIONS={}", max_connections);
    println!("  Quiz selection policy: {:?}", policy);

    // Connecting also creates any missing tables.
    let store = PostgresTriviaStore::connect(&database_url, max_connections)
        .await
        .context("Failed to connect to DATABASE_URL")?;
    store.ping().await.context("Database ping failed")?;
    println!("  Database reachable; tables ensured.");

    let mut categories = store.list_categories().await?;
    let questions = store.list_questions().await?;
    println!("  Categories: {}", categories.len());
    println!("  Questions: {}", questions.len());

    if categories.is_empty() {
        if seed_categories {
            println!("  Categories table empty -> seeding standard categories...");
            for kind in STANDARD_CATEGORIES {
                let c = store.insert_category(kind).await?;
                println!("    {} = {}", c.id, c.kind);
            }
            categories = store.list_categories().await?;
        } else {
            return Err(anyhow::anyhow!(
                "No categories stored: GET /categories and GET /questions will return 404. \
Re-run with --seed-categories"
            ));
        }
    }

    let dangling = questions
        .iter()
        .filter(|q| !categories.iter().any(|c| c.id == q.category))
        .count();
    if dangling > 0 {
        eprintln!(
            "  Warning: {} question(s) reference a category that does not exist.",
            dangling
        );
    }

    println!("> Preflight OK.");
    Ok(())
}
