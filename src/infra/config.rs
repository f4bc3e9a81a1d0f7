//! Centralized configuration (environment variables + defaults).

use crate::domain::quiz::SelectionPolicy;
use anyhow::{anyhow, Context};
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_LOG_FILTER: &str = "trivia_api=info,tower_http=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL at `DATABASE_URL`.
    Postgres { database_url: String, max_connections: u32 },
    /// Process-local tables; contents are lost on exit.
    Memory,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub store: StoreBackend,
    pub selection_policy: SelectionPolicy,
}

impl ServerConfig {
    /// Reads the whole configuration, failing on the first malformed value.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            bind_address: bind_address()?,
            store: store_backend()?,
            selection_policy: selection_policy()?,
        })
    }
}

fn var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Database URL must be provided (no default) for safety.
pub fn database_url() -> anyhow::Result<String> {
    var("DATABASE_URL").ok_or_else(|| anyhow!("DATABASE_URL must be set"))
}

pub fn bind_address() -> anyhow::Result<SocketAddr> {
    let raw = var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
    raw.parse::<SocketAddr>()
        .with_context(|| format!("BIND_ADDRESS must be a socket address, got {:?}", raw))
}

pub fn db_max_connections() -> anyhow::Result<u32> {
    match var("DB_MAX_CONNECTIONS") {
        None => Ok(DEFAULT_MAX_CONNECTIONS),
        Some(v) => v
            .parse::<u32>()
            .map(|n| n.max(1))
            .with_context(|| format!("DB_MAX_CONNECTIONS must be a valid u32, got {:?}", v)),
    }
}

/// `TRIVIA_STORE=postgres` (default) or `memory`.
pub fn store_backend() -> anyhow::Result<StoreBackend> {
    let kind = var("TRIVIA_STORE").unwrap_or_else(|| "postgres".to_string());
    match kind.trim().to_lowercase().as_str() {
        "memory" => Ok(StoreBackend::Memory),
        "postgres" => Ok(StoreBackend::Postgres {
            database_url: database_url()?,
            max_connections: db_max_connections()?,
        }),
        other => Err(anyhow!(
            "TRIVIA_STORE must be `postgres` or `memory`, got {:?}",
            other
        )),
    }
}

pub fn selection_policy() -> anyhow::Result<SelectionPolicy> {
    parse_selection_policy(
        var("QUIZ_SELECTION").as_deref(),
        var("QUIZ_RETRY_BUDGET").as_deref(),
    )
}

/// `QUIZ_SELECTION=retry` (default, with `QUIZ_RETRY_BUDGET`, default 1) or `exclude`.
pub fn parse_selection_policy(
    mode: Option<&str>,
    budget: Option<&str>,
) -> anyhow::Result<SelectionPolicy> {
    match mode.map(|m| m.trim().to_lowercase()).as_deref() {
        None | Some("retry") => {
            let budget = match budget {
                None => 1,
                Some(b) => b.trim().parse::<u32>().with_context(|| {
                    format!("QUIZ_RETRY_BUDGET must be a valid u32, got {:?}", b)
                })?,
            };
            Ok(SelectionPolicy::Retry { budget })
        }
        Some("exclude") => Ok(SelectionPolicy::Exclude),
        Some(other) => Err(anyhow!(
            "QUIZ_SELECTION must be `retry` or `exclude`, got {:?}",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_defaults_to_single_retry() {
        assert_eq!(
            parse_selection_policy(None, None).unwrap(),
            SelectionPolicy::Retry { budget: 1 }
        );
    }

    #[test]
    fn selection_reads_budget_and_mode() {
        assert_eq!(
            parse_selection_policy(Some("Retry"), Some("5")).unwrap(),
            SelectionPolicy::Retry { budget: 5 }
        );
        assert_eq!(
            parse_selection_policy(Some("exclude"), Some("5")).unwrap(),
            SelectionPolicy::Exclude
        );
    }

    #[test]
    fn selection_rejects_garbage() {
        assert!(parse_selection_policy(Some("sometimes"), None).is_err());
        assert!(parse_selection_policy(None, Some("-1")).is_err());
    }
}
