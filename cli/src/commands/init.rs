use anyhow::{Context, Result};

use crate::{store::CliStore, utils::print_json};

/// Seeds missing collections and reports what was written.
pub fn run(store: &CliStore, json: bool) -> Result<()> {
    let report = store.initialize().context("failed to seed local store")?;

    if json {
        return print_json(&serde_json::json!({
            "categories": report.categories,
            "articles": report.articles,
            "users": report.users,
        }));
    }
    if report.is_noop() {
        tracing::info!("store already initialized at {}", store.storage().root().display());
    } else {
        tracing::info!("store initialized at {}", store.storage().root().display());
    }
    Ok(())
}

/// Removes all three collections.
pub fn reset(store: &CliStore) -> Result<()> {
    store.reset().context("failed to clear local store")?;
    tracing::info!("removed all collections from {}", store.storage().root().display());
    Ok(())
}
