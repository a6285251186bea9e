use std::path::Path;

use anyhow::{Context, Result};
use news_nexus_shared::{FileStorage, NewsStore, StoreConfig};

/// Store over JSON files in the data directory.
pub type CliStore = NewsStore<FileStorage>;

/// Creates `data_dir` if needed. The key prefix comes from
/// `NEWS_NEXUS_KEY_PREFIX`.
pub fn open_store(data_dir: &Path) -> Result<CliStore> {
    let storage = FileStorage::open(data_dir)
        .with_context(|| format!("failed to open data dir {}", data_dir.display()))?;
    Ok(NewsStore::with_config(storage, StoreConfig::from_env()))
}

/// Accepts either a category id or its slug. Unknown values pass through
/// unchanged with a warning, since articles may reference any id.
pub fn resolve_category_ref(store: &CliStore, value: &str) -> Result<String> {
    let categories = store.list_categories()?;
    if categories.iter().any(|category| category.id == value) {
        return Ok(value.to_string());
    }
    if let Some(category) = categories.iter().find(|category| category.slug == value) {
        return Ok(category.id.clone());
    }
    tracing::warn!("category `{value}` does not exist; storing the reference as given");
    Ok(value.to_string())
}
