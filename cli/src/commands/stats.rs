use anyhow::Result;
use news_nexus_shared::query::{dashboard_stats, featured_article, recent_articles};

use crate::{
    store::CliStore,
    utils::{article_line, print_json},
};

const RECENT_LIMIT: usize = 5;

/// Dashboard totals, distribution, hero and recent articles.
pub fn run(store: &CliStore, json: bool) -> Result<()> {
    let categories = store.list_categories()?;
    let articles = store.list_articles()?;
    let stats = dashboard_stats(&categories, &articles);

    if json {
        return print_json(&stats);
    }

    tracing::info!(
        "{} articles ({} drafts, {} featured, {} breaking), {} categories, {} total views",
        stats.total_articles,
        stats.drafts,
        stats.featured,
        stats.breaking,
        stats.total_categories,
        stats.total_views
    );
    for share in &stats.distribution {
        tracing::info!("  {:<16} {:>4} {:>3}%", share.name, share.count, share.percentage);
    }
    if stats.orphaned_articles > 0 {
        tracing::warn!("{} articles reference a missing category", stats.orphaned_articles);
    }
    if let Some(article) = featured_article(&articles) {
        tracing::info!("featured: {}", article_line(article));
    }
    for article in recent_articles(&articles, RECENT_LIMIT) {
        tracing::info!("recent: {}", article_line(article));
    }
    Ok(())
}
