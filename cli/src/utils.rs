use std::{fs, path::Path};

use anyhow::{Context, Result};
use chrono::Utc;
use news_nexus_shared::{text, Article, Category};
use serde::Serialize;

const SUMMARY_PREVIEW_CHARS: usize = 80;

/// Pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Contents of `content_file` when given, otherwise the inline `content`.
pub fn read_content(content: Option<String>, content_file: Option<&Path>) -> Result<Option<String>> {
    match content_file {
        Some(path) => fs::read_to_string(path)
            .map(Some)
            .with_context(|| format!("failed to read {}", path.display())),
        None => Ok(content),
    }
}

/// One-line article summary for log output.
pub fn article_line(article: &Article) -> String {
    let mut flags = Vec::new();
    if article.is_draft {
        flags.push("draft");
    }
    if article.is_featured {
        flags.push("featured");
    }
    if article.is_breaking_news {
        flags.push("breaking");
    }
    let flags = if flags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", flags.join(","))
    };
    format!(
        "{} | {}{} | {} views | {} | {}",
        article.id,
        article.title,
        flags,
        article.view_count,
        text::time_ago(article.created_at, Utc::now()),
        text::truncate_text(&article.summary, SUMMARY_PREVIEW_CHARS)
    )
}

/// One-line category summary for log output.
pub fn category_line(category: &Category) -> String {
    format!(
        "{} | {} ({}){}",
        category.id,
        category.name,
        category.slug,
        if category.is_active { "" } else { " [inactive]" }
    )
}
