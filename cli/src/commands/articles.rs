use anyhow::{bail, Result};
use news_nexus_shared::{
    query::{related_articles, ArticleQuery},
    ArticlePatch, NewArticleInput,
};

use crate::{
    cli::ArticleCommands,
    store::{resolve_category_ref, CliStore},
    utils::{article_line, print_json, read_content},
};

const RELATED_LIMIT: usize = 3;

/// Runs one `articles` action.
pub fn run(store: &CliStore, command: ArticleCommands, json: bool) -> Result<()> {
    match command {
        ArticleCommands::List {
            category,
            search,
            sort,
            page,
            page_size,
            drafts,
        } => {
            let category_id = category
                .map(|value| resolve_category_ref(store, &value))
                .transpose()?;
            let result = ArticleQuery {
                category_id,
                search,
                sort: sort.into(),
                include_drafts: drafts,
                page,
                page_size,
            }
            .run(&store.list_articles()?);

            if json {
                return print_json(&result);
            }
            for article in &result.items {
                tracing::info!("{}", article_line(article));
            }
            tracing::info!(
                "page {} ({} per page), {} matching{}",
                result.page,
                result.page_size,
                result.total,
                if result.has_more { ", more available" } else { "" }
            );
            Ok(())
        },
        ArticleCommands::Show {
            slug_or_id,
            no_view,
        } => {
            let article = if no_view {
                match store.find_article_by_slug(&slug_or_id)? {
                    Some(article) => Some(article),
                    None => store.find_article(&slug_or_id)?,
                }
            } else {
                store.record_view(&slug_or_id)?
            };
            let Some(article) = article else {
                bail!("article not found: {slug_or_id}");
            };
            if json {
                return print_json(&article);
            }

            let category = store.find_category(&article.category_id)?;
            tracing::info!("{}", article_line(&article));
            tracing::info!(
                "category: {} | author: {} | image: {}",
                category.map(|c| c.name).unwrap_or_else(|| "(none)".to_string()),
                article.author.as_deref().unwrap_or("(unknown)"),
                article.display_image_url()
            );
            tracing::info!("\n{}", article.content);

            let articles = store.list_articles()?;
            for related in related_articles(&articles, &article, RELATED_LIMIT) {
                tracing::info!("related: {}", article_line(related));
            }
            Ok(())
        },
        ArticleCommands::Add {
            title,
            content,
            content_file,
            summary,
            category,
            slug,
            author,
            image_url,
            featured,
            breaking,
            draft,
        } => {
            let content = read_content(content, content_file.as_deref())?.unwrap_or_default();
            let category_id = resolve_category_ref(store, &category)?;
            let article = store.create_article(NewArticleInput {
                title,
                slug,
                content,
                summary,
                category_id,
                author,
                image_url,
                is_featured: featured,
                is_breaking_news: breaking,
                is_draft: draft,
                view_count: 0,
            })?;
            if json {
                return print_json(&article);
            }
            tracing::info!("created {}", article_line(&article));
            Ok(())
        },
        ArticleCommands::Update {
            id,
            title,
            slug,
            content,
            content_file,
            summary,
            category,
            author,
            image_url,
            featured,
            breaking,
            draft,
        } => {
            let content = read_content(content, content_file.as_deref())?;
            let category_id = category
                .map(|value| resolve_category_ref(store, &value))
                .transpose()?;
            let patch = ArticlePatch {
                title,
                slug,
                content,
                summary,
                category_id,
                author,
                image_url,
                is_featured: featured,
                is_breaking_news: breaking,
                is_draft: draft,
                view_count: None,
            };
            if patch.is_empty() {
                bail!("nothing to update for article {id}");
            }
            match store.update_article(&id, patch)? {
                Some(article) if json => print_json(&article),
                Some(article) => {
                    tracing::info!("updated {}", article_line(&article));
                    Ok(())
                },
                None => bail!("article not found: {id}"),
            }
        },
        ArticleCommands::Delete {
            ids,
        } => {
            let removed = store.delete_articles(&ids)?;
            if removed < ids.len() {
                tracing::warn!("{} of {} ids did not match an article", ids.len() - removed, ids.len());
            }
            tracing::info!("deleted {removed} articles");
            Ok(())
        },
    }
}
