use anyhow::{bail, Result};
use news_nexus_shared::{text::category_icon, CategoryPatch, NewCategoryInput};

use crate::{
    cli::CategoryCommands,
    store::CliStore,
    utils::{category_line, print_json},
};

/// Runs one `categories` action.
pub fn run(store: &CliStore, command: CategoryCommands, json: bool) -> Result<()> {
    match command {
        CategoryCommands::List => {
            let categories = store.list_categories()?;
            if json {
                return print_json(&categories);
            }
            for category in &categories {
                tracing::info!("{}", category_line(category));
            }
            tracing::info!("{} categories", categories.len());
            Ok(())
        },
        CategoryCommands::Add {
            name,
            slug,
            description,
            icon,
            color,
            inactive,
        } => {
            let icon = icon.or_else(|| Some(category_icon(&name).to_string()));
            let category = store.create_category(NewCategoryInput {
                name,
                slug,
                description,
                icon,
                color,
                is_active: Some(!inactive),
            })?;
            if json {
                return print_json(&category);
            }
            tracing::info!("created {}", category_line(&category));
            Ok(())
        },
        CategoryCommands::Update {
            id,
            name,
            slug,
            description,
            icon,
            color,
            active,
        } => {
            let patch = CategoryPatch {
                name,
                slug,
                description,
                icon,
                color,
                is_active: active,
            };
            if patch.is_empty() {
                bail!("nothing to update for category {id}");
            }
            match store.update_category(&id, patch)? {
                Some(category) if json => print_json(&category),
                Some(category) => {
                    tracing::info!("updated {}", category_line(&category));
                    Ok(())
                },
                None => bail!("category not found: {id}"),
            }
        },
        CategoryCommands::Delete {
            id,
        } => {
            if !store.delete_category(&id)? {
                bail!("category not found: {id}");
            }
            let orphaned = store
                .list_articles()?
                .iter()
                .filter(|article| article.category_id == id)
                .count();
            if orphaned > 0 {
                tracing::warn!("{orphaned} articles still reference deleted category {id}");
            }
            tracing::info!("deleted category {id}");
            Ok(())
        },
    }
}
