//! Command-line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use news_nexus_shared::SortOrder;

/// Used when neither `--data-dir` nor `NEWS_NEXUS_DATA_DIR` is given.
pub const DEFAULT_DATA_DIR: &str = "./data/news-nexus";

/// `--sort` values.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    /// Newest first.
    Newest,
    /// Oldest first.
    Oldest,
    /// Most viewed first.
    Popular,
    /// By title, A to Z.
    Alphabetical,
    /// Stored order.
    Stored,
}

impl From<SortArg> for SortOrder {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Newest => SortOrder::Newest,
            SortArg::Oldest => SortOrder::Oldest,
            SortArg::Popular => SortOrder::MostViewed,
            SortArg::Alphabetical => SortOrder::Alphabetical,
            SortArg::Stored => SortOrder::AsStored,
        }
    }
}

/// Top-level arguments.
#[derive(Parser)]
#[command(name = "nn-cli", version, about = "News Nexus local store CLI")]
pub struct Cli {
    /// Directory holding one JSON file per stored collection.
    #[arg(long, global = true, env = "NEWS_NEXUS_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,
    /// Print records as pretty JSON on stdout instead of log lines.
    #[arg(long, global = true)]
    pub json: bool,
    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Seed any missing collection with sample data.
    Init,
    /// Remove all stored collections.
    Reset,
    /// Dashboard totals and category distribution.
    Stats,
    /// Manage categories.
    Categories {
        /// Category action.
        #[command(subcommand)]
        command: CategoryCommands,
    },
    /// Manage articles.
    Articles {
        /// Article action.
        #[command(subcommand)]
        command: ArticleCommands,
    },
}

/// `categories` actions.
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories in stored order.
    List,
    /// Create a category.
    Add {
        /// Display name.
        #[arg(long)]
        name: String,
        /// URL slug (derived from the name if omitted).
        #[arg(long)]
        slug: Option<String>,
        /// Short blurb.
        #[arg(long)]
        description: Option<String>,
        /// Icon name (defaults to a lookup on the category name).
        #[arg(long)]
        icon: Option<String>,
        /// Accent color name.
        #[arg(long)]
        color: Option<String>,
        /// Create the category hidden.
        #[arg(long)]
        inactive: bool,
    },
    /// Patch fields of an existing category.
    Update {
        /// Category id.
        id: String,
        /// New display name.
        #[arg(long)]
        name: Option<String>,
        /// New slug, stored as given.
        #[arg(long)]
        slug: Option<String>,
        /// New blurb.
        #[arg(long)]
        description: Option<String>,
        /// New icon name.
        #[arg(long)]
        icon: Option<String>,
        /// New accent color.
        #[arg(long)]
        color: Option<String>,
        /// Show (`true`) or hide (`false`) the category.
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete a category. Articles keep pointing at its id.
    Delete {
        /// Category id.
        id: String,
    },
}

/// `articles` actions.
#[derive(Subcommand)]
pub enum ArticleCommands {
    /// Filter, sort and page through articles.
    List {
        /// Category id or slug.
        #[arg(long)]
        category: Option<String>,
        /// Case-insensitive match on title, content or author.
        #[arg(long)]
        search: Option<String>,
        /// Result order.
        #[arg(long, value_enum, default_value_t = SortArg::Newest, ignore_case = true)]
        sort: SortArg,
        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Articles per page.
        #[arg(long, default_value_t = news_nexus_shared::query::DEFAULT_PAGE_SIZE)]
        page_size: usize,
        /// Include drafts.
        #[arg(long)]
        drafts: bool,
    },
    /// Show one article by slug or id and count the view.
    Show {
        /// Article slug, or id when no slug matches.
        slug_or_id: String,
        /// Read without bumping the view counter.
        #[arg(long)]
        no_view: bool,
    },
    /// Create an article.
    Add {
        /// Headline.
        #[arg(long)]
        title: String,
        /// Body text.
        #[arg(long, conflicts_with = "content_file")]
        content: Option<String>,
        /// Read the body from a file.
        #[arg(long)]
        content_file: Option<PathBuf>,
        /// Teaser shown on cards.
        #[arg(long, default_value = "")]
        summary: String,
        /// Category id or slug.
        #[arg(long)]
        category: String,
        /// URL slug (derived from the title if omitted).
        #[arg(long)]
        slug: Option<String>,
        /// Byline.
        #[arg(long)]
        author: Option<String>,
        /// Cover image URL.
        #[arg(long)]
        image_url: Option<String>,
        /// Candidate for the hero slot.
        #[arg(long)]
        featured: bool,
        /// Show in the breaking news ticker.
        #[arg(long)]
        breaking: bool,
        /// Keep it off the public site.
        #[arg(long)]
        draft: bool,
    },
    /// Patch fields of an existing article.
    Update {
        /// Article id.
        id: String,
        /// New headline.
        #[arg(long)]
        title: Option<String>,
        /// New slug, stored as given.
        #[arg(long)]
        slug: Option<String>,
        /// New body text.
        #[arg(long, conflicts_with = "content_file")]
        content: Option<String>,
        /// Read the new body from a file.
        #[arg(long)]
        content_file: Option<PathBuf>,
        /// New teaser.
        #[arg(long)]
        summary: Option<String>,
        /// Category id or slug.
        #[arg(long)]
        category: Option<String>,
        /// New byline.
        #[arg(long)]
        author: Option<String>,
        /// New cover image URL.
        #[arg(long)]
        image_url: Option<String>,
        /// Set the featured flag.
        #[arg(long)]
        featured: Option<bool>,
        /// Set the breaking flag.
        #[arg(long)]
        breaking: Option<bool>,
        /// Set the draft flag.
        #[arg(long)]
        draft: Option<bool>,
    },
    /// Delete one or more articles by id.
    Delete {
        /// Article ids; unknown ones are skipped.
        #[arg(required = true)]
        ids: Vec<String>,
    },
}
