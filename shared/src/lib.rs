//! Local article/category store for the News Nexus demo: models, key-value
//! storage backends, the CRUD store and read-side queries.

pub mod error;
pub mod models;
pub mod news_store;
pub mod query;
pub mod seed;
pub mod storage;
pub mod text;

pub use error::{StorageError, StoreError, StoreResult};
pub use models::{
    Article, ArticlePatch, Category, CategoryPatch, NewArticleInput, NewCategoryInput,
    NewUserInput, StoredRecord, User, UserPatch, PLACEHOLDER_IMAGE_URL,
};
pub use news_store::{NewsStore, SeedReport, StoreConfig};
pub use query::{ArticlePage, ArticleQuery, DashboardStats, SortOrder};
#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStorage;
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
pub use storage::{KeyValueStorage, MemoryStorage};
