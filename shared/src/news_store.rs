//! Category/article/user collections persisted as JSON arrays in a
//! [`KeyValueStorage`].
//!
//! Every operation reads the whole collection, transforms it in memory and
//! writes the whole collection back. Lookups are linear scans by id. There is
//! no lock across a read-modify-write: two interleaved callers on the same
//! key can lose an update.
//!
//! Reads skip records that fail to decode. Writes first require the whole
//! stored collection to decode, so a rewrite never drops data silently.

use std::{collections::HashSet, env};

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    error::{StoreError, StoreResult},
    models::{
        Article, ArticlePatch, Category, CategoryPatch, NewArticleInput, NewCategoryInput,
        NewUserInput, StoredRecord, User, UserPatch,
    },
    seed,
    storage::KeyValueStorage,
};

/// Prefix of the three collection keys, as the browser app uses it.
pub const DEFAULT_KEY_PREFIX: &str = "newsNexus_";
/// Environment variable read by [`StoreConfig::from_env`].
pub const KEY_PREFIX_ENV: &str = "NEWS_NEXUS_KEY_PREFIX";

const CATEGORIES_SUFFIX: &str = "categories";
const ARTICLES_SUFFIX: &str = "articles";
const USERS_SUFFIX: &str = "users";

/// Where a [`NewsStore`] keeps its collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Prepended to `categories`, `articles` and `users`.
    pub key_prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }
}

impl StoreConfig {
    /// Defaults, with the key prefix overridable through
    /// `NEWS_NEXUS_KEY_PREFIX`.
    pub fn from_env() -> Self {
        let key_prefix = env::var(KEY_PREFIX_ENV)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_KEY_PREFIX.to_string());
        Self {
            key_prefix,
        }
    }
}

/// Which collections a call to [`NewsStore::initialize`] wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Categories written, 0 if the key was already present.
    pub categories: usize,
    /// Articles written.
    pub articles: usize,
    /// Users written.
    pub users: usize,
}

impl SeedReport {
    /// True when nothing was seeded.
    pub fn is_noop(&self) -> bool {
        self == &Self::default()
    }
}

/// CRUD over the category, article and user collections of one storage.
pub struct NewsStore<S> {
    storage: S,
    categories_key: String,
    articles_key: String,
    users_key: String,
}

impl<S: KeyValueStorage> NewsStore<S> {
    /// Store with the default key prefix.
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, StoreConfig::default())
    }

    /// Store with explicit configuration.
    pub fn with_config(storage: S, config: StoreConfig) -> Self {
        Self {
            storage,
            categories_key: format!("{}{CATEGORIES_SUFFIX}", config.key_prefix),
            articles_key: format!("{}{ARTICLES_SUFFIX}", config.key_prefix),
            users_key: format!("{}{USERS_SUFFIX}", config.key_prefix),
        }
    }

    /// Backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Key of the category collection.
    pub fn categories_key(&self) -> &str {
        &self.categories_key
    }

    /// Key of the article collection.
    pub fn articles_key(&self) -> &str {
        &self.articles_key
    }

    /// Key of the user collection.
    pub fn users_key(&self) -> &str {
        &self.users_key
    }

    /// Seeds each collection whose key is absent or holds an empty string.
    /// Safe to call on every start; once all keys exist it reads three keys
    /// and writes nothing.
    pub fn initialize(&self) -> StoreResult<SeedReport> {
        let mut report = SeedReport::default();
        let now = Utc::now();

        if self.stored_value(&self.categories_key)?.is_none() {
            let categories = seed::default_categories(new_id, now);
            self.write_collection(&self.categories_key, &categories)?;
            report.categories = categories.len();
        }
        if self.stored_value(&self.articles_key)?.is_none() {
            let categories = self.list_categories()?;
            let articles = seed::default_articles(&categories, new_id, now);
            self.write_collection(&self.articles_key, &articles)?;
            report.articles = articles.len();
        }
        if self.stored_value(&self.users_key)?.is_none() {
            let users = seed::default_users(new_id);
            self.write_collection(&self.users_key, &users)?;
            report.users = users.len();
        }

        if !report.is_noop() {
            tracing::info!(
                "seeded local store: {} categories, {} articles, {} users",
                report.categories,
                report.articles,
                report.users
            );
        }
        Ok(report)
    }

    /// Drops all three collections; the next [`Self::initialize`] reseeds.
    pub fn reset(&self) -> StoreResult<()> {
        self.storage.remove_item(&self.categories_key)?;
        self.storage.remove_item(&self.articles_key)?;
        self.storage.remove_item(&self.users_key)?;
        tracing::info!("cleared local store");
        Ok(())
    }

    // =============== Categories ===============

    /// All categories in stored order; empty if never seeded.
    pub fn list_categories(&self) -> StoreResult<Vec<Category>> {
        self.read_collection(&self.categories_key)
    }

    /// Category with `id`.
    pub fn find_category(&self, id: &str) -> StoreResult<Option<Category>> {
        Ok(self
            .list_categories()?
            .into_iter()
            .find(|category| category.id == id))
    }

    /// First category with `slug`.
    pub fn find_category_by_slug(&self, slug: &str) -> StoreResult<Option<Category>> {
        Ok(self
            .list_categories()?
            .into_iter()
            .find(|category| category.slug == slug))
    }

    /// Appends a new category with a fresh id and `createdAt = now`.
    pub fn create_category(&self, input: NewCategoryInput) -> StoreResult<Category> {
        let mut categories: Vec<Category> = self.load_for_write(&self.categories_key)?;
        let category = input.into_category(new_id(), Utc::now());
        categories.push(category.clone());
        self.write_collection(&self.categories_key, &categories)?;
        Ok(category)
    }

    /// Shallow merge onto the category with `id` and stamps `updatedAt`.
    /// Returns `None` without writing when no such category exists.
    pub fn update_category(&self, id: &str, patch: CategoryPatch) -> StoreResult<Option<Category>> {
        let mut categories: Vec<Category> = self.load_for_write(&self.categories_key)?;
        let Some(category) = categories.iter_mut().find(|category| category.id == id) else {
            tracing::debug!("update_category: `{id}` not found");
            return Ok(None);
        };
        patch.apply_to(category);
        category.updated_at = Some(Utc::now());
        let updated = category.clone();
        self.write_collection(&self.categories_key, &categories)?;
        Ok(Some(updated))
    }

    /// Returns whether a category was removed. Articles referencing it keep
    /// their `categoryId`.
    pub fn delete_category(&self, id: &str) -> StoreResult<bool> {
        let categories: Vec<Category> = self.load_for_write(&self.categories_key)?;
        let before = categories.len();
        let remaining: Vec<Category> =
            categories.into_iter().filter(|category| category.id != id).collect();
        if remaining.len() == before {
            return Ok(false);
        }
        self.write_collection(&self.categories_key, &remaining)?;
        Ok(true)
    }

    // =============== Articles ===============

    /// All articles in stored order, drafts included.
    pub fn list_articles(&self) -> StoreResult<Vec<Article>> {
        self.read_collection(&self.articles_key)
    }

    /// Article with `id`.
    pub fn find_article(&self, id: &str) -> StoreResult<Option<Article>> {
        Ok(self
            .list_articles()?
            .into_iter()
            .find(|article| article.id == id))
    }

    /// First article with `slug`.
    pub fn find_article_by_slug(&self, slug: &str) -> StoreResult<Option<Article>> {
        Ok(self
            .list_articles()?
            .into_iter()
            .find(|article| article.slug == slug))
    }

    /// Appends a new article with a fresh id and `createdAt = now`.
    /// `categoryId` is stored as given.
    pub fn create_article(&self, input: NewArticleInput) -> StoreResult<Article> {
        let mut articles: Vec<Article> = self.load_for_write(&self.articles_key)?;
        let article = input.into_article(new_id(), Utc::now());
        articles.push(article.clone());
        self.write_collection(&self.articles_key, &articles)?;
        Ok(article)
    }

    /// Shallow merge onto the article with `id`. Returns `None` without
    /// writing when no such article exists.
    pub fn update_article(&self, id: &str, patch: ArticlePatch) -> StoreResult<Option<Article>> {
        let mut articles: Vec<Article> = self.load_for_write(&self.articles_key)?;
        let Some(article) = articles.iter_mut().find(|article| article.id == id) else {
            tracing::debug!("update_article: `{id}` not found");
            return Ok(None);
        };
        patch.apply_to(article);
        let updated = article.clone();
        self.write_collection(&self.articles_key, &articles)?;
        Ok(Some(updated))
    }

    /// Detail-page view: matches `slug_or_id` against slugs first, then ids,
    /// and bumps `viewCount`.
    pub fn record_view(&self, slug_or_id: &str) -> StoreResult<Option<Article>> {
        let mut articles: Vec<Article> = self.load_for_write(&self.articles_key)?;
        let position = articles
            .iter()
            .position(|article| article.slug == slug_or_id)
            .or_else(|| articles.iter().position(|article| article.id == slug_or_id));
        let Some(position) = position else {
            return Ok(None);
        };
        let article = &mut articles[position];
        article.view_count = article.view_count.saturating_add(1);
        let viewed = article.clone();
        self.write_collection(&self.articles_key, &articles)?;
        Ok(Some(viewed))
    }

    /// Returns whether an article was removed.
    pub fn delete_article(&self, id: &str) -> StoreResult<bool> {
        Ok(self.delete_articles(&[id])? == 1)
    }

    /// Removes every article whose id is in `ids` with one write. Returns the
    /// number removed.
    pub fn delete_articles<I: AsRef<str>>(&self, ids: &[I]) -> StoreResult<usize> {
        let ids: HashSet<&str> = ids.iter().map(|id| id.as_ref()).collect();
        let articles: Vec<Article> = self.load_for_write(&self.articles_key)?;
        let before = articles.len();
        let remaining: Vec<Article> = articles
            .into_iter()
            .filter(|article| !ids.contains(article.id.as_str()))
            .collect();
        let removed = before - remaining.len();
        if removed > 0 {
            self.write_collection(&self.articles_key, &remaining)?;
        }
        Ok(removed)
    }

    // =============== Users ===============

    /// All users in stored order.
    pub fn list_users(&self) -> StoreResult<Vec<User>> {
        self.read_collection(&self.users_key)
    }

    /// Appends a user with a fresh id.
    pub fn create_user(&self, input: NewUserInput) -> StoreResult<User> {
        let mut users: Vec<User> = self.load_for_write(&self.users_key)?;
        let user = input.into_user(new_id());
        users.push(user.clone());
        self.write_collection(&self.users_key, &users)?;
        Ok(user)
    }

    /// Shallow merge onto the user with `id`; `None` when absent.
    pub fn update_user(&self, id: &str, patch: UserPatch) -> StoreResult<Option<User>> {
        let mut users: Vec<User> = self.load_for_write(&self.users_key)?;
        let Some(user) = users.iter_mut().find(|user| user.id == id) else {
            return Ok(None);
        };
        patch.apply_to(user);
        let updated = user.clone();
        self.write_collection(&self.users_key, &users)?;
        Ok(Some(updated))
    }

    /// Returns whether a user was removed.
    pub fn delete_user(&self, id: &str) -> StoreResult<bool> {
        let users: Vec<User> = self.load_for_write(&self.users_key)?;
        let before = users.len();
        let remaining: Vec<User> = users.into_iter().filter(|user| user.id != id).collect();
        if remaining.len() == before {
            return Ok(false);
        }
        self.write_collection(&self.users_key, &remaining)?;
        Ok(true)
    }

    // =============== Serialization ===============

    /// Stored value, with an empty string read as absent.
    fn stored_value(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.storage.get_item(key)?.filter(|raw| !raw.is_empty()))
    }

    /// Missing key reads as an empty collection; undecodable data is skipped
    /// with a warning.
    fn read_collection<T: StoredRecord>(&self, key: &str) -> StoreResult<Vec<T>> {
        let (items, problem) = self.decode_collection(key)?;
        if let Some(problem) = problem {
            tracing::warn!("ignoring unreadable data under `{key}`: {problem}");
        }
        Ok(items)
    }

    /// Collection about to be rewritten. Fails rather than return a partial
    /// view whose write-back would drop records.
    fn load_for_write<T: StoredRecord>(&self, key: &str) -> StoreResult<Vec<T>> {
        match self.decode_collection(key)? {
            (items, None) => Ok(items),
            (_, Some(detail)) => Err(StoreError::Corrupt {
                key: key.to_string(),
                detail,
            }),
        }
    }

    /// Decodes element by element. The second value describes whatever could
    /// not be decoded.
    fn decode_collection<T: StoredRecord>(&self, key: &str) -> StoreResult<(Vec<T>, Option<String>)> {
        let Some(raw) = self.stored_value(key)? else {
            return Ok((Vec::new(), None));
        };
        let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(err) => return Ok((Vec::new(), Some(format!("not a JSON array: {err}")))),
        };

        let total = values.len();
        let mut items = Vec::with_capacity(total);
        let mut first_error = None;
        for value in values {
            match serde_json::from_value::<T>(value) {
                Ok(mut item) => {
                    item.normalize();
                    items.push(item);
                },
                Err(err) => {
                    first_error.get_or_insert(err);
                },
            }
        }
        let problem = first_error.map(|err| {
            format!("{} of {total} records undecodable, first: {err}", total - items.len())
        });
        Ok((items, problem))
    }

    fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> StoreResult<()> {
        let raw = serde_json::to_string(items).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.storage.set_item(key, &raw)?;
        tracing::debug!("persisted {} records under `{key}`", items.len());
        Ok(())
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{Duration, Utc};

    use super::*;
    use crate::storage::MemoryStorage;

    fn seeded() -> NewsStore<MemoryStorage> {
        let store = NewsStore::new(MemoryStorage::new());
        store.initialize().expect("initialize");
        store
    }

    fn snapshot(store: &NewsStore<MemoryStorage>) -> Vec<Option<String>> {
        [store.categories_key(), store.articles_key(), store.users_key()]
            .iter()
            .map(|key| store.storage().get_item(key).expect("read key"))
            .collect()
    }

    #[test]
    fn uninitialized_store_lists_nothing() {
        let store = NewsStore::new(MemoryStorage::new());
        assert!(store.list_categories().unwrap().is_empty());
        assert!(store.list_articles().unwrap().is_empty());
        assert!(store.list_users().unwrap().is_empty());
        assert!(store.storage().is_empty());
    }

    #[test]
    fn initialize_seeds_linked_sample_data() {
        let store = NewsStore::new(MemoryStorage::new());
        let report = store.initialize().unwrap();
        assert_eq!(
            report,
            SeedReport {
                categories: 5,
                articles: 10,
                users: 3,
            }
        );

        let categories = store.list_categories().unwrap();
        let articles = store.list_articles().unwrap();
        let category_ids: HashSet<&str> = categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(categories.len(), 5);
        assert_eq!(articles.len(), 10);
        assert!(articles
            .iter()
            .all(|article| category_ids.contains(article.category_id.as_str())));
    }

    #[test]
    fn initialize_is_idempotent() {
        let store = seeded();
        let first = snapshot(&store);
        let report = store.initialize().unwrap();
        assert!(report.is_noop());
        assert_eq!(snapshot(&store), first);
    }

    #[test]
    fn initialize_only_fills_missing_keys() {
        let store = seeded();
        let categories = store.list_categories().unwrap();
        store.storage().remove_item(store.articles_key()).unwrap();

        let report = store.initialize().unwrap();
        assert_eq!(report.categories, 0);
        assert_eq!(report.articles, 10);
        assert_eq!(store.list_categories().unwrap(), categories);
        assert_eq!(
            store.list_articles().unwrap()[0].category_id,
            categories[0].id
        );

        store.storage().set_item(store.users_key(), "").unwrap();
        let report = store.initialize().unwrap();
        assert_eq!(report.users, 3);
        assert_eq!(report.articles, 0);
        assert_eq!(store.list_users().unwrap().len(), 3);
    }

    #[test]
    fn corrupt_collection_reads_as_empty() {
        let store = NewsStore::new(MemoryStorage::new());
        store
            .storage()
            .set_item(store.articles_key(), "{not json")
            .unwrap();
        assert!(store.list_articles().unwrap().is_empty());

        // still counts as present, so seeding leaves it alone
        assert_eq!(store.initialize().unwrap().articles, 0);

        let err = store
            .create_article(NewArticleInput {
                title: "New".to_string(),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
        assert_eq!(
            store.storage().get_item(store.articles_key()).unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn browser_shaped_records_survive_a_create() {
        let store = NewsStore::new(MemoryStorage::new());
        let stored = r#"[
            {"id":"c1","name":"Technology","description":"Tech news","slug":"technology",
             "isActive":null,"createdAt":"2024-05-01T10:00:00.000Z"},
            {"id":"c2","name":"Politics","description":null,"slug":"politics",
             "isActive":true,"createdAt":"2024-05-01T10:00:00.000Z"}
        ]"#;
        store.storage().set_item(store.categories_key(), stored).unwrap();

        let listed = store.list_categories().unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|category| category.is_active));

        store
            .create_category(NewCategoryInput {
                name: "Health".to_string(),
                ..Default::default()
            })
            .unwrap();
        let names: Vec<String> = store
            .list_categories()
            .unwrap()
            .into_iter()
            .map(|category| category.name)
            .collect();
        assert_eq!(names, ["Technology", "Politics", "Health"]);
    }

    #[test]
    fn undecodable_record_blocks_writes_but_not_reads() {
        let store = NewsStore::new(MemoryStorage::new());
        let stored = r#"[
            {"id":"c1","name":"Technology","slug":"technology"},
            {"id":42,"name":"Broken"},
            {"id":"c3","name":"Sports"}
        ]"#;
        store.storage().set_item(store.categories_key(), stored).unwrap();

        let listed = store.list_categories().unwrap();
        let ids: Vec<&str> = listed.iter().map(|category| category.id.as_str()).collect();
        assert_eq!(ids, ["c1", "c3"]);
        assert_eq!(listed[1].slug, "sports");

        let err = store
            .create_category(NewCategoryInput {
                name: "Health".to_string(),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { ref key, .. } if key == "newsNexus_categories"));
        assert!(store.delete_category("c1").is_err());
        assert_eq!(
            store.storage().get_item(store.categories_key()).unwrap().as_deref(),
            Some(stored)
        );
    }

    #[test]
    fn created_article_round_trips() {
        let store = seeded();
        let before = Utc::now();
        let input = NewArticleInput {
            title: "Test".to_string(),
            category_id: "technology".to_string(),
            content: "x".to_string(),
            ..Default::default()
        };
        let created = store.create_article(input.clone()).unwrap();

        assert!(!created.id.is_empty());
        assert!(created.created_at >= before - Duration::seconds(1));
        assert!(created.created_at <= Utc::now());
        assert_eq!(created, input.into_article(created.id.clone(), created.created_at));

        let matches: Vec<Article> = store
            .list_articles()
            .unwrap()
            .into_iter()
            .filter(|article| article.id == created.id)
            .collect();
        assert_eq!(matches, vec![created.clone()]);
        assert_eq!(store.list_articles().unwrap().last(), Some(&created));
    }

    #[test]
    fn created_ids_are_distinct() {
        let store = NewsStore::new(MemoryStorage::new());
        let ids: HashSet<String> = (0..50)
            .map(|n| {
                store
                    .create_article(NewArticleInput {
                        title: format!("Same title {}", n % 2),
                        ..Default::default()
                    })
                    .unwrap()
                    .id
            })
            .collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn update_merges_patch_and_keeps_other_fields() {
        let store = seeded();
        let original = store.list_articles().unwrap()[3].clone();

        let updated = store
            .update_article(
                &original.id,
                ArticlePatch {
                    is_draft: Some(true),
                    ..Default::default()
                },
            )
            .unwrap()
            .expect("article exists");

        assert!(updated.is_draft);
        let stored = store.find_article(&original.id).unwrap().expect("still stored");
        assert_eq!(stored, updated);
        assert_eq!(
            stored,
            Article {
                is_draft: true,
                ..original
            }
        );
    }

    #[test]
    fn update_of_unknown_id_writes_nothing() {
        let store = seeded();
        let before = snapshot(&store);
        let result = store
            .update_article(
                "missing",
                ArticlePatch {
                    title: Some("nope".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(result.is_none());
        assert_eq!(snapshot(&store), before);
    }

    #[test]
    fn delete_removes_exactly_one() {
        let store = seeded();
        let articles = store.list_articles().unwrap();
        let target = &articles[4].id;

        assert!(store.delete_article(target).unwrap());
        let after = store.list_articles().unwrap();
        assert_eq!(after.len(), articles.len() - 1);
        assert!(after.iter().all(|article| &article.id != target));

        assert!(!store.delete_article(target).unwrap());
        assert_eq!(store.list_articles().unwrap().len(), articles.len() - 1);
    }

    #[test]
    fn bulk_delete_ignores_unknown_ids() {
        let store = seeded();
        let articles = store.list_articles().unwrap();
        let ids = vec![articles[0].id.clone(), "ghost".to_string(), articles[1].id.clone()];

        assert_eq!(store.delete_articles(&ids).unwrap(), 2);
        assert_eq!(store.list_articles().unwrap().len(), articles.len() - 2);
    }

    #[test]
    fn record_view_matches_slug_then_id() {
        let store = seeded();
        let article = store.list_articles().unwrap()[0].clone();

        let by_slug = store.record_view(&article.slug).unwrap().expect("by slug");
        assert_eq!(by_slug.view_count, article.view_count + 1);
        let by_id = store.record_view(&article.id).unwrap().expect("by id");
        assert_eq!(by_id.view_count, article.view_count + 2);
        assert!(store.record_view("no-such-article").unwrap().is_none());
    }

    #[test]
    fn category_crud_follows_article_contracts() {
        let store = seeded();
        let created = store
            .create_category(NewCategoryInput {
                name: "Science & Space".to_string(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(created.slug, "science-space");
        assert!(created.is_active);

        let updated = store
            .update_category(
                &created.id,
                CategoryPatch {
                    color: Some("teal".to_string()),
                    ..Default::default()
                },
            )
            .unwrap()
            .expect("category exists");
        assert_eq!(updated.color.as_deref(), Some("teal"));
        assert_eq!(updated.name, created.name);
        assert!(updated.updated_at.is_some());
        assert_eq!(store.find_category_by_slug("science-space").unwrap(), Some(updated));

        assert!(store.update_category("ghost", CategoryPatch::default()).unwrap().is_none());
        assert!(store.delete_category(&created.id).unwrap());
        assert!(!store.delete_category(&created.id).unwrap());
        assert_eq!(store.list_categories().unwrap().len(), 5);
    }

    #[test]
    fn deleting_category_leaves_articles_untouched() {
        let store = seeded();
        let category = store.list_categories().unwrap()[0].clone();
        let articles = store.list_articles().unwrap();

        assert!(store.delete_category(&category.id).unwrap());
        assert_eq!(store.list_articles().unwrap(), articles);
        assert!(articles.iter().any(|article| article.category_id == category.id));
    }

    #[test]
    fn user_crud() {
        let store = seeded();
        let user = store
            .create_user(NewUserInput {
                username: "editor".to_string(),
                email: "editor@example.com".to_string(),
            })
            .unwrap();
        assert_eq!(store.list_users().unwrap().len(), 4);

        let renamed = store
            .update_user(
                &user.id,
                UserPatch {
                    username: Some("chief".to_string()),
                    ..Default::default()
                },
            )
            .unwrap()
            .expect("user exists");
        assert_eq!(renamed.email, "editor@example.com");
        assert!(store.delete_user(&user.id).unwrap());
        assert!(!store.delete_user(&user.id).unwrap());
    }

    #[test]
    fn key_prefix_is_configurable_and_reset_clears_it() {
        let storage = MemoryStorage::new();
        let store = NewsStore::with_config(
            &storage,
            StoreConfig {
                key_prefix: "demo_".to_string(),
            },
        );
        store.initialize().unwrap();
        assert!(storage.get_item("demo_articles").unwrap().is_some());
        assert!(storage.get_item("newsNexus_articles").unwrap().is_none());

        store.reset().unwrap();
        assert!(storage.is_empty());
    }
}
