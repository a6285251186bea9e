//! Stored record shapes and the form inputs and patches that produce them.
//!
//! Decoding is lenient the way older browser-written data needs: missing
//! fields and explicit `null`s take the field default, and `category` is
//! accepted for `categoryId`.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

use crate::text::slugify;

/// Shown when an article carries no image of its own.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1504711434969-e33886168f5c?w=800&auto=format&fit=crop";

fn default_true() -> bool {
    true
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_true<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

/// A record kept in one of the store's JSON collections.
pub trait StoredRecord: Serialize + DeserializeOwned {
    /// Fills in derived fields an older stored shape left blank. Runs on
    /// every record read from storage.
    fn normalize(&mut self) {}
}

// =============== Category ===============

/// A news section such as "Technology".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Opaque unique id.
    pub id: String,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// URL slug; derived from `name` when stored without one.
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    /// Short blurb shown on the category page.
    #[serde(default)]
    pub description: Option<String>,
    /// Icon class name.
    #[serde(default)]
    pub icon: Option<String>,
    /// Accent color name.
    #[serde(default)]
    pub color: Option<String>,
    /// Hidden from navigation when false. Missing or `null` reads as true.
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub is_active: bool,
    /// Set once on creation. Records stored without one read as the Unix
    /// epoch, so the value stays fixed across reads.
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,
    /// Stamped by every successful update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl StoredRecord for Category {
    fn normalize(&mut self) {
        if self.slug.trim().is_empty() {
            self.slug = slugify(&self.name);
        }
    }
}

/// A category as submitted by the admin form, before it has an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategoryInput {
    /// Display name.
    pub name: String,
    /// Explicit slug; blank or missing derives one from `name`.
    #[serde(default)]
    pub slug: Option<String>,
    /// Short blurb.
    #[serde(default)]
    pub description: Option<String>,
    /// Icon class name.
    #[serde(default)]
    pub icon: Option<String>,
    /// Accent color name.
    #[serde(default)]
    pub color: Option<String>,
    /// Defaults to active.
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl NewCategoryInput {
    /// Builds the stored record with the given id and creation time.
    pub fn into_category(self, id: String, now: DateTime<Utc>) -> Category {
        let slug = resolve_slug(self.slug, &self.name);
        Category {
            id,
            name: self.name,
            slug,
            description: self.description,
            icon: self.icon,
            color: self.color,
            is_active: self.is_active.unwrap_or(true),
            created_at: now,
            updated_at: None,
        }
    }
}

/// Partial category update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPatch {
    /// New display name.
    pub name: Option<String>,
    /// New slug, stored as given.
    pub slug: Option<String>,
    /// New blurb.
    pub description: Option<String>,
    /// New icon class.
    pub icon: Option<String>,
    /// New accent color.
    pub color: Option<String>,
    /// Show or hide the category.
    pub is_active: Option<bool>,
}

impl CategoryPatch {
    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Shallow merge onto `category`.
    pub fn apply_to(self, category: &mut Category) {
        if let Some(value) = self.name {
            category.name = value;
        }
        if let Some(value) = self.slug {
            category.slug = value;
        }
        if self.description.is_some() {
            category.description = self.description;
        }
        if self.icon.is_some() {
            category.icon = self.icon;
        }
        if self.color.is_some() {
            category.color = self.color;
        }
        if let Some(value) = self.is_active {
            category.is_active = value;
        }
    }
}

// =============== Article ===============

/// A published or draft news article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Opaque unique id.
    pub id: String,
    /// Headline.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// URL slug; derived from `title` when stored without one.
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    /// Body; may contain HTML.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    /// Teaser shown on cards.
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    /// Weak reference to [`Category::id`]; never validated.
    #[serde(default, alias = "category", deserialize_with = "null_as_default")]
    pub category_id: String,
    /// Byline.
    #[serde(default)]
    pub author: Option<String>,
    /// Cover image; see [`Self::display_image_url`].
    #[serde(default)]
    pub image_url: Option<String>,
    /// Candidate for the home page hero slot.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_featured: bool,
    /// Shown in the breaking news ticker.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_breaking_news: bool,
    /// Hidden from the public site.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_draft: bool,
    /// Detail page views.
    #[serde(default, deserialize_with = "null_as_default")]
    pub view_count: u64,
    /// Set once on creation; the Unix epoch for records stored without one.
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,
}

impl StoredRecord for Article {
    fn normalize(&mut self) {
        if self.slug.trim().is_empty() {
            self.slug = slugify(&self.title);
        }
    }
}

impl Article {
    /// Stored image URL, or [`PLACEHOLDER_IMAGE_URL`] when blank.
    pub fn display_image_url(&self) -> &str {
        self.image_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE_URL)
    }

    /// Body as rendered on the detail page: stored text is treated as HTML,
    /// newlines become line breaks.
    pub fn content_html(&self) -> String {
        self.content.replace("\r\n", "\n").replace('\n', "<br />")
    }
}

/// An article as submitted by the admin form: everything but `id` and
/// `createdAt`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticleInput {
    /// Headline.
    pub title: String,
    /// Explicit slug; blank or missing derives one from `title`.
    #[serde(default)]
    pub slug: Option<String>,
    /// Body.
    #[serde(default)]
    pub content: String,
    /// Teaser.
    #[serde(default)]
    pub summary: String,
    /// Category id, stored as given.
    #[serde(default)]
    pub category_id: String,
    /// Byline.
    #[serde(default)]
    pub author: Option<String>,
    /// Cover image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Hero slot candidate.
    #[serde(default)]
    pub is_featured: bool,
    /// Breaking news ticker.
    #[serde(default)]
    pub is_breaking_news: bool,
    /// Hidden from the public site.
    #[serde(default)]
    pub is_draft: bool,
    /// Starting view count, usually 0.
    #[serde(default)]
    pub view_count: u64,
}

impl NewArticleInput {
    /// Builds the stored record with the given id and creation time.
    pub fn into_article(self, id: String, now: DateTime<Utc>) -> Article {
        let slug = resolve_slug(self.slug, &self.title);
        Article {
            id,
            title: self.title,
            slug,
            content: self.content,
            summary: self.summary,
            category_id: self.category_id,
            author: self.author,
            image_url: self.image_url,
            is_featured: self.is_featured,
            is_breaking_news: self.is_breaking_news,
            is_draft: self.is_draft,
            view_count: self.view_count,
            created_at: now,
        }
    }
}

/// Partial article update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePatch {
    /// New headline.
    pub title: Option<String>,
    /// New slug, stored as given.
    pub slug: Option<String>,
    /// New body.
    pub content: Option<String>,
    /// New teaser.
    pub summary: Option<String>,
    /// New category id.
    pub category_id: Option<String>,
    /// New byline.
    pub author: Option<String>,
    /// New cover image.
    pub image_url: Option<String>,
    /// Set the hero flag.
    pub is_featured: Option<bool>,
    /// Set the breaking flag.
    pub is_breaking_news: Option<bool>,
    /// Set the draft flag.
    pub is_draft: Option<bool>,
    /// Overwrite the view count.
    pub view_count: Option<u64>,
}

impl ArticlePatch {
    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Shallow merge onto `article`; `id` and `createdAt` are never touched.
    pub fn apply_to(self, article: &mut Article) {
        if let Some(value) = self.title {
            article.title = value;
        }
        if let Some(value) = self.slug {
            article.slug = value;
        }
        if let Some(value) = self.content {
            article.content = value;
        }
        if let Some(value) = self.summary {
            article.summary = value;
        }
        if let Some(value) = self.category_id {
            article.category_id = value;
        }
        if self.author.is_some() {
            article.author = self.author;
        }
        if self.image_url.is_some() {
            article.image_url = self.image_url;
        }
        if let Some(value) = self.is_featured {
            article.is_featured = value;
        }
        if let Some(value) = self.is_breaking_news {
            article.is_breaking_news = value;
        }
        if let Some(value) = self.is_draft {
            article.is_draft = value;
        }
        if let Some(value) = self.view_count {
            article.view_count = value;
        }
    }
}

// =============== User ===============

/// Admin account. No credentials are stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque unique id.
    pub id: String,
    /// Login name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    /// Contact address.
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

impl StoredRecord for User {}

/// A user before it has an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUserInput {
    /// Login name.
    pub username: String,
    /// Contact address.
    pub email: String,
}

impl NewUserInput {
    /// Builds the stored record with the given id.
    pub fn into_user(self, id: String) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
        }
    }
}

/// Partial user update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    /// New login name.
    pub username: Option<String>,
    /// New contact address.
    pub email: Option<String>,
}

impl UserPatch {
    /// Shallow merge onto `user`.
    pub fn apply_to(self, user: &mut User) {
        if let Some(value) = self.username {
            user.username = value;
        }
        if let Some(value) = self.email {
            user.email = value;
        }
    }
}

/// Explicit slug if it has content, otherwise derived from `source`.
fn resolve_slug(explicit: Option<String>, source: &str) -> String {
    explicit
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| slugify(source))
}
