//! Read-side helpers for the public site and the admin dashboard. They work
//! on collections already loaded from the store and never touch storage.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::{Article, Category};

/// Articles per page on listing pages.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Listing order. Every order is stable, so ties keep stored order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// `createdAt` descending.
    #[default]
    Newest,
    /// `createdAt` ascending.
    Oldest,
    /// `viewCount` descending.
    MostViewed,
    /// Title A to Z, ignoring case.
    Alphabetical,
    /// Collection order.
    AsStored,
}

/// Filters and paging for an article listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleQuery {
    /// Only articles with this `categoryId`.
    pub category_id: Option<String>,
    /// Case-insensitive substring of title, content or author. Blank means
    /// no filter.
    pub search: Option<String>,
    /// Result order.
    pub sort: SortOrder,
    /// Drafts are left out unless set.
    pub include_drafts: bool,
    /// 1-based; 0 is read as 1.
    pub page: usize,
    /// 0 is read as 1.
    pub page_size: usize,
}

impl Default for ArticleQuery {
    fn default() -> Self {
        Self {
            category_id: None,
            search: None,
            sort: SortOrder::default(),
            include_drafts: false,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of an [`ArticleQuery`] result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticlePage {
    /// Articles on this page.
    pub items: Vec<Article>,
    /// Matches before pagination.
    pub total: usize,
    /// Effective page number.
    pub page: usize,
    /// Effective page size.
    pub page_size: usize,
    /// Another page follows.
    pub has_more: bool,
}

impl ArticleQuery {
    /// Whether `article` passes the draft, category and search filters.
    pub fn matches(&self, article: &Article) -> bool {
        if !self.include_drafts && article.is_draft {
            return false;
        }
        if let Some(category_id) = self.category_id.as_deref() {
            if article.category_id != category_id {
                return false;
            }
        }
        match normalized_search(self.search.as_deref()) {
            Some(needle) => {
                contains_ignore_case(&article.title, &needle)
                    || contains_ignore_case(&article.content, &needle)
                    || article
                        .author
                        .as_deref()
                        .is_some_and(|author| contains_ignore_case(author, &needle))
            },
            None => true,
        }
    }

    /// Filters, sorts and slices `articles`.
    pub fn run(&self, articles: &[Article]) -> ArticlePage {
        let mut matched: Vec<&Article> = articles.iter().filter(|a| self.matches(a)).collect();
        sort_articles(&mut matched, self.sort);

        let page = self.page.max(1);
        let page_size = self.page_size.max(1);
        let total = matched.len();
        let start = (page - 1).saturating_mul(page_size).min(total);
        let end = start.saturating_add(page_size).min(total);

        ArticlePage {
            items: matched[start..end].iter().map(|a| (*a).clone()).collect(),
            total,
            page,
            page_size,
            has_more: end < total,
        }
    }
}

fn normalized_search(search: Option<&str>) -> Option<String> {
    search
        .map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
}

fn contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// Stable: ties keep stored order.
fn sort_articles(articles: &mut [&Article], order: SortOrder) {
    match order {
        SortOrder::Newest => articles.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => articles.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOrder::MostViewed => articles.sort_by(|a, b| b.view_count.cmp(&a.view_count)),
        SortOrder::Alphabetical => {
            articles.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        },
        SortOrder::AsStored => {},
    }
}

/// Hero slot on the home page: first published featured article, otherwise
/// the first published one.
pub fn featured_article(articles: &[Article]) -> Option<&Article> {
    articles
        .iter()
        .find(|a| !a.is_draft && a.is_featured)
        .or_else(|| articles.iter().find(|a| !a.is_draft))
}

/// Published articles flagged as breaking, in stored order.
pub fn breaking_news(articles: &[Article]) -> Vec<&Article> {
    articles
        .iter()
        .filter(|a| !a.is_draft && a.is_breaking_news)
        .collect()
}

/// Up to `limit` other published articles in the same category.
pub fn related_articles<'a>(articles: &'a [Article], article: &Article, limit: usize) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|candidate| {
            !candidate.is_draft
                && candidate.id != article.id
                && candidate.category_id == article.category_id
        })
        .take(limit)
        .collect()
}

/// The `limit` newest articles.
pub fn recent_articles(articles: &[Article], limit: usize) -> Vec<&Article> {
    let mut sorted: Vec<&Article> = articles.iter().collect();
    sort_articles(&mut sorted, SortOrder::Newest);
    sorted.truncate(limit);
    sorted
}

/// A category's slice of the article distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    /// Category id.
    pub category_id: String,
    /// Category name.
    pub name: String,
    /// Articles referencing the category.
    pub count: usize,
    /// `count` as a rounded share of all articles.
    pub percentage: u32,
}

/// Admin dashboard totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Stored articles, drafts included.
    pub total_articles: usize,
    /// Stored categories.
    pub total_categories: usize,
    /// Sum of `viewCount`.
    pub total_views: u64,
    /// Draft articles.
    pub drafts: usize,
    /// Featured articles.
    pub featured: usize,
    /// Breaking articles.
    pub breaking: usize,
    /// Articles whose `categoryId` names no existing category.
    pub orphaned_articles: usize,
    /// One entry per category, in category order.
    pub distribution: Vec<CategoryShare>,
}

/// Totals and per-category distribution over the given collections.
pub fn dashboard_stats(categories: &[Category], articles: &[Article]) -> DashboardStats {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for article in articles {
        *counts.entry(article.category_id.as_str()).or_default() += 1;
    }
    let known: HashSet<&str> = categories.iter().map(|c| c.id.as_str()).collect();
    let divisor = articles.len().max(1);

    let distribution = categories
        .iter()
        .map(|category| {
            let count = counts.get(category.id.as_str()).copied().unwrap_or(0);
            CategoryShare {
                category_id: category.id.clone(),
                name: category.name.clone(),
                count,
                percentage: rounded_percentage(count, divisor),
            }
        })
        .collect();

    DashboardStats {
        total_articles: articles.len(),
        total_categories: categories.len(),
        total_views: articles.iter().map(|a| a.view_count).sum(),
        drafts: articles.iter().filter(|a| a.is_draft).count(),
        featured: articles.iter().filter(|a| a.is_featured).count(),
        breaking: articles.iter().filter(|a| a.is_breaking_news).count(),
        orphaned_articles: articles
            .iter()
            .filter(|a| !known.contains(a.category_id.as_str()))
            .count(),
        distribution,
    }
}

// round half up, like Math.round on non-negative input
fn rounded_percentage(count: usize, divisor: usize) -> u32 {
    ((count * 200 + divisor) / (divisor * 2)) as u32
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::models::NewArticleInput;

    fn article(id: &str, category: &str, hours_ago: i64, views: u64) -> Article {
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        NewArticleInput {
            title: format!("Story {id}"),
            content: format!("Body of {id}"),
            category_id: category.to_string(),
            view_count: views,
            ..Default::default()
        }
        .into_article(id.to_string(), base - Duration::hours(hours_ago))
    }

    fn sample() -> Vec<Article> {
        vec![
            article("a", "tech", 5, 10),
            article("b", "sports", 1, 50),
            article("c", "tech", 3, 30),
            article("d", "tech", 9, 0),
        ]
    }

    fn ids(items: &[Article]) -> Vec<&str> {
        items.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn default_query_sorts_newest_first() {
        let page = ArticleQuery::default().run(&sample());
        assert_eq!(ids(&page.items), ["b", "c", "a", "d"]);
        assert_eq!(page.total, 4);
        assert!(!page.has_more);
    }

    #[test]
    fn category_filter_and_oldest_sort() {
        let page = ArticleQuery {
            category_id: Some("tech".to_string()),
            sort: SortOrder::Oldest,
            ..Default::default()
        }
        .run(&sample());
        assert_eq!(ids(&page.items), ["d", "a", "c"]);
    }

    #[test]
    fn most_viewed_sort() {
        let page = ArticleQuery {
            sort: SortOrder::MostViewed,
            ..Default::default()
        }
        .run(&sample());
        assert_eq!(ids(&page.items), ["b", "c", "a", "d"]);
    }

    #[test]
    fn alphabetical_sort_ignores_case_and_keeps_ties_in_order() {
        let mut articles = sample();
        articles[0].title = "banana".to_string();
        articles[1].title = "Apple".to_string();
        articles[2].title = "cherry".to_string();
        articles[3].title = "BANANA".to_string();

        let page = ArticleQuery {
            sort: SortOrder::Alphabetical,
            ..Default::default()
        }
        .run(&articles);
        assert_eq!(ids(&page.items), ["b", "a", "d", "c"]);
    }

    #[test]
    fn search_matches_title_content_and_author_ignoring_case() {
        let mut articles = sample();
        articles[3].author = Some("Jane Smith".to_string());
        articles[2].content = "Quarterly EARNINGS beat".to_string();

        let run = |needle: &str| {
            ArticleQuery {
                search: Some(needle.to_string()),
                sort: SortOrder::AsStored,
                ..Default::default()
            }
            .run(&articles)
            .items
        };
        assert_eq!(ids(&run("story a")), ["a"]);
        assert_eq!(ids(&run("earnings")), ["c"]);
        assert_eq!(ids(&run("SMITH")), ["d"]);
        assert_eq!(run("   ").len(), 4);
    }

    #[test]
    fn drafts_hidden_unless_requested() {
        let mut articles = sample();
        articles[1].is_draft = true;
        assert_eq!(ArticleQuery::default().run(&articles).total, 3);
        let all = ArticleQuery {
            include_drafts: true,
            ..Default::default()
        }
        .run(&articles);
        assert_eq!(all.total, 4);
    }

    #[test]
    fn pagination_slices_and_reports_more() {
        let articles: Vec<Article> = (0..23).map(|i| article(&format!("p{i}"), "x", i, 0)).collect();
        let query = |page| ArticleQuery {
            page,
            sort: SortOrder::AsStored,
            ..Default::default()
        };

        let first = query(1).run(&articles);
        assert_eq!(first.items.len(), 10);
        assert!(first.has_more);
        assert_eq!(query(0).run(&articles), first);

        let last = query(3).run(&articles);
        assert_eq!(ids(&last.items), ["p20", "p21", "p22"]);
        assert!(!last.has_more);

        let beyond = query(9).run(&articles);
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, 23);
    }

    #[test]
    fn featured_prefers_flag_then_first_published() {
        let mut articles = sample();
        assert_eq!(featured_article(&articles).map(|a| a.id.as_str()), Some("a"));

        articles[2].is_featured = true;
        assert_eq!(featured_article(&articles).map(|a| a.id.as_str()), Some("c"));

        articles[2].is_draft = true;
        articles[0].is_draft = true;
        assert_eq!(featured_article(&articles).map(|a| a.id.as_str()), Some("b"));
        assert!(featured_article(&[]).is_none());
    }

    #[test]
    fn related_excludes_self_and_other_categories() {
        let articles = sample();
        let related = related_articles(&articles, &articles[0], 5);
        let related_ids: Vec<&str> = related.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(related_ids, ["c", "d"]);
        assert_eq!(related_articles(&articles, &articles[0], 1).len(), 1);
    }

    #[test]
    fn recent_and_breaking() {
        let mut articles = sample();
        articles[3].is_breaking_news = true;
        let recent = recent_articles(&articles, 2);
        assert_eq!(recent[0].id, "b");
        assert_eq!(recent[1].id, "c");
        assert_eq!(recent.len(), 2);
        assert_eq!(breaking_news(&articles).len(), 1);
    }

    #[test]
    fn dashboard_distribution_rounds_percentages() {
        let now = Utc::now();
        let categories: Vec<Category> = ["tech", "sports", "empty"]
            .iter()
            .map(|id| Category {
                id: id.to_string(),
                name: id.to_uppercase(),
                slug: id.to_string(),
                description: None,
                icon: None,
                color: None,
                is_active: true,
                created_at: now,
                updated_at: None,
            })
            .collect();
        let mut articles = sample();
        articles.push(article("e", "gone", 0, 7));
        articles[0].is_draft = true;

        let stats = dashboard_stats(&categories, &articles);
        assert_eq!(stats.total_articles, 5);
        assert_eq!(stats.total_categories, 3);
        assert_eq!(stats.total_views, 97);
        assert_eq!(stats.drafts, 1);
        assert_eq!(stats.orphaned_articles, 1);

        let shares: Vec<(&str, usize, u32)> = stats
            .distribution
            .iter()
            .map(|s| (s.category_id.as_str(), s.count, s.percentage))
            .collect();
        assert_eq!(shares, [("tech", 3, 60), ("sports", 1, 20), ("empty", 0, 0)]);
    }

    #[test]
    fn dashboard_on_empty_store_has_zero_shares() {
        let stats = dashboard_stats(&[], &[]);
        assert_eq!(stats.total_articles, 0);
        assert!(stats.distribution.is_empty());
        assert_eq!(rounded_percentage(0, 1), 0);
        assert_eq!(rounded_percentage(1, 3), 33);
        assert_eq!(rounded_percentage(2, 3), 67);
        assert_eq!(rounded_percentage(1, 8), 13);
    }
}
