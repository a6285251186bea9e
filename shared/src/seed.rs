//! Sample data written on first initialization.

use chrono::{DateTime, Duration, Utc};

use crate::{
    models::{Article, Category, NewArticleInput, NewCategoryInput, NewUserInput, User},
    text::category_icon,
};

/// Bylines rotated over the sample articles.
pub const SEED_AUTHORS: [&str; 3] = ["John Doe", "Jane Smith", "Alice Johnson"];

const SEED_CATEGORIES: [(&str, &str, &str); 5] = [
    ("Technology", "Gadgets, software and the companies behind them.", "blue"),
    ("Politics", "Elections, policy and government.", "red"),
    ("Finance", "Markets, economy and personal money.", "green"),
    ("Sports", "Scores, transfers and match reports.", "yellow"),
    ("Health", "Medicine, wellness and public health.", "purple"),
];

// (title, summary, content, featured, breaking)
const SEED_ARTICLES: [(&str, &str, &str, bool, bool); 10] = [
    (
        "Chipmakers Race to Ship Low-Power AI Accelerators",
        "A new generation of edge chips promises laptop-class inference on a phone battery.",
        "Several chip designers unveiled accelerators aimed at running language models \
         on-device.\nAnalysts expect the first phones with the parts to ship next year.",
        true,
        false,
    ),
    (
        "Parliament Passes Digital Services Reform",
        "The bill tightens transparency rules for large online platforms.",
        "After months of negotiation the reform passed with a comfortable majority.\nPlatforms \
         will have a year to comply with the new reporting duties.",
        false,
        true,
    ),
    (
        "Central Bank Holds Rates Steady",
        "Policymakers signalled patience as inflation cools.",
        "The bank kept its benchmark rate unchanged for a third meeting.\nMarkets now price in \
         a cut before the end of the year.",
        false,
        false,
    ),
    (
        "Underdogs Clinch Title on Final Day",
        "A stoppage-time winner sealed the championship.",
        "Few predicted the club would survive the season, let alone win it.\nThe squad returns \
         to a parade in the city centre on Sunday.",
        true,
        false,
    ),
    (
        "Study Links Short Walks to Better Sleep",
        "Ten minutes after dinner made a measurable difference.",
        "Researchers followed two thousand adults for six months.\nParticipants who walked \
         after meals fell asleep faster on average.",
        false,
        false,
    ),
    (
        "Open Source Browser Engine Reaches 1.0",
        "The project now passes the majority of web platform tests.",
        "Volunteers spent four years rewriting the layout engine.\nThe release focuses on \
         standards compliance over raw speed.",
        false,
        false,
    ),
    (
        "Coalition Talks Enter Second Week",
        "Negotiators remain split on the budget.",
        "Party leaders met again on Monday without a breakthrough.\nA caretaker government \
         continues to run day-to-day affairs.",
        false,
        false,
    ),
    (
        "Retail Investors Pile Into Bond Funds",
        "Higher yields are drawing savers away from cash accounts.",
        "Fund flows into short-dated bonds hit a record last month.\nAdvisers caution that \
         prices fall when rates rise again.",
        false,
        false,
    ),
    (
        "Marathon Record Falls in Cool Conditions",
        "The winner shaved eleven seconds off the course best.",
        "Ideal weather and a fast pack set up the record attempt.\nThe runner crossed the line \
         alone after breaking away at kilometre thirty.",
        false,
        true,
    ),
    (
        "Hospitals Trial AI Triage Assistants",
        "Early results show shorter waits in emergency departments.",
        "Three hospitals are piloting software that prioritises incoming patients.\nClinicians \
         keep the final say on every decision.",
        false,
        false,
    ),
];

/// The five sample categories, all active.
pub fn default_categories(mut new_id: impl FnMut() -> String, now: DateTime<Utc>) -> Vec<Category> {
    SEED_CATEGORIES
        .iter()
        .map(|(name, description, color)| {
            NewCategoryInput {
                name: (*name).to_string(),
                description: Some((*description).to_string()),
                icon: Some(category_icon(name).to_string()),
                color: Some((*color).to_string()),
                ..Default::default()
            }
            .into_category(new_id(), now)
        })
        .collect()
}

/// Sample articles spread round-robin over `categories`. Creation times step
/// back an hour per article so "newest first" has a stable order.
pub fn default_articles(
    categories: &[Category],
    mut new_id: impl FnMut() -> String,
    now: DateTime<Utc>,
) -> Vec<Article> {
    SEED_ARTICLES
        .iter()
        .enumerate()
        .map(|(idx, (title, summary, content, featured, breaking))| {
            let category_id = categories
                .get(idx % categories.len().max(1))
                .map(|category| category.id.clone())
                .unwrap_or_default();
            NewArticleInput {
                title: (*title).to_string(),
                content: (*content).to_string(),
                summary: (*summary).to_string(),
                category_id,
                author: Some(SEED_AUTHORS[idx % SEED_AUTHORS.len()].to_string()),
                is_featured: *featured,
                is_breaking_news: *breaking,
                view_count: ((SEED_ARTICLES.len() - idx) * 37) as u64,
                ..Default::default()
            }
            .into_article(new_id(), now - Duration::hours(idx as i64))
        })
        .collect()
}

/// `user1`..`user3` with example.com addresses.
pub fn default_users(mut new_id: impl FnMut() -> String) -> Vec<User> {
    (1..=3)
        .map(|n| {
            NewUserInput {
                username: format!("user{n}"),
                email: format!("user{n}@example.com"),
            }
            .into_user(new_id())
        })
        .collect()
}
