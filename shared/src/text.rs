//! Small string helpers shared by the site and the CLI.

use chrono::{DateTime, Utc};

/// URL-safe slug: lowercase, whitespace runs become `-`, anything that is not
/// a word character or `-` is dropped, repeated `-` collapse into one.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for ch in text.trim().to_lowercase().chars() {
        if ch.is_whitespace() {
            in_whitespace = true;
            continue;
        }
        if in_whitespace {
            push_dash(&mut slug);
            in_whitespace = false;
        }
        if ch == '-' {
            push_dash(&mut slug);
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            slug.push(ch);
        }
    }
    slug
}

fn push_dash(slug: &mut String) {
    if !slug.ends_with('-') {
        slug.push('-');
    }
}

/// Cuts `text` to `max_chars` characters and appends `...` when it was longer.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Relative age used on article cards ("3 hours ago").
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - then).num_minutes();
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        plural(days, "day")
    } else if hours > 0 {
        plural(hours, "hour")
    } else if minutes > 0 {
        plural(minutes, "minute")
    } else {
        "Just now".to_string()
    }
}

fn plural(value: i64, unit: &str) -> String {
    if value > 1 {
        format!("{value} {unit}s ago")
    } else {
        format!("{value} {unit} ago")
    }
}

/// Icon for category names without a dedicated one.
pub const DEFAULT_CATEGORY_ICON: &str = "ri-price-tag-3-line";

/// Remix icon class for a category name, matched case-insensitively.
pub fn category_icon(name: &str) -> &'static str {
    match name.to_lowercase().as_str() {
        "technology" => "ri-computer-line",
        "politics" => "ri-government-line",
        "finance" => "ri-money-dollar-circle-line",
        "lifestyle" => "ri-heart-line",
        "sports" => "ri-basketball-line",
        "health" => "ri-heart-pulse-line",
        "entertainment" => "ri-movie-line",
        "science" => "ri-flask-line",
        "education" => "ri-book-open-line",
        "travel" => "ri-plane-line",
        _ => DEFAULT_CATEGORY_ICON,
    }
}
