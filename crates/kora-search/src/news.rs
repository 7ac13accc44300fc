// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Headline digests for the `news` command.

use std::sync::Arc;

use chrono::{DateTime, TimeZone};
use kora_core::{SEARCH_FOUND_MARKER, SearchClient};
use tracing::warn;

/// Categories offered by the `news` command.
pub const NEWS_CATEGORIES: &[&str] = &[
    "general", "technology", "science", "health",
    "business", "sports", "entertainment", "politics",
];

/// Items shown per digest.
const MAX_ITEMS: usize = 5;

/// Results requested for a topic search.
const TOPIC_RESULTS: usize = 4;

const NO_DESCRIPTION: &str = "No description available";

/// Canned headlines used when search yields nothing. Unknown categories use `general`.
const FALLBACK_NEWS: &[(&str, &[(&str, &str)])] = &[
    (
        "general",
        &[
            ("Technology Advances Continue", "Latest developments in AI and technology sector"),
            ("Global Economic Updates", "Current market trends and economic indicators"),
            ("Climate and Environment", "Recent environmental news and climate updates"),
        ],
    ),
    (
        "technology",
        &[
            ("AI Development Progress", "New breakthroughs in artificial intelligence"),
            ("Tech Industry Updates", "Latest from major technology companies"),
            ("Cybersecurity News", "Recent cybersecurity developments and threats"),
        ],
    ),
    (
        "science",
        &[
            ("Scientific Discoveries", "Recent research and scientific breakthroughs"),
            ("Space Exploration", "Latest news from space agencies and missions"),
            ("Medical Research", "New developments in healthcare and medicine"),
        ],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub description: String,
}

impl NewsItem {
    fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Builds headline digests from web search results.
pub struct NewsDesk {
    search: Arc<dyn SearchClient>,
}

impl NewsDesk {
    pub fn new(search: Arc<dyn SearchClient>) -> Self {
        Self { search }
    }

    /// Up to `count` headlines for `category`, or the canned set when the
    /// search finds nothing.
    pub async fn latest(&self, category: &str, count: usize) -> String {
        let category = category.trim().to_lowercase();
        let query = if category == "general" {
            "latest news today headlines".to_string()
        } else {
            format!("latest {category} news today")
        };

        let mut items = match self.search.search_web(&query, count).await {
            Ok(results) => parse_news(&results),
            Err(e) => {
                warn!(error = %e, category = category.as_str(), "news search failed");
                Vec::new()
            }
        };
        if items.is_empty() {
            items = fallback_news(&category);
        }
        format_news(&items, &category, chrono::Local::now())
    }

    /// Search results about one topic, framed as news.
    pub async fn by_topic(&self, topic: &str) -> String {
        let query = format!("{topic} news latest updates today");
        match self.search.search_web(&query, TOPIC_RESULTS).await {
            Ok(results) if results.contains(SEARCH_FOUND_MARKER) => {
                format!("📰 Latest news about {topic}:\n\n{results}")
            }
            Ok(_) => format!(
                "I couldn't find recent news about {topic}. Try searching for a more specific topic."
            ),
            Err(e) => {
                warn!(error = %e, topic, "topic news search failed");
                format!("I couldn't find recent news about {topic}. Try searching for a more specific topic.")
            }
        }
    }
}

/// Headlines from formatted search results.
///
/// Each numbered line starts an item; its number is dropped. The first
/// non-empty line after it becomes the description. The closing timestamp
/// line is ignored. Text without the found marker yields no items.
pub fn parse_news(results: &str) -> Vec<NewsItem> {
    if !results.contains(SEARCH_FOUND_MARKER) {
        return Vec::new();
    }

    let mut items: Vec<NewsItem> = Vec::new();
    let mut awaiting_description = false;
    for line in results.lines().map(str::trim) {
        if line.is_empty() || line.starts_with("This information was found") {
            continue;
        }
        if line.starts_with(|c: char| c.is_ascii_digit()) {
            let title = line
                .trim_start_matches(|c: char| c.is_ascii_digit())
                .trim_start_matches('.')
                .trim();
            items.push(NewsItem::new(title, NO_DESCRIPTION));
            awaiting_description = true;
        } else if awaiting_description {
            if let Some(item) = items.last_mut() {
                item.description = line.to_string();
            }
            awaiting_description = false;
        }
    }
    items
}

/// The canned headlines for `category`.
pub fn fallback_news(category: &str) -> Vec<NewsItem> {
    let table = FALLBACK_NEWS
        .iter()
        .find(|(name, _)| *name == category)
        .unwrap_or(&FALLBACK_NEWS[0]);
    table
        .1
        .iter()
        .map(|(title, description)| NewsItem::new(*title, *description))
        .collect()
}

/// A dated digest of at most five items.
pub fn format_news<Tz>(items: &[NewsItem], category: &str, now: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if items.is_empty() {
        return format!("No {category} news available at the moment.");
    }

    let mut out = format!(
        "📰 Latest {} News ({}):\n\n",
        title_case(category),
        now.format("%Y-%m-%d %H:%M")
    );
    for (i, item) in items.iter().take(MAX_ITEMS).enumerate() {
        out.push_str(&format!("{}. {}\n   {}\n\n", i + 1, item.title, item.description));
    }
    out.push_str("Note: News information is gathered from various sources and updated regularly.");
    out
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    const RESULTS: &str = "Here's what I found about 'latest news today headlines':\n\n\
        1. Markets rally\n   Stocks rose for a third day.\n\n\
        2. Storm warning\n   Heavy rain expected on the coast.\n\n\
        This information was found from live web search on 2026-03-14 09:05.";

    #[test]
    fn parses_numbered_results() {
        let items = parse_news(RESULTS);
        assert_eq!(
            items,
            vec![
                NewsItem::new("Markets rally", "Stocks rose for a third day."),
                NewsItem::new("Storm warning", "Heavy rain expected on the coast."),
            ]
        );
    }

    #[test]
    fn unmarked_results_parse_to_nothing() {
        assert!(parse_news("1. Something\n   else").is_empty());
    }

    #[test]
    fn fallback_table_defaults_to_general() {
        assert_eq!(fallback_news("science")[1].title, "Space Exploration");
        assert_eq!(fallback_news("sports"), fallback_news("general"));
    }

    #[test]
    fn digest_is_capped_at_five() {
        let items: Vec<_> = (1..=7).map(|i| NewsItem::new(format!("H{i}"), "d")).collect();
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 9, 5, 0).unwrap();
        let text = format_news(&items, "technology", now);
        assert!(text.starts_with("📰 Latest Technology News (2026-03-14 09:05):"));
        assert!(text.contains("5. H5"));
        assert!(!text.contains("6. H6"));
        assert!(text.ends_with("updated regularly."));
    }

    #[test]
    fn empty_digest_message() {
        assert_eq!(
            format_news(&[], "health", Utc::now()),
            "No health news available at the moment."
        );
    }
}
