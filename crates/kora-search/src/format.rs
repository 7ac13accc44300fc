// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text rendering of search results.

use chrono::{DateTime, TimeZone};
use kora_core::SEARCH_FOUND_MARKER;

use crate::parse::SearchHit;

/// Numbered results introduced by the found marker and closed by a timestamp line.
pub fn format_results<Tz>(query: &str, hits: &[SearchHit], now: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if hits.is_empty() {
        return no_results(query);
    }

    let mut out = format!("{SEARCH_FOUND_MARKER} about '{query}':\n\n");
    for (i, hit) in hits.iter().enumerate() {
        out.push_str(&format!("{}. {}\n   {}\n\n", i + 1, hit.title, hit.snippet));
    }
    out.push_str(&format!(
        "This information was found from live web search on {}.",
        now.format("%Y-%m-%d %H:%M")
    ));
    out
}

/// The reply for a search that found nothing. It carries no found marker.
pub fn no_results(query: &str) -> String {
    format!("I couldn't find current web results for '{query}', but I can provide general information.")
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn results_are_numbered_and_stamped() {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 9, 5, 0).unwrap();
        let hits = vec![
            SearchHit {
                title: "First".into(),
                snippet: "one".into(),
                url: String::new(),
            },
            SearchHit {
                title: "Second".into(),
                snippet: "two".into(),
                url: String::new(),
            },
        ];
        let text = format_results("rust", &hits, now);
        assert_eq!(
            text,
            "Here's what I found about 'rust':\n\n\
             1. First\n   one\n\n\
             2. Second\n   two\n\n\
             This information was found from live web search on 2026-03-14 09:05."
        );
    }

    #[test]
    fn empty_hits_have_no_marker() {
        let text = format_results("nothing", &[], Utc::now());
        assert!(!text.contains(SEARCH_FOUND_MARKER));
        assert!(text.contains("'nothing'"));
    }
}
