// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Result extraction from search engine HTML.

use kora_core::KoraError;
use scraper::{ElementRef, Html, Selector};

/// One organic search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub snippet: String,
    pub url: String,
}

fn selector(css: &str) -> Result<Selector, KoraError> {
    Selector::parse(css).map_err(|e| KoraError::search(format!("invalid selector '{css}': {e}")))
}

fn text_of(element: Option<ElementRef<'_>>) -> String {
    element
        .map(|e| e.text().collect::<String>())
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Results from a DuckDuckGo HTML page. Entries without both a title and a
/// snippet are skipped.
pub fn parse_duckduckgo(html: &str, limit: usize) -> Result<Vec<SearchHit>, KoraError> {
    let document = Html::parse_document(html);
    let result = selector(".result")?;
    let title = selector(".result__a")?;
    let snippet = selector(".result__snippet")?;

    let mut hits = Vec::new();
    for element in document.select(&result) {
        if hits.len() == limit {
            break;
        }
        let link = element.select(&title).next();
        let hit = SearchHit {
            title: text_of(link),
            snippet: text_of(element.select(&snippet).next()),
            url: link
                .and_then(|a| a.value().attr("href"))
                .unwrap_or_default()
                .to_string(),
        };
        if !hit.title.is_empty() && !hit.snippet.is_empty() {
            hits.push(hit);
        }
    }
    Ok(hits)
}

/// Results from a Bing page: `li.b_algo` entries with an `h2` title and a
/// `p` snippet.
pub fn parse_bing(html: &str, limit: usize) -> Result<Vec<SearchHit>, KoraError> {
    let document = Html::parse_document(html);
    let result = selector("li.b_algo")?;
    let title = selector("h2")?;
    let snippet = selector("p")?;

    let mut hits = Vec::new();
    for element in document.select(&result) {
        if hits.len() == limit {
            break;
        }
        let hit = SearchHit {
            title: text_of(element.select(&title).next()),
            snippet: text_of(element.select(&snippet).next()),
            url: String::new(),
        };
        if !hit.title.is_empty() && !hit.snippet.is_empty() {
            hits.push(hit);
        }
    }
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DDG_PAGE: &str = r#"
        <html><body>
          <div class="result">
            <a class="result__a" href="https://www.rust-lang.org/">Rust Programming Language</a>
            <a class="result__snippet">A language empowering everyone.</a>
          </div>
          <div class="result">
            <a class="result__a" href="https://example.com/no-snippet">Title only</a>
          </div>
          <div class="result">
            <a class="result__a" href="https://blog.rust-lang.org/">Rust Blog</a>
            <a class="result__snippet">  Announcing Rust 1.90  </a>
          </div>
        </body></html>
    "#;

    #[test]
    fn duckduckgo_results_need_title_and_snippet() {
        let hits = parse_duckduckgo(DDG_PAGE, 5).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Rust Programming Language");
        assert_eq!(hits[0].url, "https://www.rust-lang.org/");
        assert_eq!(hits[1].snippet, "Announcing Rust 1.90");
    }

    #[test]
    fn duckduckgo_limit_counts_kept_hits() {
        let hits = parse_duckduckgo(DDG_PAGE, 1).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Rust Programming Language");
    }

    #[test]
    fn bing_results_parsed() {
        let page = r#"
            <ol id="b_results">
              <li class="b_algo"><h2><a href="x">Weather Today</a></h2><p>Sunny and 24C.</p></li>
              <li class="b_algo"><h2>No snippet</h2></li>
            </ol>
        "#;
        let hits = parse_bing(page, 5).unwrap();
        assert_eq!(
            hits,
            vec![SearchHit {
                title: "Weather Today".into(),
                snippet: "Sunny and 24C.".into(),
                url: String::new(),
            }]
        );
    }

    #[test]
    fn unrelated_page_yields_nothing() {
        assert!(parse_duckduckgo("<html><p>captcha</p></html>", 5).unwrap().is_empty());
        assert!(parse_bing("", 5).unwrap().is_empty());
    }
}
