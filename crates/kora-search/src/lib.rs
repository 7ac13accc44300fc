// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Live web search and news headlines for the Kora assistant.
//!
//! [`WebSearch`] scrapes the DuckDuckGo HTML endpoint and falls back to Bing
//! when DuckDuckGo yields nothing. Results are rendered as numbered text that
//! starts with the found marker the orchestrator looks for. [`NewsDesk`]
//! builds headline digests on top of any [`kora_core::SearchClient`].

pub mod client;
pub mod format;
pub mod news;
pub mod parse;

pub use client::WebSearch;
pub use format::{format_results, no_results};
pub use news::{NEWS_CATEGORIES, NewsDesk, NewsItem};
pub use parse::{SearchHit, parse_bing, parse_duckduckgo};
