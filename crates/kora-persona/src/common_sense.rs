// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common-sense correction pass.
//!
//! Runs in order: logical consistency, practical context, safety filter,
//! time-of-day and season awareness. The last few outputs are kept so later
//! turns can be checked against them.

use std::collections::VecDeque;

use chrono::{Datelike, Local, NaiveDateTime, Timelike};

/// Outputs remembered for contradiction checks.
const RECENT_LIMIT: usize = 5;

const TIME_CONFUSION: &str = "I think there might be some confusion about time. Let me clarify: ";
const IMPOSSIBLE: &str = "That doesn't seem physically possible. Let me give you a more realistic answer: ";
const SAFETY_PREFIX: &str = "I want to make sure I give you safe and helpful advice. ";
const SAFETY_SUFFIX: &str = " Please prioritize your safety and follow local laws and guidelines.";

const HARMFUL: &[&str] = &["dangerous", "illegal", "harmful", "unsafe"];

/// Query keywords and the advice each appends. Every matching row applies.
const PRACTICAL_ADVICE: &[(&[&str], &str)] = &[
    (
        &["drive", "driving", "car"],
        " Remember to always drive safely and follow traffic rules.",
    ),
    (
        &["sick", "illness", "pain", "hurt"],
        " If you're experiencing health issues, it's best to consult with a healthcare professional.",
    ),
    (
        &["busy", "time", "schedule"],
        " Good time management can help reduce stress and improve productivity.",
    ),
];

/// Weather advice; only the first matching row applies.
const WEATHER_ADVICE: &[(&str, &str)] = &[
    ("rain", " By the way, if it's raining, don't forget an umbrella!"),
    ("cold", " In cold weather, make sure to dress warmly."),
    ("hot", " In hot weather, stay hydrated and seek shade."),
];

#[derive(Debug, Default)]
pub struct CommonSense {
    recent: VecDeque<String>,
}

impl CommonSense {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the full pass against the local clock.
    pub fn enhance(&mut self, query: &str, response: &str) -> String {
        self.enhance_at(query, response, Local::now().naive_local())
    }

    /// Run the full pass as if the local time were `now`.
    pub fn enhance_at(&mut self, query: &str, response: &str, now: NaiveDateTime) -> String {
        let checked = check_consistency(query, response);
        let practical = add_practical_context(query, checked);
        let safe = apply_safety_filter(practical);
        let aware = add_contextual_awareness(query, safe, now);
        self.remember(&aware);
        aware
    }

    fn remember(&mut self, response: &str) {
        self.recent.push_back(response.to_string());
        while self.recent.len() > RECENT_LIMIT {
            self.recent.pop_front();
        }
    }

    /// Outputs of the most recent passes, oldest first.
    pub fn recent(&self) -> impl Iterator<Item = &str> {
        self.recent.iter().map(String::as_str)
    }
}

fn check_consistency(query: &str, response: &str) -> String {
    let q = query.to_lowercase();
    let r = response.to_lowercase();

    if q.contains("yesterday") && r.contains("tomorrow") {
        return format!("{TIME_CONFUSION}{response}");
    }

    let impossible = (r.contains("water") && r.contains("burn"))
        || (r.contains("ice") && r.contains("hot"))
        || (r.contains("fly") && q.contains("human") && !r.contains("without"));
    if impossible {
        return format!("{IMPOSSIBLE}{}", realistic_alternative(&q));
    }

    response.to_string()
}

fn realistic_alternative(query_lower: &str) -> &'static str {
    if query_lower.contains("fly") && query_lower.contains("human") {
        "Humans can't fly naturally, but we can use airplanes, helicopters, or other aircraft to travel through the air."
    } else if query_lower.contains("breathe underwater") {
        "Humans can't breathe underwater naturally, but we can use scuba gear or submarines to explore underwater."
    } else {
        "Let me provide a more realistic perspective on that."
    }
}

fn add_practical_context(query: &str, mut response: String) -> String {
    let q = query.to_lowercase();

    if let Some((_, advice)) = WEATHER_ADVICE.iter().find(|(word, _)| q.contains(word)) {
        response.push_str(advice);
    }
    for (words, advice) in PRACTICAL_ADVICE {
        if words.iter().any(|w| q.contains(w)) {
            response.push_str(advice);
        }
    }
    response
}

fn apply_safety_filter(response: String) -> String {
    let r = response.to_lowercase();
    if HARMFUL.iter().any(|k| r.contains(k)) {
        format!("{SAFETY_PREFIX}{response}{SAFETY_SUFFIX}")
    } else {
        response
    }
}

fn add_contextual_awareness(query: &str, response: String, now: NaiveDateTime) -> String {
    let q = query.to_lowercase();
    let hour = now.hour();
    let month = now.month();

    let mut response = if q.contains("good morning") && hour > 12 {
        format!("Actually, it's afternoon now, but good day to you too! {response}")
    } else if q.contains("good evening") && hour < 17 {
        format!("It's still daytime, but good day! {response}")
    } else {
        response
    };

    if matches!(month, 12 | 1 | 2) && q.contains("summer") {
        response = format!("Just to note, it's currently winter season. {response}");
    } else if matches!(month, 6..=8) && q.contains("winter") {
        response = format!("Just to note, it's currently summer season. {response}");
    }
    response
}
