// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Postal-code extraction and query augmentation.

use std::sync::LazyLock;

use regex::Regex;

static PINCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{6}\b").expect("pincode pattern is valid"));

/// Location details folded into a search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationHint {
    pub pincode: String,
}

/// The first standalone six-digit number, if it does not start with `0`.
pub fn extract_pincode(query: &str) -> Option<&str> {
    let found = PINCODE.find(query)?.as_str();
    (!found.starts_with('0')).then_some(found)
}

/// Rewrite a query that mentions a postal code into `"<rest> near <pincode> India"`.
///
/// The code's own "pin code"/"pincode" mention and any "near me" are removed
/// from the rest. Queries without a code come back unchanged.
pub fn augment_with_location(query: &str) -> (String, Option<LocationHint>) {
    let Some(pincode) = extract_pincode(query) else {
        return (query.to_string(), None);
    };

    let base = query
        .replace(&format!("pin code {pincode}"), "")
        .replace(&format!("pincode {pincode}"), "")
        .replace("near me", "");
    let enhanced = format!("{} near {pincode} India", base.trim());
    (
        enhanced,
        Some(LocationHint {
            pincode: pincode.to_string(),
        }),
    )
}
