//! Simple-selector classification
//!
//! [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
//! sorts every simple selector into one of three counted buckets (or
//! excludes it). This module maps one token, as produced by
//! [`crate::split::simple_selectors`], to its bucket.

use serde::Serialize;
use strum_macros::Display;

/// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
///
/// Pseudo-element prefixes that count at type level. Checked before the
/// generic colon rule so `:before` is never taken for a pseudo-class.
const PSEUDO_ELEMENTS: [&str; 5] = [
    ":before",
    ":after",
    ":first-line",
    ":first-letter",
    ":selection",
];

/// The specificity bucket of one simple selector.
///
/// [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "count the number of ID selectors in the selector (= A) / class
/// selectors, attributes selectors, and pseudo-classes (= B) / type
/// selectors and pseudo-elements (= C)"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum Bucket {
    /// ID selectors (`#main`) — the `a` column.
    #[strum(serialize = "id")]
    Id,
    /// Class selectors, attribute matchers, and pseudo-classes — the `b`
    /// column.
    #[strum(serialize = "class-like")]
    ClassLike,
    /// Type selectors and pseudo-elements — the `c` column.
    #[strum(serialize = "type-like")]
    TypeLike,
    /// The universal selector `*`; excluded from every count.
    #[strum(serialize = "uncounted")]
    Uncounted,
}

/// Classify one simple-selector token into its bucket.
///
/// Double-colon pseudo-element syntax collapses to a single colon first,
/// and `:not(...)` is specificity-transparent: it classifies as its
/// argument alone, contributing nothing itself
/// ([§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "The specificity of an :is(), :not(), or :has() pseudo-class is
/// replaced by the specificity of the most specific complex selector in
/// its selector list argument.").
///
/// Anything not matching a known leading delimiter is taken for a bare
/// type name. There is no grammar validation here; unrecognized syntax
/// degrades into the type bucket rather than erroring.
///
/// ```
/// use specificity::{Bucket, classify};
///
/// assert_eq!(classify("#main"), Bucket::Id);
/// assert_eq!(classify(":not(.active)"), Bucket::ClassLike);
/// assert_eq!(classify("::before"), Bucket::TypeLike);
/// ```
#[must_use]
pub fn classify(token: &str) -> Bucket {
    // "::before" and ":before" denote the same thing for counting
    let token = if token.starts_with("::") {
        &token[1..]
    } else {
        token
    };

    if let Some(inner) = token.strip_prefix(":not(") {
        let inner = inner.strip_suffix(')').unwrap_or(inner);
        return classify(inner);
    }

    if PSEUDO_ELEMENTS
        .iter()
        .any(|prefix| token.starts_with(prefix))
    {
        return Bucket::TypeLike;
    }

    match token.chars().next() {
        Some('.' | '[' | ':') => Bucket::ClassLike,
        Some('#') => Bucket::Id,
        Some('*') => Bucket::Uncounted,
        // Bare type/element name, or syntax we do not recognize
        _ => Bucket::TypeLike,
    }
}
