//! CSS selector specificity calculation.
//!
//! # Scope
//!
//! This crate implements the specificity half of the CSS cascade per
//! [Selectors Level 4 § 17](https://www.w3.org/TR/selectors-4/#specificity-rules):
//!
//! - **Selector Splitter** — selector-list members (top-level commas,
//!   nesting-aware) and simple-selector tokens within one member
//! - **Simple-Selector Classifier** — maps each token to its ID /
//!   class-like / type-like bucket, with `:not()` transparency and
//!   `::`-to-`:` pseudo-element normalization
//! - **Specificity Aggregator** — folds tokens into an `(a, b, c)`
//!   triple, encodes a triple as one comparable integer at a positional
//!   base (default 256), and picks the winning member of a selector list
//!
//! Input is selector *text*; nothing here matches against a document.
//!
//! ```
//! use specificity::{Specificity, specificity, specificity_value};
//!
//! assert_eq!(specificity("div.foo"), Specificity(0, 1, 1));
//! assert_eq!(specificity_value("a.x, #b"), 65536);
//! ```
//!
//! # Not Implemented
//!
//! - Selector grammar validation (unrecognized syntax degrades into the
//!   type bucket rather than erroring)
//! - Selector matching against elements
//! - Nested/scoped selector semantics beyond flattening to simple
//!   selectors

/// Triples, positional folding, and selector-list maximum per
/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules).
pub mod calc;
/// Simple-selector bucket classification per
/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules).
pub mod classify;
/// Diagnostic declaration output for debugging cascade order.
pub mod debug;
/// Selector-list and simple-selector splitting per
/// [§ 4 Selector syntax](https://www.w3.org/TR/selectors-4/#syntax).
pub mod split;
/// One-shot warnings for known limitations.
pub mod warning;

// Re-exports for convenience
pub use calc::{DEFAULT_BASE, Specificity, max_specificity};
pub use classify::{Bucket, classify};
pub use debug::{Declaration, debug_declarations};
pub use split::{simple_selectors, split_selector_list, strip_combinators};

/// Compute the specificity triple of a selector.
///
/// The input may be a single simple, compound, or complex selector, or a
/// comma-separated selector list; for a list the highest-specificity
/// member's triple is returned (first-occurring on ties). Pure function:
/// equal inputs always yield equal output.
#[must_use]
pub fn specificity(input: &str) -> Specificity {
    max_specificity(input)
}

/// Compute a selector's specificity as one comparable integer.
///
/// Same selection rule as [`specificity`], with the winning triple
/// folded at [`DEFAULT_BASE`]: `a·256² + b·256 + c`.
#[must_use]
pub fn specificity_value(input: &str) -> u64 {
    max_specificity(input).value()
}
