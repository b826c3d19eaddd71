//! Specificity triples, folding, and selector-list maximum
//!
//! [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
//! "A selector's specificity is calculated for a given element as follows:
//!  - count the number of ID selectors in the selector (= A)
//!  - count the number of class selectors, attributes selectors, and
//!    pseudo-classes in the selector (= B)
//!  - count the number of type selectors and pseudo-elements in the
//!    selector (= C)
//!
//! Specificities are compared by comparing the three components in order."

use std::fmt;

use serde::Serialize;

use crate::classify::{Bucket, classify};
use crate::split::{simple_selectors, split_selector_list, strip_combinators};
use crate::warning::warn_once;

/// Positional base used to fold a triple into one comparable integer.
///
/// With base 256, `#id` folds to 65536 and `div.foo` to 257. Folded
/// comparison matches triple comparison as long as every count stays
/// below the base; see [`Specificity::value_with_base`].
pub const DEFAULT_BASE: u64 = 256;

/// [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules)
///
/// Specificity triple `(a, b, c)`: ID count, class/attribute/pseudo-class
/// count, type/pseudo-element count.
///
/// The derived ordering is lexicographic on `(a, b, c)`, which is exactly
/// the CSS comparison — one ID outweighs any number of classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with `(a, b, c)` components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }

    /// Compute the specificity of one complex selector.
    ///
    /// Combinator punctuation is deleted, the text is split into simple
    /// selectors, and each one increments the counter of its bucket.
    /// The universal selector increments nothing. An empty or
    /// whitespace-only selector yields `(0, 0, 0)`.
    #[must_use]
    pub fn of_selector(selector: &str) -> Self {
        let flattened = strip_combinators(selector);
        let mut spec = Self::default();
        for token in simple_selectors(&flattened) {
            match classify(&token) {
                Bucket::Id => spec.0 += 1,
                Bucket::ClassLike => spec.1 += 1,
                Bucket::TypeLike => spec.2 += 1,
                Bucket::Uncounted => {}
            }
        }
        spec
    }

    /// Fold the triple into a single integer at [`DEFAULT_BASE`].
    #[must_use]
    pub fn value(self) -> u64 {
        self.value_with_base(DEFAULT_BASE)
    }

    /// Fold the triple into `a·base² + b·base + c`.
    ///
    /// Comparing folded values is equivalent to comparing triples
    /// provided every count stays below `base`. A count at or above the
    /// base carries into the next positional column, so folded
    /// comparison can disagree with triple comparison for such inputs.
    /// That is a documented limitation of the encoding, reported through
    /// a one-shot warning rather than "fixed"; callers with pathological
    /// selectors should pass a larger base.
    #[must_use]
    pub fn value_with_base(self, base: u64) -> u64 {
        let Self(a, b, c) = self;
        if [a, b, c].iter().any(|&count| u64::from(count) >= base) {
            warn_once(
                "calc",
                &format!("bucket count in ({self}) reaches base {base}; folded values may misorder"),
            );
        }
        u64::from(a)
            .saturating_mul(base)
            .saturating_mul(base)
            .saturating_add(u64::from(b).saturating_mul(base))
            .saturating_add(u64::from(c))
    }
}

impl fmt::Display for Specificity {
    /// Render the triple as `"a, b, c"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

/// Compute the highest specificity across a selector list.
///
/// The input may be a single selector or comma-separated members; each
/// member's triple is folded at [`DEFAULT_BASE`] and the member with the
/// largest folded value wins. When several members tie for the maximum
/// their triples are identical (the fold is injective below the base),
/// and the first-occurring member is the one returned. The input is
/// never mutated or reordered; an empty list yields `(0, 0, 0)`.
#[must_use]
pub fn max_specificity(input: &str) -> Specificity {
    let mut best: Option<(u64, Specificity)> = None;

    for member in split_selector_list(input) {
        let spec = Specificity::of_selector(&member);
        let value = spec.value();
        if best.is_none_or(|(best_value, _)| value > best_value) {
            best = Some((value, spec));
        }
    }

    best.map_or_else(Specificity::default, |(_, spec)| spec)
}
