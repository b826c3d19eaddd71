//! Diagnostic declaration emission
//!
//! A debugging aid for inspecting cascade order: renders a selector's
//! specificity as two ready-made declarations that can be dropped into
//! generated stylesheet output next to the rule under inspection. This
//! is diagnostic output only — the fields are not real CSS properties
//! and are not meant for production stylesheets.

use serde::Serialize;

use crate::calc::max_specificity;

/// A property-like name/value pair, already stringified for emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// Field name.
    pub name: String,
    /// Field value.
    pub value: String,
}

/// Render the two diagnostic fields for a selector (or selector list):
/// `specificity`, the winning triple as `"a, b, c"`, and
/// `specificity-value`, the same triple folded at the default base.
///
/// ```
/// let [triple, folded] = specificity::debug_declarations("a.x, #b");
/// assert_eq!(triple.value, "1, 0, 0");
/// assert_eq!(folded.value, "65536");
/// ```
#[must_use]
pub fn debug_declarations(selector: &str) -> [Declaration; 2] {
    let spec = max_specificity(selector);
    [
        Declaration {
            name: "specificity".to_string(),
            value: spec.to_string(),
        },
        Declaration {
            name: "specificity-value".to_string(),
            value: spec.value().to_string(),
        },
    ]
}
