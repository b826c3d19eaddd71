//! Integration tests for simple-selector classification.

use specificity::{Bucket, classify};

#[test]
fn test_classify_id() {
    assert_eq!(classify("#main"), Bucket::Id);
}

#[test]
fn test_classify_class() {
    assert_eq!(classify(".highlight"), Bucket::ClassLike);
}

#[test]
fn test_classify_attribute() {
    assert_eq!(classify("[href]"), Bucket::ClassLike);
    assert_eq!(classify("[type=\"text\"]"), Bucket::ClassLike);
}

#[test]
fn test_classify_pseudo_class() {
    assert_eq!(classify(":hover"), Bucket::ClassLike);
    assert_eq!(classify(":nth-child(2)"), Bucket::ClassLike);
}

#[test]
fn test_classify_type() {
    assert_eq!(classify("div"), Bucket::TypeLike);
    assert_eq!(classify("h1"), Bucket::TypeLike);
}

#[test]
fn test_classify_universal() {
    assert_eq!(classify("*"), Bucket::Uncounted);
}

#[test]
fn test_classify_pseudo_elements_count_as_type() {
    // [§ 17] "count the number of type selectors and pseudo-elements (= C)"
    // — checked before the generic ':' rule
    for token in [
        ":before",
        ":after",
        ":first-line",
        ":first-letter",
        ":selection",
    ] {
        assert_eq!(classify(token), Bucket::TypeLike, "{token}");
    }
}

#[test]
fn test_classify_double_colon_collapses() {
    assert_eq!(classify("::before"), Bucket::TypeLike);
    assert_eq!(classify("::selection"), Bucket::TypeLike);
}

#[test]
fn test_classify_not_is_transparent() {
    // :not() contributes its argument's bucket, once, and nothing itself
    assert_eq!(classify(":not(.active)"), Bucket::ClassLike);
    assert_eq!(classify(":not(#main)"), Bucket::Id);
    assert_eq!(classify(":not(div)"), Bucket::TypeLike);
    assert_eq!(classify(":not(*)"), Bucket::Uncounted);
}

#[test]
fn test_classify_nested_not() {
    assert_eq!(classify(":not(:not(.active))"), Bucket::ClassLike);
}

#[test]
fn test_classify_unrecognized_falls_back_to_type() {
    // Permissive default: no grammar validation
    assert_eq!(classify("weird-token"), Bucket::TypeLike);
    assert_eq!(classify("123"), Bucket::TypeLike);
}

#[test]
fn test_bucket_display_names() {
    assert_eq!(Bucket::Id.to_string(), "id");
    assert_eq!(Bucket::ClassLike.to_string(), "class-like");
    assert_eq!(Bucket::TypeLike.to_string(), "type-like");
    assert_eq!(Bucket::Uncounted.to_string(), "uncounted");
}
