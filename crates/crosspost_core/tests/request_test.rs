//! Tests for publish request parsing and caller-side validation.

use crosspost_core::{
    MediaRef, Platform, PlatformRegistry, PublishRequest, PublishRequestBuilder, VariantOverride,
    media_urls,
};
use crosspost_error::ValidationErrorKind;
use indexmap::IndexMap;
use serde_json::json;

fn parse(value: serde_json::Value) -> PublishRequest {
    serde_json::from_value(value).expect("Valid publish request")
}

#[test]
fn test_parse_full_request() {
    let request = parse(json!({
        "accountGroupId": "group-1",
        "content": "Full moon in Aries",
        "media": ["https://cdn.example/a.jpg", {"type": "url-image", "url": "https://cdn.example/b.jpg"}],
        "platforms": ["x", "reddit"],
        "scheduleDate": "2026-11-01T09:00:00Z",
        "redditOptions": {"subreddit": "astrology"},
        "variants": {
            "instagram": {"content": "IG caption", "pinterest": {"boardName": "Moon"}}
        }
    }));

    assert_eq!(request.account_group_id().as_deref(), Some("group-1"));
    assert_eq!(request.content().as_deref(), Some("Full moon in Aries"));
    assert_eq!(
        media_urls(request.media()),
        vec!["https://cdn.example/a.jpg", "https://cdn.example/b.jpg"]
    );
    assert_eq!(request.schedule_date().as_deref(), Some("2026-11-01T09:00:00Z"));
    assert!(request.options().contains("redditOptions"));

    let variant = &request.variants()[&Platform::from("instagram")];
    assert_eq!(variant.content().as_deref(), Some("IG caption"));
    assert!(variant.options().contains("pinterest"));
}

#[test]
fn test_null_option_field_counts_as_absent() {
    let request = parse(json!({"platforms": ["x"], "twitterOptions": null}));
    assert!(!request.options().contains("twitterOptions"));
    assert!(request.options().get("twitterOptions").is_none());
}

#[test]
fn test_target_platforms_base_first_then_variant_only() {
    let request = parse(json!({
        "platforms": ["reddit", "x"],
        "variants": {"instagram": {}, "x": {}, "bluesky": {}}
    }));

    let targets: Vec<String> = request
        .target_platforms()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(targets, vec!["reddit", "x", "instagram", "bluesky"]);
}

#[test]
fn test_target_platforms_collapses_repeats() {
    let request = parse(json!({"platforms": ["x", "x", "reddit"]}));
    assert_eq!(request.target_platforms().len(), 2);
}

#[test]
fn test_validate_accepts_variant_only_request() {
    let request = parse(json!({
        "accountGroupId": "group-1",
        "variants": {"instagram": {"content": "hi"}}
    }));
    assert!(request.validate().is_ok());
}

#[test]
fn test_validate_rejects_missing_account_group() {
    let request = parse(json!({"accountGroupId": "   ", "platforms": ["x"]}));
    let err = request.validate().expect_err("Blank group must fail");
    assert_eq!(err.kind, ValidationErrorKind::MissingAccountGroup);
}

#[test]
fn test_validate_rejects_request_without_targets() {
    let request = parse(json!({"accountGroupId": "group-1", "content": "hi"}));
    let err = request.validate().expect_err("No targets must fail");
    assert_eq!(err.kind, ValidationErrorKind::NoTargetPlatform);
}

#[test]
fn test_builder_matches_parsed_request() {
    let mut variants = IndexMap::new();
    variants.insert(Platform::from("instagram"), VariantOverride::default());

    let built = PublishRequestBuilder::default()
        .account_group_id(Some("group-1".to_string()))
        .content(Some("Hello".to_string()))
        .media(vec![MediaRef::from("https://cdn.example/a.jpg".to_string())])
        .platforms(vec![Platform::from("x")])
        .variants(variants)
        .build()
        .expect("Failed to build request");

    let parsed = parse(json!({
        "accountGroupId": "group-1",
        "content": "Hello",
        "media": ["https://cdn.example/a.jpg"],
        "platforms": ["x"],
        "variants": {"instagram": {}}
    }));

    assert_eq!(built, parsed);
}

#[test]
fn test_descriptor_without_url_is_skipped() {
    let request = parse(json!({
        "platforms": ["x"],
        "media": [{"type": "url-image"}, "https://cdn.example/ok.jpg"]
    }));
    assert_eq!(media_urls(request.media()), vec!["https://cdn.example/ok.jpg"]);
}

#[test]
fn test_builtin_registry_covers_required_platforms() {
    let registry = PlatformRegistry::builtin();
    for name in ["base", "instagram", "reddit", "pinterest", "x", "bluesky"] {
        assert!(registry.contains(name), "missing {name}");
    }
    assert!(!registry.contains("myspace"));
}

#[test]
fn test_null_media_reads_as_empty() {
    let request = parse(json!({
        "platforms": ["x"],
        "content": "hi",
        "media": null,
        "variants": {"x": {"media": null}}
    }));
    assert!(request.media().is_empty());
    assert!(request.variants()[&Platform::from("x")].media().is_empty());
}

#[test]
fn test_null_variant_reads_as_empty_override() {
    let request = parse(json!({"variants": {"instagram": null}}));
    assert_eq!(
        request.variants().get(&Platform::from("instagram")),
        Some(&VariantOverride::default())
    );
    assert_eq!(request.target_platforms(), vec![Platform::from("instagram")]);
}

#[test]
fn test_null_variants_and_platforms_read_as_empty() {
    let request = parse(json!({"platforms": null, "variants": null, "content": "hi"}));
    assert!(request.platforms().is_empty());
    assert!(request.variants().is_empty());
    assert!(request.options().is_empty());
}

#[test]
fn test_stored_post_null_media_and_entry() {
    let stored: crosspost_core::StoredPost = serde_json::from_value(json!({
        "reddit": {"text": "t", "media": null},
        "x": null
    }))
    .expect("Valid stored post");

    let reddit = stored
        .variant(&Platform::from("reddit"))
        .expect("Reddit variant");
    assert!(reddit.media().is_empty());
    assert_eq!(reddit.text().as_ref().map(|text| text.as_str()), Some("t"));
    assert_eq!(
        stored.variant(&Platform::from("x")),
        Some(&crosspost_core::PersistedVariant::default())
    );
}
