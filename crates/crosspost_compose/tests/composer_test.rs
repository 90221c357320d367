//! Tests for per-platform publish request composition.

use crosspost_compose::{Composer, PublishDefaults};
use crosspost_core::{
    MediaDescriptor, MediaRef, PersistedText, PersistedVariant, PlatformRegistry, PublishRequest,
    ResolvedPublishRequest, StoredPost, WrappedText,
};
use serde_json::{Value, json};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("debug")
        .try_init();
}

fn parse(value: Value) -> PublishRequest {
    serde_json::from_value(value).expect("Valid publish request")
}

fn composer() -> Composer {
    Composer::new(PlatformRegistry::builtin(), PublishDefaults::default())
}

fn composer_with_board(board: &str) -> Composer {
    let defaults = PublishDefaults::builder().pinterest_board_name(board).build();
    Composer::new(PlatformRegistry::builtin(), defaults)
}

fn find<'a>(resolved: &'a [ResolvedPublishRequest], platform: &str) -> &'a ResolvedPublishRequest {
    resolved
        .iter()
        .find(|r| r.platform().as_str() == platform)
        .unwrap_or_else(|| panic!("No request for {platform}"))
}

fn post_data(resolved: &[ResolvedPublishRequest], platform: &str) -> Value {
    serde_json::to_value(find(resolved, platform).post_data()).expect("Serializable post data")
}

#[test]
fn test_variant_only_platform_is_included() {
    init_tracing();
    let mut request = parse(json!({
        "accountGroupId": "group-1",
        "content": "Base text",
        "platforms": ["reddit"],
        "variants": {"instagram": {"content": "IG text"}}
    }));

    let resolved = composer().compose(&mut request, None, "pk-1");

    let platforms: Vec<&str> = resolved.iter().map(|r| r.platform().as_str()).collect();
    assert_eq!(platforms, vec!["reddit", "instagram"]);
    assert_eq!(find(&resolved, "instagram").post_data().text(), "IG text");
    assert_eq!(find(&resolved, "reddit").post_data().text(), "Base text");
}

#[test]
fn test_output_serializes_one_platform_per_request() {
    let mut request = parse(json!({
        "content": "Hello",
        "platforms": ["x", "bluesky"],
        "media": ["https://cdn.example/base.jpg"]
    }));

    let resolved = composer().compose(&mut request, None, "pk-1");
    let value = serde_json::to_value(&resolved).expect("Serializable output");

    assert_eq!(
        value,
        json!([
            {
                "platforms": ["x"],
                "postData": {
                    "text": "Hello",
                    "mediaUrls": ["https://cdn.example/base.jpg"],
                    "profileKey": "pk-1"
                }
            },
            {
                "platforms": ["bluesky"],
                "postData": {
                    "text": "Hello",
                    "mediaUrls": ["https://cdn.example/base.jpg"],
                    "profileKey": "pk-1"
                }
            }
        ])
    );
}

#[test]
fn test_base_pinterest_options_used() {
    let mut request = parse(json!({
        "content": "Pin it",
        "platforms": ["pinterest"],
        "pinterestOptions": {"boardName": "BaseBoard"}
    }));

    let resolved = composer_with_board("Lunary").compose(&mut request, None, "pk");

    let data = post_data(&resolved, "pinterest");
    assert_eq!(data["pinterestOptions"]["boardName"], "BaseBoard");
}

#[test]
fn test_environment_board_default_when_no_bag_anywhere() {
    let mut request = parse(json!({"content": "Pin it", "platforms": ["pinterest"]}));

    let resolved = composer_with_board("Lunary").compose(&mut request, None, "pk");

    let data = post_data(&resolved, "pinterest");
    assert_eq!(data["pinterestOptions"], json!({"boardName": "Lunary"}));
}

#[test]
fn test_environment_board_id_fallback() {
    let defaults = PublishDefaults::from_lookup(|name| {
        (name == "PINTEREST_BOARD_ID").then(|| "board-42".to_string())
    });
    let composer = Composer::new(PlatformRegistry::builtin(), defaults);
    let mut request = parse(json!({"platforms": ["pinterest"]}));

    let resolved = composer.compose(&mut request, None, "pk");

    let data = post_data(&resolved, "pinterest");
    assert_eq!(data["pinterestOptions"]["boardName"], "board-42");
}

#[test]
fn test_no_option_bag_without_any_source() {
    let mut request = parse(json!({"content": "Hi", "platforms": ["pinterest", "x"]}));

    let resolved = composer().compose(&mut request, None, "pk");

    assert!(find(&resolved, "pinterest").post_data().options().is_none());
    let data = post_data(&resolved, "x");
    assert!(data.get("twitterOptions").is_none());
}

#[test]
fn test_variant_media_wins_over_base_media() {
    let mut request = parse(json!({
        "content": "Moon phases",
        "platforms": ["instagram", "x"],
        "media": ["https://elsewhere.example/base.jpg"],
        "variants": {
            "instagram": {
                "media": ["https://cdn.example/ig1.jpg", "https://cdn.example/ig2.jpg"]
            }
        }
    }));

    let resolved = composer().compose(&mut request, None, "pk");

    assert_eq!(
        find(&resolved, "instagram").post_data().media_urls(),
        &vec![
            "https://cdn.example/ig1.jpg".to_string(),
            "https://cdn.example/ig2.jpg".to_string()
        ]
    );
    assert_eq!(
        find(&resolved, "x").post_data().media_urls(),
        &vec!["https://elsewhere.example/base.jpg".to_string()]
    );
}

#[test]
fn test_reddit_variant_bag_replaces_base_bag_whole() {
    let mut request = parse(json!({
        "content": "Discussion",
        "platforms": ["reddit"],
        "redditOptions": {"title": "Base Title", "subreddit": "base", "flairId": "f-1"},
        "variants": {
            "reddit": {"redditOptions": {"title": "Variant Title", "subreddit": "variants"}}
        }
    }));

    let resolved = composer().compose(&mut request, None, "pk");

    let data = post_data(&resolved, "reddit");
    assert_eq!(
        data["redditOptions"],
        json!({"title": "Variant Title", "subreddit": "variants"})
    );
}

#[test]
fn test_legacy_alias_feeds_option_bag() {
    let mut request = parse(json!({
        "platforms": ["reddit", "x"],
        "reddit": {"title": "Legacy", "subreddit": "astrology"},
        "variants": {"x": {"x": {"thread": true}}}
    }));

    let resolved = composer().compose(&mut request, None, "pk");

    assert_eq!(
        post_data(&resolved, "reddit")["redditOptions"],
        json!({"title": "Legacy", "subreddit": "astrology"})
    );
    assert_eq!(
        post_data(&resolved, "x")["twitterOptions"],
        json!({"thread": true})
    );
    assert!(!request.options().contains("reddit"));
}

#[test]
fn test_persisted_variant_outranks_base_request() {
    let stored = StoredPost::new().with_variant(
        "instagram",
        PersistedVariant::new(
            Some(PersistedText::Wrapped(WrappedText {
                text: "Saved caption".to_string(),
            })),
            vec![MediaRef::from(MediaDescriptor::new(
                "url-image",
                "https://cdn.example/saved.jpg",
            ))],
            Some(json!(r#"{"instagramOptions":{"shareReelsFeed":true}}"#)),
        ),
    );
    let mut request = parse(json!({
        "content": "Base text",
        "platforms": ["instagram"],
        "media": ["https://cdn.example/base.jpg"],
        "instagramOptions": {"shareReelsFeed": false}
    }));

    let resolved = composer().compose(&mut request, Some(&stored), "pk");

    let data = post_data(&resolved, "instagram");
    assert_eq!(data["text"], "Saved caption");
    assert_eq!(data["mediaUrls"], json!(["https://cdn.example/saved.jpg"]));
    assert_eq!(data["instagramOptions"], json!({"shareReelsFeed": true}));
}

#[test]
fn test_request_variant_outranks_persisted_variant() {
    let stored: StoredPost = serde_json::from_value(json!({
        "reddit": {
            "text": "Saved text",
            "media": [{"type": "url-image", "url": "https://cdn.example/saved.jpg"}],
            "platformOptions": "{\"redditOptions\":{\"title\":\"Saved\",\"subreddit\":\"saved\"}}"
        }
    }))
    .expect("Valid stored post");
    let mut request = parse(json!({
        "platforms": ["reddit"],
        "variants": {
            "reddit": {
                "content": "Fresh text",
                "media": [{"type": "url-image", "url": "https://cdn.example/fresh.jpg"}],
                "redditOptions": {"title": "Fresh", "subreddit": "fresh"}
            }
        }
    }));

    let resolved = composer().compose(&mut request, Some(&stored), "pk");

    let data = post_data(&resolved, "reddit");
    assert_eq!(data["text"], "Fresh text");
    assert_eq!(data["mediaUrls"], json!(["https://cdn.example/fresh.jpg"]));
    assert_eq!(data["redditOptions"], json!({"title": "Fresh", "subreddit": "fresh"}));
}

#[test]
fn test_malformed_persisted_options_fall_through_to_base() {
    init_tracing();
    let stored: StoredPost = serde_json::from_value(json!({
        "reddit": {"text": "Saved", "platformOptions": "{\"redditOptions\": {oops"}
    }))
    .expect("Valid stored post");
    let mut request = parse(json!({
        "platforms": ["reddit"],
        "redditOptions": {"title": "Base Title", "subreddit": "base"}
    }));

    let resolved = composer().compose(&mut request, Some(&stored), "pk");

    let data = post_data(&resolved, "reddit");
    assert_eq!(data["redditOptions"], json!({"title": "Base Title", "subreddit": "base"}));
    assert_eq!(data["text"], "Saved");
}

#[test]
fn test_malformed_persisted_pinterest_options_fall_to_environment() {
    let stored: StoredPost = serde_json::from_value(json!({
        "pinterest": {"platformOptions": "not json"}
    }))
    .expect("Valid stored post");
    let mut request = parse(json!({"platforms": ["pinterest"]}));

    let resolved = composer_with_board("Lunary").compose(&mut request, Some(&stored), "pk");

    assert_eq!(
        post_data(&resolved, "pinterest")["pinterestOptions"],
        json!({"boardName": "Lunary"})
    );
}

#[test]
fn test_empty_variant_fields_fall_through() {
    let mut request = parse(json!({
        "content": "Base text",
        "media": ["https://cdn.example/base.jpg"],
        "platforms": ["bluesky"],
        "variants": {"bluesky": {"content": "", "media": []}}
    }));

    let resolved = composer().compose(&mut request, None, "pk");

    let data = post_data(&resolved, "bluesky");
    assert_eq!(data["text"], "Base text");
    assert_eq!(data["mediaUrls"], json!(["https://cdn.example/base.jpg"]));
}

#[test]
fn test_unknown_platform_gets_synthesized_key_and_base_text() {
    let mut request = parse(json!({
        "content": "Hello from the past",
        "platforms": ["myspace"],
        "myspaceOptions": {"mood": "nostalgic"}
    }));

    let resolved = composer().compose(&mut request, None, "pk");

    let data = post_data(&resolved, "myspace");
    assert_eq!(data["text"], "Hello from the past");
    assert_eq!(data["mediaUrls"], json!([]));
    assert_eq!(data["myspaceOptions"], json!({"mood": "nostalgic"}));
}

#[test]
fn test_profile_key_and_schedule_date_pass_through() {
    let mut request = parse(json!({
        "content": "Scheduled",
        "platforms": ["x"],
        "scheduleDate": "2026-12-21T08:00:00Z",
        "variants": {"threads": {}}
    }));

    let resolved = composer().compose(&mut request, None, "profile-key-123");

    for item in &resolved {
        let data = serde_json::to_value(item.post_data()).expect("Serializable post data");
        assert_eq!(data["profileKey"], "profile-key-123");
        assert_eq!(data["scheduleDate"], "2026-12-21T08:00:00Z");
    }
}

#[test]
fn test_missing_text_resolves_to_empty_string() {
    let mut request = parse(json!({"platforms": ["x"]}));

    let resolved = composer().compose(&mut request, None, "pk");

    assert_eq!(find(&resolved, "x").post_data().text(), "");
    assert!(find(&resolved, "x").post_data().media_urls().is_empty());
}

#[test]
fn test_compose_twice_gives_same_output() {
    let mut request = parse(json!({
        "content": "Again",
        "platforms": ["reddit"],
        "reddit": {"title": "Legacy"}
    }));
    let composer = composer();

    let first = composer.compose(&mut request, None, "pk");
    let second = composer.compose(&mut request, None, "pk");

    assert_eq!(first, second);
}

#[test]
fn test_null_media_and_variants_fall_through() {
    init_tracing();
    let stored: StoredPost = serde_json::from_value(json!({
        "reddit": {"text": "Saved text", "media": null}
    }))
    .expect("Valid stored post");
    let mut request = parse(json!({
        "content": "Base text",
        "media": ["https://cdn.example/base.jpg"],
        "platforms": ["reddit"],
        "variants": {"instagram": null, "reddit": {"media": null}}
    }));

    let resolved = composer().compose(&mut request, Some(&stored), "pk");

    let platforms: Vec<&str> = resolved.iter().map(|r| r.platform().as_str()).collect();
    assert_eq!(platforms, vec!["reddit", "instagram"]);

    let reddit = post_data(&resolved, "reddit");
    assert_eq!(reddit["text"], "Saved text");
    assert_eq!(reddit["mediaUrls"], json!(["https://cdn.example/base.jpg"]));

    let instagram = post_data(&resolved, "instagram");
    assert_eq!(instagram["text"], "Base text");
    assert_eq!(instagram["mediaUrls"], json!(["https://cdn.example/base.jpg"]));
}

#[test]
fn test_null_base_media_resolves_to_empty_list() {
    let mut request = parse(json!({"content": "hi", "platforms": ["x"], "media": null}));

    let resolved = composer().compose(&mut request, None, "pk");

    assert!(resolved[0].post_data().media_urls().is_empty());
    assert_eq!(resolved[0].post_data().text(), "hi");
}
