//! Tests for the change detector

use notification_peek::{display_decision, should_display, DisplayDecision, NotificationSnapshot};

fn chat_message(ticker: &str, title: &str, posted_at_ms: i64) -> NotificationSnapshot {
    NotificationSnapshot::new("com.example.chat", 1)
        .with_tag("conversation-42")
        .with_ticker_text(ticker)
        .with_title(title)
        .with_posted_at_ms(posted_at_ms)
}

#[test]
fn test_new_message_in_conversation_is_displayed() {
    // Given: a conversation notification already on screen
    let old = chat_message("Alice: see you at 5", "Alice", 1_000);

    // When: a new message arrives in the same slot
    let new = chat_message("Alice: running late", "Alice", 2_000);

    // Then: the ticker difference wins before anything else is compared
    assert_eq!(display_decision(&old, &new), DisplayDecision::TickerChanged);
    assert!(should_display(&old, &new));
}

#[test]
fn test_unread_count_bump_is_displayed() {
    // Given: same ticker reposted with an updated title
    let old = chat_message("Alice: running late", "Alice", 2_000);
    let new = chat_message("Alice: running late", "Alice (2)", 2_000);

    // Then: falls through ticker to the title comparison
    assert_eq!(display_decision(&old, &new), DisplayDecision::TitleChanged);
    assert!(should_display(&old, &new));
}

#[test]
fn test_repost_with_newer_timestamp_is_displayed() {
    // Given: content identical, only the post time moved
    let old = chat_message("Alice: running late", "Alice", 2_000);
    let new = chat_message("Alice: running late", "Alice", 3_000);

    assert_eq!(
        display_decision(&old, &new),
        DisplayDecision::PostTimeChanged
    );
    assert!(should_display(&old, &new));
}

#[test]
fn test_exact_repost_is_suppressed() {
    // Given: the platform redelivers the same notification unchanged
    let old = chat_message("Alice: running late", "Alice", 2_000);
    let new = chat_message("Alice: running late", "Alice", 2_000);

    // Then: treated as the same notification event
    assert_eq!(display_decision(&old, &new), DisplayDecision::Unchanged);
    assert!(!should_display(&old, &new));
}

#[test]
fn test_ticker_appearing_counts_as_change() {
    // Given: old snapshot never carried a ticker
    let old = NotificationSnapshot::new("com.example.mail", 7)
        .with_title("Inbox")
        .with_posted_at_ms(1_000);

    // When: the update carries one
    let new = NotificationSnapshot::new("com.example.mail", 7)
        .with_ticker_text("3 new messages")
        .with_title("Inbox")
        .with_posted_at_ms(1_000);

    assert_eq!(display_decision(&old, &new), DisplayDecision::TickerChanged);
}

#[test]
fn test_title_disappearing_counts_as_change() {
    let old = NotificationSnapshot::new("com.example.mail", 7)
        .with_title("Inbox")
        .with_posted_at_ms(1_000);
    let new = NotificationSnapshot::new("com.example.mail", 7).with_posted_at_ms(1_000);

    assert_eq!(display_decision(&old, &new), DisplayDecision::TitleChanged);
}

#[test]
fn test_minimal_snapshots_with_no_optional_fields_are_equal() {
    // Given: two bare snapshots, every compared field absent or zero
    let old = NotificationSnapshot::new("com.example.bare", 0);
    let new = NotificationSnapshot::new("com.example.bare", 0);

    assert_eq!(display_decision(&old, &new), DisplayDecision::Unchanged);
    assert!(!should_display(&old, &new));
}

#[test]
fn test_body_text_never_triggers_display() {
    // Given: apps often rewrite the body while ticker/title stay put
    let old = chat_message("Alice: running late", "Alice", 2_000).with_text("old preview");
    let new = chat_message("Alice: running late", "Alice", 2_000).with_text("new preview");

    // Then: body is extraction-only, not part of the comparison
    assert!(!should_display(&old, &new));
}

fn snapshot_json(ticker: &str) -> String {
    format!(
        r#"{{
            "package_name": "com.example.chat",
            "id": 1,
            "tag": "conversation-42",
            "posted_at_ms": 2000,
            "ticker_text": "{}",
            "extras": {{ "title": "Alice" }}
        }}"#,
        ticker
    )
}

#[test]
fn test_decision_over_loaded_snapshot_files() {
    // Given: two captured snapshot files for the same slot, differing
    // only in ticker text
    let dir = tempfile::TempDir::new().unwrap();
    let old_path = dir.path().join("old.json");
    let new_path = dir.path().join("new.json");
    std::fs::write(&old_path, snapshot_json("Alice: see you at 5")).unwrap();
    std::fs::write(&new_path, snapshot_json("Alice: running late")).unwrap();

    // When: loading both and comparing
    let old = NotificationSnapshot::load(&old_path).unwrap();
    let new = NotificationSnapshot::load(&new_path).unwrap();

    // Then: the file round trip feeds the comparison unchanged
    assert_eq!(display_decision(&old, &new), DisplayDecision::TickerChanged);
    assert!(should_display(&old, &new));
}

#[test]
fn test_identical_snapshot_files_suppress() {
    // Given: the same capture written to both files
    let dir = tempfile::TempDir::new().unwrap();
    let old_path = dir.path().join("old.json");
    let new_path = dir.path().join("new.json");
    let capture = snapshot_json("Alice: running late");
    std::fs::write(&old_path, &capture).unwrap();
    std::fs::write(&new_path, &capture).unwrap();

    let old = NotificationSnapshot::load(&old_path).unwrap();
    let new = NotificationSnapshot::load(&new_path).unwrap();

    assert_eq!(display_decision(&old, &new), DisplayDecision::Unchanged);
    assert!(!should_display(&old, &new));
}

#[test]
fn test_update_sequence_over_a_conversation() {
    // Given: a realistic update stream for one slot
    let first = chat_message("Alice: hi", "Alice", 1_000);
    let second = chat_message("Alice: hi again", "Alice", 2_000);
    let third = chat_message("Alice: hi again", "Alice (2)", 2_000);
    let redelivered = chat_message("Alice: hi again", "Alice (2)", 2_000);

    // Then: each real update displays, the redelivery does not
    assert!(should_display(&first, &second)); // ticker changed
    assert!(should_display(&second, &third)); // title changed
    assert!(!should_display(&third, &redelivered)); // nothing changed
}
