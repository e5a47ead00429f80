//! Canonical data sets shared by the engine, runtime and CLI tests.

use chrono::{NaiveDate, NaiveDateTime};
use hypodesk_types::wire::HypothesisRecord;
use hypodesk_types::{FeedItem, RecordId, Role, Session, Topic, TopicStatus};

pub const SUMMARY: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";

/// Status of topic `i` (0-based) in the 25-topic data set: five each of
/// Draft, Submitted, Reviewed, Approved, then five more Draft.
pub fn fixture_status(i: usize) -> TopicStatus {
    match i {
        0..5 => TopicStatus::Draft,
        5..10 => TopicStatus::Submitted,
        10..15 => TopicStatus::Reviewed,
        15..20 => TopicStatus::Approved,
        _ => TopicStatus::Draft,
    }
}

/// 2025-10-30, the date every fixture topic was last updated, at midnight.
pub fn fixture_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 10, 30)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap()
}

/// The 25 dashboard topics.
pub fn topics() -> Vec<Topic> {
    (0..25)
        .map(|i| Topic {
            id: RecordId::from(i as u64 + 1),
            name: format!("Topic Name {}", i + 1),
            summary: SUMMARY.to_string(),
            status: fixture_status(i).into(),
            updated_at: Some(fixture_timestamp()),
        })
        .collect()
}

/// The same 25 topics as the backend sends them.
pub fn topic_records() -> Vec<HypothesisRecord> {
    topics()
        .into_iter()
        .map(|t| HypothesisRecord {
            hypothesis_id: t.id,
            hypothesis_nm: t.name,
            hypothesis_smry_txt: Some(t.summary),
            hypothesis_rtnle_smry_txt: None,
            hypothesis_last_updtd_dt: t.updated_at.map(|ts| ts.format("%Y-%m-%d").to_string()),
            hypothesis_status: Some(t.status.label().to_string()),
            lobs: Vec::new(),
            category: None,
            market: None,
        })
        .collect()
}

/// The nine-item activity feed.
pub fn feed_items() -> Vec<FeedItem> {
    hypodesk_runtime::content::default_feed()
}

/// A feed item whose text is exactly `len` characters of body.
pub fn feed_item_of_len(title: &str, len: usize) -> FeedItem {
    FeedItem {
        tag: "Information".to_string(),
        title: title.to_string(),
        body: Some("x".repeat(len)),
        bullets: Vec::new(),
        footer: None,
        link: None,
    }
}

pub fn session(user_id: &str) -> Session {
    Session {
        user_id: user_id.to_string(),
        user_name: format!("Test User {}", user_id),
        role: Role::User,
        application_code: "compintel".to_string(),
        signed_in_at: chrono::Utc::now(),
    }
}
