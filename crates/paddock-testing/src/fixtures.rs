//! Canned conversation and notification records.
//!
//! Every record is stamped relative to [`reference_now`], so time labels
//! come out the same on every run.

use chrono::{DateTime, Duration, TimeZone, Utc};
use paddock_ui::models::{ConversationPeer, LastMessage, ListingSummary};
use paddock_ui::{
    Conversation, Notification, NotificationKind, NotificationPriority, NotificationStatus,
};

/// 2025-06-01T12:00:00Z
const REFERENCE_EPOCH_SECS: i64 = 1_748_779_200;

pub fn reference_now() -> DateTime<Utc> {
    Utc.timestamp_opt(REFERENCE_EPOCH_SECS, 0)
        .single()
        .unwrap_or_default()
}

pub fn conversation(id: &str, first_name: &str, last_name: &str) -> Conversation {
    let listing_id = format!("listing-{id}");
    Conversation {
        id: id.to_string(),
        last_message: LastMessage {
            id: format!("message-{id}"),
            message: "Hayvan hâlâ satılık mı?".to_string(),
            created_at: reference_now() - Duration::hours(2),
            sender_id: format!("user-{id}"),
            listing_id: listing_id.clone(),
        },
        unread_count: 1,
        other_user: ConversationPeer {
            id: format!("user-{id}"),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            profile_image: None,
        },
        listing: ListingSummary {
            id: listing_id,
            title: format!("Simental düve {id}"),
            price: 85_000.0,
            images: Vec::new(),
        },
    }
}

pub fn notification(id: &str, title: &str, status: NotificationStatus) -> Notification {
    Notification {
        id: id.to_string(),
        user_id: "user-me".to_string(),
        kind: NotificationKind::Offer,
        priority: NotificationPriority::Medium,
        title: title.to_string(),
        message: "İlanınıza yeni bir teklif geldi".to_string(),
        data: serde_json::Value::Null,
        status,
        is_email_sent: false,
        is_push_sent: true,
        created_at: reference_now() - Duration::minutes(5),
        read_at: None,
    }
}

/// `count` conversations with ids `c0`, `c1`, …
pub fn conversations(count: usize) -> Vec<Conversation> {
    (0..count)
        .map(|index| conversation(&format!("c{index}"), "Ahmet", &format!("Kaya{index}")))
        .collect()
}

/// `count` notifications with ids `n0`, `n1`, …; even ones are unread.
pub fn notifications(count: usize) -> Vec<Notification> {
    (0..count)
        .map(|index| {
            let status = if index % 2 == 0 {
                NotificationStatus::Unread
            } else {
                NotificationStatus::Read
            };
            notification(&format!("n{index}"), &format!("Teklif {index}"), status)
        })
        .collect()
}
