use super::*;
use chrono::{TimeZone, Utc};

const CONVERSATION_JSON: &str = r#"{
    "_id": "user-42",
    "last_message": {
        "id": "msg-1",
        "message": "Inek hala satılık mı?",
        "created_at": "2025-05-30T08:15:00.123000",
        "sender_id": "user-42",
        "listing_id": "listing-7"
    },
    "unread_count": 12,
    "other_user": {
        "id": "user-42",
        "first_name": "elif",
        "last_name": "Kaya",
        "profile_image": null
    },
    "listing": {
        "id": "listing-7",
        "title": "Simental düve",
        "price": 48500,
        "images": []
    }
}"#;

const NOTIFICATION_JSON: &str = r#"{
    "id": "n-1",
    "user_id": "me",
    "type": "offer",
    "priority": "high",
    "title": "Yeni teklif",
    "message": "İlanınıza 45.000 TL teklif geldi",
    "data": {"listing_id": "listing-7"},
    "status": "unread",
    "is_email_sent": false,
    "is_push_sent": true,
    "created_at": "2025-05-30T08:15:00Z",
    "read_at": null
}"#;

#[test]
fn conversation_from_api_json() {
    let conversation: Conversation = serde_json::from_str(CONVERSATION_JSON).unwrap();
    assert_eq!(conversation.id, "user-42");
    assert_eq!(conversation.unread_count, 12);
    assert_eq!(conversation.other_user.profile_image, None);
    assert_eq!(
        conversation.last_message.created_at,
        Utc.with_ymd_and_hms(2025, 5, 30, 8, 15, 0).unwrap() + chrono::Duration::milliseconds(123)
    );
    assert_eq!(conversation.avatar_initial(), Some('E'));
    assert_eq!(conversation.unread_badge().as_deref(), Some("9+"));
    assert_eq!(conversation.price_label(), "₺48.500");
}

#[test]
fn conversation_route_names_peer_and_listing() {
    let conversation: Conversation = serde_json::from_str(CONVERSATION_JSON).unwrap();
    assert_eq!(
        conversation.chat_route(),
        ChatRoute {
            other_user_id: "user-42".into(),
            listing_id: "listing-7".into(),
            other_user_name: "elif Kaya".into(),
            listing_title: "Simental düve".into(),
        }
    );
}

#[test]
fn notification_from_api_json() {
    let notification: Notification = serde_json::from_str(NOTIFICATION_JSON).unwrap();
    assert_eq!(notification.kind, NotificationKind::Offer);
    assert_eq!(notification.priority, NotificationPriority::High);
    assert!(notification.is_unread());
    assert_eq!(notification.read_at, None);
    assert_eq!(notification.icon(), "cash");
    assert_eq!(notification.data["listing_id"], "listing-7");
}

#[test]
fn unknown_notification_type_and_priority_degrade() {
    let json = NOTIFICATION_JSON
        .replace("\"offer\"", "\"campaign\"")
        .replace("\"high\"", "\"urgent\"");
    let notification: Notification = serde_json::from_str(&json).unwrap();
    assert_eq!(notification.kind, NotificationKind::Other);
    assert_eq!(notification.priority, NotificationPriority::Unknown);
    assert_eq!(notification.icon(), "notifications");
}

#[test]
fn minimal_notification_uses_defaults() {
    let json = r#"{
        "id": "n-2",
        "type": "security",
        "priority": "critical",
        "title": "Yeni giriş",
        "message": "Hesabınıza yeni bir cihazdan giriş yapıldı",
        "status": "read",
        "created_at": "2025-05-30T08:15:00"
    }"#;
    let notification: Notification = serde_json::from_str(json).unwrap();
    assert!(!notification.is_unread());
    assert!(notification.data.is_null());
    assert!(!notification.is_push_sent);
}

#[test]
fn mark_read_stamps_time() {
    let mut notification: Notification = serde_json::from_str(NOTIFICATION_JSON).unwrap();
    let at = Utc.with_ymd_and_hms(2025, 5, 30, 9, 0, 0).unwrap();
    notification.mark_read(at);
    assert_eq!(notification.status, NotificationStatus::Read);
    assert_eq!(notification.read_at, Some(at));

    let json = serde_json::to_string(&notification).unwrap();
    assert!(json.contains("\"status\":\"read\""));
    assert!(json.contains("\"read_at\":\"2025-05-30T09:00:00.000Z\""));
}

#[test]
fn bad_timestamp_is_an_error() {
    let json = NOTIFICATION_JSON.replace("2025-05-30T08:15:00Z", "last tuesday");
    assert!(serde_json::from_str::<Notification>(&json).is_err());
}
