use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;
use crate::format;
use paddock_ui_graphics::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Message,
    Offer,
    Listing,
    Security,
    Payment,
    Profile,
    #[serde(other)]
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPriority {
    Critical,
    High,
    Medium,
    Low,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Unread,
    Read,
    Archived,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub priority: NotificationPriority,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub data: serde_json::Value,
    pub status: NotificationStatus,
    #[serde(default)]
    pub is_email_sent: bool,
    #[serde(default)]
    pub is_push_sent: bool,
    #[serde(with = "timestamp::utc")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "timestamp::utc_option")]
    pub read_at: Option<DateTime<Utc>>,
}

impl Notification {
    pub fn is_unread(&self) -> bool {
        self.status == NotificationStatus::Unread
    }

    pub fn mark_read(&mut self, at: DateTime<Utc>) {
        self.status = NotificationStatus::Read;
        self.read_at = Some(at);
    }

    pub fn icon(&self) -> &'static str {
        format::notification_icon(self.kind)
    }

    pub fn accent_color(&self) -> Color {
        format::priority_color(self.priority)
    }

    pub fn time_label(&self, now: DateTime<Utc>) -> String {
        format::time_ago_label(self.created_at, now)
    }
}
