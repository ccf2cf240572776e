use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;
use crate::format;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LastMessage {
    pub id: String,
    pub message: String,
    #[serde(with = "timestamp::utc")]
    pub created_at: DateTime<Utc>,
    pub sender_id: String,
    pub listing_id: String,
}

/// The other participant of a conversation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversationPeer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Base64 JPEG.
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl ConversationPeer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingSummary {
    pub id: String,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
}

/// One row of the messages screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(rename = "_id")]
    pub id: String,
    pub last_message: LastMessage,
    #[serde(default)]
    pub unread_count: u32,
    pub other_user: ConversationPeer,
    pub listing: ListingSummary,
}

/// Where opening a conversation navigates to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatRoute {
    pub other_user_id: String,
    pub listing_id: String,
    pub other_user_name: String,
    pub listing_title: String,
}

impl Conversation {
    pub fn chat_route(&self) -> ChatRoute {
        ChatRoute {
            other_user_id: self.other_user.id.clone(),
            listing_id: self.last_message.listing_id.clone(),
            other_user_name: self.other_user.full_name(),
            listing_title: self.listing.title.clone(),
        }
    }

    /// Letter shown when the peer has no profile image.
    pub fn avatar_initial(&self) -> Option<char> {
        format::avatar_initial(&self.other_user.first_name)
    }

    pub fn unread_badge(&self) -> Option<String> {
        format::unread_badge(self.unread_count)
    }

    pub fn time_label(&self, now: DateTime<Utc>) -> String {
        format::conversation_time_label(self.last_message.created_at, now)
    }

    pub fn price_label(&self) -> String {
        format::price_label(self.listing.price)
    }
}
