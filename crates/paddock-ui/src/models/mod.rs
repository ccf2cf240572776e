//! Records rendered by the list screens, as served by the marketplace API.

pub mod conversation;
pub mod notification;
pub mod timestamp;

pub use conversation::{ChatRoute, Conversation, ConversationPeer, LastMessage, ListingSummary};
pub use notification::{Notification, NotificationKind, NotificationPriority, NotificationStatus};
pub use timestamp::parse_timestamp;

#[cfg(test)]
#[path = "../tests/model_tests.rs"]
mod tests;
