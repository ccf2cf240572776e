use chrono::{DateTime, Utc};

use super::store::StoreError;
use crate::models::{ChatRoute, Conversation, Notification};
use crate::swipe::CardVariant;

/// What tapping a resting card does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpenAction {
    Navigate(ChatRoute),
    MarkRead,
}

/// Text of the delete confirmation dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeletePrompt {
    pub title: String,
    pub message: String,
}

/// A record a [`ListScreen`](super::ListScreen) can render as a swipeable card.
pub trait ListSubject: Clone + 'static {
    const VARIANT: CardVariant;

    /// Stable key of the record in its collection.
    fn id(&self) -> &str;

    fn open_action(&self) -> OpenAction;

    fn delete_prompt(&self) -> DeletePrompt;

    /// Alert body shown when a delete fails with `error`.
    fn delete_failed_message(error: &StoreError) -> &'static str;

    /// Alert body shown after a successful delete, if any.
    fn deleted_notice() -> Option<&'static str> {
        None
    }

    fn is_unread(&self) -> bool {
        false
    }

    fn mark_read(&mut self, _at: DateTime<Utc>) {}
}

impl ListSubject for Conversation {
    const VARIANT: CardVariant = CardVariant::Conversation;

    fn id(&self) -> &str {
        &self.id
    }

    fn open_action(&self) -> OpenAction {
        OpenAction::Navigate(self.chat_route())
    }

    fn delete_prompt(&self) -> DeletePrompt {
        DeletePrompt {
            title: "Konuşmayı Sil".to_string(),
            message: format!(
                "{} ile olan konuşmayı silmek istediğinizden emin misiniz?",
                self.other_user.full_name()
            ),
        }
    }

    fn delete_failed_message(error: &StoreError) -> &'static str {
        match error {
            StoreError::Network(_) => "Ağ hatası",
            _ => "Konuşma silinemedi",
        }
    }

    fn deleted_notice() -> Option<&'static str> {
        Some("Konuşma silindi")
    }
}

impl ListSubject for Notification {
    const VARIANT: CardVariant = CardVariant::Notification;

    fn id(&self) -> &str {
        &self.id
    }

    fn open_action(&self) -> OpenAction {
        OpenAction::MarkRead
    }

    fn delete_prompt(&self) -> DeletePrompt {
        DeletePrompt {
            title: "Bildirimi Sil".to_string(),
            message: format!(
                "\"{}\" bildirimini silmek istediğinizden emin misiniz?",
                self.title
            ),
        }
    }

    fn delete_failed_message(_error: &StoreError) -> &'static str {
        "Bildirim silinemedi. Lütfen tekrar deneyin."
    }

    fn is_unread(&self) -> bool {
        Notification::is_unread(self)
    }

    fn mark_read(&mut self, at: DateTime<Utc>) {
        Notification::mark_read(self, at);
    }
}
