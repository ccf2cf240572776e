//! Swipeable list items and the list screens built from them.
//!
//! A [`SwipeableListItem`] turns pointer input on one row into a swipe
//! state machine (resting, dragging, revealed, removing) with spring and
//! tween motion, and reports opens and deletes to its owner. A
//! [`ListScreen`] owns the records, one item per record, and the backend
//! store behind them.

pub mod format;
pub mod models;
pub mod screen;
pub mod swipe;

pub use models::{
    ChatRoute, Conversation, Notification, NotificationKind, NotificationPriority,
    NotificationStatus,
};
pub use screen::{
    DeleteConfirmation, DeletePrompt, ListScreen, ListSubject, OpenAction, ScreenEffect,
    ScreenError, StoreError, SubjectStore,
};
pub use swipe::{
    ActionDispatcher, CardVariant, DeleteTrigger, FlingConfig, PositionAnimator, Presentation,
    ReleaseOutcome, SwipeCallbacks, SwipeConfig, SwipeConfigError, SwipeState, SwipeVisuals,
    SwipeableListItem, TapOutcome, ThresholdClassifier,
};

pub mod prelude {
    pub use crate::models::{Conversation, Notification};
    pub use crate::screen::{DeleteConfirmation, ListScreen, ScreenEffect, SubjectStore};
    pub use crate::swipe::{
        CardVariant, DeleteTrigger, Presentation, SwipeCallbacks, SwipeConfig, SwipeState,
        SwipeableListItem,
    };
}
