//! List screens over a backend store.

pub mod list_screen;
pub mod store;
pub mod subject;

pub use list_screen::{DeleteConfirmation, ListScreen, ScreenError, ScreenEffect};
pub use store::{StoreError, SubjectStore};
pub use subject::{DeletePrompt, ListSubject, OpenAction};
