use super::*;

use crate::models::{
    Conversation, ConversationPeer, LastMessage, ListingSummary, Notification, NotificationKind,
    NotificationPriority, NotificationStatus,
};
use chrono::TimeZone;
use paddock_core::{Runtime, FRAME_INTERVAL_NANOS};
use paddock_ui_graphics::Point;

struct FakeStore<S> {
    records: Vec<S>,
    fail_fetch: bool,
    fail_delete: bool,
    deleted: Vec<String>,
    marked: Vec<String>,
    marked_all: usize,
}

impl<S> FakeStore<S> {
    fn with(records: Vec<S>) -> Self {
        Self {
            records,
            fail_fetch: false,
            fail_delete: false,
            deleted: Vec::new(),
            marked: Vec::new(),
            marked_all: 0,
        }
    }
}

impl<S: ListSubject> SubjectStore<S> for FakeStore<S> {
    fn fetch_all(&mut self) -> Result<Vec<S>, StoreError> {
        if self.fail_fetch {
            return Err(StoreError::Network("offline".into()));
        }
        Ok(self.records.clone())
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        if self.fail_delete {
            return Err(StoreError::Rejected(500));
        }
        self.deleted.push(id.to_string());
        self.records.retain(|record| record.id() != id);
        Ok(())
    }

    fn mark_read(&mut self, id: &str) -> Result<(), StoreError> {
        self.marked.push(id.to_string());
        Ok(())
    }

    fn mark_all_read(&mut self) -> Result<(), StoreError> {
        self.marked_all += 1;
        Ok(())
    }
}

fn stamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap()
}

fn conversation(id: &str, first_name: &str) -> Conversation {
    Conversation {
        id: id.to_string(),
        last_message: LastMessage {
            id: format!("{id}-last"),
            message: "Merhaba".to_string(),
            created_at: stamp(),
            sender_id: id.to_string(),
            listing_id: format!("listing-{id}"),
        },
        unread_count: 1,
        other_user: ConversationPeer {
            id: id.to_string(),
            first_name: first_name.to_string(),
            last_name: "Yılmaz".to_string(),
            profile_image: None,
        },
        listing: ListingSummary {
            id: format!("listing-{id}"),
            title: "Merinos koyun".to_string(),
            price: 7_500.0,
            images: Vec::new(),
        },
    }
}

fn notification(id: &str, unread: bool) -> Notification {
    Notification {
        id: id.to_string(),
        user_id: "me".to_string(),
        kind: NotificationKind::Message,
        priority: NotificationPriority::High,
        title: format!("Bildirim {id}"),
        message: "Yeni mesajınız var".to_string(),
        data: serde_json::Value::Null,
        status: if unread {
            NotificationStatus::Unread
        } else {
            NotificationStatus::Read
        },
        is_email_sent: false,
        is_push_sent: false,
        created_at: stamp(),
        read_at: None,
    }
}

struct Driver {
    runtime: Runtime,
    time: u64,
    uptime: i64,
}

impl Driver {
    fn new() -> Self {
        Self {
            runtime: Runtime::new(),
            time: 0,
            uptime: 0,
        }
    }

    fn screen<S: ListSubject>(&self, records: Vec<S>) -> ListScreen<S, FakeStore<S>> {
        let config = SwipeConfig::for_viewport(400.0);
        let mut screen = ListScreen::new(FakeStore::with(records), self.runtime.handle(), config)
            .expect("valid config")
            .with_clock(stamp);
        screen.refresh().expect("fetch");
        screen
    }

    fn event<S: ListSubject>(
        &mut self,
        screen: &mut ListScreen<S, FakeStore<S>>,
        id: &str,
        make: fn(Point, i64) -> PointerEvent,
        dx: f32,
    ) -> SwipeState {
        self.uptime += 16;
        screen
            .pointer_event(id, &make(Point::new(300.0 + dx, 30.0), self.uptime))
            .expect("known id")
    }

    fn swipe<S: ListSubject>(
        &mut self,
        screen: &mut ListScreen<S, FakeStore<S>>,
        id: &str,
        dx: f32,
    ) -> SwipeState {
        self.event(screen, id, PointerEvent::down, 0.0);
        for step in 1..=4 {
            self.event(screen, id, PointerEvent::moved, dx * step as f32 / 4.0);
        }
        self.event(screen, id, PointerEvent::up, dx)
    }

    fn settle<S: ListSubject>(&mut self, screen: &mut ListScreen<S, FakeStore<S>>) {
        for _ in 0..600 {
            if !self.runtime.handle().has_frame_callbacks() {
                return;
            }
            self.time += FRAME_INTERVAL_NANOS;
            screen.frame(self.time);
        }
        panic!("screen did not settle");
    }
}

#[test]
fn refresh_loads_records_in_order() {
    let driver = Driver::new();
    let screen = driver.screen(vec![
        notification("a", true),
        notification("b", false),
        notification("c", true),
    ]);
    assert_eq!(screen.ids().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(screen.unread_count(), 2);
    assert_eq!(
        screen.item("b").map(|item| item.variant()),
        Some(crate::swipe::CardVariant::Notification)
    );
    assert!(screen.is_idle());
}

#[test]
fn refresh_failure_is_reported() {
    let driver = Driver::new();
    let mut screen = driver.screen(vec![conversation("a", "Ali")]);
    screen.store_mut().fail_fetch = true;
    assert!(matches!(
        screen.refresh(),
        Err(ScreenError::Store(StoreError::Network(_)))
    ));
    assert_eq!(screen.len(), 1);
}

#[test]
fn tapping_conversation_opens_chat() {
    let mut driver = Driver::new();
    let mut screen = driver.screen(vec![conversation("a", "Ali")]);
    driver.event(&mut screen, "a", PointerEvent::down, 0.0);
    driver.event(&mut screen, "a", PointerEvent::up, 0.0);

    assert_eq!(
        screen.drain_effects(),
        vec![ScreenEffect::OpenChat(ChatRoute {
            other_user_id: "a".into(),
            listing_id: "listing-a".into(),
            other_user_name: "Ali Yılmaz".into(),
            listing_title: "Merinos koyun".into(),
        })]
    );
    assert!(screen.drain_effects().is_empty());
}

#[test]
fn tapping_unread_notification_marks_it_read() {
    let mut driver = Driver::new();
    let mut screen = driver.screen(vec![notification("a", true), notification("b", true)]);

    assert_eq!(screen.tap("a").unwrap(), TapOutcome::Opened);
    assert_eq!(screen.store().marked, vec!["a".to_string()]);
    assert_eq!(screen.unread_count(), 1);
    let read = screen.subject("a").unwrap();
    assert_eq!(read.status, NotificationStatus::Read);
    assert_eq!(read.read_at, Some(stamp()));
    assert_eq!(
        screen.item("a").unwrap().subject().status,
        NotificationStatus::Read
    );

    screen.tap("a").unwrap();
    assert_eq!(screen.store().marked.len(), 1);
    assert!(screen.drain_effects().is_empty());
    driver.settle(&mut screen);
}

#[test]
fn swipe_delete_removes_after_exit() {
    let mut driver = Driver::new();
    let mut screen = driver.screen(vec![conversation("a", "Ali"), conversation("b", "Ayşe")]);

    assert_eq!(driver.swipe(&mut screen, "a", -260.0), SwipeState::Removing);
    assert_eq!(screen.len(), 2);
    assert!(screen.store().deleted.is_empty());

    driver.settle(&mut screen);
    assert_eq!(screen.store().deleted, vec!["a".to_string()]);
    assert_eq!(screen.ids().collect::<Vec<_>>(), vec!["b"]);
    assert!(screen.item("a").is_none());
    assert_eq!(
        screen.drain_effects(),
        vec![ScreenEffect::Removed {
            id: "a".into(),
            notice: Some("Konuşma silindi"),
        }]
    );
}

#[test]
fn reveal_and_affordance_tap_deletes_notification() {
    let mut driver = Driver::new();
    let mut screen = driver.screen(vec![notification("a", false)]);

    assert_eq!(driver.swipe(&mut screen, "a", -150.0), SwipeState::Revealed);
    driver.settle(&mut screen);
    assert_eq!(screen.visuals("a").unwrap().offset, -120.0);

    assert!(screen.tap_delete_affordance("a").unwrap());
    driver.settle(&mut screen);
    assert!(screen.is_empty());
    assert_eq!(screen.store().deleted, vec!["a".to_string()]);
}

#[test]
fn delete_button_prompts_by_default() {
    let mut driver = Driver::new();
    let mut screen = driver
        .screen(vec![conversation("a", "Ali")])
        .with_presentation(Presentation::pointer());

    assert!(screen.tap_delete_button("a").unwrap());
    assert_eq!(
        screen.drain_effects(),
        vec![ScreenEffect::ConfirmDelete {
            id: "a".into(),
            prompt: DeletePrompt {
                title: "Konuşmayı Sil".into(),
                message: "Ali Yılmaz ile olan konuşmayı silmek istediğinizden emin misiniz?"
                    .into(),
            },
        }]
    );
    assert_eq!(screen.pending_delete(), Some("a"));
    assert_eq!(screen.len(), 1);

    screen.cancel_delete().unwrap();
    assert_eq!(screen.len(), 1);
    assert_eq!(screen.pending_delete(), None);
    assert!(screen.store().deleted.is_empty());

    screen.tap_delete_button("a").unwrap();
    screen.confirm_delete().unwrap();
    assert!(screen.is_empty());
    assert!(matches!(
        screen.drain_effects().last(),
        Some(ScreenEffect::Removed { .. })
    ));
    driver.settle(&mut screen);
}

#[test]
fn delete_button_hidden_on_touch_layouts() {
    let driver = Driver::new();
    let mut screen = driver.screen(vec![conversation("a", "Ali")]);
    assert!(!screen.tap_delete_button("a").unwrap());
    assert!(!screen.visuals("a").unwrap().delete_button_visible);
    assert!(screen.drain_effects().is_empty());
}

#[test]
fn never_confirm_deletes_button_taps_immediately() {
    let driver = Driver::new();
    let mut screen = driver
        .screen(vec![notification("a", false)])
        .with_presentation(Presentation::pointer())
        .with_confirmation(DeleteConfirmation::Never);
    screen.tap_delete_button("a").unwrap();
    assert!(screen.is_empty());
    assert_eq!(
        screen.drain_effects(),
        vec![ScreenEffect::Removed {
            id: "a".into(),
            notice: None,
        }]
    );
}

#[test]
fn always_confirm_restores_swiped_card_on_cancel() {
    let mut driver = Driver::new();
    let mut screen = driver
        .screen(vec![notification("a", false)])
        .with_confirmation(DeleteConfirmation::Always);

    driver.swipe(&mut screen, "a", -300.0);
    driver.settle(&mut screen);
    assert_eq!(screen.len(), 1);
    assert!(matches!(
        screen.drain_effects().as_slice(),
        [ScreenEffect::ConfirmDelete { id, .. }] if id == "a"
    ));
    assert_eq!(screen.visuals("a").unwrap().opacity, 0.0);

    screen.cancel_delete().unwrap();
    let visuals = screen.visuals("a").unwrap();
    assert_eq!(visuals.state, SwipeState::Resting);
    assert_eq!(visuals.offset, 0.0);
    assert_eq!(visuals.opacity, 1.0);
    assert!(screen.store().deleted.is_empty());
}

#[test]
fn always_confirm_then_confirm_deletes() {
    let mut driver = Driver::new();
    let mut screen = driver
        .screen(vec![notification("a", false), notification("b", false)])
        .with_confirmation(DeleteConfirmation::Always);
    driver.swipe(&mut screen, "b", -300.0);
    driver.settle(&mut screen);
    screen.confirm_delete().unwrap();
    assert_eq!(screen.ids().collect::<Vec<_>>(), vec!["a"]);
}

#[test]
fn failed_delete_reinserts_in_place_and_alerts() {
    let mut driver = Driver::new();
    let mut screen = driver.screen(vec![
        notification("a", false),
        notification("b", false),
        notification("c", false),
    ]);
    screen.store_mut().fail_delete = true;

    driver.swipe(&mut screen, "b", -250.0);
    driver.settle(&mut screen);

    assert_eq!(screen.ids().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(
        screen.drain_effects(),
        vec![ScreenEffect::Alert {
            title: "Hata".into(),
            message: "Bildirim silinemedi. Lütfen tekrar deneyin.".into(),
        }]
    );
    let visuals = screen.visuals("b").unwrap();
    assert_eq!(visuals.state, SwipeState::Resting);
    assert_eq!(visuals.offset, 0.0);
}

#[test]
fn unknown_ids_and_missing_confirmation_are_errors() {
    let driver = Driver::new();
    let mut screen = driver.screen(vec![conversation("a", "Ali")]);
    assert!(matches!(
        screen.tap("zzz"),
        Err(ScreenError::UnknownSubject(id)) if id == "zzz"
    ));
    assert!(matches!(
        screen.confirm_delete(),
        Err(ScreenError::NoPendingDelete)
    ));
    assert!(matches!(
        screen.cancel_delete(),
        Err(ScreenError::NoPendingDelete)
    ));
}

#[test]
fn mark_all_read_clears_unread() {
    let driver = Driver::new();
    let mut screen = driver.screen(vec![notification("a", true), notification("b", true)]);
    screen.mark_all_read().unwrap();
    assert_eq!(screen.unread_count(), 0);
    assert_eq!(screen.store().marked_all, 1);
    assert!(screen
        .subjects()
        .all(|subject| subject.read_at == Some(stamp())));
}

#[test]
fn refresh_keeps_swipe_state_of_surviving_rows() {
    let mut driver = Driver::new();
    let mut screen = driver.screen(vec![notification("a", false), notification("b", false)]);
    driver.swipe(&mut screen, "a", -150.0);
    driver.settle(&mut screen);

    screen.store_mut().records.push(notification("c", true));
    assert_eq!(screen.refresh().unwrap(), 3);
    assert_eq!(screen.visuals("a").unwrap().state, SwipeState::Revealed);
    assert_eq!(screen.visuals("c").unwrap().state, SwipeState::Resting);
}

#[test]
fn rows_animate_independently() {
    let mut driver = Driver::new();
    let mut screen = driver.screen(vec![notification("a", false), notification("b", false)]);

    driver.swipe(&mut screen, "a", -80.0);
    driver.event(&mut screen, "b", PointerEvent::down, 0.0);
    driver.event(&mut screen, "b", PointerEvent::moved, -60.0);
    assert_eq!(screen.visuals("a").unwrap().state, SwipeState::Resting);

    driver.settle(&mut screen);
    assert_eq!(screen.visuals("a").unwrap().offset, 0.0);
    assert_eq!(
        screen.visuals("b").unwrap().state,
        SwipeState::Dragging { offset: -60.0 }
    );
}

#[test]
fn bad_viewport_width_keeps_layout() {
    let driver = Driver::new();
    let mut screen = driver.screen(vec![conversation("a", "Ali")]);
    assert!(screen.set_viewport_width(-1.0).is_err());
    assert_eq!(screen.config().viewport_width, 400.0);
    screen.set_viewport_width(800.0).unwrap();
    assert_eq!(screen.item("a").unwrap().config().viewport_width, 800.0);
}
