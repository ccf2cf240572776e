//! Replays scripted swipe sessions against the messages list (phone, touch)
//! and the notifications list (tablet, pointer) and logs what the screens do.
//!
//! `RUST_LOG=debug` shows every state transition, `RUST_LOG=trace` every
//! animation frame.

mod player;
mod scenario;
mod store;

use anyhow::Context;
use paddock_core::FrameTicker;
use paddock_ui::{Conversation, DeleteConfirmation, Notification};

use player::{Device, Player};
use store::JsonStore;

const CONVERSATIONS_JSON: &str = include_str!("../data/conversations.json");
const NOTIFICATIONS_JSON: &str = include_str!("../data/notifications.json");

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let ticker = FrameTicker::new();

    let conversations = JsonStore::<Conversation>::from_json(CONVERSATIONS_JSON)
        .context("parsing conversations")?;
    let mut messages = Player::new(conversations, Device::phone(), DeleteConfirmation::default())?;
    for scenario in scenario::conversation_scenarios() {
        messages.run(&scenario)?;
    }
    let now = chrono::Utc::now();
    for conversation in messages.screen().subjects() {
        log::info!(
            "{} | {} | {} | {} | unread {}",
            conversation.other_user.full_name(),
            conversation.listing.title,
            conversation.price_label(),
            conversation.time_label(now),
            conversation.unread_badge().unwrap_or_default()
        );
    }

    let notifications = JsonStore::<Notification>::from_json(NOTIFICATIONS_JSON)
        .context("parsing notifications")?
        .refusing("notif-3");
    let mut inbox = Player::new(notifications, Device::tablet(), DeleteConfirmation::default())?;
    if let Some(banner) = paddock_ui::format::unread_banner(inbox.screen().unread_count()) {
        log::info!("{banner}");
    }
    for scenario in scenario::notification_scenarios() {
        inbox.run(&scenario)?;
    }
    for notification in inbox.screen().subjects() {
        log::info!(
            "[{}] {} | {} | {:?}",
            notification.icon(),
            notification.title,
            notification.time_label(now),
            notification.status
        );
    }

    log::info!(
        "replayed {} frames in {:.1} ms",
        messages.frames() + inbox.frames(),
        ticker.now_nanos() as f64 / 1_000_000.0
    );
    Ok(())
}
