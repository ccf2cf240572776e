//! Display helpers for list cards.
//!
//! Labels are Turkish, matching the rest of the marketplace UI. None of this
//! feeds the swipe state machine.

use chrono::{DateTime, Utc};
use paddock_ui_graphics::Color;

use crate::models::{NotificationKind, NotificationPriority};

/// Coarse age label for the messages list: "Az önce", "N saat önce", "N gün önce".
pub fn conversation_time_label(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - created_at).num_hours();
    let days = hours / 24;
    if days > 0 {
        format!("{days} gün önce")
    } else if hours > 0 {
        format!("{hours} saat önce")
    } else {
        "Az önce".to_string()
    }
}

/// Compact age label for notifications: "Şimdi", "5dk önce", "3s önce", "2g önce".
pub fn time_ago_label(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - created_at).num_seconds();
    match seconds {
        s if s < 60 => "Şimdi".to_string(),
        s if s < 3_600 => format!("{}dk önce", s / 60),
        s if s < 86_400 => format!("{}s önce", s / 3_600),
        s => format!("{}g önce", s / 86_400),
    }
}

/// Badge text for an unread counter; hidden at zero, capped at "9+".
pub fn unread_badge(count: u32) -> Option<String> {
    match count {
        0 => None,
        1..=9 => Some(count.to_string()),
        _ => Some("9+".to_string()),
    }
}

pub fn unread_banner(count: usize) -> Option<String> {
    (count > 0).then(|| format!("{count} okunmamış bildirim"))
}

pub fn avatar_initial(first_name: &str) -> Option<char> {
    first_name.chars().next()?.to_uppercase().next()
}

/// Icon name for a notification type.
pub fn notification_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Message => "chatbubble",
        NotificationKind::Offer => "cash",
        NotificationKind::Listing => "document-text",
        NotificationKind::Security => "shield-checkmark",
        NotificationKind::Payment => "card",
        NotificationKind::Profile => "person",
        NotificationKind::Other => "notifications",
    }
}

pub fn priority_color(priority: NotificationPriority) -> Color {
    match priority {
        NotificationPriority::Critical => Color::ERROR,
        NotificationPriority::High => Color::WARNING,
        NotificationPriority::Medium => Color::INFO,
        NotificationPriority::Low => Color::SUBTLE_LIGHT,
        NotificationPriority::Unknown => Color::TEXT_SECONDARY,
    }
}

/// Lira price in Turkish notation: `₺12.500`, `₺1.250,5`.
pub fn price_label(price: f64) -> String {
    if !price.is_finite() {
        return "₺-".to_string();
    }
    let cents = (price.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if price < 0.0 && cents > 0 { "-" } else { "" };
    match fraction {
        0 => format!("{sign}₺{grouped}"),
        f if f % 10 == 0 => format!("{sign}₺{grouped},{}", f / 10),
        f => format!("{sign}₺{grouped},{f:02}"),
    }
}
