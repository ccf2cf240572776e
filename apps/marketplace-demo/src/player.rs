//! Replays scenarios against a list screen the way a host event loop would:
//! raw pointer events in physical pixels are queued, then delivered to the
//! row under the pointer once per frame, followed by the animation tick.

use anyhow::Context;
use paddock_core::{Runtime, FRAME_INTERVAL_NANOS};
use paddock_foundation::{PointerDispatcher, PointerEvent, PointerId};
use paddock_ui::{
    DeleteConfirmation, ListScreen, ListSubject, Presentation, ScreenEffect, ScreenError,
    SubjectStore, SwipeConfig,
};
use paddock_ui_graphics::{Dp, Point, Size};

use crate::scenario::{Scenario, Step};

const ROW_HEIGHT: Dp = Dp(88.0);
/// Where the thumb lands, measured from the right edge.
const GRIP_INSET: Dp = Dp(40.0);
const GESTURE_STEPS: usize = 6;
const SETTLE_FRAME_LIMIT: usize = 1_000;

/// Screen of the simulated host.
#[derive(Clone, Copy, Debug)]
pub struct Device {
    /// Physical pixels.
    pub viewport: Size,
    pub density: f32,
    pub presentation: Presentation,
}

impl Device {
    pub fn phone() -> Self {
        Self {
            viewport: Size {
                width: 1170.0,
                height: 2532.0,
            },
            density: 3.0,
            presentation: Presentation::touch(),
        }
    }

    pub fn tablet() -> Self {
        Self {
            viewport: Size {
                width: 800.0,
                height: 1280.0,
            },
            density: 2.0,
            presentation: Presentation::pointer(),
        }
    }

    pub fn logical_width(&self) -> f32 {
        Dp::from_px(self.viewport.width, self.density).0
    }

    fn to_logical(&self, position: Point) -> Point {
        Point::new(
            Dp::from_px(position.x, self.density).0,
            Dp::from_px(position.y, self.density).0,
        )
    }
}

pub struct Player<S: ListSubject, St: SubjectStore<S>> {
    runtime: Runtime,
    screen: ListScreen<S, St>,
    device: Device,
    pointers: PointerDispatcher,
    next_pointer: PointerId,
    frame_nanos: u64,
}

impl<S: ListSubject, St: SubjectStore<S>> Player<S, St> {
    pub fn new(store: St, device: Device, confirmation: DeleteConfirmation) -> anyhow::Result<Self> {
        anyhow::ensure!(
            device.viewport.is_usable(),
            "unusable viewport {:?}",
            device.viewport
        );
        let runtime = Runtime::new();
        let config = SwipeConfig::for_viewport(device.logical_width());
        let mut screen = ListScreen::new(store, runtime.handle(), config)?
            .with_presentation(device.presentation)
            .with_confirmation(confirmation);
        let loaded = screen.refresh().context("initial load")?;
        log::info!(
            "loaded {loaded} records on a {}dp wide screen",
            device.logical_width()
        );
        Ok(Self {
            runtime,
            screen,
            device,
            pointers: PointerDispatcher::new(),
            next_pointer: 1,
            frame_nanos: 0,
        })
    }

    pub fn screen(&self) -> &ListScreen<S, St> {
        &self.screen
    }

    pub fn frames(&self) -> u64 {
        self.frame_nanos / FRAME_INTERVAL_NANOS
    }

    /// Play every step of `scenario` and return the effects it produced.
    pub fn run(&mut self, scenario: &Scenario) -> anyhow::Result<Vec<ScreenEffect>> {
        log::info!("--- {}", scenario.name);
        let mut effects = Vec::new();
        for step in &scenario.steps {
            self.step(step)
                .with_context(|| format!("{}: {step:?}", scenario.name))?;
            for effect in self.screen.drain_effects() {
                log::info!("  {}", describe(&effect));
                effects.push(effect);
            }
        }
        Ok(effects)
    }

    fn step(&mut self, step: &Step) -> Result<(), ScreenError> {
        match step {
            Step::Tap(id) => self.gesture(id, Dp(0.0)),
            Step::Swipe(id, dx) => self.gesture(id, Dp(*dx)),
            Step::TapAffordance(id) => {
                if !self.screen.tap_delete_affordance(id)? {
                    log::warn!("{id} shows no delete affordance");
                }
                Ok(())
            }
            Step::TapButton(id) => {
                if !self.screen.tap_delete_button(id)? {
                    log::warn!("{id} shows no delete button");
                }
                Ok(())
            }
            Step::Confirm => self.screen.confirm_delete(),
            Step::Cancel => self.screen.cancel_delete(),
            Step::Settle => {
                self.settle();
                Ok(())
            }
            Step::Refresh => {
                let count = self.screen.refresh()?;
                log::info!("  refreshed, {count} records");
                Ok(())
            }
            Step::MarkAllRead => self.screen.mark_all_read(),
        }
    }

    /// Press on the row of `id`, move by `dx` over a few frames, lift.
    fn gesture(&mut self, id: &str, dx: Dp) -> Result<(), ScreenError> {
        let row = self
            .screen
            .ids()
            .position(|other| other == id)
            .ok_or_else(|| ScreenError::UnknownSubject(id.to_string()))?;
        let density = self.device.density;
        let start = Point::new(
            self.device.viewport.width - GRIP_INSET.to_px(density),
            Dp(ROW_HEIGHT.0 * (row as f32 + 0.5)).to_px(density),
        );
        let pointer = self.next_pointer;
        self.next_pointer += 1;

        self.pointers
            .push(PointerEvent::down(start, self.uptime_millis()).with_id(pointer));
        self.frame()?;
        let mut position = start;
        for step in 1..=GESTURE_STEPS {
            let progress = step as f32 / GESTURE_STEPS as f32;
            position = Point::new(start.x + dx.to_px(density) * progress, start.y);
            self.pointers
                .push(PointerEvent::moved(position, self.uptime_millis()).with_id(pointer));
            self.frame()?;
        }
        self.pointers
            .push(PointerEvent::up(position, self.uptime_millis()).with_id(pointer));
        self.frame()
    }

    /// One display frame: deliver queued input, then tick animations.
    fn frame(&mut self) -> Result<(), ScreenError> {
        let mut queued = Vec::with_capacity(self.pointers.len());
        self.pointers.drain(|_, event| queued.push(event));
        for event in queued {
            self.deliver(event)?;
        }
        self.frame_nanos += FRAME_INTERVAL_NANOS;
        self.screen.frame(self.frame_nanos);
        Ok(())
    }

    fn deliver(&mut self, event: PointerEvent) -> Result<(), ScreenError> {
        let position = self.device.to_logical(event.position);
        let row = (position.y / ROW_HEIGHT.0).floor().max(0.0) as usize;
        let Some(id) = self.screen.ids().nth(row).map(str::to_owned) else {
            log::debug!("pointer {} outside the list", event.id);
            return Ok(());
        };
        let local = PointerEvent::new(event.kind, position, event.uptime_millis).with_id(event.id);
        let state = self.screen.pointer_event(&id, &local)?;
        log::debug!("  {id} {:?} -> {state:?}", event.kind);
        Ok(())
    }

    fn settle(&mut self) {
        let handle = self.runtime.handle();
        let mut frames = 0;
        while handle.has_frame_callbacks() {
            if frames == SETTLE_FRAME_LIMIT {
                log::warn!("still animating after {frames} frames");
                return;
            }
            self.frame_nanos += FRAME_INTERVAL_NANOS;
            self.screen.frame(self.frame_nanos);
            frames += 1;
            for id in self.screen.ids() {
                if let Some(visuals) = self.screen.visuals(id) {
                    log::trace!(
                        "  {id} offset {:.1} opacity {:.2} scale {:.3}",
                        visuals.offset,
                        visuals.opacity,
                        visuals.scale
                    );
                }
            }
        }
        log::debug!("  settled after {frames} frames");
    }

    fn uptime_millis(&self) -> i64 {
        i64::try_from(self.frame_nanos / 1_000_000).unwrap_or(i64::MAX)
    }
}

fn describe(effect: &ScreenEffect) -> String {
    match effect {
        ScreenEffect::Alert { title, message } => format!("alert \"{title}\": {message}"),
        ScreenEffect::ConfirmDelete { id, prompt } => {
            format!("confirm delete of {id}: {} / {}", prompt.title, prompt.message)
        }
        ScreenEffect::Removed { id, notice } => match notice {
            Some(notice) => format!("removed {id} ({notice})"),
            None => format!("removed {id}"),
        },
        ScreenEffect::OpenChat(route) => format!(
            "open chat with {} about \"{}\"",
            route.other_user_name, route.listing_title
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{conversation_scenarios, notification_scenarios};
    use crate::store::JsonStore;
    use crate::{CONVERSATIONS_JSON, NOTIFICATIONS_JSON};
    use paddock_ui::{Conversation, Notification};

    #[test]
    fn conversation_scenarios_play_out() {
        let store = JsonStore::<Conversation>::from_json(CONVERSATIONS_JSON).unwrap();
        let mut player =
            Player::new(store, Device::phone(), DeleteConfirmation::default()).unwrap();
        let effects: Vec<ScreenEffect> = conversation_scenarios()
            .iter()
            .flat_map(|scenario| player.run(scenario).unwrap())
            .collect();

        assert!(matches!(
            effects.first(),
            Some(ScreenEffect::OpenChat(route)) if route.other_user_name == "Mehmet Yıldız"
        ));
        assert!(effects.contains(&ScreenEffect::Removed {
            id: "conv-3".into(),
            notice: Some("Konuşma silindi"),
        }));
        assert_eq!(effects.len(), 2);
        assert_eq!(
            player.screen().ids().collect::<Vec<_>>(),
            vec!["conv-1", "conv-2"]
        );
    }

    #[test]
    fn notification_scenarios_play_out() {
        let store = JsonStore::<Notification>::from_json(NOTIFICATIONS_JSON)
            .unwrap()
            .refusing("notif-3");
        let mut player =
            Player::new(store, Device::tablet(), DeleteConfirmation::default()).unwrap();
        assert_eq!(player.screen().unread_count(), 3);

        let mut effects = Vec::new();
        for scenario in notification_scenarios() {
            effects.extend(player.run(&scenario).unwrap());
        }

        assert_eq!(
            player.screen().ids().collect::<Vec<_>>(),
            vec!["notif-1", "notif-3", "notif-5"]
        );
        assert_eq!(player.screen().unread_count(), 0);
        assert!(effects
            .iter()
            .any(|effect| matches!(effect, ScreenEffect::Alert { title, .. } if title == "Hata")));
        let prompts = effects
            .iter()
            .filter(|effect| matches!(effect, ScreenEffect::ConfirmDelete { .. }))
            .count();
        assert_eq!(prompts, 2);
    }

    #[test]
    fn unknown_row_is_an_error() {
        let store = JsonStore::<Conversation>::from_json(CONVERSATIONS_JSON).unwrap();
        let mut player = Player::new(store, Device::phone(), DeleteConfirmation::Never).unwrap();
        let scenario = Scenario {
            name: "ghost",
            steps: vec![Step::Tap("conv-404")],
        };
        assert!(player.run(&scenario).is_err());
    }
}
