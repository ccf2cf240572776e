/// Where a swipeable card is in its lifecycle.
///
/// Only `Dragging` follows live input; the other states are animation
/// targets and hold from the moment the transition starts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SwipeState {
    #[default]
    Resting,
    Dragging { offset: f32 },
    /// Pinned at `-action_width` with the delete affordance exposed.
    Revealed,
    /// Exit animation running. Terminal.
    Removing,
}

impl SwipeState {
    pub fn is_removing(&self) -> bool {
        matches!(self, SwipeState::Removing)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, SwipeState::Dragging { .. })
    }
}

/// Result of classifying a released swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    SnapBack,
    Reveal,
    CommitDelete,
}

impl ReleaseOutcome {
    pub fn target_state(self) -> SwipeState {
        match self {
            ReleaseOutcome::SnapBack => SwipeState::Resting,
            ReleaseOutcome::Reveal => SwipeState::Revealed,
            ReleaseOutcome::CommitDelete => SwipeState::Removing,
        }
    }
}
