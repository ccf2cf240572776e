use super::state::SwipeState;

/// Host capabilities that change how a list item is presented.
///
/// Pointer-capable layouts (desktop, web) show an always-visible delete
/// button next to the swipe gesture; touch layouts rely on the gesture alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Presentation {
    pub pointer_capable: bool,
}

impl Presentation {
    pub fn touch() -> Self {
        Self {
            pointer_capable: false,
        }
    }

    pub fn pointer() -> Self {
        Self {
            pointer_capable: true,
        }
    }

    pub fn shows_delete_button(&self) -> bool {
        self.pointer_capable
    }
}

/// Snapshot of everything the renderer needs for one card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeVisuals {
    pub state: SwipeState,
    pub offset: f32,
    pub opacity: f32,
    pub scale: f32,
    pub affordance_opacity: f32,
    pub delete_button_visible: bool,
}
