//! Scripted interactions replayed by the demo.

/// One user action. Distances are in dp, negative to the left.
#[derive(Clone, Debug)]
pub enum Step {
    Tap(&'static str),
    Swipe(&'static str, f32),
    TapAffordance(&'static str),
    TapButton(&'static str),
    Confirm,
    Cancel,
    /// Let every animation finish.
    Settle,
    Refresh,
    MarkAllRead,
}

#[derive(Clone, Debug)]
pub struct Scenario {
    pub name: &'static str,
    pub steps: Vec<Step>,
}

impl Scenario {
    fn new(name: &'static str, steps: Vec<Step>) -> Self {
        Self { name, steps }
    }
}

pub fn conversation_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("open a conversation", vec![Step::Tap("conv-2")]),
        Scenario::new(
            "reveal and dismiss",
            vec![
                Step::Swipe("conv-1", -140.0),
                Step::Settle,
                Step::Tap("conv-1"),
                Step::Settle,
            ],
        ),
        Scenario::new(
            "half-hearted swipe",
            vec![Step::Swipe("conv-3", -60.0), Step::Settle],
        ),
        Scenario::new(
            "swipe to delete",
            vec![Step::Swipe("conv-3", -260.0), Step::Settle, Step::Refresh],
        ),
    ]
}

/// Replayed on a pointer layout against a backend that refuses `notif-3`.
pub fn notification_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("read a notification", vec![Step::Tap("notif-1")]),
        Scenario::new(
            "reveal then delete",
            vec![
                Step::Swipe("notif-2", -150.0),
                Step::Settle,
                Step::TapAffordance("notif-2"),
                Step::Settle,
            ],
        ),
        Scenario::new(
            "delete button, change of heart",
            vec![Step::TapButton("notif-4"), Step::Cancel],
        ),
        Scenario::new(
            "delete button, confirmed",
            vec![Step::TapButton("notif-4"), Step::Confirm],
        ),
        Scenario::new(
            "refused delete",
            vec![Step::Swipe("notif-3", -320.0), Step::Settle],
        ),
        Scenario::new("mark everything read", vec![Step::MarkAllRead]),
    ]
}
