use super::config::{FlingConfig, SwipeConfig};
use super::state::ReleaseOutcome;

/// Maps a released swipe to its outcome.
///
/// Pure function of the leftward distance travelled (and of the release
/// velocity once fling detection is configured). The delete threshold is
/// exclusive and checked first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdClassifier {
    reveal_threshold: f32,
    delete_threshold: f32,
    fling: Option<FlingConfig>,
}

impl ThresholdClassifier {
    pub fn new(reveal_threshold: f32, delete_threshold: f32) -> Self {
        Self {
            reveal_threshold,
            delete_threshold,
            fling: None,
        }
    }

    pub fn from_config(config: &SwipeConfig) -> Self {
        Self {
            reveal_threshold: config.reveal_threshold(),
            delete_threshold: config.delete_threshold(),
            fling: config.fling,
        }
    }

    pub fn with_fling(mut self, fling: FlingConfig) -> Self {
        self.fling = Some(fling);
        self
    }

    pub fn reveal_threshold(&self) -> f32 {
        self.reveal_threshold
    }

    pub fn delete_threshold(&self) -> f32 {
        self.delete_threshold
    }

    /// `distance` is the leftward displacement at release, never negative.
    pub fn classify(&self, distance: f32) -> ReleaseOutcome {
        if distance > self.delete_threshold {
            ReleaseOutcome::CommitDelete
        } else if distance > self.reveal_threshold {
            ReleaseOutcome::Reveal
        } else {
            ReleaseOutcome::SnapBack
        }
    }

    /// Like [`classify`](Self::classify), with fling detection when enabled.
    ///
    /// `velocity` is signed px/s; leftward is negative.
    pub fn classify_release(&self, distance: f32, velocity: f32) -> ReleaseOutcome {
        let outcome = self.classify(distance);
        match self.fling {
            Some(fling)
                if outcome == ReleaseOutcome::Reveal
                    && -velocity > fling.velocity_threshold =>
            {
                log::debug!("fling at {velocity:.0}px/s commits delete");
                ReleaseOutcome::CommitDelete
            }
            _ => outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> ThresholdClassifier {
        ThresholdClassifier::from_config(&SwipeConfig::for_viewport(400.0))
    }

    #[test]
    fn delete_boundary_is_exclusive() {
        let classifier = classifier();
        assert_eq!(classifier.classify(201.0), ReleaseOutcome::CommitDelete);
        assert_eq!(classifier.classify(200.0), ReleaseOutcome::Reveal);
    }

    #[test]
    fn reveal_band() {
        let classifier = classifier();
        assert_eq!(classifier.classify(101.0), ReleaseOutcome::Reveal);
        assert_eq!(classifier.classify(150.0), ReleaseOutcome::Reveal);
        assert_eq!(classifier.classify(100.0), ReleaseOutcome::SnapBack);
        assert_eq!(classifier.classify(99.0), ReleaseOutcome::SnapBack);
        assert_eq!(classifier.classify(0.0), ReleaseOutcome::SnapBack);
    }

    #[test]
    fn velocity_ignored_without_fling() {
        let classifier = classifier();
        assert_eq!(
            classifier.classify_release(150.0, -8_000.0),
            ReleaseOutcome::Reveal
        );
    }

    #[test]
    fn fling_commits_only_past_reveal() {
        let classifier = classifier().with_fling(FlingConfig {
            velocity_threshold: 1_000.0,
        });
        assert_eq!(
            classifier.classify_release(150.0, -1_500.0),
            ReleaseOutcome::CommitDelete
        );
        assert_eq!(
            classifier.classify_release(150.0, -900.0),
            ReleaseOutcome::Reveal
        );
        assert_eq!(
            classifier.classify_release(60.0, -5_000.0),
            ReleaseOutcome::SnapBack
        );
        assert_eq!(
            classifier.classify_release(150.0, 5_000.0),
            ReleaseOutcome::Reveal
        );
    }

    #[test]
    fn outcomes_map_to_states() {
        use crate::swipe::SwipeState;
        assert_eq!(ReleaseOutcome::SnapBack.target_state(), SwipeState::Resting);
        assert_eq!(ReleaseOutcome::Reveal.target_state(), SwipeState::Revealed);
        assert_eq!(
            ReleaseOutcome::CommitDelete.target_state(),
            SwipeState::Removing
        );
    }
}
