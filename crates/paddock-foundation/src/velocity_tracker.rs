//! Horizontal release velocity for swipe gestures.
//!
//! Impulse strategy: the velocity is derived from the kinetic energy the
//! finger imparted over the most recent samples, which is robust against the
//! uneven event spacing of touch screens.

/// Ring buffer size for velocity tracking samples.
const HISTORY_SIZE: usize = 20;

/// Only samples within this window before the newest one contribute.
const HORIZON_MS: i64 = 100;

/// A gap this long between samples means the pointer had stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// 1D velocity tracker over absolute positions.
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    newest: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            newest: 0,
        }
    }

    pub fn add_data_point(&mut self, time_ms: i64, position: f32) {
        self.newest = (self.newest + 1) % HISTORY_SIZE;
        self.samples[self.newest] = Some(Sample { time_ms, position });
    }

    /// Velocity in units/second; 0.0 with fewer than two usable samples.
    pub fn calculate_velocity(&self) -> f32 {
        let Some(newest) = self.samples[self.newest] else {
            return 0.0;
        };

        // Walk backwards collecting (position, time relative to newest).
        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;
        let mut index = self.newest;
        let mut previous = newest;

        while let Some(sample) = self.samples[index] {
            let age = newest.time_ms - sample.time_ms;
            let gap = (previous.time_ms - sample.time_ms).abs();
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            previous = sample;

            positions[count] = sample.position;
            times[count] = -(age as f32);
            count += 1;
            if count == HISTORY_SIZE {
                break;
            }
            index = (index + HISTORY_SIZE - 1) % HISTORY_SIZE;
        }

        if count < 2 {
            return 0.0;
        }
        impulse_velocity(&positions[..count], &times[..count]) * 1000.0
    }

    /// Velocity in units/second clamped to `±max_velocity`.
    pub fn calculate_velocity_with_max(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.calculate_velocity();
        if velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.newest = 0;
    }
}

/// `positions`/`times` are ordered newest first; result is units per ms.
fn impulse_velocity(positions: &[f32], times: &[f32]) -> f32 {
    let oldest = positions.len() - 1;
    let mut work = 0.0f32;
    let mut next_time = times[oldest];

    for i in (1..=oldest).rev() {
        let current_time = next_time;
        next_time = times[i - 1];
        if current_time == next_time {
            continue;
        }
        let v_curr = (positions[i - 1] - positions[i]) / (next_time - current_time);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// E = 0.5 * v^2 with unit mass.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_single_sample_is_still() {
        let mut tracker = VelocityTracker1D::new();
        assert_eq!(tracker.calculate_velocity(), 0.0);
        tracker.add_data_point(0, 300.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn leftward_swipe_is_negative() {
        let mut tracker = VelocityTracker1D::new();
        // 30 px every 10 ms to the left = -3000 px/s
        for step in 0..5 {
            tracker.add_data_point(step * 10, 300.0 - 30.0 * step as f32);
        }
        let velocity = tracker.calculate_velocity();
        assert!(
            (velocity + 3000.0).abs() < 300.0,
            "expected about -3000, got {}",
            velocity
        );
    }

    #[test]
    fn capped_to_maximum() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 10_000.0);
        tracker.add_data_point(1, 0.0);
        assert_eq!(tracker.calculate_velocity_with_max(8_000.0), -8_000.0);
        assert_eq!(tracker.calculate_velocity_with_max(f32::NAN), 0.0);
    }

    #[test]
    fn pause_before_release_reads_as_stopped() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 300.0);
        tracker.add_data_point(10, 200.0);
        tracker.add_data_point(10 + ASSUME_STOPPED_MS + 1, 190.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn reset_forgets_history() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(10, -100.0);
        tracker.reset();
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }
}
