use web_time::Instant;

/// Converts wall-clock time into monotonic frame timestamps.
///
/// Hosts with a real display loop feed `now_nanos()` into
/// `RuntimeHandle::drain_frame_callbacks`; tests pass explicit timestamps
/// instead.
#[derive(Debug, Clone, Copy)]
pub struct FrameTicker {
    origin: Instant,
}

impl FrameTicker {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now_nanos(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

impl Default for FrameTicker {
    fn default() -> Self {
        Self::new()
    }
}
