//! Wall-clock time source for driving directors from a render loop.

use web_time::Instant;

/// Seconds elapsed since the scene started.
///
/// Uses `web_time` so the same clock works natively and in the browser.
#[derive(Debug, Clone, Copy)]
pub struct SceneClock {
    start: Instant,
}

impl SceneClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Seconds since the clock was created.
    pub fn seconds(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Default for SceneClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_is_monotonic() {
        let clock = SceneClock::new();
        let a = clock.seconds();
        let b = clock.seconds();
        assert!(a >= 0.0);
        assert!(b >= a);
    }
}
