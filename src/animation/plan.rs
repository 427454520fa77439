//! A single timed camera move with an optional hold at the end.

use glam::Vec3;

use super::tweens::{EaseType, Tweenable};

/// Shortest transition a plan accepts, in seconds.
///
/// A zero duration would make progress infinite (or NaN at the very first
/// frame), so durations are clamped up to this value.
pub const MIN_DURATION: f64 = 1e-3;

/// What a plan produced for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlanFrame {
    /// Interpolating from `from` toward `to`.
    Moving(Vec3),
    /// Parked on `to` for the stall period.
    Holding(Vec3),
    /// The full cycle (transition + stall) is over. The plan has already
    /// reset itself and will start a fresh cycle on its next update.
    Finished,
}

impl PlanFrame {
    /// The point to apply to the camera, if any.
    pub fn point(self) -> Option<Vec3> {
        match self {
            PlanFrame::Moving(p) | PlanFrame::Holding(p) => Some(p),
            PlanFrame::Finished => None,
        }
    }

    pub fn is_finished(self) -> bool {
        matches!(self, PlanFrame::Finished)
    }
}

/// One interpolated transition between two points, driven by wall-clock time.
///
/// The plan starts its cycle on the first [`update`](Self::update) call and
/// records that time. While `elapsed < duration` it interpolates; while
/// `elapsed < duration + stall` it holds at `to`; after that it resets and
/// reports [`PlanFrame::Finished`].
///
/// `from` and `to` are read on every update, so editing them mid-transition
/// (for example after a viewport resize) takes effect on the next frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraPlan {
    from: Vec3,
    to: Vec3,
    /// Transition length in seconds
    duration: f64,
    /// Hold length at `to` in seconds
    stall: f64,
    easing: EaseType,
    /// Time passed to the first update of the current cycle
    initial_time: Option<f64>,
}

impl CameraPlan {
    /// Create a plan. `ease = true` selects sine ease-in-out, otherwise the
    /// move is linear.
    pub fn new(from: Vec3, to: Vec3, duration: f64, stall: f64, ease: bool) -> Self {
        Self::with_easing(from, to, duration, stall, EaseType::from_flag(ease))
    }

    /// Create a plan with an explicit easing curve.
    pub fn with_easing(from: Vec3, to: Vec3, duration: f64, stall: f64, easing: EaseType) -> Self {
        Self {
            from,
            to,
            duration: sanitize_duration(duration),
            stall: sanitize_stall(stall),
            easing,
            initial_time: None,
        }
    }

    pub fn from(&self) -> Vec3 {
        self.from
    }

    pub fn set_from(&mut self, from: Vec3) {
        self.from = from;
    }

    /// Mutable access to the start point, for patching single axes.
    pub fn from_mut(&mut self) -> &mut Vec3 {
        &mut self.from
    }

    pub fn to(&self) -> Vec3 {
        self.to
    }

    pub fn set_to(&mut self, to: Vec3) {
        self.to = to;
    }

    /// Mutable access to the end point, for patching single axes.
    pub fn to_mut(&mut self) -> &mut Vec3 {
        &mut self.to
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Set the transition length. Values below [`MIN_DURATION`] are raised to it.
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = sanitize_duration(duration);
    }

    pub fn stall(&self) -> f64 {
        self.stall
    }

    /// Set the hold length. Negative values become zero.
    pub fn set_stall(&mut self, stall: f64) {
        self.stall = sanitize_stall(stall);
    }

    /// Whether the transition is eased rather than linear.
    pub fn ease(&self) -> bool {
        self.easing.is_eased()
    }

    pub fn set_ease(&mut self, ease: bool) {
        self.easing = EaseType::from_flag(ease);
    }

    pub fn easing(&self) -> EaseType {
        self.easing
    }

    pub fn set_easing(&mut self, easing: EaseType) {
        self.easing = easing;
    }

    /// Total cycle length: transition plus stall.
    pub fn cycle_length(&self) -> f64 {
        self.duration + self.stall
    }

    /// Whether a cycle has started and not yet completed.
    pub fn is_running(&self) -> bool {
        self.initial_time.is_some()
    }

    /// Seconds since the current cycle began, if one is running.
    pub fn elapsed(&self, now: f64) -> Option<f64> {
        self.initial_time.map(|start| now - start)
    }

    /// Forget the current cycle. The next update starts again from `from`.
    pub fn reset(&mut self) {
        self.initial_time = None;
    }

    /// Advance the plan to `now` (seconds, non-decreasing between calls).
    pub fn update(&mut self, now: f64) -> PlanFrame {
        let start = *self.initial_time.get_or_insert(now);
        let elapsed = now - start;
        let progress = elapsed / self.duration;

        if progress < 1.0 {
            let t = self.easing.apply(progress);
            PlanFrame::Moving(<Vec3 as Tweenable>::lerp(self.from, self.to, t))
        } else if elapsed < self.duration + self.stall {
            PlanFrame::Holding(self.to)
        } else {
            log::debug!(
                "Camera plan {:?} -> {:?} finished after {:.3}s",
                self.from,
                self.to,
                elapsed
            );
            self.reset();
            PlanFrame::Finished
        }
    }
}

fn sanitize_duration(duration: f64) -> f64 {
    if duration.is_nan() {
        MIN_DURATION
    } else {
        duration.max(MIN_DURATION)
    }
}

fn sanitize_stall(stall: f64) -> f64 {
    if stall.is_nan() {
        0.0
    } else {
        stall.max(0.0)
    }
}
