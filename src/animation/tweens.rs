//! Easing curves and clamped interpolation used by camera plans.

use std::f64::consts::PI;

use glam::Vec3;
use keyframe::{ease, functions};
use serde::{Deserialize, Serialize};

/// Easing function type for camera transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EaseType {
    /// Constant speed interpolation
    #[default]
    Linear,
    /// Sine ease-in-out: slow start and end, `(1 - cos(pi * x)) / 2`
    SineInOut,
    /// Slow start, fast end
    EaseIn,
    /// Fast start, slow end
    EaseOut,
    /// Quadratic ease out
    QuadOut,
    /// Cubic ease out
    CubicOut,
}

impl EaseType {
    /// Map a boolean "ease" flag onto a curve: `true` is sine ease-in-out.
    pub fn from_flag(ease: bool) -> Self {
        if ease {
            EaseType::SineInOut
        } else {
            EaseType::Linear
        }
    }

    /// Whether this curve is anything other than linear.
    pub fn is_eased(&self) -> bool {
        *self != EaseType::Linear
    }

    /// Apply the easing curve to a progress value.
    ///
    /// Progress is clamped to `[0, 1]` first, so values past the end of a
    /// transition never overshoot.
    pub fn apply(&self, progress: f64) -> f32 {
        let t = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let result = match self {
            EaseType::Linear => t,
            EaseType::SineInOut => ease_in_out_sine(t),
            EaseType::EaseIn => ease(functions::EaseIn, 0.0, 1.0, t),
            EaseType::EaseOut => ease(functions::EaseOut, 0.0, 1.0, t),
            EaseType::QuadOut => ease(functions::EaseOutQuad, 0.0, 1.0, t),
            EaseType::CubicOut => ease(functions::EaseOutCubic, 0.0, 1.0, t),
        };
        result as f32
    }
}

/// Standard sine ease-in-out.
pub fn ease_in_out_sine(x: f64) -> f64 {
    (1.0 - (PI * x).cos()) / 2.0
}

/// Types that can be interpolated component-wise.
pub trait Tweenable: Copy {
    /// `a + (b - a) * t`, with `t` clamped to `[0, 1]`. Exact when `a == b`.
    fn lerp(a: Self, b: Self, t: f32) -> Self;
}

impl Tweenable for f32 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        a + (b - a) * t
    }
}

impl Tweenable for Vec3 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        Vec3::new(
            <f32 as Tweenable>::lerp(a.x, b.x, t),
            <f32 as Tweenable>::lerp(a.y, b.y, t),
            <f32 as Tweenable>::lerp(a.z, b.z, t),
        )
    }
}
