//! Camera timeline: timed moves and their cyclic playback.
//!
//! Provides `CameraPlan` for a single eased move with a hold at the end,
//! and `CameraDirector` for playing a list of plans in a loop.

mod director;
mod plan;
mod tweens;

pub use director::{CameraDirector, DirectorError};
pub use plan::{CameraPlan, PlanFrame, MIN_DURATION};
pub use tweens::{ease_in_out_sine, EaseType, Tweenable};
