//! # camera-timeline - time-driven camera moves
//!
//! Smooth, time-based camera pans and look-at transitions for 3D scenes.
//! A render loop feeds the current time into a [`CameraRig`] (or directly
//! into [`CameraDirector`]s) once per frame and applies the returned points
//! to its camera.

pub mod animation;
pub mod clock;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod framing;
pub mod rig;

pub use animation::{CameraDirector, CameraPlan, DirectorError, EaseType, PlanFrame};
pub use clock::SceneClock;
pub use framing::{camera_height, Viewport};
pub use rig::{CameraRig, RigFrame, Shot, Wobble};

/// Common imports for render loop code
pub mod prelude {
    pub use crate::animation::{CameraDirector, CameraPlan, PlanFrame};
    pub use crate::rig::{CameraRig, RigFrame, Shot};
    pub use glam::Vec3;
}
