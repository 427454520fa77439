//! Position and look-at directors driven together from a render loop.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;

use crate::animation::{CameraDirector, DirectorError};
use crate::framing::{camera_height, Viewport};

/// Named camera shots. Each shot is a plan index shared by both directors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shot {
    /// Looking out toward the sunset
    Sunset,
    /// Angled down at the map
    Map,
}

impl Shot {
    pub fn plan_index(self) -> usize {
        match self {
            Shot::Sunset => 0,
            Shot::Map => 1,
        }
    }

    pub fn from_plan_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Shot::Sunset),
            1 => Some(Shot::Map),
            _ => None,
        }
    }
}

impl fmt::Display for Shot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shot::Sunset => write!(f, "sunset"),
            Shot::Map => write!(f, "map"),
        }
    }
}

impl FromStr for Shot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sunset" => Ok(Shot::Sunset),
            "map" => Ok(Shot::Map),
            other => Err(format!("Unknown shot '{}' (expected sunset or map)", other)),
        }
    }
}

/// Small periodic offset added to the look-at target so a parked camera
/// never looks perfectly still.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wobble {
    /// Angular frequency per axis (radians per second)
    pub frequency: Vec3,
    /// Peak offset per axis (world units)
    pub amplitude: Vec3,
}

impl Default for Wobble {
    fn default() -> Self {
        Self {
            frequency: Vec3::new(3.0, 1.4, 2.0),
            amplitude: Vec3::new(1.0 / 80.0, 1.0 / 90.0, 1.0 / 70.0),
        }
    }
}

impl Wobble {
    /// Offset at time `now`: sine on x and y, cosine on z.
    pub fn offset(&self, now: f64) -> Vec3 {
        let f = self.frequency.as_dvec3();
        let a = self.amplitude.as_dvec3();
        Vec3::new(
            ((f.x * now).sin() * a.x) as f32,
            ((f.y * now).sin() * a.y) as f32,
            ((f.z * now).cos() * a.z) as f32,
        )
    }
}

/// Camera cues for one frame. `None` means "leave that part of the camera
/// unchanged this frame".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RigFrame {
    pub position: Option<Vec3>,
    pub look_at: Option<Vec3>,
}

/// A scene camera: one director for the eye position, one for the look-at
/// target, always updated with the same time value.
#[derive(Debug, Clone)]
pub struct CameraRig {
    position: CameraDirector,
    look_at: CameraDirector,
    wobble: Option<Wobble>,
    /// Base height for the map vantage, before aspect correction
    base_height: f32,
}

impl CameraRig {
    pub fn new(position: CameraDirector, look_at: CameraDirector) -> Self {
        Self {
            position,
            look_at,
            wobble: None,
            base_height: 3.5,
        }
    }

    pub fn with_wobble(mut self, wobble: Option<Wobble>) -> Self {
        self.wobble = wobble;
        self
    }

    pub fn with_base_height(mut self, base_height: f32) -> Self {
        self.base_height = base_height;
        self
    }

    pub fn position(&self) -> &CameraDirector {
        &self.position
    }

    pub fn position_mut(&mut self) -> &mut CameraDirector {
        &mut self.position
    }

    pub fn look_at(&self) -> &CameraDirector {
        &self.look_at
    }

    pub fn look_at_mut(&mut self) -> &mut CameraDirector {
        &mut self.look_at
    }

    pub fn wobble(&self) -> Option<Wobble> {
        self.wobble
    }

    pub fn base_height(&self) -> f32 {
        self.base_height
    }

    /// Advance both directors to `now`.
    pub fn update(&mut self, now: f64) -> RigFrame {
        let position = self.position.update(now);
        let look_at = self
            .look_at
            .update(now)
            .map(|target| match self.wobble {
                Some(wobble) => target + wobble.offset(now),
                None => target,
            });
        RigFrame { position, look_at }
    }

    /// The shot the position director is currently playing, if it maps to one.
    pub fn shot(&self) -> Option<Shot> {
        Shot::from_plan_index(self.position.index())
    }

    /// Switch both directors to `shot`.
    ///
    /// A director already playing that shot is left alone, so pressing the
    /// same button twice does not restart the move. Both directors are
    /// checked before either switches: if one lacks the shot's plan the rig
    /// is left exactly as it was.
    pub fn view(&mut self, shot: Shot) -> Result<(), DirectorError> {
        let index = shot.plan_index();
        for director in [&self.position, &self.look_at] {
            if index >= director.len() {
                let err = DirectorError::IndexOutOfBounds {
                    index,
                    len: director.len(),
                };
                log::error!("Cannot switch to {} view: {}", shot, err);
                return Err(err);
            }
        }

        for director in [&mut self.position, &mut self.look_at] {
            if director.index() != index {
                director.set_active(index)?;
            }
        }
        log::info!("Camera switched to {} view", shot);
        Ok(())
    }

    /// Recompute the map vantage height for a new viewport and patch it into
    /// the position plans: the end of the map move and the start of the
    /// sunset move. Both endpoints are the map vantage, so the sunset move's
    /// `from.y` is patched as well as the map move's `to.y`; otherwise the
    /// sunset pan would start from the stale height after a resize.
    ///
    /// Returns `false` if the rig has no map-facing position plan.
    pub fn reframe(&mut self, viewport: Viewport) -> bool {
        let height = camera_height(viewport, self.base_height);

        let Some(map) = self.position.plan_mut(Shot::Map.plan_index()) else {
            return false;
        };
        map.to_mut().y = height;

        if let Some(sunset) = self.position.plan_mut(Shot::Sunset.plan_index()) {
            sunset.from_mut().y = height;
        }

        log::info!(
            "Reframed map vantage for {}x{} viewport: height {:.3}",
            viewport.width,
            viewport.height,
            height
        );
        true
    }
}
