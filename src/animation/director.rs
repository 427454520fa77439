//! Cyclic playback of camera plans.

use glam::Vec3;
use thiserror::Error;

use super::plan::{CameraPlan, PlanFrame};

/// Errors reported by [`CameraDirector`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectorError {
    #[error("Index {index} is out of bounds (director has {len} plans)")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Plays an ordered list of [`CameraPlan`]s one after another, wrapping
/// from the last plan back to the first.
///
/// Plan 0 is active from construction. UI code can jump to another plan with
/// [`set_active`](Self::set_active); the plan being left is reset so it
/// restarts cleanly from its `from` point when it is revisited.
#[derive(Debug, Clone, Default)]
pub struct CameraDirector {
    plans: Vec<CameraPlan>,
    /// Active plan, always `< plans.len()` when plans is non-empty
    index: usize,
}

impl CameraDirector {
    pub fn new(plans: Vec<CameraPlan>) -> Self {
        Self { plans, index: 0 }
    }

    /// Append a plan to the end of the playback order.
    pub fn add_plan(&mut self, plan: CameraPlan) {
        self.plans.push(plan);
    }

    pub fn plan(&self, index: usize) -> Option<&CameraPlan> {
        self.plans.get(index)
    }

    pub fn plan_mut(&mut self, index: usize) -> Option<&mut CameraPlan> {
        self.plans.get_mut(index)
    }

    /// Replace the plan at `index`, returning the previous one.
    pub fn set_plan(&mut self, index: usize, plan: CameraPlan) -> Result<CameraPlan, DirectorError> {
        let len = self.plans.len();
        let slot = self
            .plans
            .get_mut(index)
            .ok_or(DirectorError::IndexOutOfBounds { index, len })?;
        Ok(std::mem::replace(slot, plan))
    }

    pub fn plans(&self) -> &[CameraPlan] {
        &self.plans
    }

    /// Index of the active plan.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn active(&self) -> Option<&CameraPlan> {
        self.plans.get(self.index)
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Move on to the next plan, wrapping around after the last one.
    pub fn next(&mut self) {
        if self.plans.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.plans.len();
    }

    /// Switch to the plan at `index`.
    ///
    /// Out-of-range indices are logged and leave the director untouched.
    pub fn set_active(&mut self, index: usize) -> Result<(), DirectorError> {
        let len = self.plans.len();
        if index >= len {
            let err = DirectorError::IndexOutOfBounds { index, len };
            log::error!("{}", err);
            return Err(err);
        }

        self.plans[self.index].reset();
        self.index = index;
        Ok(())
    }

    /// Advance the active plan to `now`.
    ///
    /// Returns the point to apply to the camera, or `None` on the frame where
    /// the active plan finished and the director moved on. The next call
    /// starts producing points from the newly active plan.
    pub fn update(&mut self, now: f64) -> Option<Vec3> {
        let plan = self.plans.get_mut(self.index)?;
        match plan.update(now) {
            PlanFrame::Moving(point) | PlanFrame::Holding(point) => Some(point),
            PlanFrame::Finished => {
                let finished = self.index;
                self.next();
                log::debug!("Camera plan {} finished, advancing to plan {}", finished, self.index);
                None
            }
        }
    }
}
