use crate::{
    actuator::{gripper::Gripper, log::ActionKind},
    foundation::error::{GriplineError, GriplineResult},
};

/// Default straight-line speed, in distance units per time unit.
pub const DEFAULT_VELOCITY: f64 = 0.1;
/// Default cost of a grip open/close, in time units.
pub const DEFAULT_GRIP_DURATION: f64 = 10.0;

/// Maps an action, given the actuator state before it, to a duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingModel {
    velocity: f64,      // > 0
    grip_duration: f64, // >= 0
}

impl Default for TimingModel {
    fn default() -> Self {
        Self {
            velocity: DEFAULT_VELOCITY,
            grip_duration: DEFAULT_GRIP_DURATION,
        }
    }
}

impl TimingModel {
    pub fn new(velocity: f64, grip_duration: f64) -> GriplineResult<Self> {
        if !velocity.is_finite() || velocity <= 0.0 {
            return Err(GriplineError::validation(
                "velocity must be finite and > 0",
            ));
        }
        if !grip_duration.is_finite() || grip_duration < 0.0 {
            return Err(GriplineError::validation(
                "grip duration must be finite and >= 0",
            ));
        }
        Ok(Self {
            velocity,
            grip_duration,
        })
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn grip_duration(&self) -> f64 {
        self.grip_duration
    }

    /// Duration of `action` when issued from the state in `before`.
    pub fn duration_of(&self, action: &ActionKind, before: &Gripper) -> f64 {
        match *action {
            ActionKind::Init(_) => 0.0,
            ActionKind::MoveTo(target) => {
                let distance = before.pose().distance(target);
                if distance == 0.0 {
                    return 0.0;
                }
                distance / self.velocity
            }
            ActionKind::Close | ActionKind::Open => self.grip_duration,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kinematics/timing.rs"]
mod tests;
