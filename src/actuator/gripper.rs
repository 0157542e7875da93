use crate::{
    actuator::log::{ActionKind, ActionLog},
    foundation::{
        core::Pose,
        error::{GriplineError, GriplineResult},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GripState {
    #[default]
    Opened,
    Closed,
}

/// Simulated gripper: current pose, grip state and the log of every command
/// issued through it.
///
/// Command methods mutate state immediately and append to the log. The
/// synthesizer never replays against an authoring instance; it builds a
/// fresh `Gripper` from the log's `Init` pose and drives it with
/// [`Gripper::apply`].
#[derive(Clone, Debug)]
pub struct Gripper {
    pose: Pose,
    grip: GripState,
    log: ActionLog,
}

impl Gripper {
    pub fn new(initial: Pose) -> Self {
        Self {
            pose: initial,
            grip: GripState::Opened,
            log: ActionLog::new(initial),
        }
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn grip(&self) -> GripState {
        self.grip
    }

    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    pub fn into_log(self) -> ActionLog {
        self.log
    }

    pub fn move_to(&mut self, pose: Pose) -> &mut Self {
        self.record(ActionKind::MoveTo(pose))
    }

    pub fn close(&mut self) -> &mut Self {
        self.record(ActionKind::Close)
    }

    pub fn open(&mut self) -> &mut Self {
        self.record(ActionKind::Open)
    }

    /// Issue a recorded command again through the matching command method.
    /// `Init` cannot be issued; it only comes from [`Gripper::new`].
    pub fn issue(&mut self, action: &ActionKind) -> GriplineResult<&mut Self> {
        match *action {
            ActionKind::Init(_) => Err(GriplineError::validation(
                "init cannot be issued to a bound gripper",
            )),
            ActionKind::MoveTo(pose) => Ok(self.move_to(pose)),
            ActionKind::Close => Ok(self.close()),
            ActionKind::Open => Ok(self.open()),
        }
    }

    /// Apply an action's effect without recording it.
    ///
    /// Repeated `Close`/`Open` are accepted and leave the grip unchanged.
    pub fn apply(&mut self, action: &ActionKind) {
        match *action {
            ActionKind::Init(pose) | ActionKind::MoveTo(pose) => self.pose = pose,
            ActionKind::Close => self.grip = GripState::Closed,
            ActionKind::Open => self.grip = GripState::Opened,
        }
    }

    fn record(&mut self, action: ActionKind) -> &mut Self {
        self.apply(&action);
        self.log.append(action);
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/actuator/gripper.rs"]
mod tests;
