use crate::foundation::{
    core::Pose,
    error::{GriplineError, GriplineResult},
};

/// One recorded actuator command with its own arguments.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Binds the actuator to its starting pose. Only ever the first entry.
    Init(Pose),
    /// Straight-line move to the target pose.
    MoveTo(Pose),
    /// Close the grip.
    Close,
    /// Open the grip.
    Open,
}

impl ActionKind {
    /// Short lowercase tag, used in logs.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Init(_) => "init",
            Self::MoveTo(_) => "move_to",
            Self::Close => "close",
            Self::Open => "open",
        }
    }
}

/// Append-only ordered record of actuator commands.
///
/// The first entry is always [`ActionKind::Init`] and no other entry is.
/// Entries are only appended by [`crate::Gripper`] command methods, so a log
/// is never reordered or edited after the fact.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<ActionKind>", into = "Vec<ActionKind>")]
pub struct ActionLog {
    entries: Vec<ActionKind>,
}

impl ActionLog {
    pub(crate) fn new(init: Pose) -> Self {
        Self {
            entries: vec![ActionKind::Init(init)],
        }
    }

    pub(crate) fn append(&mut self, action: ActionKind) {
        debug_assert!(!matches!(action, ActionKind::Init(_)));
        self.entries.push(action);
    }

    /// Pose carried by the leading `Init` entry.
    pub fn init_pose(&self) -> Pose {
        match self.entries[0] {
            ActionKind::Init(pose) => pose,
            // Construction and deserialization both guarantee a leading Init.
            _ => unreachable!("action log must start with Init"),
        }
    }

    /// All entries in insertion order, `Init` included.
    pub fn entries(&self) -> &[ActionKind] {
        &self.entries
    }

    /// Entries after the leading `Init`.
    pub fn commands(&self) -> &[ActionKind] {
        &self.entries[1..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a log holds at least its `Init` entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ActionKind> {
        self.entries.iter()
    }
}

impl TryFrom<Vec<ActionKind>> for ActionLog {
    type Error = GriplineError;

    fn try_from(entries: Vec<ActionKind>) -> GriplineResult<Self> {
        match entries.first() {
            None => return Err(GriplineError::validation("action log must not be empty")),
            Some(ActionKind::Init(_)) => {}
            Some(other) => {
                return Err(GriplineError::validation(format!(
                    "action log must start with init, found '{}'",
                    other.tag()
                )));
            }
        }
        if let Some(pos) = entries[1..]
            .iter()
            .position(|a| matches!(a, ActionKind::Init(_)))
        {
            return Err(GriplineError::validation(format!(
                "action log has a second init at entry {}",
                pos + 1
            )));
        }
        Ok(Self { entries })
    }
}

impl From<ActionLog> for Vec<ActionKind> {
    fn from(log: ActionLog) -> Self {
        log.entries
    }
}

impl<'a> IntoIterator for &'a ActionLog {
    type Item = &'a ActionKind;
    type IntoIter = std::slice::Iter<'a, ActionKind>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/actuator/log.rs"]
mod tests;
