use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    foundation::{
        core::FrameNumber,
        error::{GriplineError, GriplineResult},
    },
    host::adapter::{
        KeyedProperty, Material, ObjectId, ObjectKind, RenderMode, RenderOptions, SceneAdapter,
        Transform, unique_object_name,
    },
    session::output::ensure_parent_dir,
};

/// One recorded host call.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum HostCommand {
    OpenScene {
        path: PathBuf,
    },
    CreateObject {
        id: ObjectId,
        kind: ObjectKind,
        transform: Transform,
        material: Material,
    },
    SetObjectTransform {
        id: ObjectId,
        transform: Transform,
    },
    InsertKeyframe {
        id: ObjectId,
        frame: FrameNumber,
        data_path: String,
        property: KeyedProperty,
    },
    SetAnimationRange {
        start: FrameNumber,
        end: FrameNumber,
    },
    Render {
        output: PathBuf,
        mode: RenderMode,
    },
}

/// Adapter that records every host call in order, for a host-side script to
/// replay later.
///
/// Object lookups resolve by name without checking; the host reports missing
/// objects when the plan is replayed.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CommandPlan {
    commands: Vec<HostCommand>,
    #[serde(skip)]
    created: BTreeSet<ObjectId>,
    #[serde(skip)]
    scene_open: bool,
}

impl CommandPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[HostCommand] {
        &self.commands
    }

    pub fn to_json_pretty(&self) -> GriplineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(s: &str) -> GriplineResult<Self> {
        let mut plan: Self = serde_json::from_str(s)?;
        for cmd in &plan.commands {
            match cmd {
                HostCommand::OpenScene { .. } => plan.scene_open = true,
                HostCommand::CreateObject { id, .. } => {
                    plan.created.insert(id.clone());
                }
                _ => {}
            }
        }
        Ok(plan)
    }

    /// Write the plan as pretty JSON, creating parent directories.
    pub fn write_to(&self, path: &Path) -> GriplineResult<()> {
        ensure_parent_dir(path)?;
        let json = self.to_json_pretty()?;
        std::fs::write(path, json)
            .with_context(|| format!("write command plan '{}'", path.display()))?;
        Ok(())
    }

    fn require_scene(&self) -> GriplineResult<()> {
        if !self.scene_open {
            return Err(GriplineError::host("no scene is open"));
        }
        Ok(())
    }
}

impl SceneAdapter for CommandPlan {
    fn open_scene(&mut self, path: &Path) -> GriplineResult<()> {
        if path.as_os_str().is_empty() {
            return Err(GriplineError::host("scene path must be non-empty"));
        }
        self.scene_open = true;
        self.commands.push(HostCommand::OpenScene {
            path: path.to_path_buf(),
        });
        Ok(())
    }

    fn find_object(&self, name: &str) -> Option<ObjectId> {
        (!name.is_empty()).then(|| ObjectId::new(name))
    }

    fn create_object(
        &mut self,
        kind: ObjectKind,
        transform: &Transform,
        material: &Material,
    ) -> GriplineResult<ObjectId> {
        self.require_scene()?;
        let id = unique_object_name(kind, |id| self.created.contains(id));
        self.created.insert(id.clone());
        self.commands.push(HostCommand::CreateObject {
            id: id.clone(),
            kind,
            transform: *transform,
            material: *material,
        });
        Ok(id)
    }

    fn set_object_transform(
        &mut self,
        id: &ObjectId,
        transform: &Transform,
    ) -> GriplineResult<()> {
        self.commands.push(HostCommand::SetObjectTransform {
            id: id.clone(),
            transform: *transform,
        });
        Ok(())
    }

    fn insert_keyframe(
        &mut self,
        id: &ObjectId,
        frame: FrameNumber,
        property: &KeyedProperty,
    ) -> GriplineResult<()> {
        self.commands.push(HostCommand::InsertKeyframe {
            id: id.clone(),
            frame,
            data_path: property.data_path().to_string(),
            property: *property,
        });
        Ok(())
    }

    fn set_animation_range(&mut self, start: FrameNumber, end: FrameNumber) -> GriplineResult<()> {
        if start > end {
            return Err(GriplineError::host(format!(
                "animation range start {start} is after end {end}"
            )));
        }
        self.commands
            .push(HostCommand::SetAnimationRange { start, end });
        Ok(())
    }

    fn render(&mut self, output: &Path, options: &RenderOptions) -> GriplineResult<()> {
        self.require_scene()?;
        self.commands.push(HostCommand::Render {
            output: output.to_path_buf(),
            mode: options.mode,
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/plan.rs"]
mod tests;
