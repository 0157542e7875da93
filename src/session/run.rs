use std::path::PathBuf;

use crate::{
    actuator::{gripper::Gripper, log::ActionKind},
    foundation::{
        core::{FrameNumber, Pose},
        error::{GriplineError, GriplineResult},
    },
    host::{
        adapter::{Material, ObjectId, ObjectKind, SceneAdapter, Transform},
        apply::apply_timeline,
    },
    session::{config::SessionConfig, output::RunId},
    timeline::synth::{Timeline, TimelineSynthesizer},
};

/// Outcome of a finished session.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SessionReport {
    pub run: RunId,
    pub timeline: Timeline,
    /// Host frame range that was set.
    pub frame_range: (FrameNumber, FrameNumber),
    /// Path handed to the host's render call.
    pub output: PathBuf,
}

/// One staging run: open scene, record gripper commands, synthesize, render.
///
/// The session owns the authoring gripper and its log for its whole
/// lifetime. `finish` consumes the session.
pub struct Session<'a, A: SceneAdapter + ?Sized> {
    adapter: &'a mut A,
    config: SessionConfig,
    synth: TimelineSynthesizer,
    run: RunId,
    grip_object: ObjectId,
    gripper: Gripper,
}

impl<'a, A: SceneAdapter + ?Sized> Session<'a, A> {
    /// Open the configured scene and bind the gripper object at `start`.
    ///
    /// Returns [`GriplineError::Configuration`] when the scene has no object
    /// named `input_config.grip_name`.
    #[tracing::instrument(skip(adapter, config), fields(scene = %config.input.scene_file.display()))]
    pub fn begin(
        adapter: &'a mut A,
        config: SessionConfig,
        run: RunId,
        start: Pose,
    ) -> GriplineResult<Self> {
        config.validate()?;
        let synth = config.timing.synthesizer()?;

        adapter.open_scene(&config.input.scene_file)?;
        let grip_object = adapter
            .find_object(&config.input.grip_name)
            .ok_or_else(|| {
                GriplineError::configuration(format!(
                    "no grip object '{}' in scene '{}'",
                    config.input.grip_name,
                    config.input.scene_file.display()
                ))
            })?;
        adapter.set_object_transform(&grip_object, &Transform::at(start))?;

        Ok(Self {
            adapter,
            config,
            synth,
            run,
            grip_object,
            gripper: Gripper::new(start),
        })
    }

    /// [`Session::begin`] at the configured `input_config.start_pose`, or the
    /// origin when none is set.
    pub fn begin_at_config_pose(
        adapter: &'a mut A,
        config: SessionConfig,
        run: RunId,
    ) -> GriplineResult<Self> {
        let start = config.input.start_pose.unwrap_or(Pose::ORIGIN);
        Self::begin(adapter, config, run, start)
    }

    pub fn gripper(&self) -> &Gripper {
        &self.gripper
    }

    /// Authoring gripper; every command issued here is recorded.
    pub fn gripper_mut(&mut self) -> &mut Gripper {
        &mut self.gripper
    }

    pub fn grip_object(&self) -> &ObjectId {
        &self.grip_object
    }

    /// Forward one non-`Init` log entry to the authoring gripper.
    pub fn issue(&mut self, action: &ActionKind) -> GriplineResult<()> {
        self.gripper.issue(action)?;
        Ok(())
    }

    /// Spawn a scene prop through the host.
    pub fn spawn(
        &mut self,
        kind: ObjectKind,
        transform: &Transform,
        material: &Material,
    ) -> GriplineResult<ObjectId> {
        self.adapter.create_object(kind, transform, material)
    }

    /// Synthesize the recorded log, key it onto the grip object and render.
    #[tracing::instrument(skip(self), fields(run = %self.run))]
    pub fn finish(self) -> GriplineResult<SessionReport> {
        let timeline = self.synth.synthesize(self.gripper.log());
        let frame_range = apply_timeline(&mut *self.adapter, &self.grip_object, &timeline)?;

        let output = self.config.output.path_for(self.run);
        self.adapter
            .render(&output, &self.config.output.render_options())?;

        tracing::info!(
            keyframes = timeline.keyframes.len(),
            start = frame_range.0,
            end = frame_range.1,
            output = %output.display(),
            "session finished"
        );
        Ok(SessionReport {
            run: self.run,
            timeline,
            frame_range,
            output,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/run.rs"]
mod tests;
