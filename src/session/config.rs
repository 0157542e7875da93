use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    foundation::{
        core::Pose,
        error::{GriplineError, GriplineResult},
    },
    host::adapter::{RenderMode, RenderOptions},
    kinematics::timing::{DEFAULT_GRIP_DURATION, DEFAULT_VELOCITY, TimingModel},
    session::output::{RunId, render_output_path},
    timeline::synth::{DEFAULT_PADDING, TimelineSynthesizer},
};

/// Environment variable naming the session config file.
pub const CONFIG_ENV: &str = "GRIPLINE_CONFIG";
/// Config file used when [`CONFIG_ENV`] is unset.
pub const DEFAULT_CONFIG_FILE: &str = "gripline-config.json";

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SessionConfig {
    #[serde(rename = "input_config")]
    pub input: InputConfig,
    #[serde(rename = "output_config", default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub timing: TimingConfig,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InputConfig {
    /// Scene file handed to the host unchanged.
    pub scene_file: PathBuf,
    /// Name of the gripper object inside that scene.
    pub grip_name: String,
    /// Pose the gripper starts from. A log replayed against this config must
    /// begin at it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_pose: Option<Pose>,
}

impl InputConfig {
    /// Start pose for a log whose `Init` sits at `init`.
    ///
    /// Without a configured `start_pose` the log decides. With one, the two
    /// must agree exactly.
    pub fn resolve_start(&self, init: Pose) -> GriplineResult<Pose> {
        match self.start_pose {
            None => Ok(init),
            Some(start) if start == init => Ok(start),
            Some(start) => Err(GriplineError::configuration(format!(
                "action log starts at {:?} but input_config.start_pose is {:?}",
                init.to_array(),
                start.to_array()
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub stem: String,
    pub mode: RenderMode,
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            stem: "grip-test".to_string(),
            mode: RenderMode::Still,
            extension: "png".to_string(),
        }
    }
}

impl OutputConfig {
    pub fn path_for(&self, run: RunId) -> PathBuf {
        render_output_path(&self.dir, &self.stem, run, &self.extension)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions { mode: self.mode }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub velocity: f64,
    pub grip_duration: f64,
    pub padding: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            velocity: DEFAULT_VELOCITY,
            grip_duration: DEFAULT_GRIP_DURATION,
            padding: DEFAULT_PADDING,
        }
    }
}

impl TimingConfig {
    pub fn synthesizer(&self) -> GriplineResult<TimelineSynthesizer> {
        let timing = TimingModel::new(self.velocity, self.grip_duration)?;
        TimelineSynthesizer::new(timing, self.padding)
    }
}

impl SessionConfig {
    pub fn from_json(s: &str) -> GriplineResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> GriplineResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read session config '{}'", path.display()))
            .map_err(|e| GriplineError::configuration(format!("{e:#}")))?;
        Self::from_json(&text)
    }

    /// Load from the file named by `GRIPLINE_CONFIG`, or `gripline-config.json`.
    pub fn from_env() -> GriplineResult<Self> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::from_path(&path)
    }

    pub fn validate(&self) -> GriplineResult<()> {
        if self.input.scene_file.as_os_str().is_empty() {
            return Err(GriplineError::configuration(
                "input_config.scene_file must be non-empty",
            ));
        }
        if self.input.grip_name.trim().is_empty() {
            return Err(GriplineError::configuration(
                "input_config.grip_name must be non-empty",
            ));
        }
        if self.output.stem.trim().is_empty() {
            return Err(GriplineError::configuration(
                "output_config.stem must be non-empty",
            ));
        }
        self.timing.synthesizer().map(|_| ())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;
