//! Gripline stages a gripper in a host 3D authoring application, records the
//! commands issued to it and turns that record into a timed keyframe
//! animation the host can render.
//!
//! # Pipeline overview
//!
//! 1. **Record**: [`Gripper`] commands mutate the actuator and append to its [`ActionLog`]
//! 2. **Synthesize**: `ActionLog -> Timeline` by replaying the log against a fresh actuator
//!    and timing each entry with a [`TimingModel`]
//! 3. **Apply**: key every timeline entry on the host object and set the padded frame range
//! 4. **Render**: ask the host to render to a run-specific output path
//!
//! Steps 3 and 4 go through the [`SceneAdapter`] trait. [`MemoryScene`] keeps everything in
//! memory; [`CommandPlan`] records the calls as JSON for a host-side script.
//!
//! Synthesis is pure and infallible. Errors only come from parameter validation, config
//! loading and adapter calls.
#![forbid(unsafe_code)]

mod actuator;
mod foundation;
mod host;
mod kinematics;
mod session;
mod timeline;

pub use actuator::gripper::{GripState, Gripper};
pub use actuator::log::{ActionKind, ActionLog};
pub use foundation::core::{DVec3, FrameNumber, Pose, frame_number};
pub use foundation::error::{GriplineError, GriplineResult};
pub use host::adapter::{
    KeyedProperty, Material, ObjectId, ObjectKind, RenderMode, RenderOptions, SceneAdapter,
    Transform,
};
pub use host::apply::{apply_timeline, host_frame_range};
pub use host::memory::{MemoryScene, SceneObject};
pub use host::plan::{CommandPlan, HostCommand};
pub use kinematics::timing::{DEFAULT_GRIP_DURATION, DEFAULT_VELOCITY, TimingModel};
pub use session::config::{
    CONFIG_ENV, DEFAULT_CONFIG_FILE, InputConfig, OutputConfig, SessionConfig, TimingConfig,
};
pub use session::output::{RunId, ensure_parent_dir, render_output_path};
pub use session::run::{Session, SessionReport};
pub use timeline::synth::{
    DEFAULT_PADDING, MIN_FRAME_SPAN, TimedKeyframe, Timeline, TimelineSynthesizer,
};
