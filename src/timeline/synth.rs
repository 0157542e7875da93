use crate::{
    actuator::{gripper::Gripper, log::ActionLog},
    foundation::{
        core::Pose,
        error::{GriplineError, GriplineResult},
    },
    kinematics::timing::TimingModel,
};

/// Default pre/post roll added around the synthesized motion, in time units.
pub const DEFAULT_PADDING: f64 = 10.0;
/// Smallest frame range a timeline may report.
pub const MIN_FRAME_SPAN: f64 = 1.0;

/// Position keyframe at an absolute time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimedKeyframe {
    /// Absolute time from the start of the log.
    pub time: f64,
    /// Actuator position once the entry has been applied.
    pub pose: Pose,
}

/// Synthesized keyframes plus the padded animation range.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// One keyframe per log entry, in log order.
    pub keyframes: Vec<TimedKeyframe>,
    /// Padded range start.
    pub frame_start: f64,
    /// Padded range end, always at least `MIN_FRAME_SPAN` past the start.
    pub frame_end: f64,
}

impl Timeline {
    /// Time of the last keyframe.
    pub fn duration(&self) -> f64 {
        self.keyframes.last().map_or(0.0, |k| k.time)
    }

    /// Pose at the last keyframe.
    pub fn final_pose(&self) -> Option<Pose> {
        self.keyframes.last().map(|k| k.pose)
    }

    /// Length of the padded range.
    pub fn span(&self) -> f64 {
        self.frame_end - self.frame_start
    }

    /// A single keyframe or no elapsed time at all.
    pub fn is_degenerate(&self) -> bool {
        self.keyframes.len() <= 1 || self.duration() == 0.0
    }
}

/// Replays an [`ActionLog`] against a fresh actuator and times every entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineSynthesizer {
    timing: TimingModel,
    padding: f64, // >= 0
}

impl Default for TimelineSynthesizer {
    fn default() -> Self {
        Self {
            timing: TimingModel::default(),
            padding: DEFAULT_PADDING,
        }
    }
}

impl TimelineSynthesizer {
    pub fn new(timing: TimingModel, padding: f64) -> GriplineResult<Self> {
        if !padding.is_finite() || padding < 0.0 {
            return Err(GriplineError::validation(
                "padding must be finite and >= 0",
            ));
        }
        Ok(Self { timing, padding })
    }

    pub fn timing(&self) -> &TimingModel {
        &self.timing
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Build the timeline for `log`. Pure: the same log always yields the same timeline.
    #[tracing::instrument(skip(self, log), fields(entries = log.len()))]
    pub fn synthesize(&self, log: &ActionLog) -> Timeline {
        // Never the authoring gripper: its pose has already advanced past every move.
        let mut replay = Gripper::new(log.init_pose());
        let mut current = 0.0;
        let mut start = None;

        let mut keyframes = Vec::with_capacity(log.len());
        keyframes.push(TimedKeyframe {
            time: current,
            pose: replay.pose(),
        });

        for action in log.commands() {
            let duration = self.timing.duration_of(action, &replay);
            replay.apply(action);
            current += duration;
            start.get_or_insert(current);

            tracing::debug!(action = action.tag(), duration, time = current, "segment");
            keyframes.push(TimedKeyframe {
                time: current,
                pose: replay.pose(),
            });
        }

        let frame_start = start.unwrap_or(0.0) - self.padding;
        let frame_end = (current + self.padding).max(frame_start + MIN_FRAME_SPAN);

        let timeline = Timeline {
            keyframes,
            frame_start,
            frame_end,
        };
        if timeline.is_degenerate() {
            tracing::warn!(
                keyframes = timeline.keyframes.len(),
                frame_start,
                frame_end,
                "degenerate timeline: no elapsed motion"
            );
        }
        timeline
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/synth.rs"]
mod tests;
