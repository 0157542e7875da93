pub use glam::DVec3;

/// Position of an actuator in scene space. Rotation is not modeled.
#[derive(Clone, Copy, Debug, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Pose(pub DVec3);

impl Pose {
    /// The scene origin.
    pub const ORIGIN: Self = Self(DVec3::ZERO);

    /// Build a pose from its three coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Self) -> f64 {
        self.0.distance(other.0)
    }

    /// `[x, y, z]` view, handy for host calls.
    pub fn to_array(self) -> [f64; 3] {
        self.0.to_array()
    }
}

impl From<[f64; 3]> for Pose {
    fn from(v: [f64; 3]) -> Self {
        Self(DVec3::from_array(v))
    }
}

/// Host frame number. Signed because a padded range may start before frame 0.
pub type FrameNumber = i64;

/// Quantize a synthesized time to the nearest host frame.
pub fn frame_number(time: f64) -> FrameNumber {
    time.round() as FrameNumber
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
