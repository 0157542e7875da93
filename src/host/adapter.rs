use std::path::Path;

use crate::foundation::{
    core::{DVec3, FrameNumber, Pose},
    error::GriplineResult,
};

/// Host-side object handle. Hosts key objects by name.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ObjectId(pub String);

impl ObjectId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Primitive shapes a host can spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Cube,
    Sphere,
    Cylinder,
    Cone,
    Plane,
}

impl ObjectKind {
    /// Base name hosts use for a freshly spawned object of this kind.
    pub fn base_name(self) -> &'static str {
        match self {
            Self::Cube => "Cube",
            Self::Sphere => "Sphere",
            Self::Cylinder => "Cylinder",
            Self::Cone => "Cone",
            Self::Plane => "Plane",
        }
    }
}

/// Pick the host-style name for a new object: `Cube`, then `Cube.001`, `Cube.002`, ...
pub(crate) fn unique_object_name(kind: ObjectKind, taken: impl Fn(&ObjectId) -> bool) -> ObjectId {
    let base = kind.base_name();
    let first = ObjectId::new(base);
    if !taken(&first) {
        return first;
    }
    (1u32..)
        .map(|n| ObjectId::new(format!("{base}.{n:03}")))
        .find(|id| !taken(id))
        .unwrap_or(first)
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform {
    pub location: Pose,
    pub rotation_euler: DVec3, // radians, XYZ order
    pub scale: DVec3,          // default (1,1,1)
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            location: Pose::ORIGIN,
            rotation_euler: DVec3::ZERO,
            scale: DVec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(location: Pose) -> Self {
        Self {
            location,
            ..Self::default()
        }
    }
}

/// Flat surface material (straight-alpha linear RGBA).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Material {
    pub base_color: [f32; 4],
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Animated property carried by a keyframe. Only location is keyed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyedProperty {
    Location(Pose),
}

impl KeyedProperty {
    /// Host data path the property is keyed on.
    pub fn data_path(&self) -> &'static str {
        match self {
            Self::Location(_) => "location",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Render the current frame to a single image.
    #[default]
    Still,
    /// Render the whole animation range.
    Animation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct RenderOptions {
    pub mode: RenderMode,
}

/// Host application boundary: scene, object, keyframe and render calls.
///
/// Implementations forward to a real authoring host or record the calls.
/// Failures are returned unchanged to the caller; nothing here retries.
pub trait SceneAdapter {
    /// Load a scene file, replacing the current scene.
    fn open_scene(&mut self, path: &Path) -> GriplineResult<()>;

    /// Resolve an object in the open scene by name.
    fn find_object(&self, name: &str) -> Option<ObjectId>;

    /// Spawn a new object and return its handle.
    fn create_object(
        &mut self,
        kind: ObjectKind,
        transform: &Transform,
        material: &Material,
    ) -> GriplineResult<ObjectId>;

    fn set_object_transform(&mut self, id: &ObjectId, transform: &Transform)
    -> GriplineResult<()>;

    fn insert_keyframe(
        &mut self,
        id: &ObjectId,
        frame: FrameNumber,
        property: &KeyedProperty,
    ) -> GriplineResult<()>;

    fn set_animation_range(&mut self, start: FrameNumber, end: FrameNumber) -> GriplineResult<()>;

    /// Render to `output`; `options.mode` selects a still or the full range.
    fn render(&mut self, output: &Path, options: &RenderOptions) -> GriplineResult<()>;
}
