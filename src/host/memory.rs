use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::{
    foundation::{
        core::FrameNumber,
        error::{GriplineError, GriplineResult},
    },
    host::adapter::{
        KeyedProperty, Material, ObjectId, ObjectKind, RenderOptions, SceneAdapter, Transform,
        unique_object_name,
    },
};

#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    /// `None` for objects that came with the scene file.
    pub kind: Option<ObjectKind>,
    pub transform: Transform,
    pub material: Option<Material>,
    /// Keys in insertion order.
    pub keyframes: Vec<(FrameNumber, KeyedProperty)>,
}

impl SceneObject {
    fn loaded() -> Self {
        Self {
            kind: None,
            transform: Transform::default(),
            material: None,
            keyframes: Vec::new(),
        }
    }
}

/// In-memory host for tests and dry runs.
///
/// Objects registered with [`MemoryScene::with_object`] stand in for the
/// contents of whatever scene file gets opened.
#[derive(Debug, Default)]
pub struct MemoryScene {
    scene: Option<PathBuf>,
    objects: BTreeMap<ObjectId, SceneObject>,
    range: Option<(FrameNumber, FrameNumber)>,
    renders: Vec<(PathBuf, RenderOptions)>,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(mut self, name: impl Into<String>) -> Self {
        self.objects
            .insert(ObjectId::new(name), SceneObject::loaded());
        self
    }

    pub fn scene(&self) -> Option<&Path> {
        self.scene.as_deref()
    }

    pub fn object(&self, id: &ObjectId) -> Option<&SceneObject> {
        self.objects.get(id)
    }

    pub fn objects(&self) -> impl Iterator<Item = (&ObjectId, &SceneObject)> {
        self.objects.iter()
    }

    pub fn animation_range(&self) -> Option<(FrameNumber, FrameNumber)> {
        self.range
    }

    pub fn renders(&self) -> &[(PathBuf, RenderOptions)] {
        &self.renders
    }

    fn object_mut(&mut self, id: &ObjectId) -> GriplineResult<&mut SceneObject> {
        self.objects
            .get_mut(id)
            .ok_or_else(|| GriplineError::host(format!("unknown object '{id}'")))
    }

    fn require_scene(&self) -> GriplineResult<()> {
        if self.scene.is_none() {
            return Err(GriplineError::host("no scene is open"));
        }
        Ok(())
    }
}

impl SceneAdapter for MemoryScene {
    fn open_scene(&mut self, path: &Path) -> GriplineResult<()> {
        if path.as_os_str().is_empty() {
            return Err(GriplineError::host("scene path must be non-empty"));
        }
        self.scene = Some(path.to_path_buf());
        Ok(())
    }

    fn find_object(&self, name: &str) -> Option<ObjectId> {
        let id = ObjectId::new(name);
        self.objects.contains_key(&id).then_some(id)
    }

    fn create_object(
        &mut self,
        kind: ObjectKind,
        transform: &Transform,
        material: &Material,
    ) -> GriplineResult<ObjectId> {
        self.require_scene()?;
        let id = unique_object_name(kind, |id| self.objects.contains_key(id));
        self.objects.insert(
            id.clone(),
            SceneObject {
                kind: Some(kind),
                transform: *transform,
                material: Some(*material),
                keyframes: Vec::new(),
            },
        );
        Ok(id)
    }

    fn set_object_transform(
        &mut self,
        id: &ObjectId,
        transform: &Transform,
    ) -> GriplineResult<()> {
        self.object_mut(id)?.transform = *transform;
        Ok(())
    }

    fn insert_keyframe(
        &mut self,
        id: &ObjectId,
        frame: FrameNumber,
        property: &KeyedProperty,
    ) -> GriplineResult<()> {
        self.object_mut(id)?.keyframes.push((frame, *property));
        Ok(())
    }

    fn set_animation_range(&mut self, start: FrameNumber, end: FrameNumber) -> GriplineResult<()> {
        if start > end {
            return Err(GriplineError::host(format!(
                "animation range start {start} is after end {end}"
            )));
        }
        self.range = Some((start, end));
        Ok(())
    }

    fn render(&mut self, output: &Path, options: &RenderOptions) -> GriplineResult<()> {
        self.require_scene()?;
        self.renders.push((output.to_path_buf(), *options));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/memory.rs"]
mod tests;
