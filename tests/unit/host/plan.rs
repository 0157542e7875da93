use super::*;
use crate::foundation::core::Pose;

#[test]
fn records_calls_in_order() {
    let mut plan = CommandPlan::new();
    plan.open_scene(Path::new("scenes/table.blend")).unwrap();
    let grip = plan.find_object("Gripper").unwrap();
    plan.insert_keyframe(&grip, 0, &KeyedProperty::Location(Pose::ORIGIN))
        .unwrap();
    plan.set_animation_range(-10, 10).unwrap();
    plan.render(Path::new("out/grip-0000.png"), &RenderOptions::default())
        .unwrap();

    let ops: Vec<&str> = plan
        .commands()
        .iter()
        .map(|c| match c {
            HostCommand::OpenScene { .. } => "open_scene",
            HostCommand::CreateObject { .. } => "create_object",
            HostCommand::SetObjectTransform { .. } => "set_object_transform",
            HostCommand::InsertKeyframe { .. } => "insert_keyframe",
            HostCommand::SetAnimationRange { .. } => "set_animation_range",
            HostCommand::Render { .. } => "render",
        })
        .collect();
    assert_eq!(
        ops,
        ["open_scene", "insert_keyframe", "set_animation_range", "render"]
    );
}

#[test]
fn json_is_tagged_by_op() {
    let mut plan = CommandPlan::new();
    plan.set_animation_range(0, 66).unwrap();
    let json: serde_json::Value = serde_json::from_str(&plan.to_json_pretty().unwrap()).unwrap();
    assert_eq!(json["commands"][0]["op"], "set_animation_range");
    assert_eq!(json["commands"][0]["end"], 66);
}

#[test]
fn keyframe_entries_carry_data_path() {
    let mut plan = CommandPlan::new();
    let id = ObjectId::new("Gripper");
    plan.insert_keyframe(&id, 25, &KeyedProperty::Location(Pose::new(1.0, 0.0, 0.5)))
        .unwrap();
    let json: serde_json::Value = serde_json::to_value(&plan).unwrap();
    let cmd = &json["commands"][0];
    assert_eq!(cmd["data_path"], "location");
    assert_eq!(cmd["property"]["location"][2], 0.5);
}

#[test]
fn created_names_stay_unique_across_reload() {
    let mut plan = CommandPlan::new();
    plan.open_scene(Path::new("a.blend")).unwrap();
    plan.create_object(ObjectKind::Cube, &Transform::default(), &Material::default())
        .unwrap();

    let mut reloaded = CommandPlan::from_json(&plan.to_json_pretty().unwrap()).unwrap();
    assert_eq!(reloaded, plan);
    let id = reloaded
        .create_object(ObjectKind::Cube, &Transform::default(), &Material::default())
        .unwrap();
    assert_eq!(id.as_str(), "Cube.001");
}

#[test]
fn rejects_spawn_before_scene_and_inverted_range() {
    let mut plan = CommandPlan::new();
    assert!(
        plan.create_object(ObjectKind::Plane, &Transform::default(), &Material::default())
            .is_err()
    );
    assert!(plan.set_animation_range(3, 2).is_err());
    assert!(plan.commands().is_empty());
    assert_eq!(plan.find_object(""), None);
}

#[test]
fn write_to_creates_parent_dirs() {
    let dir = PathBuf::from("target").join("plan_unit");
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("nested").join("plan.json");

    let mut plan = CommandPlan::new();
    plan.open_scene(Path::new("a.blend")).unwrap();
    plan.write_to(&path).unwrap();

    let back = CommandPlan::from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(back.commands().len(), 1);
}
