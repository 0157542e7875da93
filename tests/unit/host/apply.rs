use super::*;
use crate::{
    actuator::gripper::Gripper,
    foundation::core::Pose,
    host::memory::MemoryScene,
    timeline::synth::{TimedKeyframe, TimelineSynthesizer},
};

#[test]
fn keys_are_rounded_and_range_is_widened() {
    let timeline = Timeline {
        keyframes: vec![
            TimedKeyframe {
                time: 0.0,
                pose: Pose::ORIGIN,
            },
            TimedKeyframe {
                time: 45.6,
                pose: Pose::new(1.0, -2.0, 0.0),
            },
        ],
        frame_start: -0.4,
        frame_end: 55.2,
    };
    let mut scene = MemoryScene::new().with_object("Gripper");
    let id = ObjectId::new("Gripper");

    let range = apply_timeline(&mut scene, &id, &timeline).unwrap();
    assert_eq!(range, (-1, 56));
    assert_eq!(scene.animation_range(), Some((-1, 56)));

    let frames: Vec<FrameNumber> = scene
        .object(&id)
        .unwrap()
        .keyframes
        .iter()
        .map(|(f, _)| *f)
        .collect();
    assert_eq!(frames, [0, 46]);
}

#[test]
fn one_key_per_timeline_entry_even_when_frames_collide() {
    let mut g = Gripper::new(Pose::ORIGIN);
    g.move_to(Pose::new(1.0, 0.0, 0.0))
        .move_to(Pose::new(1.0, 0.0, 0.0))
        .close();
    let timeline = TimelineSynthesizer::default().synthesize(g.log());

    let mut scene = MemoryScene::new().with_object("Gripper");
    let id = ObjectId::new("Gripper");
    apply_timeline(&mut scene, &id, &timeline).unwrap();

    let keys = &scene.object(&id).unwrap().keyframes;
    assert_eq!(keys.len(), g.log().len());
    assert_eq!(keys[1].0, keys[2].0);
    assert_eq!(keys[3], (20, KeyedProperty::Location(Pose::new(1.0, 0.0, 0.0))));
}

#[test]
fn unknown_object_fails_fast() {
    let timeline = TimelineSynthesizer::default().synthesize(&Gripper::new(Pose::ORIGIN).into_log());
    let mut scene = MemoryScene::new();
    assert!(apply_timeline(&mut scene, &ObjectId::new("Missing"), &timeline).is_err());
    assert_eq!(scene.animation_range(), None);
}
