use super::*;
use crate::foundation::core::Pose;

#[test]
fn move_duration_is_distance_over_velocity() {
    let model = TimingModel::default();
    let g = Gripper::new(Pose::ORIGIN);
    let d = model.duration_of(&ActionKind::MoveTo(Pose::new(0.0, 3.0, 4.0)), &g);
    assert!((d - 50.0).abs() < 1e-9);
}

#[test]
fn move_to_current_pose_takes_no_time() {
    let model = TimingModel::default();
    let g = Gripper::new(Pose::new(1.0, -2.0, 0.0));
    let d = model.duration_of(&ActionKind::MoveTo(Pose::new(1.0, -2.0, 0.0)), &g);
    assert_eq!(d, 0.0);
    assert!(!d.is_nan());
}

#[test]
fn grip_transitions_cost_fixed_time_regardless_of_state() {
    let model = TimingModel::new(0.5, 7.0).unwrap();
    assert_eq!(model.grip_duration(), 7.0);
    assert_eq!(model.velocity(), 0.5);
    let mut g = Gripper::new(Pose::ORIGIN);
    assert_eq!(model.duration_of(&ActionKind::Close, &g), 7.0);
    g.close();
    assert_eq!(model.duration_of(&ActionKind::Close, &g), 7.0);
    assert_eq!(model.duration_of(&ActionKind::Open, &g), 7.0);
}

#[test]
fn init_takes_no_time() {
    let model = TimingModel::default();
    let g = Gripper::new(Pose::ORIGIN);
    assert_eq!(
        model.duration_of(&ActionKind::Init(Pose::new(5.0, 5.0, 5.0)), &g),
        0.0
    );
}

#[test]
fn new_rejects_bad_parameters() {
    assert!(TimingModel::new(0.0, 10.0).is_err());
    assert!(TimingModel::new(-1.0, 10.0).is_err());
    assert!(TimingModel::new(f64::NAN, 10.0).is_err());
    assert!(TimingModel::new(0.1, -1.0).is_err());
    assert!(TimingModel::new(0.1, f64::INFINITY).is_err());
    assert!(TimingModel::new(0.1, 0.0).is_ok());
}
