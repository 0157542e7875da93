use super::*;

#[test]
fn distance_is_euclidean() {
    let a = Pose::new(1.0, 0.0, 0.5);
    let b = Pose::new(1.0, -2.0, 0.0);
    assert!((a.distance(b) - 4.25f64.sqrt()).abs() < 1e-12);
    assert_eq!(a.distance(a), 0.0);
}

#[test]
fn pose_serializes_as_xyz_array() {
    let p = Pose::new(1.0, -2.0, 0.5);
    let s = serde_json::to_string(&p).unwrap();
    assert_eq!(s, "[1.0,-2.0,0.5]");
    let de: Pose = serde_json::from_str(&s).unwrap();
    assert_eq!(de, p);
}

#[test]
fn frame_number_rounds_to_nearest() {
    assert_eq!(frame_number(9.4), 9);
    assert_eq!(frame_number(9.5), 10);
    assert_eq!(frame_number(-0.4), 0);
    assert_eq!(frame_number(-10.0), -10);
}
