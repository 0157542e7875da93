use super::*;

#[test]
fn fresh_log_holds_only_init() {
    let log = ActionLog::new(Pose::new(1.0, 2.0, 3.0));
    assert_eq!(log.len(), 1);
    assert!(!log.is_empty());
    assert_eq!(log.init_pose(), Pose::new(1.0, 2.0, 3.0));
    assert!(log.commands().is_empty());
}

#[test]
fn append_preserves_insertion_order() {
    let mut log = ActionLog::new(Pose::ORIGIN);
    log.append(ActionKind::Close);
    log.append(ActionKind::MoveTo(Pose::new(1.0, 0.0, 0.0)));
    log.append(ActionKind::Open);
    let tags: Vec<_> = log.iter().map(ActionKind::tag).collect();
    assert_eq!(tags, ["init", "close", "move_to", "open"]);
}

#[test]
fn json_uses_snake_case_tags() {
    let mut log = ActionLog::new(Pose::ORIGIN);
    log.append(ActionKind::MoveTo(Pose::new(1.0, 0.0, 0.0)));
    log.append(ActionKind::Close);
    let s = serde_json::to_string(&log).unwrap();
    assert_eq!(
        s,
        r#"[{"init":[0.0,0.0,0.0]},{"move_to":[1.0,0.0,0.0]},"close"]"#
    );
    let de: ActionLog = serde_json::from_str(&s).unwrap();
    assert_eq!(de, log);
}

#[test]
fn deserialize_rejects_missing_leading_init() {
    assert!(serde_json::from_str::<ActionLog>("[]").is_err());
    assert!(serde_json::from_str::<ActionLog>(r#"["close"]"#).is_err());

    let err = ActionLog::try_from(vec![ActionKind::Open]).unwrap_err();
    assert!(err.to_string().contains("must start with init"));
}

#[test]
fn deserialize_rejects_second_init() {
    let err = ActionLog::try_from(vec![
        ActionKind::Init(Pose::ORIGIN),
        ActionKind::Close,
        ActionKind::Init(Pose::ORIGIN),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("second init at entry 2"));
}
