use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GriplineError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        GriplineError::configuration("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(GriplineError::host("x").to_string().contains("host error:"));
    assert!(
        GriplineError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GriplineError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: GriplineError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, GriplineError::Serde(_)));
}
