use super::*;

#[test]
fn output_path_embeds_padded_run_id() {
    let p = render_output_path(Path::new("renders"), "grip-test", RunId(7), "png");
    assert_eq!(p, PathBuf::from("renders").join("grip-test-0007.png"));
}

#[test]
fn output_path_tolerates_dotted_or_missing_extension() {
    let dir = Path::new("out");
    assert_eq!(
        render_output_path(dir, "clip", RunId(12345), ".mp4"),
        dir.join("clip-12345.mp4")
    );
    assert_eq!(render_output_path(dir, "frames", RunId(0), ""), dir.join("frames-0000"));
}

#[test]
fn distinct_runs_never_share_a_path() {
    let dir = Path::new("out");
    let a = render_output_path(dir, "grip", RunId(1), "png");
    let b = render_output_path(dir, "grip", RunId(2), "png");
    assert_ne!(a, b);
}

#[test]
fn ensure_parent_dir_creates_nested_dirs() {
    let dir = PathBuf::from("target").join("output_unit").join("a").join("b");
    let _ = std::fs::remove_dir_all(PathBuf::from("target").join("output_unit"));
    ensure_parent_dir(&dir.join("x.png")).unwrap();
    assert!(dir.is_dir());
}
