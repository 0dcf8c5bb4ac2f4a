use std::fs;
use std::path::Path;

use tempfile::tempdir;

use dxfup::{
    TargetVersion, default_output_dir, derive_output_path, discover_drawing_files, is_drawing_file,
};

#[test]
fn discovery_filters_by_extension() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.dxf"), "0\nEOF\n").unwrap();
    fs::write(dir.path().join("b.dxf"), "0\nEOF\n").unwrap();
    fs::write(dir.path().join("c.txt"), "not a drawing").unwrap();

    let files = discover_drawing_files(dir.path(), "dxf").unwrap();
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, vec!["a.dxf", "b.dxf"]);
}

#[test]
fn discovery_is_non_recursive() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("top.dxf"), "0\nEOF\n").unwrap();
    let sub = dir.path().join("nested");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("inner.dxf"), "0\nEOF\n").unwrap();

    let files = discover_drawing_files(dir.path(), "dxf").unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name().unwrap(), "top.dxf");
}

#[test]
fn discovery_matches_extension_case_insensitively() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("UPPER.DXF"), "0\nEOF\n").unwrap();

    let files = discover_drawing_files(dir.path(), "dxf").unwrap();

    assert_eq!(files.len(), 1);
}

#[test]
fn discovery_fails_for_missing_directory() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("no_such_dir");

    assert!(discover_drawing_files(&missing, "dxf").is_err());
}

#[test]
fn directories_are_not_drawing_files() {
    let dir = tempdir().unwrap();
    let fake = dir.path().join("fake.dxf");
    fs::create_dir(&fake).unwrap();

    assert!(!is_drawing_file(&fake, "dxf"));
}

#[test]
fn output_path_derivation_is_deterministic() {
    let out_dir = default_output_dir(Path::new("/data/drawings"), TargetVersion::R2000);
    assert_eq!(out_dir, Path::new("/data/drawings/converted_to_R2000"));

    let out = derive_output_path(&out_dir, Path::new("/data/drawings/foo.dxf"));
    assert_eq!(
        out,
        Path::new("/data/drawings/converted_to_R2000/foo.dxf")
    );
}
