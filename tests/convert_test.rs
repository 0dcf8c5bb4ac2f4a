use std::fs;
use std::path::Path;

use dxf::Drawing;
use dxf::entities::{Entity, EntityType, Line};
use dxf::enums::AcadVersion;
use tempfile::tempdir;

use dxfup::{ConvertParams, TargetVersion, convert_directory_to_path, convert_file_to_path};

fn write_sample_drawing(path: &Path) {
    let mut drawing = Drawing::new();
    let mut line = Line::default();
    line.p1 = dxf::Point::new(0.0, 0.0, 0.0);
    line.p2 = dxf::Point::new(10.0, 5.0, 0.0);
    drawing.add_entity(Entity::new(EntityType::Line(line)));
    drawing.save_file(path).unwrap();
}

fn r2000_params() -> ConvertParams {
    ConvertParams {
        target: TargetVersion::R2000,
        ..ConvertParams::default()
    }
}

#[test]
fn upgrades_revision_and_preserves_entities() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("plan.dxf");
    let output = dir.path().join("plan_r2000.dxf");
    write_sample_drawing(&input);

    let meta = convert_file_to_path(&input, &output, &r2000_params()).unwrap();

    assert_eq!(meta.entities, 1);
    assert!(!meta.source_version.is_empty());

    let converted = Drawing::load_file(&output).unwrap();
    assert_eq!(converted.header.version, AcadVersion::R2000);
    assert_eq!(converted.entities().count(), 1);
}

#[test]
fn conversion_is_idempotent() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("plan.dxf");
    let output = dir.path().join("out.dxf");
    write_sample_drawing(&input);

    let first = convert_file_to_path(&input, &output, &r2000_params()).unwrap();
    let second = convert_file_to_path(&input, &output, &r2000_params()).unwrap();

    assert_eq!(first.entities, second.entities);
    assert_eq!(first.source_version, second.source_version);

    let converted = Drawing::load_file(&output).unwrap();
    assert_eq!(converted.header.version, AcadVersion::R2000);
    assert_eq!(converted.entities().count(), 1);
}

#[test]
fn unreadable_input_is_an_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.dxf");
    let output = dir.path().join("out.dxf");
    fs::write(&input, "this is not a drawing").unwrap();

    assert!(convert_file_to_path(&input, &output, &r2000_params()).is_err());
    assert!(!output.exists());
}

#[test]
fn batch_converts_directory_and_counts_outcomes() {
    let dir = tempdir().unwrap();
    write_sample_drawing(&dir.path().join("a.dxf"));
    write_sample_drawing(&dir.path().join("b.dxf"));
    fs::write(dir.path().join("notes.txt"), "not a drawing").unwrap();

    let out_dir = dir.path().join("converted_to_R2000");
    let report = convert_directory_to_path(dir.path(), &out_dir, &r2000_params(), true).unwrap();

    assert_eq!(report.processed, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.errors, 0);
    assert!(out_dir.join("a.dxf").is_file());
    assert!(out_dir.join("b.dxf").is_file());

    let converted = Drawing::load_file(&out_dir.join("a.dxf")).unwrap();
    assert_eq!(converted.header.version, AcadVersion::R2000);
}

#[test]
fn empty_directory_is_a_noop_run() {
    let dir = tempdir().unwrap();
    let out_dir = dir.path().join("out");

    let report = convert_directory_to_path(dir.path(), &out_dir, &r2000_params(), true).unwrap();

    assert_eq!(report.processed, 0);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.errors, 0);
}

#[test]
fn fail_fast_aborts_before_later_files() {
    let dir = tempdir().unwrap();
    // Sorted discovery places the broken file first
    fs::write(dir.path().join("a_bad.dxf"), "this is not a drawing").unwrap();
    write_sample_drawing(&dir.path().join("z_good.dxf"));

    let out_dir = dir.path().join("out");
    let result = convert_directory_to_path(dir.path(), &out_dir, &r2000_params(), false);

    assert!(result.is_err());
    assert!(!out_dir.join("z_good.dxf").exists());
}

#[test]
fn continue_on_error_converts_remaining_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a_bad.dxf"), "this is not a drawing").unwrap();
    write_sample_drawing(&dir.path().join("z_good.dxf"));

    let out_dir = dir.path().join("out");
    let report = convert_directory_to_path(dir.path(), &out_dir, &r2000_params(), true).unwrap();

    assert_eq!(report.processed, 1);
    assert_eq!(report.errors, 1);
    assert!(out_dir.join("z_good.dxf").is_file());
}

#[test]
fn sidecar_written_when_enabled() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("plan.dxf");
    let output = dir.path().join("plan_out.dxf");
    write_sample_drawing(&input);

    let params = ConvertParams {
        sidecar: true,
        ..r2000_params()
    };
    convert_file_to_path(&input, &output, &params).unwrap();

    let sidecar = dir.path().join("plan_out.json");
    let contents = fs::read_to_string(&sidecar).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();

    assert_eq!(json["TARGET_VERSION"], "R2000");
    assert_eq!(json["ENTITIES"], "1");
    assert_eq!(json["CONVERSION_TOOL"], "DXFUP");
}
