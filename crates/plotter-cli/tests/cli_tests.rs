// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! End-to-end tests for the `plotter` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn plotter() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_plotter"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> Result<Value, Box<dyn std::error::Error>> {
    let out = cmd.assert().success().get_output().stdout.clone();
    Ok(serde_json::from_slice(&out)?)
}

const OVERLAPPING: &str = r#"{
  "shapes": [
    { "vertices": [[0, 0], [2, 0], [2, 2], [0, 2]] },
    { "vertices": [[1, 1], [3, 1], [3, 3], [1, 3]] },
    { "vertices": [[0, 0], [1, 1]], "collider": false },
    { "vertices": [[-1, -1], [1, 1]], "position": [40, 0] }
  ]
}"#;

#[test]
fn demo_frame_prints_table() {
    plotter()
        .args(["--no-prefs", "frame"])
        .assert()
        .success()
        .stdout(predicate::str::contains("world min"))
        .stdout(predicate::str::contains("(-21.00, -11.00)"))
        .stdout(predicate::str::contains("overlapping pairs: none"));
}

#[test]
fn demo_frame_json_has_both_shapes_visible() -> TestResult {
    let v = json_stdout(plotter().args(["--no-prefs", "frame", "--json", "--aspect", "2"]))?;
    assert_eq!(v["aspect_ratio"], 2.0);
    let shapes = v["shapes"].as_array().ok_or("shapes")?;
    assert_eq!(shapes.len(), 2);
    assert!(shapes.iter().all(|s| s["visible"] == true));
    assert_eq!(shapes[0]["collider"], false);
    assert_eq!(v["pairs"], serde_json::json!([]));
    assert_eq!(v["camera"]["offset"], serde_json::json!([0.0, 0.0, 5.0]));
    Ok(())
}

#[test]
fn scene_file_reports_pairs_and_culling() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("scene.json");
    fs::write(&path, OVERLAPPING)?;

    let v = json_stdout(plotter().args(["--no-prefs", "frame", "--json", "--scene"]).arg(&path))?;
    assert_eq!(v["pairs"], serde_json::json!([[0, 1]]));
    let shapes = v["shapes"].as_array().ok_or("shapes")?;
    let flags: Vec<(bool, bool)> = shapes
        .iter()
        .map(|s| (s["visible"] == true, s["colliding"] == true))
        .collect();
    assert_eq!(
        flags,
        vec![(true, true), (true, true), (true, false), (false, false)]
    );
    assert_eq!(shapes[3]["min"], serde_json::json!([39.0, -1.0]));
    Ok(())
}

#[test]
fn empty_shape_in_scene_file_stays_inert() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("scene.json");
    fs::write(
        &path,
        r#"{ "shapes": [
            { "vertices": [[-3, 3], [3, 3], [3, -3], [-3, -3]] },
            { "vertices": [] }
        ] }"#,
    )?;

    let v = json_stdout(plotter().args(["--no-prefs", "frame", "--json", "--scene"]).arg(&path))?;
    assert_eq!(v["pairs"], serde_json::json!([]));
    assert_eq!(v["shapes"][1]["visible"], false);
    assert_eq!(v["shapes"][1]["colliding"], false);

    let v = json_stdout(
        plotter()
            .args(["--no-prefs", "cursor", "--x", "960", "--y", "500", "--json", "--scene"])
            .arg(&path),
    )?;
    assert_eq!(v["under_cursor"], serde_json::json!([0]));
    Ok(())
}

#[test]
fn panning_brings_far_shape_into_view() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("scene.json");
    fs::write(&path, OVERLAPPING)?;

    let v = json_stdout(
        plotter()
            .args(["--no-prefs", "frame", "--json", "--offset", "40,0,5", "--scene"])
            .arg(&path),
    )?;
    let visible: Vec<bool> = v["shapes"]
        .as_array()
        .ok_or("shapes")?
        .iter()
        .map(|s| s["visible"] == true)
        .collect();
    assert_eq!(visible, vec![false, false, false, true]);
    Ok(())
}

#[test]
fn bad_scene_file_fails_with_context() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"shapes\": [ { \"vertices\": 3 } ] }")?;

    plotter()
        .args(["--no-prefs", "frame", "--scene"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse scene file"));

    plotter()
        .args(["--no-prefs", "frame", "--scene"])
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read scene file"));
    Ok(())
}

#[test]
fn zero_distance_is_rejected() {
    plotter()
        .args(["--no-prefs", "frame", "--offset", "0,0,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be positive"));
}

#[test]
fn cursor_centre_maps_to_offset() {
    plotter()
        .args([
            "--no-prefs", "cursor", "--x", "100", "--y", "50", "--width", "200", "--height",
            "100", "--offset", "1,-2,5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cursor position: 1.00, -2.00"));
}

#[test]
fn cursor_over_demo_quad_hits_it() -> TestResult {
    let v = json_stdout(plotter().args([
        "--no-prefs", "cursor", "--x", "960", "--y", "500", "--json",
    ]))?;
    // The grid is sealed, so only the quad is reported.
    assert_eq!(v["under_cursor"], serde_json::json!([1]));
    Ok(())
}

#[test]
fn prefs_reset_then_show_from_dir() -> TestResult {
    let dir = tempfile::tempdir()?;
    plotter()
        .arg("--prefs-dir")
        .arg(dir.path())
        .args(["prefs", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prefs reset in"));
    assert!(dir.path().join("plotter_prefs.json").is_file());

    let v = json_stdout(plotter().arg("--prefs-dir").arg(dir.path()).args(["prefs", "show"]))?;
    assert_eq!(v["camera"]["fov_deg"], 45.0);
    assert_eq!(v["window"]["width"], 1920);
    Ok(())
}

#[test]
fn saved_prefs_drive_frame_defaults() -> TestResult {
    let dir = tempfile::tempdir()?;
    fs::write(
        dir.path().join("plotter_prefs.json"),
        r#"{ "camera": { "pan": [2.0, 3.0], "distance": 10.0 },
             "debug": { "render_aabb": true },
             "window": { "width": 400, "height": 100 } }"#,
    )?;

    let v = json_stdout(
        plotter()
            .arg("--prefs-dir")
            .arg(dir.path())
            .args(["frame", "--json"]),
    )?;
    assert_eq!(v["aspect_ratio"], 4.0);
    assert_eq!(v["camera"]["offset"], serde_json::json!([2.0, 3.0, 10.0]));
    let quad = &v["shapes"][1];
    assert_eq!(
        quad["wireframe"]["corners"],
        serde_json::json!([[-3.0, 3.0], [3.0, 3.0], [3.0, -3.0], [-3.0, -3.0]])
    );
    Ok(())
}

#[test]
fn pan_and_zoom_flags_step_by_saved_sizes() -> TestResult {
    let dir = tempfile::tempdir()?;
    fs::write(
        dir.path().join("plotter_prefs.json"),
        r#"{ "camera": { "pan_step": 0.5, "zoom_step": 2.0 } }"#,
    )?;

    let v = json_stdout(
        plotter()
            .arg("--prefs-dir")
            .arg(dir.path())
            .args(["frame", "--json", "--pan", "4,-2", "--zoom", "-3"]),
    )?;
    assert_eq!(v["camera"]["offset"], serde_json::json!([2.0, -1.0, 11.0]));

    // From 5.0 in steps of 2.0, zooming in stops at 1.0.
    let v = json_stdout(
        plotter()
            .arg("--prefs-dir")
            .arg(dir.path())
            .args(["frame", "--json", "--zoom", "9"]),
    )?;
    assert_eq!(v["camera"]["offset"], serde_json::json!([0.0, 0.0, 1.0]));
    Ok(())
}

#[test]
fn cursor_follows_panned_camera() {
    plotter()
        .args([
            "--no-prefs", "cursor", "--x", "100", "--y", "50", "--width", "200", "--height",
            "100", "--pan", "10,0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cursor position: 1.50, 0.00"));
}

#[test]
fn prefs_dir_conflicts_with_no_prefs() -> TestResult {
    let dir = tempfile::tempdir()?;
    plotter()
        .arg("--no-prefs")
        .arg("--prefs-dir")
        .arg(dir.path())
        .args(["prefs", "show"])
        .assert()
        .failure();
    Ok(())
}
