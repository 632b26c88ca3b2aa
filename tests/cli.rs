use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use std::process::Command;

#[test]
fn cli_prints_campus_summary() {
    let mut cmd = Command::cargo_bin("campus-viewer").expect("binary exists");
    cmd.arg("--summary-only")
        .assert()
        .success()
        .stdout(contains("Loaded campus with 6 props (2 lights, 4 camera presets)"))
        .stdout(contains(" - Island (outline) vertices=192 triangles=0"))
        .stdout(contains(" - Bay Hall (lit, shininess 51.2) vertices=128 triangles=82"))
        .stdout(contains("View: preset 0").and(contains("shading=Phong")));
}

#[test]
fn cli_honors_shading_switch() {
    let mut cmd = Command::cargo_bin("campus-viewer").expect("binary exists");
    cmd.args(["--summary-only", "--gouraud", "--summed-normals"])
        .assert()
        .success()
        .stdout(contains("shading=Gouraud"));
}

#[test]
fn cli_rejects_unknown_arguments() {
    let mut cmd = Command::cargo_bin("campus-viewer").expect("binary exists");
    cmd.arg("--wireframe")
        .assert()
        .failure()
        .stderr(contains("Unknown argument: --wireframe"));
}
