#![allow(missing_docs, clippy::tests_outside_test_module)]

use std::{path::Path, process::Command};

use assert_cmd::{
    assert::{Assert, OutputAssertExt},
    cargo::CommandCargoExt,
};
use image::GenericImageView;
use tempfile::tempdir;

#[allow(deprecated)]
fn graphlab(args: &[&str]) -> Assert {
    let mut cmd = Command::cargo_bin("graphlab").expect("binary exists");
    cmd.env_remove("GRAPHLAB_LOG").args(args);
    cmd.assert()
}

fn stdout_of(assert: Assert) -> String {
    String::from_utf8(assert.success().get_output().stdout.clone()).expect("utf-8 stdout")
}

#[test]
fn list_prints_every_family() {
    let out = stdout_of(graphlab(&["list"]));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 31);
    assert_eq!(
        lines[8],
        "09. Sine [cartesian] :: y = a*sin(b*x + c) + d :: params=[a, b, c, d]"
    );
    assert!(lines[30].starts_with("31. Hexagram"));
}

#[test]
fn list_json_is_an_array() {
    let out = stdout_of(graphlab(&["list", "--json"]));
    let doc: serde_json::Value = serde_json::from_str(&out).expect("json");
    let entries = doc.as_array().expect("array");
    assert_eq!(entries.len(), 31);
    assert_eq!(entries[16]["name"], "Circle");
    assert_eq!(entries[16]["kind"], "parametric");
    assert_eq!(entries[16]["parameters"], serde_json::json!(["a"]));
}

#[test]
fn templates_accept_names_and_counts() {
    let out = stdout_of(graphlab(&["templates", "rose", "-n", "12"]));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], r#"[0] {"a":1.0,"k":3.0}"#);
    assert_eq!(lines[10], r#"[10] {"a":1.0,"k":3.0}"#);
}

#[test]
fn zero_templates_fail() {
    graphlab(&["templates", "1", "-n", "0"]).failure();
}

#[test]
fn eval_csv_with_params_and_domain() {
    let out = stdout_of(graphlab(&[
        "eval",
        "linear",
        "--params",
        r#"{"a": 1, "b": 0}"#,
        "--domain",
        "-10:10:1200",
    ]));
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("x,y"));
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 1200);
    assert_eq!(rows[0], "-10,-10");
    assert_eq!(rows[1199], "10,10");
    for row in rows {
        let (x, y) = row.split_once(',').expect("two columns");
        assert_eq!(x, y);
    }
}

#[test]
fn eval_json_reports_metadata() {
    let out = stdout_of(graphlab(&[
        "eval",
        "17",
        "--template",
        "3",
        "--domain",
        "[0, 6.283185307179586, 64]",
        "--format",
        "json",
    ]));
    let doc: serde_json::Value = serde_json::from_str(&out).expect("json");
    assert_eq!(doc["id"], 17);
    assert_eq!(doc["params"]["a"].as_f64().map(|a| (a * 10.0).round()), Some(8.0));
    assert_eq!(doc["xs"].as_array().map(Vec::len), Some(64));
    assert_eq!(doc["domain"]["samples"], 64);
}

#[test]
fn unknown_family_is_rejected() {
    graphlab(&["eval", "9999"]).failure();
    graphlab(&["eval", "no-such-curve"]).failure();
}

#[test]
fn bad_parameters_are_reported() {
    let assert = graphlab(&["eval", "linear", "--params", r#"{"a": 1}"#]).failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("must be exactly [a, b]"), "stderr: {stderr}");
}

#[test]
fn degenerate_domain_is_an_evaluation_error() {
    let assert = graphlab(&["eval", "sine", "--domain", "1:1:100"]).failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("evaluation failed"), "stderr: {stderr}");
}

#[test]
fn oversized_sample_count_is_rejected() {
    let assert = graphlab(&["eval", "sine", "--domain", "0:1:1e30"]).failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("at most"), "stderr: {stderr}");
}

fn plot_to(path: &Path, extra: &[&str]) -> Assert {
    let mut args = vec!["plot"];
    args.extend_from_slice(extra);
    let path = path.to_str().expect("utf-8 path");
    args.push(path);
    graphlab(&args)
}

#[test]
fn plot_writes_square_png() {
    let td = tempdir().expect("tmp");
    let output = td.path().join("hexagram.png");
    plot_to(&output, &["hexagram", "-s", "200", "--bg", "black", "--fg", "#00ff00"])
        .success()
        .stdout("OK!\n");

    let img = image::open(&output).expect("image decodes");
    assert_eq!(img.dimensions(), (200, 200));
    let green = img.pixels().filter(|(_, _, p)| p.0 == [0, 255, 0, 255]).count();
    assert!(green > 100, "curve pixels drawn: {green}");
}

#[test]
fn plot_rejects_bad_colors() {
    let td = tempdir().expect("tmp");
    let output = td.path().join("bad.png");
    plot_to(&output, &["sine", "--fg", "not-a-colour"]).failure();
    assert!(!output.exists());
}

#[test]
fn tangent_gaps_are_joined_on_request() {
    let td = tempdir().expect("tmp");
    let split = td.path().join("split.png");
    let joined = td.path().join("joined.png");
    plot_to(&split, &["tangent", "-s", "160", "--no-grid"]).success();
    plot_to(&joined, &["tangent", "-s", "160", "--no-grid", "--join-gaps"]).success();

    let ink = |p: &Path| {
        image::open(p)
            .expect("decodes")
            .pixels()
            .filter(|(_, _, px)| px.0 == [0x1f, 0x77, 0xb4, 0xff])
            .count()
    };
    assert!(ink(&joined) > ink(&split));
}

#[test]
fn unplottable_extent_fails_without_writing() {
    let td = tempdir().expect("tmp");
    let output = td.path().join("huge.png");
    let assert = plot_to(
        &output,
        &["linear", "--params", r#"{"a": 1e308, "b": 0}"#, "--domain", "-1:1:3"],
    )
    .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("can be plotted"), "stderr: {stderr}");
    assert!(!output.exists());
}
