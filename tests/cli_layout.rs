use roomscene_testkit::{assert_vec3_near, canonical_json};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn temp_dir(tag: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos() as u64;
    let unique = u64::from(std::process::id()) ^ nanos;
    let dir = std::env::temp_dir().join(format!("roomscene_cli_{tag}_{unique:016x}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn run(args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_roomscene");
    Command::new(bin)
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("spawn roomscene")
}

fn vec3(value: &Value) -> glam::Vec3 {
    let arr: Vec<f32> = value
        .as_array()
        .expect("vector array")
        .iter()
        .map(|v| v.as_f64().expect("number") as f32)
        .collect();
    glam::Vec3::new(arr[0], arr[1], arr[2])
}

const TWO_ITEM_ROW: &str = r#"
[[containers]]
name = "row"
position = [0, 2, 0]

[containers.layout]
count = 2
item_padding = [0.5, 1.5, 0]

[[containers.layout.item_aligns]]
x = "start"

[[containers.layout.item_aligns]]
x = "end"
y = "end"

[[containers.layout.item_offsets]]
x = 0.2

[[containers.layout.item_offsets]]
x = -0.2
y = 0.1
"#;

#[test]
fn lays_out_configured_container() {
    let dir = temp_dir("row");
    let config = dir.join("layout.toml");
    fs::write(&config, TWO_ITEM_ROW).expect("write config");

    let out = run(&["--strict", "--config", config.to_str().unwrap()]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let scene: Value = serde_json::from_slice(&out.stdout).expect("stdout is json");
    let row = &scene["containers"][0];
    assert_eq!(row["name"], "row");

    let results = row["results"].as_array().expect("results");
    assert_eq!(results.len(), 2);
    assert_vec3_near(vec3(&results[0]["sub_volume_center"]), glam::Vec3::new(-2.5, 0.0, 0.0));
    assert_vec3_near(vec3(&results[0]["usable_size"]), glam::Vec3::new(4.0, 7.0, 10.0));
    assert_vec3_near(vec3(&results[0]["final_offset"]), glam::Vec3::new(-1.8, 0.0, 0.0));
    assert_vec3_near(vec3(&results[1]["final_offset"]), glam::Vec3::new(1.8, 3.6, 0.0));

    // Container at y = 2 carries both items.
    assert_vec3_near(vec3(&row["item_positions"][1]), glam::Vec3::new(4.3, 5.6, 0.0));
    assert!(row.get("debug_boxes").is_none());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn debug_flag_adds_boxes_and_output_file() {
    let dir = temp_dir("debug");
    let config = dir.join("layout.toml");
    let output = dir.join("out").join("scene.json");
    fs::write(&config, TWO_ITEM_ROW).expect("write config");

    let out = run(&[
        "--config",
        config.to_str().unwrap(),
        "--debug",
        "--pretty",
        "--output",
        output.to_str().unwrap(),
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(out.stdout.is_empty());

    let scene: Value = serde_json::from_str(&fs::read_to_string(&output).expect("output written"))
        .expect("output is json");
    let boxes = scene["containers"][0]["debug_boxes"].as_array().expect("boxes");
    assert_eq!(boxes.len(), 5);
    assert_eq!(boxes[0]["kind"], "container");
    assert_eq!(boxes[0]["fill"]["style"], "translucent");
    assert_eq!(boxes[2]["kind"], "usable");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn invalid_axis_fails() {
    let dir = temp_dir("invalid");
    let config = dir.join("layout.toml");
    fs::write(
        &config,
        "[[containers]]\nname = \"bad\"\n[containers.layout]\ndirection = \"w\"\ncount = 1\n",
    )
    .expect("write config");

    let out = run(&["--config", config.to_str().unwrap()]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("bad"), "stderr: {stderr}");
    assert!(stderr.contains("invalid layout axis"), "stderr: {stderr}");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_config_is_lenient_unless_strict() {
    let dir = temp_dir("missing");
    let config = dir.join("absent.toml");

    let out = run(&["--config", config.to_str().unwrap()]);
    assert!(out.status.success());
    let scene: Value = serde_json::from_slice(&out.stdout).expect("stdout is json");
    assert_eq!(
        canonical_json(&scene).unwrap(),
        canonical_json(&serde_json::json!({"containers": []})).unwrap()
    );

    let out = run(&["--strict", "--config", config.to_str().unwrap()]);
    assert!(!out.status.success());

    let _ = fs::remove_dir_all(&dir);
}
