//! Runs the `build-options` binary against a workspace on disk.

use std::fs;
use std::path::Path;
use std::process::Command;

use serde_json::Value;
use tempfile::{TempDir, tempdir};

fn write_file(path: &Path, contents: &str) {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).unwrap();
  }
  fs::write(path, contents).unwrap();
}

fn workspace_fixture() -> TempDir {
  let temp = tempdir().unwrap();
  let root = temp.path();
  write_file(
    &root.join("workspace.json"),
    r#"{"projects": {
      "desktop": {"root": "apps/desktop", "sourceRoot": "apps/desktop/src"},
      "legacy": {"root": "apps/legacy"}
    }}"#,
  );
  write_file(&root.join("apps/desktop/src/assets/logo.png"), "png");
  write_file(
    &root.join("build.json"),
    r#"{
      "main": "apps/desktop/src/main.ts",
      "outputPath": "dist/apps/desktop",
      "tsConfig": "apps/desktop/tsconfig.app.json",
      "assets": ["apps/desktop/src/assets"],
      "root": "/user"
    }"#,
  );
  write_file(
    &root.join("packaging.json"),
    r#"{"appId": "com.example.desktop", "sourceRoot": "elsewhere"}"#,
  );
  temp
}

fn build_options(dir: &Path, project: &str, packaging: bool) -> std::process::Output {
  let bin = env!("CARGO_BIN_EXE_build-options");
  let mut command = Command::new(bin);
  command
    .current_dir(dir)
    .args(["--workspace", "workspace.json", "--project", project])
    .args(["--options", "build.json"]);
  if packaging {
    command.args(["--packaging", "packaging.json"]);
  }
  command.output().unwrap()
}

#[test]
fn prints_prepared_options_as_json() {
  let temp = workspace_fixture();
  let output = build_options(temp.path(), "desktop", true);

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(output.status.success(), "build-options failed:\n{stderr}");

  let value: Value = serde_json::from_slice(&output.stdout).unwrap();
  let root = value["build"]["root"].as_str().unwrap().to_string();
  assert!(Path::new(&root).join("workspace.json").is_file());
  let root = root.replace('\\', "/");

  assert_eq!(value["build"]["sourceRoot"], "apps/desktop/src");
  assert_eq!(
    value["build"]["assets"][0]["input"],
    format!("{root}/apps/desktop/src/assets").as_str()
  );
  assert_eq!(value["build"]["assets"][0]["output"], "assets");
  assert_eq!(value["build"]["assets"][0]["glob"], "**/*");
  assert_eq!(value["packaging"]["root"], value["build"]["root"]);
  assert_eq!(value["packaging"]["sourceRoot"], "apps/desktop/src");
  assert_eq!(value["packaging"]["appId"], "com.example.desktop");
}

#[test]
fn omits_packaging_when_not_requested() {
  let temp = workspace_fixture();
  let output = build_options(temp.path(), "desktop", false);
  assert!(output.status.success());

  let value: Value = serde_json::from_slice(&output.stdout).unwrap();
  assert!(value.get("build").is_some());
  assert!(value.get("packaging").is_none());
}

#[test]
fn missing_source_root_exits_with_an_error_line() {
  let temp = workspace_fixture();
  let output = build_options(temp.path(), "legacy", false);

  assert_eq!(output.status.code(), Some(1));
  assert!(output.stdout.is_empty());
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(
    stderr.starts_with("[ERROR] "),
    "unexpected stderr:\n{stderr}"
  );
  assert!(stderr.contains("legacy does not have a sourceRoot. Please define one."));
}
