//! End-to-end runs of the `taskboard` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const BOARD: &str = r#"{
  "_id": "b1",
  "title": "Sprint",
  "columnOrderIds": ["y", "x"],
  "columns": [
    {"_id": "x", "title": "To Do", "cardOrderIds": ["c2", "c1"],
     "cards": [
       {"_id": "c1", "columnId": "x", "title": "Write docs"},
       {"_id": "c2", "columnId": "x", "title": "Fix bug"}
     ]},
    {"_id": "y", "title": "Done", "cardOrderIds": [], "cards": []}
  ]
}"#;

/// A command isolated from the user's own configuration
fn taskboard(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("taskboard").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("TASKBOARD_API_ROOT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_show_prints_columns_in_display_order() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("b1.json"), BOARD).unwrap();

    let output = taskboard(&temp)
        .args(["show", "--file", "b1.json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let done = stdout.find("Done [y]").unwrap();
    let todo = stdout.find("To Do [x]").unwrap();
    assert!(done < todo);
    let fix = stdout.find("Fix bug").unwrap();
    let docs = stdout.find("Write docs").unwrap();
    assert!(fix < docs);
}

#[test]
fn test_replay_moves_card() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("b1.json"), BOARD).unwrap();
    fs::write(
        temp.path().join("drag.yaml"),
        "- start: { id: c1 }\n- over: { active: c1, over: y }\n- end: { active: c1, over: y }\n",
    )
    .unwrap();

    let output = taskboard(&temp)
        .args(["replay", "--file", "b1.json", "--json"])
        .args(["--script", "drag.yaml"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(value["columns"][0]["_id"], "y");
    assert_eq!(
        value["columns"][0]["cardOrderIds"],
        serde_json::json!(["c1"])
    );
    assert_eq!(
        value["columns"][1]["cardOrderIds"],
        serde_json::json!(["c2"])
    );
}

#[test]
fn test_missing_board_exits_with_error() {
    let temp = TempDir::new().unwrap();
    taskboard(&temp)
        .args(["show", "--board", "nope", "--dir", "."])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Board not found: nope"));
}

#[test]
fn test_config_honors_api_root_flag() {
    let temp = TempDir::new().unwrap();
    taskboard(&temp)
        .args(["--api-root", "https://boards.example.com/", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://boards.example.com"))
        .stdout(predicate::str::contains("example.com/").not());
}

#[test]
fn test_project_config_file_is_read() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join(".taskboard")).unwrap();
    fs::write(
        temp.path().join(".taskboard").join("config.yaml"),
        "sensors:\n  touch:\n    delay_ms: 400\n",
    )
    .unwrap();

    taskboard(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("delay_ms: 400"));
}

#[test]
fn test_replay_uses_geometry_and_configured_sensors() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("b1.json"), BOARD).unwrap();
    fs::create_dir(temp.path().join(".taskboard")).unwrap();
    fs::write(
        temp.path().join(".taskboard").join("config.toml"),
        "[sensors.pointer]\ndistance = 2\n",
    )
    .unwrap();
    // Done is the first column, To Do the second (left 270)
    fs::write(
        temp.path().join("drag.yaml"),
        "- start: { id: c1, press: { samples: [{ x: 3, y: 0 }] } }\n\
         - over: { active: c1, translated: { left: 5, top: 5, width: 250, height: 80 } }\n\
         - end: { active: c1 }\n",
    )
    .unwrap();

    let output = taskboard(&temp)
        .args(["replay", "--file", "b1.json", "--json"])
        .args(["--script", "drag.yaml"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(value["steps"][0]["event"], "drag-start");
    assert_eq!(value["steps"][1]["changed"], true);
    assert_eq!(
        value["columns"][0]["cardOrderIds"],
        serde_json::json!(["c1"])
    );
    assert_eq!(
        value["columns"][1]["cardOrderIds"],
        serde_json::json!(["c2"])
    );
}
