//! Tests for the mission request model and mapping parser.

use crate::error::MissionError;
use crate::mission::{InputMap, MissionGoal, MissionRequest, Mode, load_input_file};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn mapping(value: serde_json::Value) -> InputMap {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn sprint_quest(mode: &str, target: serde_json::Value) -> InputMap {
    mapping(json!({
        "game_name": "SprintQuest",
        "character": "Kira, a rogue courier",
        "background": "The city's power grid is failing",
        "mode": mode,
        "target_value": target,
    }))
}

#[test]
fn test_mode_parse_exact() {
    assert_eq!("distance".parse::<Mode>().unwrap(), Mode::Distance);
    assert_eq!("duration".parse::<Mode>().unwrap(), Mode::Duration);
}

#[test]
fn test_mode_parse_is_case_sensitive() {
    for input in ["Distance", "DURATION", " distance", "sprint", ""] {
        let err = input.parse::<Mode>().unwrap_err();
        match err {
            MissionError::InvalidMode { found } => assert_eq!(found.as_deref(), Some(input)),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[test]
fn test_mode_display_round_trips() {
    for mode in [Mode::Distance, Mode::Duration] {
        assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
    }
}

#[test]
fn test_goal_phrases() {
    let goal = MissionGoal::new(Mode::Distance, 5.0).unwrap();
    assert_eq!(goal, MissionGoal::Distance { km: 5.0 });
    assert_eq!(goal.phrase(), "covering 5 kilometers");
    assert_eq!(goal.unit(), "kilometers");

    let goal = MissionGoal::new(Mode::Duration, 30.0).unwrap();
    assert_eq!(goal, MissionGoal::Duration { minutes: 30.0 });
    assert_eq!(goal.phrase(), "running for 30 minutes");
    assert_eq!(goal.unit(), "minutes");
}

#[test]
fn test_goal_fractional_value() {
    let goal = MissionGoal::new(Mode::Distance, 2.5).unwrap();
    assert_eq!(goal.phrase(), "covering 2.5 kilometers");
    assert_eq!(goal.target_value(), 2.5);
    assert_eq!(goal.mode(), Mode::Distance);
}

#[test]
fn test_goal_rejects_non_positive_and_non_finite() {
    for value in [0.0, -0.0, -5.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = MissionGoal::new(Mode::Duration, value).unwrap_err();
        assert!(
            matches!(err, MissionError::InvalidTargetValue(_)),
            "{value} should be rejected, got {err:?}"
        );
    }
}

#[test]
fn test_to_template_vars() {
    let request = MissionRequest::new(
        "SprintQuest",
        "Kira",
        "Blackout",
        MissionGoal::Duration { minutes: 30.0 },
    );
    let vars = request.to_template_vars();

    assert_eq!(vars.get("game_name"), Some(&"SprintQuest".to_string()));
    assert_eq!(vars.get("character"), Some(&"Kira".to_string()));
    assert_eq!(vars.get("background"), Some(&"Blackout".to_string()));
    assert_eq!(vars.get("mode"), Some(&"duration".to_string()));
    assert_eq!(vars.get("target_value"), Some(&"30".to_string()));
    assert_eq!(vars.get("unit"), Some(&"minutes".to_string()));
    assert_eq!(
        vars.get("goal"),
        Some(&"running for 30 minutes".to_string())
    );
}

#[test]
fn test_from_mapping_distance() {
    let request = MissionRequest::from_mapping(&sprint_quest("distance", json!(5))).unwrap();

    assert_eq!(request.game_name, "SprintQuest");
    assert_eq!(request.character, "Kira, a rogue courier");
    assert_eq!(request.background, "The city's power grid is failing");
    assert_eq!(request.goal, MissionGoal::Distance { km: 5.0 });
}

#[test]
fn test_from_mapping_numeric_string_target() {
    let request =
        MissionRequest::from_mapping(&sprint_quest("duration", json!(" 45 "))).unwrap();
    assert_eq!(request.goal, MissionGoal::Duration { minutes: 45.0 });
}

#[test]
fn test_from_mapping_target_text_is_normalised() {
    let request =
        MissionRequest::from_mapping(&sprint_quest("distance", json!("5.50"))).unwrap();
    assert_eq!(request.goal.phrase(), "covering 5.5 kilometers");

    let request =
        MissionRequest::from_mapping(&sprint_quest("duration", json!("030"))).unwrap();
    assert_eq!(request.goal.phrase(), "running for 30 minutes");
}

#[test]
fn test_from_mapping_invalid_mode() {
    let err = MissionRequest::from_mapping(&sprint_quest("sprint", json!(5))).unwrap_err();
    match err {
        MissionError::InvalidMode { found } => assert_eq!(found.as_deref(), Some("sprint")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_from_mapping_absent_mode() {
    let mut map = sprint_quest("distance", json!(5));
    map.remove("mode");

    let err = MissionRequest::from_mapping(&map).unwrap_err();
    assert!(matches!(err, MissionError::InvalidMode { found: None }));
}

#[test]
fn test_from_mapping_non_string_mode() {
    let mut map = sprint_quest("distance", json!(5));
    map.insert("mode".to_string(), json!(1));

    let err = MissionRequest::from_mapping(&map).unwrap_err();
    assert!(matches!(err, MissionError::InvalidMode { found: Some(_) }));
}

#[test]
fn test_from_mapping_missing_fields() {
    for field in ["game_name", "character", "background", "target_value"] {
        let mut map = sprint_quest("distance", json!(5));
        map.remove(field);

        match MissionRequest::from_mapping(&map).unwrap_err() {
            MissionError::MissingField(name) => assert_eq!(name, field),
            other => panic!("unexpected error for {field}: {other:?}"),
        }
    }
}

#[test]
fn test_from_mapping_null_counts_as_missing() {
    let mut map = sprint_quest("distance", json!(5));
    map.insert("background".to_string(), serde_json::Value::Null);

    let err = MissionRequest::from_mapping(&map).unwrap_err();
    assert!(matches!(err, MissionError::MissingField(ref f) if f == "background"));
}

#[test]
fn test_from_mapping_reports_first_problem() {
    // Both game_name and mode are bad; game_name is checked first.
    let mut map = sprint_quest("sprint", json!(5));
    map.remove("game_name");

    let err = MissionRequest::from_mapping(&map).unwrap_err();
    assert!(matches!(err, MissionError::MissingField(ref f) if f == "game_name"));
}

#[test]
fn test_from_mapping_invalid_target_values() {
    for target in [json!(0), json!(-2.5), json!("fast"), json!(true), json!([5])] {
        let err = MissionRequest::from_mapping(&sprint_quest("distance", target.clone()))
            .unwrap_err();
        assert!(
            matches!(err, MissionError::InvalidTargetValue(_)),
            "{target} should be rejected, got {err:?}"
        );
    }
}

#[test]
fn test_from_mapping_stringifies_scalars() {
    let mut map = sprint_quest("distance", json!(5));
    map.insert("game_name".to_string(), json!(2049));

    let request = MissionRequest::from_mapping(&map).unwrap();
    assert_eq!(request.game_name, "2049");
}

#[test]
fn test_from_mapping_rejects_structured_text() {
    let mut map = sprint_quest("distance", json!(5));
    map.insert("character".to_string(), json!({"name": "Kira"}));

    match MissionRequest::from_mapping(&map).unwrap_err() {
        MissionError::InvalidField { field, reason } => {
            assert_eq!(field, "character");
            assert_eq!(reason, "expected text, found a mapping");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_from_mapping_keeps_empty_strings() {
    let mut map = sprint_quest("duration", json!(10));
    map.insert("character".to_string(), json!(""));

    let request = MissionRequest::from_mapping(&map).unwrap();
    assert_eq!(request.character, "");
}

#[test]
fn test_from_mapping_ignores_unknown_keys() {
    let mut map = sprint_quest("distance", json!(5));
    map.insert("difficulty".to_string(), json!("hard"));

    assert!(MissionRequest::from_mapping(&map).is_ok());
}

#[test]
fn test_from_json_str() {
    let json = r#"{
        "game_name": "zombies",
        "character": "A former marathoner",
        "background": "The dead walk",
        "mode": "distance",
        "target_value": 5
    }"#;
    let request = MissionRequest::from_json_str(json).unwrap();
    assert_eq!(request.game_name, "zombies");
    assert_eq!(request.goal, MissionGoal::Distance { km: 5.0 });
}

#[test]
fn test_from_json_str_rejects_non_object() {
    let err = MissionRequest::from_json_str("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, MissionError::UserError(_)));
}

#[test]
fn test_from_yaml_str() {
    let yaml = r#"
game_name: zombies
character: |
  A former marathoner
  with a bad knee.
background: The dead walk
mode: duration
target_value: 25
"#;
    let request = MissionRequest::from_yaml_str(yaml).unwrap();
    assert_eq!(request.character, "A former marathoner\nwith a bad knee.\n");
    assert_eq!(request.goal, MissionGoal::Duration { minutes: 25.0 });
}

#[test]
fn test_from_yaml_str_empty_reports_first_missing_field() {
    let err = MissionRequest::from_yaml_str("").unwrap_err();
    assert!(matches!(err, MissionError::MissingField(ref f) if f == "game_name"));
}

#[test]
fn test_load_input_file_json_and_yaml() {
    let temp = TempDir::new().unwrap();

    let json_path = temp.path().join("mission.json");
    fs::write(
        &json_path,
        r#"{"game_name": "g", "character": "c", "background": "b", "mode": "distance", "target_value": 3}"#,
    )
    .unwrap();
    let map = load_input_file(&json_path).unwrap();
    assert_eq!(map.get("target_value"), Some(&json!(3)));

    let yaml_path = temp.path().join("mission.yaml");
    fs::write(&yaml_path, "game_name: g\nmode: duration\n").unwrap();
    let map = load_input_file(&yaml_path).unwrap();
    assert_eq!(map.get("mode"), Some(&json!("duration")));
}

#[test]
fn test_load_input_file_missing() {
    let temp = TempDir::new().unwrap();
    let err = load_input_file(temp.path().join("nope.yaml")).unwrap_err();

    match err {
        MissionError::UserError(msg) => assert!(msg.contains("failed to read input file")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_load_input_file_not_a_mapping() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("list.yaml");
    fs::write(&path, "- one\n- two\n").unwrap();

    match load_input_file(&path).unwrap_err() {
        MissionError::UserError(msg) => {
            assert!(msg.contains("found a list"), "{msg}");
            assert!(msg.contains("list.yaml"), "{msg}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
