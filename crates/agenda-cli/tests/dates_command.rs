use agenda_testing::assertions::{assert_calendar_matches, assert_keys};
use agenda_testing::fixtures::{sessions_envelope_json, sessions_json};
use agenda_testing::{SessionBuilder, TestWorld, sample_sessions};

fn world_with_samples() -> (TestWorld, String) {
    let world = TestWorld::new();
    let input = world
        .write_input("sessions.json", &sessions_json(&sample_sessions()))
        .expect("write input");
    (world, input.to_string_lossy().to_string())
}

#[test]
fn test_json_output_matches_input() {
    let (world, input) = world_with_samples();

    let result = world
        .run(&["--format", "json", "dates", "--input", &input])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_calendar_matches(&result.json().unwrap(), &sample_sessions()).unwrap();
}

#[test]
fn test_envelope_input() {
    let world = TestWorld::new();
    let input = world
        .write_input("listing.json", &sessions_envelope_json(&sample_sessions()))
        .unwrap();

    let result = world
        .run(&["--format", "json", "dates", "-i", input.to_str().unwrap()])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_calendar_matches(&result.json().unwrap(), &sample_sessions()).unwrap();
}

#[test]
fn test_reads_stdin() {
    let world = TestWorld::new();
    let body = sessions_json(&sample_sessions());

    let result = world
        .run_with_stdin(&["--format", "json", "dates", "--input", "-"], Some(&body))
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_keys(
        &result.json().unwrap(),
        &["epic-session", "epic-session-2", "epic-session-3"],
    )
    .unwrap();
}

#[test]
fn test_empty_input() {
    let world = TestWorld::new();

    let result = world
        .run_with_stdin(&["--format", "json", "dates"], Some("[]"))
        .unwrap();

    assert!(result.success());
    assert_eq!(result.stdout(), "[]\n");
}

#[test]
fn test_malformed_date_fails_without_output() {
    let world = TestWorld::new();
    let mut sessions = sample_sessions();
    sessions[1].session_date = "not-a-date".to_string();
    let input = world
        .write_input("broken.json", &sessions_json(&sessions))
        .unwrap();

    let result = world
        .run(&["--format", "json", "dates", "--input", input.to_str().unwrap()])
        .unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stdout().is_empty());
    assert!(result.stderr().contains("Error: Parse error"));
    assert!(result.stderr().contains("epic-session-2"));
    assert!(result.stderr().contains("not-a-date"));
}

#[test]
fn test_invalid_json_fails() {
    let world = TestWorld::new();

    let result = world
        .run_with_stdin(&["dates"], Some("{\"sessions\": 3}"))
        .unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("Failed to read sessions from stdin"));
}

#[test]
fn test_incomplete_record_names_missing_field() {
    let world = TestWorld::new();

    let result = world
        .run_with_stdin(&["dates"], Some(r#"[{"id": 1, "slug": "x"}]"#))
        .unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stdout().is_empty());
    assert!(result.stderr().contains("Failed to read sessions from stdin: "));
    assert!(result.stderr().contains("missing field"));
}

#[test]
fn test_missing_input_file() {
    let world = TestWorld::new();

    let result = world.run(&["dates", "--input", "nowhere.json"]).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("Failed to open nowhere.json"));
}

#[test]
fn test_strict_flag() {
    let world = TestWorld::new();
    let sessions = vec![
        SessionBuilder::new(1, "offset")
            .date("2019-09-21T17:30:00.000+02:00")
            .build(),
    ];
    let input = world
        .write_input("offset.json", &sessions_json(&sessions))
        .unwrap();
    let input = input.to_str().unwrap();

    let lenient = world
        .run(&["--format", "json", "dates", "--input", input])
        .unwrap();
    assert!(lenient.success());
    assert_eq!(
        lenient.json().unwrap()[0]["dates"],
        "2019-09-21T15:30:00.000Z"
    );

    let strict = world
        .run(&["--format", "json", "dates", "--input", input, "--strict"])
        .unwrap();
    assert_eq!(strict.code(), Some(1));
    assert!(strict.stderr().contains("expected YYYY-MM-DDTHH:MM:SS.sssZ"));
}

#[test]
fn test_order_limit_offset() {
    let (world, input) = world_with_samples();

    let result = world
        .run(&[
            "--format", "json", "dates", "--input", &input, "--order", "oldest", "--offset",
            "1", "--limit", "1",
        ])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_keys(&result.json().unwrap(), &["epic-session-3"]).unwrap();
}

#[test]
fn test_csv_output() {
    let (world, input) = world_with_samples();

    let result = world
        .run(&["--format", "csv", "dates", "--input", &input])
        .unwrap();

    assert!(result.success());
    assert_eq!(
        result.stdout(),
        "key,dot,dates,label\n\
         epic-session,red,2019-09-21T15:30:00.000Z,Epic Session\n\
         epic-session-2,red,2019-10-21T11:30:00.000Z,Epic Session 2\n\
         epic-session-3,red,2019-09-30T17:30:00.000Z,Epic Session 3\n"
    );
}

#[test]
fn test_plain_output() {
    let (world, input) = world_with_samples();

    let result = world.run(&["dates", "--input", &input]).unwrap();

    assert!(result.success());
    assert_eq!(
        result.stdout(),
        "2019-09-21T15:30:00.000Z  ● red  epic-session    Epic Session\n\
         2019-10-21T11:30:00.000Z  ● red  epic-session-2  Epic Session 2\n\
         2019-09-30T17:30:00.000Z  ● red  epic-session-3  Epic Session 3\n"
    );
}

#[test]
fn test_config_defaults_apply() {
    let world = TestWorld::new().with_config(
        r#"
[output]
format = "json"
pretty = false

[query]
order = "newest"
"#,
    );
    let input = world
        .write_input("sessions.json", &sessions_json(&sample_sessions()))
        .unwrap();

    let result = world
        .run(&["dates", "--input", input.to_str().unwrap()])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(result.stdout().lines().count(), 1);
    assert_keys(
        &result.json().unwrap(),
        &["epic-session-2", "epic-session-3", "epic-session"],
    )
    .unwrap();
}

#[test]
fn test_flags_override_config() {
    let world = TestWorld::new().with_config("[query]\norder = \"newest\"\nlimit = 1\n");
    let input = world
        .write_input("sessions.json", &sessions_json(&sample_sessions()))
        .unwrap();

    let result = world
        .run(&[
            "--format",
            "json",
            "dates",
            "--input",
            input.to_str().unwrap(),
            "--order",
            "input",
            "--limit",
            "2",
        ])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_keys(&result.json().unwrap(), &["epic-session", "epic-session-2"]).unwrap();
}

#[test]
fn test_invalid_config_is_reported() {
    let world = TestWorld::new().with_config("[output]\nformat = \"yaml\"\n");

    let result = world.run_with_stdin(&["dates"], Some("[]")).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("Invalid configuration"));
}
