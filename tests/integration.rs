#![allow(clippy::expect_used, clippy::unwrap_used)]

use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::TempDir;

const EXPECTED: &str = include_str!("fixtures/session_start_output.json");

struct Run {
    stdout: String,
    stderr: String,
    code: i32,
}

/// Run the hook with an isolated config dir and optional extra env
fn run_hook_with(input: &[u8], config_home: &Path, env: &[(&str, &str)]) -> Run {
    let mut command = Command::new(env!("CARGO_BIN_EXE_orchestration-session-start"));
    command
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("ORCHESTRATION_HOOK_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in env {
        command.env(key, value);
    }

    let mut child = command.spawn().expect("failed to spawn");

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input).expect("failed to write");
    }

    let output = child.wait_with_output().expect("failed to wait");

    Run {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        code: output.status.code().unwrap_or(-1),
    }
}

fn run_hook(input: &[u8]) -> Run {
    let config_home = TempDir::new().unwrap();
    run_hook_with(input, config_home.path(), &[])
}

fn write_config(config_home: &Path, content: &str) {
    let dir = config_home.join("orchestration-hooks");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.yaml"), content).unwrap();
}

#[test]
fn test_session_payload() {
    let run = run_hook(br#"{"session_id": "abc"}"#);

    assert_eq!(run.code, 0);
    let output: Value = serde_json::from_str(&run.stdout).unwrap();
    assert_eq!(output["hookSpecificOutput"]["hookEventName"], "SessionStart");
    assert_eq!(run.stdout, EXPECTED);
}

#[test]
fn test_empty_input_same_output() {
    let run = run_hook(b"");

    assert_eq!(run.code, 0);
    assert_eq!(run.stdout, EXPECTED);
}

#[test]
fn test_invalid_json_same_output() {
    let run = run_hook(b"not json");

    assert_eq!(run.code, 0, "Invalid JSON must not fail the session");
    assert_eq!(run.stdout, EXPECTED);
}

#[test]
fn test_malformed_inputs_same_output() {
    for input in [
        &b"{\"session_id\": \"ab"[..],
        &b"\xff\xfe\x00garbage"[..],
        &b"{} trailing"[..],
        &b"\n\n"[..],
    ] {
        let run = run_hook(input);
        assert_eq!(run.code, 0, "input {:?}", input);
        assert_eq!(run.stdout, EXPECTED, "input {:?}", input);
    }
}

#[test]
fn test_any_json_value_same_output() {
    for input in ["{}", "[]", "[1, 2, 3]", "42", "\"text\"", "null", "false"] {
        let run = run_hook(input.as_bytes());
        assert_eq!(run.code, 0, "input {}", input);
        assert_eq!(run.stdout, EXPECTED, "input {}", input);
    }
}

#[test]
fn test_repeated_invocations_identical() {
    let first = run_hook(
        br#"{"session_id":"one","hook_event_name":"SessionStart","source":"startup"}"#,
    );
    let second = run_hook(br#"{"session_id":"two","source":"resume","cwd":"/elsewhere"}"#);

    assert_eq!(first.code, 0);
    assert_eq!(second.code, 0);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_output_shape() {
    let run = run_hook(b"{}");
    let output: Value = serde_json::from_str(&run.stdout).unwrap();

    let top: Vec<&String> = output.as_object().unwrap().keys().collect();
    assert_eq!(top, vec!["hookSpecificOutput"]);

    let inner = output["hookSpecificOutput"].as_object().unwrap();
    assert_eq!(inner.len(), 2);
    assert_eq!(inner["hookEventName"], "SessionStart");

    let context = inner["additionalContext"].as_str().unwrap();
    for needle in [
        "/orchestration:investigate",
        "/orchestration:clarify",
        "/orchestration:lookup",
        "Scout",
        "🚀 MULTI-AGENT ORCHESTRATION SYSTEM AVAILABLE",
    ] {
        assert!(context.contains(needle), "missing {}", needle);
    }
}

#[test]
fn test_quiet_by_default() {
    let run = run_hook(b"not json");

    assert_eq!(run.code, 0);
    assert!(run.stderr.is_empty(), "unexpected stderr: {}", run.stderr);
}

#[test]
fn test_env_logging_goes_to_stderr() {
    let config_home = TempDir::new().unwrap();
    let run = run_hook_with(
        b"not json",
        config_home.path(),
        &[("ORCHESTRATION_HOOK_LOG", "debug")],
    );

    assert_eq!(run.code, 0);
    assert_eq!(run.stdout, EXPECTED);
    assert!(run.stderr.contains("could not decode hook input"));
    assert!(run.stderr.contains("malformed"));
}

#[test]
fn test_config_log_file() {
    let config_home = TempDir::new().unwrap();
    let log_path = config_home.path().join("hook.log");
    write_config(
        config_home.path(),
        &format!("log_level: info\nlog_file: {}\n", log_path.display()),
    );

    let run = run_hook_with(br#"{"session_id": "abc"}"#, config_home.path(), &[]);

    assert_eq!(run.code, 0);
    assert_eq!(run.stdout, EXPECTED);
    assert!(run.stderr.is_empty(), "unexpected stderr: {}", run.stderr);
    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("session start"));
    assert!(log.contains("abc"));
}

#[test]
fn test_invalid_config_is_ignored() {
    let config_home = TempDir::new().unwrap();
    write_config(config_home.path(), "banner: replaced\n");

    let run = run_hook_with(
        b"{}",
        config_home.path(),
        &[("ORCHESTRATION_HOOK_LOG", "warn")],
    );

    assert_eq!(run.code, 0);
    assert_eq!(run.stdout, EXPECTED);
    assert!(run.stderr.contains("ignoring config"));
}
