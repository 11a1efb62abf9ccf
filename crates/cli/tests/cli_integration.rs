//! End-to-end tests for the `pacer` binary
//!
//! These run in real time, so schedules keep generous gaps between calls
//! that must be dropped/superseded and calls that must execute.

mod common;

use anyhow::Result;
use common::TestConfig;
use std::time::Duration;

#[test]
fn test_throttle_replay_drops_calls_inside_window() -> Result<()> {
    let config = TestConfig::new();

    let result = pacer!(
        config.path(),
        "throttle",
        "--delay-ms",
        "300",
        "--at",
        "0,50,100,600"
    )
    .assert_success()?;

    assert_eq!(result.executed_calls(), vec![1, 4]);
    assert!(result.contains_stdout("dropped"));
    Ok(())
}

#[test]
fn test_debounce_replay_runs_last_call_of_each_burst() -> Result<()> {
    let config = TestConfig::new();

    let result = pacer!(
        config.path(),
        "debounce",
        "--delay-ms",
        "200",
        "--at",
        "0,20,40,700,720"
    )
    .assert_success()?;

    assert_eq!(result.executed_calls(), vec![3, 5]);
    assert!(result.contains_stdout("superseded"));
    // Last call at 720ms plus the 200ms quiet period
    assert!(result.duration >= Duration::from_millis(920));
    Ok(())
}

#[test]
fn test_delay_falls_back_to_config() -> Result<()> {
    let config = TestConfig::new();
    config.write("[throttle]\ndelay_ms = 400\n");

    let result = pacer!(config.path(), "throttle", "--at", "0,100,800").assert_success()?;

    assert_eq!(result.executed_calls(), vec![1, 3]);
    assert!(result.contains_stdout("400ms"));
    Ok(())
}

#[test]
fn test_negative_delay_throttles_nothing() -> Result<()> {
    let config = TestConfig::new();

    let result = pacer!(config.path(), "throttle", "--delay-ms", "-50", "--at", "0,0,0")
        .assert_success()?;

    assert_eq!(result.executed_calls(), vec![1, 2, 3]);
    Ok(())
}

#[test]
fn test_click_mode_throttles_stdin_lines() -> Result<()> {
    let config = TestConfig::new();

    let result = pacer!(config.path(), "click")
        .stdin("\n\n\n")
        .assert_success()?;

    // Default throttle window is 2000ms, all three clicks arrive at once
    assert!(result.contains_stdout("Hello"));
    assert!(result.contains_stdout("(throttled)"));
    assert!(result.contains_stdout("3 clicks, 1 accepted"));
    Ok(())
}

#[test]
fn test_unsorted_schedule_is_rejected() -> Result<()> {
    let config = TestConfig::new();

    let result = pacer!(config.path(), "throttle", "--at", "500,100").assert_failure()?;

    assert!(result.contains_stderr("non-decreasing"));
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() -> Result<()> {
    let config = TestConfig::new();
    config.write("[throttle]\ndelay_ms = 999999999999\n");

    let result = pacer!(config.path(), "throttle", "--at", "0").assert_failure()?;

    assert!(result.contains_stderr("throttle.delay_ms"));
    Ok(())
}

#[test]
fn test_config_commands() -> Result<()> {
    let config = TestConfig::new();

    let example = pacer!(config.path(), "config", "--example").assert_success()?;
    assert!(example.contains_stdout("[throttle]"));
    assert!(example.contains_stdout("delay_ms = 2000"));

    let path = pacer!(config.path(), "config", "--path").assert_success()?;
    assert!(path.contains_stdout(&config.path().display().to_string()));
    assert!(path.contains_stdout("does not exist"));

    config.write("[debounce]\ndelay_ms = 125\n");
    let list = pacer!(config.path(), "config").assert_success()?;
    assert!(list.contains_stdout("[debounce]"));
    assert!(list.contains_stdout("125"));
    Ok(())
}

#[test]
fn test_config_set_writes_file_and_get_reads_it() -> Result<()> {
    let config = TestConfig::new();

    let set = pacer!(config.path(), "config", "--set", "throttle.delay_ms=750")
        .assert_success()?;
    assert!(set.contains_stdout("throttle.delay_ms"));

    let written = std::fs::read_to_string(config.path())?;
    assert!(written.contains("delay_ms = 750"));

    let get = pacer!(config.path(), "config", "--get", "throttle.delay_ms").assert_success()?;
    assert_eq!(get.stdout.trim(), "750");

    // Untouched section keeps its default
    let get = pacer!(config.path(), "config", "--get", "debounce.delay_ms").assert_success()?;
    assert_eq!(get.stdout.trim(), "300");

    // New value drives the throttle window
    let result = pacer!(config.path(), "throttle", "--at", "0,300,1000").assert_success()?;
    assert_eq!(result.executed_calls(), vec![1, 3]);
    Ok(())
}

#[test]
fn test_config_set_rejects_bad_input() -> Result<()> {
    let config = TestConfig::new();

    let unknown = pacer!(config.path(), "config", "--set", "burst.size=3").assert_failure()?;
    assert!(unknown.contains_stderr("Unknown config key"));

    let malformed = pacer!(config.path(), "config", "--set", "throttle.delay_ms").assert_failure()?;
    assert!(malformed.contains_stderr("KEY=VALUE"));

    let too_large = pacer!(config.path(), "config", "--set", "debounce.delay_ms=999999999999")
        .assert_failure()?;
    assert!(too_large.contains_stderr("debounce.delay_ms"));

    // Nothing was written by the failed attempts
    assert!(!config.path().exists());
    Ok(())
}
