//! Tests for the `DEBUG` environment override.
//!
//! The variable is set on a child copy of this test binary, which then runs
//! `debug_env_in_child` with the expectation passed alongside.

use std::env;
use std::process::Command;
use tmplog::Config;
use tmplog::config::debug_override;

const EXPECT_ENV: &str = "TMPLOG_TEST_EXPECT_DEBUG";

const CONFIG: &str = r#"
[loggers.off]
enabled = false

[loggers.on]
enabled = true
"#;

#[test]
fn debug_env_in_child() {
    let Ok(expected) = env::var(EXPECT_ENV) else {
        return;
    };
    let forced = match expected.as_str() {
        "on" => true,
        "off" => false,
        other => panic!("unexpected expectation {other:?}"),
    };

    assert_eq!(debug_override(), Some(forced));

    let config: Config = CONFIG.parse().unwrap();
    assert_eq!(config.logger("off").unwrap().is_enabled(), forced);
    assert_eq!(config.logger("on").unwrap().is_enabled(), forced);

    let ignored: Config = format!("[general]\ndebug_env = false\n{CONFIG}").parse().unwrap();
    assert!(!ignored.logger("off").unwrap().is_enabled());
    assert!(ignored.logger("on").unwrap().is_enabled());
}

fn run_child(debug: &str, expected: &str) {
    let status = Command::new(env::current_exe().unwrap())
        .args(["--exact", "debug_env_in_child", "--test-threads=1"])
        .env("DEBUG", debug)
        .env(EXPECT_ENV, expected)
        .status()
        .unwrap();
    assert!(status.success(), "DEBUG={debug} child failed");
}

#[test]
fn debug_1_forces_loggers_on() {
    run_child("1", "on");
}

#[test]
fn debug_0_forces_loggers_off() {
    run_child("0", "off");
}
