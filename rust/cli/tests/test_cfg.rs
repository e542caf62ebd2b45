use serial_test::serial;
use showdown_cli::run;
use std::env;
use std::io::Write;

const VARS: &[&str] = &[
    "SHOWDOWN_CONFIG",
    "SHOWDOWN_SEED",
    "SHOWDOWN_BALANCE",
    "SHOWDOWN_MIN_BET",
    "SHOWDOWN_MAX_BET",
];

fn clear_env() {
    for key in VARS {
        unsafe { env::remove_var(key) };
    }
}

fn run_cfg() -> (i32, serde_json::Value, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["showdown", "cfg"], &mut out, &mut err);
    let stdout = String::from_utf8_lossy(&out).to_string();
    let json = serde_json::from_str(&stdout).unwrap_or(serde_json::Value::Null);
    (code, json, String::from_utf8_lossy(&err).to_string())
}

#[test]
#[serial]
fn defaults_are_reported_with_default_source() {
    clear_env();
    let (code, json, stderr) = run_cfg();
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert_eq!(json["starting_balance"]["value"], 100);
    assert_eq!(json["min_bet"]["value"], 5);
    assert_eq!(json["max_bet"]["value"], 100);
    assert!(json["seed"]["value"].is_null());
    for key in ["starting_balance", "min_bet", "max_bet", "seed"] {
        assert_eq!(json[key]["source"], "default", "{}", key);
    }
    assert!(stderr.is_empty());
}

#[test]
#[serial]
fn environment_overrides_defaults() {
    clear_env();
    unsafe {
        env::set_var("SHOWDOWN_SEED", "99");
        env::set_var("SHOWDOWN_MAX_BET", "250");
    }
    let (code, json, _) = run_cfg();
    clear_env();

    assert_eq!(code, 0);
    assert_eq!(json["seed"]["value"], 99);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["max_bet"]["value"], 250);
    assert_eq!(json["max_bet"]["source"], "env");
    assert_eq!(json["min_bet"]["source"], "default");
}

#[test]
#[serial]
fn file_layer_sits_between_defaults_and_environment() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "starting_balance = 500\nmin_bet = 10\nseed = 7").unwrap();

    unsafe {
        env::set_var("SHOWDOWN_CONFIG", file.path());
        env::set_var("SHOWDOWN_SEED", "8");
    }
    let (code, json, stderr) = run_cfg();
    clear_env();

    assert_eq!(code, 0, "stderr: {}", stderr);
    assert_eq!(json["starting_balance"]["value"], 500);
    assert_eq!(json["starting_balance"]["source"], "file");
    assert_eq!(json["min_bet"]["value"], 10);
    assert_eq!(json["min_bet"]["source"], "file");
    assert_eq!(json["seed"]["value"], 8);
    assert_eq!(json["seed"]["source"], "env");
}

#[test]
#[serial]
fn inverted_limits_fail_validation() {
    clear_env();
    unsafe {
        env::set_var("SHOWDOWN_MIN_BET", "50");
        env::set_var("SHOWDOWN_MAX_BET", "10");
    }
    let (code, _, stderr) = run_cfg();
    clear_env();

    assert_eq!(code, 2);
    assert!(stderr.contains("Configuration error"), "stderr: {}", stderr);
    assert!(stderr.contains("min_bet must not exceed max_bet"));
}

#[test]
#[serial]
fn unparsable_environment_value_is_an_error() {
    clear_env();
    unsafe { env::set_var("SHOWDOWN_BALANCE", "lots") };
    let (code, _, stderr) = run_cfg();
    clear_env();

    assert_eq!(code, 2);
    assert!(stderr.contains("Invalid starting balance"));
}

#[test]
#[serial]
fn missing_config_file_is_an_error() {
    clear_env();
    unsafe { env::set_var("SHOWDOWN_CONFIG", "/nonexistent/showdown.toml") };
    let (code, _, stderr) = run_cfg();
    clear_env();

    assert_eq!(code, 2);
    assert!(stderr.contains("cannot read config file"));
}
