//! End-to-end tests against the compiled `bearing-finder` binary.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::path::Path;
use std::process::{Command, Output};

const STORE: &str = concat!(
    r#"{"inner_diameter": 10, "outer_diameter": 26, "width": 8, "model": "608"}"#,
    "\n",
    r#"{"inner_diameter": 17, "outer_diameter": 40, "width": 12, "model": "6203"}"#,
    "\n",
);

/// Run the binary in `dir` with a clean bearing-finder environment.
fn finder(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bearing-finder"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("BEARING_FINDER_DATABASE")
        .env("BEARING_FINDER_CONFIG", dir.join("no-config.toml"))
        .output()
        .expect("failed to run bearing-finder")
}

fn workdir_with_store() -> tempfile::TempDir {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("DataBase.json"), STORE).unwrap();
    dir
}

#[test]
fn test_found_prints_model_without_newline() {
    let dir = workdir_with_store();
    let output = finder(dir.path(), &["10", "26", "8"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "608");
}

#[test]
fn test_not_found_exits_zero() {
    let dir = workdir_with_store();
    let output = finder(dir.path(), &["10", "26", "9"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Not Found");
}

#[test]
fn test_fewer_than_three_arguments() {
    let dir = workdir_with_store();
    for args in [&[][..], &["10"][..], &["10", "26"][..]] {
        let output = finder(dir.path(), args);
        assert_eq!(output.status.code(), Some(1), "args: {args:?}");
        assert!(output.stdout.is_empty(), "args: {args:?}");
    }
}

#[test]
fn test_missing_store_prints_not_found() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = finder(dir.path(), &["10", "26", "8"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Not Found");
}

#[test]
fn test_missing_store_strict_exits_two() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = finder(dir.path(), &["10", "26", "8", "--strict"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unavailable"));
}

#[test]
fn test_database_from_environment() {
    let store_dir = workdir_with_store();
    let work = tempfile::TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_bearing-finder"))
        .current_dir(work.path())
        .args(["17", "40", "12"])
        .env_remove("RUST_LOG")
        .env("BEARING_FINDER_CONFIG", work.path().join("no-config.toml"))
        .env("BEARING_FINDER_DATABASE", store_dir.path().join("DataBase.json"))
        .output()
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout), "6203");
}

#[test]
fn test_config_file_selects_match_mode() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("DataBase.json"),
        r#"{"inner_diameter": 100, "outer_diameter": 260, "width": 80, "model": "61920"}"#,
    )
    .unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "match_mode = \"fragment\"\n").unwrap();

    let output = finder(
        dir.path(),
        &["10", "26", "8", "--config", config.to_str().unwrap()],
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), "61920");
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    let dir = workdir_with_store();
    let output = finder(dir.path(), &["10", "26", "8", "-vv"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "608");
}

/// Removes a file written beside the binary when the test ends.
struct PlacedFile(std::path::PathBuf);

impl Drop for PlacedFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

#[test]
fn test_store_beside_binary_is_not_used() {
    let exe = Path::new(env!("CARGO_BIN_EXE_bearing-finder"));
    let placed = PlacedFile(exe.parent().unwrap().join("DataBase.json"));
    std::fs::write(
        &placed.0,
        r#"{"inner_diameter": 10, "outer_diameter": 26, "width": 8, "model": "STRAY"}"#,
    )
    .unwrap();

    let empty = tempfile::TempDir::new().unwrap();
    let output = finder(empty.path(), &["10", "26", "8"]);
    drop(placed);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Not Found");
}

#[test]
fn test_negative_dimensions_count_as_arguments() {
    let dir = workdir_with_store();
    let output = finder(dir.path(), &["-5", "26", "8"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Not Found");
}

#[test]
fn test_bad_environment_override_falls_back_to_defaults() {
    let dir = workdir_with_store();
    let output = Command::new(env!("CARGO_BIN_EXE_bearing-finder"))
        .current_dir(dir.path())
        .args(["10", "26", "8"])
        .env_remove("RUST_LOG")
        .env_remove("BEARING_FINDER_DATABASE")
        .env("BEARING_FINDER_CONFIG", dir.path().join("no-config.toml"))
        .env("BEARING_FINDER_TOLERANCE", "lots")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "608");
    assert!(String::from_utf8_lossy(&output.stderr).contains("BEARING_FINDER_TOLERANCE"));
}

#[test]
fn test_broken_default_config_falls_back_to_defaults() {
    let dir = workdir_with_store();
    let broken = dir.path().join("broken.toml");
    std::fs::write(&broken, "match_mode = \"fuzzy\"\n").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_bearing-finder"))
        .current_dir(dir.path())
        .args(["10", "26", "8"])
        .env_remove("RUST_LOG")
        .env_remove("BEARING_FINDER_DATABASE")
        .env("BEARING_FINDER_CONFIG", &broken)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "608");
}

#[test]
fn test_broken_config_fails_when_explicit_or_strict() {
    let dir = workdir_with_store();
    let broken = dir.path().join("broken.toml");
    std::fs::write(&broken, "match_mode = \"fuzzy\"\n").unwrap();

    let output = finder(
        dir.path(),
        &["10", "26", "8", "--config", broken.to_str().unwrap()],
    );
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let output = Command::new(env!("CARGO_BIN_EXE_bearing-finder"))
        .current_dir(dir.path())
        .args(["10", "26", "8", "--strict"])
        .env_remove("RUST_LOG")
        .env_remove("BEARING_FINDER_DATABASE")
        .env("BEARING_FINDER_CONFIG", &broken)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_config_show_reports_resolved_store() {
    let dir = workdir_with_store();
    let output = finder(dir.path(), &["config", "show"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("# store: DataBase.json (present)"));
    assert!(stdout.contains("match_mode = \"exact\""));
}
