//! Tests for the launcher.

use super::*;
use crate::error::LaunchError;
use std::ffi::OsString;
use std::io;
use tempfile::TempDir;

fn config_for(target: impl Into<OsString>) -> LauncherConfig {
    LauncherConfig {
        target: target.into(),
        ..LauncherConfig::default()
    }
}

fn os_args(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}

#[test]
fn test_not_found_is_classified_separately() {
    let config = LauncherConfig::default();
    let err = classify_spawn_error(&config, io::Error::from(io::ErrorKind::NotFound));
    match err {
        LaunchError::TargetNotFound {
            target,
            runtime,
            package,
        } => {
            assert_eq!(target, "enhance");
            assert_eq!(runtime, "Python");
            assert_eq!(package, "enhance-this");
        }
        other => panic!("expected TargetNotFound, got {:?}", other),
    }
}

#[test]
fn test_other_spawn_errors_keep_their_cause() {
    let config = LauncherConfig::default();
    let err = classify_spawn_error(&config, io::Error::from(io::ErrorKind::PermissionDenied));
    match err {
        LaunchError::Spawn { target, source } => {
            assert_eq!(target, "enhance");
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        }
        other => panic!("expected Spawn, got {:?}", other),
    }
}

#[test]
fn test_missing_target_path_reports_not_found() {
    let _guard = crate::test_support::exec_guard();
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path().join("does-not-exist"));

    let err = launch(&config, &[]).unwrap_err();
    assert!(matches!(err, LaunchError::TargetNotFound { .. }));
    assert!(err.to_string().contains("does-not-exist"));
}

#[test]
fn test_command_line_quotes_arguments() {
    let config = LauncherConfig::default();
    let rendered = command_line(&config, &os_args(&["--style", "two words", ""]));
    assert_eq!(rendered, "enhance --style 'two words' ''");
}

#[cfg(unix)]
mod unix {
    use super::*;
    use crate::test_support::{fake_target, recording_body};
    use std::os::unix::process::ExitStatusExt;

    #[test]
    fn test_arguments_are_forwarded_verbatim() {
        let target = fake_target("enhance", &recording_body(0));
        let config = config_for(&target.path);
        let args = os_args(&["--version", "a prompt with spaces", "-m", "llama3", "--"]);

        let code = launch(&config, &args).unwrap();

        assert_eq!(code, 0);
        assert_eq!(
            target.recorded_args(),
            ["--version", "a prompt with spaces", "-m", "llama3", "--"]
        );
    }

    #[test]
    fn test_no_arguments_forwards_nothing() {
        let target = fake_target("enhance", &recording_body(0));
        let config = config_for(&target.path);

        launch(&config, &[]).unwrap();

        assert!(target.recorded_args().is_empty());
    }

    #[test]
    fn test_child_exit_code_is_propagated() {
        for expected in [0, 1, 3, 42, 255] {
            let target = fake_target("enhance", &recording_body(expected));
            let config = config_for(&target.path);

            let code = launch(&config, &[]).unwrap();
            assert_eq!(code, expected, "exit code {} was not propagated", expected);
        }
    }

    #[test]
    fn test_non_executable_target_is_a_spawn_error() {
        use std::os::unix::fs::PermissionsExt;

        let target = fake_target("enhance", "exit 0");
        let mut perms = std::fs::metadata(&target.path).unwrap().permissions();
        perms.set_mode(0o644);
        std::fs::set_permissions(&target.path, perms).unwrap();

        let err = launch(&config_for(&target.path), &[]).unwrap_err();
        match &err {
            LaunchError::Spawn { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected Spawn, got {:?}", other),
        }
        assert!(err.to_string().starts_with("Error executing command: "));
    }

    #[test]
    fn test_signal_death_maps_to_shell_convention() {
        let target = fake_target("enhance", "kill -TERM $$");
        let code = launch(&config_for(&target.path), &[]).unwrap();
        assert_eq!(code, 128 + 15);
    }

    #[test]
    fn test_exit_code_from_raw_status() {
        // Raw wait statuses: exit code lives in the high byte, signal in the low bits.
        assert_eq!(exit_code(ExitStatus::from_raw(0)), 0);
        assert_eq!(exit_code(ExitStatus::from_raw(7 << 8)), 7);
        assert_eq!(exit_code(ExitStatus::from_raw(9)), 137);
    }
}
