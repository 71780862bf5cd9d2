// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[test]
fn config_error_display() {
    let err = Error::Config {
        message: "invalid version".into(),
        path: Some(PathBuf::from("patternscan.toml")),
    };
    assert!(err.to_string().contains("invalid version"));
}

#[test]
fn io_error_display_includes_path() {
    let err = Error::Io {
        path: PathBuf::from("/missing/dir"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    let msg = err.to_string();
    assert!(msg.contains("/missing/dir"), "got: {msg}");
    assert!(msg.contains("gone"), "got: {msg}");
}

#[test]
fn invalid_pattern_wraps_regex_error() {
    let regex_err = regex::Regex::new("(").unwrap_err();
    let err = Error::from(regex_err);
    assert!(err.to_string().starts_with("invalid pattern:"));
}

#[parameterized(
    config = { Error::Config { message: "x".into(), path: None }, ExitCode::ConfigError },
    invalid_pattern = { Error::from(regex::Regex::new("(").unwrap_err()), ExitCode::ConfigError },
    not_a_directory = { Error::NotADirectory(PathBuf::from("x")), ExitCode::InternalError },
    internal = { Error::Internal("x".into()), ExitCode::InternalError },
)]
fn exit_code_mapping(err: Error, expected: ExitCode) {
    assert_eq!(ExitCode::from(&err), expected);
}
