// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule file specs.

use crate::prelude::*;

/// > Rules from --config apply before positional pairs
#[test]
fn config_rules_take_priority() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("rules.toml"),
        "version = 1\n\n[[rule]]\nold = \"a\"\nnew = \"1\"\n",
    )
    .unwrap();

    replace(&["a", "2", "b", "3"])
        .args(&["-C", "rules.toml"])
        .pwd(dir.path())
        .stdin("abc")
        .passes()
        .stdout_eq("13c");
}

/// > Unsupported config version exits 2
#[test]
fn unsupported_version_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("rules.toml"), "version = 9\n").unwrap();

    replace(&[])
        .args(&["-C", "rules.toml"])
        .pwd(dir.path())
        .exits(2)
        .stderr_has("unsupported config version 9");
}

/// > Unknown keys are ignored with a warning when logging is on
#[test]
fn unknown_key_warns() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("rules.toml"), "version = 1\nmode = \"x\"\n").unwrap();

    let out = replacer_cmd()
        .args(["-C", "rules.toml"])
        .env("REPLACER_LOG", "warn")
        .current_dir(dir.path())
        .write_stdin("text")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(out.stdout, b"text");
    assert!(String::from_utf8_lossy(&out.stderr).contains("unrecognized field `mode`"));
}
