use std::path::PathBuf;
use std::process::{Command, Output};

fn gohash(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gohash"))
        .args(args)
        .output()
        .expect("gohash binary should run")
}

fn stdout_of(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).expect("stdout should be utf-8")
}

fn fixture(name: &str, contents: &[u8]) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("gohash-cli-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn version_prints_exactly_the_version_string() {
    let output = gohash(&["--version"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "gohash 1.0\n");
}

#[test]
fn help_wins_even_with_valid_file() {
    let path = fixture("help.txt", b"abc");
    let path_str = path.to_str().expect("utf-8 temp path");

    let output = gohash(&["--version", "--help", path_str]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("gohash [-a algorithm] [--help] [--version] <file>\n"));
    assert!(!stdout.contains("352441c2"));
    assert!(!stdout.contains("gohash 1.0"));

    let _ = std::fs::remove_file(path);
}

#[test]
fn hashes_abc_with_default_crc32() {
    let path = fixture("abc.txt", b"abc");
    let path_str = path.to_str().expect("utf-8 temp path");

    let output = gohash(&[path_str]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "352441c2\n");

    let output = gohash(&["-a", "crc64", path_str, "ignored.bin"]);
    assert_eq!(stdout_of(&output), "3776c42000000000\n");

    let _ = std::fs::remove_file(path);
}

#[test]
fn errors_go_to_stdout_with_zero_exit() {
    let output = gohash(&["-a", "md5", "whatever.bin"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "error: unknown algorithm\n");

    let output = gohash(&["/nonexistent/gohash/input.bin"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).starts_with("error: "));
}

#[test]
fn missing_file_argument_reports_io_error() {
    let output = gohash(&[]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("error: "));
    assert_ne!(stdout, "error: unknown algorithm\n");
}

#[test]
fn unknown_flag_is_rejected_by_parser() {
    let output = gohash(&["--bogus"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
