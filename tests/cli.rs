//! Integration tests for the command-line frontend.
//!
//! These drive the built binary through stdin/stdout and through files.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn runez(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_runez"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn runez");
    // The child may exit before reading, e.g. on a usage error.
    let _ = child.stdin.take().expect("stdin is piped").write_all(stdin);
    child.wait_with_output().expect("Failed to wait for runez")
}

#[test]
fn compresses_by_default() {
    let output = runez(&[], b"banana");
    assert!(output.status.success());
    assert_eq!(
        output.stdout,
        vec![
            0x62, 0, 0, 0, 0x61, 0, 0, 0, 0x6e, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 1, 2, 1
        ]
    );
}

#[test]
fn explicit_compress_matches_default() {
    let default = runez(&[], "grüße".as_bytes());
    let explicit = runez(&["-c"], "grüße".as_bytes());
    assert!(explicit.status.success());
    assert_eq!(default.stdout, explicit.stdout);
}

#[test]
fn round_trip_through_pipes() {
    let text = "Hello, world!\nПривет, мир!\n";
    let archive = runez(&["-c"], text.as_bytes());
    assert!(archive.status.success());

    let restored = runez(&["-d"], &archive.stdout);
    assert!(restored.status.success());
    assert_eq!(String::from_utf8(restored.stdout).unwrap(), text);
}

#[test]
fn round_trip_through_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let text_path = temp_dir.path().join("notes.txt");
    let archive_path = temp_dir.path().join("notes.rz");
    let restored_path = temp_dir.path().join("restored.txt");
    fs::write(&text_path, "mississippi\n").unwrap();

    let compress = runez(
        &[
            text_path.to_str().unwrap(),
            "-o",
            archive_path.to_str().unwrap(),
        ],
        b"",
    );
    assert!(compress.status.success());

    let decompress = runez(
        &[
            "-d",
            archive_path.to_str().unwrap(),
            "--output",
            restored_path.to_str().unwrap(),
        ],
        b"",
    );
    assert!(decompress.status.success());
    assert_eq!(fs::read_to_string(&restored_path).unwrap(), "mississippi\n");
}

#[test]
fn both_modes_is_an_error() {
    let output = runez(&["-c", "-d"], b"abc");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn bad_archive_fails() {
    let output = runez(&["-d"], &[0x61, 0, 0, 0, 0, 0, 0, 0, 7]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out of bounds"), "stderr was: {}", stderr);
}

#[test]
fn too_many_symbols_fails_without_output() {
    let text: String = (1..=300u32).filter_map(std::char::from_u32).collect();
    let output = runez(&[], text.as_bytes());
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn debug_lists_table_on_stderr() {
    let output = runez(&["-D"], b"ab");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'a' has index 0"), "stderr was: {}", stderr);
    assert!(stderr.contains("'b' has index 1"), "stderr was: {}", stderr);
}

#[test]
fn missing_input_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("missing.txt");
    let output = runez(&[missing.to_str().unwrap()], b"");
    assert!(!output.status.success());
}
