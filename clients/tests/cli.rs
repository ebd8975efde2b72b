//! End-to-end runs of the client binaries.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin).args(args).output().unwrap()
}

fn out_arg(dir: &Path) -> String {
    dir.display().to_string()
}

#[test]
fn fixed_binary_writes_its_two_files() {
    let tmp = TempDir::new().unwrap();
    let out = run(env!("CARGO_BIN_EXE_lut-fixed"), &["--out", &out_arg(tmp.path())]);
    assert!(out.status.success());

    let log2 = fs::read_to_string(tmp.path().join("log2_lut_128_new.txt")).unwrap();
    assert!(log2.starts_with("000\n"));
    assert!(tmp.path().join("exp2_lut_128_new.txt").is_file());
    assert!(!tmp.path().join("log2_lut_128.txt").exists());
}

#[test]
fn half_binary_writes_its_two_files() {
    let tmp = TempDir::new().unwrap();
    let out = run(env!("CARGO_BIN_EXE_lut-half"), &["--out", &out_arg(tmp.path())]);
    assert!(out.status.success());

    let exp2 = fs::read_to_string(tmp.path().join("exp2_lut_128.txt")).unwrap();
    assert!(exp2.starts_with("3c00\n"));
    assert!(!exp2.ends_with('\n'));
    assert!(!tmp.path().join("exp2_lut_128_new.txt").exists());
}

#[test]
fn build_then_check_passes() {
    let tmp = TempDir::new().unwrap();
    let dir = out_arg(tmp.path());
    let bin = env!("CARGO_BIN_EXE_lut-build");

    assert!(run(bin, &["--out", &dir]).status.success());
    for name in [
        "log2_lut_128_new.txt",
        "exp2_lut_128_new.txt",
        "log2_lut_128.txt",
        "exp2_lut_128.txt",
    ] {
        assert!(tmp.path().join(name).is_file(), "{name}");
    }

    let checked = run(bin, &["--out", &dir, "--check"]);
    assert!(checked.status.success());
    assert!(String::from_utf8_lossy(&checked.stdout).contains("All tables up to date."));
}

#[test]
fn check_fails_on_missing_files() {
    let tmp = TempDir::new().unwrap();
    let out = run(
        env!("CARGO_BIN_EXE_lut-build"),
        &["--out", &out_arg(tmp.path()), "--check", "--only", "half"],
    );
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stdout).contains("MISSING"));
}

#[test]
fn manifest_lists_generated_tables() {
    let tmp = TempDir::new().unwrap();
    let manifest = tmp.path().join("manifest.json");
    let out = run(
        env!("CARGO_BIN_EXE_lut-build"),
        &[
            "--out",
            &out_arg(tmp.path()),
            "--only",
            "fixed",
            "--manifest",
            &manifest.display().to_string(),
        ],
    );
    assert!(out.status.success());

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&manifest).unwrap()).unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(1));
    assert_eq!(json[0]["generator"], "fixed-point");
    assert_eq!(json[0]["tables"][0]["hex_digits"], 3);
    assert_eq!(json[0]["tables"][1]["hex_digits"], 4);
}

#[test]
fn unwritable_output_exits_non_zero() {
    let tmp = TempDir::new().unwrap();
    let not_a_dir = tmp.path().join("not_a_dir");
    fs::write(&not_a_dir, "occupied").unwrap();

    for bin in [
        env!("CARGO_BIN_EXE_lut-fixed"),
        env!("CARGO_BIN_EXE_lut-half"),
        env!("CARGO_BIN_EXE_lut-build"),
    ] {
        let out = run(bin, &["--out", &out_arg(&not_a_dir)]);
        assert!(!out.status.success(), "{bin} succeeded");
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stderr.contains("Failed to create directory"), "{bin}: {stderr}");
    }
}
