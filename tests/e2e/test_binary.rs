//! Integration tests for the cgp2svg binary.
//!
//! These tests run the compiled binary against the chromosome and template
//! fixtures in tests/fixtures.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_cgp2svg"))
}

fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

fn template_arg() -> String {
    fixture("template.svg").display().to_string()
}

/// Run the binary with `stdin` piped in. Returns the raw output.
fn run(stdin: &str, args: &[&str]) -> Output {
    let mut child = Command::new(binary_path())
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run binary");
    if let Some(mut input) = child.stdin.take() {
        input.write_all(stdin.as_bytes()).ok();
    }
    child.wait_with_output().expect("Failed to wait for binary")
}

fn run_ok(stdin: &str, args: &[&str]) -> String {
    let output = run(stdin, args);
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Non-UTF8 output")
}

fn sample() -> String {
    fs::read_to_string(fixture("sample.chr")).expect("sample fixture")
}

// ── Rendering ────────────────────────────────────────────────────────────────

#[test]
fn test_render_from_stdin() {
    let out = run_ok(&sample(), &["-t", &template_arg()]);
    assert!(out.starts_with("<?xml"));
    assert!(out.contains(">AND</tspan>"));
    assert!(out.contains("stroke:#00ab00;"));
    assert!(out.trim_end().ends_with("</svg>"));
}

#[test]
fn test_render_from_file_matches_stdin() {
    let circuit = fixture("sample.chr").display().to_string();
    let from_file = run_ok("", &["-c", &circuit, "-t", &template_arg()]);
    let from_stdin = run_ok(&sample(), &["--template", &template_arg()]);
    assert_eq!(from_file, from_stdin);
}

#[test]
fn test_output_file() {
    let path = std::env::temp_dir().join(format!("cgp2svg-e2e-{}.svg", std::process::id()));
    let out_arg = path.display().to_string();
    let stdout = run_ok(&sample(), &["-t", &template_arg(), "-o", &out_arg]);
    assert!(stdout.is_empty());
    let written = fs::read_to_string(&path).expect("output file");
    fs::remove_file(&path).ok();
    assert!(written.contains(">AND</tspan>"));
}

#[test]
fn test_primary_as_text_flags() {
    let lines = run_ok(&sample(), &["-t", &template_arg()]);
    let inactive = run_ok(&sample(), &["-t", &template_arg(), "-i"]);
    let all = run_ok(&sample(), &["-t", &template_arg(), "--primary-as-text"]);

    let labels = |svg: &str| svg.matches("text-anchor:middle").count();
    assert_eq!(labels(&lines), 0);
    assert!(labels(&inactive) > 0);
    assert!(labels(&all) >= labels(&inactive));
    assert!(lines.matches("<path").count() > inactive.matches("<path").count());
}

#[test]
fn test_summary_on_stderr() {
    let output = run(&sample(), &["-t", &template_arg(), "--summary"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Inputs: 9"));
    assert!(stderr.contains("Active nodes: 4 of 32"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Active nodes"));
}

#[test]
fn test_version_flag() {
    let out = run_ok("", &["--version"]);
    assert!(out.starts_with("cgp2svg "));
}

// ── Failures ─────────────────────────────────────────────────────────────────

#[test]
fn test_malformed_circuit_exits_nonzero() {
    let output = run("{9,1,4,8,2,1,16}([9] 0, 1, 5)", &["-t", &template_arg()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot decode circuit"), "{stderr}");
    assert!(stderr.contains("malformed node record 10"), "{stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_template_missing_element() {
    let template = fs::read_to_string(fixture("template.svg"))
        .expect("template fixture")
        .replace("\"block33\"", "\"spare\"");
    let path = std::env::temp_dir().join(format!("cgp2svg-e2e-{}-bad.svg", std::process::id()));
    fs::write(&path, template).expect("write template");
    let output = run(&sample(), &["-t", &path.display().to_string()]);
    fs::remove_file(&path).ok();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("element \"block33\" not found"), "{stderr}");
}

#[test]
fn test_missing_template_file() {
    let output = run(&sample(), &["-t", "/nonexistent/template.svg"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read template"));
}

#[test]
fn test_template_is_required() {
    let output = run(&sample(), &[]);
    assert!(!output.status.success());
}
