//! Run the built binary the way it is used: from the directory holding the script.
use std::{
    fs,
    io::Write,
    path::Path,
    process::{Command, Output, Stdio},
};

use encode_for_xml::{DEFAULT_INPUT, DEFAULT_OUTPUT};

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_encode-for-xml"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn default_paths() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(DEFAULT_INPUT), r#"a & b < c > d "e" 'f'"#).unwrap();

    let out = run(dir.path(), &[]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "Script encoded and saved to encoded_script.txt\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join(DEFAULT_OUTPUT)).unwrap(),
        "a &amp; b &lt; c &gt; d &quot;e&quot; &apos;f&apos;"
    );
}

#[test]
fn empty_input_still_confirms() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(DEFAULT_INPUT), "").unwrap();

    let out = run(dir.path(), &[]);
    assert!(out.status.success());
    assert!(String::from_utf8(out.stdout)
        .unwrap()
        .starts_with("Script encoded and saved to"));
    assert_eq!(fs::read(dir.path().join(DEFAULT_OUTPUT)).unwrap(), b"");
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    let out = run(dir.path(), &[]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("reading input file"));
    assert!(!dir.path().join(DEFAULT_OUTPUT).exists());
}

#[test]
fn explicit_paths_and_decode() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("in.txt"), "if (a < b) { 'x' }").unwrap();

    let out = run(dir.path(), &["-i", "in.txt", "-o", "mid.txt"]);
    assert!(out.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("mid.txt")).unwrap(),
        "if (a &lt; b) { &apos;x&apos; }"
    );

    let out = run(dir.path(), &["--decode", "--input", "mid.txt", "--output", "back.txt"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "Script decoded and saved to back.txt\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("back.txt")).unwrap(),
        "if (a < b) { 'x' }"
    );
}

#[test]
fn stdin_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_encode-for-xml"))
        .args(["-i", "-", "-o", "-"])
        .current_dir(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all("<b>&</b>".as_bytes())
        .unwrap();

    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "&lt;b&gt;&amp;&lt;/b&gt;");
}
