use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn pcp(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pcp"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .env_remove("PCP_MAX_WORDS")
        .env_remove("PCP_DELIMITER_STYLE")
        .output()
        .expect("failed to spawn pcp")
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_help_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    for flag in ["-h", "--help"] {
        let output = pcp(&[flag], dir.path());
        assert_eq!(output.status.code(), Some(0), "{flag}");
        let text = format!("{}{}", stdout(&output), stderr(&output));
        assert!(text.contains("pcp: Prompt Composition Processor"));
        assert!(text.contains("Usage:"));
        assert!(text.contains("Prompt File Format:"));
    }
}

#[test]
fn test_missing_prompt_flag() {
    let dir = tempfile::tempdir().unwrap();
    let output = pcp(&[], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: -f flag is required"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_delimiter_style() {
    let dir = tempfile::tempdir().unwrap();
    let root = write(dir.path(), "p.yml", "prompt:\n  - text: \"x\"\n");
    let output = pcp(
        &["-f", root.to_str().unwrap(), "--delimiter-style", "fancy"],
        dir.path(),
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid delimiter style 'fancy'"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_stdout_output() {
    let dir = tempfile::tempdir().unwrap();
    let root = write(dir.path(), "prompt.yml", "prompt:\n  - text: \"Test output\"\n");
    let output = pcp(&["-f", root.to_str().unwrap()], dir.path());

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "<!-- pcp-source: text -->\nTest output\n");
}

#[test]
fn test_relative_prompt_path() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "docs/intro.txt", "intro");
    write(dir.path(), "docs/main.yml", "prompt:\n  - file: \"intro.txt\"\n");
    let output = pcp(&["-f", "docs/main.yml", "--delimiter-style", "none"], dir.path());

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(stdout(&output), "intro\n");
}

#[test]
fn test_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let root = write(dir.path(), "prompt.yml", "prompt:\n  - text: \"to file\"\n");
    let out_path = dir.path().join("context.txt");
    let output = pcp(
        &[
            "-f",
            root.to_str().unwrap(),
            "-o",
            out_path.to_str().unwrap(),
            "--delimiter-style",
            "minimal",
        ],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(out_path).unwrap(),
        "=== PCP SOURCE: text ===\nto file\n"
    );
}

#[test]
fn test_failure_writes_only_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let root = write(dir.path(), "prompt.yml", "prompt:\n  - file: \"nonexistent.txt\"\n");
    let out_path = dir.path().join("context.txt");
    let output = pcp(
        &["-f", root.to_str().unwrap(), "-o", out_path.to_str().unwrap()],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("Error:"));
    assert!(stderr(&output).contains("file not found"));
    assert!(!out_path.exists());
}

#[test]
fn test_max_words_flag() {
    let dir = tempfile::tempdir().unwrap();
    let root = write(dir.path(), "prompt.yml", "prompt:\n  - text: \"a b c\"\n");

    let ok = pcp(&["-f", root.to_str().unwrap(), "--max-words", "3"], dir.path());
    assert_eq!(ok.status.code(), Some(0));

    let too_small = pcp(&["-f", root.to_str().unwrap(), "--max-words", "2"], dir.path());
    assert_eq!(too_small.status.code(), Some(1));
    assert!(stderr(&too_small)
        .contains("compiled output (3 words) exceeds maximum word limit (2 words)"));
    assert!(too_small.stdout.is_empty());
}

#[test]
fn test_single_dash_long_flags() {
    let dir = tempfile::tempdir().unwrap();
    let root = write(dir.path(), "prompt.yml", "prompt:\n  - text: \"a b c\"\n");

    let ok = pcp(
        &["-f", root.to_str().unwrap(), "-delimiter-style=minimal"],
        dir.path(),
    );
    assert_eq!(ok.status.code(), Some(0), "{}", stderr(&ok));
    assert_eq!(stdout(&ok), "=== PCP SOURCE: text ===\na b c\n");

    let too_small = pcp(&["-f", root.to_str().unwrap(), "-max-words", "2"], dir.path());
    assert_eq!(too_small.status.code(), Some(1));
    assert!(stderr(&too_small).contains("exceeds maximum word limit"));
}

#[test]
fn test_max_words_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let root = write(dir.path(), "prompt.yml", "prompt:\n  - text: \"a b c\"\n");
    let output = Command::new(env!("CARGO_BIN_EXE_pcp"))
        .args(["-f", root.to_str().unwrap()])
        .env("PCP_MAX_WORDS", "2")
        .env_remove("PCP_DELIMITER_STYLE")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[cfg(unix)]
#[test]
fn test_command_exit_one_warns_and_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let root = write(
        dir.path(),
        "prompt.yml",
        "prompt:\n  - command: \"sh -c 'echo output; exit 1'\"\n",
    );
    let output = pcp(&["-f", root.to_str().unwrap()], dir.path());

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("output"));
    assert!(stderr(&output).contains("exited with status 1"));
    assert!(!stdout(&output).contains("exited with status 1"));
}

#[cfg(unix)]
#[test]
fn test_command_exit_two_fails() {
    let dir = tempfile::tempdir().unwrap();
    let root = write(dir.path(), "prompt.yml", "prompt:\n  - command: \"exit 2\"\n");
    let output = pcp(&["-f", root.to_str().unwrap()], dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("command execution failed"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_circular_reference_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "b.yml", "prompt:\n  - prompt: \"a.yml\"\n");
    let root = write(dir.path(), "a.yml", "prompt:\n  - prompt: \"b.yml\"\n");
    let output = pcp(&["-f", root.to_str().unwrap()], dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("circular reference detected"));
    assert!(output.stdout.is_empty());
}

#[cfg(unix)]
#[test]
fn test_demo() {
    let dir = tempfile::tempdir().unwrap();
    let output = pcp(&["demo"], dir.path());

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Created demo/intro.md\n"));
    assert!(out.contains("Created demo/main.yml\n"));
    assert!(!out.contains("Created ./"));
    assert!(out.contains("<!-- pcp-source: intro.md -->"));
    assert!(out.contains("<!-- pcp-source: nested.yml->sample.txt -->"));
    assert!(stderr(&output).contains("Demo completed successfully."));
    assert!(dir.path().join("demo/main.yml").exists());
}
