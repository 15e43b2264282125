use anyhow::Result;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run_registry(dir: &TempDir, script: &str) -> Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_train-registry"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(script.as_bytes())?;
    }

    Ok(child.wait_with_output()?)
}

/// A failed load produces one diagnostic line and nothing from the logger.
#[test]
fn test_failed_load_reported_once() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = run_registry(&temp_dir, "load missing.json\n\nexit\n")?;
    let stderr = String::from_utf8(output.stderr)?;

    assert!(output.status.success());
    assert_eq!(stderr.matches("missing.json").count(), 1);
    assert_eq!(stderr.lines().count(), 2);
    assert!(stderr.contains("Could not load missing.json: File not found"));
    assert!(stderr.contains("Unknown command"));
    assert!(!stderr.contains('\x1b'));
    Ok(())
}

/// Schema problems show up once, on stdout, and stderr stays empty.
#[test]
fn test_schema_violation_reported_once() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("partial.json"),
        r#"[{"departure_point": "Omsk", "time_departure": "07:00", "destination": "Tomsk"}]"#,
    )?;

    let output = run_registry(&temp_dir, "load partial.json\nexit\n")?;
    let stdout = String::from_utf8(output.stdout)?;
    let stderr = String::from_utf8(output.stderr)?;

    assert!(output.status.success());
    assert_eq!(stdout.matches("Validation error:").count(), 1);
    assert!(stderr.is_empty());
    Ok(())
}

#[test]
fn test_sentence_filter_writes_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = Command::new(env!("CARGO_BIN_EXE_sentence-filter"))
        .current_dir(temp_dir.path())
        .env_remove("RUST_LOG")
        .output()?;

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    let saved = std::fs::read_to_string(temp_dir.path().join("filtered_sentences.json"))?;
    assert!(saved.contains("This is the first sentence"));
    Ok(())
}
