//! End-to-end tests driving the real CLI binary over temp-dir fixtures

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::tempdir;

use emoji_search::catalog::{self, EMBEDDING_DIM};

fn shipped_metadata() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("emoji.csv")
}

fn write_query(dir: &Path, count: usize) -> anyhow::Result<PathBuf> {
    let path = dir.join("query.txt");
    let mut contents = String::new();
    for i in 0..count {
        contents.push_str(&format!("{:.6} ", ((i % 7) as f64 - 3.0) / 10.0));
        if i % 8 == 7 {
            contents.push('\n');
        }
    }
    std::fs::write(&path, contents)?;
    Ok(path)
}

fn run_search(metadata: &Path, query: &Path) -> std::io::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_emoji-search"))
        .arg("search")
        .arg("--metadata")
        .arg(metadata)
        .arg("--query")
        .arg(query)
        .output()
}

#[test]
fn search_prints_ranked_top_five() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let query = write_query(dir.path(), EMBEDDING_DIM)?;

    let output = run_search(&shipped_metadata(), &query)?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Best Matching Emojis"));

    let result_lines: Vec<&str> = stdout
        .lines()
        .filter(|line| line.contains("[Score: "))
        .collect();
    assert_eq!(result_lines.len(), 5);

    for (i, line) in result_lines.iter().enumerate() {
        assert!(line.starts_with(&format!("{}. ", i + 1)), "line: {line}");

        // Scores render with exactly 4 digits after the decimal point.
        let score = line
            .split("[Score: ")
            .nth(1)
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or_else(|| panic!("malformed line: {line}"));
        let digits = score
            .rsplit('.')
            .next()
            .unwrap_or_else(|| panic!("score has no decimal point: {score}"));
        assert_eq!(digits.len(), 4, "score: {score}");
        score.parse::<f64>()?;
    }

    Ok(())
}

#[test]
fn wrong_query_dimension_is_fatal() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let query = write_query(dir.path(), 10)?;

    let output = run_search(&shipped_metadata(), &query)?;
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("768"), "stderr: {stderr}");
    assert!(stderr.contains("10"), "stderr: {stderr}");

    Ok(())
}

#[test]
fn metadata_count_mismatch_is_fatal() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let query = write_query(dir.path(), EMBEDDING_DIM)?;

    let metadata = dir.path().join("emoji.csv");
    std::fs::write(&metadata, "😀, smile\n🤖, robot\n")?;

    let output = run_search(&metadata, &query)?;
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains('2'), "stderr: {stderr}");
    assert!(
        stderr.contains(&catalog::builtin().len().to_string()),
        "stderr: {stderr}"
    );

    Ok(())
}

#[test]
fn missing_query_file_is_fatal() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let missing = dir.path().join("does-not-exist.txt");

    let output = run_search(&shipped_metadata(), &missing)?;
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("does-not-exist.txt"), "stderr: {stderr}");

    Ok(())
}

#[test]
fn stats_reports_catalog_shape() -> anyhow::Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_emoji-search"))
        .arg("stats")
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Dimensions: 768"));
    assert!(stdout.contains(&format!("Entries: {}", catalog::builtin().len())));

    Ok(())
}
