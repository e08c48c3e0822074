// Standard paths
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command; // Run programs

// External paths
use anyhow::Result;
use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions

fn prepare_dir(testname: &str) -> Result<PathBuf> {
    let dir = Path::new("tmp").join(testname);
    fs::create_dir_all(&dir)?;
    let _ = fs::remove_file(dir.join("SalesResults.txt"));
    fs::write(dir.join("priceCatalogue.json"), "[]")?;
    fs::write(dir.join("salesRecord.json"), "[]")?;

    Ok(dir)
}

fn run_with_args(dir: &Path, args: &[&str]) -> Result<Command> {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME"))?;
    cmd.current_dir(dir);
    cmd.args(args);

    Ok(cmd)
}

#[test]
fn no_arguments() -> Result<()> {
    let dir = prepare_dir("usage_no_arguments")?;

    run_with_args(&dir, &[])?
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));

    assert!(!dir.join("SalesResults.txt").exists());

    Ok(())
}

#[test]
fn one_argument() -> Result<()> {
    let dir = prepare_dir("usage_one_argument")?;

    run_with_args(&dir, &["priceCatalogue.json"])?
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));

    assert!(!dir.join("SalesResults.txt").exists());

    Ok(())
}

#[test]
fn three_arguments() -> Result<()> {
    let dir = prepare_dir("usage_three_arguments")?;

    run_with_args(
        &dir,
        &["priceCatalogue.json", "salesRecord.json", "extra"],
    )?
    .assert()
    .failure()
    .stderr(predicate::str::contains("Usage:"));

    assert!(!dir.join("SalesResults.txt").exists());

    Ok(())
}
