//! Integration tests for the import workflow
//!
//! Builds a fake LPJ-GUESS run directory, runs the import command and
//! checks the exported JSON series.

use guess_importer::cli::args::ImportArgs;
use guess_importer::cli::commands::import::run_import;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_tsv(path: &Path, rows: &[&str]) {
    let content: String = rows.iter().map(|r| r.replace(' ', "\t") + "\n").collect();
    std::fs::write(path, content).unwrap();
}

/// Run directory with two valid files, one broken file and one unknown file
fn create_run_directory(root: &Path) -> PathBuf {
    let run = root.join("run1");
    std::fs::create_dir_all(run.join("monthly")).unwrap();

    write_tsv(
        &run.join("cmass.out"),
        &[
            "Longitude Latitude Year TeBS C3G Total",
            "-0.25 51.25 1901 5.1 0.2 5.3",
            "-0.25 51.25 1902 5.2 0.2 5.4",
        ],
    );
    write_tsv(
        &run.join("monthly").join("mnpp.out"),
        &[
            "Longitude Latitude Year Jan Feb Mar Apr May Jun Jul Aug Sep Oct Nov Dec",
            "-0.25 51.25 1901 0 0 1 2 3 4 4 3 2 1 0 0",
        ],
    );
    write_tsv(
        &run.join("anpp.out"),
        &["Longitude Latitude Year TeBS", "-0.25 51.25 1901"],
    );
    write_tsv(&run.join("mystery.out"), &["Longitude Latitude Year X", "0 0 1901 1"]);

    run
}

fn import_args(input: PathBuf, output: PathBuf) -> ImportArgs {
    ImportArgs {
        input_path: input,
        instructions: None,
        output_path: Some(output),
        batch_size: Some(2),
        max_concurrent_files: Some(2),
        fail_fast: false,
        whitespace: false,
        config_file: None,
    }
}

#[tokio::test]
async fn test_import_skips_failed_files() {
    let temp_dir = TempDir::new().unwrap();
    let run = create_run_directory(temp_dir.path());
    let output = temp_dir.path().join("series");

    let summary = run_import(&import_args(run, output.clone()), false)
        .await
        .unwrap();

    assert_eq!(summary.files_found, 4);
    assert_eq!(summary.files_unresolved, 1);
    assert_eq!(summary.files_imported, 2);
    assert_eq!(summary.files_failed, 1);
    assert!(summary.failures[0].0.ends_with("anpp.out"));
    assert_eq!(summary.layers, 3 + 12);
    assert_eq!(summary.points, 6 + 12);
    // cmass: three layers of two points; mnpp: twelve layers of one point
    assert_eq!(summary.batches, 3 + 12);

    let cmass = output.join("cmass");
    assert!(cmass.join("quantity.json").is_file());
    let total = std::fs::read_to_string(cmass.join("total.jsonl")).unwrap();
    assert_eq!(total.lines().count(), 2);
    assert!(output.join("monthly_mnpp").join("dec.jsonl").is_file());
}

#[tokio::test]
async fn test_import_keeps_same_named_files_of_two_runs() {
    let temp_dir = TempDir::new().unwrap();
    let runs = temp_dir.path().join("runs");
    for (run, value) in [("run1", "1.5"), ("run2", "2.5")] {
        std::fs::create_dir_all(runs.join(run)).unwrap();
        let row = format!("-0.25 51.25 1901 {}", value);
        write_tsv(
            &runs.join(run).join("lai.out"),
            &["Longitude Latitude Year C3G", row.as_str()],
        );
    }
    let output = temp_dir.path().join("series");

    let summary = run_import(&import_args(runs, output.clone()), false)
        .await
        .unwrap();

    assert_eq!(summary.files_imported, 2);
    assert_eq!(summary.files_failed, 0);
    for (dir, value) in [("run1_lai", 1.5), ("run2_lai", 2.5)] {
        let content = std::fs::read_to_string(output.join(dir).join("c3g.jsonl")).unwrap();
        let points: Vec<serde_json::Value> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(points.len(), 1, "{}", dir);
        assert_eq!(points[0]["value"], value);
    }
}

#[tokio::test]
async fn test_import_fail_fast() {
    let temp_dir = TempDir::new().unwrap();
    let run = create_run_directory(temp_dir.path());
    let mut args = import_args(run, temp_dir.path().join("series"));
    args.fail_fast = true;

    let err = run_import(&args, false).await.unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("anpp.out"), "unexpected error: {}", message);
    assert!(message.contains("has 3 columns but header has 4"));
}

#[tokio::test]
async fn test_import_with_instruction_file() {
    let temp_dir = TempDir::new().unwrap();
    let run = create_run_directory(temp_dir.path());
    let instructions = temp_dir.path().join("guess.ins");
    std::fs::write(
        &instructions,
        "outputdirectory \"./run1/\"\nfile_cflux \"mystery.out\"\nfile_anpp \"ignored.out\"\n",
    )
    .unwrap();

    let mut args = import_args(run, temp_dir.path().join("series"));
    args.instructions = Some(instructions);

    let summary = run_import(&args, false).await.unwrap();

    // mystery.out now resolves to file_cflux but its X column is not a
    // declared carbon flux, so it fails instead of being unresolved
    assert_eq!(summary.files_unresolved, 0);
    assert_eq!(summary.files_failed, 2);
    assert_eq!(summary.files_imported, 2);
}
