use metadata_update::cli::orchestration::{run_update, UpdateArgs, UpdateOutcome};
use metadata_update::domain::{ReleaseSeries, ReleaseTag};
use metadata_update::metadata::{load_metadata, metadata_path};
use metadata_update::MetadataUpdateError;
use std::fs;
use tempfile::TempDir;

const STARTING_FILE: &str = "apiVersion: clusterctl.cluster.x-k8s.io/v1alpha3
releaseSeries:
  - major: 1
    minor: 7
    contract: v1beta1
";

fn repo_with(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(metadata_path(dir.path()), content).unwrap();
    dir
}

fn args_for(tag: &str, dir: &TempDir) -> UpdateArgs {
    let mut args = UpdateArgs::new(tag);
    args.repo_dir = dir.path().to_path_buf();
    args
}

#[test]
fn test_minor_release_appends_new_series() {
    let dir = repo_with(STARTING_FILE);

    let outcome = run_update(&args_for("v0.8.0", &dir)).unwrap();
    assert_eq!(
        outcome,
        UpdateOutcome::Added {
            entry: ReleaseSeries::new(0, 9, "v1beta1"),
            path: metadata_path(dir.path()),
        }
    );

    let metadata = load_metadata(metadata_path(dir.path())).unwrap();
    assert_eq!(metadata.api_version, "clusterctl.cluster.x-k8s.io/v1alpha3");
    assert_eq!(
        metadata.release_series,
        vec![
            ReleaseSeries::new(1, 7, "v1beta1"),
            ReleaseSeries::new(0, 9, "v1beta1"),
        ]
    );
}

#[test]
fn test_written_file_layout() {
    let dir = repo_with(STARTING_FILE);
    run_update(&args_for("v0.8.0", &dir)).unwrap();

    let expected = format!(
        "{}  - major: 0\n    minor: 9\n    contract: v1beta1\n",
        STARTING_FILE
    );
    assert_eq!(
        fs::read_to_string(metadata_path(dir.path())).unwrap(),
        expected
    );
}

#[test]
fn test_custom_contract_is_used() {
    let dir = repo_with(STARTING_FILE);
    let mut args = args_for("v1.7.0", &dir);
    args.contract = "v1beta2".to_string();

    let outcome = run_update(&args).unwrap();
    assert!(outcome.wrote_file());

    let metadata = load_metadata(metadata_path(dir.path())).unwrap();
    assert_eq!(
        metadata.release_series.last(),
        Some(&ReleaseSeries::new(1, 8, "v1beta2"))
    );
}

#[test]
fn test_patch_release_leaves_file_untouched() {
    let dir = repo_with(STARTING_FILE);

    let outcome = run_update(&args_for("v0.8.1", &dir)).unwrap();
    assert_eq!(
        outcome,
        UpdateOutcome::SkippedPatch {
            tag: ReleaseTag::new(0, 8, 1)
        }
    );
    assert_eq!(
        fs::read_to_string(metadata_path(dir.path())).unwrap(),
        STARTING_FILE
    );
}

#[test]
fn test_existing_series_is_not_duplicated() {
    let content = "apiVersion: v1
releaseSeries:
  - major: 2
    minor: 4
    contract: v1alpha1
";
    let dir = repo_with(content);

    let outcome = run_update(&args_for("v2.3.0", &dir)).unwrap();
    assert_eq!(
        outcome,
        UpdateOutcome::AlreadyPresent {
            entry: ReleaseSeries::new(2, 4, "v1beta1")
        }
    );
    assert!(!outcome.wrote_file());
    assert_eq!(fs::read_to_string(metadata_path(dir.path())).unwrap(), content);
}

#[test]
fn test_second_run_is_idempotent() {
    let once = repo_with(STARTING_FILE);
    let twice = repo_with(STARTING_FILE);

    run_update(&args_for("v0.8.0", &once)).unwrap();
    run_update(&args_for("v0.8.0", &twice)).unwrap();
    let second = run_update(&args_for("v0.8.0", &twice)).unwrap();

    assert!(matches!(second, UpdateOutcome::AlreadyPresent { .. }));
    assert_eq!(
        fs::read_to_string(metadata_path(once.path())).unwrap(),
        fs::read_to_string(metadata_path(twice.path())).unwrap()
    );
}

#[test]
fn test_dry_run_does_not_write() {
    let dir = repo_with(STARTING_FILE);
    let mut args = args_for("v0.8.0", &dir);
    args.dry_run = true;

    let outcome = run_update(&args).unwrap();
    assert_eq!(
        outcome,
        UpdateOutcome::WouldAdd {
            entry: ReleaseSeries::new(0, 9, "v1beta1"),
            path: metadata_path(dir.path()),
        }
    );
    assert!(!outcome.wrote_file());
    assert_eq!(
        fs::read_to_string(metadata_path(dir.path())).unwrap(),
        STARTING_FILE
    );
}

#[test]
fn test_missing_metadata_file_is_io_error() {
    let dir = TempDir::new().unwrap();

    let err = run_update(&args_for("v0.8.0", &dir)).unwrap_err();
    assert!(matches!(err, MetadataUpdateError::Io { .. }));
}

#[test]
fn test_malformed_metadata_is_format_error() {
    let dir = repo_with("releaseSeries: {major: [\n");

    let err = run_update(&args_for("v0.8.0", &dir)).unwrap_err();
    assert!(matches!(err, MetadataUpdateError::Format { .. }));
}

#[test]
fn test_malformed_tag_is_parse_error() {
    let dir = repo_with(STARTING_FILE);

    for bad in ["1.2.3", "v1.2", "vX.Y.Z"] {
        let err = run_update(&args_for(bad, &dir)).unwrap_err();
        assert!(matches!(err, MetadataUpdateError::Parse(_)), "tag {}", bad);
    }
    assert_eq!(
        fs::read_to_string(metadata_path(dir.path())).unwrap(),
        STARTING_FILE
    );
}
