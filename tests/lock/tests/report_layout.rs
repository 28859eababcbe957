//! On-disk report layout: what `write_to_dir` produces must read back to the
//! same level, solution and digest.

use lock_tests::boards::solvable_corpus;
use tilebot_harness::report::{DIGEST_FILENAME, MANIFEST_FILENAME};
use tilebot_harness::runner::{
    run_level, RunConfig, LEVEL_ARTIFACT, SOLUTION_ARTIFACT, SUMMARY_ARTIFACT,
};
use tilebot_kernel::level::{decode_level, Level};

fn read_json(dir: &std::path::Path, name: &str) -> serde_json::Value {
    let bytes = std::fs::read(dir.join(name)).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn written_report_reads_back() {
    for (name, board) in solvable_corpus() {
        let level = Level::new(Some(name.to_string()), board);
        let outcome = run_level(&level, &RunConfig::default()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        outcome.report.write_to_dir(dir.path()).unwrap();

        let level_bytes = std::fs::read(dir.path().join(LEVEL_ARTIFACT)).unwrap();
        assert_eq!(decode_level(&level_bytes).unwrap(), level, "{name}");

        let solution = read_json(dir.path(), SOLUTION_ARTIFACT);
        assert_eq!(solution, outcome.solution.to_json_value(), "{name}");

        let digest = std::fs::read_to_string(dir.path().join(DIGEST_FILENAME)).unwrap();
        assert_eq!(digest, outcome.report.digest.as_str(), "{name}");
    }
}

#[test]
fn manifest_lists_every_artifact_and_flags_the_summary() {
    let (name, board) = solvable_corpus().remove(0);
    let level = Level::new(Some(name.to_string()), board);
    let outcome = run_level(&level, &RunConfig::default()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    outcome.report.write_to_dir(dir.path()).unwrap();

    let manifest = read_json(dir.path(), MANIFEST_FILENAME);
    assert_eq!(manifest["schema_version"], "run_report.v1");
    let listed = manifest["artifacts"].as_array().unwrap();
    assert_eq!(listed.len(), outcome.report.artifacts.len());
    for entry in listed {
        let artifact_name = entry["name"].as_str().unwrap();
        assert!(dir.path().join(artifact_name).exists(), "{artifact_name}");
        let normative = entry["normative"].as_bool().unwrap();
        assert_eq!(normative, artifact_name != SUMMARY_ARTIFACT, "{artifact_name}");
        assert!(entry["content_hash"]
            .as_str()
            .unwrap()
            .starts_with("sha256:"));
    }
}
