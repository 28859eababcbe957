//! In-process determinism: N=10 runs of every built-in level produce
//! identical reports, artifacts and action logs.

use tilebot_harness::levels;
use tilebot_harness::runner::{run_level, RunConfig};

const RUNS: usize = 10;

#[test]
fn report_digest_deterministic_n10() {
    let config = RunConfig::default();
    for (name, level) in levels::all().unwrap() {
        let first = run_level(&level, &config).unwrap();
        for i in 1..RUNS {
            let again = run_level(&level, &config).unwrap();
            assert_eq!(
                first.report.digest, again.report.digest,
                "{name}: report digest differed on run {i}"
            );
        }
    }
}

#[test]
fn all_artifact_bytes_deterministic_n10() {
    let config = RunConfig::default();
    for (name, level) in levels::all().unwrap() {
        let first = run_level(&level, &config).unwrap();
        for i in 1..RUNS {
            let again = run_level(&level, &config).unwrap();
            for (artifact, content) in &first.report.artifacts {
                let other = again
                    .report
                    .artifact(artifact)
                    .unwrap_or_else(|| panic!("{name}: missing {artifact} on run {i}"));
                assert_eq!(
                    content.content, other.content,
                    "{name}: {artifact} bytes differed on run {i}"
                );
            }
            assert_eq!(first.report.manifest, again.report.manifest, "{name}");
        }
    }
}

#[test]
fn action_log_digest_deterministic_n10() {
    let config = RunConfig::default();
    for (name, level) in levels::all().unwrap() {
        let first = run_level(&level, &config).unwrap().actions.digest().unwrap();
        for i in 1..RUNS {
            let again = run_level(&level, &config).unwrap().actions.digest().unwrap();
            assert_eq!(first, again, "{name}: action log digest differed on run {i}");
        }
    }
}

#[test]
fn reports_verify() {
    for (name, level) in levels::all().unwrap() {
        let outcome = run_level(&level, &RunConfig::default()).unwrap();
        assert_eq!(outcome.report.verify(), Ok(()), "{name}");
    }
}

#[test]
fn distinct_levels_have_distinct_digests() {
    let mut seen = std::collections::BTreeSet::new();
    for (name, level) in levels::all().unwrap() {
        let outcome = run_level(&level, &RunConfig::default()).unwrap();
        assert!(
            seen.insert(outcome.report.digest.as_str().to_string()),
            "{name}: digest collides with another level"
        );
    }
}
