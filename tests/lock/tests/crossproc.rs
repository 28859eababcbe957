//! Cross-process determinism: the `solve_fixture` binary prints identical
//! output under different working directories and environments.

use std::path::Path;
use std::process::Command;

fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("solve_fixture");
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.current_dir(work_dir);
    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "solve_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    assert!(baseline.contains("level_count=6"), "baseline: {baseline}");
    assert!(baseline.contains("level0.report_digest=sha256:"));
    assert!(baseline.contains("level5.actions_hash=sha256:"));
    assert!(
        !baseline.contains("successful=false"),
        "a built-in level was not won: {baseline}"
    );

    let alt_cwd = if cfg!(target_os = "windows") {
        "C:\\"
    } else {
        "/tmp"
    };
    let variant_cwd = run_variant(alt_cwd, &[]);
    assert_eq!(
        baseline, variant_cwd,
        "output differs when cwd changes from {root} to {alt_cwd}"
    );

    let variant_locale = run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, variant_locale, "output differs when LC_ALL=C LANG=C");

    let variant_noise = run_variant(
        &root,
        &[
            ("TILEBOT_NOISE", "1"),
            ("RUST_LOG", "debug"),
            ("RUST_BACKTRACE", "1"),
        ],
    );
    assert_eq!(
        baseline, variant_noise,
        "output differs with unrelated environment variables"
    );
}

#[test]
fn crossproc_matches_in_process_digests() {
    use tilebot_harness::levels;
    use tilebot_harness::runner::{run_level, RunConfig};

    let output = run_variant(&workspace_root(), &[]);
    for (name, level) in levels::all().unwrap() {
        let outcome = run_level(&level, &RunConfig::default()).unwrap();
        let line = format!("{name}.report_digest={}", outcome.report.digest);
        assert!(
            output.lines().any(|l| l == line),
            "missing or different line {line}"
        );
    }
}
