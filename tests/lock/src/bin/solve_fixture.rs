//! Binary that runs every built-in level through the harness runner and
//! prints deterministic output lines for cross-process verification.
//!
//! Usage: `solve_fixture`
//!
//! Output: `<level>.<key>=<value>` lines, levels in play order.

use tilebot_harness::levels;
use tilebot_harness::runner::{run_level, RunConfig, ACTIONS_ARTIFACT};

fn main() {
    let config = RunConfig::default();
    let all = levels::all().expect("built-in levels decode");

    for (name, level) in &all {
        let outcome = run_level(level, &config).expect("built-in level runs");
        let actions = outcome
            .report
            .artifact(ACTIONS_ARTIFACT)
            .expect("missing actions.json");

        println!("{name}.report_digest={}", outcome.report.digest);
        println!("{name}.actions_hash={}", actions.content_hash);
        println!(
            "{name}.solution_digest={}",
            outcome.solution.digest().expect("solution digest")
        );
        println!("{name}.level_digest={}", level.digest().expect("level digest"));
        println!("{name}.action_count={}", outcome.actions.len());
        println!("{name}.solution_len={}", outcome.solution.total_len());
        println!("{name}.successful={}", outcome.successful());
    }
    println!("level_count={}", all.len());
}
