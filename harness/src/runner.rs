//! Harness runner: solve a level, execute the solution, package a report.
//!
//! # Pipeline
//!
//! ```text
//! RunConfig.policy.validate()
//!   → GameSession::solve() → GameSession::execute()
//!   → encode artifacts (canonical JSON) → build_report()
//! ```
//!
//! The runner owns no game rules; the session routes every failure to its
//! observer, and the runner turns the recorded fault into a [`RunError`].

use tracing::{info, instrument};

use tilebot_kernel::exec::ActionLog;
use tilebot_kernel::level::{encode_level, Level};
use tilebot_kernel::proof::canon::canonical_json_bytes;
use tilebot_search::{PolicyError, Solution, SolverPolicyV1};

use crate::contract::{RecordingObserver, SessionFault};
use crate::report::{build_report, ArtifactInput, ReportBuildError, RunReportV1};
use crate::session::GameSession;

/// Artifact names in a run report.
pub const LEVEL_ARTIFACT: &str = "level.json";
pub const SOLUTION_ARTIFACT: &str = "solution.json";
pub const ACTIONS_ARTIFACT: &str = "actions.json";
pub const POLICY_ARTIFACT: &str = "policy.json";
pub const SUMMARY_ARTIFACT: &str = "summary.json";

/// Settings for [`run_level`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunConfig {
    pub policy: SolverPolicyV1,
}

impl RunConfig {
    /// Root capacity plus two children of `child` each.
    #[must_use]
    pub fn with_capacities(root: usize, child: usize) -> Self {
        Self {
            policy: SolverPolicyV1 {
                capacities: vec![root, child, child],
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The configured policy is unusable.
    Policy(PolicyError),
    /// The session reported a fault.
    Session(SessionFault),
    /// The session returned nothing and reported nothing.
    MissingOutcome,
    /// Canonical JSON serialization failed.
    CanonFailed { detail: String },
    ReportFailed(ReportBuildError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Policy(e) => write!(f, "invalid policy: {e}"),
            Self::Session(e) => write!(f, "{e}"),
            Self::MissingOutcome => write!(f, "session produced no outcome"),
            Self::CanonFailed { detail } => write!(f, "canonical JSON error: {detail}"),
            Self::ReportFailed(e) => write!(f, "report: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Policy(e) => Some(e),
            Self::Session(e) => Some(e),
            Self::ReportFailed(e) => Some(e),
            Self::MissingOutcome | Self::CanonFailed { .. } => None,
        }
    }
}

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub solution: Solution,
    /// The played log, starting with the `Start` action.
    pub actions: ActionLog,
    pub report: RunReportV1,
}

impl RunOutcome {
    #[must_use]
    pub fn successful(&self) -> bool {
        self.actions.successful()
    }
}

/// Solve `level` under `config`, execute the solution, and build a report.
///
/// A solution that executes but does not win is still an `Ok` outcome;
/// check [`RunOutcome::successful`].
///
/// # Errors
///
/// Returns [`RunError`] for an invalid policy, a session fault, or an
/// artifact that cannot be serialized.
#[instrument(level = "debug", skip_all, fields(level = level.name_or("unnamed")))]
pub fn run_level(level: &Level, config: &RunConfig) -> Result<RunOutcome, RunError> {
    config.policy.validate().map_err(RunError::Policy)?;

    let mut session = GameSession::new(level.clone(), RecordingObserver::new());
    let Some(solution) = session.solve(&config.policy) else {
        return Err(fault_of(&session));
    };
    let Some(actions) = session.execute(&solution.root, &solution.p1, &solution.p2) else {
        return Err(fault_of(&session));
    };

    let report = build_run_report(level, &config.policy, &solution, &actions)?;
    info!(
        successful = actions.successful(),
        digest = %report.digest,
        "run complete"
    );

    Ok(RunOutcome {
        solution,
        actions,
        report,
    })
}

/// Package the artifacts of a run.
///
/// `level.json`, `solution.json`, `actions.json` and `policy.json` are
/// normative. `summary.json` is observational.
///
/// # Errors
///
/// [`RunError::CanonFailed`] or [`RunError::ReportFailed`].
pub fn build_run_report(
    level: &Level,
    policy: &SolverPolicyV1,
    solution: &Solution,
    actions: &ActionLog,
) -> Result<RunReportV1, RunError> {
    let canon = |value: &serde_json::Value| {
        canonical_json_bytes(value).map_err(|e| RunError::CanonFailed {
            detail: e.to_string(),
        })
    };

    let level_bytes = encode_level(level).map_err(|e| RunError::CanonFailed {
        detail: e.to_string(),
    })?;
    let actions_bytes = actions
        .to_canonical_json_bytes()
        .map_err(|e| RunError::CanonFailed {
            detail: e.to_string(),
        })?;

    let warnings: Vec<String> = solution.warnings.iter().map(ToString::to_string).collect();
    let summary = serde_json::json!({
        "action_count": actions.len(),
        "raw_len": solution.raw.len(),
        "solution_len": solution.total_len(),
        "successful": actions.successful(),
        "warnings": warnings,
    });

    let inputs: Vec<ArtifactInput> = vec![
        (LEVEL_ARTIFACT, level_bytes, true).into(),
        (SOLUTION_ARTIFACT, canon(&solution.to_json_value())?, true).into(),
        (ACTIONS_ARTIFACT, actions_bytes, true).into(),
        (POLICY_ARTIFACT, canon(&policy.to_json_value())?, true).into(),
        (SUMMARY_ARTIFACT, canon(&summary)?, false).into(),
    ];
    build_report(inputs).map_err(RunError::ReportFailed)
}

fn fault_of(session: &GameSession<RecordingObserver>) -> RunError {
    session
        .observer()
        .last_fault()
        .cloned()
        .map_or(RunError::MissingOutcome, RunError::Session)
}
