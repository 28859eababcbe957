//! `tilebot`: diagnose, solve and run tile-bot levels from the command line.
//!
//! A `<LEVEL>` argument is either a built-in name (`level0`..`level5`,
//! `empty`) or a path to a level JSON file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use tilebot_harness::levels;
use tilebot_harness::logging;
use tilebot_harness::runner::{run_level, RunConfig, RunError};
use tilebot_kernel::level::{decode_level, Level, LevelError};
use tilebot_kernel::program::{Instruction, Procedure};
use tilebot_search::diagnostics::analyze_with_policy;
use tilebot_search::{solve_with_policy, SolveError};

#[derive(Parser)]
#[command(name = "tilebot", version)]
#[command(about = "Solve and run tile-bot puzzle levels")]
struct Cli {
    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Capacities {
    /// Instructions allowed in the root procedure
    #[arg(long, default_value_t = 12)]
    root_capacity: usize,

    /// Instructions allowed in each child procedure
    #[arg(long, default_value_t = 8)]
    child_capacity: usize,
}

impl Capacities {
    fn config(&self) -> RunConfig {
        RunConfig::with_capacities(self.root_capacity, self.child_capacity)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List board problems (missing door, unreachable coins, ...)
    Analyze {
        level: String,
        #[command(flatten)]
        capacities: Capacities,
    },

    /// Print a reference solution as three procedures
    Solve {
        level: String,
        #[command(flatten)]
        capacities: Capacities,
    },

    /// Solve, execute, and print the run report digest
    Run {
        level: String,
        #[command(flatten)]
        capacities: Capacities,

        /// Write the report artifacts into this directory
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// List the built-in levels
    Levels,
}

#[derive(Debug)]
enum CliError {
    Read { path: String, detail: String },
    Level { source: String, error: LevelError },
    Solve(SolveError),
    Run(RunError),
    Write { path: PathBuf, detail: String },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, detail } => write!(f, "cannot read {path}: {detail}"),
            Self::Level { source, error } => write!(f, "{source}: {error}"),
            Self::Solve(e) => write!(f, "solve failed: {e}"),
            Self::Run(e) => write!(f, "run failed: {e}"),
            Self::Write { path, detail } => {
                write!(f, "cannot write {}: {detail}", path.display())
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_with_default(if cli.verbose { "debug" } else { "warn" });

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Analyze { level, capacities } => {
            let loaded = load_level(&level)?;
            let problems = analyze_with_policy(&loaded.board(), &capacities.config().policy);
            if problems.is_empty() {
                println!("no problems");
            }
            for problem in problems {
                println!("{problem}");
            }
        }
        Commands::Solve { level, capacities } => {
            let loaded = load_level(&level)?;
            let solution = solve_with_policy(&loaded.board(), &capacities.config().policy)
                .map_err(CliError::Solve)?;
            for procedure in solution.procedures() {
                println!("{}: {}", procedure.id(), render(procedure));
            }
            for warning in &solution.warnings {
                println!("warning: {warning}");
            }
        }
        Commands::Run {
            level,
            capacities,
            out,
        } => {
            let loaded = load_level(&level)?;
            let outcome = run_level(&loaded, &capacities.config()).map_err(CliError::Run)?;
            println!(
                "outcome={}",
                if outcome.successful() {
                    "win"
                } else {
                    "incomplete"
                }
            );
            println!("actions={}", outcome.actions.len());
            println!("digest={}", outcome.report.digest);
            if let Some(dir) = out {
                outcome
                    .report
                    .write_to_dir(&dir)
                    .map_err(|e| CliError::Write {
                        path: dir.clone(),
                        detail: e.to_string(),
                    })?;
                info!(dir = %dir.display(), "report written");
            }
        }
        Commands::Levels => {
            for (name, json) in levels::BUILTIN {
                let title = decode_level(json.as_bytes())
                    .ok()
                    .and_then(|l| l.name().map(str::to_string))
                    .unwrap_or_default();
                println!("{name}\t{title}");
            }
            println!("empty\t(editor template)");
        }
    }
    Ok(())
}

fn load_level(arg: &str) -> Result<Level, CliError> {
    if let Some(json) = levels::source(arg) {
        return decode_level(json.as_bytes()).map_err(|error| CliError::Level {
            source: arg.to_string(),
            error,
        });
    }
    let bytes = std::fs::read(arg).map_err(|e| CliError::Read {
        path: arg.to_string(),
        detail: e.to_string(),
    })?;
    decode_level(&bytes).map_err(|error| CliError::Level {
        source: arg.to_string(),
        error,
    })
}

fn render(procedure: &Procedure) -> String {
    let names: Vec<&str> = procedure.iter().map(Instruction::name).collect();
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(" ")
    }
}
