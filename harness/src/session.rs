//! Game session: one level, one observer, any number of executions.
//!
//! Every execution starts from a fresh copy of the level board, so runs
//! never affect each other. The log handed to the observer always begins
//! with a `Start` action carrying the bot's placement, also when the run
//! fails part-way.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use tilebot_kernel::board::Board;
use tilebot_kernel::exec::{execute, Action, ActionKind, ActionLog, ExecError};
use tilebot_kernel::level::{decode_level, Level};
use tilebot_kernel::program::Procedure;
use tilebot_search::{solve_with_policy, Solution, SolverPolicyV1};

use crate::contract::{SessionFault, SessionObserver};

pub struct GameSession<O: SessionObserver> {
    level: Level,
    observer: O,
}

impl<O: SessionObserver> GameSession<O> {
    /// Create a session and announce the level to `observer`.
    pub fn new(level: Level, mut observer: O) -> Self {
        observer.on_initialized(&level);
        Self { level, observer }
    }

    /// Decode level JSON and create a session for it.
    ///
    /// # Errors
    ///
    /// [`SessionFault::Level`] if the bytes are not a valid level. The fault
    /// is also reported to `observer` before it is dropped.
    pub fn load(bytes: &[u8], mut observer: O) -> Result<Self, SessionFault> {
        match decode_level(bytes) {
            Ok(level) => Ok(Self::new(level, observer)),
            Err(e) => {
                let fault = SessionFault::Level(e);
                observer.panic(&fault);
                Err(fault)
            }
        }
    }

    /// A copy of the level's starting board.
    #[must_use]
    pub fn board(&self) -> Board {
        self.level.board()
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level.clone()
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Run the three procedures and hand the log to the observer.
    ///
    /// Returns the log that was played, or `None` after a fault was reported.
    pub fn execute(
        &mut self,
        root: &Procedure,
        p1: &Procedure,
        p2: &Procedure,
    ) -> Option<ActionLog> {
        let mut board = self.level.board();
        debug!(
            root = root.len(),
            p1 = p1.len(),
            p2 = p2.len(),
            "executing procedures"
        );
        let start = Action::at(
            ActionKind::Start,
            board.bot_position(),
            board.bot_facing(),
            None,
        );
        self.run_guarded(start, move || execute(&mut board, root, p1, p2))
    }

    /// Solve the level with `policy`. Failures are reported as faults.
    pub fn solve(&mut self, policy: &SolverPolicyV1) -> Option<Solution> {
        let board = self.level.board();
        match panic::catch_unwind(AssertUnwindSafe(|| solve_with_policy(&board, policy))) {
            Ok(Ok(solution)) => Some(solution),
            Ok(Err(e)) => {
                self.fault(SessionFault::Solve(e));
                None
            }
            Err(payload) => {
                self.fault(SessionFault::Panicked {
                    detail: panic_detail(payload.as_ref()),
                });
                None
            }
        }
    }

    /// Solve with `policy`, then execute the solution.
    pub fn play_solution(&mut self, policy: &SolverPolicyV1) -> Option<ActionLog> {
        let solution = self.solve(policy)?;
        self.execute(&solution.root, &solution.p1, &solution.p2)
    }

    fn run_guarded<F>(&mut self, start: Action, run: F) -> Option<ActionLog>
    where
        F: FnOnce() -> Result<ActionLog, ExecError>,
    {
        match panic::catch_unwind(AssertUnwindSafe(run)) {
            Ok(Ok(log)) => {
                let mut actions = ActionLog::new();
                actions.push(start);
                actions.extend(log);
                if actions.successful() {
                    debug!(actions = actions.len(), "level complete");
                } else {
                    warn!(
                        level = self.level.name_or("unnamed"),
                        failure = ?actions.first_failure().map(Action::kind),
                        "level incomplete"
                    );
                }
                self.observer.play(&actions);
                Some(actions)
            }
            Ok(Err(e)) => {
                self.fault(SessionFault::Exec(e));
                None
            }
            Err(payload) => {
                self.fault(SessionFault::Panicked {
                    detail: panic_detail(payload.as_ref()),
                });
                None
            }
        }
    }

    fn fault(&mut self, fault: SessionFault) {
        warn!(%fault, "session fault");
        self.observer.panic(&fault);
    }
}

fn panic_detail(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
