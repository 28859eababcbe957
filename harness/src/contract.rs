//! Session contract: what a presentation layer receives from a session.
//!
//! A session reports exactly three things: the level it was built for,
//! each finished action log, and each fault. Faults never escape as panics
//! or `Err` values from [`crate::session::GameSession::execute`]; they are
//! handed to [`SessionObserver::panic`].

use tilebot_kernel::exec::{ActionLog, ExecError};
use tilebot_kernel::level::{Level, LevelError};
use tilebot_search::SolveError;

/// Anything that stopped a session from producing an action log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionFault {
    /// The level file could not be decoded.
    Level(LevelError),
    /// The reference solver failed.
    Solve(SolveError),
    /// The procedures were rejected before execution.
    Exec(ExecError),
    /// A panic was caught while running the procedures.
    Panicked { detail: String },
}

impl std::fmt::Display for SessionFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Level(e) => write!(f, "level: {e}"),
            Self::Solve(e) => write!(f, "solve: {e}"),
            Self::Exec(e) => write!(f, "execute: {e}"),
            Self::Panicked { detail } => write!(f, "panicked: {detail}"),
        }
    }
}

impl std::error::Error for SessionFault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Level(e) => Some(e),
            Self::Solve(e) => Some(e),
            Self::Exec(e) => Some(e),
            Self::Panicked { .. } => None,
        }
    }
}

impl From<LevelError> for SessionFault {
    fn from(e: LevelError) -> Self {
        Self::Level(e)
    }
}

impl From<SolveError> for SessionFault {
    fn from(e: SolveError) -> Self {
        Self::Solve(e)
    }
}

impl From<ExecError> for SessionFault {
    fn from(e: ExecError) -> Self {
        Self::Exec(e)
    }
}

/// The presentation side of a session.
pub trait SessionObserver {
    /// Called once, when the session is created.
    fn on_initialized(&mut self, level: &Level);

    /// A complete action log, starting with the `Start` action.
    fn play(&mut self, actions: &ActionLog);

    /// A fault. The session stays usable afterwards.
    fn panic(&mut self, fault: &SessionFault);
}

impl<T: SessionObserver + ?Sized> SessionObserver for &mut T {
    fn on_initialized(&mut self, level: &Level) {
        (**self).on_initialized(level);
    }

    fn play(&mut self, actions: &ActionLog) {
        (**self).play(actions);
    }

    fn panic(&mut self, fault: &SessionFault) {
        (**self).panic(fault);
    }
}

/// Observer that keeps a copy of everything it receives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingObserver {
    pub initialized: Vec<Level>,
    pub played: Vec<ActionLog>,
    pub faults: Vec<SessionFault>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last_played(&self) -> Option<&ActionLog> {
        self.played.last()
    }

    #[must_use]
    pub fn last_fault(&self) -> Option<&SessionFault> {
        self.faults.last()
    }
}

impl SessionObserver for RecordingObserver {
    fn on_initialized(&mut self, level: &Level) {
        self.initialized.push(level.clone());
    }

    fn play(&mut self, actions: &ActionLog) {
        self.played.push(actions.clone());
    }

    fn panic(&mut self, fault: &SessionFault) {
        self.faults.push(fault.clone());
    }
}
