//! Run state machine: Running → Terminated.

/// Lifecycle state of the entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// Blocked on the gate.
    #[default]
    Running,
    /// The wait has ended. Final.
    Terminated,
}

impl RunState {
    /// The only transition. Terminated stays Terminated.
    pub fn terminate(self) -> Self {
        RunState::Terminated
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Terminated)
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunState::Running => write!(f, "running"),
            RunState::Terminated => write!(f, "terminated"),
        }
    }
}
