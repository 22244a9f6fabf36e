//! The blocking entry point: announce, wait, and exit on interrupt.

use std::future::Future;
use std::io::Write;
use std::sync::Arc;

use crate::config::{validate_config, WaitConfig};
use crate::error::{WaitError, WaitResult};
use crate::lifecycle::gate::WaitGate;
use crate::lifecycle::signals::Interrupt;
use crate::lifecycle::state::RunState;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The interrupt arrived; the shutdown line was written.
    Interrupted,
    /// The gate was set by a library caller. The binary never does this.
    Released,
}

impl Outcome {
    /// Process exit code for this outcome. Both endings are clean.
    pub fn exit_code(&self) -> i32 {
        0
    }
}

/// Writes the status lines and owns the wait gate for a single run.
pub struct BlockingEntryPoint<W> {
    config: WaitConfig,
    out: W,
    gate: Arc<WaitGate>,
    state: RunState,
}

impl<W: Write> BlockingEntryPoint<W> {
    pub fn new(config: WaitConfig, out: W) -> Self {
        tracing::debug!("Wait gate created");
        Self {
            config,
            out,
            gate: Arc::new(WaitGate::new()),
            state: RunState::Running,
        }
    }

    /// Handle to the gate this entry point waits on.
    pub fn gate(&self) -> Arc<WaitGate> {
        Arc::clone(&self.gate)
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// The writer the status lines go to.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Print the startup line, then block until `interrupt` resolves or the
    /// gate is set. Only an interrupt prints the shutdown line.
    pub async fn run_until<F>(&mut self, interrupt: F) -> WaitResult<Outcome>
    where
        F: Future<Output = ()>,
    {
        if self.state.is_terminal() {
            return Err(WaitError::AlreadyTerminated);
        }

        write_line(&mut self.out, &self.config.messages.startup)?;
        tracing::debug!(state = %self.state, "Waiting on gate");

        let outcome = tokio::select! {
            _ = self.gate.wait() => Outcome::Released,
            _ = interrupt => Outcome::Interrupted,
        };

        if outcome == Outcome::Interrupted {
            write_line(&mut self.out, &self.config.messages.shutdown)?;
        }

        self.state = self.state.terminate();
        tracing::debug!(state = %self.state, outcome = ?outcome, "Wait ended");
        Ok(outcome)
    }
}

/// Validate `config`, install the OS interrupt hook and run until it fires.
/// An invalid config fails before anything is written.
pub async fn run<W: Write>(config: WaitConfig, out: W) -> WaitResult<Outcome> {
    validate_config(&config)?;

    let mut interrupt = Interrupt::install().map_err(WaitError::Signal)?;
    let mut entry = BlockingEntryPoint::new(config, out);
    entry.run_until(interrupt.recv()).await
}

fn write_line<W: Write>(out: &mut W, line: &str) -> std::io::Result<()> {
    writeln!(out, "{}", line)?;
    out.flush()
}
