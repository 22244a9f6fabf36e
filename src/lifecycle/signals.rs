//! OS interrupt handling.
//!
//! # Responsibilities
//! - Register the interrupt hook (SIGINT on unix, Ctrl+C on windows)
//! - Resolve a future when the interrupt arrives
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Registration is eager: `install` hooks the signal before returning,
//!   unlike `tokio::signal::ctrl_c` which hooks on first poll
//! - SIGTERM and friends are left alone

use std::io;

#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

#[cfg(windows)]
use tokio::signal::windows::{ctrl_c, CtrlC};

/// A registered interrupt listener.
pub struct Interrupt {
    #[cfg(unix)]
    inner: Signal,
    #[cfg(windows)]
    inner: CtrlC,
}

impl Interrupt {
    /// Hook the interrupt signal. Must be called within a Tokio runtime.
    pub fn install() -> io::Result<Self> {
        #[cfg(unix)]
        let inner = signal(SignalKind::interrupt())?;
        #[cfg(windows)]
        let inner = ctrl_c()?;

        tracing::debug!("Interrupt handler installed");
        Ok(Self { inner })
    }

    /// Wait for the next interrupt.
    pub async fn recv(&mut self) {
        if self.inner.recv().await.is_none() {
            // The signal driver went away; no interrupt can arrive any more.
            std::future::pending::<()>().await;
        }
        tracing::info!("Interrupt signal received");
    }
}
