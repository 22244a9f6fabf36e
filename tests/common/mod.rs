//! Shared helpers for driving the real binary.

use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::{Child, ChildStderr, ChildStdout, Command};

/// A running `waitgate` process with stdout and stderr captured.
pub struct Spawned {
    pub child: Child,
    pub stdout: BufReader<ChildStdout>,
    stderr: ChildStderr,
}

/// Spawn the binary with no arguments.
pub fn spawn_waitgate() -> Spawned {
    spawn_waitgate_with(&[])
}

/// Spawn the binary with `args`, stdout and stderr piped.
pub fn spawn_waitgate_with(args: &[&str]) -> Spawned {
    let mut child = Command::new(env!("CARGO_BIN_EXE_waitgate"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .expect("spawn waitgate");

    let stdout = BufReader::new(child.stdout.take().expect("piped stdout"));
    let stderr = child.stderr.take().expect("piped stderr");
    Spawned {
        child,
        stdout,
        stderr,
    }
}

impl Spawned {
    /// Read one line, including its newline.
    pub async fn read_line(&mut self) -> String {
        let mut line = String::new();
        tokio::time::timeout(Duration::from_secs(10), self.stdout.read_line(&mut line))
            .await
            .expect("line within timeout")
            .expect("read stdout");
        line
    }

    /// Read everything until the process closes stdout.
    pub async fn read_rest(&mut self) -> String {
        let mut rest = String::new();
        tokio::time::timeout(Duration::from_secs(10), self.stdout.read_to_string(&mut rest))
            .await
            .expect("EOF within timeout")
            .expect("read stdout");
        rest
    }

    /// Read stderr to EOF. Only returns once the process has exited.
    pub async fn read_stderr(&mut self) -> String {
        let mut err = String::new();
        tokio::time::timeout(Duration::from_secs(10), self.stderr.read_to_string(&mut err))
            .await
            .expect("stderr EOF within timeout")
            .expect("read stderr");
        err
    }

    /// Fail if the process has exited.
    pub fn assert_running(&mut self) {
        let status = self.child.try_wait().expect("poll child");
        assert!(status.is_none(), "process exited early: {:?}", status);
    }

    /// Send SIGINT, as the terminal does on Ctrl+C.
    pub async fn interrupt(&self) {
        let pid = self.child.id().expect("process still running");
        let status = Command::new("kill")
            .arg("-INT")
            .arg(pid.to_string())
            .status()
            .await
            .expect("run kill");
        assert!(status.success(), "kill -INT {} failed", pid);
    }
}
