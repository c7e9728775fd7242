use crate::assembler::CommandVector;
use crate::command::{ExitCode, Invoker};
use crate::error::AdverbError;
use std::process::Command;
use tracing::debug;

/// Runs the command vector as a real process, searching `PATH` for the program.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExecInvoker;

impl ExecInvoker {
    fn command(argv: &CommandVector) -> Command {
        let mut cmd = Command::new(argv.program());
        cmd.args(argv.args());
        cmd
    }

    fn failed(argv: &CommandVector, source: std::io::Error) -> AdverbError {
        AdverbError::Invoke {
            program: argv.program().to_string_lossy().into_owned(),
            source,
        }
    }
}

#[cfg(unix)]
impl Invoker for ExecInvoker {
    /// Replaces the current process image. Returns only if that fails.
    fn invoke(&self, argv: &CommandVector) -> Result<ExitCode, AdverbError> {
        use std::os::unix::process::CommandExt;
        debug!(program = ?argv.program(), "exec");
        let err = Self::command(argv).exec();
        Err(Self::failed(argv, err))
    }
}

#[cfg(not(unix))]
impl Invoker for ExecInvoker {
    /// No exec on this platform: run the child to completion and pass on its status.
    fn invoke(&self, argv: &CommandVector) -> Result<ExitCode, AdverbError> {
        debug!(program = ?argv.program(), "spawn");
        let status = Self::command(argv)
            .status()
            .map_err(|err| Self::failed(argv, err))?;
        Ok(exit_code(status))
    }
}

/// Exit code for a finished child, mapping signal deaths the way shells do.
///
/// Only the spawning invoker on non-Unix targets has a finished child to
/// report. On Unix the process image is replaced and this is never reached
/// from [`ExecInvoker`].
pub fn exit_code(status: std::process::ExitStatus) -> ExitCode {
    match status.code() {
        Some(x) => x,
        None => terminated_by_signal(status),
    }
}

/// `128 + signal` for a signal death, `255` for a core dump without a signal.
#[cfg(unix)]
fn terminated_by_signal(exit_status: std::process::ExitStatus) -> ExitCode {
    use std::os::unix::process::ExitStatusExt;
    if let Some(signal) = ExitStatusExt::signal(&exit_status) {
        128 + signal
    } else if ExitStatusExt::core_dumped(&exit_status) {
        255
    } else {
        -1
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_exit_status: std::process::ExitStatus) -> ExitCode {
    -1
}
