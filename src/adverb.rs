use crate::assembler::{self, CommandVector};
use crate::command::{ExitCode, Invoker};
use crate::env::Environment;
use crate::error::AdverbError;
use crate::external::ExecInvoker;
use crate::quoter;
use crate::scanner;
use crate::surface;
use anyhow::Context;
use std::ffi::{OsStr, OsString};
use std::io::Write;
use tracing::debug;

/// Turn the caller's arguments into the vector that runs `program`.
///
/// `args` excludes ssh-adverb's own name and must not contain a `--help` or
/// `--version` request in its option zone.
pub fn prepare(program: &OsStr, args: &[OsString]) -> Result<CommandVector, AdverbError> {
    let scanned = scanner::scan(program, args)?;
    debug!(
        options = ?&scanned.passthrough[1..],
        host = ?scanned.host,
        words = scanned.command.len(),
        "scanned arguments"
    );
    let quoted = quoter::quote_words(&scanned.command);
    Ok(assembler::assemble(scanned, quoted))
}

/// Runs one ssh-adverb invocation: surface flags, rewriting, then hand-off.
///
/// Example
/// ```
/// use ssh_adverb::{Adverb, Environment, ExecInvoker};
/// use std::ffi::OsString;
/// let adverb = Adverb::new(Environment::default(), Box::new(ExecInvoker));
/// let mut out: Vec<u8> = Vec::new();
/// let code = adverb.run(&[OsString::from("--version")], &mut out).unwrap();
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().starts_with("ssh-adverb "));
/// ```
pub struct Adverb {
    env: Environment,
    invoker: Box<dyn Invoker>,
}

impl Adverb {
    pub fn new(env: Environment, invoker: Box<dyn Invoker>) -> Self {
        Self { env, invoker }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Handle `args` (without the program's own name).
    ///
    /// Help and version text goes to `stdout`. Otherwise the rewritten command
    /// is invoked and its exit code returned, if the invoker returns at all.
    pub fn run(&self, args: &[OsString], stdout: &mut dyn Write) -> anyhow::Result<ExitCode> {
        if let Some(request) = surface::intercept(args) {
            stdout
                .write_all(surface::respond(request).as_bytes())
                .context("writing to standard output")?;
            stdout.flush().context("writing to standard output")?;
            return Ok(0);
        }

        let argv = prepare(&self.env.ssh_command(), args)?;
        Ok(self.invoker.invoke(&argv)?)
    }
}

impl Default for Adverb {
    /// Uses the process environment and replaces the process with ssh.
    fn default() -> Self {
        Self::new(Environment::new(), Box::new(ExecInvoker))
    }
}
