use std::collections::HashMap;
use std::env as stdenv;
use std::ffi::{OsStr, OsString};

/// Environment variable naming the program to run instead of `ssh`.
pub const SSH_COMMAND_VAR: &str = "SSH_ADVERB_CMD";

/// Environment variable holding the log filter directive.
pub const LOG_VAR: &str = "SSH_ADVERB_LOG";

/// Program run when [`SSH_COMMAND_VAR`] is unset.
pub const DEFAULT_SSH_COMMAND: &str = "ssh";

/// Snapshot of the process environment used to configure a run.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// Key-value store of environment variables, kept as the OS gave them.
    pub vars: HashMap<OsString, OsString>,
}

impl Environment {
    /// Capture the current process environment.
    pub fn new() -> Self {
        Self {
            vars: stdenv::vars_os().collect(),
        }
    }

    /// Build an environment from explicit pairs.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get_var(&self, key: &str) -> Option<OsString> {
        self.vars.get(OsStr::new(key)).cloned()
    }

    pub fn set_var(&mut self, key: impl Into<OsString>, val: impl Into<OsString>) {
        self.vars.insert(key.into(), val.into());
    }

    /// The ssh client to invoke: `$SSH_ADVERB_CMD` if set and non-empty, else `ssh`.
    ///
    /// The value is used as given, even when it is not valid Unicode.
    pub fn ssh_command(&self) -> OsString {
        self.get_var(SSH_COMMAND_VAR)
            .filter(|cmd| !cmd.is_empty())
            .unwrap_or_else(|| DEFAULT_SSH_COMMAND.into())
    }
}
