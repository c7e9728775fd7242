//! Run a command on a remote host through ssh with its words quoted for the remote shell.
//!
//! ssh joins the words of a remote command with spaces and lets the remote
//! user's shell split them again, so `ssh host echo "a b"` runs `echo a b`.
//! This crate rewrites such an invocation so the remote shell sees the
//! original words, while the caller keeps using ssh's own single-letter
//! options unchanged.
//!
//! The work is split into the [`options`] table, the [`scanner`] that finds
//! options, host and command, the [`quoter`] that makes the command shell-safe,
//! and the [`assembler`] that builds the final [`CommandVector`]. [`Adverb`]
//! wires them together with the environment and an [`Invoker`].

mod adverb;
pub mod assembler;
pub mod command;
pub mod env;
pub mod error;
pub mod external;
pub mod logging;
pub mod options;
pub mod quoter;
pub mod scanner;
pub mod surface;

pub use adverb::{Adverb, prepare};
pub use assembler::CommandVector;
pub use command::{ExitCode, Invoker};
pub use env::Environment;
pub use error::AdverbError;
pub use external::ExecInvoker;
