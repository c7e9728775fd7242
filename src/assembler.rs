//! Builds the final argument vector for the ssh client from the scanned zones.

use crate::scanner::{SEPARATOR, ScannedArgs};
use std::ffi::{OsStr, OsString};
use tracing::debug;

/// The argument vector handed to the ssh client.
///
/// Element 0 is the program to run. The vector carries no terminator of its
/// own: its length marks the end, and the OS layer adds the null entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandVector {
    argv: Vec<OsString>,
}

impl CommandVector {
    /// The executable name.
    pub fn program(&self) -> &OsStr {
        &self.argv[0]
    }

    /// Everything after the executable name.
    pub fn args(&self) -> &[OsString] {
        &self.argv[1..]
    }

    /// The whole vector, program first.
    pub fn as_slice(&self) -> &[OsString] {
        &self.argv
    }
}

fn starts_with_dash(word: &OsStr) -> bool {
    word.as_encoded_bytes().starts_with(b"-")
}

/// Build the final vector from the scanned options and host and the quoted command.
///
/// A `--` goes in front of the host when the host starts with `-`, and in
/// front of the quoted command when that string starts with `-`. The quoted
/// command is checked as given, leading space included.
pub fn assemble(scanned: ScannedArgs, quoted: OsString) -> CommandVector {
    let ScannedArgs {
        passthrough, host, ..
    } = scanned;

    let mut argv = passthrough;
    if starts_with_dash(&host) {
        argv.push(OsString::from(SEPARATOR));
    }
    argv.push(host);
    if starts_with_dash(&quoted) {
        argv.push(OsString::from(SEPARATOR));
    }
    argv.push(quoted);

    debug!(?argv, "assembled command vector");
    CommandVector { argv }
}
