//! Quoting of the remote command for the remote user's shell.
//!
//! ssh joins its trailing arguments with spaces and hands the result to the
//! remote shell, so the command words have to be quoted once more on this
//! side. The quoter wraps runs of ordinary characters in single quotes and
//! writes each single quote as `\'` outside of them. The output is one string
//! that a POSIX shell splits back into exactly the original words.
//!
//! Quoting works on bytes. The only byte it treats specially is the ASCII
//! single quote, so words that are not valid UTF-8 survive unchanged.

use std::ffi::{OsStr, OsString};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    Unquoted,
    Quoted,
}

struct QuotingFSM {
    out: Vec<u8>,
    state: QuoteState,
}

impl QuotingFSM {
    fn new() -> Self {
        QuotingFSM {
            out: Vec::new(),
            state: QuoteState::Unquoted,
        }
    }

    /// Move to `state`, writing the quote mark that opens or closes a region.
    fn enter(&mut self, state: QuoteState) {
        if self.state != state {
            self.out.push(b'\'');
            self.state = state;
        }
    }

    fn push_byte(&mut self, byte: u8) {
        match byte {
            b'\'' => {
                self.enter(QuoteState::Unquoted);
                self.out.extend_from_slice(b"\\'");
            }
            b => {
                self.enter(QuoteState::Quoted);
                self.out.push(b);
            }
        }
    }

    fn push_word(&mut self, word: &[u8]) {
        // Every word, the first included, is preceded by a space.
        self.out.push(b' ');
        self.state = QuoteState::Unquoted;
        if word.is_empty() {
            // Keep empty words visible to the remote shell.
            self.out.extend_from_slice(b"''");
            return;
        }
        for &byte in word {
            self.push_byte(byte);
        }
        self.enter(QuoteState::Unquoted);
    }

    fn finish(self) -> OsString {
        debug_assert_eq!(self.state, QuoteState::Unquoted);
        os_string_from_bytes(self.out)
    }
}

#[cfg(unix)]
fn os_string_from_bytes(bytes: Vec<u8>) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes)
}

// Input bytes come from `as_encoded_bytes` and are only split around ASCII.
#[cfg(not(unix))]
fn os_string_from_bytes(bytes: Vec<u8>) -> OsString {
    OsString::from(String::from_utf8_lossy(&bytes).into_owned())
}

/// Quote `words` into one shell-safe string.
///
/// The result starts with a space and has one space before every word.
/// An empty word becomes `''`.
pub fn quote_words<S: AsRef<OsStr>>(words: &[S]) -> OsString {
    let mut fsm = QuotingFSM::new();
    for word in words {
        fsm.push_word(word.as_ref().as_encoded_bytes());
    }
    let quoted = fsm.finish();
    trace!(quoted = ?quoted, "quoted remote command");
    quoted
}
