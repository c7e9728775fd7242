//! Splits the caller's arguments into client options, host and remote command.
//!
//! Arguments are kept as [`OsString`]s and inspected as bytes, so words that
//! are not valid UTF-8 pass through untouched.

use crate::error::AdverbError;
use crate::options;
use std::ffi::{OsStr, OsString};
use tracing::trace;

/// Token that ends the option zone and, optionally, the host zone.
pub const SEPARATOR: &str = "--";

/// The three zones of a scanned argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedArgs {
    /// The executable name followed by the client options, verbatim.
    pub passthrough: Vec<OsString>,
    /// The remote host.
    pub host: OsString,
    /// The remote command and its arguments, at least one word.
    pub command: Vec<OsString>,
}

/// Returns true for a token that belongs to the client-option zone.
pub fn is_option_token(token: &OsStr) -> bool {
    token.as_encoded_bytes().starts_with(b"-") && token != SEPARATOR
}

/// The letters of an option token, without its leading `-`.
pub(crate) fn cluster(token: &OsStr) -> &[u8] {
    &token.as_encoded_bytes()[1..]
}

struct Scanner<'a> {
    args: &'a [OsString],
    pos: usize,
    passthrough: Vec<OsString>,
}

impl<'a> Scanner<'a> {
    fn new(program: &OsStr, args: &'a [OsString]) -> Self {
        Scanner {
            args,
            pos: 0,
            passthrough: vec![program.to_os_string()],
        }
    }

    fn peek(&self) -> Option<&'a OsStr> {
        self.args.get(self.pos).map(OsString::as_os_str)
    }

    fn consume(&mut self) -> Option<&'a OsStr> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn skip_separator(&mut self) {
        if self.peek().is_some_and(|t| t == SEPARATOR) {
            self.pos += 1;
        }
    }

    fn scan(mut self) -> Result<ScannedArgs, AdverbError> {
        self.scan_options()?;

        self.skip_separator();
        let host = self
            .consume()
            .ok_or(AdverbError::MissingHost)?
            .to_os_string();

        self.skip_separator();
        let command: Vec<OsString> = self.args[self.pos..].to_vec();
        if command.is_empty() {
            return Err(AdverbError::MissingCommand);
        }

        Ok(ScannedArgs {
            passthrough: self.passthrough,
            host,
            command,
        })
    }

    /// Option zone: each token is a cluster like `-vAX`, `-p22` or `-p` followed by `22`.
    fn scan_options(&mut self) -> Result<(), AdverbError> {
        while let Some(token) = self.peek().filter(|t| is_option_token(t)) {
            self.pos += 1;
            self.passthrough.push(token.to_os_string());
            if options::cluster_wants_next(cluster(token))? {
                // The value is taken verbatim, even when it looks like an option.
                if let Some(value) = self.consume() {
                    trace!(option = ?token, value = ?value, "option value");
                    self.passthrough.push(value.to_os_string());
                }
            }
        }
        Ok(())
    }
}

/// Scan `args` (without the program's own name) into zones.
///
/// `program` becomes the first element of [`ScannedArgs::passthrough`].
/// The caller must already have dealt with `--help` and `--version`; here they
/// are treated as option clusters and rejected as unknown letters.
pub fn scan(program: &OsStr, args: &[OsString]) -> Result<ScannedArgs, AdverbError> {
    Scanner::new(program, args).scan()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    fn ssh() -> &'static OsStr {
        OsStr::new("ssh")
    }

    #[test]
    fn test_plain_host_and_command() {
        let scanned = scan(ssh(), &args(&["host", "ls", "-l"])).unwrap();
        assert_eq!(scanned.passthrough, args(&["ssh"]));
        assert_eq!(scanned.host, "host");
        assert_eq!(scanned.command, args(&["ls", "-l"]));
    }

    #[test]
    fn test_bundled_flags_with_value_in_next_token() {
        let scanned = scan(ssh(), &args(&["-vAl", "root", "host", "id"])).unwrap();
        assert_eq!(scanned.passthrough, args(&["ssh", "-vAl", "root"]));
        assert_eq!(scanned.host, "host");
        assert_eq!(scanned.command, args(&["id"]));
    }

    #[test]
    fn test_attached_value_does_not_consume_next_token() {
        let scanned = scan(ssh(), &args(&["-p2222", "host", "uptime"])).unwrap();
        assert_eq!(scanned.passthrough, args(&["ssh", "-p2222"]));
        assert_eq!(scanned.host, "host");
        assert_eq!(scanned.command, args(&["uptime"]));
    }

    #[test]
    fn test_letters_after_value_letter_are_not_looked_up() {
        // "Zq" would be unknown/flag letters, but they are -o's value here.
        let scanned = scan(ssh(), &args(&["-vo", "Zq", "host", "true"])).unwrap();
        assert_eq!(scanned.passthrough, args(&["ssh", "-vo", "Zq"]));

        let scanned = scan(ssh(), &args(&["-voZq", "host", "true"])).unwrap();
        assert_eq!(scanned.passthrough, args(&["ssh", "-voZq"]));
        assert_eq!(scanned.host, "host");
    }

    #[test]
    fn test_value_that_looks_like_an_option_is_taken_verbatim() {
        let scanned = scan(ssh(), &args(&["-l", "-v", "host", "id"])).unwrap();
        assert_eq!(scanned.passthrough, args(&["ssh", "-l", "-v"]));
        assert_eq!(scanned.host, "host");

        let scanned = scan(ssh(), &args(&["-l", "--", "host", "id"])).unwrap();
        assert_eq!(scanned.passthrough, args(&["ssh", "-l", "--"]));
        assert_eq!(scanned.host, "host");
    }

    #[test]
    fn test_separator_ends_option_zone() {
        let scanned = scan(ssh(), &args(&["-v", "--", "host", "cmd", "arg"])).unwrap();
        assert_eq!(scanned.passthrough, args(&["ssh", "-v"]));
        assert_eq!(scanned.host, "host");
        assert_eq!(scanned.command, args(&["cmd", "arg"]));
    }

    #[test]
    fn test_separator_allows_dash_host_and_dash_command() {
        let scanned = scan(ssh(), &args(&["--", "-host", "--", "-cmd", "--"])).unwrap();
        assert_eq!(scanned.passthrough, args(&["ssh"]));
        assert_eq!(scanned.host, "-host");
        assert_eq!(scanned.command, args(&["-cmd", "--"]));
    }

    #[test]
    fn test_only_one_separator_skipped_after_host() {
        let scanned = scan(ssh(), &args(&["host", "--", "--", "x"])).unwrap();
        assert_eq!(scanned.command, args(&["--", "x"]));
    }

    #[test]
    fn test_lone_dash_is_passed_through() {
        let scanned = scan(ssh(), &args(&["-", "host", "true"])).unwrap();
        assert_eq!(scanned.passthrough, args(&["ssh", "-"]));
        assert_eq!(scanned.host, "host");
    }

    #[test]
    fn test_jump_host_value_in_next_token() {
        let scanned = scan(ssh(), &args(&["-J", "bastion", "host", "cmd"])).unwrap();
        assert_eq!(scanned.passthrough, args(&["ssh", "-J", "bastion"]));
        assert_eq!(scanned.host, "host");
        for option in ["-B", "-E", "-P", "-Q"] {
            let scanned = scan(ssh(), &args(&[option, "val", "host", "cmd"])).unwrap();
            assert_eq!(scanned.host, "host", "{option}");
        }
        let scanned = scan(ssh(), &args(&["-G", "host", "cmd"])).unwrap();
        assert_eq!(scanned.passthrough, args(&["ssh", "-G"]));
    }

    #[test]
    #[cfg(unix)]
    fn test_non_utf8_words_pass_through() {
        use std::os::unix::ffi::OsStrExt;
        let latin1 = |b: &[u8]| OsStr::from_bytes(b).to_os_string();
        let input = vec![
            OsString::from("-l"),
            latin1(b"r\xe9mi"),
            latin1(b"h\xf4te"),
            OsString::from("ls"),
            latin1(b"caf\xe9.txt"),
        ];
        let scanned = scan(ssh(), &input).unwrap();
        assert_eq!(scanned.passthrough[2], latin1(b"r\xe9mi"));
        assert_eq!(scanned.host, latin1(b"h\xf4te"));
        assert_eq!(scanned.command[1], latin1(b"caf\xe9.txt"));
    }

    #[test]
    fn test_unknown_option_letter() {
        let err = scan(ssh(), &args(&["-vZ", "host", "true"])).unwrap_err();
        assert!(matches!(err, AdverbError::UnknownOption('Z')));
    }

    #[test]
    fn test_help_is_not_handled_here() {
        let err = scan(ssh(), &args(&["--help"])).unwrap_err();
        assert!(matches!(err, AdverbError::UnknownOption('-')));
    }

    #[test]
    fn test_missing_host() {
        assert!(matches!(
            scan(ssh(), &args(&[])),
            Err(AdverbError::MissingHost)
        ));
        assert!(matches!(
            scan(ssh(), &args(&["--"])),
            Err(AdverbError::MissingHost)
        ));
        assert!(matches!(
            scan(ssh(), &args(&["-v", "-C"])),
            Err(AdverbError::MissingHost)
        ));
        // Dangling value-taking option consumes nothing.
        assert!(matches!(
            scan(ssh(), &args(&["-p"])),
            Err(AdverbError::MissingHost)
        ));
    }

    #[test]
    fn test_missing_command() {
        assert!(matches!(
            scan(ssh(), &args(&["-v", "host"])),
            Err(AdverbError::MissingCommand)
        ));
        assert!(matches!(
            scan(ssh(), &args(&["host", "--"])),
            Err(AdverbError::MissingCommand)
        ));
    }

    #[test]
    fn test_program_name_leads_passthrough() {
        let scanned = scan(OsStr::new("/opt/bin/myssh"), &args(&["-4", "h", "c"])).unwrap();
        assert_eq!(scanned.passthrough, args(&["/opt/bin/myssh", "-4"]));
    }
}
