//! `--help` and `--version`, the only options that belong to ssh-adverb itself.

use crate::options::{self, OPTIONS};
use crate::scanner::{self, is_option_token};
use argh::{EarlyExit, FromArgs};
use std::ffi::OsString;

/// Name used in help and version output.
pub const PROGRAM_NAME: &str = "ssh-adverb";

/// Widest value hint that still gets its description on the same line.
const MAX_HINT_WIDTH: usize = 14;

#[derive(FromArgs)]
/// Invoke as: ssh-adverb [OPTIONS] [--] HOST CMD ARG...
/// Runs CMD with its ARGs on HOST through ssh, quoted so the remote shell
/// receives them exactly as given. OPTIONS are ssh's own single-letter options
/// and are passed through unchanged.
struct Surface {
    /// display the version and exit
    #[argh(switch)]
    version: bool,
}

/// A request that replaces the normal run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceRequest {
    Help,
    Version,
}

impl SurfaceRequest {
    fn flag(self) -> &'static str {
        match self {
            SurfaceRequest::Help => "--help",
            SurfaceRequest::Version => "--version",
        }
    }
}

/// Look for `--help` or `--version` in the option zone of `args`.
///
/// Walks the same tokens the scanner would, so a value such as the one in
/// `-l --help` is not mistaken for a request. Stops at the first token outside
/// the option zone, and at an unknown letter, which the scanner reports.
pub fn intercept(args: &[OsString]) -> Option<SurfaceRequest> {
    let mut tokens = args.iter().map(OsString::as_os_str);
    while let Some(token) = tokens.next() {
        match token {
            t if t == "--help" => return Some(SurfaceRequest::Help),
            t if t == "--version" => return Some(SurfaceRequest::Version),
            t if !is_option_token(t) => return None,
            t => match options::cluster_wants_next(scanner::cluster(t)) {
                Ok(true) => {
                    tokens.next();
                }
                Ok(false) => {}
                Err(_) => return None,
            },
        }
    }
    None
}

/// The text to print on standard output for `request`.
///
/// argh answers `--help` with an early exit carrying its usage text and parses
/// `--version` as a plain switch.
pub fn respond(request: SurfaceRequest) -> String {
    match Surface::from_args(&[PROGRAM_NAME], &[request.flag()]) {
        Ok(surface) => {
            debug_assert!(surface.version);
            version_text()
        }
        Err(EarlyExit { output, .. }) => help_text(&output),
    }
}

fn version_text() -> String {
    format!("{} {}\n", PROGRAM_NAME, env!("CARGO_PKG_VERSION"))
}

fn help_text(usage: &str) -> String {
    let mut out = String::from(usage);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
    out.push_str("SSH options:\n");
    out.push_str(&options_table());
    out
}

/// One line per known ssh option, hints padded to a common column.
pub fn options_table() -> String {
    let width = OPTIONS
        .iter()
        .filter_map(|spec| spec.value_hint)
        .map(str::len)
        .max()
        .unwrap_or(0)
        .min(MAX_HINT_WIDTH);

    let mut out = String::new();
    for spec in OPTIONS {
        let hint = spec.value_hint.unwrap_or("");
        if hint.len() <= width {
            out.push_str(&format!(
                "  -{} {:<width$}  {}\n",
                spec.letter, hint, spec.description
            ));
        } else {
            out.push_str(&format!(
                "  -{} {}\n     {:<width$}  {}\n",
                spec.letter, hint, "", spec.description
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_intercepts_help_and_version_in_option_zone() {
        assert_eq!(intercept(&args(&["--help"])), Some(SurfaceRequest::Help));
        assert_eq!(
            intercept(&args(&["-v", "--version", "host", "cmd"])),
            Some(SurfaceRequest::Version)
        );
        assert_eq!(
            intercept(&args(&["-p22", "--help"])),
            Some(SurfaceRequest::Help)
        );
    }

    #[test]
    fn test_ignores_flags_outside_option_zone() {
        assert_eq!(intercept(&args(&["host", "--help"])), None);
        assert_eq!(intercept(&args(&["--", "--help", "cmd"])), None);
        assert_eq!(intercept(&args(&[])), None);
    }

    #[test]
    fn test_ignores_option_values() {
        assert_eq!(intercept(&args(&["-l", "--help", "host", "cmd"])), None);
    }

    #[test]
    fn test_unknown_letter_stops_interception() {
        assert_eq!(intercept(&args(&["-Z", "--help"])), None);
    }

    #[test]
    #[cfg(unix)]
    fn test_non_utf8_option_value_is_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;
        let mut input = args(&["-l"]);
        input.push(OsStr::from_bytes(b"r\xe9mi").to_os_string());
        input.push("--version".into());
        assert_eq!(intercept(&input), Some(SurfaceRequest::Version));
    }

    #[test]
    fn test_help_starts_with_usage() {
        let text = respond(SurfaceRequest::Help);
        assert!(text.starts_with("Usage: ssh-adverb"), "{text}");
        assert!(text.contains("\n\nSSH options:\n"), "{text}");
    }

    #[test]
    fn test_version_text() {
        let text = respond(SurfaceRequest::Version);
        assert_eq!(text, format!("ssh-adverb {}\n", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_help_lists_every_option() {
        let text = respond(SurfaceRequest::Help);
        assert!(text.contains("HOST CMD ARG..."), "{text}");
        assert!(text.contains("--version"), "{text}");
        for spec in OPTIONS {
            assert!(
                text.contains(&format!("  -{} ", spec.letter)),
                "missing -{} in {text}",
                spec.letter
            );
            assert!(text.contains(spec.description));
        }
    }

    #[test]
    fn test_long_hint_wraps_description() {
        let table = options_table();
        assert!(table.contains("  -p PORT            Set remote port number\n"));
        assert!(table.contains(
            "  -L [BIND-ADDRESS:]PORT:HOST:HOSTPORT\n                     Forward local PORT"
        ));
        assert!(table.contains("  -v                 Set verbose mode\n"));
    }
}
