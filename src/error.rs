use thiserror::Error;

/// Errors that stop a single run of the rewriter.
///
/// None of these are recoverable: the caller reports the message and exits
/// with a non-zero status.
#[derive(Debug, Error)]
pub enum AdverbError {
    /// A letter in a client-option cluster is not in the option table.
    #[error("unrecognized option -{0}")]
    UnknownOption(char),
    /// Nothing was left for the host after the option zone.
    #[error("no host specified")]
    MissingHost,
    /// Nothing was left for the remote command after the host.
    #[error("no command specified")]
    MissingCommand,
    /// The target executable could not be started.
    #[error("executing {program}: {source}")]
    Invoke {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
