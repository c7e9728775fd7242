use crate::assembler::CommandVector;
use crate::error::AdverbError;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
pub type ExitCode = i32;

/// Something that can run a prepared [`CommandVector`].
///
/// The OS-backed implementation replaces the current process and only returns
/// on failure. Tests substitute a recorder so the pipeline runs without
/// starting any process.
pub trait Invoker {
    /// Run `argv`, returning the program's exit code if control comes back.
    fn invoke(&self, argv: &CommandVector) -> Result<ExitCode, AdverbError>;
}
