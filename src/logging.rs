use crate::env::{Environment, LOG_VAR};
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// The filter is read from `SSH_ADVERB_LOG` and defaults to `warn`, also when
/// the variable does not parse or is not valid Unicode. Calling this more than
/// once keeps the first subscriber.
pub fn init(env: &Environment) {
    let filter = env
        .get_var(LOG_VAR)
        .and_then(|directives| directives.into_string().ok())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .without_time()
        .try_init();
}
