use anyhow::Result;
use ssh_adverb::{Adverb, logging};
use std::ffi::OsString;

fn run() -> Result<i32> {
    let adverb = Adverb::default();
    logging::init(adverb.env());
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    adverb.run(&args, &mut std::io::stdout())
}

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            eprintln!("ERROR: {err}");
            std::process::exit(1);
        }
    }
}
