//! Logger setup for the `devsift` binary.
//!
//! `RUST_LOG` overrides the level picked from `-v` flags.

/// Filter directive for a `-v` count.
///
/// Per-rule sieve tracing is only enabled at the highest level, where the
/// target module is printed too so cascade and sieve lines can be told apart.
fn filter_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "devsift=warn",
        1 => "devsift=info",
        2 => "devsift=debug",
        _ => "devsift=trace",
    }
}

/// Initialize the logger with the specified verbosity level
pub fn setup_logger(verbose: u8) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(filter_for(verbose)),
    )
    .format_timestamp(None)
    .format_module_path(false)
    .format_target(verbose >= 3)
    .init();
}
