//! Tracing setup for the command-line front end
//!
//! Logs go to stderr so report output on stdout stays clean. `RUST_LOG`
//! takes precedence over the verbosity flag.

use std::sync::Once;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Crate log directive for a `-v` count
pub fn directive_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "pocketbook=warn",
        1 => "pocketbook=info",
        _ => "pocketbook=debug",
    }
}

/// Install the global subscriber; later calls are no-ops
pub fn init_tracing(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => {
                let directive: Option<Directive> = directive_for(verbosity).parse().ok();
                directive
                    .into_iter()
                    .fold(EnvFilter::new(""), |filter, d| filter.add_directive(d))
            }
        };

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
