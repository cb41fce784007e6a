//! Logging setup for the documentation server.
//!
//! Output goes to stderr; stdout carries MCP framing. `RUST_LOG` refines the
//! default level, e.g. `RUST_LOG=ids_docs_mcp::search=trace`.

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    INIT.call_once(|| {
        let under_test = under_test_harness();
        let filter = EnvFilter::from_default_env().add_directive(default_level(under_test).into());

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .compact();

        // A subscriber may already be installed by an embedding application.
        let installed = if under_test {
            subscriber.with_test_writer().try_init()
        } else {
            subscriber.with_writer(std::io::stderr).try_init()
        };
        if let Err(e) = installed {
            eprintln!("Logging not initialised: {}", e);
        }
    });
}

/// Corpus scans are logged at debug, so tests see them and the server does not.
const fn default_level(under_test: bool) -> Level {
    if under_test { Level::DEBUG } else { Level::INFO }
}

fn under_test_harness() -> bool {
    ["NEXTEST", "CARGO_TARGET_TMPDIR"]
        .iter()
        .any(|var| std::env::var_os(var).is_some())
}
