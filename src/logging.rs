//! Diagnostic logging on stderr.
//!
//! Standard output carries the command protocol, so log lines always go to
//! stderr. `RUST_LOG` takes precedence over the configured filter:
//! ```bash
//! RUST_LOG=memento_calc=debug memento-calc
//! ```

use std::sync::Once;

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Default filter: quiet unless something goes wrong.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber.
///
/// Only the first call takes effect. `filter` uses the `EnvFilter` directive
/// syntax, e.g. `debug` or `memento_calc::repl=debug`; an unparsable filter
/// falls back to [`DEFAULT_FILTER`].
pub fn init(filter: &str) {
    INIT.call_once(|| {
            let filter = if std::env::var("RUST_LOG").is_ok() {
                EnvFilter::from_default_env()
            } else {
                EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
            };

            let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr)
                                                            .with_target(true)
                                                            .with_level(true)
                                                            .with_filter(filter);

            tracing_subscriber::registry().with(fmt_layer).init();
        });
}
