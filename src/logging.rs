//! Structured log output for the CLI.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize JSON logging on stderr.
///
/// `quiet` limits output to error-level events; otherwise info and above
/// are emitted. `RUST_LOG` directives are honored on top.
pub fn init_logging(quiet: bool) {
    let directive = if quiet {
        "product_catalog=error"
    } else {
        "product_catalog=info"
    };

    let filter = match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}
