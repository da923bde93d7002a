use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const CRATES: [&str; 4] = ["pgr", "pgr_core", "services", "ui"];

/// Initialize logging with optional quiet mode.
///
/// `RUST_LOG` takes precedence. Otherwise our crates log at info, or only
/// errors when `quiet` is set.
pub fn init_logging(quiet: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(quiet)));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(filter)
        .init();
}

fn default_directives(quiet: bool) -> String {
    let level = if quiet { "error" } else { "info" };
    let mut directives = vec!["warn".to_string()];
    directives.extend(CRATES.iter().map(|krate| format!("{krate}={level}")));
    directives.join(",")
}
