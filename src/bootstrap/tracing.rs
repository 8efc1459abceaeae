//! Tracing configuration
//!
//! Installs a `tracing-subscriber` fmt layer. In the browser every event is
//! forwarded to the console method matching its level; native builds (tests,
//! tooling) write to stdout.

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives.
///
/// Development builds log our own crates at debug level; release builds keep
/// the console to info and above.
pub fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let crate_level = if is_dev { "debug" } else { "info" };
    let mut directives = vec!["warn".to_string()];
    directives.extend(
        ["leadpage", "lp_core", "lp_app", "lp_infra", "lp_web"]
            .iter()
            .map(|target| format!("{target}={crate_level}")),
    );
    directives
}

/// Register the global subscriber.
///
/// # Errors
///
/// Returns `Err` if a subscriber is already registered or a directive does
/// not parse.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_new(build_filter_directives(is_development()).join(","))?;

    #[cfg(target_arch = "wasm32")]
    let fmt_layer = fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_level(false)
        .with_target(true)
        .with_writer(lp_web::ConsoleMakeWriter::new());

    #[cfg(not(target_arch = "wasm32"))]
    let fmt_layer = fmt::layer()
        .with_level(true)
        .with_target(true)
        .with_ansi(false)
        .with_writer(std::io::stdout);

    registry().with(env_filter).with(fmt_layer).try_init()?;
    Ok(())
}
