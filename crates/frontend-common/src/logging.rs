//! Browser console logging

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Pretty;
use tracing_subscriber::prelude::*;
use tracing_web::{MakeWebConsoleWriter, performance_layer};

const DEFAULT_DIRECTIVES: &str = "info,passage_core=debug,passage_http=debug,passage_frontend=debug";

/// Install a `tracing` subscriber that writes to the browser console
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        // No clock source for `std::time` in the browser
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(DEFAULT_DIRECTIVES))
        .with(fmt_layer)
        .with(perf_layer)
        .try_init();
}
