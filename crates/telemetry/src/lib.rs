use std::io::stderr;

use tracing::Span;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::{self, writer::BoxMakeWriter, MakeWriter},
    prelude::*,
    EnvFilter,
};

/// Filter used when `RUST_LOG` is unset or invalid.
///
/// Anything below `warn` stays out of the terminal so that stdout and stderr only carry the
/// launched binary's own output.
pub const DEFAULT_FILTER: &str = "warn";

pub struct TelemetryConfig {
    console_writer: Option<BoxMakeWriter>,
    ansi: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            console_writer: None,
            ansi: true,
        }
    }
}

impl TelemetryConfig {
    pub fn with_console_writer<W>(mut self, writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        self.console_writer = Some(BoxMakeWriter::new(writer));
        self
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }
}

/// Install the global subscriber. Subsequent calls are no-ops.
pub fn install(config: TelemetryConfig) {
    let TelemetryConfig {
        console_writer,
        ansi,
    } = config;

    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let console_writer = console_writer.unwrap_or_else(|| BoxMakeWriter::new(stderr));

    let _ = tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(filter_layer)
        .with(
            fmt::layer()
                .compact()
                .with_ansi(ansi)
                .with_target(false)
                .without_time()
                .with_writer(console_writer),
        )
        .try_init();
}

/// Install the `color-eyre` report and panic hooks.
pub fn install_error_handler() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .install();
}

/// Run `f` inside an `info` level span that serves as the root of the command's trace.
pub fn with_root_span<T, F>(name: &'static str, operation: &'static str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let span: Span = tracing::info_span!("root", command = name, operation);
    span.in_scope(f)
}
