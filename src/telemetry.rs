//! Tracing setup for hosts and tools embedding `marker-chart-rs`.
//!
//! Layout passes emit `debug!` summaries and per-row `trace!` events under the
//! `marker_chart_rs` target. The library never installs a subscriber itself.

/// Filter used when `RUST_LOG` is unset: warnings everywhere plus one
/// summary line per layout pass.
pub const DEFAULT_DIRECTIVES: &str = "warn,marker_chart_rs=debug";

/// Filter that also shows breakpoint resolution and row compaction.
pub const LAYOUT_TRACE_DIRECTIVES: &str = "warn,marker_chart_rs=trace";

/// Installs a subscriber with [`DEFAULT_DIRECTIVES`] as the fallback filter.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_DIRECTIVES)
}

/// Installs a stderr subscriber when the `telemetry` feature is enabled.
///
/// `RUST_LOG` takes precedence over `fallback_directives`. Events go to stderr
/// so tools printing scenes on stdout keep clean output.
///
/// Returns `false` when the feature is disabled, the fallback does not parse,
/// or a global subscriber is already installed.
#[must_use]
pub fn init_tracing(fallback_directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => match fallback_filter(fallback_directives) {
                Some(filter) => filter,
                None => return false,
            },
        };

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .without_time()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directives;
        false
    }
}

#[cfg(feature = "telemetry")]
fn fallback_filter(directives: &str) -> Option<tracing_subscriber::EnvFilter> {
    tracing_subscriber::EnvFilter::try_new(directives).ok()
}
