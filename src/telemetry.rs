//! Opt-in `tracing` bootstrap for hosts that do not bring their own
//! subscriber. Everything here is gated on the `telemetry` feature; with
//! the feature off the functions compile to no-ops.

/// Installs a compact global subscriber filtered by `RUST_LOG`, falling
/// back to `info`. Returns `false` if the feature is off or another
/// subscriber already claimed the global slot.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter("info")
}

/// Same as [`init_default_tracing`] but with a caller-chosen fallback
/// filter directive, e.g. `"echarts_composer=debug"`.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
