//! Telemetry helpers for applications embedding `gantt-rs`.
//!
//! Tracing setup stays explicit and opt-in. Hosts can call
//! `init_default_tracing` or install their own subscriber and filters.
//! Timeline builders emit `debug`/`trace` events under the `gantt_rs` target.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_TRACING_FILTER: &str = "info";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when the feature is disabled or a global subscriber was
/// already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback_filter(DEFAULT_TRACING_FILTER)
}

/// Same as [`init_default_tracing`] but with a caller-chosen fallback filter,
/// e.g. `"gantt_rs=trace"` to see skipped records while debugging a view.
#[must_use]
pub fn init_tracing_with_fallback_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
