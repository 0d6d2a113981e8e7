use tracing_subscriber::{ layer::SubscriberExt, util::SubscriberInitExt };

/// Installs the global tracing subscriber.
///
/// Verbosity comes from `RUST_LOG`; without it the default is `info` for the
/// application, `warn` for Diesel, and `info` for the request traces emitted
/// by `tower_http`.
///
/// Call exactly once, at the start of `main`.
pub fn init_logging() {
    tracing_subscriber
        ::registry()
        .with(
            tracing_subscriber::EnvFilter
                ::try_from_default_env()
                .unwrap_or_else(|_| "info,diesel=warn,tower_http=info".into())
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
