use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(filter)
        .init();
}

pub fn to_internal_error<E: std::fmt::Debug>(context: &str, e: E) -> actix_web::Error {
    actix_web::error::ErrorInternalServerError(format!("{} error: {:?}", context, e))
}
