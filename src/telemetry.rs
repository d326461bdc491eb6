use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Initialize tracing for the process.
///
/// `level` is an env-filter directive ("info", "ampdesk=debug", ...);
/// RUST_LOG still wins when set. JSON output carries span context for log
/// aggregation; the plain formatter is for humans at a terminal.
pub fn init_telemetry(level: &str, json: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))?;

    // Logs go to stderr; stdout belongs to command output.
    if json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    }

    tracing::debug!("Ampdesk telemetry initialized");
    Ok(())
}

/// Generate a correlation ID for linking related operations
pub fn generate_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Create a span with common intake-operation attributes
pub fn create_intake_span(
    operation: &str,
    intake_id: Option<Uuid>,
    correlation_id: Option<&str>,
) -> tracing::Span {
    tracing::info_span!(
        "intake_operation",
        operation = operation,
        intake.id = ?intake_id,
        correlation.id = correlation_id,
    )
}

/// Shutdown telemetry gracefully
pub fn shutdown_telemetry() {
    tracing::debug!("Ampdesk telemetry shutdown complete");
}
