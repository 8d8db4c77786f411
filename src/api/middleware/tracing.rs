//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Each request gets an `INFO` span carrying method, URI and version. The
/// response is logged at `INFO` with status and latency in milliseconds;
/// 5xx responses are additionally logged at `ERROR`.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/api/shorturl version=HTTP/1.1}: finished processing request latency=41 ms status=200
/// INFO request{method=GET uri=/api/shorturl/67e55044-10b1-426f-9247-bb680e5fe0c8 version=HTTP/1.1}: finished processing request latency=2 ms status=302
/// ```
///
/// Since every API error is answered with status 200, failed lookups show
/// up here as successes; the precise error is logged by
/// [`crate::error::AppError`].
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
