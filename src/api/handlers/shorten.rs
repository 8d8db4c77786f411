//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorturl::ShortenResponse;
use crate::api::extract::UrlSubmission;
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or reuses) a short code for a URL.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// JSON `{"url": "https://www.freecodecamp.org"}` or the form-encoded
/// equivalent `url=https%3A%2F%2Fwww.freecodecamp.org`.
///
/// # Response
///
/// ```json
/// {
///   "original_url": "https://www.freecodecamp.org",
///   "short_url": "67e55044-10b1-426f-9247-bb680e5fe0c8"
/// }
/// ```
///
/// # Errors
///
/// Any failure (bad syntax, non-http(s) scheme, unresolvable host, storage
/// error) yields `200 {"error": "invalid url"}`.
pub async fn shorten_handler(
    State(state): State<AppState>,
    UrlSubmission(url): UrlSubmission,
) -> Result<Json<ShortenResponse>, AppError> {
    let record = state.url_service.shorten(&url).await?;

    Ok(Json(record.into()))
}
