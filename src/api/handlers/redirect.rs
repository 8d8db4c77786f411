//! Handler for short code redirects.

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use url::Url;

use crate::api::extract::ShortCode;
use crate::error::{AppError, UrlRejection};
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url}`
///
/// # Response
///
/// `302 Found` with `Location` set to the URL stored for the code.
///
/// # Errors
///
/// A malformed code (including one that is not valid UTF-8), an unknown code or a storage failure all yield
/// `200 {"error": "invalid url"}`.
pub async fn redirect_handler(
    ShortCode(short_url): ShortCode,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let record = state.url_service.resolve(&short_url).await?;
    let location = location_header(&record.original_url)?;

    tracing::debug!(id = %record.id, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds the `Location` value for a stored URL.
///
/// The stored bytes are used as-is when they are ASCII and form a valid
/// header value. Otherwise the percent-encoded serialization is used.
fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    if original_url.is_ascii()
        && let Ok(value) = HeaderValue::from_str(original_url)
    {
        return Ok(value);
    }

    let parsed = Url::parse(original_url).map_err(UrlRejection::from)?;
    HeaderValue::from_str(parsed.as_str())
        .map_err(|_| UrlRejection::NotRedirectable(original_url.to_string()).into())
}
