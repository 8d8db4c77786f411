//! Request extraction for URL submissions and short codes.
//!
//! `POST /api/shorturl` accepts either a JSON body or an HTML form post
//! (`application/x-www-form-urlencoded`), like the landing page sends.
//! Every extraction failure is reported as an [`AppError`] so the client
//! always gets the uniform error body.

use axum::{
    Form, Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{HeaderMap, header, request::Parts},
};

use crate::api::dto::shorturl::ShortenRequest;
use crate::error::{AppError, UrlRejection};

/// The raw `url` field of a shortening request.
///
/// Any body that cannot be read, or that lacks `url`, is rejected as an
/// invalid URL so clients see the same error shape as for bad URLs.
#[derive(Debug)]
pub struct UrlSubmission(pub String);

impl<S> FromRequest<S> for UrlSubmission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = if is_json_content_type(req.headers()) {
            let Json(body) = Json::<ShortenRequest>::from_request(req, state)
                .await
                .map_err(|e| UrlRejection::MissingField(e.body_text()))?;
            body
        } else {
            let Form(body) = Form::<ShortenRequest>::from_request(req, state)
                .await
                .map_err(|e| UrlRejection::MissingField(e.body_text()))?;
            body
        };

        body.url
            .map(UrlSubmission)
            .ok_or_else(|| UrlRejection::MissingField("field is absent".to_string()).into())
    }
}

/// The `{short_url}` segment of a redirect request.
///
/// A segment that does not decode to UTF-8 is a malformed identifier.
#[derive(Debug)]
pub struct ShortCode(pub String);

impl<S> FromRequestParts<S> for ShortCode
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(code) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::MalformedId(e.body_text()))?;
        Ok(ShortCode(code))
    }
}

/// Returns true for `application/json` and `application/*+json` bodies.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::HeaderValue;

    fn headers_with(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_str(content_type).unwrap(),
        );
        headers
    }

    fn post(content_type: &str, body: &'static str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/api/shorturl")
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap()
    }

    #[test]
    fn test_json_content_type_detection() {
        assert!(is_json_content_type(&headers_with("application/json")));
        assert!(is_json_content_type(&headers_with(
            "application/json; charset=utf-8"
        )));
        assert!(is_json_content_type(&headers_with("Application/JSON")));
        assert!(is_json_content_type(&headers_with("application/merge-patch+json")));
        assert!(!is_json_content_type(&headers_with(
            "application/x-www-form-urlencoded"
        )));
        assert!(!is_json_content_type(&HeaderMap::new()));
    }

    #[tokio::test]
    async fn test_extracts_from_json() {
        let req = post("application/json", r#"{"url":"https://example.com"}"#);

        let UrlSubmission(url) = UrlSubmission::from_request(req, &()).await.unwrap();

        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn test_extracts_from_form() {
        let req = post(
            "application/x-www-form-urlencoded",
            "url=https%3A%2F%2Fexample.com%2Fa%3Fb%3D1",
        );

        let UrlSubmission(url) = UrlSubmission::from_request(req, &()).await.unwrap();

        assert_eq!(url, "https://example.com/a?b=1");
    }

    #[tokio::test]
    async fn test_missing_field_is_invalid_url() {
        let req = post("application/json", r#"{"link":"https://example.com"}"#);

        let result = UrlSubmission::from_request(req, &()).await;

        assert!(matches!(
            result,
            Err(AppError::InvalidUrl(UrlRejection::MissingField(_)))
        ));
    }

    #[tokio::test]
    async fn test_unreadable_body_is_invalid_url() {
        let req = post("application/json", "{not json");

        let result = UrlSubmission::from_request(req, &()).await;

        assert!(matches!(result, Err(AppError::InvalidUrl(_))));
    }
}
