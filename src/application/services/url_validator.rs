//! Validation of submitted URLs.
//!
//! A URL is accepted when it parses as an absolute `http`/`https` URL and
//! its host resolves. Parsing and the DNS check are separate steps because
//! the latter touches the network and is bounded by a timeout.

use std::sync::Arc;
use std::time::Duration;

use url::{Host, Url};

use crate::domain::resolver::HostResolver;
use crate::error::{AppError, UrlRejection};

/// A URL that passed every validation step.
///
/// Keeps the raw input untouched: that is what gets stored and redirected
/// to, so clients get back exactly the bytes they submitted.
#[derive(Debug, Clone)]
pub struct ValidatedUrl {
    raw: String,
    parsed: Url,
}

impl ValidatedUrl {
    /// The URL exactly as submitted.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed form of the URL.
    pub fn parsed(&self) -> &Url {
        &self.parsed
    }
}

/// Validates URLs for syntax, scheme and host resolvability.
#[derive(Clone)]
pub struct UrlValidator {
    resolver: Arc<dyn HostResolver>,
    dns_timeout: Duration,
}

impl UrlValidator {
    /// Creates a validator using `resolver` for DNS checks, each bounded by
    /// `dns_timeout`.
    pub fn new(resolver: Arc<dyn HostResolver>, dns_timeout: Duration) -> Self {
        Self {
            resolver,
            dns_timeout,
        }
    }

    /// Runs every validation step on `input`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] with the first failing check.
    pub async fn validate(&self, input: &str) -> Result<ValidatedUrl, AppError> {
        let parsed = Self::parse(input)?;
        self.check_host(&parsed).await?;

        Ok(ValidatedUrl {
            raw: input.to_string(),
            parsed,
        })
    }

    /// Parses `input` as an absolute URL with an `http` or `https` scheme.
    ///
    /// Relative references, missing schemes and malformed syntax fail with
    /// [`UrlRejection::Malformed`]. Scheme comparison is case-insensitive
    /// because the parser lowercases schemes.
    ///
    /// # Errors
    ///
    /// See [`UrlRejection`].
    pub fn parse(input: &str) -> Result<Url, UrlRejection> {
        let url = Url::parse(input)?;

        match url.scheme() {
            "http" | "https" => {}
            other => return Err(UrlRejection::UnsupportedScheme(other.to_string())),
        }

        if url.host().is_none() {
            return Err(UrlRejection::MissingHost);
        }

        Ok(url)
    }

    /// Checks that the host of `url` resolves.
    ///
    /// IP literals are accepted without a lookup. Domain names go through the
    /// configured resolver under the DNS timeout.
    ///
    /// # Errors
    ///
    /// Returns [`UrlRejection::Unresolvable`] if the lookup fails or yields
    /// no address, [`UrlRejection::DnsTimeout`] if it takes too long.
    pub async fn check_host(&self, url: &Url) -> Result<(), UrlRejection> {
        let domain = match url.host() {
            Some(Host::Domain(domain)) => domain,
            Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => return Ok(()),
            None => return Err(UrlRejection::MissingHost),
        };

        match tokio::time::timeout(self.dns_timeout, self.resolver.resolve(domain)).await {
            Ok(Ok(addrs)) if !addrs.is_empty() => {
                tracing::debug!(host = domain, addrs = addrs.len(), "host resolved");
                Ok(())
            }
            Ok(Ok(_)) => Err(UrlRejection::Unresolvable {
                host: domain.to_string(),
                reason: "no addresses returned".to_string(),
            }),
            Ok(Err(e)) => Err(UrlRejection::Unresolvable {
                host: domain.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Err(UrlRejection::DnsTimeout {
                host: domain.to_string(),
                timeout: self.dns_timeout,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resolver::MockHostResolver;
    use async_trait::async_trait;
    use std::io;
    use std::net::{IpAddr, Ipv4Addr};

    fn resolving_validator() -> UrlValidator {
        let mut resolver = MockHostResolver::new();
        resolver
            .expect_resolve()
            .returning(|_| Ok(vec![IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34))]));
        UrlValidator::new(Arc::new(resolver), Duration::from_secs(1))
    }

    fn unused_resolver_validator() -> UrlValidator {
        let mut resolver = MockHostResolver::new();
        resolver.expect_resolve().times(0);
        UrlValidator::new(Arc::new(resolver), Duration::from_secs(1))
    }

    struct SlowResolver;

    #[async_trait]
    impl HostResolver for SlowResolver {
        async fn resolve(&self, _host: &str) -> io::Result<Vec<IpAddr>> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(vec![IpAddr::V4(Ipv4Addr::LOCALHOST)])
        }
    }

    #[test]
    fn test_parse_accepts_http_and_https() {
        assert!(UrlValidator::parse("http://example.com").is_ok());
        assert!(UrlValidator::parse("https://example.com/path?q=1").is_ok());
        assert!(UrlValidator::parse("HTTPS://EXAMPLE.COM").is_ok());
    }

    #[test]
    fn test_parse_rejects_other_schemes() {
        for input in ["ftp://example.com", "javascript:alert(1)", "mailto:a@b.c", "file:///etc/passwd"] {
            let result = UrlValidator::parse(input);
            assert!(
                matches!(result, Err(UrlRejection::UnsupportedScheme(_))),
                "expected UnsupportedScheme for {input}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_malformed_and_relative() {
        for input in ["not a url", "", "/relative/path", "www.example.com", "http://"] {
            let result = UrlValidator::parse(input);
            assert!(
                matches!(result, Err(UrlRejection::Malformed(_))),
                "expected Malformed for {input:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_validate_keeps_raw_input() {
        let validator = resolving_validator();

        let validated = validator.validate("https://Example.com/A?b=1").await.unwrap();

        assert_eq!(validated.as_str(), "https://Example.com/A?b=1");
        assert_eq!(validated.parsed().host_str(), Some("example.com"));
    }

    #[tokio::test]
    async fn test_validate_resolves_domain_host() {
        let mut resolver = MockHostResolver::new();
        resolver
            .expect_resolve()
            .withf(|host| host == "www.freecodecamp.org")
            .times(1)
            .returning(|_| Ok(vec![IpAddr::V4(Ipv4Addr::new(104, 26, 2, 33))]));
        let validator = UrlValidator::new(Arc::new(resolver), Duration::from_secs(1));

        assert!(validator.validate("https://www.freecodecamp.org").await.is_ok());
    }

    #[tokio::test]
    async fn test_validate_skips_lookup_for_ip_literals() {
        let validator = unused_resolver_validator();

        assert!(validator.validate("http://127.0.0.1:8080/x").await.is_ok());
        assert!(validator.validate("http://[::1]/").await.is_ok());
    }

    #[tokio::test]
    async fn test_validate_rejects_unresolvable_host() {
        let mut resolver = MockHostResolver::new();
        resolver.expect_resolve().returning(|_| {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                "failed to lookup address information",
            ))
        });
        let validator = UrlValidator::new(Arc::new(resolver), Duration::from_secs(1));

        let result = validator.validate("https://no-such-host.invalid").await;

        assert!(matches!(
            result,
            Err(AppError::InvalidUrl(UrlRejection::Unresolvable { ref host, .. }))
                if host == "no-such-host.invalid"
        ));
    }

    #[tokio::test]
    async fn test_validate_rejects_empty_answer() {
        let mut resolver = MockHostResolver::new();
        resolver.expect_resolve().returning(|_| Ok(Vec::new()));
        let validator = UrlValidator::new(Arc::new(resolver), Duration::from_secs(1));

        let result = validator.validate("https://example.com").await;

        assert!(matches!(
            result,
            Err(AppError::InvalidUrl(UrlRejection::Unresolvable { .. }))
        ));
    }

    #[tokio::test]
    async fn test_validate_times_out_slow_lookup() {
        let validator = UrlValidator::new(Arc::new(SlowResolver), Duration::from_millis(20));

        let result = validator.validate("https://slow.example.com").await;

        assert!(matches!(
            result,
            Err(AppError::InvalidUrl(UrlRejection::DnsTimeout { .. }))
        ));
    }

    #[tokio::test]
    async fn test_validate_does_not_resolve_invalid_scheme() {
        let validator = unused_resolver_validator();

        let result = validator.validate("ftp://example.com").await;

        assert!(matches!(
            result,
            Err(AppError::InvalidUrl(UrlRejection::UnsupportedScheme(ref s))) if s == "ftp"
        ));
    }
}
