//! Hostname resolution contract.

use async_trait::async_trait;
use std::io;
use std::net::IpAddr;

/// Resolves hostnames to addresses.
///
/// Used by [`crate::application::services::UrlValidator`] to reject URLs
/// whose host does not exist. Callers bound each lookup with a timeout, so
/// implementations need not.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::TokioHostResolver`] - System resolver
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Returns the addresses `host` resolves to.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the lookup fails (NXDOMAIN, no network, ...).
    async fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}
