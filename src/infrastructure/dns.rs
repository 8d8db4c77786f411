//! System DNS resolver.

use async_trait::async_trait;
use std::io;
use std::net::IpAddr;

use crate::domain::resolver::HostResolver;

/// Resolves hostnames with the operating system resolver through
/// [`tokio::net::lookup_host`].
///
/// The blocking `getaddrinfo` call runs on Tokio's blocking pool. Dropping
/// the future abandons the result but cannot interrupt the call itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioHostResolver;

#[async_trait]
impl HostResolver for TokioHostResolver {
    async fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        let addrs = tokio::net::lookup_host((host, 0)).await?;
        Ok(addrs.map(|addr| addr.ip()).collect())
    }
}
