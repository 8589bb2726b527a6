//! Requester identity resolution.
//!
//! [`IdentityResolver`] turns request metadata into an [`Identity`]. The
//! default [`ForwardedAddressResolver`] uses the client address, preferring
//! proxy headers when configured to trust them.

use std::fmt::Debug;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::HeaderMap;
use axum::http::request::Parts;

use metro_core::error::AppError;
use metro_core::types::Identity;

use crate::error::ApiError;
use crate::state::AppState;

/// Resolves the requester identity of an HTTP request.
pub trait IdentityResolver: Send + Sync + Debug + 'static {
    /// Returns `None` when no identity can be determined.
    fn resolve(&self, headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<Identity>;
}

/// Client-address identity.
///
/// With `trust_forwarded_headers`, the first `X-Forwarded-For` entry wins,
/// then `X-Real-IP`, then the socket peer address.
#[derive(Debug, Clone)]
pub struct ForwardedAddressResolver {
    trust_forwarded_headers: bool,
}

impl ForwardedAddressResolver {
    /// Creates a resolver.
    pub fn new(trust_forwarded_headers: bool) -> Self {
        Self {
            trust_forwarded_headers,
        }
    }

    fn from_headers(headers: &HeaderMap) -> Option<Identity> {
        let forwarded = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .and_then(Identity::from_address);

        forwarded.or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
                .and_then(Identity::from_address)
        })
    }
}

impl IdentityResolver for ForwardedAddressResolver {
    fn resolve(&self, headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<Identity> {
        if self.trust_forwarded_headers {
            if let Some(identity) = Self::from_headers(headers) {
                return Some(identity);
            }
        }
        peer.and_then(|addr| Identity::from_address(&addr.ip().to_string()))
    }
}

/// Extracts the requester identity of the current request.
#[derive(Debug, Clone)]
pub struct ClientIdentity(pub Identity);

impl FromRequestParts<AppState> for ClientIdentity {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        state
            .identity_resolver
            .resolve(&parts.headers, peer)
            .map(ClientIdentity)
            .ok_or_else(|| AppError::validation("Unable to determine client identity").into())
    }
}
