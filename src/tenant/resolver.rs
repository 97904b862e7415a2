//! Tenant resolution strategies.
//!
//! # Responsibilities
//! - Extract the tenant slug from subdomain, path marker segment, or header
//! - Report the provenance of the resolved slug
//! - Strip the tenant prefix from the path before classification
//!
//! # Design Decisions
//! - Host matching is case-insensitive (per HTTP spec); slugs are lowercased
//!   when taken from the host, preserved as-sent elsewhere
//! - The path strategy uses a marker segment (`/t/{tenant}/...` by default)
//!   so that tenant slugs can never collide with collection names

use axum::http::HeaderMap;
use serde::Serialize;

use crate::config::schema::TenancyConfig;

/// Where the tenant slug came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantSource {
    Subdomain,
    Path,
    Header,
    None,
}

impl TenantSource {
    /// Stable label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            TenantSource::Subdomain => "subdomain",
            TenantSource::Path => "path",
            TenantSource::Header => "header",
            TenantSource::None => "none",
        }
    }
}

/// The outcome of tenant resolution for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenantResolution {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    pub source: TenantSource,
}

impl TenantResolution {
    pub fn none() -> Self {
        Self {
            tenant: None,
            source: TenantSource::None,
        }
    }
}

/// Compiled tenant resolver. Immutable after construction; rebuilt and
/// swapped together with the routing table on config reload.
#[derive(Debug)]
pub struct TenantResolver {
    base_domain: Option<String>,
    header: String,
    path_marker: String,
    resolve_subdomain: bool,
    resolve_path: bool,
    resolve_header: bool,
}

impl TenantResolver {
    /// Build a resolver from the tenancy section of the configuration.
    pub fn from_config(config: &TenancyConfig) -> Self {
        Self {
            base_domain: config.base_domain.as_ref().map(|d| d.to_lowercase()),
            header: config.header.to_lowercase(),
            path_marker: config.path_marker.clone(),
            resolve_subdomain: config.resolve_subdomain,
            resolve_path: config.resolve_path,
            resolve_header: config.resolve_header,
        }
    }

    /// Resolve the tenant for a request and return the resolution together
    /// with the path the classifier should see.
    ///
    /// Strategies are tried in a fixed order (subdomain, path, header); the
    /// first hit wins. Only the path strategy rewrites the path.
    pub fn resolve(&self, headers: &HeaderMap, path: &str) -> (TenantResolution, String) {
        if self.resolve_subdomain {
            if let Some(tenant) = self.tenant_from_host(headers) {
                return (
                    TenantResolution {
                        tenant: Some(tenant),
                        source: TenantSource::Subdomain,
                    },
                    path.to_string(),
                );
            }
        }

        if self.resolve_path {
            if let Some((tenant, remaining)) = self.extract_tenant_from_path(path) {
                return (
                    TenantResolution {
                        tenant: Some(tenant),
                        source: TenantSource::Path,
                    },
                    remaining,
                );
            }
        }

        if self.resolve_header {
            if let Some(tenant) = headers
                .get(&self.header)
                .and_then(|v| v.to_str().ok())
                .filter(|v| !v.is_empty())
            {
                return (
                    TenantResolution {
                        tenant: Some(tenant.to_string()),
                        source: TenantSource::Header,
                    },
                    path.to_string(),
                );
            }
        }

        (TenantResolution::none(), path.to_string())
    }

    /// Split a tenant marker prefix off the path: `/t/acme/contacts` →
    /// `("acme", "/contacts")`. `None` when the path carries no prefix.
    pub fn extract_tenant_from_path(&self, path: &str) -> Option<(String, String)> {
        let trimmed = path.trim_start_matches('/');
        let (marker, rest) = trimmed.split_once('/')?;
        if marker != self.path_marker {
            return None;
        }
        let (tenant, remaining) = match rest.split_once('/') {
            Some((tenant, tail)) => (tenant, format!("/{}", tail)),
            None => (rest, String::from("/")),
        };
        if tenant.is_empty() {
            return None;
        }
        Some((tenant.to_string(), remaining))
    }

    /// Take the leading label of the Host header when the remainder equals
    /// the configured base domain.
    fn tenant_from_host(&self, headers: &HeaderMap) -> Option<String> {
        let base = self.base_domain.as_deref()?;
        let host = headers.get("host").and_then(|h| h.to_str().ok())?;
        let host = host.split(':').next().unwrap_or(host).to_lowercase();
        let label = host.strip_suffix(base)?.strip_suffix('.')?;
        if label.is_empty() || label.contains('.') {
            return None;
        }
        Some(label.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn resolver() -> TenantResolver {
        TenantResolver::from_config(&TenancyConfig {
            base_domain: Some("api.example.com".into()),
            header: "x-tenant-id".into(),
            path_marker: "t".into(),
            resolve_subdomain: true,
            resolve_path: true,
            resolve_header: true,
        })
    }

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (k, v) in pairs {
            map.insert(*k, HeaderValue::from_str(v).unwrap());
        }
        map
    }

    #[test]
    fn test_subdomain_resolution() {
        let (res, path) = resolver().resolve(
            &headers(&[("host", "acme.api.example.com")]),
            "/contacts",
        );
        assert_eq!(res.tenant.as_deref(), Some("acme"));
        assert_eq!(res.source, TenantSource::Subdomain);
        assert_eq!(path, "/contacts");
    }

    #[test]
    fn test_subdomain_ignores_port_and_case() {
        let (res, _) = resolver().resolve(
            &headers(&[("host", "ACME.API.EXAMPLE.COM:8080")]),
            "/",
        );
        assert_eq!(res.tenant.as_deref(), Some("acme"));
    }

    #[test]
    fn test_bare_base_domain_is_not_a_tenant() {
        let (res, _) = resolver().resolve(&headers(&[("host", "api.example.com")]), "/contacts");
        assert_eq!(res.source, TenantSource::None);
    }

    #[test]
    fn test_path_resolution_strips_prefix() {
        let (res, path) = resolver().resolve(&headers(&[]), "/t/acme/contacts/$schema");
        assert_eq!(res.tenant.as_deref(), Some("acme"));
        assert_eq!(res.source, TenantSource::Path);
        assert_eq!(path, "/contacts/$schema");
    }

    #[test]
    fn test_path_resolution_bare_tenant() {
        let (res, path) = resolver().resolve(&headers(&[]), "/t/acme");
        assert_eq!(res.tenant.as_deref(), Some("acme"));
        assert_eq!(path, "/");
    }

    #[test]
    fn test_header_resolution() {
        let (res, path) = resolver().resolve(&headers(&[("x-tenant-id", "acme")]), "/contacts");
        assert_eq!(res.tenant.as_deref(), Some("acme"));
        assert_eq!(res.source, TenantSource::Header);
        assert_eq!(path, "/contacts");
    }

    #[test]
    fn test_subdomain_beats_path_beats_header() {
        let (res, _) = resolver().resolve(
            &headers(&[("host", "alpha.api.example.com"), ("x-tenant-id", "gamma")]),
            "/t/beta/contacts",
        );
        assert_eq!(res.tenant.as_deref(), Some("alpha"));
        assert_eq!(res.source, TenantSource::Subdomain);

        let (res, _) = resolver().resolve(
            &headers(&[("x-tenant-id", "gamma")]),
            "/t/beta/contacts",
        );
        assert_eq!(res.tenant.as_deref(), Some("beta"));
        assert_eq!(res.source, TenantSource::Path);
    }

    #[test]
    fn test_no_tenant() {
        let (res, path) = resolver().resolve(&headers(&[]), "/contacts");
        assert_eq!(res, TenantResolution::none());
        assert_eq!(path, "/contacts");
    }

    #[test]
    fn test_disabled_strategies_are_skipped() {
        let resolver = TenantResolver::from_config(&TenancyConfig {
            base_domain: Some("api.example.com".into()),
            header: "x-tenant-id".into(),
            path_marker: "t".into(),
            resolve_subdomain: false,
            resolve_path: false,
            resolve_header: true,
        });
        let (res, path) = resolver.resolve(
            &headers(&[("host", "acme.api.example.com"), ("x-tenant-id", "hdr")]),
            "/t/beta/contacts",
        );
        assert_eq!(res.tenant.as_deref(), Some("hdr"));
        assert_eq!(res.source, TenantSource::Header);
        // Path strategy disabled: marker prefix is left for the classifier.
        assert_eq!(path, "/t/beta/contacts");
    }
}
