//! Address resolution
//!
//! Splits a mini-program address (`path?key=value&...`) into the route key the host
//! framework knows and the query parameters passed along with it.

use crate::error::NavigationError;
use crate::params::QueryParams;

/// Result of resolving an address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAddress {
    /// Route key, the part before `?`
    pub route_key: String,
    /// Parsed query parameters
    pub query: QueryParams,
}

impl ResolvedAddress {
    /// Create a resolved address with no query parameters
    pub fn new(route_key: impl Into<String>) -> Self {
        Self {
            route_key: route_key.into(),
            query: QueryParams::new(),
        }
    }

    /// Attach query parameters
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }
}

/// Turns an address string into a route key and query
///
/// Navigation calls resolve their `url` through this trait at call time, never while the
/// router is being built. Closures with the matching signature implement it, which keeps
/// swapping in a host-specific parser a one-liner.
pub trait AddressResolver {
    /// Resolve `address` or explain why it cannot be resolved
    fn resolve(&self, address: &str) -> Result<ResolvedAddress, NavigationError>;
}

impl<F> AddressResolver for F
where
    F: Fn(&str) -> Result<ResolvedAddress, NavigationError>,
{
    fn resolve(&self, address: &str) -> Result<ResolvedAddress, NavigationError> {
        self(address)
    }
}

/// Default resolver for `path?query#fragment` addresses
///
/// The fragment is discarded, the path is used verbatim as the route key and the query
/// is parsed by [`QueryParams::from_query_string`]. An empty path is a resolution error.
///
/// # Example
///
/// ```
/// use miniapp_router::{AddressResolver, QueryStringResolver};
///
/// let resolved = QueryStringResolver.resolve("detail?id=7").unwrap();
/// assert_eq!(resolved.route_key, "detail");
/// assert_eq!(resolved.query.get("id"), Some("7"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryStringResolver;

impl AddressResolver for QueryStringResolver {
    fn resolve(&self, address: &str) -> Result<ResolvedAddress, NavigationError> {
        let without_fragment = address
            .split_once('#')
            .map_or(address, |(before, _)| before);
        let (path, query) = without_fragment
            .split_once('?')
            .unwrap_or((without_fragment, ""));

        if path.is_empty() {
            return Err(NavigationError::Resolution {
                address: address.to_string(),
                reason: "address has no route key".to_string(),
            });
        }

        Ok(ResolvedAddress::new(path).with_query(QueryParams::from_query_string(query)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_plain_path() {
        let resolved = QueryStringResolver.resolve("home").unwrap();
        assert_eq!(resolved, ResolvedAddress::new("home"));
    }

    #[test]
    fn test_resolve_with_query() {
        let resolved = QueryStringResolver.resolve("detail?id=42&from=home").unwrap();
        assert_eq!(resolved.route_key, "detail");
        assert_eq!(resolved.query.get("id"), Some("42"));
        assert_eq!(resolved.query.get("from"), Some("home"));
    }

    #[test]
    fn test_resolve_keeps_path_verbatim() {
        let resolved = QueryStringResolver
            .resolve("/pages/detail/index?id=1")
            .unwrap();
        assert_eq!(resolved.route_key, "/pages/detail/index");
    }

    #[test]
    fn test_resolve_drops_fragment() {
        let resolved = QueryStringResolver.resolve("detail?id=1#top").unwrap();
        assert_eq!(resolved.route_key, "detail");
        assert_eq!(resolved.query.get("id"), Some("1"));

        let resolved = QueryStringResolver.resolve("detail#top").unwrap();
        assert!(resolved.query.is_empty());
    }

    #[test]
    fn test_resolve_trailing_question_mark() {
        let resolved = QueryStringResolver.resolve("detail?").unwrap();
        assert_eq!(resolved.route_key, "detail");
        assert!(resolved.query.is_empty());
    }

    #[test]
    fn test_resolve_empty_route_key_fails() {
        let error = QueryStringResolver.resolve("?id=1").unwrap_err();
        assert!(error.is_resolution());
        assert!(QueryStringResolver.resolve("").is_err());
    }

    #[test]
    fn test_closure_resolver() {
        let upper = |address: &str| -> Result<ResolvedAddress, NavigationError> {
            Ok(ResolvedAddress::new(address.to_uppercase()))
        };
        assert_eq!(upper.resolve("home").unwrap().route_key, "HOME");
    }
}
