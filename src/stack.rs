//! Stack composition
//!
//! Turns an ordered page list into one host stack container whose routes are
//! [`ScreenAdapter`]s and whose display options are the built-in defaults overlaid with
//! the caller's options.

use crate::capability::Capability;
use crate::error::HostError;
use crate::host::HostContainers;
use crate::options::NavigationOptions;
use crate::resolver::AddressResolver;
use crate::screen::{PageEntry, ScreenAdapter};
use crate::trace_log;
use std::rc::Rc;

// ============================================================================
// RouteConfigMap
// ============================================================================

/// Ordered map from page key to wrapped screen
///
/// Keys keep their first insertion position. Inserting an existing key replaces its
/// screen in place; the router rejects duplicate page keys before it gets here.
#[derive(Debug, Clone, Default)]
pub struct RouteConfigMap {
    entries: Vec<(String, ScreenAdapter)>,
}

impl RouteConfigMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a route, returning the screen it replaced
    pub fn insert(&mut self, key: impl Into<String>, screen: ScreenAdapter) -> Option<ScreenAdapter> {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, screen)),
            None => {
                self.entries.push((key, screen));
                None
            }
        }
    }

    /// Look up a route
    pub fn get(&self, key: &str) -> Option<&ScreenAdapter> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, screen)| screen)
    }

    /// Check if a route exists
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Route keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Routes in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScreenAdapter)> {
        self.entries.iter().map(|(key, screen)| (key.as_str(), screen))
    }

    /// Number of routes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no routes
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// StackComposer
// ============================================================================

/// Builds stack containers that share one capability, resolver and option set
pub struct StackComposer<'a, H: HostContainers> {
    host: &'a H,
    capability: Capability,
    resolver: Rc<dyn AddressResolver>,
    navigation_options: NavigationOptions,
}

impl<'a, H: HostContainers> StackComposer<'a, H> {
    /// Create a composer; `navigation_options` are merged over the defaults once here
    pub fn new(
        host: &'a H,
        capability: &Capability,
        resolver: Rc<dyn AddressResolver>,
        navigation_options: &NavigationOptions,
    ) -> Self {
        Self {
            host,
            capability: capability.clone(),
            resolver,
            navigation_options: navigation_options.merged_over_defaults(),
        }
    }

    /// Merged display options applied to every stack
    pub fn navigation_options(&self) -> &NavigationOptions {
        &self.navigation_options
    }

    /// Host the containers are built with
    pub fn host(&self) -> &'a H {
        self.host
    }

    /// Wrap every page, in order
    pub fn route_config<'p, I>(&self, pages: I) -> RouteConfigMap
    where
        I: IntoIterator<Item = &'p PageEntry>,
    {
        let mut routes = RouteConfigMap::new();
        for page in pages {
            let adapter = ScreenAdapter::new(page, self.capability.clone(), self.resolver.clone());
            routes.insert(page.key(), adapter);
        }
        routes
    }

    /// Build one host stack container for `pages`
    pub fn compose<'p, I>(&self, pages: I) -> Result<H::Container, HostError>
    where
        I: IntoIterator<Item = &'p PageEntry>,
    {
        let routes = self.route_config(pages);
        trace_log!(
            "composing stack with routes [{}]",
            routes.keys().collect::<Vec<_>>().join(", ")
        );
        self.host
            .stack_container(routes, self.navigation_options.clone())
    }
}
