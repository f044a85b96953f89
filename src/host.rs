//! Host navigation framework seam
//!
//! The host framework owns the real navigation tree. This crate only talks to it through
//! two traits: [`HostNavigation`] is the live, per-screen navigation handle used at call
//! time, and [`HostContainers`] turns composed route maps into host containers at build
//! time. [`ContainerDescriptors`] is a ready-made [`HostContainers`] that produces a plain
//! [`ContainerConfig`] tree for hosts that prefer to consume data.

use crate::error::HostError;
use crate::options::{NavigationOptions, TabBarOptions};
use crate::params::QueryParams;
use crate::stack::RouteConfigMap;
use crate::tabs::{TabRouteMap, TabRouteRules};

// ============================================================================
// Navigation State
// ============================================================================

/// One route inside a navigator's route list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// Host-assigned unique key
    pub key: String,
    /// Route key the entry was created for
    pub route_name: String,
    /// Parameters passed when the entry was pushed
    pub params: QueryParams,
}

impl RouteEntry {
    /// Create a route entry without parameters
    pub fn new(key: impl Into<String>, route_name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            route_name: route_name.into(),
            params: QueryParams::new(),
        }
    }

    /// Attach parameters
    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }
}

/// Snapshot of a navigator's state as exposed by the host
///
/// Leaf screens have no route list; stack and tab navigators list their children and
/// point at the active one with `index`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Name of the route this state belongs to
    pub route_name: String,
    /// Parameters of this route
    pub params: QueryParams,
    /// Index of the active child route
    pub index: usize,
    /// Child routes, if this is a navigator
    pub routes: Option<Vec<RouteEntry>>,
}

impl NavigationState {
    /// State of a single screen with no child routes
    pub fn leaf(route_name: impl Into<String>) -> Self {
        Self {
            route_name: route_name.into(),
            ..Self::default()
        }
    }

    /// State of a navigator with an ordered route list
    pub fn navigator(
        route_name: impl Into<String>,
        routes: Vec<RouteEntry>,
        index: usize,
    ) -> Self {
        Self {
            route_name: route_name.into(),
            params: QueryParams::new(),
            index,
            routes: Some(routes),
        }
    }

    /// Route names in stack order, if this state has a route list
    pub fn route_names(&self) -> Option<Vec<String>> {
        self.routes.as_ref().map(|routes| {
            routes
                .iter()
                .map(|route| route.route_name.clone())
                .collect()
        })
    }

    /// The active child route
    pub fn active_route(&self) -> Option<&RouteEntry> {
        self.routes.as_ref()?.get(self.index)
    }
}

// ============================================================================
// Host Traits
// ============================================================================

/// Live navigation handle of one mounted screen
///
/// All calls are synchronous. A call may re-enter this crate before it returns, for
/// example when `push` mounts the next screen, so implementations must not hold borrows
/// of their own state across those callbacks.
pub trait HostNavigation {
    /// Push a new entry for `route_key` onto the current stack
    fn push(&self, route_key: &str, params: &QueryParams) -> Result<(), HostError>;

    /// Replace the current entry with `route_key`
    fn replace(&self, route_key: &str, params: &QueryParams) -> Result<(), HostError>;

    /// Navigate to `route_key` wherever it lives in the tree
    fn navigate(&self, route_key: &str, params: &QueryParams) -> Result<(), HostError>;

    /// Go back one step
    fn go_back(&self) -> Result<(), HostError>;

    /// State of this screen's own route
    fn state(&self) -> NavigationState;

    /// State of the nearest ancestor navigator, `None` at the root
    fn parent_state(&self) -> Option<NavigationState>;
}

/// Host container constructors
///
/// The composers hand their route maps to these constructors and return whatever
/// container type the host uses as the application root.
pub trait HostContainers {
    /// Host container configuration
    type Container;

    /// Build a stack container from ordered routes and merged navigation options
    fn stack_container(
        &self,
        routes: RouteConfigMap,
        navigation_options: NavigationOptions,
    ) -> Result<Self::Container, HostError>;

    /// Build a tab container from one nested container per tab
    fn tab_container(
        &self,
        tabs: TabRouteMap<Self::Container>,
        rules: TabRouteRules,
        options: TabBarOptions,
    ) -> Result<Self::Container, HostError>;
}

// ============================================================================
// Descriptor Containers
// ============================================================================

/// Plain description of a composed navigation tree
#[derive(Debug, Clone)]
pub enum ContainerConfig {
    /// Stack container
    Stack {
        routes: RouteConfigMap,
        navigation_options: NavigationOptions,
    },
    /// Tab container with one nested container per tab
    Tabs {
        tabs: TabRouteMap<ContainerConfig>,
        rules: TabRouteRules,
        options: TabBarOptions,
    },
}

impl ContainerConfig {
    /// Check if this is a stack container
    pub fn is_stack(&self) -> bool {
        matches!(self, ContainerConfig::Stack { .. })
    }

    /// Check if this is a tab container
    pub fn is_tabs(&self) -> bool {
        matches!(self, ContainerConfig::Tabs { .. })
    }

    /// Route keys of this container, in order
    ///
    /// For a tab container these are the tab page paths.
    pub fn route_keys(&self) -> Vec<&str> {
        match self {
            ContainerConfig::Stack { routes, .. } => routes.keys().collect(),
            ContainerConfig::Tabs { tabs, .. } => tabs.iter().map(|(k, _)| k.as_str()).collect(),
        }
    }

    /// Stack routes, if this is a stack container
    pub fn routes(&self) -> Option<&RouteConfigMap> {
        match self {
            ContainerConfig::Stack { routes, .. } => Some(routes),
            ContainerConfig::Tabs { .. } => None,
        }
    }

    /// Merged navigation options, if this is a stack container
    pub fn navigation_options(&self) -> Option<&NavigationOptions> {
        match self {
            ContainerConfig::Stack {
                navigation_options, ..
            } => Some(navigation_options),
            ContainerConfig::Tabs { .. } => None,
        }
    }

    /// Nested container for a tab page path
    pub fn tab(&self, page_path: &str) -> Option<&ContainerConfig> {
        match self {
            ContainerConfig::Tabs { tabs, .. } => tabs
                .iter()
                .find(|(key, _)| key == page_path)
                .map(|(_, container)| container),
            ContainerConfig::Stack { .. } => None,
        }
    }

    /// Tab rules, if this is a tab container
    pub fn tab_rules(&self) -> Option<&TabRouteRules> {
        match self {
            ContainerConfig::Tabs { rules, .. } => Some(rules),
            ContainerConfig::Stack { .. } => None,
        }
    }

    /// Tab bar options, if this is a tab container
    pub fn tab_bar_options(&self) -> Option<&TabBarOptions> {
        match self {
            ContainerConfig::Tabs { options, .. } => Some(options),
            ContainerConfig::Stack { .. } => None,
        }
    }
}

/// [`HostContainers`] implementation producing [`ContainerConfig`] values
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerDescriptors;

impl HostContainers for ContainerDescriptors {
    type Container = ContainerConfig;

    fn stack_container(
        &self,
        routes: RouteConfigMap,
        navigation_options: NavigationOptions,
    ) -> Result<ContainerConfig, HostError> {
        Ok(ContainerConfig::Stack {
            routes,
            navigation_options,
        })
    }

    fn tab_container(
        &self,
        tabs: TabRouteMap<ContainerConfig>,
        rules: TabRouteRules,
        options: TabBarOptions,
    ) -> Result<ContainerConfig, HostError> {
        Ok(ContainerConfig::Tabs {
            tabs,
            rules,
            options,
        })
    }
}
