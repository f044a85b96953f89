//! # Mini-App Router
//!
//! Runs screens written against the mini-program page-stack API (`navigateTo`,
//! `redirectTo`, `navigateBack`, `switchTab`, `getCurrentPages`) on top of a host
//! navigation framework that models navigation as a tree of stack and tab containers.
//!
//! - **Router composition** - A page list plus an optional tab bar becomes one stack
//!   container, or a tab container holding one independent stack per tab
//! - **Screen wrapping** - Each screen gets mini-program lifecycle (`on_show` on mount,
//!   `on_hide` before unmount) and a navigator bound to its own host context
//! - **Shared capability** - Screen code can navigate through one shared [`Capability`]
//!   that always follows the most recently mounted screen
//! - **Callbacks or results** - Navigation returns `Result` and also runs optional
//!   `success` / `fail` / `complete` callbacks in mini-program order
//!
//! # Quick Start
//!
//! ```
//! use miniapp_router::*;
//!
//! struct Home;
//! impl Screen for Home {}
//!
//! struct Cart;
//! impl Screen for Cart {}
//!
//! struct Detail;
//! impl Screen for Detail {}
//!
//! let pages = vec![
//!     PageEntry::new("home", || Home),
//!     PageEntry::new("cart", || Cart),
//!     PageEntry::new("detail", || Detail),
//! ];
//!
//! let options = RouterOptions::new().with_tab_bar(TabBarConfig::new(vec![
//!     TabItem::new("home", "Home").icons("home.png", "home-active.png"),
//!     TabItem::new("cart", "Cart").icons("cart.png", "cart-active.png"),
//! ]));
//!
//! let capability = Capability::new();
//! let root = init_router(&pages, &capability, &options, &ContainerDescriptors).unwrap();
//!
//! assert_eq!(root.route_keys(), vec!["home", "cart"]);
//! assert_eq!(root.tab("cart").unwrap().route_keys(), vec!["cart", "detail"]);
//! ```
//!
//! # Navigation
//!
//! Once the host mounts a screen, the capability drives it:
//!
//! ```ignore
//! capability.navigate_to("detail?id=42")?;
//! capability.redirect_to(NavigateOptions::new("login").fail(|e| eprintln!("{e}")))?;
//! capability.navigate_back(BackOptions::delta(2))?;
//! capability.switch_tab("cart")?;
//! let pages = capability.get_current_pages();
//! ```
//!
//! # Feature Flags
//!
//! - `log` (default) - Uses the standard `log` crate for logging
//! - `tracing` - Uses the `tracing` crate for structured logging (mutually exclusive with `log`)

#![cfg_attr(docsrs, feature(doc_cfg))]
// Lints are configured in Cargo.toml [lints] section

// Logging abstraction
pub mod logging;

// Error handling
pub mod error;

// Addresses
pub mod params;
pub mod resolver;

// Host framework seam
pub mod host;

// Configuration
pub mod options;

// Screens and navigation
pub mod capability;
pub mod navigator;
pub mod screen;

// Composition
pub mod router;
pub mod stack;
pub mod tabs;

// Re-export main types for convenient access
pub use capability::Capability;
pub use error::{ConfigError, HostError, NavigationError};
pub use host::{
    ContainerConfig, ContainerDescriptors, HostContainers, HostNavigation, NavigationState,
    RouteEntry,
};
pub use navigator::{
    BackOptions, CompleteCallback, FailCallback, NavigateOptions, PageNavigator, SuccessCallback,
};
pub use options::{
    BackBehavior, NavigationOptions, RouterOptions, TabBarConfig, TabBarOptions, TabBarPosition,
    TabItem,
};
pub use params::QueryParams;
pub use resolver::{AddressResolver, QueryStringResolver, ResolvedAddress};
pub use router::{init_router, init_router_with_resolver, validate};
pub use screen::{PageEntry, PageList, Screen, ScreenAdapter, ScreenBuilder, WrappedScreen};
pub use stack::{RouteConfigMap, StackComposer};
pub use tabs::{
    compose_tabs, partition_pages, TabIcon, TabPages, TabRouteMap, TabRouteRules,
    TabScreenOptions, TAB_ICON_SIZE,
};
