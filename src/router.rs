//! Router entry point
//!
//! Validates the page list against the tab bar, then builds either a tab container (when
//! a tab bar with at least one tab is configured) or a single stack container.

use crate::capability::Capability;
use crate::error::ConfigError;
use crate::host::HostContainers;
use crate::options::{RouterOptions, TabBarConfig};
use crate::resolver::{AddressResolver, QueryStringResolver};
use crate::screen::PageEntry;
use crate::stack::StackComposer;
use crate::tabs::compose_tabs;
use crate::{error_log, info_log};
use std::collections::HashSet;
use std::rc::Rc;

/// Build the root navigation container
///
/// Every page is wrapped so that mounting it binds `capability`. Addresses passed to the
/// navigation operations are resolved with [`QueryStringResolver`].
///
/// # Example
///
/// ```
/// use miniapp_router::{init_router, Capability, ContainerDescriptors, PageEntry, RouterOptions, Screen};
///
/// struct Page;
/// impl Screen for Page {}
///
/// let pages = vec![PageEntry::new("home", || Page), PageEntry::new("detail", || Page)];
/// let root = init_router(&pages, &Capability::new(), &RouterOptions::new(), &ContainerDescriptors).unwrap();
///
/// assert!(root.is_stack());
/// assert_eq!(root.route_keys(), vec!["home", "detail"]);
/// ```
pub fn init_router<H: HostContainers>(
    pages: &[PageEntry],
    capability: &Capability,
    options: &RouterOptions,
    host: &H,
) -> Result<H::Container, ConfigError> {
    init_router_with_resolver(pages, capability, options, host, Rc::new(QueryStringResolver))
}

/// [`init_router`] with a custom address resolver
pub fn init_router_with_resolver<H: HostContainers>(
    pages: &[PageEntry],
    capability: &Capability,
    options: &RouterOptions,
    host: &H,
    resolver: Rc<dyn AddressResolver>,
) -> Result<H::Container, ConfigError> {
    if let Err(error) = validate(pages, options.active_tab_bar()) {
        error_log!("router configuration rejected: {}", error);
        return Err(error);
    }

    let stacks = StackComposer::new(host, capability, resolver, &options.navigation_options);

    let container = match options.active_tab_bar() {
        Some(tab_bar) => {
            info_log!(
                "building tab router: {} tabs over {} pages",
                tab_bar.list.len(),
                pages.len()
            );
            compose_tabs(pages, tab_bar, &stacks)?
        }
        None => {
            info_log!("building stack router over {} pages", pages.len());
            stacks.compose(pages)?
        }
    };

    Ok(container)
}

/// Check page keys and tab paths before anything is built
///
/// Rejects duplicate page keys, duplicate tab paths and tabs whose page is missing.
pub fn validate(pages: &[PageEntry], tab_bar: Option<&TabBarConfig>) -> Result<(), ConfigError> {
    let mut keys = HashSet::with_capacity(pages.len());
    for page in pages {
        if !keys.insert(page.key()) {
            return Err(ConfigError::DuplicatePageKey {
                key: page.key().to_string(),
            });
        }
    }

    let Some(tab_bar) = tab_bar else {
        return Ok(());
    };

    let mut tab_paths = HashSet::with_capacity(tab_bar.list.len());
    for item in &tab_bar.list {
        let path = item.page_path.as_str();
        if !tab_paths.insert(path) {
            return Err(ConfigError::DuplicateTabPath {
                path: path.to_string(),
            });
        }
        if !keys.contains(path) {
            return Err(ConfigError::MissingTabPage {
                path: path.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ContainerDescriptors;
    use crate::options::{NavigationOptions, TabItem};
    use crate::screen::Screen;

    struct Page;

    impl Screen for Page {}

    fn pages(keys: &[&str]) -> Vec<PageEntry> {
        keys.iter().map(|key| PageEntry::new(*key, || Page)).collect()
    }

    fn tabs(paths: &[&str]) -> TabBarConfig {
        TabBarConfig::new(paths.iter().map(|path| TabItem::new(*path, *path)).collect())
    }

    #[test]
    fn test_stack_mode_without_tab_bar() {
        let root = init_router(
            &pages(&["home", "detail", "settings"]),
            &Capability::new(),
            &RouterOptions::new(),
            &ContainerDescriptors,
        )
        .unwrap();

        assert!(root.is_stack());
        assert_eq!(root.route_keys(), vec!["home", "detail", "settings"]);
        assert_eq!(
            root.navigation_options().unwrap().header_background(),
            Some("grey")
        );
    }

    #[test]
    fn test_empty_tab_list_falls_back_to_stack() {
        let options = RouterOptions::new().with_tab_bar(TabBarConfig::default());
        let root = init_router(
            &pages(&["home"]),
            &Capability::new(),
            &options,
            &ContainerDescriptors,
        )
        .unwrap();

        assert!(root.is_stack());
    }

    #[test]
    fn test_tab_mode_with_tab_bar() {
        let options = RouterOptions::new()
            .with_navigation_options(NavigationOptions::new().with("headerTintColor", "red"))
            .with_tab_bar(tabs(&["home", "cart"]));
        let root = init_router(
            &pages(&["home", "cart", "detail"]),
            &Capability::new(),
            &options,
            &ContainerDescriptors,
        )
        .unwrap();

        assert!(root.is_tabs());
        let home = root.tab("home").unwrap();
        assert_eq!(home.route_keys(), vec!["home", "detail"]);
        assert_eq!(
            home.navigation_options().unwrap().header_tint_color(),
            Some("red")
        );
    }

    #[test]
    fn test_duplicate_page_key_rejected() {
        let error = validate(&pages(&["home", "detail", "home"]), None).unwrap_err();
        assert!(matches!(error, ConfigError::DuplicatePageKey { key } if key == "home"));
    }

    #[test]
    fn test_missing_tab_page_rejected() {
        let error = init_router(
            &pages(&["home"]),
            &Capability::new(),
            &RouterOptions::new().with_tab_bar(tabs(&["home", "cart"])),
            &ContainerDescriptors,
        )
        .unwrap_err();

        assert!(matches!(error, ConfigError::MissingTabPage { path } if path == "cart"));
    }

    #[test]
    fn test_duplicate_tab_path_rejected() {
        let error = validate(&pages(&["home"]), Some(&tabs(&["home", "home"]))).unwrap_err();
        assert!(matches!(error, ConfigError::DuplicateTabPath { path } if path == "home"));
    }

    #[test]
    fn test_valid_configuration_passes() {
        assert!(validate(&pages(&["home", "cart"]), Some(&tabs(&["cart"]))).is_ok());
        assert!(validate(&[], None).is_ok());
    }
}
