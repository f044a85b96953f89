//! Tab composition
//!
//! Each tab gets its own stack. A tab's stack holds every page except the other tabs'
//! pages, so switching tabs never drops the user into another tab's history. The tab
//! container itself is described by [`TabRouteRules`] (icon, label and visibility per
//! active route) and [`TabBarOptions`] (colors, position, back behavior).

use crate::error::HostError;
use crate::host::{HostContainers, NavigationState};
use crate::options::{TabBarConfig, TabBarOptions, TabItem};
use crate::screen::PageEntry;
use crate::stack::StackComposer;
use crate::trace_log;

/// Ordered map from tab page path to that tab's nested container
pub type TabRouteMap<C> = Vec<(String, C)>;

/// Display size of tab icons, in logical pixels
pub const TAB_ICON_SIZE: u32 = 30;

// ============================================================================
// Partitioning
// ============================================================================

/// Pages that make up one tab's stack
#[derive(Debug, Clone)]
pub struct TabPages<'a> {
    /// The tab
    pub tab: &'a TabItem,
    /// Pages of the tab's stack, in page list order
    pub pages: Vec<&'a PageEntry>,
}

impl TabPages<'_> {
    /// Page keys of the tab's stack
    pub fn page_keys(&self) -> Vec<&str> {
        self.pages.iter().map(|page| page.key()).collect()
    }
}

/// Split the page list into one page list per tab
///
/// For every tab the list keeps all pages except those that are another tab's page.
///
/// # Example
///
/// ```
/// use miniapp_router::{partition_pages, PageEntry, Screen, TabBarConfig, TabItem};
///
/// struct Page;
/// impl Screen for Page {}
///
/// let pages = vec![
///     PageEntry::new("home", || Page),
///     PageEntry::new("cart", || Page),
///     PageEntry::new("detail", || Page),
/// ];
/// let tab_bar = TabBarConfig::new(vec![TabItem::new("home", "Home"), TabItem::new("cart", "Cart")]);
///
/// let tabs = partition_pages(&pages, &tab_bar);
/// assert_eq!(tabs[0].page_keys(), vec!["home", "detail"]);
/// assert_eq!(tabs[1].page_keys(), vec!["cart", "detail"]);
/// ```
pub fn partition_pages<'a>(pages: &'a [PageEntry], tab_bar: &'a TabBarConfig) -> Vec<TabPages<'a>> {
    let tab_paths = tab_bar.tab_paths();

    tab_bar
        .list
        .iter()
        .map(|tab| {
            let excluded: Vec<&str> = tab_paths
                .iter()
                .copied()
                .filter(|path| *path != tab.page_path)
                .collect();
            let pages: Vec<&PageEntry> = pages
                .iter()
                .filter(|page| !excluded.contains(&page.key()))
                .collect();

            trace_log!(
                "tab '{}' stack: [{}]",
                tab.page_path,
                pages.iter().map(|page| page.key()).collect::<Vec<_>>().join(", ")
            );
            TabPages { tab, pages }
        })
        .collect()
}

// ============================================================================
// Tab Route Rules
// ============================================================================

/// Icon to render for a tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabIcon {
    /// Asset reference
    pub source: String,
    pub width: u32,
    pub height: u32,
}

impl TabIcon {
    fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            width: TAB_ICON_SIZE,
            height: TAB_ICON_SIZE,
        }
    }
}

/// Per-route tab options evaluated by the host on every render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabScreenOptions {
    pub icon: Option<TabIcon>,
    pub label: Option<String>,
    pub visible: bool,
}

/// Icon, label and visibility rules for the tab container
///
/// Lookups are by the tab's route name, which is its page path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRouteRules {
    items: Vec<TabItem>,
}

impl TabRouteRules {
    /// Rules for the given tabs
    pub fn new(items: Vec<TabItem>) -> Self {
        Self { items }
    }

    /// Tab item for a route name
    pub fn item(&self, route_name: &str) -> Option<&TabItem> {
        self.items.iter().find(|item| item.page_path == route_name)
    }

    /// Selected icon when focused, plain icon otherwise
    pub fn icon(&self, route_name: &str, focused: bool) -> Option<TabIcon> {
        self.item(route_name).map(|item| {
            TabIcon::new(if focused {
                &item.selected_icon_path
            } else {
                &item.icon_path
            })
        })
    }

    /// Tab label
    pub fn label(&self, route_name: &str) -> Option<&str> {
        self.item(route_name).map(|item| item.text.as_str())
    }

    /// The tab bar shows only while the tab's own stack is at its first page
    pub fn visible(&self, tab_state: &NavigationState) -> bool {
        tab_state.index == 0
    }

    /// All options for one tab route
    pub fn screen_options(&self, tab_state: &NavigationState, focused: bool) -> TabScreenOptions {
        TabScreenOptions {
            icon: self.icon(&tab_state.route_name, focused),
            label: self.label(&tab_state.route_name).map(str::to_string),
            visible: self.visible(tab_state),
        }
    }
}

// ============================================================================
// Composition
// ============================================================================

/// Build the tab container: one independent stack per tab
pub fn compose_tabs<H: HostContainers>(
    pages: &[PageEntry],
    tab_bar: &TabBarConfig,
    stacks: &StackComposer<'_, H>,
) -> Result<H::Container, HostError> {
    let mut tabs: TabRouteMap<H::Container> = Vec::with_capacity(tab_bar.list.len());
    for tab_pages in partition_pages(pages, tab_bar) {
        let container = stacks.compose(tab_pages.pages)?;
        tabs.push((tab_pages.tab.page_path.clone(), container));
    }

    stacks.host().tab_container(
        tabs,
        TabRouteRules::new(tab_bar.list.clone()),
        TabBarOptions::from(tab_bar),
    )
}
