//! Shared navigation capability
//!
//! Screen-level code calls `navigate_to`, `redirect_to`, `navigate_back`, `switch_tab`
//! and `get_current_pages` on one shared [`Capability`] without knowing which screen it
//! runs in. Every time a wrapped screen mounts it installs its own [`PageNavigator`] here,
//! so the capability always drives the most recently mounted screen.
//!
//! This is a single slot, not one per screen. When two screens mount in the same tick the
//! later mount wins, and a navigation call that mounts another screen re-targets the
//! capability before the call returns. Screens that need a stable binding should use the
//! navigator passed to their lifecycle hooks instead.
//!
//! The slot is `Rc`-based: navigation runs on the UI thread only.

use crate::error::NavigationError;
use crate::navigator::{BackOptions, NavigateOptions, PageNavigator};
use crate::trace_log;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared slot holding the navigator of the most recently mounted screen
///
/// Clones share the slot.
///
/// # Example
///
/// ```
/// use miniapp_router::{BackOptions, Capability};
///
/// let capability = Capability::new();
/// assert!(!capability.is_bound());
///
/// // Nothing has mounted yet: navigation reports it, page enumeration is empty.
/// assert!(capability.navigate_to("detail").is_err());
/// assert!(capability.get_current_pages().is_empty());
/// ```
#[derive(Clone, Default)]
pub struct Capability {
    slot: Rc<RefCell<Option<PageNavigator>>>,
}

impl Capability {
    /// Create an unbound capability
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebind all five operations to `navigator`
    pub fn install(&self, navigator: PageNavigator) {
        trace_log!("navigation capability bound to '{}'", navigator.page_key());
        *self.slot.borrow_mut() = Some(navigator);
    }

    /// Check if any screen has mounted yet
    pub fn is_bound(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Page key of the screen the capability currently drives
    pub fn bound_page(&self) -> Option<String> {
        self.slot
            .borrow()
            .as_ref()
            .map(|navigator| navigator.page_key().to_string())
    }

    /// Mini-program `navigateTo`
    pub fn navigate_to(&self, options: impl Into<NavigateOptions>) -> Result<(), NavigationError> {
        match self.current() {
            Ok(navigator) => navigator.navigate_to(options),
            Err(error) => options.into().settle(Err(error)),
        }
    }

    /// Mini-program `redirectTo`
    pub fn redirect_to(&self, options: impl Into<NavigateOptions>) -> Result<(), NavigationError> {
        match self.current() {
            Ok(navigator) => navigator.redirect_to(options),
            Err(error) => options.into().settle(Err(error)),
        }
    }

    /// Mini-program `switchTab`
    pub fn switch_tab(&self, options: impl Into<NavigateOptions>) -> Result<(), NavigationError> {
        match self.current() {
            Ok(navigator) => navigator.switch_tab(options),
            Err(error) => options.into().settle(Err(error)),
        }
    }

    /// Mini-program `navigateBack`
    pub fn navigate_back(&self, options: BackOptions) -> Result<(), NavigationError> {
        self.current()?.navigate_back(options)
    }

    /// Mini-program `getCurrentPages`, as route names
    ///
    /// Empty while nothing is bound.
    pub fn get_current_pages(&self) -> Vec<String> {
        self.current()
            .map(|navigator| navigator.get_current_pages())
            .unwrap_or_default()
    }

    // The borrow ends here so host calls can mount screens that reinstall the slot.
    fn current(&self) -> Result<PageNavigator, NavigationError> {
        self.slot
            .borrow()
            .clone()
            .ok_or(NavigationError::NoActiveScreen)
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capability")
            .field("bound_page", &self.bound_page())
            .finish()
    }
}
