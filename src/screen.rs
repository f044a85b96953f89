//! Screens and the screen adapter
//!
//! Application screens implement [`Screen`], a set of optional lifecycle hooks. The router
//! never hands a bare screen to the host: every page is registered as a [`ScreenAdapter`],
//! which the host instantiates into a [`WrappedScreen`] when the page enters a stack.
//!
//! The wrapper adds mini-program behavior around the screen's own hooks:
//!
//! - on mount it installs the screen's [`PageNavigator`] into the shared [`Capability`],
//!   runs `on_mount`, then runs `on_show`
//! - on unmount it runs `on_hide`, then `on_unmount`
//!
//! `on_show` fires on mount only. Returning to a page with back navigation does not fire
//! it again.

use crate::capability::Capability;
use crate::host::HostNavigation;
use crate::navigator::PageNavigator;
use crate::resolver::AddressResolver;
use crate::{debug_log, trace_log};
use std::fmt;
use std::rc::Rc;

/// Lifecycle hooks of an application screen
///
/// Every hook is optional. Mount and show receive the navigator bound to this screen,
/// which stays valid for the screen's whole lifetime.
///
/// # Example
///
/// ```
/// use miniapp_router::{PageNavigator, Screen};
///
/// #[derive(Default)]
/// struct Detail {
///     id: Option<String>,
/// }
///
/// impl Screen for Detail {
///     fn on_mount(&mut self, navigator: &PageNavigator) {
///         self.id = navigator.params().get("id").map(str::to_string);
///     }
/// }
/// ```
pub trait Screen {
    /// The screen was mounted
    fn on_mount(&mut self, _navigator: &PageNavigator) {}

    /// The screen came to the foreground
    fn on_show(&mut self, _navigator: &PageNavigator) {}

    /// The screen is leaving the foreground
    fn on_hide(&mut self) {}

    /// The screen is about to be unmounted
    fn on_unmount(&mut self) {}
}

/// Builds a fresh screen instance
pub type ScreenBuilder = Rc<dyn Fn() -> Box<dyn Screen>>;

// ============================================================================
// PageEntry
// ============================================================================

/// A page key paired with the screen it shows
#[derive(Clone)]
pub struct PageEntry {
    key: String,
    builder: ScreenBuilder,
}

impl PageEntry {
    /// Register `build` under `key`
    ///
    /// # Example
    ///
    /// ```
    /// use miniapp_router::{PageEntry, Screen};
    ///
    /// #[derive(Default)]
    /// struct Home;
    /// impl Screen for Home {}
    ///
    /// let page = PageEntry::new("home", Home::default);
    /// assert_eq!(page.key(), "home");
    /// ```
    pub fn new<S, F>(key: impl Into<String>, build: F) -> Self
    where
        S: Screen + 'static,
        F: Fn() -> S + 'static,
    {
        Self {
            key: key.into(),
            builder: Rc::new(move || Box::new(build()) as Box<dyn Screen>),
        }
    }

    /// Register an already type-erased builder
    pub fn from_builder(key: impl Into<String>, builder: ScreenBuilder) -> Self {
        Self {
            key: key.into(),
            builder,
        }
    }

    /// Page key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Screen builder
    pub fn builder(&self) -> &ScreenBuilder {
        &self.builder
    }
}

impl fmt::Debug for PageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageEntry")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Ordered page list
pub type PageList = Vec<PageEntry>;

// ============================================================================
// ScreenAdapter
// ============================================================================

/// Route configuration value for one page
///
/// Holds everything needed to produce a [`WrappedScreen`] once the host supplies a live
/// navigation handle.
#[derive(Clone)]
pub struct ScreenAdapter {
    page_key: String,
    builder: ScreenBuilder,
    capability: Capability,
    resolver: Rc<dyn AddressResolver>,
}

impl ScreenAdapter {
    /// Wrap a page
    pub fn new(page: &PageEntry, capability: Capability, resolver: Rc<dyn AddressResolver>) -> Self {
        Self {
            page_key: page.key.clone(),
            builder: page.builder.clone(),
            capability,
            resolver,
        }
    }

    /// Key of the wrapped page
    pub fn page_key(&self) -> &str {
        &self.page_key
    }

    /// Build a wrapped screen for a host navigation handle
    ///
    /// Nothing is bound until the screen mounts.
    pub fn instantiate(&self, host: Rc<dyn HostNavigation>) -> WrappedScreen {
        trace_log!("instantiating screen '{}'", self.page_key);
        WrappedScreen {
            navigator: PageNavigator::new(self.page_key.clone(), host, self.resolver.clone()),
            capability: self.capability.clone(),
            inner: (self.builder)(),
            mounted: false,
        }
    }
}

impl fmt::Debug for ScreenAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenAdapter")
            .field("page_key", &self.page_key)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// WrappedScreen
// ============================================================================

/// A live screen with mini-program lifecycle and navigation wiring
pub struct WrappedScreen {
    navigator: PageNavigator,
    capability: Capability,
    inner: Box<dyn Screen>,
    mounted: bool,
}

impl WrappedScreen {
    /// Mount: bind the shared capability, then run `on_mount` and `on_show`
    ///
    /// Mounting an already mounted screen does nothing.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        debug_log!("mounting '{}'", self.navigator.page_key());
        self.capability.install(self.navigator.clone());
        self.inner.on_mount(&self.navigator);
        self.inner.on_show(&self.navigator);
    }

    /// Unmount: run `on_hide`, then `on_unmount`
    ///
    /// The shared capability keeps its binding. Unmounting a screen that is not mounted
    /// does nothing.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;

        debug_log!("unmounting '{}'", self.navigator.page_key());
        self.inner.on_hide();
        self.inner.on_unmount();
    }

    /// Check if the screen is mounted
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Key of the wrapped page
    pub fn page_key(&self) -> &str {
        self.navigator.page_key()
    }

    /// Navigator bound to this screen
    pub fn navigator(&self) -> &PageNavigator {
        &self.navigator
    }

    /// The application screen
    pub fn screen(&self) -> &dyn Screen {
        self.inner.as_ref()
    }

    /// The application screen, mutably
    pub fn screen_mut(&mut self) -> &mut dyn Screen {
        self.inner.as_mut()
    }
}

impl fmt::Debug for WrappedScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrappedScreen")
            .field("page_key", &self.page_key())
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}
