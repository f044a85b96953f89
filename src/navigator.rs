//! Mini-program navigation operations bound to one screen
//!
//! A [`PageNavigator`] is created for every mounted screen and closes over that screen's
//! live host navigation handle. Its operations return `Result`; the optional mini-program
//! callbacks (`success`, `fail`, `complete`) are layered on top in [`NavigateOptions`], so
//! callers can use either style, or both.

use crate::error::NavigationError;
use crate::host::{HostNavigation, NavigationState};
use crate::params::QueryParams;
use crate::resolver::{AddressResolver, ResolvedAddress};
use crate::{debug_log, trace_log, warn_log};
use std::fmt;
use std::rc::Rc;

/// Called once after a navigation succeeded
pub type SuccessCallback = Box<dyn FnOnce()>;
/// Called once with the error after a navigation failed
pub type FailCallback = Box<dyn FnOnce(&NavigationError)>;
/// Called once after `success` or `fail`, with the error if there was one
pub type CompleteCallback = Box<dyn FnOnce(Option<&NavigationError>)>;

// ============================================================================
// NavigateOptions
// ============================================================================

/// Arguments of `navigateTo`, `redirectTo` and `switchTab`
///
/// # Example
///
/// ```
/// use miniapp_router::NavigateOptions;
///
/// let options = NavigateOptions::new("detail?id=1")
///     .success(|| println!("arrived"))
///     .fail(|error| eprintln!("{error}"));
///
/// assert_eq!(options.url(), "detail?id=1");
/// ```
pub struct NavigateOptions {
    url: String,
    success: Option<SuccessCallback>,
    fail: Option<FailCallback>,
    complete: Option<CompleteCallback>,
}

impl NavigateOptions {
    /// Navigate to `url` without callbacks
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            success: None,
            fail: None,
            complete: None,
        }
    }

    /// Target address
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Set the success callback
    pub fn success<F>(mut self, callback: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        self.success = Some(Box::new(callback));
        self
    }

    /// Set the fail callback
    pub fn fail<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(&NavigationError) + 'static,
    {
        self.fail = Some(Box::new(callback));
        self
    }

    /// Set the complete callback
    pub fn complete<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(Option<&NavigationError>) + 'static,
    {
        self.complete = Some(Box::new(callback));
        self
    }

    /// Run the callbacks for `result` and hand the result back
    ///
    /// Success runs `success` then `complete`. Failure runs `fail` then `complete`, both
    /// with the error, and the same error is returned to the caller afterwards.
    pub(crate) fn settle(self, result: Result<(), NavigationError>) -> Result<(), NavigationError> {
        match &result {
            Ok(()) => {
                if let Some(success) = self.success {
                    success();
                }
                if let Some(complete) = self.complete {
                    complete(None);
                }
            }
            Err(error) => {
                warn_log!("navigation to '{}' failed: {}", self.url, error);
                if let Some(fail) = self.fail {
                    fail(error);
                }
                if let Some(complete) = self.complete {
                    complete(Some(error));
                }
            }
        }
        result
    }
}

impl fmt::Debug for NavigateOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigateOptions")
            .field("url", &self.url)
            .field("success", &self.success.is_some())
            .field("fail", &self.fail.is_some())
            .field("complete", &self.complete.is_some())
            .finish()
    }
}

impl From<&str> for NavigateOptions {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for NavigateOptions {
    fn from(url: String) -> Self {
        Self::new(url)
    }
}

// ============================================================================
// BackOptions
// ============================================================================

/// Arguments of `navigateBack`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackOptions {
    /// Number of steps; zero or negative means no steps
    pub delta: i32,
}

impl BackOptions {
    /// One step back
    pub fn new() -> Self {
        Self { delta: 1 }
    }

    /// Go back `delta` steps
    pub fn delta(delta: i32) -> Self {
        Self { delta }
    }
}

impl Default for BackOptions {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// PageNavigator
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavigationKind {
    Push,
    Replace,
    Navigate,
}

impl NavigationKind {
    #[cfg_attr(not(any(feature = "log", feature = "tracing")), allow(dead_code))]
    fn api_name(self) -> &'static str {
        match self {
            NavigationKind::Push => "navigateTo",
            NavigationKind::Replace => "redirectTo",
            NavigationKind::Navigate => "switchTab",
        }
    }
}

/// Navigation operations bound to one screen's host navigation handle
///
/// Cloning is cheap and every clone drives the same screen.
#[derive(Clone)]
pub struct PageNavigator {
    page_key: String,
    host: Rc<dyn HostNavigation>,
    resolver: Rc<dyn AddressResolver>,
}

impl PageNavigator {
    /// Bind navigation operations to a screen
    pub fn new(
        page_key: impl Into<String>,
        host: Rc<dyn HostNavigation>,
        resolver: Rc<dyn AddressResolver>,
    ) -> Self {
        Self {
            page_key: page_key.into(),
            host,
            resolver,
        }
    }

    /// Key of the page this navigator is bound to
    pub fn page_key(&self) -> &str {
        &self.page_key
    }

    /// Push the page at `url` onto the current stack
    pub fn navigate_to(&self, options: impl Into<NavigateOptions>) -> Result<(), NavigationError> {
        self.run(NavigationKind::Push, options.into())
    }

    /// Replace the current page with the page at `url`
    pub fn redirect_to(&self, options: impl Into<NavigateOptions>) -> Result<(), NavigationError> {
        self.run(NavigationKind::Replace, options.into())
    }

    /// Navigate to the tab page at `url`
    pub fn switch_tab(&self, options: impl Into<NavigateOptions>) -> Result<(), NavigationError> {
        self.run(NavigationKind::Navigate, options.into())
    }

    /// Go back `delta` steps, one host call per step
    ///
    /// Stops at the first host error and returns it; the steps already taken stay taken.
    pub fn navigate_back(&self, options: BackOptions) -> Result<(), NavigationError> {
        let steps = usize::try_from(options.delta).unwrap_or(0);
        debug_log!("navigateBack from '{}' delta={}", self.page_key, options.delta);

        for step in 1..=steps {
            self.host
                .go_back()
                .map_err(|source| NavigationError::Back { step, source })?;
        }
        Ok(())
    }

    /// Route names of the enclosing navigator, bottom of the stack first
    ///
    /// Empty when the screen has no ancestor navigator with a route list.
    pub fn get_current_pages(&self) -> Vec<String> {
        self.host
            .parent_state()
            .and_then(|state| state.route_names())
            .unwrap_or_default()
    }

    /// State of the bound screen's own route
    pub fn state(&self) -> NavigationState {
        self.host.state()
    }

    /// Parameters the bound screen was opened with
    pub fn params(&self) -> QueryParams {
        self.host.state().params
    }

    /// Resolve and dispatch without touching callbacks
    fn dispatch(&self, kind: NavigationKind, url: &str) -> Result<ResolvedAddress, NavigationError> {
        let resolved = self.resolver.resolve(url)?;
        debug_log!(
            "{} from '{}': route='{}' query='{}'",
            kind.api_name(),
            self.page_key,
            resolved.route_key,
            resolved.query.to_query_string()
        );

        let outcome = match kind {
            NavigationKind::Push => self.host.push(&resolved.route_key, &resolved.query),
            NavigationKind::Replace => self.host.replace(&resolved.route_key, &resolved.query),
            NavigationKind::Navigate => self.host.navigate(&resolved.route_key, &resolved.query),
        };

        match outcome {
            Ok(()) => Ok(resolved),
            Err(source) => Err(NavigationError::Host {
                route_key: resolved.route_key,
                source,
            }),
        }
    }

    #[cfg_attr(not(any(feature = "log", feature = "tracing")), allow(unused_variables))]
    fn run(&self, kind: NavigationKind, options: NavigateOptions) -> Result<(), NavigationError> {
        let result = self.dispatch(kind, options.url()).map(|resolved| {
            trace_log!("{} reached '{}'", kind.api_name(), resolved.route_key);
        });
        options.settle(result)
    }
}

impl fmt::Debug for PageNavigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageNavigator")
            .field("page_key", &self.page_key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::HostError;
    use crate::host::RouteEntry;
    use crate::resolver::QueryStringResolver;
    use std::cell::{Cell, RefCell};

    /// Host double that records every call
    #[derive(Default)]
    pub(crate) struct RecordingHost {
        pub calls: RefCell<Vec<String>>,
        pub fail_with: RefCell<Option<HostError>>,
        pub back_calls: Cell<usize>,
        pub parent: RefCell<Option<NavigationState>>,
    }

    impl RecordingHost {
        fn record(&self, kind: &str, route_key: &str, params: &QueryParams) -> Result<(), HostError> {
            self.calls
                .borrow_mut()
                .push(format!("{kind} {route_key}?{}", params.to_query_string()));
            match self.fail_with.borrow().as_ref() {
                Some(error) => Err(error.clone()),
                None => Ok(()),
            }
        }
    }

    impl HostNavigation for RecordingHost {
        fn push(&self, route_key: &str, params: &QueryParams) -> Result<(), HostError> {
            self.record("push", route_key, params)
        }

        fn replace(&self, route_key: &str, params: &QueryParams) -> Result<(), HostError> {
            self.record("replace", route_key, params)
        }

        fn navigate(&self, route_key: &str, params: &QueryParams) -> Result<(), HostError> {
            self.record("navigate", route_key, params)
        }

        fn go_back(&self) -> Result<(), HostError> {
            self.back_calls.set(self.back_calls.get() + 1);
            Ok(())
        }

        fn state(&self) -> NavigationState {
            NavigationState::leaf("home")
        }

        fn parent_state(&self) -> Option<NavigationState> {
            self.parent.borrow().clone()
        }
    }

    fn navigator(host: &Rc<RecordingHost>) -> PageNavigator {
        PageNavigator::new("home", host.clone(), Rc::new(QueryStringResolver))
    }

    fn event_log() -> Rc<RefCell<Vec<String>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn test_navigate_to_pushes_resolved_route() {
        let host = Rc::new(RecordingHost::default());
        navigator(&host).navigate_to("detail?id=42").unwrap();

        assert_eq!(*host.calls.borrow(), vec!["push detail?id=42"]);
    }

    #[test]
    fn test_each_operation_uses_its_host_primitive() {
        let host = Rc::new(RecordingHost::default());
        let nav = navigator(&host);

        nav.redirect_to("login").unwrap();
        nav.switch_tab("cart").unwrap();

        assert_eq!(*host.calls.borrow(), vec!["replace login?", "navigate cart?"]);
    }

    #[test]
    fn test_success_then_complete() {
        let host = Rc::new(RecordingHost::default());
        let events = event_log();
        let (on_success, on_complete) = (events.clone(), events.clone());

        navigator(&host)
            .navigate_to(
                NavigateOptions::new("detail")
                    .success(move || on_success.borrow_mut().push("success".into()))
                    .fail(|_| panic!("fail must not run"))
                    .complete(move |error| {
                        assert!(error.is_none());
                        on_complete.borrow_mut().push("complete".into());
                    }),
            )
            .unwrap();

        assert_eq!(*events.borrow(), vec!["success", "complete"]);
    }

    #[test]
    fn test_redirect_and_switch_tab_run_success_then_complete() {
        type Operation = fn(&PageNavigator, NavigateOptions) -> Result<(), NavigationError>;
        let operations: [(&str, Operation); 2] = [
            ("replace login?from=cart", |nav, options| nav.redirect_to(options)),
            ("navigate cart?", |nav, options| nav.switch_tab(options)),
        ];

        for (expected_call, operation) in operations {
            let host = Rc::new(RecordingHost::default());
            let events = event_log();
            let (on_success, on_complete) = (events.clone(), events.clone());
            let url = expected_call.split_once(' ').unwrap().1.trim_end_matches('?');

            operation(
                &navigator(&host),
                NavigateOptions::new(url)
                    .success(move || on_success.borrow_mut().push("success".into()))
                    .fail(|_| panic!("fail must not run"))
                    .complete(move |error| {
                        assert!(error.is_none());
                        on_complete.borrow_mut().push("complete".into());
                    }),
            )
            .unwrap();

            assert_eq!(*host.calls.borrow(), vec![expected_call]);
            assert_eq!(*events.borrow(), vec!["success", "complete"]);
        }
    }

    #[test]
    fn test_fail_then_complete_then_error_returned() {
        let host = Rc::new(RecordingHost::default());
        let host_error = HostError::msg("no route named missing");
        *host.fail_with.borrow_mut() = Some(host_error.clone());

        let events = event_log();
        let (on_fail, on_complete) = (events.clone(), events.clone());
        let seen_by_fail = Rc::new(RefCell::new(None));
        let seen = seen_by_fail.clone();

        let error = navigator(&host)
            .redirect_to(
                NavigateOptions::new("missing")
                    .success(|| panic!("success must not run"))
                    .fail(move |error| {
                        *seen.borrow_mut() = error.host_error().cloned();
                        on_fail.borrow_mut().push("fail".into());
                    })
                    .complete(move |error| {
                        assert!(error.is_some());
                        on_complete.borrow_mut().push("complete".into());
                    }),
            )
            .unwrap_err();

        assert_eq!(*events.borrow(), vec!["fail", "complete"]);
        assert!(error.host_error().unwrap().ptr_eq(&host_error));
        assert!(seen_by_fail.borrow().as_ref().unwrap().ptr_eq(&host_error));
    }

    #[test]
    fn test_resolution_error_runs_callbacks() {
        let host = Rc::new(RecordingHost::default());
        let failed = Rc::new(Cell::new(false));
        let flag = failed.clone();

        let error = navigator(&host)
            .switch_tab(NavigateOptions::new("?x=1").fail(move |_| flag.set(true)))
            .unwrap_err();

        assert!(error.is_resolution());
        assert!(failed.get());
        assert!(host.calls.borrow().is_empty());
    }

    #[test]
    fn test_navigate_back_counts() {
        let host = Rc::new(RecordingHost::default());
        let nav = navigator(&host);

        nav.navigate_back(BackOptions::delta(3)).unwrap();
        assert_eq!(host.back_calls.get(), 3);

        nav.navigate_back(BackOptions::default()).unwrap();
        assert_eq!(host.back_calls.get(), 4);

        nav.navigate_back(BackOptions::delta(0)).unwrap();
        nav.navigate_back(BackOptions::delta(-2)).unwrap();
        assert_eq!(host.back_calls.get(), 4);
    }

    #[test]
    fn test_get_current_pages() {
        let host = Rc::new(RecordingHost::default());
        let nav = navigator(&host);

        assert!(nav.get_current_pages().is_empty());

        *host.parent.borrow_mut() = Some(NavigationState::leaf("root"));
        assert!(nav.get_current_pages().is_empty());

        *host.parent.borrow_mut() = Some(NavigationState::navigator(
            "stack",
            vec![RouteEntry::new("a", "home"), RouteEntry::new("b", "detail")],
            1,
        ));
        assert_eq!(nav.get_current_pages(), vec!["home", "detail"]);
    }
}
