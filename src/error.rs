//! Error types for navigation calls and router construction
//!
//! Navigation failures are terminal for the call that produced them: the optional
//! `fail`/`complete` callbacks observe the error first, then it is handed back to the caller.
//! Configuration errors are raised once, while the router is being built.

use std::error::Error as StdError;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

// ============================================================================
// Host Errors
// ============================================================================

/// Error raised by the host navigation framework.
///
/// The wrapped error is shared, so every clone refers to the same instance. The callbacks
/// of a failed navigation and the caller that receives the returned error all see one
/// object, which [`HostError::ptr_eq`] can confirm.
#[derive(Clone, Error)]
#[error("{0}")]
pub struct HostError(Rc<dyn StdError>);

impl HostError {
    /// Wrap an error produced by the host framework
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + 'static,
    {
        Self(Rc::new(error))
    }

    /// Create a host error from a plain message
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(Message(message.into()))
    }

    /// Borrow the underlying host error
    pub fn inner(&self) -> &(dyn StdError + 'static) {
        self.0.as_ref()
    }

    /// Check whether two handles point at the same error instance
    pub fn ptr_eq(&self, other: &HostError) -> bool {
        Rc::as_ptr(&self.0).cast::<()>() == Rc::as_ptr(&other.0).cast::<()>()
    }
}

impl fmt::Debug for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HostError").field(&self.0.to_string()).finish()
    }
}

#[derive(Debug)]
struct Message(String);

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl StdError for Message {}

// ============================================================================
// Navigation Errors
// ============================================================================

/// Errors returned by the navigation operations
#[derive(Debug, Clone, Error)]
pub enum NavigationError {
    /// The address string could not be split into a route key and query
    #[error("cannot resolve address '{address}': {reason}")]
    Resolution { address: String, reason: String },

    /// The host push/replace/navigate primitive raised
    #[error("navigation to '{route_key}' failed: {source}")]
    Host {
        route_key: String,
        #[source]
        source: HostError,
    },

    /// The host go-back primitive raised part way through a multi-step back navigation
    #[error("going back failed at step {step}: {source}")]
    Back {
        step: usize,
        #[source]
        source: HostError,
    },

    /// The shared capability was called before any screen mounted
    #[error("navigation capability is not bound to a mounted screen")]
    NoActiveScreen,
}

impl NavigationError {
    /// The host error behind this failure, if the host raised it
    pub fn host_error(&self) -> Option<&HostError> {
        match self {
            NavigationError::Host { source, .. } | NavigationError::Back { source, .. } => {
                Some(source)
            }
            NavigationError::Resolution { .. } | NavigationError::NoActiveScreen => None,
        }
    }

    /// Check if the address failed to resolve
    pub fn is_resolution(&self) -> bool {
        matches!(self, NavigationError::Resolution { .. })
    }

    /// Check if the host framework rejected the navigation
    pub fn is_host(&self) -> bool {
        matches!(
            self,
            NavigationError::Host { .. } | NavigationError::Back { .. }
        )
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors found while building the navigation tree
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two page entries share a key
    #[error("duplicate page key: '{key}'")]
    DuplicatePageKey { key: String },

    /// Two tab items point at the same page
    #[error("duplicate tab page path: '{path}'")]
    DuplicateTabPath { path: String },

    /// A tab item points at a page that is not in the page list
    #[error("tab page path '{path}' does not match any page")]
    MissingTabPage { path: String },

    /// The host refused to build a container
    #[error("host container build failed: {0}")]
    Host(#[from] HostError),

    /// The JSON app configuration could not be parsed
    #[error("invalid router configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

// ============================================================================
// Tests
// ============================================================================
