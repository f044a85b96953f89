//! Logging abstraction layer
//!
//! Navigation calls, page partitioning and router decisions are logged through these
//! macros so the crate works with either the `log` or the `tracing` ecosystem.
//!
//! # Features
//!
//! - `log` (default) - Uses the standard `log` crate
//! - `tracing` - Uses the `tracing` crate for structured logging
//!
//! Choose one feature at compile time. They are mutually exclusive.
//!
//! Every record is emitted under the [`LOG_TARGET`] target, so one filter directive
//! (`RUST_LOG=miniapp_router=debug`) covers the whole router whichever module logged it.
//!
//! # Usage
//!
//! ```ignore
//! use miniapp_router::{debug_log, trace_log};
//!
//! trace_log!("tab '{}' keeps {} pages", tab, pages.len());
//! debug_log!("navigateTo route='{}'", route_key);
//! ```

/// Target attached to every record emitted by this crate
pub const LOG_TARGET: &str = "miniapp_router";

/// Forward one record to whichever logging backend is enabled
#[doc(hidden)]
#[macro_export]
macro_rules! __router_log {
    ($level:ident, $($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::$level!(target: "miniapp_router", $($arg)*);
        #[cfg(feature = "log")]
        ::log::$level!(target: $crate::logging::LOG_TARGET, $($arg)*);
    };
}

/// Trace-level logging
///
/// Used for per-page composition detail.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => { $crate::__router_log!(trace, $($arg)*) };
}

/// Debug-level logging
///
/// Every resolved navigation request goes through here.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => { $crate::__router_log!(debug, $($arg)*) };
}

/// Info-level logging
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => { $crate::__router_log!(info, $($arg)*) };
}

/// Warn-level logging
///
/// Failed navigations are reported here before the error reaches the caller.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => { $crate::__router_log!(warn, $($arg)*) };
}

/// Error-level logging
///
/// Configuration problems found while building the router.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => { $crate::__router_log!(error, $($arg)*) };
}
