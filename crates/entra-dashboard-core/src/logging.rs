//! Console logging macros that work across WASM and native targets
//!
//! All macros compile to no-ops in release builds.
//!
//! | Macro | Debug Assertions | Feature Required | WASM | Non-WASM |
//! |-------|------------------|------------------|------|----------|
//! | `debug_log!` | Required | `debug-hooks` | `console.debug` | `eprintln!` |
//! | `info_log!` | Required | None | `console.info` | `eprintln!` |
//! | `warn_log!` | Required | None | `console.warn` | `eprintln!` |
//! | `error_log!` | Required | None | `console.error` | `eprintln!` |
//!
//! Every message starts with [`PREFIX`] so the dashboard's output can be
//! filtered in the browser console.
//!
//! The WASM expansions name `web_sys` directly, so the invoking crate needs
//! `web-sys` with the `console` feature on `wasm32`.
//!
//! ```ignore
//! use entra_dashboard_core::{info_log, warn_log};
//!
//! info_log!("Enhanced {} tables", count);
//! warn_log!("Ignoring dashboard config: {}", error);
//! ```

/// Tag prepended to every log line
pub const PREFIX: &str = "[entra-dashboard]";

/// Logs a debug message (requires `debug-hooks` feature + `debug_assertions`)
///
/// Meant for tracing widget state while developing the enhancer.
///
/// ```ignore
/// debug_log!("sorted column {} {:?}", key.column, key.direction);
/// ```
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks", target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		web_sys::console::debug_1(&format!("{} {}", $crate::logging::PREFIX, format_args!($($arg)*)).into());
	}};
}

/// Logs a debug message (requires `debug-hooks` feature + `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks", not(target_arch = "wasm32")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		eprintln!("{} [DEBUG] {}", $crate::logging::PREFIX, format_args!($($arg)*));
	}};
}

/// No-op debug_log when conditions are not met
#[macro_export]
#[cfg(not(all(debug_assertions, feature = "debug-hooks")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{}};
}

/// Logs an info message (requires `debug_assertions`)
///
/// ```ignore
/// info_log!("Enhanced {} tables", cards.len());
/// ```
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		web_sys::console::info_1(&format!("{} {}", $crate::logging::PREFIX, format_args!($($arg)*)).into());
	}};
}

/// Logs an info message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		eprintln!("{} [INFO] {}", $crate::logging::PREFIX, format_args!($($arg)*));
	}};
}

/// No-op info_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! info_log {
	($($arg:tt)*) => {{}};
}

/// Logs a warning message (requires `debug_assertions`)
///
/// Used for recoverable problems such as an ignored configuration block.
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		web_sys::console::warn_1(&format!("{} {}", $crate::logging::PREFIX, format_args!($($arg)*)).into());
	}};
}

/// Logs a warning message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		eprintln!("{} [WARN] {}", $crate::logging::PREFIX, format_args!($($arg)*));
	}};
}

/// No-op warn_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! warn_log {
	($($arg:tt)*) => {{}};
}

/// Logs an error message (requires `debug_assertions`)
///
/// Used when an initialization stage or a table update fails. The page keeps
/// working with whatever was already enhanced.
///
/// ```ignore
/// error_log!("Dashboard {} skipped: {}", name, error);
/// ```
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		web_sys::console::error_1(&format!("{} {}", $crate::logging::PREFIX, format_args!($($arg)*)).into());
	}};
}

/// Logs an error message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		eprintln!("{} [ERROR] {}", $crate::logging::PREFIX, format_args!($($arg)*));
	}};
}

/// No-op error_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! error_log {
	($($arg:tt)*) => {{}};
}
