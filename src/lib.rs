//! # Entra Dashboard
//!
//! Client-side enhancer for the static Entra Dashboard report pages.
//!
//! The report generator emits plain HTML: a `.topnav` placeholder, `.section`
//! blocks and `.card` elements holding raw tables. Loading the WASM module
//! upgrades that markup in place into a navigable dashboard with searchable,
//! sortable, paginated and CSV-exportable tables.
//!
//! ## Crates
//!
//! - [`entra_dashboard_core`] - DOM-free logic: row model, view state,
//!   pagination, CSV export and decoration rules. Re-exported at the root.
//! - `entra_dashboard_pages` - the `wasm-bindgen` DOM binding, available as
//!   [`pages`] with the `pages` feature (default).
//!
//! ## Feature Flags
//!
//! - `pages` (default) - DOM binding
//! - `console_error_panic_hook` - readable panic messages in the browser
//! - `debug-hooks` - enables `debug_log!` in debug builds
//!
//! ## Example
//!
//! ```
//! use entra_dashboard::prelude::*;
//!
//! let rows = (0..60)
//!     .map(|i| Row::from_cells(i, vec![format!("user{i}"), i.to_string()]))
//!     .collect();
//! let mut table = TableModel::new(&["User", "Sign-ins"], rows);
//! table.set_search("user1");
//!
//! let plan = table.render();
//! assert_eq!(plan.matched, 11);
//! assert_eq!(plan.badge, "11 rows");
//! ```

pub use entra_dashboard_core::*;

#[cfg(feature = "pages")]
pub use entra_dashboard_pages as pages;

/// Commonly used types
pub mod prelude {
	pub use entra_dashboard_core::kpi::CardSummary;
	pub use entra_dashboard_core::tables::{
		Paginator, RenderPlan, Row, SortDirection, SortKey, Sortable, ViewState,
	};
	pub use entra_dashboard_core::{
		DashboardConfig, DashboardError, PAGE_SIZE, Result, StatusTone, TableModel, Variant,
	};
}
