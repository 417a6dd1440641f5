//! Target-independent model for the Entra Dashboard enhancer
//!
//! The static report pages are produced elsewhere. This crate holds
//! everything about upgrading them that does not need a browser: the table
//! row model with its filter, sort, paginator and CSV exporter, the
//! navigation route table, section and menu decoration rules, and the KPI
//! strip. `entra-dashboard-pages` binds it to the DOM.
//!
//! # Modules
//!
//! - [`tables`]: row model, view state and render plan
//! - [`nav`]: route table and active-link resolution
//! - [`sections`] / [`menu`]: header and menu link decoration
//! - [`kpi`]: KPI metrics and count-up easing
//! - [`config`]: inline page configuration
//! - [`logging`]: console logging macros
//!
//! # Example
//!
//! ```rust
//! use entra_dashboard_core::tables::{Row, Sortable, TableModel};
//!
//! let rows = (0..30)
//!     .map(|i| Row::from_cells(i, vec![format!("user{i}"), i.to_string()]))
//!     .collect();
//! let mut table = TableModel::new(&["Name", "Sign-ins"], rows);
//!
//! table.sort_by_column(1);
//! let plan = table.render();
//! assert_eq!(plan.total_pages, 2);
//! assert_eq!(plan.shown_count(), 25);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod format;
pub mod kpi;
pub mod logging;
pub mod menu;
pub mod nav;
pub mod sections;
pub mod status;
pub mod tables;

// Re-exports for convenience
pub use config::{DashboardConfig, Variant};
pub use error::{DashboardError, Result};
pub use status::StatusTone;
pub use tables::{PAGE_SIZE, TableModel};
