//! Table enhancement model
//!
//! A report table is captured once into a [`TableModel`]. User input then
//! drives it through three triggers (search, header click, page click), and
//! each trigger is followed by a full [`RenderPlan`] recomputation:
//!
//! ```mermaid
//! graph LR
//!     A[Row Model] --> B[Filter]
//!     A --> C[Sort]
//!     B --> D[Paginator]
//!     C --> D
//!     B --> E[CSV Export]
//! ```

pub mod export;
pub mod filtering;
pub mod model;
pub mod pagination;
pub mod sorting;
pub mod state;

pub use export::{file_name, to_csv};
pub use filtering::Searchable;
pub use model::{ColumnHeader, Row, SortIndicator, TableModel};
pub use pagination::{PAGE_SIZE, PageControl, Paginator};
pub use sorting::{SortDirection, SortKey, Sortable, TextOrder};
pub use state::{RenderPlan, ViewState};
