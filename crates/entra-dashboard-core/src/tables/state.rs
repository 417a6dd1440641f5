//! Per-table view state and the render plan computed from it

use super::filtering;
use super::model::Row;
use super::pagination::{PAGE_SIZE, PageControl, Paginator};
use super::sorting::SortKey;
use crate::format::row_count_label;

/// View state owned by one table widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
	/// Active sort key, if any header has been clicked
	pub sort: Option<SortKey>,
	/// Normalized search needle (possibly empty)
	pub search: String,
	/// Current page (1-indexed)
	pub current_page: usize,
}

impl Default for ViewState {
	fn default() -> Self {
		Self {
			sort: None,
			search: String::new(),
			current_page: 1,
		}
	}
}

/// Everything the DOM layer needs for one full redraw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
	/// Effective page after the overflow reset
	pub page: usize,
	/// Total pages over the filtered list
	pub total_pages: usize,
	/// Number of rows matching the search
	pub matched: usize,
	/// `shown[origin]` is true for rows inside the current window
	pub shown: Vec<bool>,
	/// Row-count badge text
	pub badge: String,
	/// Pagination bar contents (empty for a single page)
	pub controls: Vec<PageControl>,
}

impl RenderPlan {
	/// Computes the plan for `rows` (in display order) under `state`
	pub fn compute(rows: &[Row], state: &ViewState) -> Self {
		let matched: Vec<&Row> = filtering::filter(rows, &state.search).collect();

		let mut paginator = Paginator::new(PAGE_SIZE, matched.len());
		paginator.set_page(state.current_page);

		let mut shown = vec![false; rows.iter().map(|row| row.origin() + 1).max().unwrap_or(0)];
		for row in &matched[paginator.window()] {
			shown[row.origin()] = true;
		}

		Self {
			page: paginator.current_page,
			total_pages: paginator.total_pages(),
			matched: matched.len(),
			shown,
			badge: row_count_label(matched.len()),
			controls: paginator.controls(),
		}
	}

	/// Whether the row with this origin index is visible
	pub fn is_shown(&self, origin: usize) -> bool {
		self.shown.get(origin).copied().unwrap_or(false)
	}

	/// Number of rows visible on the current page
	pub fn shown_count(&self) -> usize {
		self.shown.iter().filter(|shown| **shown).count()
	}
}
