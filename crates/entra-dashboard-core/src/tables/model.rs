//! Row model captured from a report table

use super::export;
use super::filtering::{self, Searchable};
use super::sorting::{
	SortDirection, SortKey, Sortable, TextOrder, compare_cells_with, fold_compare, stable_sort_by,
};
use super::state::{RenderPlan, ViewState};
use crate::error::Result;
use crate::status::StatusTone;

/// One body row of a report table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
	origin: usize,
	cells: Vec<String>,
	text: String,
	tone: Option<StatusTone>,
}

impl Row {
	/// Creates a row from its cell texts and the full row text
	///
	/// `origin` is the row's position in the original table and identifies
	/// it for the lifetime of the page. Cells are stored trimmed; `text` is
	/// case-folded for searching.
	pub fn new(origin: usize, cells: Vec<String>, text: &str) -> Self {
		Self {
			origin,
			cells: cells.into_iter().map(|cell| cell.trim().to_string()).collect(),
			text: text.to_lowercase(),
			tone: None,
		}
	}

	/// Creates a row whose full text is its cells separated by spaces
	pub fn from_cells(origin: usize, cells: Vec<String>) -> Self {
		let text = cells.join(" ");
		Self::new(origin, cells, &text)
	}

	/// Sets the status tone carried by this row
	pub fn with_tone(mut self, tone: Option<StatusTone>) -> Self {
		self.tone = tone;
		self
	}

	/// Position of this row in the original table
	pub fn origin(&self) -> usize {
		self.origin
	}

	/// Trimmed cell texts
	pub fn cells(&self) -> &[String] {
		&self.cells
	}

	/// Cell text at `column`, empty if the row is short
	pub fn cell(&self, column: usize) -> &str {
		self.cells.get(column).map(String::as_str).unwrap_or("")
	}

	/// Status tone of this row, if any marker was present
	pub fn tone(&self) -> Option<StatusTone> {
		self.tone
	}
}

impl Searchable for Row {
	fn search_text(&self) -> &str {
		&self.text
	}
}

/// Sort indicator shown on a column header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortIndicator {
	/// Not the active sort column
	#[default]
	None,
	/// Active, ascending
	Ascending,
	/// Active, descending
	Descending,
}

impl SortIndicator {
	/// Header class for this indicator, `None` when inactive
	pub fn class(&self) -> Option<&'static str> {
		match self {
			Self::None => None,
			Self::Ascending => Some(SortDirection::Ascending.header_class()),
			Self::Descending => Some(SortDirection::Descending.header_class()),
		}
	}
}

impl From<SortDirection> for SortIndicator {
	fn from(direction: SortDirection) -> Self {
		match direction {
			SortDirection::Ascending => Self::Ascending,
			SortDirection::Descending => Self::Descending,
		}
	}
}

/// A header cell paired positionally with each row's cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
	/// Trimmed header text
	pub label: String,
	/// Current sort indicator
	pub indicator: SortIndicator,
}

impl ColumnHeader {
	/// Creates an inactive header
	pub fn new(label: impl AsRef<str>) -> Self {
		Self {
			label: label.as_ref().trim().to_string(),
			indicator: SortIndicator::None,
		}
	}
}

/// Headers, rows in display order, and the view state of one table
#[derive(Debug, Clone)]
pub struct TableModel {
	headers: Vec<ColumnHeader>,
	rows: Vec<Row>,
	state: ViewState,
	text_order: TextOrder,
}

impl TableModel {
	/// Captures a table's headers and body rows
	pub fn new<S: AsRef<str>>(headers: &[S], rows: Vec<Row>) -> Self {
		Self {
			headers: headers.iter().map(ColumnHeader::new).collect(),
			rows,
			state: ViewState::default(),
			text_order: fold_compare,
		}
	}

	/// Replaces the order used for non-numeric cells
	pub fn with_text_order(mut self, text_order: TextOrder) -> Self {
		self.text_order = text_order;
		self
	}

	/// Column headers
	pub fn headers(&self) -> &[ColumnHeader] {
		&self.headers
	}

	/// All rows in current display order
	pub fn rows(&self) -> &[Row] {
		&self.rows
	}

	/// Current view state
	pub fn state(&self) -> &ViewState {
		&self.state
	}

	/// Origin indices in current display order
	pub fn order(&self) -> Vec<usize> {
		self.rows.iter().map(Row::origin).collect()
	}

	/// Updates the search needle from raw input and returns to page 1
	pub fn set_search(&mut self, raw: &str) {
		self.state.search = filtering::normalize_query(raw);
		self.state.current_page = 1;
	}

	/// Moves to `page`; the next render resets it to 1 if out of range
	pub fn go_to_page(&mut self, page: usize) {
		self.state.current_page = page.max(1);
	}

	/// Rows matching the current search, in display order
	pub fn visible(&self) -> Vec<&Row> {
		filtering::filter(&self.rows, &self.state.search).collect()
	}

	/// Computes the next redraw and stores the effective page
	pub fn render(&mut self) -> RenderPlan {
		let plan = RenderPlan::compute(&self.rows, &self.state);
		self.state.current_page = plan.page;
		plan
	}

	/// CSV text for the headers and every row matching the search
	pub fn to_csv(&self) -> Result<String> {
		let headers: Vec<&str> = self.headers.iter().map(|h| h.label.as_str()).collect();
		export::to_csv(&headers, self.visible())
	}
}

impl Sortable for TableModel {
	fn sort_by_column(&mut self, column: usize) {
		let key = SortKey::after_click(self.state.sort, column);
		self.state.sort = Some(key);
		self.state.current_page = 1;

		for (i, header) in self.headers.iter_mut().enumerate() {
			header.indicator = if i == column {
				key.direction.into()
			} else {
				SortIndicator::None
			};
		}

		let text = self.text_order;
		let rows = std::mem::take(&mut self.rows);
		self.rows = stable_sort_by(rows, &mut |a: &Row, b: &Row| {
			key.direction
				.apply(compare_cells_with(a.cell(key.column), b.cell(key.column), text))
		});
	}

	fn current_sort(&self) -> Option<SortKey> {
		self.state.sort
	}
}
