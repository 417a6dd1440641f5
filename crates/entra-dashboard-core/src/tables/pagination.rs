//! Pagination functionality for tables

use std::ops::Range;

/// Rows shown per page
pub const PAGE_SIZE: usize = 25;

/// Pages shown on each side of the current page in the selector
const PAGE_WINDOW: usize = 2;

/// Pagination over the filtered row list
#[derive(Debug, Clone)]
pub struct Paginator {
	/// Number of items per page
	pub per_page: usize,
	/// Current page number (1-indexed)
	pub current_page: usize,
	/// Total number of items
	pub total_items: usize,
}

/// One element of the rendered pagination bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageControl {
	/// `current / total` caption
	Info {
		/// Current page
		current: usize,
		/// Total pages
		total: usize,
	},
	/// Previous-page button (`‹`)
	Previous {
		/// Page the button leads to
		target: usize,
		/// Disabled on the first page
		disabled: bool,
	},
	/// Numbered page button
	Page {
		/// Page number
		number: usize,
		/// Whether this is the current page
		active: bool,
	},
	/// Collapsed gap between page numbers (`…`)
	Ellipsis,
	/// Next-page button (`›`)
	Next {
		/// Page the button leads to
		target: usize,
		/// Disabled on the last page
		disabled: bool,
	},
}

impl PageControl {
	/// Visible label of this control
	pub fn label(&self) -> String {
		match self {
			Self::Info { current, total } => format!("{current}\u{2009}/\u{2009}{total}"),
			Self::Previous { .. } => "\u{2039}".to_string(),
			Self::Page { number, .. } => number.to_string(),
			Self::Ellipsis => "\u{2026}".to_string(),
			Self::Next { .. } => "\u{203a}".to_string(),
		}
	}

	/// Page an enabled button navigates to
	pub fn target(&self) -> Option<usize> {
		match self {
			Self::Previous { target, disabled } | Self::Next { target, disabled } => {
				(!disabled).then_some(*target)
			}
			Self::Page { number, .. } => Some(*number),
			Self::Info { .. } | Self::Ellipsis => None,
		}
	}
}

impl Paginator {
	/// Creates a paginator on page 1
	///
	/// # Arguments
	///
	/// * `per_page` - Number of items per page
	/// * `total_items` - Number of items after filtering
	pub fn new(per_page: usize, total_items: usize) -> Self {
		Self {
			per_page: per_page.max(1),
			current_page: 1,
			total_items,
		}
	}

	/// Returns the total number of pages, never less than 1
	pub fn total_pages(&self) -> usize {
		self.total_items.div_ceil(self.per_page).max(1)
	}

	/// Moves to `page`
	///
	/// A page past the end resets to page 1 rather than clamping to the last
	/// page. Page 0 is treated as page 1.
	pub fn set_page(&mut self, page: usize) {
		self.current_page = if page == 0 || page > self.total_pages() {
			1
		} else {
			page
		};
	}

	/// Returns the start index for the current page (0-indexed)
	pub fn start_index(&self) -> usize {
		(self.current_page.saturating_sub(1)) * self.per_page
	}

	/// Returns the end index for the current page (exclusive, 0-indexed)
	pub fn end_index(&self) -> usize {
		(self.start_index() + self.per_page).min(self.total_items)
	}

	/// Index range of the current page over the filtered list
	pub fn window(&self) -> Range<usize> {
		self.start_index().min(self.total_items)..self.end_index()
	}

	/// Page numbers to show, with `None` marking a collapsed gap
	///
	/// The first and last pages are always present along with
	/// `current ± 2`.
	pub fn page_numbers(&self) -> Vec<Option<usize>> {
		let total = self.total_pages();
		let low = self.current_page.saturating_sub(PAGE_WINDOW);
		let high = self.current_page + PAGE_WINDOW;

		let mut out = Vec::new();
		let mut prev: Option<usize> = None;
		for page in (1..=total).filter(|&p| p == 1 || p == total || (low..=high).contains(&p)) {
			if prev.is_some_and(|last| page - last > 1) {
				out.push(None);
			}
			out.push(Some(page));
			prev = Some(page);
		}
		out
	}

	/// Controls for the pagination bar; empty when everything fits on one page
	pub fn controls(&self) -> Vec<PageControl> {
		let total = self.total_pages();
		if total <= 1 {
			return Vec::new();
		}
		let current = self.current_page;

		let mut controls = vec![
			PageControl::Info { current, total },
			PageControl::Previous {
				target: current.saturating_sub(1),
				disabled: current == 1,
			},
		];
		controls.extend(self.page_numbers().into_iter().map(|slot| match slot {
			Some(number) => PageControl::Page {
				number,
				active: number == current,
			},
			None => PageControl::Ellipsis,
		}));
		controls.push(PageControl::Next {
			target: current + 1,
			disabled: current == total,
		});
		controls
	}
}
