//! Sorting functionality for tables

use std::cmp::Ordering;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
	/// Ascending order
	Ascending,
	/// Descending order
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Applies this direction to an ascending ordering
	pub fn apply(&self, ordering: Ordering) -> Ordering {
		match self {
			Self::Ascending => ordering,
			Self::Descending => ordering.reverse(),
		}
	}

	/// Header class marking a column sorted in this direction
	pub fn header_class(&self) -> &'static str {
		match self {
			Self::Ascending => "sort-asc",
			Self::Descending => "sort-desc",
		}
	}
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
	/// Zero-based column index
	pub column: usize,
	/// Current direction
	pub direction: SortDirection,
}

impl SortKey {
	/// Returns the key produced by clicking `column` while `current` is active
	///
	/// The same column flips direction; any other column starts ascending.
	pub fn after_click(current: Option<SortKey>, column: usize) -> SortKey {
		match current {
			Some(key) if key.column == column => SortKey {
				column,
				direction: key.direction.toggle(),
			},
			_ => SortKey {
				column,
				direction: SortDirection::Ascending,
			},
		}
	}
}

/// Trait for sortable tables
pub trait Sortable {
	/// Handles a click on the header of `column`
	fn sort_by_column(&mut self, column: usize);

	/// Returns the current sort key
	fn current_sort(&self) -> Option<SortKey>;
}

/// Normalizes a cell for comparison (trimmed, lowercased)
pub fn sort_text(cell: &str) -> String {
	cell.trim().to_lowercase()
}

/// Orders two normalized text cells
///
/// The DOM layer installs the browser's `localeCompare`; [`fold_compare`]
/// is used everywhere else.
pub type TextOrder = fn(&str, &str) -> Ordering;

/// Parses a normalized cell as a finite number
fn as_number(text: &str) -> Option<f64> {
	text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Base letter of a lowercase Latin letter with a diacritic
fn fold_char(c: char) -> char {
	match c {
		'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
		'ç' | 'ć' | 'č' => 'c',
		'ď' => 'd',
		'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
		'ğ' => 'g',
		'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => 'i',
		'ł' | 'ľ' => 'l',
		'ñ' | 'ń' | 'ň' => 'n',
		'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
		'ř' => 'r',
		'ś' | 'š' | 'ş' => 's',
		'ť' | 'ţ' => 't',
		'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
		'ý' | 'ÿ' => 'y',
		'ź' | 'ż' | 'ž' => 'z',
		other => other,
	}
}

/// Text order with Latin diacritics folded to their base letter
///
/// Accents only break ties, so `émile` sorts between `emile` and `f`.
pub fn fold_compare(a: &str, b: &str) -> Ordering {
	a.chars()
		.map(fold_char)
		.cmp(b.chars().map(fold_char))
		.then_with(|| a.cmp(b))
}

/// Compares two raw cells in ascending order
///
/// Numeric comparison when both cells parse as numbers, `text` on the
/// normalized strings otherwise.
pub fn compare_cells_with(a: &str, b: &str, text: TextOrder) -> Ordering {
	let (a, b) = (sort_text(a), sort_text(b));
	match (as_number(&a), as_number(&b)) {
		(Some(x), Some(y)) => x.total_cmp(&y),
		_ => text(&a, &b),
	}
}

/// Stable merge sort
///
/// Mixed numeric and text columns do not form a total order, which the
/// standard library sorts may reject with a panic. This sort accepts any
/// comparator and keeps equal elements in input order.
pub fn stable_sort_by<T, F>(items: Vec<T>, compare: &mut F) -> Vec<T>
where
	F: FnMut(&T, &T) -> Ordering,
{
	if items.len() <= 1 {
		return items;
	}
	let mut left = items;
	let right = left.split_off(left.len() / 2);
	let mut left = stable_sort_by(left, compare).into_iter().peekable();
	let mut right = stable_sort_by(right, compare).into_iter().peekable();

	let mut merged = Vec::with_capacity(left.len() + right.len());
	while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
		let take_right = compare(r, l) == Ordering::Less;
		merged.extend(if take_right { right.next() } else { left.next() });
	}
	merged.extend(left);
	merged.extend(right);
	merged
}
