//! Filtering functionality for tables

/// Something that can be matched against a search needle
pub trait Searchable {
	/// Case-folded text the needle is matched against
	fn search_text(&self) -> &str;
}

/// Normalizes raw search input into a needle (lowercased, trimmed)
pub fn normalize_query(raw: &str) -> String {
	raw.to_lowercase().trim().to_string()
}

/// Returns true when `needle` is empty or occurs in the item's search text
///
/// `needle` must already be normalized with [`normalize_query`].
pub fn matches<T: Searchable + ?Sized>(item: &T, needle: &str) -> bool {
	needle.is_empty() || item.search_text().contains(needle)
}

/// Yields the items matching `needle`, preserving order
pub fn filter<'a, T: Searchable>(
	items: &'a [T],
	needle: &'a str,
) -> impl Iterator<Item = &'a T> + 'a {
	items.iter().filter(move |item| matches(*item, needle))
}
