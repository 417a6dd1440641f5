//! Top navigation bar
//!
//! The bar is built from a fixed route table. A route identifier is the last
//! path segment of a URL, so `reports/EntraDashboard.users.html` and
//! `EntraDashboard.users.html` name the same page.

use serde::Deserialize;

/// Route used when the location has no trailing segment
pub const HOME_ROUTE: &str = "EntraDashboard.html";

/// Marker element whose presence means the bar was already built
pub const BRAND_CLASS: &str = "brand";

/// Shield icon shown next to the brand label
pub const BRAND_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.2" stroke-linecap="round" stroke-linejoin="round"><path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/></svg>"#;

/// One link of the navigation bar
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavEntry {
	/// Link target
	pub href: String,
	/// Display label
	pub label: String,
}

impl NavEntry {
	/// Creates an entry
	pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			href: href.into(),
			label: label.into(),
		}
	}

	/// Whether this entry points at `current`
	pub fn is_active(&self, current: &str) -> bool {
		route_of(&self.href) == current
	}
}

/// The stock dashboard route table
pub fn default_entries() -> Vec<NavEntry> {
	[
		(HOME_ROUTE, "Home"),
		("EntraDashboard.conditional-access.html", "Cond. Access"),
		("EntraDashboard.users.html", "Users"),
		("EntraDashboard.groups.html", "Groups"),
		("EntraDashboard.devices.html", "Devices"),
		("EntraDashboard.enterprise-apps.html", "Ent. Apps"),
		("EntraDashboard.app-registrations.html", "App Regs"),
		("EntraDashboard.monitoring-health.html", "Monitoring"),
		("EntraDashboard.intune-home.html", "Intune"),
		("EntraDashboard.defender-home.html", "Defender"),
		("EntraDashboard.pim.html", "PIM"),
	]
	.into_iter()
	.map(|(href, label)| NavEntry::new(href, label))
	.collect()
}

/// Last path segment of `href`
pub fn route_of(href: &str) -> &str {
	href.rsplit('/').next().unwrap_or(href)
}

/// Route identifier of the current document
///
/// `pathname` is `location.pathname`; an empty trailing segment (a
/// directory URL) resolves to `home`.
pub fn current_route(pathname: &str, home: &str) -> String {
	match route_of(pathname) {
		"" => home.to_string(),
		route => route.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("/reports/EntraDashboard.users.html", "EntraDashboard.users.html")]
	#[case("/reports/", HOME_ROUTE)]
	#[case("", HOME_ROUTE)]
	#[case("EntraDashboard.pim.html", "EntraDashboard.pim.html")]
	fn test_current_route(#[case] pathname: &str, #[case] expected: &str) {
		assert_eq!(current_route(pathname, HOME_ROUTE), expected);
	}

	#[rstest]
	fn test_default_entries() {
		let entries = default_entries();
		assert_eq!(entries.len(), 11);
		assert_eq!(entries[0], NavEntry::new(HOME_ROUTE, "Home"));
		assert_eq!(entries[10].label, "PIM");
	}

	#[rstest]
	#[case("EntraDashboard.html", Some("Home"))]
	#[case("EntraDashboard.devices.html", Some("Devices"))]
	#[case("EntraDashboard.unknown.html", None)]
	fn test_single_active_entry(#[case] current: &str, #[case] expected: Option<&str>) {
		let active: Vec<String> = default_entries()
			.into_iter()
			.filter(|entry| entry.is_active(current))
			.map(|entry| entry.label)
			.collect();
		assert_eq!(active.first().map(String::as_str), expected);
		assert!(active.len() <= 1);
	}

	#[rstest]
	fn test_active_matches_last_segment_of_href() {
		let entry = NavEntry::new("../out/EntraDashboard.groups.html", "Groups");
		assert!(entry.is_active("EntraDashboard.groups.html"));
		assert!(!entry.is_active("EntraDashboard.users.html"));
	}
}
