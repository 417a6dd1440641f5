//! Dashboard configuration
//!
//! Pages may embed a JSON block to override the defaults:
//!
//! ```html
//! <script type="application/json" id="entra-dashboard-config">
//!   { "variant": "plain", "brand": "Contoso" }
//! </script>
//! ```
//!
//! Missing keys keep their default values. The table page size is fixed and
//! cannot be configured.

use serde::Deserialize;

use crate::error::Result;
use crate::nav::{self, HOME_ROUTE, NavEntry};
use crate::warn_log;

/// `id` of the inline configuration block
pub const CONFIG_ELEMENT_ID: &str = "entra-dashboard-config";

/// Presentation variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
	/// Section icons, menu icons, KPI strip and background orbs
	#[default]
	Rich,
	/// Navigation, collapsible sections and tables only
	Plain,
}

/// Settings for one dashboard page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
	/// Presentation variant
	pub variant: Variant,
	/// Route the brand link points at
	pub home: String,
	/// Text next to the brand icon
	pub brand: String,
	/// Navigation bar entries, in display order
	pub nav: Vec<NavEntry>,
	/// Maximum number of KPI counters
	pub kpi_limit: usize,
	/// Count-up duration in milliseconds
	pub count_up_ms: u32,
	/// Delay between successive counters in milliseconds
	pub count_up_stagger_ms: u32,
}

impl Default for DashboardConfig {
	fn default() -> Self {
		Self {
			variant: Variant::Rich,
			home: HOME_ROUTE.to_string(),
			brand: "Entra".to_string(),
			nav: nav::default_entries(),
			kpi_limit: 8,
			count_up_ms: 900,
			count_up_stagger_ms: 80,
		}
	}
}

impl DashboardConfig {
	/// Parses a configuration block
	///
	/// # Errors
	///
	/// Returns [`DashboardError::Config`](crate::DashboardError::Config) if
	/// `json` is not a valid configuration object.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Resolves the configuration from an optional inline block
	///
	/// Absent or blank blocks yield the defaults. A malformed block is
	/// logged and ignored.
	pub fn load(source: Option<&str>) -> Self {
		match source.map(str::trim).filter(|s| !s.is_empty()) {
			None => Self::default(),
			Some(json) => Self::from_json(json).unwrap_or_else(|error| {
				warn_log!("Ignoring {}: {}", CONFIG_ELEMENT_ID, error);
				Self::default()
			}),
		}
	}

	/// Whether decorative extras (icons, KPI strip, orbs) are enabled
	pub fn is_rich(&self) -> bool {
		self.variant == Variant::Rich
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let config = DashboardConfig::default();
		assert!(config.is_rich());
		assert_eq!(config.home, HOME_ROUTE);
		assert_eq!(config.nav.len(), 11);
		assert_eq!(config.kpi_limit, 8);
		assert_eq!(config.count_up_ms, 900);
		assert_eq!(config.count_up_stagger_ms, 80);
	}

	#[rstest]
	fn test_partial_json_keeps_defaults() {
		let config = DashboardConfig::from_json(r#"{ "variant": "plain", "brand": "Contoso" }"#).unwrap();
		assert_eq!(config.variant, Variant::Plain);
		assert_eq!(config.brand, "Contoso");
		assert_eq!(config.nav, nav::default_entries());
	}

	#[rstest]
	fn test_custom_nav() {
		let config = DashboardConfig::from_json(
			r#"{ "nav": [{ "href": "index.html", "label": "Start" }], "kpi_limit": 4 }"#,
		)
		.unwrap();
		assert_eq!(config.nav, vec![NavEntry::new("index.html", "Start")]);
		assert_eq!(config.kpi_limit, 4);
	}

	#[rstest]
	#[case(None)]
	#[case(Some(""))]
	#[case(Some("   \n "))]
	#[case(Some("{ not json"))]
	#[case(Some(r#"{ "variant": "neon" }"#))]
	fn test_load_falls_back_to_defaults(#[case] source: Option<&str>) {
		assert_eq!(DashboardConfig::load(source), DashboardConfig::default());
	}

	#[rstest]
	fn test_from_json_reports_errors() {
		assert!(DashboardConfig::from_json("42").is_err());
	}
}
