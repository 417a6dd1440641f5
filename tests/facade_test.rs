//! Root facade: the core API is reachable through `entra_dashboard`

use entra_dashboard::prelude::*;
use entra_dashboard::{config, nav};
use rstest::rstest;

#[rstest]
fn test_config_and_table_through_facade() {
	let config = DashboardConfig::load(Some(r#"{"variant": "plain", "kpi_limit": 3}"#));
	assert_eq!(config.variant, Variant::Plain);
	assert_eq!(config.kpi_limit, 3);
	assert_eq!(config.nav, nav::default_entries());

	let rows = (0..26)
		.map(|i| Row::from_cells(i, vec![format!("device{i}")]))
		.collect();
	let mut table = TableModel::new(&["Device"], rows);
	table.go_to_page(2);
	let plan = table.render();
	assert_eq!(plan.page, 2);
	assert_eq!(plan.shown_count(), 1);
}

#[rstest]
fn test_missing_config_block_uses_defaults() {
	let config = DashboardConfig::load(None);
	assert_eq!(config, DashboardConfig::default());
	assert_eq!(config::CONFIG_ELEMENT_ID, "entra-dashboard-config");
}
