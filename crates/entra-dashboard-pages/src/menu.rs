//! Home page menu links

use entra_dashboard_core::menu::{ARROW, menu_icon};
use entra_dashboard_core::{DashboardConfig, Result};
use web_sys::Document;

use crate::dom;

const ARROW_CLASS: &str = "menu-link-arrow";

/// Rebuilds each `.menu-link` as icon, label and arrow
pub fn enhance(document: &Document, config: &DashboardConfig) -> Result<()> {
	for link in dom::elements(document.query_selector_all(".menu-link")?) {
		if link.query_selector(&format!(".{ARROW_CLASS}"))?.is_some() {
			continue;
		}

		let label = dom::text(&link).trim().to_string();
		link.set_inner_html("");

		if config.is_rich()
			&& let Some(emoji) = menu_icon(&label)
		{
			link.append_child(&dom::create_text(document, "div", "menu-link-icon", emoji)?.into())?;
		}
		link.append_child(&dom::create_text(document, "div", "", &label)?.into())?;
		link.append_child(&dom::create_text(document, "div", ARROW_CLASS, ARROW)?.into())?;
	}
	Ok(())
}
