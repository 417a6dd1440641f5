//! Navigation bar builder

use entra_dashboard_core::nav::{self, BRAND_CLASS, BRAND_ICON};
use entra_dashboard_core::{DashboardConfig, Result};
use web_sys::{Document, Element, HtmlAnchorElement};

use crate::dom;

/// Builds `.topnav`, or only re-marks the active link if it is already built
///
/// The `.sub` timestamp element is consumed either way. Pages without a
/// `.topnav` are left alone.
pub fn build(document: &Document, config: &DashboardConfig, pathname: &str) -> Result<()> {
	let Some(bar) = document.query_selector(".topnav")? else {
		return Ok(());
	};

	let timestamp = match document.query_selector(".sub")? {
		Some(sub) => {
			let text = dom::text(&sub).trim().to_string();
			sub.remove();
			text
		}
		None => String::new(),
	};

	let current = nav::current_route(pathname, &config.home);
	if bar.query_selector(&format!(".{BRAND_CLASS}"))?.is_some() {
		return mark_active(&bar, &current);
	}

	bar.set_inner_html("");

	let brand: HtmlAnchorElement = dom::create_as(document, "a", BRAND_CLASS)?;
	brand.set_href(&config.home);
	brand.set_inner_html(BRAND_ICON);
	brand.append_child(&document.create_text_node(&config.brand))?;
	bar.append_child(&brand)?;

	bar.append_child(&dom::create(document, "div", "nav-divider")?.into())?;

	for entry in &config.nav {
		let link: HtmlAnchorElement = dom::create_as(document, "a", "nav-link")?;
		link.set_href(&entry.href);
		link.set_text_content(Some(&entry.label));
		if entry.is_active(&current) {
			link.class_list().add_1("active")?;
		}
		bar.append_child(&link)?;
	}

	bar.append_child(&dom::create(document, "div", "nav-spacer")?.into())?;

	if !timestamp.is_empty() {
		bar.append_child(&dom::create_text(document, "span", "nav-ts", &timestamp)?.into())?;
	}
	Ok(())
}

fn mark_active(bar: &Element, current: &str) -> Result<()> {
	for link in dom::elements(bar.query_selector_all(".nav-link")?) {
		let href = link.get_attribute("href").unwrap_or_default();
		link.class_list()
			.toggle_with_force("active", nav::route_of(&href) == current)?;
	}
	Ok(())
}
