//! Collapsible section headers

use entra_dashboard_core::sections::{CHEVRON, CHEVRON_CLASS, COLLAPSED_CLASS, section_icon};
use entra_dashboard_core::{DashboardConfig, Result, warn_log};
use web_sys::Document;

use crate::dom;

/// Decorates every `.section h2` that has not been decorated yet
///
/// Clicking a header toggles `collapsed` on its own section.
pub fn init(document: &Document, config: &DashboardConfig) -> Result<()> {
	for section in dom::elements(document.query_selector_all(".section")?) {
		let Some(header) = section.query_selector("h2")? else {
			continue;
		};
		if header.query_selector(&format!(".{CHEVRON_CLASS}"))?.is_some() {
			continue;
		}

		let title = dom::text(&header).trim().to_string();
		header.set_inner_html("");

		if config.is_rich()
			&& let Some(icon) = section_icon(&title)
		{
			let icon_el = dom::create(document, "span", "section-icon")?;
			icon_el.set_inner_html(icon);
			header.append_child(&icon_el)?;
		}
		header.append_child(&dom::create_text(document, "span", "section-title-text", &title)?.into())?;
		header.append_child(&dom::create_text(document, "span", CHEVRON_CLASS, CHEVRON)?.into())?;

		dom::listen(&header, "click", move |_| {
			if let Err(error) = section.class_list().toggle(COLLAPSED_CLASS) {
				warn_log!("Section toggle failed: {:?}", error);
			}
		})?;
	}
	Ok(())
}
