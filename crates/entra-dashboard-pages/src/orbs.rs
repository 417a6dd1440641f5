//! Decorative background orbs

use entra_dashboard_core::Result;
use web_sys::Document;

use crate::dom;

/// Prepends `div.bg-orb.bg-orb-{1,2,3}` to `body`
pub fn inject(document: &Document) -> Result<()> {
	let body = dom::body(document)?;
	for n in 1..=3 {
		let orb = dom::create(document, "div", &format!("bg-orb bg-orb-{n}"))?;
		body.insert_before(&orb, body.first_child().as_ref())?;
	}
	Ok(())
}
