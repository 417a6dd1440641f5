//! WASM DOM binding for the Entra Dashboard enhancer
//!
//! Loaded by every report page. On document-ready it runs a single
//! initialization pass over the static markup:
//!
//! 1. background orbs (rich variant)
//! 2. navigation bar
//! 3. collapsible section headers
//! 4. home page menu links
//! 5. table widgets, one per `.card`
//! 6. KPI strip (rich variant)
//!
//! Each stage degrades silently: missing elements are skipped and DOM
//! failures are logged to the console without stopping the later stages.

use entra_dashboard_core::config::CONFIG_ELEMENT_ID;
use entra_dashboard_core::{DashboardConfig, Result, error_log, info_log};
use wasm_bindgen::prelude::*;
use web_sys::Document;

mod dom;
mod export;
pub mod kpi;
pub mod menu;
pub mod nav;
pub mod orbs;
pub mod sections;
pub mod table;

/// WASM entry point
///
/// Runs [`init`] now, or on `DOMContentLoaded` if the document is still
/// loading.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub fn start() -> std::result::Result<(), JsValue> {
	// Set up panic hook for better error messages in console
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let document = dom::window()
		.and_then(|window| dom::document(&window))
		.map_err(|error| JsValue::from_str(&error.to_string()))?;

	if document.ready_state() == "loading" {
		dom::listen(&document, "DOMContentLoaded", |_| run())
			.map_err(|error| JsValue::from_str(&error.to_string()))?;
	} else {
		run();
	}
	Ok(())
}

fn run() {
	if let Err(error) = init() {
		error_log!("Dashboard init failed: {}", error);
	}
}

/// Reads the page configuration
pub fn load_config(document: &Document) -> DashboardConfig {
	let source = document
		.get_element_by_id(CONFIG_ELEMENT_ID)
		.and_then(|el| el.text_content());
	DashboardConfig::load(source.as_deref())
}

/// Enhances the current document
///
/// # Errors
///
/// Fails only when `window` or `document` is unavailable; failures inside a
/// stage are logged and the remaining stages still run.
pub fn init() -> Result<()> {
	let window = dom::window()?;
	let document = dom::document(&window)?;
	let config = load_config(&document);

	if config.is_rich() {
		stage("orbs", orbs::inject(&document));
	}

	let pathname = window.location().pathname().unwrap_or_default();
	stage("navigation", nav::build(&document, &config, &pathname));
	stage("sections", sections::init(&document, &config));
	stage("menu links", menu::enhance(&document, &config));

	let mut cards = Vec::new();
	match document.query_selector_all(".card") {
		Ok(list) => {
			for card in dom::elements(list) {
				match table::enhance(&document, &card) {
					Ok(Some(summary)) => cards.push(summary),
					Ok(None) => {}
					Err(error) => error_log!("Table enhancement failed: {}", error),
				}
			}
		}
		Err(error) => error_log!("Card lookup failed: {:?}", error),
	}
	info_log!("Enhanced {} tables", cards.len());

	if config.is_rich() {
		stage("KPI strip", kpi::build(&window, &document, &config, cards));
	}
	Ok(())
}

fn stage(name: &str, result: Result<()>) {
	if let Err(error) = result {
		error_log!("Dashboard {} skipped: {}", name, error);
	}
}
