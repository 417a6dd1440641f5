//! Thin helpers over `web-sys`

use entra_dashboard_core::{DashboardError, Result};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

pub(crate) fn window() -> Result<Window> {
	web_sys::window().ok_or(DashboardError::MissingGlobal("window"))
}

pub(crate) fn document(window: &Window) -> Result<Document> {
	window
		.document()
		.ok_or(DashboardError::MissingGlobal("document"))
}

pub(crate) fn body(document: &Document) -> Result<HtmlElement> {
	document.body().ok_or(DashboardError::MissingGlobal("body"))
}

/// Creates `<tag>` with `class` (skipped when empty)
pub(crate) fn create(document: &Document, tag: &str, class: &str) -> Result<Element> {
	let element = document.create_element(tag)?;
	if !class.is_empty() {
		element.set_class_name(class);
	}
	Ok(element)
}

/// Like [`create`], cast to a concrete element type
pub(crate) fn create_as<T: JsCast>(document: &Document, tag: &str, class: &str) -> Result<T> {
	create(document, tag, class)?
		.dyn_into::<T>()
		.map_err(|_| DashboardError::Dom(format!("<{tag}> has an unexpected element type")))
}

/// Creates `<tag>` with `class` and text content
pub(crate) fn create_text(document: &Document, tag: &str, class: &str, text: &str) -> Result<Element> {
	let element = create(document, tag, class)?;
	element.set_text_content(Some(text));
	Ok(element)
}

pub(crate) fn elements(list: NodeList) -> Vec<Element> {
	(0..list.length())
		.filter_map(|i| list.get(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

/// Full text content of a node, empty when it has none
pub(crate) fn text(node: &web_sys::Node) -> String {
	node.text_content().unwrap_or_default()
}

/// Attaches `handler` for the lifetime of the page
pub(crate) fn listen(
	target: &EventTarget,
	event: &str,
	handler: impl FnMut(Event) + 'static,
) -> Result<()> {
	let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
	target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
	// Listeners live as long as the page, nothing ever removes them
	closure.forget();
	Ok(())
}
