//! KPI strip with count-up animation

use std::cell::RefCell;
use std::rc::Rc;

use entra_dashboard_core::kpi::{self, CardSummary, CountUp};
use entra_dashboard_core::{DashboardConfig, Result, warn_log};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dom;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Inserts the KPI grid after `.page-header`
///
/// Nothing is inserted when the page has no header or no card had rows.
pub fn build(
	window: &Window,
	document: &Document,
	config: &DashboardConfig,
	cards: Vec<CardSummary>,
) -> Result<()> {
	let Some(page_header) = document.query_selector(".page-header")? else {
		return Ok(());
	};
	let metrics = kpi::collect_metrics(cards, config.kpi_limit);
	if metrics.is_empty() {
		return Ok(());
	}

	let grid = dom::create(document, "div", "kpi-grid")?;
	for (i, metric) in metrics.iter().enumerate() {
		let card: HtmlElement = dom::create_as(document, "div", &metric.card_class())?;
		card.style()
			.set_property("animation-delay", &kpi::animation_delay(i))?;

		let value = dom::create_text(document, "div", "kpi-value", "0")?;
		card.append_child(&value)?;
		card.append_child(&dom::create_text(document, "div", "kpi-label", &metric.label)?.into())?;
		grid.append_child(&card)?;

		let delay = config.count_up_stagger_ms.saturating_mul(i as u32);
		animate(window, value, CountUp::new(metric.value, config.count_up_ms), delay)?;
	}
	page_header.after_with_node_1(&grid)?;
	Ok(())
}

/// Starts the count-up of `value` after `delay_ms`; fire-and-forget
fn animate(window: &Window, value: Element, count: CountUp, delay_ms: u32) -> Result<()> {
	let win = window.clone();
	let start = Closure::once_into_js(move || {
		if let Err(error) = run_frames(&win, value, count) {
			warn_log!("KPI animation skipped: {}", error);
		}
	});
	window.set_timeout_with_callback_and_timeout_and_arguments_0(
		start.unchecked_ref(),
		i32::try_from(delay_ms).unwrap_or(i32::MAX),
	)?;
	Ok(())
}

fn run_frames(window: &Window, value: Element, count: CountUp) -> Result<()> {
	let frame: FrameCallback = Rc::new(RefCell::new(None));
	let handle = frame.clone();
	let win = window.clone();
	let mut started: Option<f64> = None;

	*handle.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
		let elapsed = timestamp - *started.get_or_insert(timestamp);
		value.set_text_content(Some(&count.text_at(elapsed)));

		if count.is_done(elapsed) {
			// Releases this closure once it returns
			frame.borrow_mut().take();
		} else if let Some(callback) = frame.borrow().as_ref() {
			let _ = win.request_animation_frame(callback.as_ref().unchecked_ref());
		}
	}) as Box<dyn FnMut(f64)>));

	if let Some(callback) = handle.borrow().as_ref() {
		window.request_animation_frame(callback.as_ref().unchecked_ref())?;
	}
	Ok(())
}
