//! Searchable, sortable, paginated, CSV-exportable table widget
//!
//! Each `.card` with a `table` gets its own [`TableWidget`]. The widget owns
//! the row handles captured at load time and a
//! [`TableModel`](entra_dashboard_core::TableModel) holding the view state.
//! Every input (search, header click, page click) updates the model and then
//! redraws the whole widget.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;

use entra_dashboard_core::kpi::CardSummary;
use entra_dashboard_core::tables::{self, PageControl, Row, Sortable, TableModel};
use entra_dashboard_core::{Result, StatusTone, error_log};
use js_sys::{Array, JsString, Object};
use wasm_bindgen::JsCast;
use web_sys::{
	Document, Element, Event, HtmlButtonElement, HtmlInputElement, HtmlTableRowElement,
};

use crate::{dom, export};

const HIDDEN_CLASS: &str = "hidden";
const PAGE_ATTR: &str = "data-page";

/// Live state of one enhanced table
pub(crate) struct TableWidget {
	document: Document,
	model: TableModel,
	/// Row elements indexed by origin
	rows: Vec<HtmlTableRowElement>,
	headers: Vec<Element>,
	tbody: Option<Element>,
	badge: Element,
	pagination: Element,
	title: String,
}

type SharedWidget = Rc<RefCell<TableWidget>>;

/// Upgrades the table inside `card`
///
/// Returns `None` (and leaves the card untouched) when the card has no
/// table or was already enhanced.
pub fn enhance(document: &Document, card: &Element) -> Result<Option<CardSummary>> {
	let Some(table) = card.query_selector("table")? else {
		return Ok(None);
	};
	if card.query_selector(".card-header")?.is_some() {
		return Ok(None);
	}

	let title = match card.query_selector("h3")? {
		Some(h3) => {
			let text = dom::text(&h3).trim().to_string();
			h3.remove();
			Some(text)
		}
		None => None,
	};

	let tbody = table.query_selector("tbody")?;
	let row_elements: Vec<HtmlTableRowElement> = match &tbody {
		Some(body) => dom::elements(body.query_selector_all("tr")?)
			.into_iter()
			.filter_map(|el| el.dyn_into::<HtmlTableRowElement>().ok())
			.collect(),
		None => Vec::new(),
	};
	let headers = dom::elements(table.query_selector_all("thead th")?);
	let labels: Vec<String> = headers.iter().map(|th| dom::text(th)).collect();

	let mut rows = Vec::with_capacity(row_elements.len());
	for (origin, tr) in row_elements.iter().enumerate() {
		let tone = row_tone(tr)?;
		if let Some(tone) = tone {
			tr.class_list().add_1(&tone.row_class())?;
		}
		rows.push(Row::new(origin, cell_texts(tr), &dom::text(tr)).with_tone(tone));
	}
	let model = TableModel::new(&labels, rows).with_text_order(locale_compare);

	let summary = CardSummary {
		title: title.clone(),
		row_count: model.rows().len(),
		tone: StatusTone::strongest(model.rows().iter().filter_map(Row::tone)),
	};

	// Card header: title + badge, search + export
	let card_header = dom::create(document, "div", "card-header")?;
	let title_el = dom::create_text(document, "div", "card-title", title.as_deref().unwrap_or(""))?;
	let badge = dom::create(document, "span", "row-count")?;
	title_el.append_child(&badge)?;

	let tools = dom::create(document, "div", "card-tools")?;
	let search: HtmlInputElement = dom::create_as(document, "input", "search-input")?;
	search.set_type("search");
	search.set_placeholder("Filter\u{2026}");
	let export_button = dom::create(document, "button", "btn-export")?;
	export_button.set_inner_html("\u{2193}&nbsp;CSV");

	tools.append_child(&search)?;
	tools.append_child(&export_button)?;
	card_header.append_child(&title_el)?;
	card_header.append_child(&tools)?;
	card.insert_before(&card_header, card.first_child().as_ref())?;

	// Scrollable wrapper and pagination bar
	let table_wrap = dom::create(document, "div", "table-wrap")?;
	if let Some(parent) = table.parent_node() {
		let table_node: &web_sys::Node = &table;
		parent.insert_before(&table_wrap, Some(table_node))?;
	}
	table_wrap.append_child(&table)?;
	let pagination = dom::create(document, "div", "pagination")?;
	table_wrap.after_with_node_1(&pagination)?;

	let widget: SharedWidget = Rc::new(RefCell::new(TableWidget {
		document: document.clone(),
		model,
		rows: row_elements,
		headers: headers.clone(),
		tbody,
		badge,
		pagination: pagination.clone(),
		title: title.unwrap_or_default(),
	}));

	for (column, th) in headers.iter().enumerate() {
		let widget = widget.clone();
		dom::listen(th, "click", move |_| report(sort(&widget, column)))?;
	}

	{
		let widget = widget.clone();
		let input = search.clone();
		dom::listen(&search, "input", move |_| {
			widget.borrow_mut().model.set_search(&input.value());
			report(render(&widget));
		})?;
	}

	{
		let widget = widget.clone();
		dom::listen(&export_button, "click", move |_| report(download(&widget)))?;
	}

	{
		let widget = widget.clone();
		dom::listen(&pagination, "click", move |event| {
			if let Some(page) = clicked_page(&event) {
				widget.borrow_mut().model.go_to_page(page);
				report(render(&widget));
			}
		})?;
	}

	render(&widget)?;
	Ok(Some(summary))
}

fn report(result: Result<()>) {
	if let Err(error) = result {
		error_log!("Table update failed: {}", error);
	}
}

/// Text cell order of `String.prototype.localeCompare`
fn locale_compare(a: &str, b: &str) -> Ordering {
	JsString::from(a)
		.locale_compare(b, &Array::new(), &Object::new())
		.cmp(&0)
}

/// Highest-priority status marker found in the row
fn row_tone(row: &HtmlTableRowElement) -> Result<Option<StatusTone>> {
	for tone in StatusTone::ALL {
		if row.query_selector(&tone.marker_selector())?.is_some() {
			return Ok(Some(tone));
		}
	}
	Ok(None)
}

fn cell_texts(row: &HtmlTableRowElement) -> Vec<String> {
	let cells = row.cells();
	(0..cells.length())
		.filter_map(|i| cells.item(i))
		.map(|cell| dom::text(&cell))
		.collect()
}

/// Page number carried by the clicked pagination button, if enabled
fn clicked_page(event: &Event) -> Option<usize> {
	let target = event.target()?.dyn_into::<Element>().ok()?;
	let button = target.closest("button.page-btn").ok()??;
	button.get_attribute(PAGE_ATTR)?.parse().ok()
}

fn sort(widget: &SharedWidget, column: usize) -> Result<()> {
	{
		let w = &mut *widget.borrow_mut();
		w.model.sort_by_column(column);

		for (header, th) in w.model.headers().iter().zip(&w.headers) {
			let classes = th.class_list();
			classes.remove_2("sort-asc", "sort-desc")?;
			if let Some(class) = header.indicator.class() {
				classes.add_1(class)?;
			}
		}

		// Moves the live rows into sorted order
		if let Some(tbody) = &w.tbody {
			for origin in w.model.order() {
				tbody.append_child(&w.rows[origin])?;
			}
		}
	}
	render(widget)
}

fn download(widget: &SharedWidget) -> Result<()> {
	let w = widget.borrow();
	let csv = w.model.to_csv()?;
	export::download(&w.document, &tables::file_name(&w.title), &csv)
}

/// Redraws the visible window, the badge and the pagination bar
fn render(widget: &SharedWidget) -> Result<()> {
	let w = &mut *widget.borrow_mut();
	let plan = w.model.render();

	for (origin, tr) in w.rows.iter().enumerate() {
		tr.class_list()
			.toggle_with_force(HIDDEN_CLASS, !plan.is_shown(origin))?;
	}
	w.badge.set_text_content(Some(&plan.badge));

	w.pagination.set_inner_html("");
	for control in &plan.controls {
		w.pagination
			.append_child(&control_element(&w.document, control)?.into())?;
	}
	Ok(())
}

fn control_element(document: &Document, control: &PageControl) -> Result<Element> {
	let label = control.label();
	match control {
		PageControl::Info { .. } => dom::create_text(document, "span", "page-info", &label),
		PageControl::Ellipsis => dom::create_text(document, "span", "page-ellipsis", &label),
		PageControl::Previous { disabled, .. }
		| PageControl::Next { disabled, .. } => page_button(document, control, &label, false, *disabled),
		PageControl::Page { active, .. } => page_button(document, control, &label, *active, false),
	}
}

fn page_button(
	document: &Document,
	control: &PageControl,
	label: &str,
	active: bool,
	disabled: bool,
) -> Result<Element> {
	let class = if active { "page-btn active" } else { "page-btn" };
	let button: HtmlButtonElement = dom::create_as(document, "button", class)?;
	button.set_text_content(Some(label));
	button.set_disabled(disabled);
	if let Some(page) = control.target() {
		button.set_attribute(PAGE_ATTR, &page.to_string())?;
	}
	Ok(button.into())
}
