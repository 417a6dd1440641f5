//! Browser tests for the DOM binding
//!
//! Run with `wasm-pack test --headless --chrome crates/entra-dashboard-pages`.

#![cfg(target_arch = "wasm32")]

use entra_dashboard_core::DashboardConfig;
use entra_dashboard_core::kpi::CardSummary;
use entra_dashboard_pages::{kpi, menu, nav, sections, table};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

/// Appends `html` inside a fresh container on `body`
fn mount(html: &str) -> Element {
	let document = document();
	let container = document.create_element("div").unwrap();
	container.set_inner_html(html);
	document.body().unwrap().append_child(&container).unwrap();
	container
}

fn card_html(title: &str, rows: &[(&str, &str)]) -> String {
	let body: String = rows
		.iter()
		.map(|(name, count)| format!("<tr><td>{name}</td><td>{count}</td></tr>"))
		.collect();
	format!(
		"<div class=\"card\"><h3>{title}</h3><table>\
		 <thead><tr><th>Name</th><th>Count</th></tr></thead>\
		 <tbody>{body}</tbody></table></div>"
	)
}

fn numbered_rows(n: usize) -> Vec<(String, String)> {
	(0..n).map(|i| (format!("user{i:02}"), i.to_string())).collect()
}

fn as_refs(rows: &[(String, String)]) -> Vec<(&str, &str)> {
	rows.iter().map(|(a, b)| (a.as_str(), b.as_str())).collect()
}

fn query_all(root: &Element, selector: &str) -> Vec<Element> {
	let list = root.query_selector_all(selector).unwrap();
	(0..list.length())
		.filter_map(|i| list.get(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

fn visible_names(root: &Element) -> Vec<String> {
	query_all(root, "tbody tr")
		.into_iter()
		.filter(|tr| !tr.class_list().contains("hidden"))
		.map(|tr| tr.first_element_child().unwrap().text_content().unwrap())
		.collect()
}

fn click(element: &Element) {
	element.dyn_ref::<HtmlElement>().unwrap().click();
}

#[wasm_bindgen_test]
fn test_table_pages_thirty_rows() {
	let rows = numbered_rows(30);
	let root = mount(&card_html("Sign-ins", &as_refs(&rows)));
	let card = root.query_selector(".card").unwrap().unwrap();

	let summary = table::enhance(&document(), &card).unwrap().unwrap();
	assert_eq!(summary.row_count, 30);
	assert_eq!(summary.title.as_deref(), Some("Sign-ins"));

	assert_eq!(visible_names(&root).len(), 25);
	assert!(root.query_selector("h3").unwrap().is_none());
	assert_eq!(
		root.query_selector(".row-count").unwrap().unwrap().text_content().unwrap(),
		"30 rows"
	);

	let labels: Vec<String> = query_all(&root, ".pagination .page-btn")
		.iter()
		.map(|b| b.text_content().unwrap())
		.collect();
	assert_eq!(labels, vec!["\u{2039}", "1", "2", "\u{203a}"]);

	let page_two = query_all(&root, ".pagination .page-btn")
		.into_iter()
		.find(|b| b.text_content().as_deref() == Some("2"))
		.unwrap();
	click(&page_two);
	assert_eq!(visible_names(&root), vec!["user25", "user26", "user27", "user28", "user29"]);

	root.remove();
}

#[wasm_bindgen_test]
fn test_header_click_sorts_numerically_and_toggles() {
	let root = mount(&card_html("Counts", &[("a", "10"), ("b", "9"), ("c", "100")]));
	let card = root.query_selector(".card").unwrap().unwrap();
	table::enhance(&document(), &card).unwrap();

	let count_header = query_all(&root, "thead th").remove(1);
	click(&count_header);
	assert_eq!(visible_names(&root), vec!["b", "a", "c"]);
	assert!(count_header.class_list().contains("sort-asc"));

	click(&count_header);
	assert_eq!(visible_names(&root), vec!["c", "a", "b"]);
	assert!(count_header.class_list().contains("sort-desc"));
	assert!(!count_header.class_list().contains("sort-asc"));

	let name_header = query_all(&root, "thead th").remove(0);
	click(&name_header);
	assert!(name_header.class_list().contains("sort-asc"));
	assert!(!count_header.class_list().contains("sort-desc"));

	root.remove();
}

#[wasm_bindgen_test]
fn test_text_column_uses_browser_collation() {
	let root = mount(&card_html(
		"Users",
		&[("Zoe", "1"), ("\u{c9}mile", "-"), ("Dana", ""), ("anna", "2")],
	));
	let card = root.query_selector(".card").unwrap().unwrap();
	table::enhance(&document(), &card).unwrap();

	let headers = query_all(&root, "thead th");
	click(&headers[0]);
	assert_eq!(visible_names(&root), vec!["anna", "Dana", "\u{c9}mile", "Zoe"]);

	// Placeholders compare as text, ahead of the numbers
	click(&headers[1]);
	assert_eq!(visible_names(&root), vec!["Dana", "\u{c9}mile", "Zoe", "anna"]);

	root.remove();
}

#[wasm_bindgen_test]
fn test_search_filters_case_insensitively() {
	let root = mount(&card_html(
		"Roles",
		&[("Admin User", "1"), ("Guest", "2"), ("admin service", "3")],
	));
	let card = root.query_selector(".card").unwrap().unwrap();
	table::enhance(&document(), &card).unwrap();

	let input: HtmlInputElement = root
		.query_selector(".search-input")
		.unwrap()
		.unwrap()
		.dyn_into()
		.unwrap();
	input.set_value("ADMIN");
	input.dispatch_event(&Event::new("input").unwrap()).unwrap();

	assert_eq!(visible_names(&root), vec!["Admin User", "admin service"]);
	assert_eq!(
		root.query_selector(".row-count").unwrap().unwrap().text_content().unwrap(),
		"2 rows"
	);
	assert!(query_all(&root, ".pagination *").is_empty());

	root.remove();
}

#[wasm_bindgen_test]
fn test_card_without_table_is_skipped() {
	let root = mount("<div class=\"card\"><h3>Notes</h3><p>No data</p></div>");
	let card = root.query_selector(".card").unwrap().unwrap();

	assert!(table::enhance(&document(), &card).unwrap().is_none());
	assert!(root.query_selector("h3").unwrap().is_some());

	root.remove();
}

#[wasm_bindgen_test]
fn test_row_tone_tinting() {
	let root = mount(
		"<div class=\"card\"><table><thead><tr><th>State</th></tr></thead><tbody>\
		 <tr><td><span class=\"status-word-yellow\">Warn</span></td></tr>\
		 <tr><td class=\"status-red\">Fail</td></tr>\
		 </tbody></table></div>",
	);
	let card = root.query_selector(".card").unwrap().unwrap();
	let summary = table::enhance(&document(), &card).unwrap().unwrap();

	let rows = query_all(&root, "tbody tr");
	assert!(rows[0].class_list().contains("row-yellow"));
	assert!(rows[1].class_list().contains("row-red"));
	assert_eq!(summary.tone, Some(entra_dashboard_core::StatusTone::Red));

	root.remove();
}

#[wasm_bindgen_test]
fn test_nav_build_is_idempotent() {
	let root = mount("<nav class=\"topnav\"></nav><div class=\"sub\">Generated 2026-10-01</div>");
	let config = DashboardConfig::default();

	nav::build(&document(), &config, "/reports/EntraDashboard.users.html").unwrap();
	let links = query_all(&root, ".topnav .nav-link");
	assert_eq!(links.len(), 11);
	let active: Vec<String> = links
		.iter()
		.filter(|a| a.class_list().contains("active"))
		.map(|a| a.text_content().unwrap())
		.collect();
	assert_eq!(active, vec!["Users"]);
	assert!(root.query_selector(".sub").unwrap().is_none());
	assert_eq!(
		root.query_selector(".nav-ts").unwrap().unwrap().text_content().unwrap(),
		"Generated 2026-10-01"
	);

	nav::build(&document(), &config, "/reports/EntraDashboard.pim.html").unwrap();
	let links = query_all(&root, ".topnav .nav-link");
	assert_eq!(links.len(), 11);
	assert_eq!(query_all(&root, ".topnav .brand").len(), 1);
	let active: Vec<String> = links
		.iter()
		.filter(|a| a.class_list().contains("active"))
		.map(|a| a.text_content().unwrap())
		.collect();
	assert_eq!(active, vec!["PIM"]);

	root.remove();
}

#[wasm_bindgen_test]
fn test_sections_toggle_independently() {
	let root = mount(
		"<div class=\"section\"><h2>Users</h2></div>\
		 <div class=\"section\"><h2>Licensing</h2></div>",
	);
	let config = DashboardConfig::default();
	sections::init(&document(), &config).unwrap();
	sections::init(&document(), &config).unwrap();

	assert_eq!(query_all(&root, ".section-chevron").len(), 2);
	assert_eq!(query_all(&root, ".section-icon").len(), 1);

	let sections = query_all(&root, ".section");
	click(&sections[0].query_selector("h2").unwrap().unwrap());
	assert!(sections[0].class_list().contains("collapsed"));
	assert!(!sections[1].class_list().contains("collapsed"));

	click(&sections[0].query_selector("h2").unwrap().unwrap());
	assert!(!sections[0].class_list().contains("collapsed"));

	root.remove();
}

#[wasm_bindgen_test]
fn test_menu_links_get_icon_and_arrow() {
	let root = mount("<a class=\"menu-link\" href=\"#\">Devices</a>");
	let config = DashboardConfig::default();
	menu::enhance(&document(), &config).unwrap();
	menu::enhance(&document(), &config).unwrap();

	assert_eq!(query_all(&root, ".menu-link-icon").len(), 1);
	assert_eq!(query_all(&root, ".menu-link-arrow").len(), 1);

	root.remove();
}

#[wasm_bindgen_test]
fn test_kpi_strip_follows_page_header() {
	let root = mount("<div class=\"page-header\"></div>");
	let window = web_sys::window().unwrap();
	let cards = vec![
		CardSummary {
			title: Some("Risky Users (7d)".to_string()),
			row_count: 12,
			tone: Some(entra_dashboard_core::StatusTone::Yellow),
		},
		CardSummary {
			title: None,
			row_count: 0,
			tone: None,
		},
	];
	kpi::build(&window, &document(), &DashboardConfig::default(), cards).unwrap();

	let kpis = query_all(&root, ".kpi-grid .kpi-card");
	assert_eq!(kpis.len(), 1);
	assert!(kpis[0].class_list().contains("kpi-yellow"));
	assert_eq!(
		kpis[0].query_selector(".kpi-label").unwrap().unwrap().text_content().unwrap(),
		"Risky Users"
	);

	root.remove();
}
