//! CSV export of the filtered view

use std::sync::LazyLock;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use regex::Regex;

use super::model::Row;
use crate::error::{DashboardError, Result};

/// File name stem used when a table has no title
pub const DEFAULT_EXPORT_NAME: &str = "export";

/// MIME type of the downloaded file
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";

static NON_ALPHANUMERIC: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("static pattern is valid"));

/// Serializes `headers` followed by `rows` as CSV
///
/// Every field is double-quoted and embedded quotes are doubled. Records
/// are separated by `\n` with no trailing newline.
pub fn to_csv<'a, S: AsRef<str>>(
	headers: &[S],
	rows: impl IntoIterator<Item = &'a Row>,
) -> Result<String> {
	let mut writer = WriterBuilder::new()
		.quote_style(QuoteStyle::Always)
		.terminator(Terminator::Any(b'\n'))
		.flexible(true)
		.from_writer(Vec::new());

	writer.write_record(headers.iter().map(|h| h.as_ref().trim()))?;
	for row in rows {
		writer.write_record(row.cells())?;
	}

	let bytes = writer
		.into_inner()
		.map_err(|e| DashboardError::Export(e.to_string()))?;
	let mut text = String::from_utf8(bytes).map_err(|e| DashboardError::Export(e.to_string()))?;
	if text.ends_with('\n') {
		text.pop();
	}
	Ok(text)
}

/// Download file name for a table titled `title`
///
/// Runs of characters outside `[A-Za-z0-9]` become a single `_` and the
/// result is lowercased. An empty title falls back to `export`.
pub fn file_name(title: &str) -> String {
	let stem = if title.is_empty() {
		DEFAULT_EXPORT_NAME
	} else {
		title
	};
	format!("{}.csv", NON_ALPHANUMERIC.replace_all(stem, "_").to_lowercase())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_quotes_are_doubled() {
		let rows = [Row::from_cells(0, vec![r#"She said "hi""#.to_string()])];
		let csv = to_csv(&["Note"], &rows).unwrap();
		assert_eq!(csv, "\"Note\"\n\"She said \"\"hi\"\"\"");
	}

	#[rstest]
	fn test_commas_and_empty_cells_stay_quoted() {
		let rows = [Row::from_cells(0, vec!["Doe, Jane".to_string(), String::new()])];
		let csv = to_csv(&[" Name ", "Dept"], &rows).unwrap();
		assert_eq!(csv, "\"Name\",\"Dept\"\n\"Doe, Jane\",\"\"");
	}

	#[rstest]
	fn test_ragged_rows_are_written() {
		let rows = [
			Row::from_cells(0, vec!["a".to_string()]),
			Row::from_cells(1, vec!["b".to_string(), "c".to_string(), "d".to_string()]),
		];
		let csv = to_csv(&["One", "Two"], &rows).unwrap();
		assert_eq!(csv, "\"One\",\"Two\"\n\"a\"\n\"b\",\"c\",\"d\"");
	}

	#[rstest]
	#[case("Conditional Access Policies", "conditional_access_policies.csv")]
	#[case("Users (Guests & Members)", "users_guests_members_.csv")]
	#[case("", "export.csv")]
	#[case("MFA -- Status!!", "mfa_status_.csv")]
	#[case("Café Apps", "caf_apps.csv")]
	fn test_file_name(#[case] title: &str, #[case] expected: &str) {
		assert_eq!(file_name(title), expected);
	}
}
