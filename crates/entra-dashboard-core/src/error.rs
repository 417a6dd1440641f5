//! Error types for the dashboard enhancer

use wasm_bindgen::JsValue;

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Errors raised while reading configuration or touching the DOM
///
/// None of these surface to the user. The page entry point logs them and
/// leaves the static markup as it was.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
	/// The inline configuration block is not valid JSON for [`DashboardConfig`](crate::DashboardConfig)
	#[error("Invalid dashboard configuration: {0}")]
	Config(#[from] serde_json::Error),

	/// A browser global (`window`, `document`, `body`) is unavailable
	#[error("Missing browser global: {0}")]
	MissingGlobal(&'static str),

	/// A DOM call threw
	#[error("DOM operation failed: {0}")]
	Dom(String),

	/// The CSV writer rejected a record
	#[error("CSV export failed: {0}")]
	Export(String),
}

impl From<JsValue> for DashboardError {
	fn from(value: JsValue) -> Self {
		let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
		Self::Dom(message)
	}
}

impl From<csv::Error> for DashboardError {
	fn from(error: csv::Error) -> Self {
		Self::Export(error.to_string())
	}
}
