//! CSV download

use entra_dashboard_core::Result;
use entra_dashboard_core::tables::export::CSV_MIME_TYPE;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url};

use crate::dom;

/// Object URL revoked when dropped
struct ObjectUrl(String);

impl ObjectUrl {
	fn for_blob(blob: &Blob) -> Result<Self> {
		Ok(Self(Url::create_object_url_with_blob(blob)?))
	}

	fn as_str(&self) -> &str {
		&self.0
	}
}

impl Drop for ObjectUrl {
	fn drop(&mut self) {
		let _ = Url::revoke_object_url(&self.0);
	}
}

/// Offers `csv` to the user as a download named `file_name`
pub(crate) fn download(document: &Document, file_name: &str, csv: &str) -> Result<()> {
	let parts = js_sys::Array::of1(&JsValue::from_str(csv));
	let options = BlobPropertyBag::new();
	options.set_type(CSV_MIME_TYPE);
	let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;

	let url = ObjectUrl::for_blob(&blob)?;
	let anchor: HtmlAnchorElement = dom::create_as(document, "a", "")?;
	anchor.set_href(url.as_str());
	anchor.set_download(file_name);

	let body = dom::body(document)?;
	body.append_child(&anchor)?;
	anchor.click();
	body.remove_child(&anchor)?;
	Ok(())
}
