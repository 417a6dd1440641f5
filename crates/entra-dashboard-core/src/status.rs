//! Status markers carried by report cells
//!
//! The report generator tags cells with `status-red`, `status-word-red` and
//! their yellow and green siblings. They only drive display tinting.

/// Severity tone derived from status marker classes
///
/// Variants are ordered by priority, so `min()` over a set of tones yields
/// the one that wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusTone {
	/// `status-red` / `status-word-red`
	Red,
	/// `status-yellow` / `status-word-yellow`
	Yellow,
	/// `status-green` / `status-word-green`
	Green,
}

impl StatusTone {
	/// All tones in priority order
	pub const ALL: [StatusTone; 3] = [Self::Red, Self::Yellow, Self::Green];

	fn name(self) -> &'static str {
		match self {
			Self::Red => "red",
			Self::Yellow => "yellow",
			Self::Green => "green",
		}
	}

	/// The two marker classes that signal this tone
	pub fn marker_classes(self) -> [&'static str; 2] {
		match self {
			Self::Red => ["status-red", "status-word-red"],
			Self::Yellow => ["status-yellow", "status-word-yellow"],
			Self::Green => ["status-green", "status-word-green"],
		}
	}

	/// CSS selector matching any marker of this tone
	pub fn marker_selector(self) -> String {
		let [plain, word] = self.marker_classes();
		format!(".{plain}, .{word}")
	}

	/// Class added to a table row carrying this tone
	pub fn row_class(self) -> String {
		format!("row-{}", self.name())
	}

	/// Class added to a KPI card carrying this tone
	pub fn kpi_class(self) -> String {
		format!("kpi-{}", self.name())
	}

	/// Returns the highest-priority tone among `tones`
	pub fn strongest(tones: impl IntoIterator<Item = StatusTone>) -> Option<StatusTone> {
		tones.into_iter().min()
	}
}
