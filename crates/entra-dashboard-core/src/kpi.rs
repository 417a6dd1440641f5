//! KPI strip derived from the tables on a page
//!
//! Purely decorative: one counter per card with a non-empty table, tinted by
//! the strongest status marker found in that card.

use std::sync::LazyLock;

use regex::Regex;

use crate::format::grouped;
use crate::status::StatusTone;

/// Label used for a card without a title
pub const DEFAULT_LABEL: &str = "Items";

/// Labels longer than this many characters are truncated
const MAX_LABEL_CHARS: usize = 22;

/// Characters kept before the ellipsis of a truncated label
const TRUNCATED_LABEL_CHARS: usize = 20;

static PARENTHESIZED: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\s*\(.*?\)").expect("static pattern is valid"));

/// What a table widget reports about its card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSummary {
	/// Card title, if the card had one
	pub title: Option<String>,
	/// Number of body rows
	pub row_count: usize,
	/// Strongest status tone across the card's rows
	pub tone: Option<StatusTone>,
}

/// One counter of the KPI strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiMetric {
	/// Final counter value
	pub value: usize,
	/// Shortened label
	pub label: String,
	/// Tint
	pub tone: Option<StatusTone>,
}

impl KpiMetric {
	/// Classes of the `.kpi-card` element
	pub fn card_class(&self) -> String {
		match self.tone {
			Some(tone) => format!("kpi-card {}", tone.kpi_class()),
			None => "kpi-card".to_string(),
		}
	}
}

/// Drops parenthesized groups and truncates long labels
pub fn short_label(label: &str) -> String {
	let stripped = PARENTHESIZED.replace_all(label, "");
	let stripped = stripped.trim();
	if stripped.chars().count() > MAX_LABEL_CHARS {
		let head: String = stripped.chars().take(TRUNCATED_LABEL_CHARS).collect();
		format!("{head}\u{2026}")
	} else {
		stripped.to_string()
	}
}

/// Builds at most `limit` metrics, skipping cards without rows
pub fn collect_metrics(cards: impl IntoIterator<Item = CardSummary>, limit: usize) -> Vec<KpiMetric> {
	cards
		.into_iter()
		.filter(|card| card.row_count > 0)
		.map(|card| KpiMetric {
			value: card.row_count,
			label: short_label(card.title.as_deref().filter(|t| !t.is_empty()).unwrap_or(DEFAULT_LABEL)),
			tone: card.tone,
		})
		.take(limit)
		.collect()
}

/// Ease-out cubic curve over `progress` in `[0, 1]`
pub fn ease_out_cubic(progress: f64) -> f64 {
	1.0 - (1.0 - progress.clamp(0.0, 1.0)).powi(3)
}

/// Count-up animation of one KPI value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
	/// Final value
	pub target: usize,
	/// Animation duration in milliseconds
	pub duration_ms: f64,
}

impl CountUp {
	/// Creates an animation towards `target`
	pub fn new(target: usize, duration_ms: u32) -> Self {
		Self {
			target,
			duration_ms: f64::from(duration_ms),
		}
	}

	/// Progress in `[0, 1]` after `elapsed_ms`
	pub fn progress(&self, elapsed_ms: f64) -> f64 {
		if self.duration_ms <= 0.0 {
			1.0
		} else {
			(elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
		}
	}

	/// Whether the animation has reached its target
	pub fn is_done(&self, elapsed_ms: f64) -> bool {
		self.progress(elapsed_ms) >= 1.0
	}

	/// Counter value after `elapsed_ms`
	pub fn value_at(&self, elapsed_ms: f64) -> usize {
		if self.is_done(elapsed_ms) {
			return self.target;
		}
		let eased = ease_out_cubic(self.progress(elapsed_ms));
		(eased * self.target as f64).round() as usize
	}

	/// Counter text after `elapsed_ms`
	pub fn text_at(&self, elapsed_ms: f64) -> String {
		grouped(self.value_at(elapsed_ms))
	}
}

/// `animation-delay` of the `index`-th KPI card
pub fn animation_delay(index: usize) -> String {
	format!("{}ms", index * 60)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn card(title: Option<&str>, rows: usize, tone: Option<StatusTone>) -> CardSummary {
		CardSummary {
			title: title.map(str::to_string),
			row_count: rows,
			tone,
		}
	}

	#[rstest]
	#[case("Users (all)", "Users")]
	#[case("Risky Sign-ins (last 7 days) (preview)", "Risky Sign-ins")]
	#[case("Conditional Access Policies", "Conditional Access P\u{2026}")]
	#[case("Twenty-two characters!", "Twenty-two characters!")]
	#[case("  Devices  ", "Devices")]
	fn test_short_label(#[case] label: &str, #[case] expected: &str) {
		assert_eq!(short_label(label), expected);
	}

	#[rstest]
	fn test_collect_metrics_skips_empty_and_defaults_label() {
		let metrics = collect_metrics(
			[
				card(Some("Users"), 12, Some(StatusTone::Red)),
				card(Some("Groups"), 0, None),
				card(None, 3, None),
			],
			8,
		);
		assert_eq!(metrics.len(), 2);
		assert_eq!(metrics[0].card_class(), "kpi-card kpi-red");
		assert_eq!(metrics[1].label, DEFAULT_LABEL);
		assert_eq!(metrics[1].card_class(), "kpi-card");
	}

	#[rstest]
	fn test_collect_metrics_caps() {
		let cards = (0..12).map(|i| card(Some("Table"), i + 1, None));
		let metrics = collect_metrics(cards, 8);
		assert_eq!(metrics.len(), 8);
		assert_eq!(metrics[7].value, 8);
	}

	#[rstest]
	#[case(0.0, 0.0)]
	#[case(0.5, 0.875)]
	#[case(1.0, 1.0)]
	#[case(2.0, 1.0)]
	fn test_ease_out_cubic(#[case] progress: f64, #[case] expected: f64) {
		assert!((ease_out_cubic(progress) - expected).abs() < 1e-9);
	}

	#[rstest]
	fn test_count_up_reaches_target() {
		let count = CountUp::new(1200, 900);
		assert_eq!(count.value_at(0.0), 0);
		assert_eq!(count.value_at(450.0), 1050);
		assert!(!count.is_done(899.0));
		assert_eq!(count.text_at(900.0), "1,200");
		assert_eq!(count.value_at(5000.0), 1200);
	}

	#[rstest]
	fn test_zero_duration_is_immediately_done() {
		let count = CountUp::new(7, 0);
		assert!(count.is_done(0.0));
		assert_eq!(count.value_at(0.0), 7);
	}

	#[rstest]
	fn test_animation_delay() {
		assert_eq!(animation_delay(0), "0ms");
		assert_eq!(animation_delay(3), "180ms");
	}
}
