//! Home page menu link decoration

use crate::sections::lookup;

/// Arrow glyph appended to every menu link
pub const ARROW: &str = "\u{2192}";

/// Emoji icons keyed by a substring of the lowercased link text
pub const MENU_ICONS: &[(&str, &str)] = &[
	("conditional access", "\u{1F6E1}\u{FE0F}"),
	("users", "\u{1F465}"),
	("groups", "\u{1F5C2}\u{FE0F}"),
	("devices", "\u{1F4BB}"),
	("enterprise apps", "\u{1F4E6}"),
	("app registrations", "\u{1F527}"),
	("monitoring", "\u{1F4CA}"),
	("intune", "\u{1F4F1}"),
	("defender", "\u{2694}\u{FE0F}"),
	("pim", "\u{1F510}"),
];

/// Emoji for a menu link; the last matching key wins
pub fn menu_icon(text: &str) -> Option<&'static str> {
	lookup(MENU_ICONS, text)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("Users", Some("\u{1F465}"))]
	#[case(" PIM Assignments ", Some("\u{1F510}"))]
	#[case("Defender Alerts", Some("\u{2694}\u{FE0F}"))]
	#[case("Secure Score", None)]
	fn test_menu_icon(#[case] text: &str, #[case] expected: Option<&str>) {
		assert_eq!(menu_icon(text), expected);
	}
}
