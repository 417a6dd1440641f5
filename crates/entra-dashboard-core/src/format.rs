//! Number formatting shared by the row-count badge and KPI counters

/// Formats `n` with comma thousands separators (`1234567` -> `"1,234,567"`)
pub fn grouped(n: usize) -> String {
	let digits = n.to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(ch);
	}
	out
}

/// Badge text for a table showing `n` matching rows
pub fn row_count_label(n: usize) -> String {
	let noun = if n == 1 { "row" } else { "rows" };
	format!("{} {noun}", grouped(n))
}
