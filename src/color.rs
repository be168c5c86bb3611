//! CSS colour comparison.
//!
//! Browsers serialise inline colours on read-back, so `#F2A900` is written but `rgb(242, 169, 0)` is read.
//! Named colours other than the handful below are compared textually.

/// Whether two CSS colour strings denote the same colour.
#[must_use]
pub fn same_color(a: &str, b: &str) -> bool {
	match (parse_rgb(a), parse_rgb(b)) {
		(Some(a), Some(b)) => a == b,
		_ => a.trim().eq_ignore_ascii_case(b.trim()),
	}
}

fn parse_rgb(color: &str) -> Option<(u8, u8, u8)> {
	let color = color.trim().to_ascii_lowercase();
	if let Some(hex) = color.strip_prefix('#') {
		return parse_hex(hex);
	}
	if let Some(args) = color.strip_prefix("rgb(").and_then(|rest| rest.strip_suffix(')')) {
		let mut channels = args.split(',').map(|channel| channel.trim().parse::<u8>());
		let rgb = (channels.next()?.ok()?, channels.next()?.ok()?, channels.next()?.ok()?);
		return channels.next().is_none().then(|| rgb);
	}
	match color.as_str() {
		"white" => Some((255, 255, 255)),
		"black" => Some((0, 0, 0)),
		_ => None,
	}
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
	if !hex.is_ascii() {
		return None;
	}
	let channel = |s: &str| u8::from_str_radix(s, 16).ok();
	match hex.len() {
		6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
		3 => {
			let short = |i: usize| channel(&hex[i..=i]).map(|c| c * 17);
			Some((short(0)?, short(1)?, short(2)?))
		}
		_ => None,
	}
}
