use std::borrow::Cow;

use anyhow::{Context, Result, bail};
use ratatui::style::{Color, Modifier, Style};

/// Styles used when drawing the prompt, the status line and the result pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub prompt: Style,
	pub input: Style,
	/// Highlighted result line, including its marker.
	pub selected: Style,
	pub error: Style,
	pub status: Style,
}

impl Default for Theme {
	fn default() -> Self {
		Self::with_colors(Color::Yellow, Color::Red)
	}
}

impl Theme {
	/// Default theme with custom selection and error colours.
	#[must_use]
	pub fn with_colors(selected: Color, error: Color) -> Self {
		Self {
			prompt: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
			input: Style::new(),
			selected: Style::new().fg(selected).add_modifier(Modifier::BOLD),
			error: Style::new().fg(error),
			status: Style::new().fg(Color::DarkGray),
		}
	}
}

/// Parse a colour written as a name, `#rgb`, `#rrggbb`, `rgb(r, g, b)`,
/// `ansi(n)` or a bare ANSI index.
pub fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		return parse_hex_colour(hex);
	}

	if let Some(body) = value.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
		return parse_rgb_triplet(body);
	}

	if let Some(body) = value
		.strip_prefix("ansi(")
		.and_then(|s| s.strip_suffix(')'))
	{
		let index: u8 = body
			.trim()
			.parse()
			.with_context(|| format!("invalid ANSI colour index `{body}`"))?;
		return Ok(Color::Indexed(index));
	}

	if let Ok(index) = value.parse::<u8>() {
		return Ok(Color::Indexed(index));
	}

	match normalise_key(value).as_ref() {
		"reset" | "none" | "default" => Ok(Color::Reset),
		"black" => Ok(Color::Black),
		"red" => Ok(Color::Red),
		"green" => Ok(Color::Green),
		"yellow" => Ok(Color::Yellow),
		"blue" => Ok(Color::Blue),
		"magenta" => Ok(Color::Magenta),
		"cyan" => Ok(Color::Cyan),
		"gray" | "grey" => Ok(Color::Gray),
		"dark_gray" | "dark_grey" => Ok(Color::DarkGray),
		"light_red" => Ok(Color::LightRed),
		"light_green" => Ok(Color::LightGreen),
		"light_yellow" => Ok(Color::LightYellow),
		"light_blue" => Ok(Color::LightBlue),
		"light_magenta" => Ok(Color::LightMagenta),
		"light_cyan" => Ok(Color::LightCyan),
		"white" => Ok(Color::White),
		other => bail!("unknown colour `{other}`"),
	}
}

fn parse_hex_colour(hex: &str) -> Result<Color> {
	let expanded = match hex.len() {
		3 => {
			let mut expanded = String::with_capacity(6);
			for ch in hex.chars() {
				expanded.push(ch);
				expanded.push(ch);
			}
			Cow::Owned(expanded)
		}
		6 => Cow::Borrowed(hex),
		_ => bail!("hex colours must be 3 or 6 characters long"),
	};
	if !expanded.is_ascii() {
		bail!("invalid hex colour `#{hex}`");
	}

	let r = u8::from_str_radix(&expanded[0..2], 16)
		.with_context(|| format!("invalid red component `{hex}`"))?;
	let g = u8::from_str_radix(&expanded[2..4], 16)
		.with_context(|| format!("invalid green component `{hex}`"))?;
	let b = u8::from_str_radix(&expanded[4..6], 16)
		.with_context(|| format!("invalid blue component `{hex}`"))?;

	Ok(Color::Rgb(r, g, b))
}

fn parse_rgb_triplet(body: &str) -> Result<Color> {
	let components = body.split(',').map(str::trim).collect::<Vec<_>>();

	if components.len() != 3 {
		bail!(
			"expected three components for rgb() colour, found {}",
			components.len()
		);
	}

	let component = |value: &str, name: char| {
		value
			.parse::<u8>()
			.with_context(|| format!("invalid {name}-component `{value}` in rgb() colour"))
	};
	Ok(Color::Rgb(
		component(components[0], 'r')?,
		component(components[1], 'g')?,
		component(components[2], 'b')?,
	))
}

fn normalise_key(value: &str) -> String {
	value
		.trim()
		.to_ascii_lowercase()
		.chars()
		.map(|ch| match ch {
			'-' | ' ' => '_',
			other => other,
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_every_supported_notation() {
		assert_eq!(parse_color("yellow").unwrap(), Color::Yellow);
		assert_eq!(parse_color("Dark-Grey").unwrap(), Color::DarkGray);
		assert_eq!(parse_color("#f00").unwrap(), Color::Rgb(255, 0, 0));
		assert_eq!(parse_color("#10ff20").unwrap(), Color::Rgb(16, 255, 32));
		assert_eq!(parse_color("rgb(1, 2, 3)").unwrap(), Color::Rgb(1, 2, 3));
		assert_eq!(parse_color("ansi(42)").unwrap(), Color::Indexed(42));
		assert_eq!(parse_color("208").unwrap(), Color::Indexed(208));
	}

	#[test]
	fn rejects_malformed_colours() {
		assert!(parse_color("chartreuse-ish").is_err());
		assert!(parse_color("#12").is_err());
		assert!(parse_color("#gg0000").is_err());
		assert!(parse_color("rgb(1, 2)").is_err());
		assert!(parse_color("rgb(1, 2, 300)").is_err());
	}

	#[test]
	fn selected_style_is_bold_in_the_chosen_colour() {
		let theme = Theme::with_colors(Color::Green, Color::Magenta);
		assert_eq!(theme.selected.fg, Some(Color::Green));
		assert!(theme.selected.add_modifier.contains(Modifier::BOLD));
		assert_eq!(theme.error.fg, Some(Color::Magenta));
	}
}
