//! Output formatting utilities

use colored::Colorize;
use serde::Serialize;
use serde_json::Value;

/// Output format for displaying values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
	Text,
	Json,
}

/// Print a success message
pub(crate) fn success(msg: &str) {
	println!("{} {}", "✓".green().bold(), msg);
}

/// Print an error message
pub(crate) fn error(msg: &str) {
	eprintln!("{} {}", "✗".red().bold(), msg);
}

/// Print a warning message
pub(crate) fn warning(msg: &str) {
	println!("{} {}", "⚠".yellow().bold(), msg);
}

/// Print an info message
pub(crate) fn info(msg: &str) {
	println!("{} {}", "ℹ".blue().bold(), msg);
}

/// Format and print a value based on the output format
pub(crate) fn print_value<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
	match format {
		OutputFormat::Json => {
			let json = serde_json::to_string_pretty(value)?;
			println!("{}", json);
		}
		OutputFormat::Text => {
			let json = serde_json::to_value(value)?;
			print!("{}", render_text(&json, 0));
		}
	}
	Ok(())
}

fn render_text(value: &Value, indent: usize) -> String {
	let indent_str = "  ".repeat(indent);
	match value {
		Value::Object(map) if map.is_empty() => "{}\n".to_string(),
		Value::Array(arr) if arr.is_empty() => "[]\n".to_string(),
		Value::Object(map) => {
			let mut out = String::new();
			for (key, val) in map {
				match val {
					Value::Object(inner) if !inner.is_empty() => {
						out.push_str(&format!("{}{}:\n", indent_str, key.cyan().bold()));
						out.push_str(&render_text(val, indent + 1));
					}
					Value::Array(items) if !items.is_empty() => {
						out.push_str(&format!("{}{}:\n", indent_str, key.cyan().bold()));
						out.push_str(&render_text(val, indent + 1));
					}
					_ => {
						out.push_str(&format!("{}{}: ", indent_str, key.cyan().bold()));
						out.push_str(&render_text(val, 0));
					}
				}
			}
			out
		}
		Value::Array(arr) => {
			let mut out = String::new();
			for val in arr {
				match val {
					Value::Object(_) | Value::Array(_) => {
						out.push_str(&format!("{}-\n", indent_str));
						out.push_str(&render_text(val, indent + 1));
					}
					_ => {
						out.push_str(&format!("{}- ", indent_str));
						out.push_str(&render_text(val, 0));
					}
				}
			}
			out
		}
		Value::String(s) => format!("{}\n", s.green()),
		Value::Number(n) => format!("{}\n", n.to_string().yellow()),
		Value::Bool(b) => format!("{}\n", b.to_string().blue()),
		Value::Null => format!("{}\n", "null".dimmed()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn render_text_nests_mappings_and_lists() {
		// Arrange
		colored::control::set_override(false);
		let value = json!({
			"class": "app::loader::Yaml",
			"arguments": ["en_US", ["@app::faker::Books"], 7],
			"setup": [],
			"inject": false,
		});

		// Act
		let text = render_text(&value, 0);

		// Assert
		assert_eq!(
			text,
			"class: app::loader::Yaml\n\
			 arguments:\n\
			 \x20\x20- en_US\n\
			 \x20\x20-\n\
			 \x20\x20\x20\x20- @app::faker::Books\n\
			 \x20\x20- 7\n\
			 setup: []\n\
			 inject: false\n"
		);
	}
}
