//! CLI output formatting utilities.
//!
//! Tables are built by the commands with `tabled`; this module holds the
//! JSON highlighting shared by every `--json` output.

use colored::Colorize;
use serde_json::Value;

const INDENT: &str = "  ";

/// Prints JSON with syntax highlighting.
///
/// Colors:
/// - Keys: Cyan
/// - Strings: Green
/// - Numbers: Yellow
/// - Booleans/Null: Magenta
/// - Brackets/Braces: White (default)
pub fn print_highlighted_json(value: &Value) {
    let mut out = String::new();
    render(value, 0, &mut out);
    println!("{out}");
}

/// Appends `value` to `out`, pretty-printed at nesting `depth`.
fn render(value: &Value, depth: usize, out: &mut String) {
    match value {
        Value::Null | Value::Bool(_) => out.push_str(&value.to_string().magenta().to_string()),
        Value::Number(n) => out.push_str(&n.to_string().yellow().to_string()),
        Value::String(_) => out.push_str(&value.to_string().green().to_string()),
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str(&"[]".white().bold().to_string());
                return;
            }
            out.push_str(&"[".white().bold().to_string());
            for (i, item) in items.iter().enumerate() {
                separator(i, depth + 1, out);
                render(item, depth + 1, out);
            }
            close(']', depth, out);
        }
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str(&"{}".white().bold().to_string());
                return;
            }
            out.push_str(&"{".white().bold().to_string());
            for (i, (key, item)) in map.iter().enumerate() {
                separator(i, depth + 1, out);
                out.push_str(&Value::from(key.as_str()).to_string().cyan().to_string());
                out.push_str(&":".white().to_string());
                out.push(' ');
                render(item, depth + 1, out);
            }
            close('}', depth, out);
        }
    }
}

fn separator(index: usize, depth: usize, out: &mut String) {
    if index > 0 {
        out.push_str(&",".white().to_string());
    }
    out.push('\n');
    out.push_str(&INDENT.repeat(depth));
}

fn close(bracket: char, depth: usize, out: &mut String) {
    out.push('\n');
    out.push_str(&INDENT.repeat(depth));
    out.push_str(&bracket.to_string().white().bold().to_string());
}

/// Truncates a string to a maximum number of characters, adding ellipsis if needed.
#[must_use]
pub fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some(_) if max_chars <= 1 => "…".to_string(),
        Some(_) => {
            let cut = s.char_indices().nth(max_chars - 1).map_or(s.len(), |(idx, _)| idx);
            format!("{}…", &s[..cut])
        }
    }
}
