//! ANSI color helpers for terminal output

use colored::Colorize;

/// Get colored session label
pub fn colored_label(label: &str) -> String {
    label.cyan().bold().to_string()
}

/// Get colored session key
pub fn colored_key(key: &str) -> String {
    key.white().dimmed().to_string()
}

/// Get colored timestamp
pub fn colored_time(timestamp: &str) -> String {
    timestamp.white().dimmed().to_string()
}

/// Get placeholder for an empty field
pub fn placeholder(text: &str) -> String {
    text.yellow().dimmed().to_string()
}

/// Get colored header
pub fn header(text: &str) -> String {
    text.bold().underline().to_string()
}

/// Get colored status message
pub fn status(text: &str) -> String {
    text.white().dimmed().to_string()
}

/// Format count with comma separators
pub fn format_count(n: usize) -> String {
    let s = n.to_string();
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}
