//! Simple line-based CLI output primitives.
//!
//! Every helper returns its lines instead of printing them, so rendered
//! views can be asserted on; [`print_lines`] writes them out.

/// Line width for separators and wrapped text.
pub const LINE_WIDTH: usize = 60;

/// Status icons
pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const FAILURE: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PENDING: &str = "…";
}

/// Title over a double rule.
///
/// ```text
/// PCA REGION
/// ════════════════════════════════════════════════════════════
/// ```
pub fn header(title: &str) -> Vec<String> {
    vec![title.to_string(), "═".repeat(LINE_WIDTH)]
}

/// Title over a single rule.
///
/// ```text
/// Want to see your regional rank here?
/// ────────────────────────────────────────────────────────────
/// ```
pub fn section(title: &str) -> Vec<String> {
    vec![title.to_string(), "─".repeat(LINE_WIDTH)]
}

/// A status line.
///
/// ```text
///   ✓ You've submitted your region
/// ```
pub fn step_line(icon: &str, message: &str) -> String {
    format!("  {} {}", icon, message)
}

/// `text` wrapped to the line width, indented by `indent` spaces.
pub fn paragraph(text: &str, indent: usize) -> Vec<String> {
    let pad = " ".repeat(indent);
    let width = LINE_WIDTH.saturating_sub(indent).max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(format!("{}{}", pad, current));
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(format!("{}{}", pad, current));
    }
    lines
}

/// Aligned `label: value` line.
///
/// ```text
///   Region:    NCR
/// ```
pub fn field(label: &str, value: &str) -> String {
    format!("  {:<10} {}", format!("{}:", label), value)
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_wraps_at_width() {
        let text = "word ".repeat(40);
        let lines = paragraph(&text, 2);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.starts_with("  "));
            assert!(line.chars().count() <= LINE_WIDTH);
        }
        let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
        assert_eq!(rejoined.len(), 40);
    }

    #[test]
    fn test_paragraph_keeps_long_words_whole() {
        let long = "x".repeat(LINE_WIDTH + 5);
        let lines = paragraph(&format!("a {} b", long), 0);
        assert_eq!(lines, vec!["a".to_string(), long, "b".to_string()]);
    }

    #[test]
    fn test_paragraph_empty() {
        assert!(paragraph("   ", 4).is_empty());
    }

    #[test]
    fn test_field_alignment() {
        assert_eq!(field("Region", "NCR"), "  Region:    NCR");
    }
}
