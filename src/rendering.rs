use unicode_width::UnicodeWidthChar;

use crate::replace::{apply_replacements, MatchMode};
use crate::tables::Table;

/// Share of a row given to the label column. The value gets the rest.
pub const LABEL_COLUMN_PERCENT: usize = 30;

/// Columns reserved right of a value for the copy marker.
pub const MARKER_WIDTH: usize = 9;

pub struct Renderer;

impl Renderer {
    pub fn display_width_str(s: &str) -> usize {
        s.chars()
            .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
            .sum()
    }

    pub fn prefix_display_width(s: &str, char_pos: usize) -> usize {
        s.chars()
            .take(char_pos)
            .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
            .sum()
    }

    /// Label and value column widths for a content area `width` columns wide.
    pub fn column_widths(width: usize) -> (usize, usize) {
        let label = (width * LABEL_COLUMN_PERCENT / 100).max(1);
        let value = width
            .saturating_sub(label)
            .saturating_sub(MARKER_WIDTH + 3)
            .max(1);
        (label, value)
    }

    /// Lines of a value as displayed; blank lines around a snippet are dropped.
    pub fn display_lines(value: &str) -> Vec<&str> {
        let trimmed = value.trim_matches('\n');
        if trimmed.is_empty() {
            return vec![""];
        }
        trimmed.lines().collect()
    }

    /// Hard-wrap one line by display width. Always returns at least one line.
    pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
        let width = width.max(1);
        let mut out = Vec::new();
        let mut current = String::new();
        let mut used = 0usize;
        for c in line.chars() {
            let w = UnicodeWidthChar::width(c).unwrap_or(0);
            if used + w > width && !current.is_empty() {
                out.push(std::mem::take(&mut current));
                used = 0;
            }
            current.push(c);
            used += w;
        }
        out.push(current);
        out
    }

    /// Wrap every display line of `value` to `width`.
    pub fn wrap_value(value: &str, width: usize) -> Vec<String> {
        Self::display_lines(value)
            .into_iter()
            .flat_map(|line| Self::wrap_line(line, width))
            .collect()
    }

    pub fn truncate_to_width(s: &str, width: usize) -> String {
        if Self::display_width_str(s) <= width {
            return s.to_string();
        }
        let mut out = String::new();
        let mut used = 0usize;
        let limit = width.saturating_sub(3);
        for c in s.chars() {
            let w = UnicodeWidthChar::width(c).unwrap_or(0);
            if used + w > limit {
                break;
            }
            out.push(c);
            used += w;
        }
        out.push_str("...");
        out
    }

    /// Plain-text dump of every table with replacements applied.
    pub fn render_plain(tables: &[Table], mode: MatchMode) -> Vec<String> {
        let mut lines = Vec::new();
        for (i, table) in tables.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.push(format!("## {}", table.title));
            lines.push(String::new());
            for row in &table.rows {
                let value = apply_replacements(&row.value, &table.replacements, mode);
                let mut value_lines = Self::display_lines(&value).into_iter();
                lines.push(format!("{}: {}", row.label, value_lines.next().unwrap_or("")));
                for rest in value_lines {
                    lines.push(format!("    {}", rest));
                }
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replace::Replacements;
    use crate::tables::Row;

    #[test]
    fn test_wrap_line_by_width() {
        assert_eq!(Renderer::wrap_line("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(Renderer::wrap_line("", 4), vec![""]);
        // Wide characters take two columns.
        assert_eq!(Renderer::wrap_line("日本語", 4), vec!["日本", "語"]);
    }

    #[test]
    fn test_display_lines_trims_surrounding_newlines() {
        assert_eq!(Renderer::display_lines("\nfn a() {\n}\n"), vec!["fn a() {", "}"]);
        assert_eq!(Renderer::display_lines(""), vec![""]);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(Renderer::truncate_to_width("Git Commands", 20), "Git Commands");
        assert_eq!(Renderer::truncate_to_width("Git Commands", 8), "Git C...");
    }

    #[test]
    fn test_render_plain_applies_replacements() {
        let tables = vec![Table::new("Git", vec![Row::new("Clone", "git clone <url>")])
            .with_replacements(Replacements::from_pairs([("<url>", "https://x.git")]))];
        let lines = Renderer::render_plain(&tables, MatchMode::Literal);
        assert_eq!(lines, vec!["## Git", "", "Clone: git clone https://x.git"]);
    }
}
