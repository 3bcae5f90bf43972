use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Clear, Paragraph},
    text::Line,
    Frame,
};

use crate::app::App;
use crate::rendering::Renderer;

/// Pad `s` with spaces up to `width` display columns, truncating when longer.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = Renderer::display_width_str(s);
    if current > width {
        return Renderer::truncate_to_width(s, width);
    }
    let mut out = s.to_string();
    out.push_str(&" ".repeat(width - current));
    out
}

/// Insert a `|` cursor at char position `cursor`.
pub fn add_cursor_to_text(text: &str, cursor: usize) -> String {
    let byte_pos = text
        .char_indices()
        .nth(cursor)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let mut out = text.to_string();
    out.insert(byte_pos, '|');
    out
}

/// Show only the part of `text` around `cursor` that fits in `width` columns.
pub fn scroll_field_to_cursor(text: &str, cursor: usize, width: usize) -> String {
    let with_cursor = add_cursor_to_text(text, cursor);
    let cursor_col = Renderer::prefix_display_width(text, cursor);
    if cursor_col < width {
        return with_cursor;
    }
    let skip = cursor_col + 1 - width;
    let mut used = 0usize;
    let mut out = String::new();
    for c in with_cursor.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used >= skip {
            out.push(c);
        }
        used += w;
    }
    out
}

/// Centered popup area, aligned to an even column so wide characters do not tear the border.
pub fn popup_area(area: Rect, max_width: u16, height_percent: u16) -> Rect {
    let popup_width = area.width.min(max_width);
    let popup_height = ((area.height * height_percent) / 100)
        .max(8)
        .min(area.height.saturating_sub(2).max(1));
    let x_centered = (area.width.saturating_sub(popup_width)) / 2;

    Rect {
        x: x_centered & !1,
        y: (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    }
}

/// Erase the popup area and fill it with the background color.
pub fn clear_popup(f: &mut Frame, app: &App, popup: Rect) {
    f.render_widget(Clear, popup);
    let blank_lines: Vec<Line> = (0..popup.height)
        .map(|_| Line::from(" ".repeat(popup.width as usize)))
        .collect();
    let blank = Paragraph::new(blank_lines).style(Style::default().bg(app.colorscheme.background));
    f.render_widget(blank, popup);
}
