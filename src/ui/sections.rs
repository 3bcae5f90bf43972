use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

use crate::app::App;
use crate::rendering::{Renderer, MARKER_WIDTH};

use super::utils::pad_to_width;

pub fn render_sections(f: &mut Frame, app: &mut App, area: Rect) {
    let title = match &app.file_path {
        Some(path) => path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|name| format!(" {} ", name))
            .unwrap_or_default(),
        None => " sample ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(app.colorscheme.text_dim))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(app.colorscheme.border))
        .style(Style::default().bg(app.colorscheme.background));

    let inner = block.inner(area);
    f.render_widget(block, area);

    // Layout depends on the measured area, so update it before building lines
    app.content_width = inner.width as usize;
    app.visible_height = inner.height as usize;
    app.scroll = app.scroll.min(app.max_scroll());

    let lines = build_lines(app, Instant::now());
    let visible: Vec<Line> = lines
        .into_iter()
        .skip(app.scroll)
        .take(inner.height as usize)
        .collect();

    f.render_widget(Paragraph::new(visible), inner);
}

/// Every content line, in the same order and count as `App::layout`.
pub fn build_lines(app: &App, now: Instant) -> Vec<Line<'static>> {
    let width = app.get_content_width();
    let (label_width, value_width) = Renderer::column_widths(width);
    let scheme = &app.colorscheme;
    let mut lines = Vec::new();

    for (index, section) in app.sections.iter().enumerate() {
        let on_header = app.cursor.section == index && app.cursor.row.is_none();
        let header_bg = if on_header { scheme.section_cursor } else { scheme.background };

        let chevron = if section.is_open() { "▾" } else { "▸" };
        let copied = app.copied.count_in(section.id());
        let mut info = Vec::new();
        if copied > 0 {
            info.push(format!("{} copied", copied));
        }
        if !section.replacements().is_empty() {
            info.push(format!("{} replacements", section.replacements().len()));
        }
        let info = info.join(" · ");

        let title = format!(" {} {} ", chevron, section.title());
        let title_width = Renderer::display_width_str(&title);
        let info_width = Renderer::display_width_str(&info);
        let gap = width.saturating_sub(title_width + info_width + 1);

        lines.push(Line::from(vec![
            Span::styled(
                title,
                Style::default()
                    .fg(scheme.section_header)
                    .bg(header_bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ".repeat(gap), Style::default().bg(header_bg)),
            Span::styled(info, Style::default().fg(scheme.text_dim).bg(header_bg)),
        ]));

        if section.is_open() {
            for (row_index, row) in section.rows().iter().enumerate() {
                let value = section.effective_value(row_index).unwrap_or(&row.value);
                let value_lines = Renderer::wrap_value(value, value_width);
                let label_lines = Renderer::wrap_line(&row.label, label_width);
                let height = value_lines.len().max(label_lines.len());

                let on_row = app.cursor.section == index && app.cursor.row == Some(row_index);
                let highlighted = app.show_copied && app.copied.contains(section.id(), row_index);
                let bg = if on_row {
                    scheme.section_cursor
                } else if highlighted {
                    scheme.copied_row
                } else {
                    scheme.background
                };
                let flashing = section.is_flashing(row_index, now);

                for i in 0..height {
                    let label = label_lines.get(i).map(String::as_str).unwrap_or("");
                    let value = value_lines.get(i).map(String::as_str).unwrap_or("");
                    let marker = if i == 0 && flashing { "Copied!" } else { "" };

                    lines.push(Line::from(vec![
                        Span::styled(
                            pad_to_width(label, label_width),
                            Style::default().fg(scheme.label).bg(bg),
                        ),
                        Span::styled(" ", Style::default().bg(bg)),
                        Span::styled(
                            pad_to_width(value, value_width),
                            Style::default().fg(scheme.value).bg(bg),
                        ),
                        Span::styled("  ", Style::default().bg(bg)),
                        Span::styled(
                            pad_to_width(marker, MARKER_WIDTH),
                            Style::default()
                                .fg(scheme.flash)
                                .bg(bg)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]));
                }
            }
        }

        lines.push(Line::from(""));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::sample_tables;

    #[test]
    fn test_line_count_matches_layout() {
        let mut app = App::new(sample_tables());
        app.content_width = 40;
        app.expand_all();
        let lines = build_lines(&app, Instant::now());
        assert_eq!(lines.len(), app.total_lines());

        app.collapse_all();
        let lines = build_lines(&app, Instant::now());
        assert_eq!(lines.len(), app.sections.len() * 2);
    }
}
