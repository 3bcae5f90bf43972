use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::rendering::Renderer;

pub fn render_outline(f: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.toc_has_focus {
        app.colorscheme.selected
    } else {
        app.colorscheme.toc_border
    };

    let block = Block::default()
        .title(" Contents ")
        .title_style(Style::default().fg(app.colorscheme.toc_title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(app.colorscheme.background));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let entries = app.toc_entries();
    let active = app.active_section_id();
    let visible_height = inner_area.height as usize;

    // Keep the focused selection inside the panel
    let scroll = if app.toc_selected >= visible_height {
        app.toc_selected + 1 - visible_height
    } else {
        0
    };

    let max_width = inner_area.width.saturating_sub(3) as usize;
    let mut lines = Vec::new();
    for (i, (id, title)) in entries.iter().enumerate().skip(scroll).take(visible_height) {
        let is_active = active == Some(*id);
        let is_selected = app.toc_has_focus && i == app.toc_selected;
        let marker = if is_active { "▶ " } else { "  " };
        let text = format!("{}{}", marker, Renderer::truncate_to_width(title, max_width));

        let style = if is_selected {
            Style::default()
                .fg(Color::Black)
                .bg(app.colorscheme.selected)
                .add_modifier(Modifier::BOLD)
        } else if is_active {
            Style::default()
                .fg(app.colorscheme.toc_active)
                .bg(app.colorscheme.background)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(app.colorscheme.label)
                .bg(app.colorscheme.background)
        };

        lines.push(Line::styled(text, style));
    }

    f.render_widget(Paragraph::new(lines), inner_area);
}
