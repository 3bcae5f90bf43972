use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::rendering::Renderer;

pub fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = " Command Snippets";
    let toggle = format!(
        "Show copied rows [{}] ",
        if app.show_copied { "on" } else { "off" }
    );
    let padding = (area.width as usize)
        .saturating_sub(Renderer::display_width_str(title) + Renderer::display_width_str(&toggle));

    let line = Line::from(vec![
        Span::styled(
            title,
            Style::default()
                .fg(app.colorscheme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(padding)),
        Span::styled(toggle, Style::default().fg(app.colorscheme.text_dim)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

pub fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();

    // Left side: status message
    if !app.status_message.is_empty() {
        let status_text = format!(" {} ", app.status_message);
        spans.push(Span::styled(
            status_text,
            Style::default().fg(app.colorscheme.status_bar),
        ));
    }

    // Right side: match mode and position
    let position_text = format!(
        "{}  {}/{} ",
        app.match_mode.label(),
        app.cursor.section + 1,
        app.sections.len()
    );
    let status_width = if !app.status_message.is_empty() {
        Renderer::display_width_str(&app.status_message) + 2
    } else {
        0
    };
    let available_width = area.width as usize;
    if available_width > status_width + position_text.len() {
        let padding_width = available_width - status_width - position_text.len();
        spans.push(Span::raw(" ".repeat(padding_width)));
    }
    spans.push(Span::styled(
        position_text,
        Style::default().fg(Color::DarkGray),
    ));

    let status_widget = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);
    f.render_widget(status_widget, area);
}
