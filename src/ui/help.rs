use ratatui::{
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;

use super::utils::{clear_popup, popup_area};

pub fn render_help(f: &mut Frame, app: &App) {
    let popup = popup_area(f.area(), 72, 80);
    clear_popup(f, app, popup);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(app.colorscheme.background).fg(Color::White));

    let lines: Vec<Line> = App::help_lines()
        .into_iter()
        .map(|line| {
            // Section headings are the unindented lines
            if !line.is_empty() && !line.starts_with(' ') {
                Line::styled(
                    line,
                    Style::default()
                        .fg(app.colorscheme.title)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Line::styled(line, Style::default().fg(app.colorscheme.label))
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.help_scroll, 0));
    f.render_widget(paragraph, popup);
}
