mod edit_overlay;
mod help;
mod outline;
mod sections;
mod status_bar;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;

use edit_overlay::render_edit_overlay;
use help::render_help;
use outline::render_outline;
pub use sections::build_lines;
use sections::render_sections;
use status_bar::{render_header, render_status_bar};

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Table of contents on the right when open: [sections 75%] [contents 25%]
    let content_area = if app.toc_open {
        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
            .split(chunks[1]);

        render_outline(f, app, horizontal_chunks[1]);
        horizontal_chunks[0]
    } else {
        chunks[1]
    };

    render_sections(f, app, content_area);
    render_status_bar(f, app, chunks[2]);

    if app.editor.is_some() {
        render_edit_overlay(f, app);
    } else if app.showing_help {
        render_help(f, app);
    }
}
