use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode};

pub fn handle_normal_mode(app: &mut App, key: KeyEvent) -> Result<bool> {
    if app.showing_help {
        return Ok(handle_help(app, key));
    }

    // Handle table of contents navigation if it has focus
    if app.toc_open && app.toc_has_focus {
        return Ok(handle_toc_navigation(app, key));
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('d') => app.page_down(),
            KeyCode::Char('u') => app.page_up(),
            _ => {}
        }
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_buffer = String::new();
            app.set_status(":");
        }
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.move_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.move_to_bottom(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_cursor(),
        KeyCode::Char('y') => app.copy_current_row(),
        KeyCode::Char('c') => app.clear_section(app.current_section()),
        KeyCode::Char('e') => app.open_editor(app.current_section()),
        KeyCode::Char('t') => app.toggle_show_copied(),
        KeyCode::Char('o') => app.toggle_toc(),
        KeyCode::Tab => app.focus_toc(),
        KeyCode::Char('h') | KeyCode::Left => {
            // Collapse the section under the cursor
            let section = app.current_section();
            if app.sections.get(section).is_some_and(|s| s.is_open()) {
                app.toggle_section(section);
            }
        }
        KeyCode::Char('l') | KeyCode::Right => {
            let section = app.current_section();
            if app.sections.get(section).is_some_and(|s| !s.is_open()) {
                app.toggle_section(section);
            }
        }
        KeyCode::Esc => app.set_status(""),
        _ => {}
    }
    Ok(false)
}

fn handle_help(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => app.toggle_help(),
        KeyCode::Down | KeyCode::Char('j') => app.help_scroll = app.help_scroll.saturating_add(1),
        KeyCode::Up | KeyCode::Char('k') => app.help_scroll = app.help_scroll.saturating_sub(1),
        _ => {}
    }
    false
}

fn handle_toc_navigation(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.toc_move_down(),
        KeyCode::Up | KeyCode::Char('k') => app.toc_move_up(),
        KeyCode::Enter | KeyCode::Char('l') => app.toc_jump_to_selected(),
        KeyCode::Tab | KeyCode::Esc => app.toc_has_focus = false,
        KeyCode::Char('o') => app.toggle_toc(),
        KeyCode::Char('q') => return true,
        _ => {}
    }
    false
}
