use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, InputMode};

pub fn handle_command_mode(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_buffer.clear();
            app.set_status("");
        }
        KeyCode::Enter => {
            if app.execute_command() {
                return Ok(true); // Quit the application
            }
            app.input_mode = InputMode::Normal;
            app.command_buffer.clear();
        }
        KeyCode::Char(c) => {
            app.command_buffer.push(c);
            app.set_status(&format!(":{}", app.command_buffer));
        }
        KeyCode::Backspace => {
            if !app.command_buffer.is_empty() {
                app.command_buffer.pop();
                app.set_status(&format!(":{}", app.command_buffer));
            } else {
                // Exit command mode when backspace on empty buffer
                app.input_mode = InputMode::Normal;
                app.set_status("");
            }
        }
        _ => {}
    }
    Ok(false)
}
