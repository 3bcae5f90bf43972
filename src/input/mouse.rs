use crossterm::event::{MouseEvent, MouseEventKind};

use crate::app::App;

const WHEEL_LINES: isize = 3;

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    // The editor overlay captures the wheel
    if app.editor.is_some() {
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => {
            if app.showing_help {
                app.help_scroll = app.help_scroll.saturating_sub(1);
            } else if app.toc_open && app.toc_has_focus {
                app.toc_move_up();
            } else {
                app.scroll_by(-WHEEL_LINES);
            }
        }
        MouseEventKind::ScrollDown => {
            if app.showing_help {
                app.help_scroll = app.help_scroll.saturating_add(1);
            } else if app.toc_open && app.toc_has_focus {
                app.toc_move_down();
            } else {
                app.scroll_by(WHEEL_LINES);
            }
        }
        _ => {}
    }
}
