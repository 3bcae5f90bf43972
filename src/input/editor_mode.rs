use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

pub fn handle_editor_keyboard(app: &mut App, key: KeyEvent) {
    let Some(editor) = app.editor.as_mut() else {
        return;
    };

    if editor.editing {
        // Typing into the selected field
        match key.code {
            KeyCode::Esc | KeyCode::Enter => editor.stop_editing(),
            KeyCode::Tab => editor.switch_field(),
            KeyCode::Backspace => editor.backspace(),
            KeyCode::Delete => editor.delete_char(),
            KeyCode::Left => editor.cursor_left(),
            KeyCode::Right => editor.cursor_right(),
            KeyCode::Home => editor.cursor_home(),
            KeyCode::End => editor.cursor_end(),
            KeyCode::Char(c) => editor.insert_char(c),
            _ => {}
        }
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('s') {
            app.save_editor();
        }
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.discard_editor(),
        KeyCode::Char('w') => app.save_editor(),
        KeyCode::Down | KeyCode::Char('j') => editor.select_next(),
        KeyCode::Up | KeyCode::Char('k') => editor.select_prev(),
        KeyCode::Tab | KeyCode::Char('h') | KeyCode::Char('l') | KeyCode::Left | KeyCode::Right => {
            editor.switch_field()
        }
        KeyCode::Char('i') | KeyCode::Enter => editor.start_editing(),
        KeyCode::Char('a') => {
            editor.add_blank_pair();
            editor.start_editing();
        }
        KeyCode::Char('d') => {
            let index = editor.selected;
            editor.remove_pair_at(index);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::tables::sample_tables;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_editor_keyboard(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_add_pair_and_save_with_keys() {
        let mut app = App::new(sample_tables());
        app.set_clipboard(Box::new(MemoryClipboard::new()));
        app.open_editor(0);

        handle_editor_keyboard(&mut app, key(KeyCode::Char('a')));
        type_text(&mut app, "<branch-name>");
        handle_editor_keyboard(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "main");
        handle_editor_keyboard(&mut app, key(KeyCode::Enter));
        handle_editor_keyboard(&mut app, key(KeyCode::Char('w')));

        assert!(app.editor.is_none());
        assert_eq!(app.sections[0].replacements().get("<branch-name>"), Some("main"));
        assert_eq!(app.sections[0].effective_value(4), Some("git push origin main"));
    }

    #[test]
    fn test_escape_discards() {
        let mut app = App::new(sample_tables());
        app.open_editor(1);
        handle_editor_keyboard(&mut app, key(KeyCode::Char('a')));
        type_text(&mut app, "npm");
        handle_editor_keyboard(&mut app, key(KeyCode::Esc));
        handle_editor_keyboard(&mut app, key(KeyCode::Esc));

        assert!(app.editor.is_none());
        assert!(app.sections[1].replacements().is_empty());
    }
}
