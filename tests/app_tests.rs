use std::time::{Duration, Instant};

use snipw::app::{App, Cursor, FLASH_DURATION};
use snipw::clipboard::MemoryClipboard;
use snipw::replace::{MatchMode, Replacements};
use snipw::tables::{sample_tables, Row, Table};

fn app_with_clipboard(tables: Vec<Table>) -> (App, MemoryClipboard) {
    let clipboard = MemoryClipboard::new();
    let mut app = App::new(tables);
    app.set_clipboard(Box::new(clipboard.clone()));
    (app, clipboard)
}

fn git_table() -> Table {
    Table::new("Git", vec![Row::new("Clone", "git clone <url>")])
}

#[test]
fn test_app_creation() {
    let app = App::new(sample_tables());
    assert_eq!(app.sections.len(), 4);
    assert_eq!(app.scroll, 0);
    assert!(app.copied.is_empty());
    assert!(app.sections.iter().all(|s| !s.is_open()));
    assert_eq!(app.sections[2].id(), "docker-commands-2");
}

#[test]
fn test_copy_with_replacement_then_clear() {
    let (mut app, clipboard) = app_with_clipboard(vec![git_table()]);

    let mut replacements = Replacements::new();
    replacements.insert("<url>", "https://x.git");
    app.update_replacements(0, replacements);
    assert_eq!(
        app.sections[0].effective_value(0),
        Some("git clone https://x.git")
    );

    app.copy_row(0, 0);
    assert_eq!(clipboard.last().as_deref(), Some("git clone https://x.git"));
    assert!(app.is_row_copied(0, 0));
    assert_eq!(app.status_message, "Copied to clipboard");

    app.clear_section(0);
    assert_eq!(app.sections[0].effective_value(0), Some("git clone <url>"));
    assert!(!app.is_row_copied(0, 0));
    assert!(app.tables[0].replacements.is_empty());
}

#[test]
fn test_failed_clipboard_still_marks_row() {
    let mut app = App::new(vec![git_table()]);
    app.set_clipboard(Box::new(MemoryClipboard::failing("no display")));

    app.copy_row(0, 0);

    assert!(app.is_row_copied(0, 0));
    assert!(app.status_message.starts_with("Clipboard error:"));
    assert!(app.status_message.contains("no display"));
}

#[test]
fn test_copy_flash_expires() {
    let (mut app, _clipboard) = app_with_clipboard(vec![git_table()]);
    let start = Instant::now();

    app.copy_row_at(0, 0, start);
    assert!(app.sections[0].is_flashing(0, start));

    app.tick(start + Duration::from_millis(500));
    assert!(app.sections[0].is_flashing(0, start + Duration::from_millis(500)));

    let later = start + FLASH_DURATION + Duration::from_millis(1);
    app.tick(later);
    assert!(!app.sections[0].is_flashing(0, later));
    // The copy mark outlives the flash
    assert!(app.is_row_copied(0, 0));
}

#[test]
fn test_copying_again_restarts_flash() {
    let (mut app, clipboard) = app_with_clipboard(vec![git_table()]);
    let start = Instant::now();

    app.copy_row_at(0, 0, start);
    let second = start + Duration::from_millis(1500);
    app.copy_row_at(0, 0, second);

    let check = start + FLASH_DURATION + Duration::from_millis(100);
    app.tick(check);
    assert!(app.sections[0].is_flashing(0, check));
    assert_eq!(clipboard.history().len(), 2);
}

#[test]
fn test_unmount_cancels_flashes() {
    let (mut app, _clipboard) = app_with_clipboard(vec![git_table()]);
    app.mount();
    let now = Instant::now();
    app.copy_row_at(0, 0, now);

    app.unmount();

    assert!(!app.sections[0].is_flashing(0, now));
    assert!(app.scroll_spy.is_none());
    assert!(app.active_section_id().is_none());
}

#[test]
fn test_toggle_twice_restores_state() {
    let (mut app, _clipboard) = app_with_clipboard(sample_tables());
    app.update_replacements(1, Replacements::from_pairs([("<package-name>", "serde")]));
    app.copy_row(1, 4);
    let replacements = app.sections[1].replacements().clone();

    assert!(!app.sections[1].is_open());
    app.toggle_section(1);
    assert!(app.sections[1].is_open());
    app.toggle_section(1);
    assert!(!app.sections[1].is_open());

    assert!(app.is_row_copied(1, 4));
    assert_eq!(app.copied.len(), 1);
    assert_eq!(app.sections[1].replacements(), &replacements);
    assert_eq!(app.sections[1].effective_value(4), Some("npm install serde"));
}

#[test]
fn test_sections_toggle_independently() {
    let mut app = App::new(sample_tables());
    app.toggle_section(0);
    assert!(app.sections[0].is_open());
    assert!(!app.sections[1].is_open());
}

#[test]
fn test_activate_cursor_toggles_header_and_copies_row() {
    let (mut app, clipboard) = app_with_clipboard(sample_tables());

    app.activate_cursor();
    assert!(app.sections[0].is_open());

    app.move_down();
    assert_eq!(app.cursor, Cursor::row(0, 0));
    app.activate_cursor();
    assert_eq!(clipboard.last().as_deref(), Some("git clone <repository-url>"));
}

#[test]
fn test_editor_save_filters_and_dedupes() {
    let mut app = App::new(vec![git_table()]);
    app.open_editor(0);
    {
        let editor = app.editor.as_mut().expect("editor open");
        editor.add_blank_pair();
        editor.set_pair_at(0, "<url>", "first");
        editor.add_blank_pair();
        editor.set_pair_at(1, "", "ignored");
        editor.add_blank_pair();
        editor.set_pair_at(2, "<url>", "https://y.git");
    }
    app.save_editor();

    assert!(app.editor.is_none());
    let replacements = app.sections[0].replacements();
    assert_eq!(replacements.len(), 1);
    assert_eq!(replacements.get("<url>"), Some("https://y.git"));
    assert_eq!(app.tables[0].replacements.get("<url>"), Some("https://y.git"));
    assert_eq!(app.status_message, "Replacements saved");
}

#[test]
fn test_editor_reopen_discards_unsaved_pairs() {
    let mut app = App::new(vec![git_table()]);
    app.open_editor(0);
    if let Some(editor) = app.editor.as_mut() {
        editor.add_blank_pair();
        editor.set_pair_at(0, "<url>", "https://x.git");
    }
    app.discard_editor();
    assert!(app.sections[0].replacements().is_empty());

    app.open_editor(0);
    assert!(app.editor.as_ref().is_some_and(|e| e.pairs.is_empty()));
}

#[test]
fn test_initial_table_replacements_apply() {
    let table = git_table().with_replacements(Replacements::from_pairs([("<url>", "https://z.git")]));
    let app = App::new(vec![table]);
    assert_eq!(
        app.sections[0].effective_value(0),
        Some("git clone https://z.git")
    );
}

#[test]
fn test_invalid_pattern_reports_and_keeps_value() {
    let mut app = App::new(vec![git_table()]);
    app.set_match_mode(MatchMode::Pattern);
    app.update_replacements(0, Replacements::from_pairs([("(", "x")]));

    assert_eq!(app.sections[0].effective_value(0), Some("git clone <url>"));
    assert!(app.status_message.starts_with("Skipped"));
}

#[test]
fn test_show_copied_toggle() {
    let mut app = App::new(sample_tables());
    assert!(app.show_copied);
    app.toggle_show_copied();
    assert!(!app.show_copied);
    assert_eq!(app.status_message, "Show copied rows: off");
}

#[test]
fn test_scroll_spy_activates_docker_section() {
    let mut app = App::new(sample_tables());
    app.expand_all();
    app.mount();
    assert_eq!(app.active_section_id(), Some("git-commands-0"));

    let docker_line = app.layout()[2].header_line;
    app.scroll = docker_line - 1;
    app.observe_sections();

    assert_eq!(app.active_section_id(), Some("docker-commands-2"));
}

#[test]
fn test_scroll_spy_follows_band_after_opening_first_section() {
    let mut app = App::new(sample_tables());
    app.visible_height = 36;
    app.mount();
    // Every collapsed header fits in the band, the last one wins
    assert_eq!(app.active_section_id(), Some("long-strings-example-3"));

    app.toggle_section(0);
    app.tick(Instant::now());

    assert!(app.layout()[1].header_line >= 7);
    assert_eq!(app.active_section_id(), Some("git-commands-0"));
}

#[test]
fn test_jump_to_section_scrolls_smoothly() {
    let mut app = App::new(sample_tables());
    app.expand_all();
    app.mount();

    assert!(app.jump_to_section("docker-commands-2"));
    let target = app.smooth_scroll.map(|s| s.target).unwrap_or_default();
    assert_eq!(target, app.layout()[2].header_line - 2);

    let now = Instant::now();
    for _ in 0..50 {
        if app.smooth_scroll.is_none() {
            break;
        }
        app.tick(now);
    }

    assert!(app.smooth_scroll.is_none());
    assert_eq!(app.scroll, target);
    assert_eq!(app.active_section_id(), Some("docker-commands-2"));
}

#[test]
fn test_unknown_fragment_is_reported() {
    let mut app = App::new(sample_tables());
    app.navigate_to_fragment("#missing");
    assert!(app.smooth_scroll.is_none());
    assert_eq!(app.status_message, "No section: #missing");
}

#[test]
fn test_replace_tables_keeps_surviving_state() {
    let (mut app, _clipboard) = app_with_clipboard(sample_tables());
    app.toggle_section(0);
    app.copy_row(0, 0);

    let mut tables = sample_tables();
    tables.truncate(2);
    app.replace_tables(tables);

    assert_eq!(app.sections.len(), 2);
    assert!(app.sections[0].is_open());
    assert!(app.is_row_copied(0, 0));
}

#[test]
fn test_reload_keeps_committed_replacements() {
    let (mut app, _clipboard) = app_with_clipboard(vec![git_table()]);
    app.update_replacements(0, Replacements::from_pairs([("<url>", "https://x.git")]));

    app.replace_tables(vec![git_table()]);

    assert_eq!(
        app.sections[0].effective_value(0),
        Some("git clone https://x.git")
    );
    assert_eq!(app.tables[0].replacements.get("<url>"), Some("https://x.git"));
}

#[test]
fn test_reload_applies_file_mapping_when_untouched() {
    let mut app = App::new(vec![git_table()]);
    let table = git_table().with_replacements(Replacements::from_pairs([("<url>", "https://f.git")]));

    app.replace_tables(vec![table]);

    assert_eq!(
        app.sections[0].effective_value(0),
        Some("git clone https://f.git")
    );
}
