use std::path::PathBuf;

use super::section::Section;
use super::App;
use crate::tables::load_tables;

impl App {
    pub fn load_file(&mut self, path: PathBuf) {
        match load_tables(&path) {
            Ok(tables) => {
                let path_changed = self.file_path.as_ref() != Some(&path);
                self.file_path = Some(path.clone());
                if path_changed {
                    self.file_path_changed = true;
                }
                tracing::info!(path = %path.display(), tables = tables.len(), "loaded tables");
                self.replace_tables(tables);
                self.set_status(&format!("Loaded: {}", path.display()));
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load tables");
                self.set_status(&format!("Error: {:#}", e));
            }
        }
    }

    pub fn reload_file(&mut self) {
        match self.file_path.clone() {
            Some(path) => self.load_file(path),
            None => self.set_status("No file to reload"),
        }
    }

    /// Swap in a new table list.
    ///
    /// Sections whose id survives keep their open state, copy marks, flashes
    /// and any replacements saved in the editor; the others are torn down.
    pub fn replace_tables(&mut self, mut tables: Vec<crate::tables::Table>) {
        let mut sections: Vec<Section> = tables
            .iter()
            .enumerate()
            .map(|(i, table)| Section::new(i, table, self.match_mode))
            .collect();

        for (section, table) in sections.iter_mut().zip(tables.iter_mut()) {
            if let Some(previous) = self.sections.iter().find(|s| s.id() == section.id()) {
                section.inherit_view_state(previous);
                if section.has_edited_replacements() {
                    table.replacements = section.replacements().clone();
                }
            }
        }

        let surviving: Vec<(String, usize)> = sections
            .iter()
            .map(|s| (s.id().to_string(), s.row_count()))
            .collect();
        self.copied.retain_sections(&surviving);

        for old in &mut self.sections {
            old.cancel_flashes();
        }
        // An open editor refers to a section index of the old list.
        self.editor = None;
        self.tables = tables;
        self.sections = sections;
        self.clamp_cursor();

        if self.scroll_spy.is_some() {
            self.mount();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::tables::{sample_tables, Row, Table};
    use std::path::PathBuf;

    #[test]
    fn test_replace_tables_keeps_surviving_state() {
        let mut app = App::new(sample_tables());
        app.set_clipboard(Box::new(crate::clipboard::MemoryClipboard::new()));
        app.toggle_section(0);
        app.copy_row(0, 1);
        app.copy_row(1, 0);

        let mut tables = sample_tables();
        tables.truncate(1);
        app.replace_tables(tables);

        assert_eq!(app.sections.len(), 1);
        assert!(app.sections[0].is_open());
        assert!(app.is_row_copied(0, 1));
        assert_eq!(app.copied.len(), 1);
    }

    #[test]
    fn test_renamed_section_is_torn_down() {
        let mut app = App::new(vec![Table::new("Git", vec![Row::new("a", "b")])]);
        app.toggle_section(0);
        app.replace_tables(vec![Table::new("Mercurial", vec![Row::new("a", "b")])]);
        assert!(!app.sections[0].is_open());
    }

    #[test]
    fn test_load_missing_file_reports_error() {
        let mut app = App::new(sample_tables());
        app.load_file(PathBuf::from("/nonexistent/snipw-tables.json"));
        assert!(app.status_message.starts_with("Error:"));
        assert_eq!(app.sections.len(), 4);
        assert!(app.file_path.is_none());
    }
}
