use std::time::Instant;

use super::editor::ReplacementEditor;
use super::App;
use crate::replace::Replacements;

impl App {
    pub fn current_section(&self) -> usize {
        self.cursor.section
    }

    pub fn toggle_section(&mut self, index: usize) {
        if let Some(section) = self.sections.get_mut(index) {
            section.toggle();
            self.clamp_cursor();
        }
    }

    pub fn expand_all(&mut self) {
        self.sections.iter_mut().for_each(|s| s.set_open(true));
        self.clamp_cursor();
    }

    pub fn collapse_all(&mut self) {
        self.sections.iter_mut().for_each(|s| s.set_open(false));
        self.clamp_cursor();
    }

    /// Enter on the cursor: toggle a header, copy a row.
    pub fn activate_cursor(&mut self) {
        match self.cursor.row {
            Some(row) => self.copy_row(self.cursor.section, row),
            None => self.toggle_section(self.cursor.section),
        }
    }

    pub fn copy_current_row(&mut self) {
        match self.cursor.row {
            Some(row) => self.copy_row(self.cursor.section, row),
            None => self.set_status("Select a row to copy"),
        }
    }

    pub fn copy_row(&mut self, index: usize, row: usize) {
        self.copy_row_at(index, row, Instant::now());
    }

    /// Copy the effective value of a row.
    ///
    /// The row is marked as copied before the clipboard answers; a failed
    /// write only produces a status message.
    pub fn copy_row_at(&mut self, index: usize, row: usize, now: Instant) {
        let Some(section) = self.sections.get_mut(index) else {
            return;
        };
        let Some(value) = section.effective_value(row).map(str::to_string) else {
            return;
        };
        let id = section.id().to_string();
        section.flash(row, now);
        self.copied.mark(&id, row);

        match self.clipboard.set_text(&value) {
            Ok(()) => {
                tracing::info!(section = %id, row, "copied row");
                self.set_status("Copied to clipboard");
            }
            Err(e) => {
                tracing::warn!(section = %id, row, error = %e, "clipboard write failed");
                self.set_status(&format!("Clipboard error: {}", e));
            }
        }
    }

    pub fn is_row_copied(&self, index: usize, row: usize) -> bool {
        self.sections
            .get(index)
            .is_some_and(|s| self.copied.contains(s.id(), row))
    }

    /// Unmark every row of the section and drop its replacements.
    pub fn clear_section(&mut self, index: usize) {
        let Some(section) = self.sections.get_mut(index) else {
            return;
        };
        let id = section.id().to_string();
        section.clear_replacements();
        self.copied.clear_section(&id);
        if let Some(table) = self.tables.get_mut(index) {
            table.replacements = Replacements::new();
        }
        tracing::info!(section = %id, "cleared section");
        self.clamp_cursor();
        self.set_status("Cleared copy marks and replacements");
    }

    /// Commit a new mapping to the section and to the owned table list.
    pub fn update_replacements(&mut self, index: usize, replacements: Replacements) {
        let Some(section) = self.sections.get_mut(index) else {
            return;
        };
        let invalid = replacements.invalid_patterns(self.match_mode);
        section.update_replacements(replacements.clone());
        tracing::info!(section = %section.id(), pairs = replacements.len(), "updated replacements");
        if let Some(table) = self.tables.get_mut(index) {
            table.replacements = replacements;
        }
        self.clamp_cursor();

        match invalid.first() {
            Some(err) => self.set_status(&format!("Skipped {}", err)),
            None => self.set_status("Replacements saved"),
        }
    }

    pub fn toggle_show_copied(&mut self) {
        self.show_copied = !self.show_copied;
        let state = if self.show_copied { "on" } else { "off" };
        self.set_status(&format!("Show copied rows: {}", state));
    }

    pub fn open_editor(&mut self, index: usize) {
        if let Some(section) = self.sections.get(index) {
            self.editor = Some(ReplacementEditor::open(index, section.replacements()));
        }
    }

    pub fn save_editor(&mut self) {
        if let Some(editor) = self.editor.take() {
            let replacements = editor.commit();
            self.update_replacements(editor.section, replacements);
        }
    }

    pub fn discard_editor(&mut self) {
        if self.editor.take().is_some() {
            self.set_status("Replacements discarded");
        }
    }
}
