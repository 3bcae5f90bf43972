use std::time::Instant;

use super::flash::CopyFlash;
use crate::replace::{apply_replacements, MatchMode, Replacements};
use crate::tables::{section_id, Row, Table};

/// One collapsible table: rows, active replacements and per-row flashes.
///
/// Effective values are derived eagerly whenever the mapping changes.
#[derive(Debug, Clone)]
pub struct Section {
    id: String,
    title: String,
    rows: Vec<Row>,
    replacements: Replacements,
    effective: Vec<String>,
    flashes: Vec<CopyFlash>,
    open: bool,
    mode: MatchMode,
    // Mapping was changed in this session (edited or cleared)
    edited: bool,
}

impl Section {
    pub fn new(index: usize, table: &Table, mode: MatchMode) -> Self {
        let mut section = Self {
            id: section_id(&table.title, index),
            title: table.title.clone(),
            rows: table.rows.clone(),
            replacements: table.replacements.clone(),
            effective: Vec::new(),
            flashes: vec![CopyFlash::Idle; table.rows.len()],
            open: false,
            mode,
            edited: false,
        };
        section.recompute();
        section
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn replacements(&self) -> &Replacements {
        &self.replacements
    }

    pub fn match_mode(&self) -> MatchMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        tracing::debug!(section = %self.id, open = self.open, "toggled section");
    }

    /// The value shown and copied for `row`.
    pub fn effective_value(&self, row: usize) -> Option<&str> {
        self.effective.get(row).map(String::as_str)
    }

    pub fn update_replacements(&mut self, replacements: Replacements) {
        self.replacements = replacements;
        self.edited = true;
        self.recompute();
    }

    /// Drop the active mapping so every row shows its raw value again.
    pub fn clear_replacements(&mut self) {
        self.replacements = Replacements::new();
        self.edited = true;
        self.recompute();
    }

    /// True once the mapping was saved or cleared, as opposed to loaded from the table.
    pub fn has_edited_replacements(&self) -> bool {
        self.edited
    }

    pub fn set_match_mode(&mut self, mode: MatchMode) {
        if self.mode != mode {
            self.mode = mode;
            self.recompute();
        }
    }

    pub fn flash(&mut self, row: usize, now: Instant) {
        if let Some(flash) = self.flashes.get_mut(row) {
            flash.trigger(now);
        }
    }

    pub fn is_flashing(&self, row: usize, now: Instant) -> bool {
        self.flashes.get(row).is_some_and(|f| f.is_active(now))
    }

    /// Expire finished flashes. Returns true if any changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for flash in &mut self.flashes {
            changed |= flash.tick(now);
        }
        changed
    }

    pub fn cancel_flashes(&mut self) {
        self.flashes.iter_mut().for_each(CopyFlash::cancel);
    }

    /// Carry open state, flashes and an edited mapping over from the previous
    /// incarnation of this section.
    pub fn inherit_view_state(&mut self, previous: &Section) {
        self.open = previous.open;
        for (flash, old) in self.flashes.iter_mut().zip(previous.flashes.iter()) {
            *flash = *old;
        }
        if previous.edited {
            self.update_replacements(previous.replacements.clone());
        }
    }

    fn recompute(&mut self) {
        self.effective = self
            .rows
            .iter()
            .map(|row| apply_replacements(&row.value, &self.replacements, self.mode))
            .collect();
    }
}
