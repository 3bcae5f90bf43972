use crate::replace::Replacements;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Key,
    Value,
}

/// Staged edits of one section's replacement mapping.
///
/// Pairs may be blank or repeat a key while staged; `commit` collapses them.
#[derive(Debug, Clone)]
pub struct ReplacementEditor {
    pub section: usize,
    pub pairs: Vec<(String, String)>,
    pub selected: usize,
    pub field: EditorField,
    pub editing: bool,
    pub cursor: usize,
}

impl ReplacementEditor {
    /// Start from the section's committed mapping.
    pub fn open(section: usize, committed: &Replacements) -> Self {
        Self {
            section,
            pairs: committed.to_pairs(),
            selected: 0,
            field: EditorField::Key,
            editing: false,
            cursor: 0,
        }
    }

    pub fn add_blank_pair(&mut self) {
        self.pairs.push((String::new(), String::new()));
        self.selected = self.pairs.len() - 1;
        self.field = EditorField::Key;
        self.cursor = 0;
    }

    pub fn set_pair_at(&mut self, index: usize, key: impl Into<String>, value: impl Into<String>) {
        if let Some(pair) = self.pairs.get_mut(index) {
            *pair = (key.into(), value.into());
        }
    }

    pub fn remove_pair_at(&mut self, index: usize) {
        if index < self.pairs.len() {
            self.pairs.remove(index);
            if self.selected >= self.pairs.len() {
                self.selected = self.pairs.len().saturating_sub(1);
            }
            self.editing = false;
            self.cursor = 0;
        }
    }

    /// Drop pairs with an empty key or value, last duplicate wins.
    pub fn commit(&self) -> Replacements {
        Replacements::from_pairs(
            self.pairs
                .iter()
                .filter(|(k, v)| !k.is_empty() && !v.is_empty())
                .cloned(),
        )
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.pairs.len() {
            self.selected += 1;
            self.cursor = 0;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.cursor = 0;
        }
    }

    pub fn switch_field(&mut self) {
        self.field = match self.field {
            EditorField::Key => EditorField::Value,
            EditorField::Value => EditorField::Key,
        };
        self.cursor = if self.editing {
            self.current_text().chars().count()
        } else {
            0
        };
    }

    pub fn start_editing(&mut self) {
        if self.pairs.is_empty() {
            self.add_blank_pair();
        }
        self.editing = true;
        self.cursor = self.current_text().chars().count();
    }

    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    pub fn current_text(&self) -> &str {
        match self.pairs.get(self.selected) {
            Some((key, _)) if self.field == EditorField::Key => key,
            Some((_, value)) => value,
            None => "",
        }
    }

    fn current_text_mut(&mut self) -> Option<&mut String> {
        let field = self.field;
        self.pairs.get_mut(self.selected).map(|(k, v)| match field {
            EditorField::Key => k,
            EditorField::Value => v,
        })
    }

    pub fn insert_char(&mut self, c: char) {
        let cursor = self.cursor;
        if let Some(text) = self.current_text_mut() {
            let byte_pos = byte_index(text, cursor);
            text.insert(byte_pos, c);
            self.cursor += 1;
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let cursor = self.cursor;
        if let Some(text) = self.current_text_mut() {
            let byte_pos = byte_index(text, cursor - 1);
            text.remove(byte_pos);
            self.cursor -= 1;
        }
    }

    pub fn delete_char(&mut self) {
        let cursor = self.cursor;
        if let Some(text) = self.current_text_mut() {
            if cursor < text.chars().count() {
                let byte_pos = byte_index(text, cursor);
                text.remove(byte_pos);
            }
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        let len = self.current_text().chars().count();
        if self.cursor < len {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.current_text().chars().count();
    }
}

fn byte_index(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_filters_blank_pairs() {
        let mut editor = ReplacementEditor::open(0, &Replacements::new());
        editor.add_blank_pair();
        editor.add_blank_pair();
        editor.add_blank_pair();
        editor.set_pair_at(0, "<url>", "https://x.git");
        editor.set_pair_at(1, "<branch>", "");
        editor.set_pair_at(2, "", "main");

        let committed = editor.commit();
        assert_eq!(committed.len(), 1);
        assert_eq!(committed.get("<url>"), Some("https://x.git"));
    }

    #[test]
    fn test_commit_last_duplicate_wins() {
        let mut editor = ReplacementEditor::open(0, &Replacements::new());
        editor.add_blank_pair();
        editor.add_blank_pair();
        editor.set_pair_at(0, "<b>", "dev");
        editor.set_pair_at(1, "<b>", "main");
        assert_eq!(editor.commit().get("<b>"), Some("main"));
        assert_eq!(editor.commit().len(), 1);
    }

    #[test]
    fn test_typing_into_fields() {
        let mut editor = ReplacementEditor::open(0, &Replacements::new());
        editor.start_editing();
        for c in "<ü>".chars() {
            editor.insert_char(c);
        }
        editor.cursor_left();
        editor.backspace();
        assert_eq!(editor.pairs[0].0, "<>");
        editor.switch_field();
        editor.insert_char('x');
        assert_eq!(editor.pairs[0].1, "x");
    }

    #[test]
    fn test_remove_pair_clamps_selection() {
        let mut editor =
            ReplacementEditor::open(0, &Replacements::from_pairs([("a", "1"), ("b", "2")]));
        editor.select_next();
        editor.remove_pair_at(1);
        assert_eq!(editor.selected, 0);
        assert_eq!(editor.pairs.len(), 1);
    }
}
