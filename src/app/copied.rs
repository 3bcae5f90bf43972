use std::collections::HashSet;

/// Identifies one row of one section.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowId {
    pub section: String,
    pub row: usize,
}

impl RowId {
    pub fn new(section: impl Into<String>, row: usize) -> Self {
        Self {
            section: section.into(),
            row,
        }
    }
}

/// Rows copied at least once since their section was last cleared.
#[derive(Debug, Clone, Default)]
pub struct CopiedSet {
    rows: HashSet<RowId>,
}

impl CopiedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, section: &str, row: usize) {
        self.rows.insert(RowId::new(section, row));
    }

    pub fn contains(&self, section: &str, row: usize) -> bool {
        self.rows.contains(&RowId::new(section, row))
    }

    /// Unmark every row of `section`.
    pub fn clear_section(&mut self, section: &str) {
        self.rows.retain(|id| id.section != section);
    }

    pub fn count_in(&self, section: &str) -> usize {
        self.rows.iter().filter(|id| id.section == section).count()
    }

    /// Drop marks of sections not in `sections`, and of rows past their end.
    pub fn retain_sections(&mut self, sections: &[(String, usize)]) {
        self.rows.retain(|id| {
            sections
                .iter()
                .any(|(section, rows)| *section == id.section && id.row < *rows)
        });
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_section_is_scoped() {
        let mut set = CopiedSet::new();
        set.mark("git-0", 0);
        set.mark("git-0", 3);
        set.mark("npm-1", 0);

        set.clear_section("git-0");

        assert_eq!(set.count_in("git-0"), 0);
        assert!(set.contains("npm-1", 0));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_retain_sections() {
        let mut set = CopiedSet::new();
        set.mark("git-0", 0);
        set.mark("git-0", 4);
        set.mark("gone-1", 0);

        set.retain_sections(&[("git-0".to_string(), 2)]);

        assert!(set.contains("git-0", 0));
        assert!(!set.contains("git-0", 4));
        assert!(!set.contains("gone-1", 0));
    }
}
