use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error;

use crate::replace::Replacements;

/// One label/value line of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RowRepr")]
pub struct Row {
    pub label: String,
    pub value: String,
}

impl Row {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

// Rows are written either as `["label", "value"]` or `{"label": .., "value": ..}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RowRepr {
    Pair(String, String),
    Object { label: String, value: String },
}

impl From<RowRepr> for Row {
    fn from(repr: RowRepr) -> Self {
        match repr {
            RowRepr::Pair(label, value) | RowRepr::Object { label, value } => Row { label, value },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub title: String,
    pub rows: Vec<Row>,
    #[serde(default)]
    pub replacements: Replacements,
}

impl Table {
    pub fn new(title: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            title: title.into(),
            rows,
            replacements: Replacements::new(),
        }
    }

    pub fn with_replacements(mut self, replacements: Replacements) -> Self {
        self.replacements = replacements;
        self
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("no tables found")]
    Empty,
    #[error("table #{0} has an empty title")]
    EmptyTitle(usize),
}

/// Stable identifier of the table at `index`, e.g. `git-commands-0`.
///
/// Titles are not unique, so the index is always part of the id.
pub fn section_id(title: &str, index: usize) -> String {
    let mut slug = String::new();
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        format!("section-{}", index)
    } else {
        format!("{}-{}", slug, index)
    }
}

pub fn parse_tables(input: &str) -> Result<Vec<Table>> {
    let tables: Vec<Table> = serde_json::from_str(input).context("invalid tables JSON")?;
    validate(&tables)?;
    Ok(tables)
}

pub fn load_tables(path: &Path) -> Result<Vec<Table>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read '{}'", path.display()))?;
    parse_tables(&content).with_context(|| format!("cannot load '{}'", path.display()))
}

fn validate(tables: &[Table]) -> Result<(), TableError> {
    if tables.is_empty() {
        return Err(TableError::Empty);
    }
    if let Some(index) = tables.iter().position(|t| t.title.trim().is_empty()) {
        return Err(TableError::EmptyTitle(index));
    }
    Ok(())
}

/// Built-in cheat-sheet shown when no file is given.
pub fn sample_tables() -> Vec<Table> {
    vec![
        Table::new(
            "Git Commands",
            vec![
                Row::new("Clone a repository", "git clone <repository-url>"),
                Row::new("Create a new branch", "git checkout -b <branch-name>"),
                Row::new("Stage changes", "git add ."),
                Row::new("Commit changes", "git commit -m \"Your commit message\""),
                Row::new("Push changes", "git push origin <branch-name>"),
            ],
        ),
        Table::new(
            "npm Commands",
            vec![
                Row::new("Install dependencies", "npm install"),
                Row::new("Run development server", "npm run dev"),
                Row::new("Build for production", "npm run build"),
                Row::new("Start production server", "npm start"),
                Row::new("Add a new package", "npm install <package-name>"),
            ],
        ),
        Table::new(
            "Docker Commands",
            vec![
                Row::new("Build an image", "docker build -t <image> ."),
                Row::new("Run a container", "docker run -d --name <container> <image>"),
                Row::new("List containers", "docker ps -a"),
                Row::new("Follow logs", "docker logs -f <container>"),
                Row::new("Open a shell", "docker exec -it <container> sh"),
            ],
        ),
        Table::new(
            "Long Strings Example",
            vec![
                Row::new("Short description", "This is a short string"),
                Row::new(
                    "Long description",
                    "This is a very long string that might cause layout issues if not handled properly. It should wrap nicely and not break the layout of the table or cause any overflow problems.",
                ),
                Row::new(
                    "Code snippet",
                    "\nfunction longFunction() {\n  // This is a long function\n  // with multiple lines\n  // that should be displayed properly\n  console.log(\"Hello, World!\");\n  return 42;\n}\n",
                ),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_id_slug() {
        assert_eq!(section_id("Git Commands", 0), "git-commands-0");
        assert_eq!(section_id("  C++ / Rust!  ", 3), "c-rust-3");
        assert_eq!(section_id("日本語", 2), "section-2");
    }

    #[test]
    fn test_duplicate_titles_get_distinct_ids() {
        assert_ne!(section_id("Git", 0), section_id("Git", 1));
    }

    #[test]
    fn test_parse_pair_and_object_rows() {
        let tables = parse_tables(
            r#"[{"title": "Git", "rows": [["Clone", "git clone <url>"], {"label": "Pull", "value": "git pull"}],
                 "replacements": {"<url>": "https://x.git"}}]"#,
        )
        .unwrap();
        assert_eq!(tables[0].rows[0], Row::new("Clone", "git clone <url>"));
        assert_eq!(tables[0].rows[1], Row::new("Pull", "git pull"));
        assert_eq!(tables[0].replacements.get("<url>"), Some("https://x.git"));
    }

    #[test]
    fn test_replacements_default_to_empty() {
        let tables = parse_tables(r#"[{"title": "npm", "rows": []}]"#).unwrap();
        assert!(tables[0].replacements.is_empty());
    }

    #[test]
    fn test_rejects_empty_title() {
        let err = parse_tables(r#"[{"title": "ok", "rows": []}, {"title": " ", "rows": []}]"#).unwrap_err();
        assert!(err.to_string().contains("#1"));
    }

    #[test]
    fn test_rejects_empty_list() {
        assert!(parse_tables("[]").is_err());
    }

    #[test]
    fn test_sample_tables_have_unique_ids() {
        let tables = sample_tables();
        let ids: Vec<String> = tables.iter().enumerate().map(|(i, t)| section_id(&t.title, i)).collect();
        assert_eq!(ids, vec!["git-commands-0", "npm-commands-1", "docker-commands-2", "long-strings-example-3"]);
    }
}
