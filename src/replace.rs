use regex::Regex;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use thiserror::Error;

/// How replacement keys are matched against a row value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Keys are plain text. Every occurrence is replaced.
    #[default]
    Literal,
    /// Keys are regular expressions, values may reference groups with `$1`.
    Pattern,
}

impl MatchMode {
    pub fn label(&self) -> &'static str {
        match self {
            MatchMode::Literal => "literal",
            MatchMode::Pattern => "regex",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplaceError {
    #[error("invalid pattern '{key}': {reason}")]
    InvalidPattern { key: String, reason: String },
}

/// Ordered placeholder -> substitution pairs for one table.
///
/// Order matters: pairs are applied one after another, each against the
/// output of the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacements {
    pairs: Vec<(String, String)>,
}

impl Replacements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse staged pairs into a mapping.
    ///
    /// A repeated key keeps the position of its first occurrence and the
    /// value of its last one.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut replacements = Self::new();
        for (key, value) in pairs {
            replacements.insert(key, value);
        }
        replacements
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.pairs.clone()
    }

    /// Keys that would be skipped when applied in `mode`.
    pub fn invalid_patterns(&self, mode: MatchMode) -> Vec<ReplaceError> {
        if mode == MatchMode::Literal {
            return Vec::new();
        }
        self.pairs
            .iter()
            .filter(|(key, _)| !key.is_empty())
            .filter_map(|(key, _)| {
                Regex::new(key).err().map(|e| ReplaceError::InvalidPattern {
                    key: key.clone(),
                    reason: e.to_string(),
                })
            })
            .collect()
    }
}

/// Apply every pair of `replacements` to `raw`, in order.
///
/// Each pair sees the result of the previous one, so a value that contains
/// a later key is substituted again. Empty keys and keys that are not valid
/// patterns are skipped and leave the value unchanged.
pub fn apply_replacements(raw: &str, replacements: &Replacements, mode: MatchMode) -> String {
    let mut current = raw.to_string();
    for (key, value) in replacements.iter() {
        if key.is_empty() {
            continue;
        }
        current = match mode {
            MatchMode::Literal => current.replace(key, value),
            MatchMode::Pattern => match Regex::new(key) {
                Ok(re) => re
                    .replace_all(&current, numeric_groups_only(value).as_str())
                    .into_owned(),
                Err(e) => {
                    tracing::warn!(key, error = %e, "skipping invalid replacement pattern");
                    current
                }
            },
        };
    }
    current
}

/// Rewrite a substitution so only `$N` and `${N}` refer to capture groups.
///
/// Any other `$` is kept as text, so shell values like `$HOME/src` survive.
fn numeric_groups_only(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }

        let mut digits = String::new();
        while let Some(d) = chars.peek().copied().filter(char::is_ascii_digit) {
            digits.push(d);
            chars.next();
        }
        if !digits.is_empty() {
            out.push_str(&format!("${{{}}}", digits));
            continue;
        }

        if chars.peek() == Some(&'{') {
            let rest: String = chars.clone().skip(1).take_while(|c| *c != '}').collect();
            let closed = chars.clone().nth(1 + rest.chars().count()) == Some('}');
            if closed && !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()) {
                out.push_str(&format!("${{{}}}", rest));
                // Skip `{`, the digits and `}`
                for _ in 0..rest.chars().count() + 2 {
                    chars.next();
                }
                continue;
            }
        }

        out.push_str("$$");
    }
    out
}

impl Serialize for Replacements {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (key, value) in &self.pairs {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct ReplacementsVisitor;

impl<'de> Visitor<'de> for ReplacementsVisitor {
    type Value = Replacements;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object of placeholder to substitution strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut replacements = Replacements::new();
        while let Some((key, value)) = access.next_entry::<String, String>()? {
            replacements.insert(key, value);
        }
        Ok(replacements)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Replacements::new())
    }
}

impl<'de> Deserialize<'de> for Replacements {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ReplacementsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> Replacements {
        Replacements::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_empty_mapping_is_identity() {
        let raw = "git clone <url>";
        assert_eq!(apply_replacements(raw, &Replacements::new(), MatchMode::Literal), raw);
        assert_eq!(apply_replacements(raw, &Replacements::new(), MatchMode::Pattern), raw);
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let r = map(&[("<b>", "main")]);
        assert_eq!(
            apply_replacements("git push <b> && git pull <b>", &r, MatchMode::Literal),
            "git push main && git pull main"
        );
    }

    #[test]
    fn test_sequential_application() {
        // The first value introduces the second key, which is then replaced too.
        let r = map(&[("<a>", "<b>"), ("<b>", "done")]);
        assert_eq!(apply_replacements("x <a>", &r, MatchMode::Literal), "x done");

        let reversed = map(&[("<b>", "done"), ("<a>", "<b>")]);
        assert_eq!(apply_replacements("x <a>", &reversed, MatchMode::Literal), "x <b>");
    }

    #[test]
    fn test_literal_mode_ignores_pattern_characters() {
        let r = map(&[("a.c", "X")]);
        assert_eq!(apply_replacements("abc a.c", &r, MatchMode::Literal), "abc X");
        assert_eq!(apply_replacements("abc a.c", &r, MatchMode::Pattern), "X X");
    }

    #[test]
    fn test_invalid_pattern_is_skipped() {
        let r = map(&[("(unclosed", "X"), ("<url>", "https://x.git")]);
        assert_eq!(
            apply_replacements("(unclosed <url>", &r, MatchMode::Pattern),
            "(unclosed https://x.git"
        );
        assert_eq!(r.invalid_patterns(MatchMode::Pattern).len(), 1);
        assert!(r.invalid_patterns(MatchMode::Literal).is_empty());
    }

    #[test]
    fn test_pattern_group_expansion() {
        let r = map(&[(r"<(\w+)>", "${1}_VALUE")]);
        assert_eq!(apply_replacements("echo <name>", &r, MatchMode::Pattern), "echo name_VALUE");
    }

    #[test]
    fn test_pattern_keeps_shell_variables_in_value() {
        let r = map(&[("<dir>", "$HOME/src")]);
        assert_eq!(apply_replacements("cd <dir>", &r, MatchMode::Pattern), "cd $HOME/src");
        assert_eq!(apply_replacements("cd <dir>", &r, MatchMode::Literal), "cd $HOME/src");

        let r = map(&[("<pid>", "$$ ${USER} $")]);
        assert_eq!(apply_replacements("kill <pid>", &r, MatchMode::Pattern), "kill $$ ${USER} $");
    }

    #[test]
    fn test_numeric_group_followed_by_text() {
        let r = map(&[(r"v(\d+)", "$1a")]);
        assert_eq!(apply_replacements("v2", &r, MatchMode::Pattern), "2a");
    }

    #[test]
    fn test_empty_key_is_skipped() {
        let r = map(&[("", "X")]);
        assert_eq!(apply_replacements("abc", &r, MatchMode::Literal), "abc");
    }

    #[test]
    fn test_from_pairs_last_value_wins() {
        let r = map(&[("k", "1"), ("j", "2"), ("k", "3")]);
        assert_eq!(r.to_pairs(), vec![("k".to_string(), "3".to_string()), ("j".to_string(), "2".to_string())]);
    }

    #[test]
    fn test_non_idempotent_when_value_reintroduces_key() {
        let r = map(&[("x", "xx")]);
        let once = apply_replacements("x", &r, MatchMode::Literal);
        let twice = apply_replacements(&once, &r, MatchMode::Literal);
        assert_eq!(once, "xx");
        assert_ne!(once, twice);
    }

    #[test]
    fn test_deserialize_keeps_order() {
        let r: Replacements = serde_json::from_str(r#"{"z": "1", "a": "2"}"#).unwrap();
        assert_eq!(r.iter().map(|(k, _)| k).collect::<Vec<_>>(), vec!["z", "a"]);
    }
}
