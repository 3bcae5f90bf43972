use std::fs;
use std::path::PathBuf;
use super::colorscheme::ColorScheme;
use crate::replace::MatchMode;

#[derive(Debug, Clone)]
pub struct RcConfig {
    pub show_copied: bool,
    pub match_mode: MatchMode,
    pub toc_open: bool,
    pub colorscheme: ColorScheme,
}

impl Default for RcConfig {
    fn default() -> Self {
        Self {
            show_copied: true,
            match_mode: MatchMode::Literal,
            toc_open: true,
            colorscheme: ColorScheme::default(),
        }
    }
}

impl RcConfig {
    /// Load configuration from ~/.snipwrc
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(rc_path) = Self::get_rc_path() {
            match fs::read_to_string(&rc_path) {
                Ok(contents) => {
                    tracing::debug!(path = %rc_path.display(), "loaded rc file");
                    config.parse(&contents);
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(path = %rc_path.display(), error = %e, "cannot read rc file");
                }
            }
        }

        config
    }

    /// Get the path to ~/.snipwrc
    fn get_rc_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".snipwrc");
            path
        })
    }

    /// Parse RC file contents
    pub fn parse(&mut self, contents: &str) {
        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') || line.starts_with('"') {
                continue;
            }

            self.parse_line(line);
        }
    }

    fn parse_line(&mut self, line: &str) {
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.as_slice() {
            ["set", options @ ..] => {
                for option in options {
                    self.handle_set(option);
                }
            }
            ["colorscheme", name, ..] => {
                if let Some(scheme) = ColorScheme::by_name(name) {
                    self.colorscheme = scheme;
                } else {
                    tracing::warn!(name, "unknown colorscheme");
                }
            }
            _ => {
                tracing::debug!(line, "ignoring rc line");
            }
        }
    }

    fn handle_set(&mut self, option: &str) {
        match option {
            "copied" => self.show_copied = true,
            "nocopied" => self.show_copied = false,
            "regex" => self.match_mode = MatchMode::Pattern,
            "noregex" | "literal" => self.match_mode = MatchMode::Literal,
            "toc" => self.toc_open = true,
            "notoc" => self.toc_open = false,
            _ => {
                // Unknown option, ignore
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RcConfig::default();
        assert!(config.show_copied);
        assert!(config.toc_open);
        assert_eq!(config.match_mode, MatchMode::Literal);
    }

    #[test]
    fn test_parse_set_options() {
        let mut config = RcConfig::default();
        config.parse("set nocopied regex\nset notoc");
        assert!(!config.show_copied);
        assert!(!config.toc_open);
        assert_eq!(config.match_mode, MatchMode::Pattern);
    }

    #[test]
    fn test_parse_colorscheme() {
        let mut config = RcConfig::default();
        config.parse("colorscheme Monokai");
        assert_eq!(config.colorscheme.name, "Monokai");
    }

    #[test]
    fn test_unknown_colorscheme_keeps_default() {
        let mut config = RcConfig::default();
        config.parse("colorscheme nope");
        assert_eq!(config.colorscheme.name, "Default");
    }

    #[test]
    fn test_parse_comments() {
        let mut config = RcConfig::default();
        config.parse("# set nocopied\n\" set regex\nset literal");
        assert!(config.show_copied);
        assert_eq!(config.match_mode, MatchMode::Literal);
    }

    #[test]
    fn test_parse_multiline() {
        let mut config = RcConfig::default();
        let rc_contents = r#"
            # My snipw config
            set nocopied
            colorscheme Nord
        "#;
        config.parse(rc_contents);
        assert!(!config.show_copied);
        assert_eq!(config.colorscheme.name, "Nord");
    }
}
