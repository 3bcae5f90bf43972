use super::copied::CopiedSet;
use super::editor::ReplacementEditor;
use super::navigation::Cursor;
use super::section::Section;
use super::toc::{ScrollSpy, SmoothScroll};
use super::{ColorScheme, RcConfig};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::replace::MatchMode;
use crate::tables::Table;
use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputMode {
    Normal,
    Command, // For vim-style commands like :q, :clear
}

/// Root container: owns the tables, their sections and the copied-row set.
pub struct App {
    pub input_mode: InputMode,
    pub tables: Vec<Table>,
    pub sections: Vec<Section>,
    pub copied: CopiedSet,
    pub show_copied: bool,
    pub match_mode: MatchMode,
    pub cursor: Cursor,
    pub scroll: usize,
    pub smooth_scroll: Option<SmoothScroll>,
    pub scroll_spy: Option<ScrollSpy>,
    // Last measured size of the content area (updated by UI code before rendering)
    pub content_width: usize,
    pub visible_height: usize,
    // Table of contents panel
    pub toc_open: bool,
    pub toc_has_focus: bool,
    pub toc_selected: usize,
    pub editor: Option<ReplacementEditor>,
    pub showing_help: bool,
    pub help_scroll: u16,
    pub command_buffer: String,
    pub status_message: String,
    pub status_time: Option<Instant>,
    pub file_path: Option<PathBuf>,
    pub file_path_changed: bool,
    pub colorscheme: ColorScheme,
    pub(crate) clipboard: Box<dyn Clipboard>,
}

impl App {
    pub fn new(tables: Vec<Table>) -> Self {
        Self::with_config(tables, &RcConfig::default())
    }

    pub fn with_config(tables: Vec<Table>, config: &RcConfig) -> Self {
        let sections = tables
            .iter()
            .enumerate()
            .map(|(i, table)| Section::new(i, table, config.match_mode))
            .collect();

        Self {
            input_mode: InputMode::Normal,
            tables,
            sections,
            copied: CopiedSet::new(),
            show_copied: config.show_copied,
            match_mode: config.match_mode,
            cursor: Cursor::header(0),
            scroll: 0,
            smooth_scroll: None,
            scroll_spy: None,
            content_width: 80,
            visible_height: 20,
            toc_open: config.toc_open,
            toc_has_focus: false,
            toc_selected: 0,
            editor: None,
            showing_help: false,
            help_scroll: 0,
            command_buffer: String::new(),
            status_message: String::new(),
            status_time: None,
            file_path: None,
            file_path_changed: false,
            colorscheme: config.colorscheme.clone(),
            clipboard: Box::new(SystemClipboard::new()),
        }
    }

    pub fn set_clipboard(&mut self, clipboard: Box<dyn Clipboard>) {
        self.clipboard = clipboard;
    }

    pub fn set_status(&mut self, message: &str) {
        if message.is_empty() {
            self.status_message = String::new();
            self.status_time = None;
        } else {
            self.status_message = message.to_string();
            self.status_time = Some(Instant::now());
        }
    }

    pub fn update_status(&mut self) {
        // Clear status message after 3 seconds
        if let Some(time) = self.status_time {
            if time.elapsed() > Duration::from_secs(3) && self.input_mode != InputMode::Command {
                self.status_message = String::new();
                self.status_time = None;
            }
        }
    }

    /// Advance time-driven state: copy flashes, smooth scrolling and the scroll spy.
    pub fn tick(&mut self, now: Instant) {
        for section in &mut self.sections {
            section.tick(now);
        }

        if let Some(smooth) = self.smooth_scroll {
            let target = smooth.target.min(self.max_scroll());
            let smooth = SmoothScroll::new(target);
            self.scroll = smooth.step(self.scroll);
            if smooth.is_done(self.scroll) {
                self.smooth_scroll = None;
            }
        }

        self.observe_sections();
    }

    pub fn set_match_mode(&mut self, mode: MatchMode) {
        self.match_mode = mode;
        for section in &mut self.sections {
            section.set_match_mode(mode);
        }
        self.clamp_cursor();
    }

    pub fn toggle_help(&mut self) {
        self.showing_help = !self.showing_help;
        self.help_scroll = 0;
    }

    pub fn help_lines() -> Vec<&'static str> {
        vec![
            "NAVIGATION",
            "  j/k, Down/Up   : Move between sections and rows",
            "  g/G            : Jump to top/bottom",
            "  Ctrl+d/u       : Half page down/up",
            "  Enter/Space    : Toggle section, or copy row",
            "",
            "SNIPPETS",
            "  y              : Copy row (with replacements)",
            "  c              : Clear copy marks and replacements of section",
            "  e              : Edit replacements of section",
            "  t              : Show/hide copied rows highlight",
            "",
            "TABLE OF CONTENTS",
            "  o              : Toggle table of contents",
            "  Tab            : Focus table of contents",
            "  j/k, Enter     : Select and jump (when focused)",
            "",
            "REPLACEMENT EDITOR",
            "  j/k            : Select pair",
            "  h/l, Tab       : Switch key/value",
            "  i, Enter       : Edit field (Esc/Enter to finish)",
            "  a / d          : Add / remove pair",
            "  w, Ctrl+s      : Save",
            "  q, Esc         : Close without saving",
            "",
            "COMMANDS",
            "  :q             : Quit",
            "  :clear         : Clear current section",
            "  :edit          : Edit replacements of current section",
            "  :copied [on|off] : Show/hide copied rows highlight",
            "  :open / :close : Expand/collapse all sections",
            "  :toc           : Toggle table of contents",
            "  :#<id>         : Jump to section (also :goto <id>)",
            "  :regex / :literal : Replacement matching mode",
            "  :e             : Reload file",
            "",
            "  ?              : Toggle this help",
        ]
    }
}
