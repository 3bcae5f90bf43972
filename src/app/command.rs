use super::{App, InputMode};
use crate::replace::MatchMode;

impl App {
    /// Run the command in `command_buffer`. Returns true when the app should quit.
    pub fn execute_command(&mut self) -> bool {
        let command = self.command_buffer.trim().to_string();
        self.input_mode = InputMode::Normal;
        self.set_status("");

        if let Some(fragment) = command.strip_prefix('#') {
            self.navigate_to_fragment(fragment);
            return false;
        }

        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or("");
        let arg = parts.next();

        match name {
            "" => {}
            "q" | "q!" | "quit" => return true,
            "clear" => self.clear_section(self.current_section()),
            "edit" => self.open_editor(self.current_section()),
            "copied" => match arg {
                Some("on") => {
                    self.show_copied = true;
                    self.set_status("Show copied rows: on");
                }
                Some("off") => {
                    self.show_copied = false;
                    self.set_status("Show copied rows: off");
                }
                None => self.toggle_show_copied(),
                Some(other) => self.set_status(&format!("Invalid argument: {}", other)),
            },
            "open" => self.expand_all(),
            "close" => self.collapse_all(),
            "toc" => self.toggle_toc(),
            "goto" => match arg {
                Some(id) => self.navigate_to_fragment(id),
                None => self.set_status("Usage: :goto <section-id>"),
            },
            "regex" => {
                self.set_match_mode(MatchMode::Pattern);
                self.set_status("Replacement keys are regular expressions");
            }
            "literal" => {
                self.set_match_mode(MatchMode::Literal);
                self.set_status("Replacement keys are literal text");
            }
            "e" | "reload" => self.reload_file(),
            "h" | "help" => self.toggle_help(),
            _ => self.set_status(&format!("Unknown command: {}", command)),
        }
        false
    }
}
