use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub name: &'static str,
    pub background: Color,        // Background color for sections and UI
    pub border: Color,            // Content window border color
    pub title: Color,             // Page title color
    pub section_header: Color,    // Section title color
    pub section_cursor: Color,    // Background of the row/header under the cursor
    pub label: Color,             // Row label column
    pub value: Color,             // Row value column (effective value)
    pub copied_row: Color,        // Background of copied rows when shown
    pub flash: Color,             // "Copied!" marker
    pub text_dim: Color,          // Dimmed text (counts, hints)
    pub toc_border: Color,        // Table of contents border color
    pub toc_title: Color,         // Table of contents title color
    pub toc_active: Color,        // Section currently in view
    pub selected: Color,          // Focused selection in lists
    pub overlay_field_active: Color,      // Editor field while typing
    pub overlay_field_selected: Color,    // Editor field under selection
    pub overlay_field_placeholder: Color, // Editor placeholder text
    pub status_bar: Color,        // Status bar text color
}

impl ColorScheme {
    pub fn default() -> Self {
        Self {
            name: "Default",
            background: Color::Rgb(26, 28, 34),
            border: Color::DarkGray,
            title: Color::Rgb(156, 220, 254),           // Light blue
            section_header: Color::Rgb(156, 220, 254),  // Light blue
            section_cursor: Color::Rgb(45, 48, 58),
            label: Color::Gray,
            value: Color::Rgb(206, 145, 120),           // Orange/peach
            copied_row: Color::Rgb(30, 50, 80),         // Muted blue
            flash: Color::Rgb(181, 206, 168),           // Light green
            text_dim: Color::DarkGray,
            toc_border: Color::DarkGray,
            toc_title: Color::Cyan,
            toc_active: Color::Yellow,
            selected: Color::Cyan,
            overlay_field_active: Color::Yellow,
            overlay_field_selected: Color::Cyan,
            overlay_field_placeholder: Color::DarkGray,
            status_bar: Color::Cyan,
        }
    }

    pub fn monokai() -> Self {
        Self {
            name: "Monokai",
            background: Color::Rgb(39, 40, 34),
            border: Color::Rgb(73, 72, 62),
            title: Color::Rgb(166, 226, 46),            // Green
            section_header: Color::Rgb(102, 217, 239),  // Cyan
            section_cursor: Color::Rgb(62, 61, 50),
            label: Color::Rgb(248, 248, 242),
            value: Color::Rgb(230, 219, 116),           // Yellow
            copied_row: Color::Rgb(55, 64, 90),
            flash: Color::Rgb(166, 226, 46),
            text_dim: Color::Rgb(117, 113, 94),
            toc_border: Color::Rgb(73, 72, 62),
            toc_title: Color::Rgb(166, 226, 46),
            toc_active: Color::Rgb(249, 38, 114),       // Pink
            selected: Color::Rgb(102, 217, 239),
            overlay_field_active: Color::Rgb(230, 219, 116),
            overlay_field_selected: Color::Rgb(102, 217, 239),
            overlay_field_placeholder: Color::Rgb(117, 113, 94),
            status_bar: Color::Rgb(166, 226, 46),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "Solarized",
            background: Color::Rgb(0, 43, 54),
            border: Color::Rgb(7, 54, 66),
            title: Color::Rgb(38, 139, 210),            // Blue
            section_header: Color::Rgb(38, 139, 210),
            section_cursor: Color::Rgb(7, 54, 66),
            label: Color::Rgb(131, 148, 150),
            value: Color::Rgb(42, 161, 152),            // Cyan
            copied_row: Color::Rgb(16, 70, 92),
            flash: Color::Rgb(133, 153, 0),             // Green
            text_dim: Color::Rgb(88, 110, 117),
            toc_border: Color::Rgb(7, 54, 66),
            toc_title: Color::Rgb(42, 161, 152),
            toc_active: Color::Rgb(181, 137, 0),        // Yellow
            selected: Color::Rgb(42, 161, 152),
            overlay_field_active: Color::Rgb(181, 137, 0),
            overlay_field_selected: Color::Rgb(42, 161, 152),
            overlay_field_placeholder: Color::Rgb(88, 110, 117),
            status_bar: Color::Rgb(42, 161, 152),
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "Nord",
            background: Color::Rgb(46, 52, 64),
            border: Color::Rgb(59, 66, 82),
            title: Color::Rgb(136, 192, 208),           // Frost cyan
            section_header: Color::Rgb(136, 192, 208),
            section_cursor: Color::Rgb(59, 66, 82),
            label: Color::Rgb(216, 222, 233),
            value: Color::Rgb(163, 190, 140),           // Green
            copied_row: Color::Rgb(67, 76, 94),
            flash: Color::Rgb(235, 203, 139),           // Yellow
            text_dim: Color::Rgb(76, 86, 106),
            toc_border: Color::Rgb(59, 66, 82),
            toc_title: Color::Rgb(163, 190, 140),
            toc_active: Color::Rgb(235, 203, 139),
            selected: Color::Rgb(136, 192, 208),
            overlay_field_active: Color::Rgb(235, 203, 139),
            overlay_field_selected: Color::Rgb(136, 192, 208),
            overlay_field_placeholder: Color::Rgb(76, 86, 106),
            status_bar: Color::Rgb(163, 190, 140),
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default()),
            "monokai" => Some(Self::monokai()),
            "solarized" | "solarized-dark" => Some(Self::solarized_dark()),
            "nord" => Some(Self::nord()),
            _ => None,
        }
    }
}
