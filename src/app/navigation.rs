use super::App;
use crate::rendering::Renderer;

/// Current position: a section header, or one of its rows when open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub section: usize,
    pub row: Option<usize>,
}

impl Cursor {
    pub fn header(section: usize) -> Self {
        Self { section, row: None }
    }

    pub fn row(section: usize, row: usize) -> Self {
        Self {
            section,
            row: Some(row),
        }
    }
}

/// Where a section lands in the content area, in lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLayout {
    pub header_line: usize,
    pub row_heights: Vec<usize>,
    /// Header, visible rows and the trailing spacer.
    pub height: usize,
}

impl SectionLayout {
    pub fn row_line(&self, row: usize) -> usize {
        self.header_line + 1 + self.row_heights.iter().take(row).sum::<usize>()
    }
}

impl App {
    pub fn layout(&self) -> Vec<SectionLayout> {
        let (label_width, value_width) = Renderer::column_widths(self.get_content_width());
        let mut line = 0usize;
        let mut layout = Vec::with_capacity(self.sections.len());

        for section in &self.sections {
            let row_heights: Vec<usize> = if section.is_open() {
                section
                    .rows()
                    .iter()
                    .enumerate()
                    .map(|(i, row)| {
                        let value = section.effective_value(i).unwrap_or(&row.value);
                        let value_lines = Renderer::wrap_value(value, value_width).len();
                        let label_lines = Renderer::wrap_line(&row.label, label_width).len();
                        value_lines.max(label_lines)
                    })
                    .collect()
            } else {
                Vec::new()
            };
            let height = 1 + row_heights.iter().sum::<usize>() + 1;
            layout.push(SectionLayout {
                header_line: line,
                row_heights,
                height,
            });
            line += height;
        }
        layout
    }

    /// `(section id, header line)` in document order.
    pub fn section_markers(&self) -> Vec<(String, usize)> {
        self.sections
            .iter()
            .zip(self.layout())
            .map(|(section, layout)| (section.id().to_string(), layout.header_line))
            .collect()
    }

    pub fn total_lines(&self) -> usize {
        self.layout().last().map(|l| l.header_line + l.height).unwrap_or(0)
    }

    pub fn max_scroll(&self) -> usize {
        self.total_lines().saturating_sub(self.get_visible_height())
    }

    pub fn get_visible_height(&self) -> usize {
        self.visible_height.max(1)
    }

    pub fn get_content_width(&self) -> usize {
        self.content_width.max(1)
    }

    pub fn cursor_line(&self) -> usize {
        let layout = self.layout();
        match layout.get(self.cursor.section) {
            Some(l) => match self.cursor.row {
                Some(row) => l.row_line(row),
                None => l.header_line,
            },
            None => 0,
        }
    }

    pub fn move_down(&mut self) {
        let Some(section) = self.sections.get(self.cursor.section) else {
            return;
        };
        let rows = if section.is_open() { section.row_count() } else { 0 };
        let next_row = self.cursor.row.map_or(0, |r| r + 1);
        if next_row < rows {
            self.cursor.row = Some(next_row);
        } else if self.cursor.section + 1 < self.sections.len() {
            self.cursor = Cursor::header(self.cursor.section + 1);
        }
        self.ensure_cursor_visible();
    }

    pub fn move_up(&mut self) {
        match self.cursor.row {
            Some(0) => self.cursor.row = None,
            Some(r) => self.cursor.row = Some(r - 1),
            None if self.cursor.section > 0 => {
                let prev = self.cursor.section - 1;
                let section = &self.sections[prev];
                self.cursor = if section.is_open() && section.row_count() > 0 {
                    Cursor::row(prev, section.row_count() - 1)
                } else {
                    Cursor::header(prev)
                };
            }
            None => {}
        }
        self.ensure_cursor_visible();
    }

    pub fn move_to_top(&mut self) {
        self.cursor = Cursor::header(0);
        self.scroll = 0;
        self.smooth_scroll = None;
    }

    pub fn move_to_bottom(&mut self) {
        if let Some(last) = self.sections.len().checked_sub(1) {
            let section = &self.sections[last];
            self.cursor = if section.is_open() && section.row_count() > 0 {
                Cursor::row(last, section.row_count() - 1)
            } else {
                Cursor::header(last)
            };
        }
        self.scroll = self.max_scroll();
        self.smooth_scroll = None;
    }

    pub fn page_down(&mut self) {
        let half = self.get_visible_height() / 2;
        for _ in 0..half.max(1) {
            self.move_down();
        }
    }

    pub fn page_up(&mut self) {
        let half = self.get_visible_height() / 2;
        for _ in 0..half.max(1) {
            self.move_up();
        }
    }

    /// Scroll the content without moving the cursor.
    pub fn scroll_by(&mut self, delta: isize) {
        self.smooth_scroll = None;
        self.scroll = self.scroll.saturating_add_signed(delta).min(self.max_scroll());
    }

    pub fn ensure_cursor_visible(&mut self) {
        let line = self.cursor_line();
        let height = self.get_visible_height();
        if line < self.scroll {
            self.scroll = line;
        } else if line >= self.scroll + height {
            self.scroll = line + 1 - height;
        }
        self.smooth_scroll = None;
    }

    /// Keep the cursor on an existing section/row after the layout changed.
    pub fn clamp_cursor(&mut self) {
        if self.sections.is_empty() {
            self.cursor = Cursor::header(0);
            return;
        }
        if self.cursor.section >= self.sections.len() {
            self.cursor = Cursor::header(self.sections.len() - 1);
        }
        let section = &self.sections[self.cursor.section];
        if let Some(row) = self.cursor.row {
            if !section.is_open() || row >= section.row_count() {
                self.cursor.row = None;
            }
        }
        self.scroll = self.scroll.min(self.max_scroll());
    }
}
