use std::collections::HashSet;

use super::App;

/// Share of the viewport, from the top, in which a section header counts as current.
pub const ACTIVATION_BAND_PERCENT: usize = 20;

/// Lines kept above a section header when jumping to it.
pub const HEADER_CLEARANCE: usize = 2;

/// A section header entering or leaving the activation band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionEvent {
    pub id: String,
    pub is_intersecting: bool,
}

/// Tracks which section header is inside the activation band.
///
/// Only registered ids are observed. When several headers enter the band
/// in one pass, the last one (in document order) becomes active. When the
/// active header leaves, the last header still inside takes over; with the
/// band empty the previous active id is kept.
#[derive(Debug, Clone, Default)]
pub struct ScrollSpy {
    registered: Vec<String>,
    intersecting: HashSet<String>,
    active: Option<String>,
}

impl ScrollSpy {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            registered: ids.into_iter().map(Into::into).collect(),
            intersecting: HashSet::new(),
            active: None,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.registered.iter().any(|r| r == id)
    }

    /// Height of the band for a viewport of `viewport` lines. Never zero.
    pub fn band_height(viewport: usize) -> usize {
        (viewport * ACTIVATION_BAND_PERCENT / 100).max(1)
    }

    /// Compare header positions with the band at `scroll` and emit the changes.
    ///
    /// `markers` holds `(section id, header line)` in document order.
    pub fn observe(
        &mut self,
        markers: &[(String, usize)],
        scroll: usize,
        viewport: usize,
    ) -> Vec<IntersectionEvent> {
        let band_end = scroll + Self::band_height(viewport);
        let mut events = Vec::new();

        for (id, line) in markers {
            if !self.is_registered(id) {
                continue;
            }
            let inside = *line >= scroll && *line < band_end;
            let was_inside = self.intersecting.contains(id);
            if inside != was_inside {
                if inside {
                    self.intersecting.insert(id.clone());
                } else {
                    self.intersecting.remove(id);
                }
                events.push(IntersectionEvent {
                    id: id.clone(),
                    is_intersecting: inside,
                });
            }
        }

        for event in events.iter().filter(|e| e.is_intersecting) {
            self.active = Some(event.id.clone());
        }

        // The active header left the band while others are still inside it
        let active_left = self
            .active
            .as_ref()
            .is_some_and(|id| !self.intersecting.contains(id));
        if active_left {
            if let Some((id, _)) = markers
                .iter()
                .rev()
                .find(|(id, _)| self.intersecting.contains(id))
            {
                self.active = Some(id.clone());
            }
        }
        events
    }
}

/// Eased scroll towards a target line, advanced once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothScroll {
    pub target: usize,
}

impl SmoothScroll {
    pub fn new(target: usize) -> Self {
        Self { target }
    }

    /// Next scroll position from `current`. Covers a third of the distance, at least one line.
    pub fn step(&self, current: usize) -> usize {
        let distance = current.abs_diff(self.target);
        let delta = (distance / 3).max(1).min(distance);
        if current < self.target {
            current + delta
        } else {
            current - delta
        }
    }

    pub fn is_done(&self, current: usize) -> bool {
        current == self.target
    }
}

impl App {
    /// Register every section with a fresh scroll spy.
    pub fn mount(&mut self) {
        let ids: Vec<String> = self.sections.iter().map(|s| s.id().to_string()).collect();
        tracing::debug!(sections = ids.len(), "registering scroll spy");
        self.scroll_spy = Some(ScrollSpy::new(ids));
        self.observe_sections();
    }

    /// Release the scroll spy and cancel pending flashes.
    pub fn unmount(&mut self) {
        self.scroll_spy = None;
        self.smooth_scroll = None;
        self.editor = None;
        for section in &mut self.sections {
            section.cancel_flashes();
        }
    }

    pub fn observe_sections(&mut self) {
        let markers = self.section_markers();
        let scroll = self.scroll;
        let viewport = self.get_visible_height();
        if let Some(spy) = self.scroll_spy.as_mut() {
            let events = spy.observe(&markers, scroll, viewport);
            if !events.is_empty() {
                tracing::trace!(?events, "scroll spy");
            }
        }
    }

    pub fn active_section_id(&self) -> Option<&str> {
        self.scroll_spy.as_ref().and_then(|spy| spy.active())
    }

    /// Smoothly scroll so the header of `id` sits just below the top.
    pub fn jump_to_section(&mut self, id: &str) -> bool {
        let Some(index) = self.sections.iter().position(|s| s.id() == id) else {
            return false;
        };
        let layout = self.layout();
        let target = layout[index]
            .header_line
            .saturating_sub(HEADER_CLEARANCE)
            .min(self.max_scroll());
        self.cursor = super::Cursor::header(index);
        self.smooth_scroll = Some(SmoothScroll::new(target));
        true
    }

    /// Navigate to a `#fragment` (the leading `#` is optional).
    pub fn navigate_to_fragment(&mut self, fragment: &str) {
        let id = fragment.trim().trim_start_matches('#');
        if id.is_empty() {
            return;
        }
        if self.jump_to_section(id) {
            self.set_status(&format!("#{}", id));
        } else {
            tracing::warn!(fragment = id, "unknown section fragment");
            self.set_status(&format!("No section: #{}", id));
        }
    }

    pub fn toggle_toc(&mut self) {
        self.toc_open = !self.toc_open;
        if self.toc_open {
            self.toc_selected = self
                .active_section_id()
                .and_then(|id| self.sections.iter().position(|s| s.id() == id))
                .unwrap_or(0);
        } else {
            self.toc_has_focus = false;
        }
    }

    pub fn focus_toc(&mut self) {
        if !self.toc_open {
            self.toggle_toc();
        }
        self.toc_has_focus = !self.toc_has_focus;
    }

    pub fn toc_move_up(&mut self) {
        self.toc_selected = self.toc_selected.saturating_sub(1);
    }

    pub fn toc_move_down(&mut self) {
        if self.toc_selected + 1 < self.sections.len() {
            self.toc_selected += 1;
        }
    }

    pub fn toc_jump_to_selected(&mut self) {
        if let Some(id) = self.sections.get(self.toc_selected).map(|s| s.id().to_string()) {
            self.jump_to_section(&id);
        }
    }

    pub fn toc_entries(&self) -> Vec<(&str, &str)> {
        self.sections.iter().map(|s| (s.id(), s.title())).collect()
    }
}
