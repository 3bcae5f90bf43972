use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, EditorField, ReplacementEditor};
use crate::rendering::Renderer;
use crate::replace::apply_replacements;

use super::utils::{clear_popup, pad_to_width, popup_area, scroll_field_to_cursor};

pub fn render_edit_overlay(f: &mut Frame, app: &App) {
    let Some(editor) = app.editor.as_ref() else {
        return;
    };
    let Some(section) = app.sections.get(editor.section) else {
        return;
    };

    let popup = popup_area(f.area(), 80, 60);
    clear_popup(f, app, popup);

    let block = Block::default()
        .title(format!(" Replacements: {} ", section.title()))
        .title_bottom(Line::from(" a add  d remove  i edit  w save  q close ").right_aligned())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(app.colorscheme.background).fg(Color::White));

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    // Pairs on top, preview of the first row below
    let preview_height = 3u16.min(inner.height);
    let pairs_area = Rect {
        height: inner.height.saturating_sub(preview_height),
        ..inner
    };
    let preview_area = Rect {
        y: inner.y + pairs_area.height,
        height: preview_height,
        ..inner
    };

    render_pairs(f, app, editor, pairs_area);

    if let Some(row) = section.rows().first() {
        let staged = editor.commit();
        let preview = apply_replacements(&row.value, &staged, section.match_mode());
        let text = vec![
            Line::styled("Preview", Style::default().fg(app.colorscheme.text_dim)),
            Line::styled(preview, Style::default().fg(app.colorscheme.value)),
        ];
        f.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), preview_area);
    }
}

fn render_pairs(f: &mut Frame, app: &App, editor: &ReplacementEditor, area: Rect) {
    if editor.pairs.is_empty() {
        let hint = Line::styled(
            "No replacements. Press 'a' to add one.",
            Style::default().fg(app.colorscheme.overlay_field_placeholder),
        );
        f.render_widget(Paragraph::new(hint), area);
        return;
    }

    let width = area.width as usize;
    let key_width = (width.saturating_sub(4) * 2 / 5).max(1);
    let value_width = width.saturating_sub(key_width + 4).max(1);
    let visible_height = area.height as usize;
    let scroll = if editor.selected >= visible_height {
        editor.selected + 1 - visible_height
    } else {
        0
    };

    let mut lines = Vec::new();
    for (i, (key, value)) in editor.pairs.iter().enumerate().skip(scroll).take(visible_height) {
        let is_selected = i == editor.selected;
        let key_span = field_span(
            app,
            editor,
            key,
            "placeholder",
            key_width,
            is_selected && editor.field == EditorField::Key,
        );
        let value_span = field_span(
            app,
            editor,
            value,
            "substitution",
            value_width,
            is_selected && editor.field == EditorField::Value,
        );
        let arrow = Span::styled(" → ", Style::default().fg(app.colorscheme.text_dim));
        let gutter = if is_selected { "▌" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(gutter, Style::default().fg(app.colorscheme.overlay_field_selected)),
            key_span,
            arrow,
            value_span,
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn field_span(
    app: &App,
    editor: &ReplacementEditor,
    text: &str,
    placeholder: &str,
    width: usize,
    is_current: bool,
) -> Span<'static> {
    let scheme = &app.colorscheme;
    if is_current && editor.editing {
        let shown = scroll_field_to_cursor(text, editor.cursor, width);
        return Span::styled(
            pad_to_width(&shown, width),
            Style::default().fg(scheme.overlay_field_active),
        );
    }

    let (content, style) = if text.is_empty() {
        (placeholder, Style::default().fg(scheme.overlay_field_placeholder))
    } else {
        (text, Style::default().fg(scheme.label))
    };
    let style = if is_current {
        style.fg(scheme.overlay_field_selected).add_modifier(Modifier::BOLD)
    } else {
        style
    };
    let content = if Renderer::display_width_str(content) > width {
        Renderer::truncate_to_width(content, width)
    } else {
        content.to_string()
    };
    Span::styled(pad_to_width(&content, width), style)
}
