use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use daykeeper::reminder::{Entry, JOURNAL_PREFIX};

use crate::theme;

pub struct DayView;

impl DayView {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        date: NaiveDate,
        reminders: &[String],
        selected: usize,
        month_total: usize,
    ) {
        let w = area.width as usize;

        let title = if w >= 30 {
            format!(" {} ", date.format("%A, %B %d, %Y"))
        } else if w >= 18 {
            format!(" {} ", date.format("%b %d, %Y"))
        } else {
            format!(" {} ", date.format("%m/%d"))
        };

        let block = Block::default()
            .title(title)
            .title_style(theme::current().header)
            .title_bottom(Line::from(Span::styled(
                format!(" {month_total} this month "),
                theme::current().dim,
            )))
            .borders(Borders::ALL)
            .border_style(theme::current().border);

        if reminders.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let msg = Paragraph::new("No reminders for this day").style(theme::current().dim);
            frame.render_widget(msg, inner);
            return;
        }

        let inner_h = block.inner(area).height as usize;
        let items: Vec<ListItem> = reminders
            .iter()
            .enumerate()
            .map(|(i, raw)| format_entry(raw, i == selected))
            .collect();

        // Keep the selection in view.
        let skip = (selected + 1).saturating_sub(inner_h);
        let visible: Vec<ListItem> = items.into_iter().skip(skip).collect();

        let list = List::new(visible).block(block);
        frame.render_widget(list, area);
    }
}

fn format_entry(raw: &str, is_selected: bool) -> ListItem<'static> {
    let entry = Entry::parse(raw);
    let marker_style = if is_selected {
        theme::current().selected
    } else {
        Style::default()
    };

    let mut spans = vec![Span::styled(if is_selected { " ❯ " } else { "   " }, marker_style)];

    if let Some(t) = entry.time {
        spans.push(Span::styled(
            format!("{} ", t.format("%H:%M")),
            theme::current().accent,
        ));
    }
    if let Some(p) = entry.priority {
        spans.push(Span::styled(
            format!("{} ", p.label()),
            theme::current().priority(p),
        ));
    }

    let note_style = if entry.is_journal() {
        theme::current().dim.add_modifier(Modifier::ITALIC)
    } else if is_selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    spans.push(Span::styled(entry.note, note_style));

    ListItem::new(Line::from(spans))
}

/// Decoded-field popup for the selected entry.
pub fn render_detail_popup(frame: &mut Frame, area: Rect, raw: &str, date: NaiveDate) {
    let popup_w = area.width.min(56).max(30);
    let popup_h = area.height.min(12).max(8);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let entry = Entry::parse(raw);
    let kind = if entry.is_journal() { "Journal" } else { "Reminder" };

    let block = Block::default()
        .title(format!(" {kind} "))
        .title_style(theme::current().accent.add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(theme::current().accent);

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Date: ", theme::current().dim),
        Span::styled(date.format("%A, %B %d, %Y").to_string(), Style::default()),
    ]));

    if let Some(t) = entry.time {
        lines.push(Line::from(vec![
            Span::styled("Time: ", theme::current().dim),
            Span::styled(t.format("%H:%M").to_string(), Style::default()),
        ]));
    }

    if let Some(p) = entry.priority {
        lines.push(Line::from(vec![
            Span::styled("Priority: ", theme::current().dim),
            Span::styled(p.label(), theme::current().priority(p)),
        ]));
    }

    let note = entry
        .note
        .strip_prefix(JOURNAL_PREFIX)
        .unwrap_or(&entry.note);
    lines.push(Line::from(""));
    for line in note.lines() {
        lines.push(Line::from(line.to_string()));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Esc to close",
        theme::current().dim,
    )));

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}
