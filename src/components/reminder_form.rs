use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use daykeeper::reminder::{parse_time, Entry, Priority};

use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormField {
    Time,
    Priority,
    Note,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Time => FormField::Priority,
            FormField::Priority => FormField::Note,
            FormField::Note => FormField::Time,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::Time => FormField::Note,
            FormField::Priority => FormField::Time,
            FormField::Note => FormField::Priority,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReminderFormState {
    pub time: String,
    pub priority_index: usize,
    pub note: String,
    pub active_field: FormField,
    pub error: Option<String>,
}

impl ReminderFormState {
    pub fn new() -> Self {
        Self {
            time: String::new(),
            priority_index: 1, // Medium
            note: String::new(),
            active_field: FormField::Note,
            error: None,
        }
    }

    pub fn priority(&self) -> Priority {
        Priority::ALL[self.priority_index % Priority::ALL.len()]
    }

    pub fn input_char(&mut self, c: char) {
        self.error = None;
        match self.active_field {
            FormField::Time => self.time.push(c),
            FormField::Note => self.note.push(c),
            FormField::Priority => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.active_field {
            FormField::Time => {
                self.time.pop();
            }
            FormField::Note => {
                self.note.pop();
            }
            FormField::Priority => {}
        }
    }

    pub fn cycle_priority(&mut self) {
        self.priority_index = (self.priority_index + 1) % Priority::ALL.len();
    }

    /// Validate and produce the stored entry string. Empty notes and
    /// malformed non-empty times are rejected here — nothing half-saved.
    pub fn build_entry(&self) -> Result<String, String> {
        let note = self.note.trim();
        if note.is_empty() {
            return Err("Please enter a reminder note".to_string());
        }

        let time = self.time.trim();
        let time = if time.is_empty() {
            None
        } else {
            match parse_time(time) {
                Some(t) => Some(t),
                None => return Err("Time must be HH:MM (24-hour)".to_string()),
            }
        };

        Ok(Entry {
            time,
            priority: Some(self.priority()),
            note: note.to_string(),
        }
        .encode())
    }
}

pub struct ReminderForm;

impl ReminderForm {
    pub fn render(frame: &mut Frame, area: Rect, state: &ReminderFormState, date_label: &str) {
        let form_w = area.width.min(46).max(30);
        let form_h = area.height.min(10).max(8);
        let x = area.x + (area.width.saturating_sub(form_w)) / 2;
        let y = area.y + (area.height.saturating_sub(form_h)) / 2;
        let form_area = Rect::new(x, y, form_w, form_h);

        frame.render_widget(Clear, form_area);

        let block = Block::default()
            .title(format!(" New Reminder — {date_label} "))
            .title_style(theme::current().accent.add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(theme::current().accent);

        let inner = block.inner(form_area);
        frame.render_widget(block, form_area);

        let rows = Layout::vertical([
            Constraint::Length(1), // time
            Constraint::Length(1), // priority
            Constraint::Length(1), // note
            Constraint::Length(1), // spacer / error
            Constraint::Length(1), // help
            Constraint::Min(0),
        ])
        .split(inner);

        render_field(
            frame,
            rows[0],
            "Time:",
            if state.time.is_empty() && state.active_field != FormField::Time {
                "HH:MM (optional)"
            } else {
                &state.time
            },
            state.active_field == FormField::Time,
        );

        let priority = state.priority();
        let mut spans = vec![Span::styled(format!("{:<7}", "Prio:"), theme::current().dim)];
        spans.push(Span::styled(
            priority.label().to_string(),
            theme::current().priority(priority),
        ));
        if state.active_field == FormField::Priority {
            spans.push(Span::styled("  (Space cycles)", theme::current().dim));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), rows[1]);

        render_field(
            frame,
            rows[2],
            "Note:",
            &state.note,
            state.active_field == FormField::Note,
        );

        if let Some(ref err) = state.error {
            frame.render_widget(
                Paragraph::new(Span::styled(err.clone(), theme::current().high)),
                rows[3],
            );
        }

        let help = Line::from(vec![
            Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Next ", theme::current().dim),
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Add ", theme::current().dim),
            Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Cancel", theme::current().dim),
        ]);
        frame.render_widget(Paragraph::new(help), rows[4]);
    }
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, active: bool) {
    let cursor = if active { "_" } else { "" };
    let style = if active {
        theme::current().accent
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::styled(format!("{label:<7}"), theme::current().dim),
        Span::styled(format!("{value}{cursor}"), style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
