use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use daykeeper::birthday::UpcomingBirthday;

use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BirthdayField {
    Name,
    Date,
}

#[derive(Debug, Clone)]
pub struct BirthdayPanelState {
    pub upcoming: Vec<UpcomingBirthday>,
    pub all: Vec<(String, String)>,
    pub selected: usize,
    pub name: String,
    pub date: String,
    /// `Some` while the add form is focused, `None` while browsing the list.
    pub active_field: Option<BirthdayField>,
    pub error: Option<String>,
}

impl BirthdayPanelState {
    pub fn new(upcoming: Vec<UpcomingBirthday>, all: Vec<(String, String)>) -> Self {
        Self {
            upcoming,
            all,
            selected: 0,
            name: String::new(),
            date: String::new(),
            active_field: None,
            error: None,
        }
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.all.get(self.selected).map(|(name, _)| name.as_str())
    }

    pub fn input_char(&mut self, c: char) {
        self.error = None;
        match self.active_field {
            Some(BirthdayField::Name) => self.name.push(c),
            Some(BirthdayField::Date) => self.date.push(c),
            None => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.active_field {
            Some(BirthdayField::Name) => {
                self.name.pop();
            }
            Some(BirthdayField::Date) => {
                self.date.pop();
            }
            None => {}
        }
    }

    /// Both fields required, date must be a real `YYYY-MM-DD`.
    pub fn validated(&self) -> Result<(String, String), String> {
        let name = self.name.trim();
        let date = self.date.trim();
        if name.is_empty() || date.is_empty() {
            return Err("Please fill in both name and date".to_string());
        }
        if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
            return Err("Date must be in YYYY-MM-DD format".to_string());
        }
        Ok((name.to_string(), date.to_string()))
    }
}

pub struct BirthdayView;

impl BirthdayView {
    pub fn render(frame: &mut Frame, area: Rect, state: &BirthdayPanelState) {
        let popup_w = area.width.min(62).max(40);
        let popup_h = area.height.min(24).max(14);
        let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
        let popup_area = Rect::new(x, y, popup_w, popup_h);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" 🎂 Birthdays ")
            .title_style(theme::current().header)
            .borders(Borders::ALL)
            .border_style(theme::current().border);

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(Span::styled(
            "Upcoming in next 30 days",
            theme::current().accent.add_modifier(Modifier::BOLD),
        )));
        if state.upcoming.is_empty() {
            lines.push(Line::from(Span::styled(
                "  No upcoming birthdays",
                theme::current().dim,
            )));
        } else {
            for b in &state.upcoming {
                let when = if b.days_left == 0 {
                    "Today! 🎉".to_string()
                } else if b.days_left == 1 {
                    "In 1 day".to_string()
                } else {
                    format!("In {} days", b.days_left)
                };
                let style = if b.days_left == 0 {
                    theme::current().today
                } else {
                    Style::default()
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("  🎂 {} — {}  ", b.name, b.birth_date), style),
                    Span::styled(
                        format!("{when} (turns {})", b.age_turning),
                        if b.days_left == 0 {
                            style
                        } else {
                            theme::current().dim
                        },
                    ),
                ]));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "All birthdays",
            theme::current().header,
        )));
        if state.all.is_empty() {
            lines.push(Line::from(Span::styled(
                "  No birthdays saved yet",
                theme::current().dim,
            )));
        } else {
            for (i, (name, date)) in state.all.iter().enumerate() {
                let row_selected = state.active_field.is_none() && i == state.selected;
                let style = if row_selected {
                    theme::current().selected
                } else {
                    Style::default()
                };
                lines.push(Line::from(Span::styled(
                    format!("  {name} — {date}"),
                    style,
                )));
            }
        }

        lines.push(Line::from(""));
        if state.active_field.is_some() {
            lines.push(Line::from(Span::styled(
                "Add birthday",
                theme::current().header,
            )));
            lines.push(field_line(
                "  Name: ",
                &state.name,
                state.active_field == Some(BirthdayField::Name),
            ));
            lines.push(field_line(
                "  Date: ",
                if state.date.is_empty() && state.active_field != Some(BirthdayField::Date) {
                    "YYYY-MM-DD"
                } else {
                    &state.date
                },
                state.active_field == Some(BirthdayField::Date),
            ));
        }

        if let Some(ref err) = state.error {
            lines.push(Line::from(Span::styled(
                err.clone(),
                theme::current().high,
            )));
        }

        lines.push(Line::from(""));
        let hints = if state.active_field.is_some() {
            "Tab:Switch field  Enter:Save  Esc:Back"
        } else {
            "j/k:Select  a:Add  d:Delete  Esc:Close"
        };
        lines.push(Line::from(Span::styled(hints, theme::current().dim)));

        let para = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(para, inner);
    }
}

fn field_line(label: &str, value: &str, active: bool) -> Line<'static> {
    let cursor = if active { "_" } else { "" };
    let style = if active {
        theme::current().accent
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(label.to_string(), theme::current().dim),
        Span::styled(format!("{value}{cursor}"), style),
    ])
}
