use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use daykeeper::countdown;
use daykeeper::reminder::Entry;

use crate::app::{App, InputMode, ViewMode};
use crate::theme;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let w = area.width as usize;
        let status = theme::current().status;

        let mode_str = match app.view_mode {
            ViewMode::Month => "[1]Month",
            ViewMode::Day => "[2]Day",
        };

        let countdown_str = match &app.next_up {
            Some((at, raw)) => {
                let note = Entry::parse(raw).note;
                let label: String = if note.chars().count() > 25 {
                    format!("{}...", note.chars().take(25).collect::<String>())
                } else {
                    note
                };
                format!(
                    " ⏳ {} in {} ",
                    label,
                    countdown::countdown_text(*at, Local::now().naive_local())
                )
            }
            None => " ⏳ No upcoming reminders ".to_string(),
        };

        let mood_str = app
            .today_mood
            .as_ref()
            .map(|m| format!(" {} {} ", m.emoji, m.label))
            .unwrap_or_default();
        let clock_str = Local::now().format(" %d %b %Y  %H:%M:%S ").to_string();

        // A status message beats the key hints; both lose to narrow widths.
        let middle = if let Some(ref msg) = app.status_message {
            format!(" {msg} ")
        } else {
            match app.input_mode {
                InputMode::Normal if w >= 110 => {
                    " h/l:Day j/k:Select [/]:Month t:Today n:New d:Del m:Mood b:Bdays /:Find e:Export ?:Help q:Quit"
                        .to_string()
                }
                InputMode::Normal if w >= 60 => " n:New m:Mood b:Bdays ?:Help q:Quit".to_string(),
                _ => String::new(),
            }
        };

        let left = format!(" {mode_str} {countdown_str}");
        let right = format!("{mood_str}{clock_str}");
        let padding_len = w.saturating_sub(left.len() + middle.len() + right.len());
        let padding = " ".repeat(padding_len);

        let line = Line::from(vec![
            Span::styled(left, status),
            Span::styled(middle, status),
            Span::styled(padding, status),
            Span::styled(right, status),
        ]);

        frame.render_widget(Paragraph::new(line).style(status), area);
    }
}
