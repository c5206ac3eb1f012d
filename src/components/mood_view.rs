use rand::Rng;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use daykeeper::store::MOODS;

use crate::theme;

/// Accent color per mood, same order as [`MOODS`].
const MOOD_COLORS: [Color; 7] = [
    Color::Rgb(249, 202, 36),  // Happy
    Color::Rgb(106, 176, 76),  // Good
    Color::Rgb(149, 175, 192), // Neutral
    Color::Rgb(119, 140, 163), // Sad
    Color::Rgb(229, 80, 57),   // Stressed
    Color::Rgb(162, 155, 254), // Tired
    Color::Rgb(253, 121, 168), // Excited
];

const MOOD_MESSAGES: [(&str, &[&str]); 7] = [
    ("Happy", &[
        "Happiness is contagious — share it with someone today! 💛",
        "You're glowing today! Keep spreading that joy! 🌟",
    ]),
    ("Good", &[
        "A good day is a gift 🌈 Make the most of it!",
        "Steady and strong — that's the way! Keep going! ✅",
    ]),
    ("Neutral", &[
        "That's perfectly okay 🌥️ Not every day needs to be extraordinary.",
        "Sometimes feeling okay is more than enough 😐",
    ]),
    ("Sad", &[
        "It's okay to feel sad 💙 Tough times don't last, tough people do.",
        "Take a deep breath 🌬️ Tomorrow is a brand new day.",
    ]),
    ("Stressed", &[
        "One thing at a time 🧘 You've handled hard days before.",
        "Take 5 minutes to breathe 🌿 A short break can reset everything.",
    ]),
    ("Tired", &[
        "Rest is productive too 😴 Your body is asking for kindness.",
        "It's okay to slow down 💤 You don't have to do everything today.",
    ]),
    ("Excited", &[
        "Woohoo! 🎉 Channel that energy into something great!",
        "Love that excitement! 🚀 Go conquer the world today!",
    ]),
];

/// A random encouragement for the picked mood.
pub fn message_for(label: &str) -> &'static str {
    let options = MOOD_MESSAGES
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, msgs)| *msgs)
        .unwrap_or(&["You're doing great! 💙"]);
    options[rand::rng().random_range(0..options.len())]
}

#[derive(Debug, Clone)]
pub struct MoodPanelState {
    pub date: String,
    /// Index into [`MOODS`] of the saved mood, if any.
    pub saved: Option<usize>,
    /// Keyboard cursor over the mood grid.
    pub cursor: usize,
    pub message: Option<String>,
    pub journal: String,
    pub editing: bool,
    pub notice: Option<String>,
}

impl MoodPanelState {
    pub fn new(date: String, saved: Option<usize>, journal: String) -> Self {
        Self {
            date,
            cursor: saved.unwrap_or(0),
            message: saved.map(|i| message_for(MOODS[i].1).to_string()),
            saved,
            journal,
            editing: false,
            notice: None,
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = (self.cursor + MOODS.len() - 1) % MOODS.len();
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1) % MOODS.len();
    }
}

pub struct MoodView;

impl MoodView {
    pub fn render(frame: &mut Frame, area: Rect, state: &MoodPanelState) {
        let popup_w = area.width.min(60).max(42);
        let popup_h = area.height.min(18).max(12);
        let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
        let popup_area = Rect::new(x, y, popup_w, popup_h);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(format!(" 😊 Mood — {} ", state.date))
            .title_style(theme::current().header)
            .borders(Borders::ALL)
            .border_style(theme::current().border);

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(Span::styled(
            "How are you feeling today?",
            theme::current().header,
        )));
        lines.push(Line::from(""));

        let mut cells: Vec<Span> = Vec::new();
        for (i, (emoji, label)) in MOODS.iter().enumerate() {
            let mut style = Style::default().fg(MOOD_COLORS[i]);
            if state.saved == Some(i) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            if state.cursor == i && !state.editing {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
            }
            cells.push(Span::styled(format!(" {emoji} {label} "), style));
        }
        lines.push(Line::from(cells));

        if let Some(ref msg) = state.message {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                msg.clone(),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("📓 Journal", theme::current().header),
            Span::styled(
                " — it will show up in the day's reminder list",
                theme::current().dim,
            ),
        ]));

        let journal_style = if state.editing {
            theme::current().accent
        } else {
            Style::default()
        };
        let cursor = if state.editing { "_" } else { "" };
        let journal_text = if state.journal.is_empty() && !state.editing {
            Span::styled("Write your thoughts here...", theme::current().dim)
        } else {
            Span::styled(format!("{}{cursor}", state.journal), journal_style)
        };
        lines.push(Line::from(journal_text));

        if let Some(ref notice) = state.notice {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                notice.clone(),
                theme::current().low,
            )));
        }

        lines.push(Line::from(""));
        let hints = if state.editing {
            "Enter:Save journal  Esc:Stop editing"
        } else {
            "h/l:Pick  Enter:Save mood  i:Write journal  Esc:Close"
        };
        lines.push(Line::from(Span::styled(hints, theme::current().dim)));

        let para = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(para, inner);
    }
}
