use std::path::PathBuf;
use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use daykeeper::reminder::Priority;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Get the active theme (loaded once on first call).
pub fn current() -> &'static Theme {
    THEME.get_or_init(|| Theme::load().unwrap_or_default())
}

#[derive(Debug, Clone)]
pub struct Theme {
    #[allow(dead_code)]
    pub name: String,
    pub header: Style,
    pub accent: Style,
    pub dim: Style,
    pub border: Style,
    pub status: Style,
    pub today: Style,
    pub selected: Style,
    pub high: Style,
    pub medium: Style,
    pub low: Style,
}

impl Theme {
    pub fn priority(&self, priority: Priority) -> Style {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }

    pub fn load() -> Option<Self> {
        let path = config_path()?;
        if !path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(&path).ok()?;
        let config: ThemeConfig = toml::from_str(&content).ok()?;
        Some(config.into_theme())
    }

    /// Get a built-in preset by name.
    pub fn preset(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            header: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            accent: Style::default().fg(Color::Rgb(74, 158, 255)),
            dim: Style::default().fg(Color::Rgb(136, 136, 136)),
            border: Style::default().fg(Color::Rgb(68, 68, 68)),
            status: Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 30)),
            today: Style::default().fg(Color::Black).bg(Color::Rgb(249, 202, 36)),
            selected: Style::default().fg(Color::White).bg(Color::Rgb(74, 158, 255)),
            high: Style::default().fg(Color::Rgb(255, 107, 107)),
            medium: Style::default().fg(Color::Rgb(255, 159, 67)),
            low: Style::default().fg(Color::Rgb(29, 209, 161)),
        }
    }

    fn light() -> Self {
        Self {
            name: "light".to_string(),
            header: Style::default()
                .fg(Color::Rgb(44, 62, 80))
                .add_modifier(Modifier::BOLD),
            accent: Style::default().fg(Color::Rgb(41, 128, 185)),
            dim: Style::default().fg(Color::Rgb(149, 165, 166)),
            border: Style::default().fg(Color::Rgb(189, 195, 203)),
            status: Style::default().fg(Color::White).bg(Color::Rgb(44, 62, 80)),
            today: Style::default().fg(Color::Black).bg(Color::Rgb(249, 202, 36)),
            selected: Style::default().fg(Color::White).bg(Color::Rgb(41, 128, 185)),
            high: Style::default().fg(Color::Rgb(192, 57, 43)),
            medium: Style::default().fg(Color::Rgb(230, 126, 34)),
            low: Style::default().fg(Color::Rgb(39, 174, 96)),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("daykeeper").join("theme.toml"))
}

// ── TOML config types ──

#[derive(Debug, Deserialize, Default)]
struct ThemeConfig {
    preset: Option<String>,
    accent_fg: Option<String>,
    dim_fg: Option<String>,
    border_fg: Option<String>,
    status_bg: Option<String>,
    today_bg: Option<String>,
    selected_bg: Option<String>,
    high_fg: Option<String>,
    medium_fg: Option<String>,
    low_fg: Option<String>,
}

impl ThemeConfig {
    fn into_theme(self) -> Theme {
        let mut theme = self
            .preset
            .as_deref()
            .map(Theme::preset)
            .unwrap_or_default();

        if let Some(c) = self.accent_fg.as_deref().and_then(parse_color) {
            theme.accent = theme.accent.fg(c);
        }
        if let Some(c) = self.dim_fg.as_deref().and_then(parse_color) {
            theme.dim = theme.dim.fg(c);
        }
        if let Some(c) = self.border_fg.as_deref().and_then(parse_color) {
            theme.border = theme.border.fg(c);
        }
        if let Some(c) = self.status_bg.as_deref().and_then(parse_color) {
            theme.status = theme.status.bg(c);
        }
        if let Some(c) = self.today_bg.as_deref().and_then(parse_color) {
            theme.today = theme.today.bg(c);
        }
        if let Some(c) = self.selected_bg.as_deref().and_then(parse_color) {
            theme.selected = theme.selected.bg(c);
        }
        if let Some(c) = self.high_fg.as_deref().and_then(parse_color) {
            theme.high = theme.high.fg(c);
        }
        if let Some(c) = self.medium_fg.as_deref().and_then(parse_color) {
            theme.medium = theme.medium.fg(c);
        }
        if let Some(c) = self.low_fg.as_deref().and_then(parse_color) {
            theme.low = theme.low.fg(c);
        }

        theme
    }
}

/// Parse a color string: hex "#rrggbb", or named colors.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.starts_with('#') && s.len() == 7 {
        let r = u8::from_str_radix(&s[1..3], 16).ok()?;
        let g = u8::from_str_radix(&s[3..5], 16).ok()?;
        let b = u8::from_str_radix(&s[5..7], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        _ => None,
    }
}
