mod app;
mod components;
mod term;
mod theme;

use std::time::Duration;

use app::{App, InputMode, ViewMode};
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use daykeeper::{logging, paths};

fn main() -> Result<()> {
    color_eyre::install()?;
    let _logger = logging::init(&paths::log_dir())?;

    let mut app = App::new()?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = term::restore();
        original_hook(panic_info);
    }));

    let mut terminal = term::init()?;
    let result = run(&mut terminal, &mut app);
    term::restore()?;
    result
}

fn run(terminal: &mut term::Term, app: &mut App) -> Result<()> {
    while app.running {
        app.tick();

        terminal.draw(|frame| {
            let area = frame.area();
            let w = area.width;

            let layout = Layout::vertical([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

            render_top_bar(frame, layout[0], app);

            match app.view_mode {
                ViewMode::Month => render_month_layout(frame, layout[1], app, w),
                ViewMode::Day => {
                    components::DayView::render(
                        frame,
                        layout[1],
                        app.selected_date,
                        &app.day_reminders,
                        app.day_selected,
                        app.month_total,
                    );
                }
            }

            if let Some(ref form) = app.reminder_form {
                components::ReminderForm::render(frame, area, form, &app.date_key());
            }
            if let Some(ref panel) = app.birthday_panel {
                components::BirthdayView::render(frame, area, panel);
            }
            if let Some(ref panel) = app.mood_panel {
                components::MoodView::render(frame, area, panel);
            }
            if app.show_detail {
                if let Some(raw) = app.selected_entry() {
                    components::day_view::render_detail_popup(
                        frame,
                        area,
                        raw,
                        app.selected_date,
                    );
                }
            }
            if app.show_help {
                render_help(frame, area);
            }
            if let Some(ref alert) = app.alert {
                render_alert(frame, area, alert);
            }

            components::StatusBar::render(frame, layout[2], app);
        })?;

        if let Some(key) = term::next_key(Duration::from_millis(100))? {
            handle_key(app, key.code, key.modifiers);
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    app.status_message = None;

    // Alert popup swallows the next key.
    if app.alert.is_some() {
        app.alert = None;
        return;
    }
    if app.show_help {
        if code == KeyCode::Esc || code == KeyCode::Char('?') {
            app.show_help = false;
        }
        return;
    }
    if app.show_detail {
        if code == KeyCode::Esc || code == KeyCode::Enter {
            app.show_detail = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_input(app, code, modifiers),
        InputMode::ReminderForm => handle_reminder_form_input(app, code),
        InputMode::Birthdays => handle_birthday_input(app, code),
        InputMode::Mood => handle_mood_input(app, code),
        InputMode::Search => handle_search_input(app, code),
    }
}

fn handle_normal_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    // Anything but the confirming press drops a pending clear-all.
    if code != KeyCode::Char('C') {
        app.pending_clear = false;
    }

    match (code, modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.running = false;
        }
        (KeyCode::Char('1'), _) => app.view_mode = ViewMode::Month,
        (KeyCode::Char('2'), _) => app.view_mode = ViewMode::Day,
        (KeyCode::Char('t'), _) => app.go_to_today(),
        (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.prev_day(),
        (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.next_day(),
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.select_next(),
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.select_prev(),
        (KeyCode::Char('['), _) => app.prev_month(),
        (KeyCode::Char(']'), _) => app.next_month(),
        (KeyCode::Char('n'), _) => app.open_reminder_form(),
        (KeyCode::Char('d'), _) => app.delete_selected(),
        (KeyCode::Char('C'), _) => app.request_clear_day(),
        (KeyCode::Enter, _) => app.show_detail = app.selected_entry().is_some(),
        (KeyCode::Char('m'), _) => app.open_mood(),
        (KeyCode::Char('b'), _) => app.open_birthdays(),
        (KeyCode::Char('/'), _) => app.start_search(),
        (KeyCode::Char('e'), _) => app.export_csv(),
        (KeyCode::Char('?'), _) => app.show_help = true,
        _ => {}
    }
}

fn handle_reminder_form_input(app: &mut App, code: KeyCode) {
    use crate::components::reminder_form::FormField;

    match code {
        KeyCode::Esc => app.close_reminder_form(),
        KeyCode::Enter => app.submit_reminder_form(),
        KeyCode::Tab => {
            if let Some(ref mut form) = app.reminder_form {
                form.active_field = form.active_field.next();
            }
        }
        KeyCode::BackTab => {
            if let Some(ref mut form) = app.reminder_form {
                form.active_field = form.active_field.prev();
            }
        }
        KeyCode::Backspace => {
            if let Some(ref mut form) = app.reminder_form {
                form.backspace();
            }
        }
        KeyCode::Char(' ') => {
            if let Some(ref mut form) = app.reminder_form {
                if form.active_field == FormField::Priority {
                    form.cycle_priority();
                } else {
                    form.input_char(' ');
                }
            }
        }
        KeyCode::Char(c) => {
            if let Some(ref mut form) = app.reminder_form {
                form.input_char(c);
            }
        }
        _ => {}
    }
}

fn handle_birthday_input(app: &mut App, code: KeyCode) {
    use crate::components::birthday_view::BirthdayField;

    let adding = app
        .birthday_panel
        .as_ref()
        .is_some_and(|p| p.active_field.is_some());

    if adding {
        match code {
            KeyCode::Esc => {
                if let Some(ref mut panel) = app.birthday_panel {
                    panel.active_field = None;
                    panel.error = None;
                }
            }
            KeyCode::Enter => app.submit_birthday(),
            KeyCode::Tab | KeyCode::BackTab => {
                if let Some(ref mut panel) = app.birthday_panel {
                    panel.active_field = match panel.active_field {
                        Some(BirthdayField::Name) => Some(BirthdayField::Date),
                        _ => Some(BirthdayField::Name),
                    };
                }
            }
            KeyCode::Backspace => {
                if let Some(ref mut panel) = app.birthday_panel {
                    panel.backspace();
                }
            }
            KeyCode::Char(c) => {
                if let Some(ref mut panel) = app.birthday_panel {
                    panel.input_char(c);
                }
            }
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_birthdays(),
        KeyCode::Char('a') => {
            if let Some(ref mut panel) = app.birthday_panel {
                panel.active_field = Some(BirthdayField::Name);
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if let Some(ref mut panel) = app.birthday_panel {
                if panel.selected + 1 < panel.all.len() {
                    panel.selected += 1;
                }
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(ref mut panel) = app.birthday_panel {
                panel.selected = panel.selected.saturating_sub(1);
            }
        }
        KeyCode::Char('d') => app.delete_selected_birthday(),
        _ => {}
    }
}

fn handle_mood_input(app: &mut App, code: KeyCode) {
    let editing = app.mood_panel.as_ref().is_some_and(|p| p.editing);

    if editing {
        match code {
            KeyCode::Esc => {
                if let Some(ref mut panel) = app.mood_panel {
                    panel.editing = false;
                }
            }
            KeyCode::Enter => app.save_journal(),
            KeyCode::Backspace => {
                if let Some(ref mut panel) = app.mood_panel {
                    panel.journal.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(ref mut panel) = app.mood_panel {
                    panel.journal.push(c);
                }
            }
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_mood(),
        KeyCode::Left | KeyCode::Char('h') => {
            if let Some(ref mut panel) = app.mood_panel {
                panel.cursor_left();
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if let Some(ref mut panel) = app.mood_panel {
                panel.cursor_right();
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.save_mood_at_cursor(),
        KeyCode::Char('i') | KeyCode::Char('e') => {
            if let Some(ref mut panel) = app.mood_panel {
                panel.editing = true;
                panel.notice = None;
            }
        }
        _ => {}
    }
}

fn handle_search_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Enter => app.stop_search(),
        KeyCode::Backspace => {
            app.search.query.pop();
            app.update_search();
        }
        KeyCode::Char(c) => {
            app.search.query.push(c);
            app.update_search();
        }
        _ => {}
    }
}

fn render_month_layout(frame: &mut ratatui::Frame, area: Rect, app: &App, total_width: u16) {
    if total_width < 60 {
        components::MonthView::render(
            frame,
            area,
            app.selected_date,
            app.today,
            &app.days_with_reminders,
        );
    } else {
        let month_w = if total_width >= 100 { 44 } else { 30 };
        let content = Layout::horizontal([Constraint::Length(month_w), Constraint::Min(20)])
            .split(area);

        components::MonthView::render(
            frame,
            content[0],
            app.selected_date,
            app.today,
            &app.days_with_reminders,
        );

        components::DayView::render(
            frame,
            content[1],
            app.selected_date,
            &app.day_reminders,
            app.day_selected,
            app.month_total,
        );
    }
}

fn render_top_bar(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let line = if app.input_mode == InputMode::Search {
        let counter = if app.search.query.is_empty() {
            Span::styled("type to search", theme::current().dim)
        } else if app.search.count > 0 {
            Span::styled(
                format!("✅ {} found", app.search.count),
                theme::current().low,
            )
        } else {
            Span::styled("❌ Not found", theme::current().high)
        };
        Line::from(vec![
            Span::styled(" 🔍 Search: ", theme::current().accent),
            Span::styled(
                format!("{}_", app.search.query),
                theme::current().header,
            ),
            Span::raw("  "),
            counter,
        ])
    } else {
        let (quote, author) = app.quote;
        Line::from(Span::styled(
            format!(" 💬 \"{quote}\" — {author}"),
            theme::current().dim.add_modifier(Modifier::ITALIC),
        ))
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_alert(frame: &mut ratatui::Frame, area: Rect, alert: &str) {
    use ratatui::widgets::{Block, Borders, Clear, Wrap};

    let popup_w = area.width.min(50).max(26);
    let popup_h = area.height.min(9).max(6);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::current().medium);

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut lines: Vec<Line> = alert.lines().map(|l| Line::from(l.to_string())).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key",
        theme::current().dim,
    )));

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}

fn render_help(frame: &mut ratatui::Frame, area: Rect) {
    use ratatui::style::Style;
    use ratatui::widgets::{Block, Borders, Clear, Wrap};

    let popup_w = area.width.min(52).max(30);
    let popup_h = area.height.min(22).max(12);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Keybindings ")
        .title_style(theme::current().accent.add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(theme::current().accent);

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = theme::current().accent.add_modifier(Modifier::BOLD);
    let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let lines = vec![
        Line::from(Span::styled("Navigation", section_style)),
        Line::from(vec![
            Span::styled("  h/l ", key_style),
            Span::styled("or ", theme::current().dim),
            Span::styled("\u{2190}/\u{2192}  ", key_style),
            Span::raw("Previous/next day"),
        ]),
        Line::from(vec![
            Span::styled("  j/k ", key_style),
            Span::styled("or ", theme::current().dim),
            Span::styled("\u{2191}/\u{2193}  ", key_style),
            Span::raw("Select reminder"),
        ]),
        Line::from(vec![
            Span::styled("  [/]       ", key_style),
            Span::raw("Previous/next month"),
        ]),
        Line::from(vec![
            Span::styled("  t         ", key_style),
            Span::raw("Jump to today"),
        ]),
        Line::from(vec![
            Span::styled("  1/2       ", key_style),
            Span::raw("Month / Day view"),
        ]),
        Line::from(""),
        Line::from(Span::styled("Reminders", section_style)),
        Line::from(vec![
            Span::styled("  n         ", key_style),
            Span::raw("New reminder"),
        ]),
        Line::from(vec![
            Span::styled("  d         ", key_style),
            Span::raw("Delete selected"),
        ]),
        Line::from(vec![
            Span::styled("  C         ", key_style),
            Span::raw("Clear the whole day"),
        ]),
        Line::from(vec![
            Span::styled("  Enter     ", key_style),
            Span::raw("Entry details"),
        ]),
        Line::from(""),
        Line::from(Span::styled("More", section_style)),
        Line::from(vec![
            Span::styled("  m         ", key_style),
            Span::raw("Mood & journal"),
        ]),
        Line::from(vec![
            Span::styled("  b         ", key_style),
            Span::raw("Birthdays"),
        ]),
        Line::from(vec![
            Span::styled("  /         ", key_style),
            Span::raw("Search reminders"),
        ]),
        Line::from(vec![
            Span::styled("  e         ", key_style),
            Span::raw("Export CSV"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  q", key_style),
            Span::styled(" / ", theme::current().dim),
            Span::styled("Esc     ", key_style),
            Span::raw("Quit / close popup"),
        ]),
    ];

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}
