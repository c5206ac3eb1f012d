use std::collections::HashSet;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use color_eyre::Result;
use log::error;

use daykeeper::birthday::upcoming_birthdays;
use daykeeper::countdown;
use daykeeper::export;
use daykeeper::notifier::{self, DueReminder};
use daykeeper::paths;
use daykeeper::quotes;
use daykeeper::store::{BirthdayStore, JournalStore, Mood, MoodStore, ReminderStore, MOODS};

use crate::components::mood_view::{self, MoodPanelState};
use crate::components::birthday_view::BirthdayPanelState;
use crate::components::reminder_form::ReminderFormState;

pub const BIRTHDAY_HORIZON_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewMode {
    Month,
    Day,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    ReminderForm,
    Birthdays,
    Mood,
    Search,
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    pub count: usize,
}

pub struct App {
    pub running: bool,
    pub view_mode: ViewMode,
    pub input_mode: InputMode,
    pub today: NaiveDate,
    pub selected_date: NaiveDate,

    pub day_reminders: Vec<String>,
    pub day_selected: usize,
    pub days_with_reminders: HashSet<u32>,
    pub month_total: usize,

    pub quote: (&'static str, &'static str),
    pub today_mood: Option<Mood>,
    pub next_up: Option<(NaiveDateTime, String)>,

    pub status_message: Option<String>,
    pub alert: Option<String>,
    pub show_help: bool,
    pub show_detail: bool,
    pub pending_clear: bool,

    pub reminder_form: Option<ReminderFormState>,
    pub birthday_panel: Option<BirthdayPanelState>,
    pub mood_panel: Option<MoodPanelState>,
    pub search: SearchState,

    reminders: ReminderStore,
    moods: MoodStore,
    journal: JournalStore,
    birthdays: BirthdayStore,
    due: Receiver<DueReminder>,
    last_tick: Instant,
}

impl App {
    pub fn new() -> Result<Self> {
        let reminders = ReminderStore::new(paths::reminders_file());
        let moods = MoodStore::new(paths::moods_file());
        let journal = JournalStore::new(paths::journal_file());
        let birthdays = BirthdayStore::new(paths::birthdays_file());
        let due = notifier::start(ReminderStore::new(paths::reminders_file()));

        let today = Local::now().date_naive();
        let mut app = Self {
            running: true,
            view_mode: ViewMode::Month,
            input_mode: InputMode::Normal,
            today,
            selected_date: today,
            day_reminders: Vec::new(),
            day_selected: 0,
            days_with_reminders: HashSet::new(),
            month_total: 0,
            quote: quotes::quote_of_the_day(),
            today_mood: None,
            next_up: None,
            status_message: None,
            alert: None,
            show_help: false,
            show_detail: false,
            pending_clear: false,
            reminder_form: None,
            birthday_panel: None,
            mood_panel: None,
            search: SearchState::default(),
            reminders,
            moods,
            journal,
            birthdays,
            due,
            last_tick: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        };

        app.refresh();
        app.tick();
        app.announce_todays_birthdays();
        Ok(app)
    }

    pub fn date_key(&self) -> String {
        self.selected_date.format("%Y-%m-%d").to_string()
    }

    /// Re-derive everything shown for the selected date from disk.
    pub fn refresh(&mut self) {
        self.day_reminders = self.reminders.get(&self.date_key());
        if self.day_selected >= self.day_reminders.len() {
            self.day_selected = self.day_reminders.len().saturating_sub(1);
        }

        let month_prefix = self.selected_date.format("%Y-%m").to_string();
        self.month_total = self.reminders.month_count(&month_prefix);

        self.days_with_reminders.clear();
        for date_str in self.reminders.dates() {
            if let Ok(date) = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d") {
                if date.year() == self.selected_date.year()
                    && date.month() == self.selected_date.month()
                {
                    self.days_with_reminders.insert(date.day());
                }
            }
        }
    }

    /// Once-a-second work: countdown, today's mood, due alerts, day rollover.
    pub fn tick(&mut self) {
        while let Ok(d) = self.due.try_recv() {
            self.alert = Some(format!("🔔 Reminder!\n\n{}", d.entry));
        }

        if self.last_tick.elapsed() < Duration::from_secs(1) {
            return;
        }
        self.last_tick = Instant::now();

        let now = Local::now();
        let today = now.date_naive();
        if today != self.today {
            self.today = today;
            self.refresh();
        }

        self.next_up = countdown::next_reminder(&self.reminders.load(), now.naive_local());
        self.today_mood = self.moods.get(&today.format("%Y-%m-%d").to_string());
    }

    fn announce_todays_birthdays(&mut self) {
        let todays = upcoming_birthdays(&self.birthdays.load(), self.today, 0);
        if todays.is_empty() {
            return;
        }
        let lines: Vec<String> = todays
            .iter()
            .map(|b| format!("Today is {}'s birthday! 🎉 Turning {}.", b.name, b.age_turning))
            .collect();
        self.alert = Some(format!("🎂 Birthday Today!\n\n{}", lines.join("\n")));
    }

    // ── Navigation ──

    pub fn next_day(&mut self) {
        self.selected_date = self.selected_date.succ_opt().unwrap_or(self.selected_date);
        self.on_date_changed();
    }

    pub fn prev_day(&mut self) {
        self.selected_date = self.selected_date.pred_opt().unwrap_or(self.selected_date);
        self.on_date_changed();
    }

    pub fn next_month(&mut self) {
        let (year, month) = (self.selected_date.year(), self.selected_date.month());
        let (new_year, new_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
        self.jump_to_month(new_year, new_month);
    }

    pub fn prev_month(&mut self) {
        let (year, month) = (self.selected_date.year(), self.selected_date.month());
        let (new_year, new_month) = if month == 1 { (year - 1, 12) } else { (year, month - 1) };
        self.jump_to_month(new_year, new_month);
    }

    fn jump_to_month(&mut self, year: i32, month: u32) {
        let day = self.selected_date.day().min(days_in_month(year, month));
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            self.selected_date = date;
        }
        self.on_date_changed();
    }

    pub fn go_to_today(&mut self) {
        self.today = Local::now().date_naive();
        self.selected_date = self.today;
        self.on_date_changed();
    }

    fn on_date_changed(&mut self) {
        self.day_selected = 0;
        self.pending_clear = false;
        self.show_detail = false;
        self.refresh();
    }

    pub fn select_next(&mut self) {
        if self.day_selected + 1 < self.day_reminders.len() {
            self.day_selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.day_selected = self.day_selected.saturating_sub(1);
    }

    pub fn selected_entry(&self) -> Option<&String> {
        self.day_reminders.get(self.day_selected)
    }

    // ── Reminders ──

    pub fn open_reminder_form(&mut self) {
        self.reminder_form = Some(ReminderFormState::new());
        self.input_mode = InputMode::ReminderForm;
    }

    pub fn close_reminder_form(&mut self) {
        self.reminder_form = None;
        self.input_mode = InputMode::Normal;
    }

    pub fn submit_reminder_form(&mut self) {
        let Some(form) = self.reminder_form.as_mut() else {
            return;
        };
        match form.build_entry() {
            Ok(entry) => {
                let date = self.date_key();
                if let Err(err) = self.reminders.add(&date, &entry) {
                    self.report_error("saving reminder", err);
                } else {
                    self.status_message = Some("Reminder added".to_string());
                }
                self.close_reminder_form();
                self.refresh();
            }
            Err(msg) => form.error = Some(msg),
        }
    }

    pub fn delete_selected(&mut self) {
        let Some(entry) = self.selected_entry().cloned() else {
            self.status_message = Some("Nothing to delete".to_string());
            return;
        };
        let date = self.date_key();
        if let Err(err) = self.reminders.delete(&date, &entry) {
            self.report_error("deleting reminder", err);
        } else {
            self.status_message = Some("Reminder deleted".to_string());
        }
        self.refresh();
    }

    /// Clearing a whole day takes two presses.
    pub fn request_clear_day(&mut self) {
        if self.day_reminders.is_empty() {
            return;
        }
        if !self.pending_clear {
            self.pending_clear = true;
            self.status_message = Some(format!(
                "Delete all reminders for {}? Press C again to confirm",
                self.date_key()
            ));
            return;
        }
        self.pending_clear = false;
        let date = self.date_key();
        if let Err(err) = self.reminders.clear(&date) {
            self.report_error("clearing reminders", err);
        } else {
            self.status_message = Some(format!("Cleared reminders for {date}"));
        }
        self.refresh();
    }

    // ── Birthdays ──

    pub fn open_birthdays(&mut self) {
        let data = self.birthdays.load();
        let upcoming = upcoming_birthdays(&data, self.today, BIRTHDAY_HORIZON_DAYS);
        let all: Vec<(String, String)> = data.into_iter().collect();
        self.birthday_panel = Some(BirthdayPanelState::new(upcoming, all));
        self.input_mode = InputMode::Birthdays;
    }

    pub fn close_birthdays(&mut self) {
        self.birthday_panel = None;
        self.input_mode = InputMode::Normal;
    }

    pub fn submit_birthday(&mut self) {
        let Some(panel) = self.birthday_panel.as_mut() else {
            return;
        };
        match panel.validated() {
            Ok((name, date)) => {
                if let Err(err) = self.birthdays.save(&name, &date) {
                    self.report_error("saving birthday", err);
                } else {
                    self.status_message = Some(format!("🎂 {name}'s birthday saved"));
                }
                self.open_birthdays(); // rebuild lists, back to browsing
            }
            Err(msg) => panel.error = Some(msg),
        }
    }

    pub fn delete_selected_birthday(&mut self) {
        let Some(panel) = self.birthday_panel.as_ref() else {
            return;
        };
        let Some(name) = panel.selected_name().map(str::to_string) else {
            return;
        };
        if let Err(err) = self.birthdays.delete(&name) {
            self.report_error("deleting birthday", err);
        } else {
            self.status_message = Some(format!("Deleted {name}'s birthday"));
        }
        self.open_birthdays();
    }

    // ── Mood & journal ──

    pub fn open_mood(&mut self) {
        let date = self.date_key();
        let saved = self
            .moods
            .get(&date)
            .and_then(|m| MOODS.iter().position(|(_, label)| *label == m.label));
        let journal = self.journal.get(&date).unwrap_or_default();
        self.mood_panel = Some(MoodPanelState::new(date, saved, journal));
        self.input_mode = InputMode::Mood;
    }

    pub fn close_mood(&mut self) {
        self.mood_panel = None;
        self.input_mode = InputMode::Normal;
    }

    pub fn save_mood_at_cursor(&mut self) {
        let Some(panel) = self.mood_panel.as_mut() else {
            return;
        };
        let (emoji, label) = MOODS[panel.cursor];
        let date = panel.date.clone();
        panel.saved = Some(panel.cursor);
        panel.message = Some(mood_view::message_for(label).to_string());
        if let Err(err) = self.moods.save(&date, &Mood::new(emoji, label)) {
            self.report_error("saving mood", err);
        }
    }

    pub fn save_journal(&mut self) {
        let Some(panel) = self.mood_panel.as_mut() else {
            return;
        };
        let note = panel.journal.trim().to_string();
        if note.is_empty() {
            panel.notice = Some("⚠️ Please write something first!".to_string());
            return;
        }
        let date = panel.date.clone();
        panel.editing = false;
        match self.journal.save(&date, &note, &self.reminders) {
            Ok(()) => {
                if let Some(panel) = self.mood_panel.as_mut() {
                    panel.notice =
                        Some("✅ Journal saved & added to the day's reminders".to_string());
                }
            }
            Err(err) => self.report_error("saving journal", err),
        }
        self.refresh();
    }

    // ── Search ──

    pub fn start_search(&mut self) {
        self.search = SearchState::default();
        self.input_mode = InputMode::Search;
    }

    pub fn stop_search(&mut self) {
        self.search = SearchState::default();
        self.input_mode = InputMode::Normal;
    }

    pub fn update_search(&mut self) {
        self.search.count = if self.search.query.is_empty() {
            0
        } else {
            self.reminders.search_count(&self.search.query)
        };
    }

    // ── Export ──

    pub fn export_csv(&mut self) {
        let data = self.reminders.load();
        if data.is_empty() {
            self.status_message = Some("No reminders to export".to_string());
            return;
        }
        let path = paths::export_file();
        match export::export_reminders(&data, &path) {
            Ok(rows) => {
                self.status_message =
                    Some(format!("📤 Exported {rows} reminders to {}", path.display()));
            }
            Err(err) => self.report_error("exporting reminders", err),
        }
    }

    fn report_error(&mut self, context: &str, err: color_eyre::Report) {
        error!("{context}: {err:#}");
        self.status_message = Some(format!("Error {context}: {err}"));
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("first of next month")
    .signed_duration_since(NaiveDate::from_ymd_opt(year, month, 1).expect("first of month"))
    .num_days() as u32
}
