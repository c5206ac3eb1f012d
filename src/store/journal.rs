use std::path::PathBuf;

use color_eyre::Result;

use super::json::{load_map, save_map};
use super::ReminderStore;

/// Free-text journal notes, `{"YYYY-MM-DD": "text"}`.
pub struct JournalStore {
    path: PathBuf,
}

impl JournalStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn get(&self, date: &str) -> Option<String> {
        load_map::<String>(&self.path).remove(date)
    }

    /// Save the note and keep the date's reminder list in sync: the list
    /// carries exactly one journal-kind entry per date, always the newest.
    pub fn save(&self, date: &str, note: &str, reminders: &ReminderStore) -> Result<()> {
        let mut data = load_map::<String>(&self.path);
        data.insert(date.to_string(), note.to_string());
        save_map(&self.path, &data)?;
        reminders.replace_journal(date, note)
    }
}
