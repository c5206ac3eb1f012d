use std::collections::BTreeMap;
use std::path::PathBuf;

use color_eyre::Result;

use super::json::{load_map, save_map};
use crate::reminder;

/// Date-keyed reminder lists, `{"YYYY-MM-DD": ["entry", ...]}`.
///
/// Entries within a day keep insertion order. Duplicate identical strings are
/// allowed; deleting removes one occurrence at a time. A date whose list
/// empties out is dropped from the file entirely.
pub struct ReminderStore {
    path: PathBuf,
}

impl ReminderStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> BTreeMap<String, Vec<String>> {
        load_map(&self.path)
    }

    pub fn get(&self, date: &str) -> Vec<String> {
        self.load().remove(date).unwrap_or_default()
    }

    pub fn add(&self, date: &str, entry: &str) -> Result<()> {
        let mut data = self.load();
        data.entry(date.to_string())
            .or_default()
            .push(entry.to_string());
        save_map(&self.path, &data)
    }

    /// Remove the first exact-match occurrence of `entry` under `date`.
    /// Unknown dates and unmatched entries are a no-op.
    pub fn delete(&self, date: &str, entry: &str) -> Result<()> {
        let mut data = self.load();
        let Some(list) = data.get_mut(date) else {
            return Ok(());
        };
        let Some(pos) = list.iter().position(|r| r == entry) else {
            return Ok(());
        };
        list.remove(pos);
        if list.is_empty() {
            data.remove(date);
        }
        save_map(&self.path, &data)
    }

    /// Drop every reminder for a date.
    pub fn clear(&self, date: &str) -> Result<()> {
        let mut data = self.load();
        if data.remove(date).is_none() {
            return Ok(());
        }
        save_map(&self.path, &data)
    }

    /// Dates that currently hold at least one entry, ascending.
    pub fn dates(&self) -> Vec<String> {
        self.load().into_keys().collect()
    }

    /// How many entries fall in a `"YYYY-MM"` month.
    pub fn month_count(&self, year_month: &str) -> usize {
        self.load()
            .iter()
            .filter(|(date, _)| date.starts_with(year_month))
            .map(|(_, entries)| entries.len())
            .sum()
    }

    /// Case-insensitive substring match count across every entry.
    pub fn search_count(&self, query: &str) -> usize {
        let needle = query.to_lowercase();
        self.load()
            .values()
            .flatten()
            .filter(|entry| entry.to_lowercase().contains(&needle))
            .count()
    }

    /// Replace the date's journal mirror entry: any prior journal-kind
    /// entries go away, the new one is appended.
    pub fn replace_journal(&self, date: &str, note: &str) -> Result<()> {
        let mut data = self.load();
        let list = data.entry(date.to_string()).or_default();
        list.retain(|entry| !reminder::is_journal(entry));
        list.push(reminder::journal_entry(note));
        save_map(&self.path, &data)
    }
}
