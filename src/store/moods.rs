use std::path::PathBuf;

use color_eyre::Result;
use serde::{Deserialize, Serialize};

use super::json::{load_map, save_map};

/// The fixed mood palette: one glyph and label per mood.
pub const MOODS: [(&str, &str); 7] = [
    ("😄", "Happy"),
    ("😊", "Good"),
    ("😐", "Neutral"),
    ("😔", "Sad"),
    ("😤", "Stressed"),
    ("😴", "Tired"),
    ("🤩", "Excited"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mood {
    pub emoji: String,
    pub label: String,
}

impl Mood {
    pub fn new(emoji: &str, label: &str) -> Self {
        Self {
            emoji: emoji.to_string(),
            label: label.to_string(),
        }
    }
}

/// One mood per date, `{"YYYY-MM-DD": {"emoji": ..., "label": ...}}`.
/// Saving for a date overwrites whatever was there.
pub struct MoodStore {
    path: PathBuf,
}

impl MoodStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn save(&self, date: &str, mood: &Mood) -> Result<()> {
        let mut data = load_map(&self.path);
        data.insert(date.to_string(), mood.clone());
        save_map(&self.path, &data)
    }

    pub fn get(&self, date: &str) -> Option<Mood> {
        load_map::<Mood>(&self.path).remove(date)
    }
}
