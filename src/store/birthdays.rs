use std::collections::BTreeMap;
use std::path::PathBuf;

use color_eyre::Result;

use super::json::{load_map, save_map};

/// Name-keyed birth dates, `{"Name": "YYYY-MM-DD"}`.
/// The name is the sole identifier — saving an existing name overwrites.
pub struct BirthdayStore {
    path: PathBuf,
}

impl BirthdayStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> BTreeMap<String, String> {
        load_map(&self.path)
    }

    pub fn save(&self, name: &str, date: &str) -> Result<()> {
        let mut data = self.load();
        data.insert(name.to_string(), date.to_string());
        save_map(&self.path, &data)
    }

    pub fn delete(&self, name: &str) -> Result<()> {
        let mut data = self.load();
        if data.remove(name).is_none() {
            return Ok(());
        }
        save_map(&self.path, &data)
    }
}
