use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Read a `{"key": value}` JSON file. Absent file means an empty map, and so
/// does an unreadable or undecodable one — a broken store file must never
/// take the application down, it just reads as no data.
pub(super) fn load_map<V: DeserializeOwned>(path: &Path) -> BTreeMap<String, V> {
    if !path.exists() {
        return BTreeMap::new();
    }
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            warn!("could not read {}: {err}", path.display());
            return BTreeMap::new();
        }
    };
    match serde_json::from_str(&text) {
        Ok(map) => map,
        Err(err) => {
            warn!("could not decode {}: {err}", path.display());
            BTreeMap::new()
        }
    }
}

/// Write the whole map back, human-indented.
pub(super) fn save_map<V: Serialize>(path: &Path, map: &BTreeMap<String, V>) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("creating {}", dir.display()))?;
    }
    let text = serde_json::to_string_pretty(map)?;
    fs::write(path, text).wrap_err_with(|| format!("writing {}", path.display()))?;
    Ok(())
}
