use std::path::PathBuf;

/// Root for the JSON stores and logs. Falls back to the working directory on
/// platforms without a data dir.
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("daykeeper")
}

pub fn reminders_file() -> PathBuf {
    data_dir().join("reminders.json")
}

pub fn moods_file() -> PathBuf {
    data_dir().join("moods.json")
}

pub fn journal_file() -> PathBuf {
    data_dir().join("journal.json")
}

pub fn birthdays_file() -> PathBuf {
    data_dir().join("birthdays.json")
}

pub fn log_dir() -> PathBuf {
    data_dir().join("logs")
}

/// CSV export lands next to wherever the app was launched.
pub fn export_file() -> PathBuf {
    PathBuf::from("reminders_export.csv")
}
