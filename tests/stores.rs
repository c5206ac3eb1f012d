use std::fs;

use tempfile::TempDir;

use daykeeper::export::export_reminders;
use daykeeper::reminder;
use daykeeper::store::{BirthdayStore, JournalStore, Mood, MoodStore, ReminderStore};

fn reminders_in(dir: &TempDir) -> ReminderStore {
    ReminderStore::new(dir.path().join("reminders.json"))
}

#[test]
fn missing_file_reads_as_empty_store() {
    let dir = TempDir::new().unwrap();
    let store = reminders_in(&dir);

    assert!(store.get("2024-06-15").is_empty());
    assert!(store.dates().is_empty());
}

#[test]
fn add_appends_in_insertion_order() {
    let dir = TempDir::new().unwrap();
    let store = reminders_in(&dir);

    store.add("2024-06-15", "🔴 High | first").unwrap();
    store.add("2024-06-15", "🟢 Low | second").unwrap();
    store.add("2024-06-15", "🟡 Medium | third").unwrap();

    assert_eq!(
        store.get("2024-06-15"),
        vec!["🔴 High | first", "🟢 Low | second", "🟡 Medium | third"]
    );
}

#[test]
fn delete_removes_exactly_one_occurrence() {
    let dir = TempDir::new().unwrap();
    let store = reminders_in(&dir);

    store.add("2024-06-15", "🟡 Medium | water plants").unwrap();
    store.add("2024-06-15", "🟡 Medium | water plants").unwrap();
    store.add("2024-06-15", "🟢 Low | stretch").unwrap();

    store.delete("2024-06-15", "🟡 Medium | water plants").unwrap();

    assert_eq!(
        store.get("2024-06-15"),
        vec!["🟡 Medium | water plants", "🟢 Low | stretch"]
    );
}

#[test]
fn deleting_unknown_entry_is_a_noop() {
    let dir = TempDir::new().unwrap();
    let store = reminders_in(&dir);

    store.add("2024-06-15", "🟢 Low | stretch").unwrap();
    store.delete("2024-06-15", "no such entry").unwrap();
    store.delete("2024-01-01", "🟢 Low | stretch").unwrap();

    assert_eq!(store.get("2024-06-15"), vec!["🟢 Low | stretch"]);
}

#[test]
fn deleting_the_last_entry_drops_the_date_key() {
    let dir = TempDir::new().unwrap();
    let store = reminders_in(&dir);

    store.add("2024-06-15", "🟢 Low | stretch").unwrap();
    store.delete("2024-06-15", "🟢 Low | stretch").unwrap();

    assert!(store.dates().is_empty());

    // The key is gone from the file too, not just the view.
    let raw = fs::read_to_string(dir.path().join("reminders.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value.as_object().unwrap().is_empty());
}

#[test]
fn clear_drops_only_that_date() {
    let dir = TempDir::new().unwrap();
    let store = reminders_in(&dir);

    store.add("2024-06-15", "🟢 Low | a").unwrap();
    store.add("2024-06-15", "🟢 Low | b").unwrap();
    store.add("2024-06-16", "🟢 Low | c").unwrap();

    store.clear("2024-06-15").unwrap();

    assert_eq!(store.dates(), vec!["2024-06-16"]);
}

#[test]
fn month_count_spans_only_that_month() {
    let dir = TempDir::new().unwrap();
    let store = reminders_in(&dir);

    store.add("2024-06-15", "🟢 Low | a").unwrap();
    store.add("2024-06-20", "🟢 Low | b").unwrap();
    store.add("2024-07-01", "🟢 Low | c").unwrap();

    assert_eq!(store.month_count("2024-06"), 2);
    assert_eq!(store.month_count("2024-07"), 1);
    assert_eq!(store.month_count("2023-06"), 0);
}

#[test]
fn search_is_case_insensitive_across_dates() {
    let dir = TempDir::new().unwrap();
    let store = reminders_in(&dir);

    store.add("2024-06-15", "09:00 | 🔴 High | Call MOM").unwrap();
    store.add("2024-07-02", "🟡 Medium | call the bank").unwrap();
    store.add("2024-07-03", "🟢 Low | stretch").unwrap();

    assert_eq!(store.search_count("call"), 2);
    assert_eq!(store.search_count("MOM"), 1);
    assert_eq!(store.search_count("gym"), 0);
}

#[test]
fn corrupt_store_file_reads_as_empty_and_recovers_on_write() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reminders.json");
    fs::write(&path, "{ not json").unwrap();

    let store = ReminderStore::new(path);
    assert!(store.get("2024-06-15").is_empty());

    store.add("2024-06-15", "🟢 Low | fresh start").unwrap();
    assert_eq!(store.get("2024-06-15"), vec!["🟢 Low | fresh start"]);
}

#[test]
fn journal_resave_keeps_a_single_journal_entry() {
    let dir = TempDir::new().unwrap();
    let reminders = reminders_in(&dir);
    let journal = JournalStore::new(dir.path().join("journal.json"));

    reminders.add("2024-06-15", "09:00 | 🔴 High | Gym").unwrap();

    journal.save("2024-06-15", "first draft", &reminders).unwrap();
    journal.save("2024-06-15", "the real entry", &reminders).unwrap();

    assert_eq!(journal.get("2024-06-15").as_deref(), Some("the real entry"));

    let entries = reminders.get("2024-06-15");
    let journal_entries: Vec<&String> = entries
        .iter()
        .filter(|raw| reminder::is_journal(raw))
        .collect();
    assert_eq!(journal_entries.len(), 1);
    assert_eq!(journal_entries[0].as_str(), "📓 Journal: the real entry");

    // The ordinary reminder on that date is untouched.
    assert_eq!(entries[0], "09:00 | 🔴 High | Gym");
}

#[test]
fn journal_mirror_is_truncated_for_display() {
    let dir = TempDir::new().unwrap();
    let reminders = reminders_in(&dir);
    let journal = JournalStore::new(dir.path().join("journal.json"));

    let long = "y".repeat(90);
    journal.save("2024-06-15", &long, &reminders).unwrap();

    let entries = reminders.get("2024-06-15");
    assert_eq!(entries.len(), 1);
    assert!(entries[0].ends_with("..."));
    // The journal file itself keeps the full text.
    assert_eq!(journal.get("2024-06-15").as_deref(), Some(long.as_str()));
}

#[test]
fn mood_save_overwrites_the_day() {
    let dir = TempDir::new().unwrap();
    let store = MoodStore::new(dir.path().join("moods.json"));

    store.save("2024-06-15", &Mood::new("😄", "Happy")).unwrap();
    store.save("2024-06-15", &Mood::new("😴", "Tired")).unwrap();

    assert_eq!(store.get("2024-06-15"), Some(Mood::new("😴", "Tired")));
    assert_eq!(store.get("2024-06-16"), None);
}

#[test]
fn birthday_name_is_the_sole_key() {
    let dir = TempDir::new().unwrap();
    let store = BirthdayStore::new(dir.path().join("birthdays.json"));

    store.save("Ana", "1990-06-15").unwrap();
    store.save("Ana", "1991-01-02").unwrap();
    store.save("Bea", "1985-03-04").unwrap();

    let data = store.load();
    assert_eq!(data.len(), 2);
    assert_eq!(data.get("Ana").map(String::as_str), Some("1991-01-02"));

    store.delete("Ana").unwrap();
    assert!(!store.load().contains_key("Ana"));
    assert!(store.load().contains_key("Bea"));
}

#[test]
fn export_writes_sorted_rows_with_quoting() {
    let dir = TempDir::new().unwrap();
    let store = reminders_in(&dir);

    store.add("2024-07-01", "🟢 Low | later").unwrap();
    store.add("2024-06-15", "🟡 Medium | hello, world").unwrap();

    let out = dir.path().join("reminders_export.csv");
    let rows = export_reminders(&store.load(), &out).unwrap();
    assert_eq!(rows, 2);

    let text = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Date,Reminder");
    assert_eq!(lines[1], "2024-06-15,\"🟡 Medium | hello, world\"");
    assert_eq!(lines[2], "2024-07-01,🟢 Low | later");
}
