use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::{Local, NaiveTime, Timelike};
use log::info;

use crate::reminder::Entry;
use crate::store::ReminderStore;

const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// A reminder whose time field matched the current wall-clock minute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueReminder {
    pub date: String,
    pub entry: String,
}

/// Start the background due-reminder check.
///
/// Once a minute the thread re-reads today's reminders and sends every entry
/// whose decoded time equals the current minute. The thread winds down on its
/// own when the receiving side is dropped.
pub fn start(store: ReminderStore) -> mpsc::Receiver<DueReminder> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        info!("reminder notifier started");
        loop {
            let now = Local::now();
            let date_key = now.format("%Y-%m-%d").to_string();
            let minute = NaiveTime::from_hms_opt(now.hour(), now.minute(), 0)
                .expect("clock reads a valid time");

            for raw in store.get(&date_key) {
                if Entry::parse(&raw).time != Some(minute) {
                    continue;
                }
                let due = DueReminder {
                    date: date_key.clone(),
                    entry: raw,
                };
                if tx.send(due).is_err() {
                    return;
                }
            }

            thread::sleep(POLL_INTERVAL);
        }
    });

    rx
}
