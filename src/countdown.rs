use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use log::debug;

use crate::reminder::Entry;

/// Scan every stored reminder for the soonest one strictly after `now`.
///
/// Entries without a recognizable time field don't count; a date key that
/// doesn't parse skips that date and nothing else. The scan walks the whole
/// map on every call — the store is a single user's data, small by
/// construction, and an index would just be state to invalidate.
pub fn next_reminder(
    data: &BTreeMap<String, Vec<String>>,
    now: NaiveDateTime,
) -> Option<(NaiveDateTime, String)> {
    let mut soonest: Option<(NaiveDateTime, &str)> = None;

    for (date_str, entries) in data {
        let Ok(date) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") else {
            debug!("ignoring reminders under bad date key {date_str:?}");
            continue;
        };
        for raw in entries {
            let Some(time) = Entry::parse(raw).time else {
                continue;
            };
            let at = date.and_time(time);
            if at <= now {
                continue;
            }
            // Strict less-than keeps the first of equal instants.
            if soonest.map_or(true, |(best, _)| at < best) {
                soonest = Some((at, raw));
            }
        }
    }

    soonest.map(|(at, raw)| (at, raw.to_string()))
}

/// `"02h 05m 09s"`-style rendering of the gap from `now` to `until`.
pub fn countdown_text(until: NaiveDateTime, now: NaiveDateTime) -> String {
    let total = (until - now).num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours:02}h {minutes:02}m {seconds:02}s")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_time(time.parse().unwrap())
    }

    fn data(pairs: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
            .collect()
    }

    #[test]
    fn picks_soonest_future_entry() {
        let store = data(&[(
            "2024-06-15",
            &["09:00 | 🟡 Medium | Call mom", "08:00 | 🔴 High | Gym"],
        )]);
        let got = next_reminder(&store, at("2024-06-15", "08:30:00"));
        let (when, raw) = got.expect("one upcoming reminder");
        assert_eq!(when, at("2024-06-15", "09:00:00"));
        assert_eq!(raw, "09:00 | 🟡 Medium | Call mom");
    }

    #[test]
    fn none_when_everything_has_passed() {
        let store = data(&[(
            "2024-06-15",
            &["09:00 | 🟡 Medium | Call mom", "08:00 | 🔴 High | Gym"],
        )]);
        assert_eq!(next_reminder(&store, at("2024-06-15", "23:00:00")), None);
    }

    #[test]
    fn untimed_entries_do_not_count() {
        let store = data(&[("2024-06-15", &["🟡 Medium | Call mom", "plain note"])]);
        assert_eq!(next_reminder(&store, at("2024-06-15", "00:00:00")), None);
    }

    #[test]
    fn crosses_to_a_later_date() {
        let store = data(&[
            ("2024-06-15", &["08:00 | 🔴 High | Gym"] as &[&str]),
            ("2024-06-16", &["07:30 | 🟢 Low | run"]),
        ]);
        let (when, _) = next_reminder(&store, at("2024-06-15", "10:00:00")).unwrap();
        assert_eq!(when, at("2024-06-16", "07:30:00"));
    }

    #[test]
    fn bad_date_key_does_not_hide_good_ones() {
        let store = data(&[
            ("garbage", &["08:00 | 🔴 High | Gym"] as &[&str]),
            ("2024-06-16", &["07:30 | 🟢 Low | run"]),
        ]);
        let (when, _) = next_reminder(&store, at("2024-06-15", "10:00:00")).unwrap();
        assert_eq!(when, at("2024-06-16", "07:30:00"));
    }

    #[test]
    fn countdown_renders_zero_padded() {
        let now = at("2024-06-15", "08:30:00");
        let until = at("2024-06-15", "10:35:09");
        assert_eq!(countdown_text(until, now), "02h 05m 09s");
        assert_eq!(countdown_text(now, until), "00h 00m 00s");
    }
}
