use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use log::warn;

/// A birthday projected onto its next occurrence.
///
/// `days_left == 0` means the anniversary is exactly today. `age_turning` is
/// the age as of that upcoming anniversary (not the person's current age):
/// the anniversary year minus the birth year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub birth_date: String,
    pub days_left: i64,
    pub age_turning: i32,
}

/// Project every stored birthday onto its next anniversary and keep the ones
/// at most `horizon_days` away, soonest first.
///
/// Unparseable birth dates are a data-quality issue, not an error: the record
/// is logged and skipped, its siblings are unaffected. The same goes for a
/// Feb 29 birth date in a year without one.
pub fn upcoming_birthdays(
    birthdays: &BTreeMap<String, String>,
    today: NaiveDate,
    horizon_days: i64,
) -> Vec<UpcomingBirthday> {
    let mut upcoming = Vec::new();

    for (name, date_str) in birthdays {
        let Ok(birth) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") else {
            warn!("skipping birthday for {name}: bad date {date_str:?}");
            continue;
        };
        let Some(next) = next_anniversary(birth, today) else {
            warn!("skipping birthday for {name}: {date_str} has no occurrence this cycle");
            continue;
        };

        let days_left = (next - today).num_days();
        if days_left > horizon_days {
            continue;
        }
        upcoming.push(UpcomingBirthday {
            name: name.clone(),
            birth_date: date_str.clone(),
            days_left,
            age_turning: next.year() - birth.year(),
        });
    }

    // Stable: equal day counts keep store iteration order.
    upcoming.sort_by_key(|b| b.days_left);
    upcoming
}

/// The birth date with the year swapped for this year, rolled one year
/// forward when it has already passed. Today counts as not passed.
fn next_anniversary(birth: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = birth.with_year(today.year())?;
    if this_year < today {
        birth.with_year(today.year() + 1)
    } else {
        Some(this_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn store(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn birthday_today_is_zero_days_away() {
        let out = upcoming_birthdays(&store(&[("Ana", "1990-06-15")]), d("2024-06-15"), 30);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].days_left, 0);
        assert_eq!(out[0].age_turning, 34);
    }

    #[test]
    fn birthday_tomorrow_is_one_day_away() {
        let out = upcoming_birthdays(&store(&[("Ana", "1990-06-16")]), d("2024-06-15"), 30);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].days_left, 1);
        assert_eq!(out[0].age_turning, 34);
    }

    #[test]
    fn passed_birthday_rolls_to_next_year() {
        let out = upcoming_birthdays(&store(&[("Ana", "1990-01-01")]), d("2024-06-15"), 365);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].days_left, (d("2025-01-01") - d("2024-06-15")).num_days());
        assert_eq!(out[0].days_left, 200);
        assert_eq!(out[0].age_turning, 35);
    }

    #[test]
    fn horizon_filters_far_birthdays() {
        let out = upcoming_birthdays(&store(&[("Ana", "1990-01-01")]), d("2024-06-15"), 30);
        assert!(out.is_empty());
    }

    #[test]
    fn sorted_soonest_first() {
        let out = upcoming_birthdays(
            &store(&[("Ana", "1990-06-20"), ("Bea", "1985-06-17")]),
            d("2024-06-15"),
            30,
        );
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].name, "Bea");
        assert_eq!(out[1].name, "Ana");
    }

    #[test]
    fn malformed_date_skips_only_that_record() {
        let out = upcoming_birthdays(
            &store(&[("Ana", "not-a-date"), ("Bea", "1985-06-17")]),
            d("2024-06-15"),
            30,
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Bea");
    }

    #[test]
    fn leap_day_skipped_in_common_years() {
        let out = upcoming_birthdays(&store(&[("Ana", "1992-02-29")]), d("2023-06-15"), 365);
        assert!(out.is_empty());

        let out = upcoming_birthdays(&store(&[("Ana", "1992-02-29")]), d("2024-02-01"), 30);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].days_left, 28);
        assert_eq!(out[0].age_turning, 32);
    }
}
