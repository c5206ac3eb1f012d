use chrono::NaiveTime;

/// Prefix marking a reminder entry that mirrors a journal note.
pub const JOURNAL_PREFIX: &str = "📓 Journal: ";

/// Journal text longer than this is truncated for the reminder list.
const JOURNAL_DISPLAY_LIMIT: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "🔴 High",
            Priority::Medium => "🟡 Medium",
            Priority::Low => "🟢 Low",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "🔴 High" => Some(Priority::High),
            "🟡 Medium" => Some(Priority::Medium),
            "🟢 Low" => Some(Priority::Low),
            _ => None,
        }
    }
}

/// A reminder entry decoded from its stored string form.
///
/// Stored entries are up to three `|`-delimited fields: an optional `HH:MM`
/// time, an optional priority label and the note itself. Strings that don't
/// follow that shape are carried whole as the note — decoding never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub time: Option<NaiveTime>,
    pub priority: Option<Priority>,
    pub note: String,
}

impl Entry {
    pub fn parse(raw: &str) -> Self {
        let parts: Vec<&str> = raw.split('|').map(str::trim).collect();
        match parts.as_slice() {
            [time, priority, note] => Self {
                time: parse_time(time),
                priority: Priority::from_label(priority),
                note: (*note).to_string(),
            },
            [priority, note] => Self {
                time: None,
                priority: Priority::from_label(priority),
                note: (*note).to_string(),
            },
            _ => Self {
                time: None,
                priority: None,
                note: raw.trim().to_string(),
            },
        }
    }

    /// Inverse of [`Entry::parse`] for conforming entries: present fields
    /// joined with `" | "`, the time segment omitted when absent.
    pub fn encode(&self) -> String {
        let mut fields = Vec::with_capacity(3);
        let time;
        if let Some(t) = self.time {
            time = t.format("%H:%M").to_string();
            fields.push(time.as_str());
        }
        if let Some(p) = self.priority {
            fields.push(p.label());
        }
        fields.push(self.note.as_str());
        fields.join(" | ")
    }

    pub fn is_journal(&self) -> bool {
        self.note.starts_with(JOURNAL_PREFIX)
    }
}

/// Recognize a segment as a time field: exactly `HH:MM`, colon in the middle.
/// Anything else is not a time, never an error.
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    if s.len() != 5 || s.as_bytes()[2] != b':' {
        return None;
    }
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

/// True when a raw stored entry is the journal mirror for its date.
pub fn is_journal(raw: &str) -> bool {
    raw.starts_with(JOURNAL_PREFIX)
}

/// Build the reminder-list mirror of a journal note, truncated for display.
pub fn journal_entry(note: &str) -> String {
    let short: String = note.chars().take(JOURNAL_DISPLAY_LIMIT).collect();
    if note.chars().count() > JOURNAL_DISPLAY_LIMIT {
        format!("{JOURNAL_PREFIX}{short}...")
    } else {
        format!("{JOURNAL_PREFIX}{short}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn parses_full_entry() {
        let e = Entry::parse("09:00 | 🔴 High | Gym");
        assert_eq!(e.time, Some(t(9, 0)));
        assert_eq!(e.priority, Some(Priority::High));
        assert_eq!(e.note, "Gym");
    }

    #[test]
    fn parses_priority_and_note() {
        let e = Entry::parse("🟢 Low | water the plants");
        assert_eq!(e.time, None);
        assert_eq!(e.priority, Some(Priority::Low));
        assert_eq!(e.note, "water the plants");
    }

    #[test]
    fn bare_note_passes_through() {
        let e = Entry::parse("just a note");
        assert_eq!(e.time, None);
        assert_eq!(e.priority, None);
        assert_eq!(e.note, "just a note");
    }

    #[test]
    fn note_with_pipes_is_kept_whole() {
        let raw = "a | b | c | d";
        let e = Entry::parse(raw);
        assert_eq!(e.time, None);
        assert_eq!(e.note, raw);
    }

    #[test]
    fn malformed_time_is_skipped_not_fatal() {
        let e = Entry::parse("9am | 🟡 Medium | stretch");
        assert_eq!(e.time, None);
        assert_eq!(e.priority, Some(Priority::Medium));
        assert_eq!(e.note, "stretch");

        let e = Entry::parse("25:99 | 🟡 Medium | stretch");
        assert_eq!(e.time, None);
    }

    #[test]
    fn round_trips_conforming_strings() {
        for raw in [
            "09:00 | 🔴 High | Gym",
            "23:59 | 🟢 Low | wind down",
            "🟡 Medium | Call mom",
        ] {
            assert_eq!(Entry::parse(raw).encode(), raw);
        }
    }

    #[test]
    fn encode_omits_missing_time() {
        let e = Entry {
            time: None,
            priority: Some(Priority::Medium),
            note: "Call mom".to_string(),
        };
        assert_eq!(e.encode(), "🟡 Medium | Call mom");
    }

    #[test]
    fn time_segment_shape_is_strict() {
        assert!(parse_time("08:30").is_some());
        assert!(parse_time("8:30").is_none());
        assert!(parse_time("08:30:00").is_none());
        assert!(parse_time("08-30").is_none());
    }

    #[test]
    fn journal_entry_truncates_long_notes() {
        let short = journal_entry("slept well");
        assert_eq!(short, "📓 Journal: slept well");

        let long: String = "x".repeat(80);
        let entry = journal_entry(&long);
        assert!(entry.ends_with("..."));
        assert!(entry.starts_with(JOURNAL_PREFIX));
        assert_eq!(entry.chars().count(), JOURNAL_PREFIX.chars().count() + 63);
        assert!(is_journal(&entry));
    }
}
