//! Flat JSON persistence, one file per store.
//!
//! Every operation is a full read-modify-write of the backing file: the data
//! volume is a single user's, so there is no cache and no index to keep
//! coherent. A missing or unreadable file reads as an empty store; write
//! failures surface to the caller.

mod birthdays;
mod journal;
mod json;
mod moods;
mod reminders;

pub use birthdays::BirthdayStore;
pub use journal::JournalStore;
pub use moods::{Mood, MoodStore, MOODS};
pub use reminders::ReminderStore;
