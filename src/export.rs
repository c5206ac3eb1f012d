use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

/// Write every reminder as a `Date,Reminder` CSV row, dates ascending.
///
/// Derived output only — the application never reads it back. Returns the
/// number of data rows written.
pub fn export_reminders(data: &BTreeMap<String, Vec<String>>, path: &Path) -> Result<usize> {
    let mut out = String::from("Date,Reminder\n");
    let mut rows = 0;

    for (date, entries) in data {
        for entry in entries {
            out.push_str(&csv_field(date));
            out.push(',');
            out.push_str(&csv_field(entry));
            out.push('\n');
            rows += 1;
        }
    }

    fs::write(path, out).wrap_err_with(|| format!("writing {}", path.display()))?;
    Ok(rows)
}

fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_pass_through() {
        assert_eq!(csv_field("2024-06-15"), "2024-06-15");
        assert_eq!(csv_field("09:00 | 🔴 High | Gym"), "09:00 | 🔴 High | Gym");
    }

    #[test]
    fn commas_and_quotes_get_escaped() {
        assert_eq!(csv_field("a, b"), "\"a, b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
