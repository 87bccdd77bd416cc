//! Quick-capture History Entry

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One rough note kept in the local "noteHistory" list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Long-form date, e.g. "October 18, 2026"
    pub date: String,
    pub content: String,
    /// Capture time in milliseconds
    pub timestamp: i64,
}

/// en-US long date: month name, day without padding, four-digit year
pub fn format_long_date(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%B"), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_long_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_long_date(date), "March 7, 2026");
    }
}
