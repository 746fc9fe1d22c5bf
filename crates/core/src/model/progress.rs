use chrono::NaiveDate;

use crate::time::normalize_day;

/// One historical day of reading progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRecord {
    pub id: i64,
    pub date: String,
    pub morning_completed: bool,
    pub evening_completed: bool,
}

impl ProgressRecord {
    #[must_use]
    pub fn day(&self) -> Option<NaiveDate> {
        normalize_day(&self.date)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.morning_completed && self.evening_completed
    }
}

/// Aggregate statistics over a progress history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressStats {
    pub completed_days: usize,
    pub total_days: usize,
    /// Rounded to the nearest integer, halves rounding up. Always within `0..=100`.
    pub completion_percent: u8,
}

impl ProgressStats {
    #[must_use]
    pub fn from_records(records: &[ProgressRecord]) -> Self {
        let completed_days = records.iter().filter(|record| record.is_complete()).count();
        let total_days = records.len();
        Self {
            completed_days,
            total_days,
            completion_percent: rounded_percent(completed_days, total_days),
        }
    }
}

fn rounded_percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole) as u128;
    let whole = whole as u128;
    let percent = (part * 200 + whole) / (whole * 2);
    u8::try_from(percent).unwrap_or(100)
}
