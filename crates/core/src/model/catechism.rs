use chrono::NaiveDate;

use crate::time::normalize_day;

/// A catechism question with its answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatechismQuestion {
    pub number: u32,
    pub text: String,
    pub answer: String,
}

/// One day of the current week's catechism progress.
///
/// `date` keeps the server's raw value; it may be a bare `YYYY-MM-DD` or a full
/// timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekProgressEntry {
    pub date: String,
    pub completed: bool,
}

impl WeekProgressEntry {
    #[must_use]
    pub fn day(&self) -> Option<NaiveDate> {
        normalize_day(&self.date)
    }
}

/// The question of the week and its rotation metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatechismState {
    pub question_number: u32,
    pub total_questions: u32,
    pub question: CatechismQuestion,
    pub week_progress: Vec<WeekProgressEntry>,
    pub next_question_date: String,
    pub week_start: Option<String>,
    pub week_end: Option<String>,
}

impl CatechismState {
    #[must_use]
    pub fn is_completed_on(&self, day: NaiveDate) -> bool {
        is_day_completed(&self.week_progress, day)
    }

    #[must_use]
    pub fn next_question_day(&self) -> Option<NaiveDate> {
        normalize_day(&self.next_question_date)
    }

    /// First and last day of the current rotation week, when the server sends both.
    #[must_use]
    pub fn week_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = normalize_day(self.week_start.as_deref()?)?;
        let end = normalize_day(self.week_end.as_deref()?)?;
        Some((start, end))
    }
}

/// Whether `day` is recorded as completed in `entries`.
///
/// True only when exactly one entry normalizes to `day` and that entry is
/// completed. No match, or an ambiguous match, counts as not completed.
#[must_use]
pub fn is_day_completed(entries: &[WeekProgressEntry], day: NaiveDate) -> bool {
    let mut matching = entries.iter().filter(|entry| entry.day() == Some(day));
    match (matching.next(), matching.next()) {
        (Some(entry), None) => entry.completed,
        _ => false,
    }
}
