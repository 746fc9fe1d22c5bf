use chrono::{Local, NaiveDate, NaiveDateTime};

/// A simple clock abstraction for deterministic "today" in view-models and tests.
///
/// Times are local wall-clock times: the reading plan and the catechism week
/// are both defined in the user's calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Fixed(NaiveDateTime),
}

impl Clock {
    /// Returns a clock that uses the current system time.
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    /// Returns a clock fixed at the given local time.
    #[must_use]
    pub fn fixed(at: NaiveDateTime) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::System => Local::now().naive_local(),
            Clock::Fixed(at) => *at,
        }
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reduce a server date (bare `YYYY-MM-DD` or an RFC 3339 timestamp) to its calendar day.
///
/// The day is taken as written, in the offset the server used.
#[must_use]
pub fn normalize_day(raw: &str) -> Option<NaiveDate> {
    let head = raw.trim().split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// `dd/mm/yyyy`, the format the app shows dates in.
#[must_use]
pub fn format_day(day: NaiveDate) -> String {
    day.format("%d/%m/%Y").to_string()
}

/// Deterministic local time for tests (Sunday 2024-03-10, 09:30).
///
/// # Panics
///
/// Panics if the fixed date cannot be represented.
#[must_use]
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 10)
        .and_then(|day| day.and_hms_opt(9, 30, 0))
        .expect("fixed test date should be valid")
}

/// Returns a `Clock` fixed at the deterministic test time.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}
