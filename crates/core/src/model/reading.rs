use crate::model::period::{HalfDay, Period};

//
// ─── READING PLAN ─────────────────────────────────────────────────────────────
//

/// One of the four scripture slots a day of the plan can assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadingSlot {
    OldTestament,
    Psalms,
    NewTestament,
    Proverbs,
}

impl ReadingSlot {
    /// Display order: morning slots first, then evening slots.
    pub const ALL: [ReadingSlot; 4] = [
        ReadingSlot::OldTestament,
        ReadingSlot::Psalms,
        ReadingSlot::NewTestament,
        ReadingSlot::Proverbs,
    ];

    /// The half of the day whose completion flag this slot feeds.
    #[must_use]
    pub fn half(self) -> HalfDay {
        match self {
            ReadingSlot::OldTestament | ReadingSlot::Psalms => HalfDay::Morning,
            ReadingSlot::NewTestament | ReadingSlot::Proverbs => HalfDay::Evening,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ReadingSlot::OldTestament => "Antigo Testamento",
            ReadingSlot::Psalms => "Salmos",
            ReadingSlot::NewTestament => "Novo Testamento",
            ReadingSlot::Proverbs => "Provérbios",
        }
    }
}

/// Scripture references assigned for a day. Blank references are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadingPlan {
    old_testament: Option<String>,
    new_testament: Option<String>,
    psalms: Option<String>,
    proverbs: Option<String>,
}

impl ReadingPlan {
    #[must_use]
    pub fn new(
        old_testament: Option<String>,
        new_testament: Option<String>,
        psalms: Option<String>,
        proverbs: Option<String>,
    ) -> Self {
        Self {
            old_testament: non_blank(old_testament),
            new_testament: non_blank(new_testament),
            psalms: non_blank(psalms),
            proverbs: non_blank(proverbs),
        }
    }

    #[must_use]
    pub fn reference(&self, slot: ReadingSlot) -> Option<&str> {
        match slot {
            ReadingSlot::OldTestament => self.old_testament.as_deref(),
            ReadingSlot::Psalms => self.psalms.as_deref(),
            ReadingSlot::NewTestament => self.new_testament.as_deref(),
            ReadingSlot::Proverbs => self.proverbs.as_deref(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
}

//
// ─── DAY PROGRESS ─────────────────────────────────────────────────────────────
//

/// Completion flags for the current day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayProgress {
    pub morning_completed: bool,
    pub evening_completed: bool,
}

impl DayProgress {
    #[must_use]
    pub fn is_completed(&self, half: HalfDay) -> bool {
        match half {
            HalfDay::Morning => self.morning_completed,
            HalfDay::Evening => self.evening_completed,
        }
    }

    #[must_use]
    pub fn is_day_complete(&self) -> bool {
        self.morning_completed && self.evening_completed
    }

    /// Adopt a server-reported progress without ever reverting a completed half.
    #[must_use]
    pub fn merged(self, incoming: DayProgress) -> Self {
        Self {
            morning_completed: self.morning_completed || incoming.morning_completed,
            evening_completed: self.evening_completed || incoming.evening_completed,
        }
    }
}

//
// ─── READING DAY ──────────────────────────────────────────────────────────────
//

/// Today's assignment as reported by the readings API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingDay {
    pub period: Period,
    pub day_of_year: u16,
    pub plan_name: String,
    pub plan: ReadingPlan,
    pub progress: DayProgress,
}

impl ReadingDay {
    /// Slots offered in the current period that have a reference, in display order.
    pub fn visible_slots(&self) -> impl Iterator<Item = (ReadingSlot, &str)> + '_ {
        ReadingSlot::ALL.into_iter().filter_map(move |slot| {
            if !self.period.includes(slot.half()) {
                return None;
            }
            self.plan.reference(slot).map(|reference| (slot, reference))
        })
    }

    /// Merge the returned progress without reverting a completed half.
    pub fn apply_progress(&mut self, incoming: DayProgress) {
        self.progress = self.progress.merged(incoming);
    }
}
