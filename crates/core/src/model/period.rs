use serde::{Deserialize, Serialize};

//
// ─── PERIOD ───────────────────────────────────────────────────────────────────
//

/// The part of the day the server says the plan is currently in.
///
/// `All` means the plan has no morning/evening split right now, so every
/// reading of the day is offered at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Morning,
    Evening,
    All,
}

impl Period {
    /// Halves of the day whose readings are offered during this period.
    #[must_use]
    pub fn halves(self) -> &'static [HalfDay] {
        match self {
            Period::Morning => &[HalfDay::Morning],
            Period::Evening => &[HalfDay::Evening],
            Period::All => &[HalfDay::Morning, HalfDay::Evening],
        }
    }

    #[must_use]
    pub fn includes(self, half: HalfDay) -> bool {
        self.halves().contains(&half)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Period::Morning => "Manhã",
            Period::Evening => "Noite",
            Period::All => "Todo o dia",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Period::Morning => "☀️",
            Period::Evening => "🌙",
            Period::All => "📖",
        }
    }
}

//
// ─── HALF DAY ─────────────────────────────────────────────────────────────────
//

/// A half of the day that can be marked as read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HalfDay {
    Morning,
    Evening,
}

impl HalfDay {
    pub const BOTH: [HalfDay; 2] = [HalfDay::Morning, HalfDay::Evening];

    /// Wire name used by the readings API.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HalfDay::Morning => "morning",
            HalfDay::Evening => "evening",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            HalfDay::Morning => "Manhã",
            HalfDay::Evening => "Noite",
        }
    }
}
