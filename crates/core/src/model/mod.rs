mod catechism;
mod period;
mod progress;
mod reading;
mod session;

pub use catechism::{CatechismQuestion, CatechismState, WeekProgressEntry, is_day_completed};
pub use period::{HalfDay, Period};
pub use progress::{ProgressRecord, ProgressStats};
pub use reading::{DayProgress, ReadingDay, ReadingPlan, ReadingSlot};
pub use session::{AuthToken, SessionState, TokenError};
