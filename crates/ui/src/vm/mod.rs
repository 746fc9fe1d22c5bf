mod catechism_vm;
mod history_vm;
mod login_vm;
mod reading_vm;
mod request;

#[cfg(test)]
pub(crate) mod test_support;

pub use catechism_vm::{CatechismPanelVm, CatechismVm, WeekMarkerVm};
pub use history_vm::{HistoryPageVm, HistoryRowVm, HistoryVm};
pub use login_vm::{LoginMode, LoginVm};
pub use reading_vm::{HalfStatusVm, PeriodBannerVm, ReadingCardVm, ReadingPanelVm, ReadingVm};
pub use request::{Flow, RequestState};
