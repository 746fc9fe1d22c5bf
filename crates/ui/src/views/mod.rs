mod catechism;
mod chrome;
mod dashboard;
mod history;
mod login;
mod reading;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use catechism::CatechismPanel;
pub use chrome::{AppHeader, HeaderPage};
pub use dashboard::DashboardView;
pub use history::HistoryView;
pub use login::LoginView;
pub use reading::ReadingPanel;
pub use state::{ViewError, ViewState};
