use biblia_core::model::{AuthToken, ProgressRecord, ProgressStats};
use biblia_core::time::format_day;
use services::{ApiError, PlanApi};
use tracing::warn;

use crate::views::{ViewError, ViewState};
use crate::vm::request::{Flow, RequestState};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistoryVm {
    records: Option<Vec<ProgressRecord>>,
    fetch: RequestState,
}

impl HistoryVm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[ProgressRecord] {
        self.records.as_deref().unwrap_or_default()
    }

    /// Recomputed from the records on every call.
    #[must_use]
    pub fn stats(&self) -> ProgressStats {
        ProgressStats::from_records(self.records())
    }

    pub fn begin_fetch(&mut self) {
        self.fetch = RequestState::Pending;
    }

    pub fn finish_fetch(&mut self, result: Result<Vec<ProgressRecord>, ApiError>) -> Flow {
        match result {
            Ok(records) => {
                self.records = Some(records);
                self.fetch = RequestState::Succeeded;
                Flow::Stay
            }
            Err(err) if err.is_unauthorized() => {
                self.fetch = RequestState::Idle;
                Flow::SignedOut
            }
            Err(err) => {
                warn!(error = %err, "loading progress failed");
                self.fetch = RequestState::Failed(ViewError::LoadProgress);
                Flow::Stay
            }
        }
    }

    pub async fn fetch_all(&mut self, api: &dyn PlanApi, token: &AuthToken) -> Flow {
        self.begin_fetch();
        let result = api.progress(token).await;
        self.finish_fetch(result)
    }

    #[must_use]
    pub fn view(&self) -> ViewState<HistoryPageVm> {
        match (&self.records, self.fetch) {
            (Some(records), fetch) => ViewState::Ready(HistoryPageVm::new(records, fetch.error())),
            (None, RequestState::Failed(err)) => ViewState::Error(err),
            (None, RequestState::Idle) => ViewState::Idle,
            (None, _) => ViewState::Loading,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRowVm {
    pub id: i64,
    pub date: String,
    pub morning_completed: bool,
    pub evening_completed: bool,
}

impl HistoryRowVm {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.morning_completed && self.evening_completed
    }

    #[must_use]
    pub fn badge(&self) -> &'static str {
        if self.is_complete() { "Completo" } else { "Pendente" }
    }
}

impl From<&ProgressRecord> for HistoryRowVm {
    fn from(record: &ProgressRecord) -> Self {
        Self {
            id: record.id,
            date: record
                .day()
                .map_or_else(|| record.date.clone(), format_day),
            morning_completed: record.morning_completed,
            evening_completed: record.evening_completed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryPageVm {
    pub stats: ProgressStats,
    pub rows: Vec<HistoryRowVm>,
    pub error: Option<ViewError>,
}

impl HistoryPageVm {
    #[must_use]
    pub fn new(records: &[ProgressRecord], error: Option<ViewError>) -> Self {
        Self {
            stats: ProgressStats::from_records(records),
            rows: records.iter().map(HistoryRowVm::from).collect(),
            error,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vm::test_support::{FakePlanApi, record, token};

    #[tokio::test(flavor = "current_thread")]
    async fn empty_history_has_zero_percent() {
        let api = FakePlanApi::default();
        api.push_progress(Ok(Vec::new()));
        let mut vm = HistoryVm::new();

        vm.fetch_all(&api, &token()).await;

        let ViewState::Ready(page) = vm.view() else {
            panic!("expected ready page");
        };
        assert!(page.is_empty());
        assert_eq!(page.stats.completion_percent, 0);
        assert_eq!(page.stats.total_days, 0);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn rows_keep_server_order_and_format_dates() {
        let api = FakePlanApi::default();
        api.push_progress(Ok(vec![
            record(2, "2024-03-09T00:00:00Z", true, true),
            record(1, "2024-03-08", true, false),
            record(3, "2024-03-10", false, false),
        ]));
        let mut vm = HistoryVm::new();

        vm.fetch_all(&api, &token()).await;

        let ViewState::Ready(page) = vm.view() else {
            panic!("expected ready page");
        };
        let ids: Vec<_> = page.rows.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(page.rows[0].date, "09/03/2024");
        assert_eq!(page.rows[0].badge(), "Completo");
        assert_eq!(page.rows[1].badge(), "Pendente");
        assert_eq!(page.stats.completed_days, 1);
        assert_eq!(page.stats.total_days, 3);
        assert_eq!(page.stats.completion_percent, 33);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn failure_without_data_is_an_error_page() {
        let api = FakePlanApi::default();
        api.push_progress(Err(ApiError::NotFound));
        let mut vm = HistoryVm::new();

        let flow = vm.fetch_all(&api, &token()).await;

        assert_eq!(flow, Flow::Stay);
        assert_eq!(vm.view(), ViewState::Error(ViewError::LoadProgress));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn unauthorized_signs_out() {
        let api = FakePlanApi::default();
        api.push_progress(Err(ApiError::Unauthorized));
        let mut vm = HistoryVm::new();

        assert_eq!(vm.fetch_all(&api, &token()).await, Flow::SignedOut);
    }

    #[test]
    fn half_percent_rounds_up() {
        let mut vm = HistoryVm::new();
        vm.finish_fetch(Ok(vec![
            record(1, "2024-03-08", true, true),
            record(2, "2024-03-09", true, false),
        ]));

        assert_eq!(vm.stats().completion_percent, 50);
        assert_eq!(vm.records().len(), 2);
    }
}
