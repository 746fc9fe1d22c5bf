use biblia_core::model::{AuthToken, CatechismState};
use biblia_core::time::format_day;
use chrono::NaiveDate;
use services::{ApiError, PlanApi};
use tracing::{info, warn};

use crate::views::{ViewError, ViewState};
use crate::vm::request::{Flow, RequestState};

/// The question of the week.
///
/// Completing today never patches local state: the server may rotate the
/// question, so a successful mark asks for a full re-fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatechismVm {
    state: Option<CatechismState>,
    fetch: RequestState,
    mark: RequestState,
    show_answer: bool,
}

impl CatechismVm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_marking(&self) -> bool {
        self.mark.is_pending()
    }

    #[must_use]
    pub fn is_answer_visible(&self) -> bool {
        self.show_answer
    }

    pub fn toggle_answer(&mut self) {
        self.show_answer = !self.show_answer;
    }

    #[must_use]
    pub fn error(&self) -> Option<ViewError> {
        self.mark.error().or(self.fetch.error())
    }

    #[must_use]
    pub fn is_today_completed(&self, today: NaiveDate) -> bool {
        self.state
            .as_ref()
            .is_some_and(|state| state.is_completed_on(today))
    }

    pub fn begin_fetch(&mut self) {
        self.fetch = RequestState::Pending;
    }

    pub fn finish_fetch(&mut self, result: Result<CatechismState, ApiError>) -> Flow {
        match result {
            Ok(state) => {
                self.state = Some(state);
                self.fetch = RequestState::Succeeded;
                if self.mark.error().is_some() {
                    self.mark = RequestState::Idle;
                }
                Flow::Stay
            }
            Err(ApiError::Unauthorized) => {
                self.fetch = RequestState::Idle;
                Flow::SignedOut
            }
            Err(ApiError::NotFound) => {
                info!("no catechism provisioned on the server");
                self.state = None;
                self.fetch = RequestState::Failed(ViewError::CatechismNotProvisioned);
                Flow::Stay
            }
            Err(err) => {
                warn!(error = %err, "loading catechism failed");
                self.fetch = RequestState::Failed(ViewError::LoadCatechism);
                Flow::Stay
            }
        }
    }

    #[must_use]
    pub fn can_mark(&self, today: NaiveDate) -> bool {
        !self.is_marking() && self.state.is_some() && !self.is_today_completed(today)
    }

    pub fn begin_mark(&mut self, today: NaiveDate) -> bool {
        if !self.can_mark(today) {
            return false;
        }
        self.mark = RequestState::Pending;
        true
    }

    pub fn finish_mark(&mut self, result: Result<(), ApiError>) -> Flow {
        match result {
            Ok(()) => {
                self.mark = RequestState::Succeeded;
                Flow::Refetch
            }
            Err(ApiError::Unauthorized) => {
                self.mark = RequestState::Idle;
                Flow::SignedOut
            }
            Err(err) => {
                warn!(error = %err, "marking catechism failed");
                self.mark = RequestState::Failed(ViewError::MarkCatechism);
                Flow::Stay
            }
        }
    }

    pub async fn fetch_current(&mut self, api: &dyn PlanApi, token: &AuthToken) -> Flow {
        self.begin_fetch();
        let result = api.catechism_current(token).await;
        self.finish_fetch(result)
    }

    pub async fn mark_completed(
        &mut self,
        api: &dyn PlanApi,
        token: &AuthToken,
        today: NaiveDate,
    ) -> Flow {
        if !self.begin_mark(today) {
            return Flow::Stay;
        }
        let result = api.mark_catechism(token).await;
        match self.finish_mark(result) {
            Flow::Refetch => self.fetch_current(api, token).await,
            other => other,
        }
    }

    #[must_use]
    pub fn view(&self, today: NaiveDate) -> ViewState<CatechismPanelVm> {
        match (&self.state, self.fetch) {
            (Some(state), _) => ViewState::Ready(CatechismPanelVm::new(state, self, today)),
            (None, RequestState::Failed(err)) => ViewState::Error(err),
            (None, RequestState::Idle) => ViewState::Idle,
            (None, _) => ViewState::Loading,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekMarkerVm {
    pub label: String,
    pub completed: bool,
    pub is_today: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatechismPanelVm {
    pub position: String,
    pub question: String,
    /// Present only while the answer is revealed.
    pub answer: Option<String>,
    pub week: Vec<WeekMarkerVm>,
    /// "Semana de dd/mm a dd/mm" when the server sends the week bounds.
    pub week_range: Option<String>,
    pub today_completed: bool,
    pub can_mark: bool,
    pub next_question: Option<String>,
    pub error: Option<ViewError>,
}

impl CatechismPanelVm {
    fn new(state: &CatechismState, vm: &CatechismVm, today: NaiveDate) -> Self {
        let week = state
            .week_progress
            .iter()
            .map(|entry| {
                let day = entry.day();
                WeekMarkerVm {
                    label: day.map_or_else(
                        || entry.date.clone(),
                        |day| day.format("%d/%m").to_string(),
                    ),
                    completed: entry.completed,
                    is_today: day == Some(today),
                }
            })
            .collect();

        Self {
            position: format!(
                "Pergunta {} de {}",
                state.question_number, state.total_questions
            ),
            question: state.question.text.clone(),
            answer: vm
                .is_answer_visible()
                .then(|| state.question.answer.clone()),
            week,
            week_range: state.week_range().map(|(start, end)| {
                format!(
                    "Semana de {} a {}",
                    start.format("%d/%m"),
                    end.format("%d/%m")
                )
            }),
            today_completed: vm.is_today_completed(today),
            can_mark: vm.can_mark(today),
            next_question: state
                .next_question_day()
                .map(|day| format!("Próxima pergunta em {}", format_day(day))),
            error: vm.error(),
        }
    }

    #[must_use]
    pub fn toggle_label(&self) -> &'static str {
        if self.answer.is_some() {
            "Ocultar resposta"
        } else {
            "Mostrar resposta"
        }
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.today_completed {
            "✓ Concluído"
        } else {
            "Marcar como concluído"
        }
    }

    #[must_use]
    pub fn today_status(&self) -> &'static str {
        if self.today_completed {
            "Hoje: ✓ Concluído"
        } else {
            "Hoje: Pendente"
        }
    }
}
