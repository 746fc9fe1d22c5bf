use biblia_core::model::{AuthToken, DayProgress, HalfDay, ReadingDay, ReadingSlot};
use services::{ApiError, PlanApi};
use tracing::warn;

use crate::views::{ViewError, ViewState};
use crate::vm::request::{Flow, RequestState};

/// Today's readings and the mark-as-read mutation.
///
/// Work is split into `begin_*`/`finish_*` so a view can release its signal
/// between the two halves while the request is in flight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReadingVm {
    day: Option<ReadingDay>,
    fetch: RequestState,
    mark: RequestState,
}

impl ReadingVm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn day(&self) -> Option<&ReadingDay> {
        self.day.as_ref()
    }

    #[must_use]
    pub fn is_marking(&self) -> bool {
        self.mark.is_pending()
    }

    /// The most recent failure, mark errors first.
    #[must_use]
    pub fn error(&self) -> Option<ViewError> {
        self.mark.error().or(self.fetch.error())
    }

    pub fn begin_fetch(&mut self) {
        self.fetch = RequestState::Pending;
    }

    pub fn finish_fetch(&mut self, result: Result<ReadingDay, ApiError>) -> Flow {
        match result {
            Ok(day) => {
                self.day = Some(day);
                self.fetch = RequestState::Succeeded;
                if self.mark.error().is_some() {
                    self.mark = RequestState::Idle;
                }
                Flow::Stay
            }
            Err(err) if err.is_unauthorized() => {
                self.fetch = RequestState::Idle;
                Flow::SignedOut
            }
            Err(err) => {
                warn!(error = %err, "loading today's readings failed");
                self.fetch = RequestState::Failed(ViewError::LoadReadings);
                Flow::Stay
            }
        }
    }

    /// A half can be marked once it is loaded, still pending and no mark is in flight.
    #[must_use]
    pub fn can_mark(&self, half: HalfDay) -> bool {
        !self.is_marking()
            && self
                .day
                .as_ref()
                .is_some_and(|day| !day.progress.is_completed(half))
    }

    /// Returns `false` when the mark must not be sent.
    pub fn begin_mark(&mut self, half: HalfDay) -> bool {
        if !self.can_mark(half) {
            return false;
        }
        self.mark = RequestState::Pending;
        true
    }

    pub fn finish_mark(&mut self, result: Result<DayProgress, ApiError>) -> Flow {
        match result {
            Ok(progress) => {
                if let Some(day) = self.day.as_mut() {
                    day.apply_progress(progress);
                }
                self.mark = RequestState::Succeeded;
                Flow::Stay
            }
            Err(err) if err.is_unauthorized() => {
                self.mark = RequestState::Idle;
                Flow::SignedOut
            }
            Err(err) => {
                warn!(error = %err, "marking reading failed");
                self.mark = RequestState::Failed(ViewError::MarkReading);
                Flow::Stay
            }
        }
    }

    pub async fn fetch_today(&mut self, api: &dyn PlanApi, token: &AuthToken) -> Flow {
        self.begin_fetch();
        let result = api.today(token).await;
        self.finish_fetch(result)
    }

    pub async fn mark_completed(
        &mut self,
        api: &dyn PlanApi,
        token: &AuthToken,
        half: HalfDay,
    ) -> Flow {
        if !self.begin_mark(half) {
            return Flow::Stay;
        }
        let result = api.mark_reading(token, half).await;
        self.finish_mark(result)
    }

    /// Loaded data always wins over a fetch error; the error only takes the
    /// page when nothing was ever loaded.
    #[must_use]
    pub fn view(&self) -> ViewState<ReadingPanelVm> {
        match (&self.day, self.fetch) {
            (Some(day), _) => ViewState::Ready(ReadingPanelVm::new(
                day,
                self.is_marking(),
                self.error(),
            )),
            (None, RequestState::Failed(err)) => ViewState::Error(err),
            (None, RequestState::Idle) => ViewState::Idle,
            (None, _) => ViewState::Loading,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeriodBannerVm {
    pub icon: &'static str,
    pub label: &'static str,
    pub plan_name: String,
    pub day_of_year: u16,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadingCardVm {
    pub slot: ReadingSlot,
    pub title: &'static str,
    pub reference: String,
    pub half: HalfDay,
    pub completed: bool,
    pub disabled: bool,
}

impl ReadingCardVm {
    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.completed {
            "✓ Concluído"
        } else {
            "Marcar como lido"
        }
    }

    #[must_use]
    pub fn button_class(&self) -> &'static str {
        if self.completed {
            "btn btn-success"
        } else {
            "btn btn-primary"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HalfStatusVm {
    pub half: HalfDay,
    pub completed: bool,
}

impl HalfStatusVm {
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.half.label()
    }

    #[must_use]
    pub fn status(&self) -> &'static str {
        if self.completed {
            "✓ Concluído"
        } else {
            "Pendente"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadingPanelVm {
    pub banner: PeriodBannerVm,
    pub cards: Vec<ReadingCardVm>,
    pub summary: Vec<HalfStatusVm>,
    pub error: Option<ViewError>,
}

impl ReadingPanelVm {
    #[must_use]
    pub fn new(day: &ReadingDay, marking: bool, error: Option<ViewError>) -> Self {
        let cards = day
            .visible_slots()
            .map(|(slot, reference)| {
                let half = slot.half();
                let completed = day.progress.is_completed(half);
                ReadingCardVm {
                    slot,
                    title: slot.title(),
                    reference: reference.to_string(),
                    half,
                    completed,
                    disabled: marking || completed,
                }
            })
            .collect();

        let summary = HalfDay::BOTH
            .into_iter()
            .map(|half| HalfStatusVm {
                half,
                completed: day.progress.is_completed(half),
            })
            .collect();

        Self {
            banner: PeriodBannerVm {
                icon: day.period.icon(),
                label: day.period.label(),
                plan_name: day.plan_name.clone(),
                day_of_year: day.day_of_year,
            },
            cards,
            summary,
            error,
        }
    }
}
