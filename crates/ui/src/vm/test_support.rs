use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use biblia_core::model::{
    AuthToken, CatechismQuestion, CatechismState, DayProgress, HalfDay, Period, ProgressRecord,
    ReadingDay, ReadingPlan, WeekProgressEntry,
};
use services::{ApiError, AuthApi, Credentials, PlanApi};
use tokio::sync::Notify;

type Queue<T> = Mutex<VecDeque<Result<T, ApiError>>>;

fn pop<T>(queue: &Queue<T>, what: &str) -> Result<T, ApiError> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Err(ApiError::InvalidPayload(format!("no scripted {what}"))))
}

/// Scripted `PlanApi`: each call pops the next queued result.
#[derive(Default)]
pub struct FakePlanApi {
    today: Queue<ReadingDay>,
    marks: Queue<DayProgress>,
    catechism: Queue<CatechismState>,
    catechism_marks: Queue<()>,
    progress: Queue<Vec<ProgressRecord>>,
    today_gate: Mutex<Option<Arc<Notify>>>,
    calls: Mutex<Vec<String>>,
}

impl FakePlanApi {
    /// Every later `today` call waits until the returned handle is notified.
    pub fn hold_today(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.today_gate.lock().unwrap() = Some(Arc::clone(&gate));
        gate
    }

    pub fn push_today(&self, result: Result<ReadingDay, ApiError>) {
        self.today.lock().unwrap().push_back(result);
    }

    pub fn push_mark(&self, result: Result<DayProgress, ApiError>) {
        self.marks.lock().unwrap().push_back(result);
    }

    pub fn push_catechism(&self, result: Result<CatechismState, ApiError>) {
        self.catechism.lock().unwrap().push_back(result);
    }

    pub fn push_catechism_mark(&self, result: Result<(), ApiError>) {
        self.catechism_marks.lock().unwrap().push_back(result);
    }

    pub fn push_progress(&self, result: Result<Vec<ProgressRecord>, ApiError>) {
        self.progress.lock().unwrap().push_back(result);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

#[async_trait]
impl PlanApi for FakePlanApi {
    async fn today(&self, _token: &AuthToken) -> Result<ReadingDay, ApiError> {
        self.record("today");
        let gate = self.today_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        pop(&self.today, "today")
    }

    async fn mark_reading(
        &self,
        _token: &AuthToken,
        half: HalfDay,
    ) -> Result<DayProgress, ApiError> {
        self.record(format!("mark:{}", half.as_str()));
        pop(&self.marks, "mark")
    }

    async fn catechism_current(&self, _token: &AuthToken) -> Result<CatechismState, ApiError> {
        self.record("catechism");
        pop(&self.catechism, "catechism")
    }

    async fn mark_catechism(&self, _token: &AuthToken) -> Result<(), ApiError> {
        self.record("catechism:mark");
        pop(&self.catechism_marks, "catechism mark")
    }

    async fn progress(&self, _token: &AuthToken) -> Result<Vec<ProgressRecord>, ApiError> {
        self.record("progress");
        pop(&self.progress, "progress")
    }
}

/// Scripted `AuthApi`.
#[derive(Default)]
pub struct FakeAuthApi {
    logins: Queue<AuthToken>,
    registrations: Queue<AuthToken>,
    calls: Mutex<Vec<String>>,
}

impl FakeAuthApi {
    pub fn push_login(&self, result: Result<AuthToken, ApiError>) {
        self.logins.lock().unwrap().push_back(result);
    }

    pub fn push_register(&self, result: Result<AuthToken, ApiError>) {
        self.registrations.lock().unwrap().push_back(result);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthApi for FakeAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("login:{}", credentials.email));
        pop(&self.logins, "login")
    }

    async fn register(&self, credentials: &Credentials) -> Result<AuthToken, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("register:{}", credentials.email));
        pop(&self.registrations, "register")
    }
}

pub fn token() -> AuthToken {
    AuthToken::new("test-token").unwrap()
}

/// Morning period with only an Old Testament reading.
pub fn morning_day() -> ReadingDay {
    ReadingDay {
        period: Period::Morning,
        day_of_year: 70,
        plan_name: "Plano anual".to_string(),
        plan: ReadingPlan::new(Some("Gen 1-3".to_string()), None, None, None),
        progress: DayProgress::default(),
    }
}

pub fn full_day(period: Period) -> ReadingDay {
    ReadingDay {
        period,
        day_of_year: 70,
        plan_name: "Plano anual".to_string(),
        plan: ReadingPlan::new(
            Some("Gen 1-3".to_string()),
            Some("Mt 1".to_string()),
            Some("Sl 1".to_string()),
            Some("Pv 1".to_string()),
        ),
        progress: DayProgress::default(),
    }
}

pub fn catechism(week_progress: Vec<WeekProgressEntry>) -> CatechismState {
    CatechismState {
        question_number: 3,
        total_questions: 107,
        question: CatechismQuestion {
            number: 3,
            text: "O que as Escrituras principalmente ensinam?".to_string(),
            answer: "O que o homem deve crer acerca de Deus.".to_string(),
        },
        week_progress,
        next_question_date: "2024-03-17T00:00:00Z".to_string(),
        week_start: Some("2024-03-10".to_string()),
        week_end: Some("2024-03-16".to_string()),
    }
}

pub fn week_entry(date: &str, completed: bool) -> WeekProgressEntry {
    WeekProgressEntry {
        date: date.to_string(),
        completed,
    }
}

pub fn record(id: i64, date: &str, morning: bool, evening: bool) -> ProgressRecord {
    ProgressRecord {
        id,
        date: date.to_string(),
        morning_completed: morning,
        evening_completed: evening,
    }
}
