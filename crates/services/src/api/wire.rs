//! JSON shapes exchanged with the backend and their mapping onto domain types.
//!
//! Decoding is lenient where the backend is: completion flags may be omitted,
//! references may be blank, and Go's nil slices arrive as `null`.

use biblia_core::model::{
    AuthToken, CatechismQuestion, CatechismState, DayProgress, HalfDay, Period, ProgressRecord,
    ReadingDay, ReadingPlan, WeekProgressEntry,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub(crate) struct TodayResponse {
    period: Period,
    day_of_year: u16,
    #[serde(default)]
    plan_name: String,
    readings: Option<ReadingsWire>,
    progress: Option<ProgressWire>,
}

#[derive(Debug, Default, Deserialize)]
struct ReadingsWire {
    old_testament_ref: Option<String>,
    new_testament_ref: Option<String>,
    psalms_ref: Option<String>,
    proverbs_ref: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProgressWire {
    #[serde(default)]
    morning_completed: bool,
    #[serde(default)]
    evening_completed: bool,
}

impl From<ProgressWire> for DayProgress {
    fn from(wire: ProgressWire) -> Self {
        Self {
            morning_completed: wire.morning_completed,
            evening_completed: wire.evening_completed,
        }
    }
}

impl From<TodayResponse> for ReadingDay {
    fn from(wire: TodayResponse) -> Self {
        let readings = wire.readings.unwrap_or_default();
        Self {
            period: wire.period,
            day_of_year: wire.day_of_year,
            plan_name: wire.plan_name,
            plan: ReadingPlan::new(
                readings.old_testament_ref,
                readings.new_testament_ref,
                readings.psalms_ref,
                readings.proverbs_ref,
            ),
            progress: wire.progress.unwrap_or_default().into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct MarkReadingRequest {
    pub period: HalfDay,
}

/// The catechism mark endpoint takes an empty object for "today".
#[derive(Debug, Serialize)]
pub(crate) struct MarkCatechismRequest {}

#[derive(Debug, Deserialize)]
pub(crate) struct CatechismResponse {
    question_number: u32,
    total_questions: u32,
    question: QuestionWire,
    week_progress: Option<Vec<WeekEntryWire>>,
    #[serde(default)]
    next_question_date: String,
    week_start: Option<String>,
    week_end: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QuestionWire {
    question_number: u32,
    question_text: String,
    answer_text: String,
}

#[derive(Debug, Deserialize)]
struct WeekEntryWire {
    date: String,
    #[serde(default)]
    completed: bool,
}

impl From<CatechismResponse> for CatechismState {
    fn from(wire: CatechismResponse) -> Self {
        Self {
            question_number: wire.question_number,
            total_questions: wire.total_questions,
            question: CatechismQuestion {
                number: wire.question.question_number,
                text: wire.question.question_text,
                answer: wire.question.answer_text,
            },
            week_progress: wire
                .week_progress
                .unwrap_or_default()
                .into_iter()
                .map(|entry| WeekProgressEntry {
                    date: entry.date,
                    completed: entry.completed,
                })
                .collect(),
            next_question_date: wire.next_question_date,
            week_start: wire.week_start,
            week_end: wire.week_end,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProgressRecordWire {
    id: i64,
    date: String,
    #[serde(default)]
    morning_completed: bool,
    #[serde(default)]
    evening_completed: bool,
}

impl From<ProgressRecordWire> for ProgressRecord {
    fn from(wire: ProgressRecordWire) -> Self {
        Self {
            id: wire.id,
            date: wire.date,
            morning_completed: wire.morning_completed,
            evening_completed: wire.evening_completed,
        }
    }
}

/// `GET /progress` body. A user without history may get `null`.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub(crate) struct ProgressListResponse(Option<Vec<ProgressRecordWire>>);

impl From<ProgressListResponse> for Vec<ProgressRecord> {
    fn from(wire: ProgressListResponse) -> Self {
        wire.0
            .unwrap_or_default()
            .into_iter()
            .map(ProgressRecord::from)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AuthResponse {
    token: String,
}

impl TryFrom<AuthResponse> for AuthToken {
    type Error = ApiError;

    fn try_from(wire: AuthResponse) -> Result<Self, Self::Error> {
        AuthToken::new(wire.token).map_err(|err| ApiError::InvalidPayload(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_partial_today_payload() {
        let body = r#"{
            "period": "morning",
            "day_of_year": 1,
            "readings": {"old_testament_ref": "Gen 1-3"},
            "progress": {"morning_completed": false}
        }"#;
        let day: ReadingDay = serde_json::from_str::<TodayResponse>(body).unwrap().into();
        assert_eq!(day.period, Period::Morning);
        assert_eq!(day.plan_name, "");
        assert_eq!(
            day.visible_slots().collect::<Vec<_>>(),
            vec![(biblia_core::model::ReadingSlot::OldTestament, "Gen 1-3")]
        );
        assert_eq!(day.progress, DayProgress::default());
    }

    #[test]
    fn decodes_backend_today_payload_with_extra_fields() {
        let body = r#"{
            "period": "all",
            "day_of_year": 70,
            "plan_name": "Bíblia em um ano",
            "readings": {
                "id": 70, "day_of_year": 70,
                "old_testament_ref": "Dt 5-7", "new_testament_ref": "Mc 12",
                "psalms_ref": "", "proverbs_ref": "Pv 10"
            },
            "progress": {
                "id": 0, "user_id": 3, "reading_plan_id": 70,
                "date": "2024-03-10T09:00:00-03:00",
                "morning_completed": true, "evening_completed": false
            }
        }"#;
        let day: ReadingDay = serde_json::from_str::<TodayResponse>(body).unwrap().into();
        assert_eq!(day.day_of_year, 70);
        assert_eq!(day.plan_name, "Bíblia em um ano");
        assert!(day.progress.morning_completed);
        assert_eq!(day.visible_slots().count(), 3);
    }

    #[test]
    fn unknown_period_is_a_decode_error() {
        let body = r#"{"period": "noon", "day_of_year": 1}"#;
        assert!(serde_json::from_str::<TodayResponse>(body).is_err());
    }

    #[test]
    fn catechism_null_week_progress_is_empty() {
        let body = r#"{
            "question_number": 3,
            "total_questions": 107,
            "question": {"id": 3, "question_number": 3, "question_text": "Q?", "answer_text": "A."},
            "week_progress": null,
            "week_start": "2024-03-10",
            "week_end": "2024-03-16",
            "next_question_date": "2024-03-17"
        }"#;
        let state: CatechismState = serde_json::from_str::<CatechismResponse>(body)
            .unwrap()
            .into();
        assert!(state.week_progress.is_empty());
        assert_eq!(state.question.answer, "A.");
        assert_eq!(state.week_end.as_deref(), Some("2024-03-16"));
    }

    #[test]
    fn null_progress_list_is_empty() {
        let records: Vec<ProgressRecord> = serde_json::from_str::<ProgressListResponse>("null")
            .unwrap()
            .into();
        assert!(records.is_empty());
    }

    #[test]
    fn mark_requests_serialize_to_contract() {
        let morning = MarkReadingRequest {
            period: HalfDay::Morning,
        };
        assert_eq!(
            serde_json::to_string(&morning).unwrap(),
            r#"{"period":"morning"}"#
        );
        assert_eq!(
            serde_json::to_string(&MarkCatechismRequest {}).unwrap(),
            "{}"
        );
    }

    #[test]
    fn blank_auth_token_is_invalid_payload() {
        let wire: AuthResponse = serde_json::from_str(r#"{"token": "", "user": {}}"#).unwrap();
        assert!(matches!(
            AuthToken::try_from(wire),
            Err(ApiError::InvalidPayload(_))
        ));
    }
}
