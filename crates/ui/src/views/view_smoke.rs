use biblia_core::model::Period;
use services::ApiError;

use super::test_harness::{HarnessOptions, ViewHarness};
use crate::vm::test_support::{catechism, full_day, morning_day, record, token, week_entry};

fn dashboard_harness() -> ViewHarness {
    ViewHarness::new(HarnessOptions::default())
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_renders_morning_card_only() {
    let mut harness = dashboard_harness();
    harness.plan.push_today(Ok(morning_day()));

    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Antigo Testamento"), "missing card in {html}");
    assert!(html.contains("Gen 1-3"), "missing reference in {html}");
    assert!(html.contains("Marcar como lido"), "missing action in {html}");
    assert!(html.contains("Dia 70 do ano"), "missing day in {html}");
    assert!(html.contains("Progresso"), "missing history link in {html}");
    assert!(html.contains("Sair"), "missing logout in {html}");
    assert!(!html.contains("Novo Testamento"), "evening card rendered in {html}");
    assert!(!html.contains("Provérbios"), "evening card rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn completed_morning_shows_done_label() {
    let mut harness = dashboard_harness();
    let mut day = full_day(Period::All);
    day.progress.morning_completed = true;
    harness.plan.push_today(Ok(day));

    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("✓ Concluído"), "missing done label in {html}");
    assert!(html.contains("Marcar como lido"), "evening action missing in {html}");
    assert!(html.contains("Pendente"), "missing evening status in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unauthorized_response_signs_out_to_login() {
    let mut harness = dashboard_harness();
    harness.plan.push_today(Err(ApiError::Unauthorized));

    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Senha"), "login form missing in {html}");
    assert!(!html.contains("Leituras de"), "dashboard still shown in {html}");
    assert_eq!(harness.persisted_token().await, None);
}

#[tokio::test(flavor = "current_thread")]
async fn signed_out_launch_lands_on_login() {
    let mut harness = ViewHarness::new(HarnessOptions {
        token: None,
        catechism_enabled: false,
    });

    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Entrar"), "login form missing in {html}");
    assert!(harness.plan.calls().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn catechism_not_provisioned_is_informational() {
    let mut harness = ViewHarness::new(HarnessOptions {
        catechism_enabled: true,
        ..HarnessOptions::default()
    });
    harness.plan.push_today(Ok(morning_day()));
    harness.plan.push_catechism(Err(ApiError::NotFound));

    harness.settle().await;
    let html = harness.render();

    assert!(
        html.contains("O catecismo ainda não foi cadastrado"),
        "missing not-provisioned message in {html}"
    );
    assert!(!html.contains("Erro ao carregar o catecismo"), "generic error in {html}");
    assert!(html.contains("info-message"), "message not informational in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn catechism_panel_shows_question_and_week() {
    let mut harness = ViewHarness::new(HarnessOptions {
        catechism_enabled: true,
        ..HarnessOptions::default()
    });
    harness.plan.push_today(Ok(morning_day()));
    harness.plan.push_catechism(Ok(catechism(vec![
        week_entry("2024-03-10", true),
        week_entry("2024-03-11", false),
    ])));

    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Pergunta 3 de 107"), "missing position in {html}");
    assert!(html.contains("Mostrar resposta"), "missing toggle in {html}");
    assert!(html.contains("Próxima pergunta em 17/03/2024"), "missing next date in {html}");
    assert!(html.contains("Hoje: ✓ Concluído"), "missing today status in {html}");
    assert!(html.contains("Semana de 10/03 a 16/03"), "missing week range in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn disabled_catechism_is_never_fetched() {
    let mut harness = dashboard_harness();
    harness.plan.push_today(Ok(morning_day()));

    harness.settle().await;

    assert_eq!(harness.plan.calls(), vec!["today"]);
    assert!(!harness.render().contains("Catecismo"));
}

#[tokio::test(flavor = "current_thread")]
async fn reading_response_after_leaving_dashboard_is_dropped() {
    let mut harness = dashboard_harness();
    let release = harness.plan.hold_today();
    harness.plan.push_today(Ok(morning_day()));
    harness.plan.push_progress(Ok(vec![record(1, "2024-03-09", true, true)]));

    harness.settle().await;
    assert!(harness.render().contains("Carregando leituras do dia..."));

    harness.navigate("/progress").await;
    release.notify_one();
    harness.pump().await;
    let html = harness.render();

    assert_eq!(harness.route(), "/progress");
    assert!(html.contains("09/03/2024"), "history not shown in {html}");
    assert!(!html.contains("Gen 1-3"), "late readings rendered in {html}");
    assert_eq!(harness.plan.calls(), vec!["today", "progress"]);
    assert_eq!(harness.persisted_token().await, Some(token()));
}

#[tokio::test(flavor = "current_thread")]
async fn reading_response_after_sign_out_is_dropped() {
    let mut harness = ViewHarness::new(HarnessOptions {
        catechism_enabled: true,
        ..HarnessOptions::default()
    });
    let release = harness.plan.hold_today();
    harness.plan.push_today(Ok(morning_day()));
    harness.plan.push_catechism(Err(ApiError::Unauthorized));

    harness.settle().await;
    assert_eq!(harness.route(), "/login");

    release.notify_one();
    harness.pump().await;
    let html = harness.render();

    assert_eq!(harness.route(), "/login");
    assert!(html.contains("Senha"), "login form missing in {html}");
    assert!(!html.contains("Gen 1-3"), "late readings rendered in {html}");
    assert_eq!(harness.persisted_token().await, None);
}

#[tokio::test(flavor = "current_thread")]
async fn returning_to_dashboard_starts_with_answer_hidden() {
    let mut harness = ViewHarness::new(HarnessOptions {
        catechism_enabled: true,
        ..HarnessOptions::default()
    });
    for _ in 0..2 {
        harness.plan.push_today(Ok(morning_day()));
        harness.plan.push_catechism(Ok(catechism(Vec::new())));
    }
    harness.plan.push_progress(Ok(Vec::new()));

    harness.settle().await;
    harness.navigate("/progress").await;
    harness.navigate("/").await;
    let html = harness.render();

    assert_eq!(harness.route(), "/");
    let calls = harness.plan.calls();
    assert_eq!(calls.iter().filter(|call| *call == "catechism").count(), 2);
    assert!(html.contains("Mostrar resposta"), "answer toggle reset missing in {html}");
    assert!(
        !html.contains("O que o homem deve crer acerca de Deus."),
        "answer visible after remount in {html}"
    );
}
