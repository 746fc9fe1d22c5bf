use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::{Navigator, use_navigator};
use services::PlanApi;

use crate::context::AppContext;
use crate::session::SessionStore;
use crate::views::{AppHeader, HeaderPage, ViewState};
use crate::vm::{Flow, HistoryPageVm, HistoryRowVm, HistoryVm};

async fn load_progress(
    api: Arc<dyn PlanApi>,
    session: SessionStore,
    navigator: Navigator,
    mut vm: Signal<HistoryVm>,
) {
    let Some(token) = session.token() else {
        return;
    };
    vm.write().begin_fetch();
    let result = api.progress(&token).await;
    let flow = match vm.try_write() {
        Ok(mut vm) => vm.finish_fetch(result),
        Err(_) => return,
    };
    if flow == Flow::SignedOut {
        session.expire(navigator);
    }
}

#[component]
pub fn HistoryView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<SessionStore>();
    let navigator = use_navigator();
    let vm = use_signal(HistoryVm::new);

    {
        let api = ctx.plan_api();
        use_future(move || load_progress(api.clone(), session.clone(), navigator, vm));
    }

    let state = vm.read().view();

    rsx! {
        div { class: "progress-container",
            AppHeader { page: HeaderPage::History }
            main { class: "container",
                match state {
                    ViewState::Idle | ViewState::Loading => rsx! {
                        div { class: "loading", "Carregando progresso..." }
                    },
                    ViewState::Error(err) => rsx! {
                        div { class: "error", "{err.message()}" }
                    },
                    ViewState::Ready(page) => rsx! {
                        HistoryPage { page }
                    },
                }
            }
        }
    }
}

#[component]
fn HistoryPage(page: HistoryPageVm) -> Element {
    let stats = page.stats;
    rsx! {
        div { class: "progress-header",
            h2 { "Meu Progresso" }
            div { class: "stats",
                div { class: "stat-card",
                    div { class: "stat-value", "{stats.completed_days}" }
                    div { class: "stat-label", "Dias Completos" }
                }
                div { class: "stat-card",
                    div { class: "stat-value", "{stats.total_days}" }
                    div { class: "stat-label", "Total de Dias" }
                }
                div { class: "stat-card",
                    div { class: "stat-value", "{stats.completion_percent}%" }
                    div { class: "stat-label", "Conclusão" }
                }
            }
        }

        if let Some(err) = page.error {
            div { class: "error-message", "{err.message()}" }
        }

        if page.is_empty() {
            div { class: "empty-state",
                p { "Você ainda não tem progresso registrado." }
                p { "Comece lendo as leituras do dia no dashboard!" }
            }
        } else {
            div { class: "progress-list",
                h3 { "Histórico de Leitura" }
                div { class: "progress-table",
                    div { class: "table-header",
                        div { "Data" }
                        div { "Manhã" }
                        div { "Noite" }
                        div { "Status" }
                    }
                    for row in page.rows.iter() {
                        HistoryRow { key: "{row.id}", row: row.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn HistoryRow(row: HistoryRowVm) -> Element {
    rsx! {
        div { class: if row.is_complete() { "table-row completed" } else { "table-row" },
            div { "{row.date}" }
            div { HalfMark { done: row.morning_completed } }
            div { HalfMark { done: row.evening_completed } }
            div {
                span {
                    class: if row.is_complete() { "status-badge completed" } else { "status-badge pending" },
                    "{row.badge()}"
                }
            }
        }
    }
}

#[component]
fn HalfMark(done: bool) -> Element {
    if done {
        rsx! { span { class: "check", "✓" } }
    } else {
        rsx! { span { class: "cross", "✗" } }
    }
}
