use std::sync::Arc;

use biblia_core::model::HalfDay;
use dioxus::prelude::*;
use dioxus_router::{Navigator, use_navigator};
use services::PlanApi;

use crate::context::AppContext;
use crate::session::SessionStore;
use crate::views::ViewState;
use crate::vm::{Flow, ReadingCardVm, ReadingPanelVm, ReadingVm};

async fn load_today(
    api: Arc<dyn PlanApi>,
    session: SessionStore,
    navigator: Navigator,
    mut vm: Signal<ReadingVm>,
) {
    let Some(token) = session.token() else {
        return;
    };
    vm.write().begin_fetch();
    let result = api.today(&token).await;
    let flow = match vm.try_write() {
        Ok(mut vm) => vm.finish_fetch(result),
        Err(_) => return,
    };
    if flow == Flow::SignedOut {
        session.expire(navigator);
    }
}

/// Today's readings with their mark-as-read actions.
#[component]
pub fn ReadingPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<SessionStore>();
    let navigator = use_navigator();
    let mut vm = use_signal(ReadingVm::new);

    {
        let api = ctx.plan_api();
        let session = session.clone();
        use_future(move || load_today(api.clone(), session.clone(), navigator, vm));
    }

    let on_mark = {
        let api = ctx.plan_api();
        use_callback(move |half: HalfDay| {
            let Some(token) = session.token() else {
                return;
            };
            if !vm.write().begin_mark(half) {
                return;
            }
            let api = Arc::clone(&api);
            let session = session.clone();
            spawn(async move {
                let result = api.mark_reading(&token, half).await;
                let flow = match vm.try_write() {
                    Ok(mut vm) => vm.finish_mark(result),
                    Err(_) => return,
                };
                if flow == Flow::SignedOut {
                    session.expire(navigator);
                }
            });
        })
    };

    let state = vm.read().view();

    rsx! {
        section { class: "reading-panel",
            ReadingBody { state, on_mark }
        }
    }
}

#[component]
fn ReadingBody(state: ViewState<ReadingPanelVm>, on_mark: EventHandler<HalfDay>) -> Element {
    match state {
        ViewState::Idle | ViewState::Loading => rsx! {
            div { class: "loading", "Carregando leituras do dia..." }
        },
        ViewState::Error(err) => rsx! {
            div { class: "error", "{err.message()}" }
        },
        ViewState::Ready(panel) => rsx! {
            div { class: "period-banner",
                span { class: "period-icon", "{panel.banner.icon}" }
                h2 { "Leituras de {panel.banner.label}" }
                p { class: "plan-name", "{panel.banner.plan_name}" }
                p { class: "day-info", "Dia {panel.banner.day_of_year} do ano" }
            }

            if let Some(err) = panel.error {
                div { class: "error-message", "{err.message()}" }
            }

            div { class: "readings-grid",
                for card in panel.cards.iter() {
                    ReadingCard { card: card.clone(), on_mark }
                }
            }

            div { class: "day-summary",
                h3 { "Resumo do Dia" }
                for status in panel.summary.iter() {
                    div { class: "summary-item",
                        span { "{status.label()}:" }
                        span {
                            class: if status.completed { "status completed" } else { "status pending" },
                            "{status.status()}"
                        }
                    }
                }
            }
        },
    }
}

#[component]
fn ReadingCard(card: ReadingCardVm, on_mark: EventHandler<HalfDay>) -> Element {
    let half = card.half;
    rsx! {
        div { class: "reading-card",
            h3 { "{card.title}" }
            p { class: "reading-ref", "{card.reference}" }
            button {
                class: "{card.button_class()}",
                r#type: "button",
                disabled: card.disabled,
                onclick: move |_| on_mark.call(half),
                "{card.button_label()}"
            }
        }
    }
}
