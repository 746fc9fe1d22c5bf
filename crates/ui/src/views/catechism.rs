use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::{Navigator, use_navigator};
use services::PlanApi;

use crate::context::AppContext;
use crate::session::SessionStore;
use crate::views::ViewState;
use crate::vm::{CatechismPanelVm, CatechismVm, Flow};

async fn load_current(
    api: Arc<dyn PlanApi>,
    session: SessionStore,
    navigator: Navigator,
    mut vm: Signal<CatechismVm>,
) {
    let Some(token) = session.token() else {
        return;
    };
    vm.write().begin_fetch();
    let result = api.catechism_current(&token).await;
    let flow = match vm.try_write() {
        Ok(mut vm) => vm.finish_fetch(result),
        Err(_) => return,
    };
    if flow == Flow::SignedOut {
        session.expire(navigator);
    }
}

/// The question of the week, composed into the dashboard when enabled.
#[component]
pub fn CatechismPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<SessionStore>();
    let navigator = use_navigator();
    let mut vm = use_signal(CatechismVm::new);
    let today = ctx.clock().today();

    {
        let api = ctx.plan_api();
        let session = session.clone();
        use_future(move || load_current(api.clone(), session.clone(), navigator, vm));
    }

    let on_toggle = use_callback(move |()| vm.write().toggle_answer());

    let on_mark = {
        let api = ctx.plan_api();
        use_callback(move |()| {
            let Some(token) = session.token() else {
                return;
            };
            if !vm.write().begin_mark(today) {
                return;
            }
            let api = Arc::clone(&api);
            let session = session.clone();
            spawn(async move {
                let result = api.mark_catechism(&token).await;
                let flow = match vm.try_write() {
                    Ok(mut vm) => vm.finish_mark(result),
                    Err(_) => return,
                };
                match flow {
                    Flow::Refetch => load_current(api, session, navigator, vm).await,
                    Flow::SignedOut => session.expire(navigator),
                    Flow::Stay => {}
                }
            });
        })
    };

    let state = vm.read().view(today);

    rsx! {
        section { class: "catechism-panel",
            h2 { "Catecismo" }
            CatechismBody { state, on_toggle, on_mark }
        }
    }
}

#[component]
fn CatechismBody(
    state: ViewState<CatechismPanelVm>,
    on_toggle: EventHandler<()>,
    on_mark: EventHandler<()>,
) -> Element {
    match state {
        ViewState::Idle | ViewState::Loading => rsx! {
            div { class: "loading", "Carregando catecismo..." }
        },
        ViewState::Error(err) => rsx! {
            div { class: "{err.css_class()}", "{err.message()}" }
        },
        ViewState::Ready(panel) => rsx! {
            p { class: "catechism-position", "{panel.position}" }
            p { class: "catechism-question", "{panel.question}" }

            button {
                class: "btn btn-link",
                r#type: "button",
                onclick: move |_| on_toggle.call(()),
                "{panel.toggle_label()}"
            }
            if let Some(answer) = panel.answer.clone() {
                p { class: "catechism-answer", "{answer}" }
            }

            if let Some(err) = panel.error {
                div { class: "{err.css_class()}", "{err.message()}" }
            }

            if let Some(range) = panel.week_range.clone() {
                p { class: "week-range", "{range}" }
            }
            ul { class: "week-progress",
                for (idx, marker) in panel.week.iter().enumerate() {
                    li {
                        key: "{idx}",
                        class: if marker.is_today { "week-day today" } else { "week-day" },
                        span { class: "week-day-label", "{marker.label}" }
                        span {
                            class: if marker.completed { "check" } else { "cross" },
                            if marker.completed { "✓" } else { "✗" }
                        }
                    }
                }
            }

            p { class: "catechism-today", "{panel.today_status()}" }
            button {
                class: if panel.today_completed { "btn btn-success" } else { "btn btn-primary" },
                r#type: "button",
                disabled: !panel.can_mark,
                onclick: move |_| on_mark.call(()),
                "{panel.button_label()}"
            }

            if let Some(next) = panel.next_question.clone() {
                p { class: "catechism-next", "{next}" }
            }
        },
    }
}
