use biblia_core::model::AuthToken;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;
use crate::session::SessionStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Loading,
    Redirect,
    Render,
}

#[must_use]
pub fn guard_decision(token: Option<&AuthToken>, loading: bool) -> GuardDecision {
    if loading {
        return GuardDecision::Loading;
    }
    match token {
        Some(_) => GuardDecision::Render,
        None => GuardDecision::Redirect,
    }
}

/// Renders `children` only for a signed-in session.
#[component]
pub fn Protected(children: Element) -> Element {
    let session = use_context::<SessionStore>();
    let nav = use_navigator();

    let store = session.clone();
    use_effect(move || {
        if store.decision() == GuardDecision::Redirect {
            let _ = nav.replace(Route::Login {});
        }
    });

    match session.decision() {
        GuardDecision::Loading => rsx! {
            div { class: "loading", "Carregando..." }
        },
        GuardDecision::Redirect => rsx! {},
        GuardDecision::Render => children,
    }
}
