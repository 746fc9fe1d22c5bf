use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::routes::Route;
use crate::session::SessionStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderPage {
    Dashboard,
    History,
}

#[component]
pub fn AppHeader(page: HeaderPage) -> Element {
    let session = use_context::<SessionStore>();
    let navigator = use_navigator();

    rsx! {
        header { class: "dashboard-header",
            h1 { "Bíblia AM/PM" }
            div { class: "header-actions",
                match page {
                    HeaderPage::Dashboard => rsx! {
                        Link { class: "btn btn-secondary", to: Route::History {}, "Progresso" }
                    },
                    HeaderPage::History => rsx! {
                        Link { class: "btn btn-secondary", to: Route::Dashboard {}, "Dashboard" }
                    },
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| session.sign_out(navigator),
                    "Sair"
                }
            }
        }
    }
}
