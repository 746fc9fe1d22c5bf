use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;
use crate::session::SessionStore;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Bíblia AM/PM" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Algo deu errado" }
                        pre { "{errors:?}" }
                    }
                },
                AppRoutes {}
            }
        }
    }
}

/// Session store, its one-time restore, and the router.
#[component]
pub fn AppRoutes() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context_provider(|| SessionStore::new(ctx.sessions()));

    use_future(move || {
        let session = session.clone();
        async move { session.restore().await }
    });

    rsx! { Router::<Route> {} }
}
