use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::guard::Protected;
use crate::views::{DashboardView, HistoryView, LoginView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login", LoginView)] Login {},
    #[layout(ProtectedLayout)]
        #[route("/", DashboardView)] Dashboard {},
        #[route("/progress", HistoryView)] History {},
}

#[component]
fn ProtectedLayout() -> Element {
    rsx! {
        Protected {
            Outlet::<Route> {}
        }
    }
}
