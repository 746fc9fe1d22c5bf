use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{AppHeader, CatechismPanel, HeaderPage, ReadingPanel};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let catechism_enabled = ctx.catechism_enabled();

    rsx! {
        div { class: "dashboard-container",
            AppHeader { page: HeaderPage::Dashboard }
            main { class: "container",
                ReadingPanel {}
                if catechism_enabled {
                    CatechismPanel {}
                }
            }
        }
    }
}
