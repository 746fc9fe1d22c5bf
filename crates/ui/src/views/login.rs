use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::guard::GuardDecision;
use crate::routes::Route;
use crate::session::SessionStore;
use crate::vm::{LoginMode, LoginVm};

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<SessionStore>();
    let navigator = use_navigator();
    let mut vm = use_signal(LoginVm::new);

    {
        let session = session.clone();
        use_effect(move || {
            if session.decision() == GuardDecision::Render {
                let _ = navigator.replace(Route::Dashboard {});
            }
        });
    }

    let submit = {
        let api = ctx.auth_api();
        use_callback(move |()| {
            let Some(credentials) = vm.write().begin_submit() else {
                return;
            };
            let mode = vm.read().mode();
            let api = api.clone();
            let session = session.clone();
            spawn(async move {
                let result = match mode {
                    LoginMode::SignIn => api.login(&credentials).await,
                    LoginMode::Register => api.register(&credentials).await,
                };
                let issued = match vm.try_write() {
                    Ok(mut vm) => vm.finish_submit(result),
                    Err(_) => return,
                };
                if let Some(token) = issued {
                    session.login(token).await;
                    let _ = navigator.replace(Route::Dashboard {});
                }
            });
        })
    };

    let (email, password, mode, submitting, error) = {
        let vm = vm.read();
        (
            vm.email.clone(),
            vm.password.clone(),
            vm.mode(),
            vm.is_submitting(),
            vm.error(),
        )
    };

    rsx! {
        div { class: "login-container",
            div { class: "login-card",
                h1 { "Bíblia AM/PM" }
                p { class: "login-subtitle", "Leituras diárias da manhã e da noite" }

                form {
                    class: "login-form",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        submit.call(());
                    },
                    input {
                        r#type: "email",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |evt| vm.write().email = evt.value(),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Senha",
                        value: "{password}",
                        oninput: move |evt| vm.write().password = evt.value(),
                    }

                    if let Some(err) = error {
                        div { class: "error-message", "{err.message()}" }
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting,
                        if submitting { "Aguarde..." } else { "{mode.submit_label()}" }
                    }
                }

                button {
                    class: "btn btn-link",
                    r#type: "button",
                    onclick: move |_| vm.write().toggle_mode(),
                    "{mode.switch_label()}"
                }
            }
        }
    }
}
