use crate::dialog::BlockingPrompter;
use crate::session::Dashboard;
use crate::storage::StorageArea;
use crate::types::{Nav, Route};
use dioxus::prelude::*;

/// Key for the signed-in marker in session storage. Real authentication is
/// out of scope; the marker just gives logout something to wipe.
pub const SESSION_USER_KEY: &str = "session_user";

#[component]
pub fn LoginView(dashboard: Signal<Dashboard>) -> Element {
    let mut dashboard = dashboard;
    let mut username = use_signal(String::new);

    let mut sign_in = move || {
        let name = username();
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        if let Err(err) = StorageArea::session().set(SESSION_USER_KEY, name) {
            tracing::warn!(error = %err, "failed to record session user");
        }
        dashboard.with_mut(|dash| dash.navigate(Route::dashboard(), &StorageArea::local()));
    };

    rsx! {
        div { class: "login-container",
            div { class: "login-card",
                h1 { "Atrium" }
                p { class: "text-muted", "Sign in to your dashboard" }
                input {
                    r#type: "text",
                    placeholder: "Username",
                    value: "{username}",
                    oninput: move |ev| username.set(ev.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: username().trim().is_empty(),
                    onclick: move |_| sign_in(),
                    "Sign in"
                }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| {
                        // Settings only exist on the dashboard; this alerts
                        // and redirects there.
                        let nav = dashboard
                            .with_mut(|dash| dash.show_settings(&BlockingPrompter));
                        if let Nav::Goto(route) = nav {
                            dashboard
                                .with_mut(|dash| dash.navigate(route, &StorageArea::local()));
                        }
                    },
                    "Settings"
                }
            }
        }
    }
}
