use crate::dialog::BlockingPrompter;
use crate::session::Dashboard;
use crate::storage::StorageArea;
use crate::theme::{ThemeStore, theme_definition};
use crate::types::{Modal, Nav, Route, ThemeMode};
use crate::views::{ChatView, JobsPanel, LoginView, ProductsPanel, SettingsPanel};
use dioxus::prelude::*;

const ATRIUM_CSS: Asset = asset!("/assets/atrium.css");

/// Apply a controller-issued navigation directive to the dashboard state.
fn apply_nav(mut dashboard: Signal<Dashboard>, nav: Nav) {
    if let Nav::Goto(route) = nav {
        dashboard.with_mut(|dash| dash.navigate(route, &StorageArea::local()));
    }
}

#[component]
pub fn App() -> Element {
    // Theme is read from storage before anything renders, so the first paint
    // already has the persisted variant.
    let theme = use_signal(|| ThemeStore::new(StorageArea::local()).load());
    let dashboard = use_signal(|| Dashboard::new(Route::dashboard()));

    use_effect(move || {
        let mut dashboard = dashboard;
        dashboard.with_mut(|dash| dash.refresh_history(&StorageArea::local()));
    });

    let route = dashboard().route;

    rsx! {
        ThemeStyles { theme }
        div { class: "app-root", "data-theme": theme().as_str(),
            match route {
                Route::Login => rsx!( LoginView { dashboard } ),
                Route::Dashboard { .. } => rsx!( DashboardView { dashboard, theme } ),
            }
        }
    }
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        document::Link { rel: "stylesheet", href: ATRIUM_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn DashboardView(dashboard: Signal<Dashboard>, theme: Signal<ThemeMode>) -> Element {
    rsx! {
        AppHeader { dashboard, theme }
        div { class: "dashboard-body",
            HistorySidebar { dashboard }
            ChatView { dashboard }
        }
        match dashboard().modal {
            Modal::Jobs => rsx!( JobsPanel { dashboard } ),
            Modal::Products => rsx!( ProductsPanel { dashboard } ),
            Modal::Settings => rsx!( SettingsPanel { dashboard, theme } ),
            Modal::None => rsx!(),
        }
    }
}

#[component]
fn AppHeader(dashboard: Signal<Dashboard>, theme: Signal<ThemeMode>) -> Element {
    let mut dashboard = dashboard;
    let mut theme = theme;
    rsx! {
        div { class: "header",
            div { class: "header-content",
                span { class: "header-wordmark", "Atrium" }
                div { class: "header-nav",
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| {
                            let nav = dashboard.with_mut(|dash| dash.show_tool("jobs"));
                            apply_nav(dashboard, nav);
                        },
                        "Jobs"
                    }
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| {
                            let nav = dashboard.with_mut(|dash| dash.show_tool("products"));
                            apply_nav(dashboard, nav);
                        },
                        "Products"
                    }
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| {
                            let nav = dashboard
                                .with_mut(|dash| dash.show_settings(&BlockingPrompter));
                            apply_nav(dashboard, nav);
                        },
                        "Settings"
                    }
                }
                div { class: "header-actions",
                    // Checked means light, as the original toggle had it.
                    label { class: "theme-switch",
                        input {
                            id: "theme-toggle-checkbox",
                            r#type: "checkbox",
                            checked: theme() == ThemeMode::Light,
                            oninput: move |_| {
                                let next = ThemeStore::new(StorageArea::local()).toggle();
                                theme.set(next);
                            },
                        }
                        span { "Light" }
                    }
                    button {
                        id: "logout-btn",
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| {
                            let nav = dashboard
                                .with_mut(|dash| {
                                    dash.logout(&StorageArea::local(), &StorageArea::session())
                                });
                            apply_nav(dashboard, nav);
                        },
                        "Log out"
                    }
                }
            }
        }
    }
}

#[component]
fn HistorySidebar(dashboard: Signal<Dashboard>) -> Element {
    let mut dashboard = dashboard;
    let history = dashboard().history;

    rsx! {
        div { class: "sidebar",
            // Fixed control, kept even when the list below is emptied.
            button {
                class: "btn new-chat",
                r#type: "button",
                onclick: move |_| {
                    let nav = dashboard.with_mut(|dash| dash.start_new_chat());
                    apply_nav(dashboard, nav);
                },
                "+ New chat"
            }
            div { id: "history-nav", class: "history-nav",
                for entry in history.iter() {
                    {
                        let id = entry.id.clone();
                        rsx! {
                            button {
                                key: "{entry.id}",
                                class: "btn btn-ghost history-entry",
                                r#type: "button",
                                onclick: move |_| {
                                    dashboard
                                        .with_mut(|dash| {
                                            dash.open_conversation(&StorageArea::local(), &id)
                                        });
                                },
                                "{entry.title}"
                            }
                        }
                    }
                }
            }
        }
    }
}
