use crate::session::Dashboard;
use crate::storage::StorageArea;
use crate::theme::ThemeStore;
use crate::types::ThemeMode;
use dioxus::prelude::*;

/// Settings modal. The theme buttons and the header toggle both feed the
/// same signal, so they can never disagree.
#[component]
pub fn SettingsPanel(dashboard: Signal<Dashboard>, theme: Signal<ThemeMode>) -> Element {
    let mut dashboard = dashboard;
    let mut theme = theme;
    let mut select_theme = move |mode: ThemeMode| {
        ThemeStore::new(StorageArea::local()).save(mode);
        theme.set(mode);
    };

    rsx! {
        div { class: "modal-overlay",
            div { id: "settings-modal", class: "modal-panel",
                div { class: "modal-header",
                    h2 { "Settings" }
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| dashboard.with_mut(|dash| dash.close_settings()),
                        "Close"
                    }
                }
                div { class: "settings-section",
                    h3 { class: "section-title", "Display" }
                    div { class: "theme-toggle",
                        button {
                            class: format_args!(
                                "theme-option {}",
                                if matches!(theme(), ThemeMode::Light) { "active" } else { "" }
                            ),
                            r#type: "button",
                            onclick: move |_| select_theme(ThemeMode::Light),
                            "Light"
                        }
                        button {
                            class: format_args!(
                                "theme-option {}",
                                if matches!(theme(), ThemeMode::Dark) { "active" } else { "" }
                            ),
                            r#type: "button",
                            onclick: move |_| select_theme(ThemeMode::Dark),
                            "Dark"
                        }
                    }
                }
                div { class: "settings-section",
                    h3 { class: "section-title", "History" }
                    p { class: "text-muted",
                        "Conversations are stored on this device only. Use the chat toolbar to clear them."
                    }
                }
            }
        }
    }
}
