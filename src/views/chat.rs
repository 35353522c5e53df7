use crate::dialog::BlockingPrompter;
use crate::session::Dashboard;
use crate::storage::StorageArea;
use crate::types::{ChatMessage, Role};
use dioxus::events::Key;
use dioxus::prelude::*;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

fn format_message_timestamp(timestamp: Option<OffsetDateTime>) -> Option<String> {
    let mut datetime = timestamp?;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

fn role_class(msg: &ChatMessage) -> &'static str {
    match msg.role {
        Role::User => "user",
        Role::Assistant => "assistant",
    }
}

/// The base view: always rendered beneath any modal panel.
#[component]
pub fn ChatView(dashboard: Signal<Dashboard>) -> Element {
    let mut dashboard = dashboard;
    let mut input = use_signal(String::new);

    let mut send_message = {
        let mut dashboard = dashboard;
        let mut input_signal = input;
        move || {
            let text = input_signal();
            if text.trim().is_empty() {
                return;
            }
            dashboard.with_mut(|dash| dash.send_message(&StorageArea::local(), &text));
            input_signal.set(String::new());
        }
    };

    let transcript = dashboard().chat.transcript;

    rsx! {
        div { class: "main-container",
            div { class: "chat-toolbar",
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| {
                        dashboard.with_mut(|dash| dash.clear_current_chat(&BlockingPrompter));
                    },
                    "Clear chat"
                }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| {
                        dashboard
                            .with_mut(|dash| {
                                dash.clear_history(&StorageArea::local(), &BlockingPrompter)
                            });
                    },
                    "Clear history"
                }
            }
            div { class: "chat-wrap",
                div { id: "chat-messages", class: "chat-list",
                    for msg in transcript.iter() {
                        div { class: format_args!("message-row {}", role_class(msg)),
                            if matches!(msg.role, Role::Assistant) {
                                div { class: "avatar assistant", "A" }
                            }
                            div { class: "message-stack",
                                div { class: format_args!("bubble {}", role_class(msg)),
                                    "{msg.content}"
                                }
                                if let Some(ts) = format_message_timestamp(msg.created_at) {
                                    div { class: format_args!(
                                            "message-meta {}",
                                            match msg.role { Role::User => "align-end", Role::Assistant => "align-start" }
                                        ),
                                        span { class: "message-timestamp", "{ts}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            form { class: "composer",
                div { class: "composer-inner",
                    textarea {
                        rows: "1",
                        placeholder: "What can I help you with?",
                        value: "{input}",
                        oninput: move |ev| input.set(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                ev.prevent_default();
                                send_message();
                            }
                        },
                        autofocus: true,
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: input().trim().is_empty(),
                        onclick: move |_| send_message(),
                        "Send"
                    }
                }
            }
        }
    }
}
