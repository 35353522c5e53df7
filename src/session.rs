//! Dashboard UI state: panel visibility, the active chat session, and the
//! locally persisted conversation history.
//!
//! All behavior with observable semantics lives here on plain state, with
//! storage and prompts passed in at the call site. The view layer holds a
//! `Signal<Dashboard>` and applies returned [`Nav`] directives to switch
//! routes, which is the moral equivalent of the old cross-page redirect.

use crate::dialog::Prompter;
use crate::storage::StorageArea;
use crate::types::{ChatMessage, Modal, Nav, Role, Route, ToolPanel};
use std::time::{SystemTime, UNIX_EPOCH};
use time::OffsetDateTime;

/// The single message a fresh transcript starts with.
pub const GREETING: &str = "Hello! How can I help you today?";

pub const CHAT_KEY_PREFIX: &str = "chat_";
pub const CONVERSATION_KEY_PREFIX: &str = "conversation_";

const CONFIRM_CLEAR_CHAT: &str = "Clear the current chat? This cannot be undone.";
const CONFIRM_CLEAR_HISTORY: &str =
    "Clear ALL chat history? This will delete all your conversations and cannot be undone.";
const HISTORY_CLEARED: &str = "All history cleared!";
const SETTINGS_UNAVAILABLE: &str = "Settings are available on the Dashboard.";

const HISTORY_TITLE_MAX: usize = 48;

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub id: String,
    pub title: String,
}

/// The active conversation: an optional identifier plus the visible
/// transcript. The identifier is transient; it is assigned on first send and
/// dropped again by "new chat" and the clear operations.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatSession {
    pub conversation_id: Option<String>,
    pub transcript: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        ChatSession {
            conversation_id: None,
            transcript: vec![greeting_message()],
        }
    }

    /// Back to a single greeting message and no active conversation.
    pub fn reset(&mut self) {
        self.conversation_id = None;
        self.transcript = vec![greeting_message()];
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        ChatSession::new()
    }
}

fn greeting_message() -> ChatMessage {
    ChatMessage {
        role: Role::Assistant,
        content: GREETING.to_string(),
        created_at: None,
    }
}

fn conversation_key(id: &str) -> String {
    format!("{CONVERSATION_KEY_PREFIX}{id}")
}

fn new_conversation_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    millis.to_string()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dashboard {
    pub route: Route,
    pub modal: Modal,
    pub chat: ChatSession,
    pub history: Vec<HistoryEntry>,
}

impl Dashboard {
    pub fn new(route: Route) -> Self {
        Dashboard {
            route,
            modal: Modal::None,
            chat: ChatSession::new(),
            history: Vec::new(),
        }
    }

    fn on_dashboard(&self) -> bool {
        self.route.is_dashboard()
    }

    /// Switch routes, then run the destination's load wiring: entering the
    /// dashboard re-reads the history list and applies any `tool` value the
    /// route carries, just as a reloaded page re-reads its query string.
    pub fn navigate(&mut self, route: Route, local: &StorageArea) {
        self.route = route;
        self.modal = Modal::None;
        if let Route::Dashboard { tool } = route {
            self.refresh_history(local);
            self.on_load(tool);
        }
    }

    /// Dashboard load wiring for the `tool` route parameter.
    pub fn on_load(&mut self, tool: Option<ToolPanel>) {
        if let Some(tool) = tool {
            let _ = self.show_tool(tool.as_param());
        }
    }

    /// Open the modal for `tool`. Off the dashboard this only requests
    /// navigation; the panel opens when the destination handles its load.
    /// Unknown identifiers (including "chat") leave no modal shown.
    pub fn show_tool(&mut self, tool: &str) -> Nav {
        if !self.on_dashboard() {
            return Nav::Goto(Route::Dashboard {
                tool: ToolPanel::from_param(tool),
            });
        }
        self.modal = match ToolPanel::from_param(tool) {
            Some(ToolPanel::Jobs) => Modal::Jobs,
            Some(ToolPanel::Products) => Modal::Products,
            None => Modal::None,
        };
        Nav::Stay
    }

    /// The settings panel only exists on the dashboard; elsewhere, tell the
    /// user and send them there.
    pub fn show_settings(&mut self, prompter: &dyn Prompter) -> Nav {
        if self.on_dashboard() {
            self.modal = Modal::Settings;
            return Nav::Stay;
        }
        prompter.alert(SETTINGS_UNAVAILABLE);
        Nav::Goto(Route::dashboard())
    }

    pub fn close_settings(&mut self) {
        if self.modal == Modal::Settings {
            self.modal = Modal::None;
        }
    }

    /// Drop the active conversation and show a fresh chat. Off the dashboard
    /// this navigates there without touching any chat state.
    pub fn start_new_chat(&mut self) -> Nav {
        if !self.on_dashboard() {
            return Nav::Goto(Route::dashboard());
        }
        self.chat.reset();
        self.modal = Modal::None;
        Nav::Stay
    }

    /// Reset the visible transcript after confirmation; declining leaves the
    /// transcript and conversation identifier untouched.
    pub fn clear_current_chat(&mut self, prompter: &dyn Prompter) {
        if !prompter.confirm(CONFIRM_CLEAR_CHAT) {
            return;
        }
        self.chat.reset();
        tracing::info!("chat cleared");
    }

    /// Delete every persisted conversation after confirmation. Keys outside
    /// the `chat_`/`conversation_` namespaces are not touched.
    pub fn clear_history(&mut self, local: &StorageArea, prompter: &dyn Prompter) {
        if !prompter.confirm(CONFIRM_CLEAR_HISTORY) {
            return;
        }
        match local.remove_prefixed(&[CHAT_KEY_PREFIX, CONVERSATION_KEY_PREFIX]) {
            Ok(removed) => tracing::info!(removed, "history cleared"),
            Err(err) => tracing::warn!(error = %err, "failed to clear history storage"),
        }
        self.history.clear();
        self.chat.reset();
        prompter.alert(HISTORY_CLEARED);
    }

    /// Wipe both storage areas and go to the login route. No confirmation.
    pub fn logout(&mut self, local: &StorageArea, session: &StorageArea) -> Nav {
        if let Err(err) = local.clear() {
            tracing::warn!(error = %err, "failed to clear local storage on logout");
        }
        if let Err(err) = session.clear() {
            tracing::warn!(error = %err, "failed to clear session storage on logout");
        }
        Nav::Goto(Route::Login)
    }

    /// Append a user message and persist the transcript under the active
    /// conversation key, assigning an identifier on first send.
    pub fn send_message(&mut self, local: &StorageArea, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        self.chat.transcript.push(ChatMessage {
            role: Role::User,
            content: trimmed.to_string(),
            created_at: Some(OffsetDateTime::now_utc()),
        });
        let id = self
            .chat
            .conversation_id
            .get_or_insert_with(new_conversation_id)
            .clone();
        match serde_json::to_string(&self.chat.transcript) {
            Ok(json) => {
                if let Err(err) = local.set(&conversation_key(&id), &json) {
                    tracing::warn!(error = %err, id, "failed to persist conversation");
                }
            }
            Err(err) => tracing::warn!(error = %err, id, "failed to serialize transcript"),
        }
        self.refresh_history(local);
    }

    /// Load a persisted conversation into the chat view. Missing or
    /// unreadable entries are skipped.
    pub fn open_conversation(&mut self, local: &StorageArea, id: &str) {
        let Some(raw) = local.get(&conversation_key(id)) else {
            return;
        };
        match serde_json::from_str::<Vec<ChatMessage>>(&raw) {
            Ok(transcript) => {
                self.chat.conversation_id = Some(id.to_string());
                self.chat.transcript = transcript;
                self.modal = Modal::None;
            }
            Err(err) => tracing::warn!(error = %err, id, "skipping unreadable conversation"),
        }
    }

    /// Rebuild the history list from the `conversation_*` keys, newest first.
    pub fn refresh_history(&mut self, local: &StorageArea) {
        let mut entries: Vec<HistoryEntry> = local
            .keys()
            .into_iter()
            .filter_map(|key| {
                let id = key.strip_prefix(CONVERSATION_KEY_PREFIX)?.to_string();
                let title = local
                    .get(&key)
                    .and_then(|raw| serde_json::from_str::<Vec<ChatMessage>>(&raw).ok())
                    .and_then(|transcript| history_title(&transcript))
                    .unwrap_or_else(|| "New conversation".to_string());
                Some(HistoryEntry { id, title })
            })
            .collect();
        entries.sort_by(|a, b| id_order(&b.id, &a.id));
        self.history = entries;
    }
}

/// Timestamp-derived ids compare by value. Foreign ids (the spec treats the
/// key namespace as opaque) order before all numeric ids, among themselves
/// as plain strings, keeping the comparison a total order.
fn id_order(a: &str, b: &str) -> std::cmp::Ordering {
    match (a.parse::<u128>(), b.parse::<u128>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        (Ok(_), Err(_)) => std::cmp::Ordering::Greater,
        (Err(_), Ok(_)) => std::cmp::Ordering::Less,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// First user message, truncated for the sidebar.
fn history_title(transcript: &[ChatMessage]) -> Option<String> {
    let first = transcript
        .iter()
        .find(|msg| matches!(msg.role, Role::User))?;
    let mut title: String = first.content.chars().take(HISTORY_TITLE_MAX).collect();
    if title.len() < first.content.len() {
        title.push('…');
    }
    Some(title)
}
