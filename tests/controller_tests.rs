//! Integration tests for the dashboard controllers.
//!
//! Storage scopes are in-memory and named per test, so tests stay isolated
//! when run in parallel.

use std::cell::RefCell;

use atrium::dialog::Prompter;
use atrium::session::{CHAT_KEY_PREFIX, CONVERSATION_KEY_PREFIX, Dashboard, GREETING};
use atrium::storage::StorageArea;
use atrium::theme::{THEME_KEY, ThemeStore};
use atrium::types::{Modal, Nav, Route, ThemeMode, ToolPanel};

struct DeclineAll;
impl Prompter for DeclineAll {
    fn confirm(&self, _message: &str) -> bool {
        false
    }
    fn alert(&self, _message: &str) {}
}

/// Records prompt traffic and answers confirms with a fixed choice.
#[derive(Default)]
struct Recording {
    accept: bool,
    confirms: RefCell<Vec<String>>,
    alerts: RefCell<Vec<String>>,
}

impl Recording {
    fn accepting() -> Self {
        Recording {
            accept: true,
            ..Recording::default()
        }
    }
}

impl Prompter for Recording {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.accept
    }
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

mod theme_tests {
    use super::*;

    #[test]
    fn stored_marker_matches_applied_mode() {
        let area = StorageArea::in_memory("it-theme-marker");
        let store = ThemeStore::new(area.clone());

        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            store.save(mode);
            assert_eq!(store.load(), mode);
            assert_eq!(area.get(THEME_KEY).as_deref(), Some(mode.as_str()));
        }
    }

    #[test]
    fn toggling_twice_returns_to_the_original() {
        let store = ThemeStore::new(StorageArea::in_memory("it-theme-double"));
        store.save(ThemeMode::Dark);

        store.toggle();
        assert_eq!(store.load(), ThemeMode::Light);
        store.toggle();
        assert_eq!(store.load(), ThemeMode::Dark);
    }
}

mod panel_tests {
    use super::*;

    #[test]
    fn showing_a_tool_hides_the_previous_panel() {
        let mut dash = Dashboard::new(Route::dashboard());

        dash.show_tool("products");
        assert_eq!(dash.modal, Modal::Products);

        dash.show_tool("jobs");
        assert_eq!(dash.modal, Modal::Jobs);

        dash.show_tool("unknown");
        assert_eq!(dash.modal, Modal::None);
    }

    #[test]
    fn settings_off_dashboard_alerts_and_redirects() {
        let mut dash = Dashboard::new(Route::Login);
        let prompter = Recording::accepting();

        let nav = dash.show_settings(&prompter);
        assert_eq!(nav, Nav::Goto(Route::dashboard()));
        assert_eq!(prompter.alerts.borrow().len(), 1);
        assert!(prompter.alerts.borrow()[0].contains("Dashboard"));
    }

    #[test]
    fn tool_parameter_round_trip_opens_the_panel() {
        let local = StorageArea::in_memory("it-tool-roundtrip");
        let mut dash = Dashboard::new(Route::Login);

        // Off the dashboard the request only asks for navigation...
        let nav = dash.show_tool("jobs");
        let Nav::Goto(route) = nav else {
            panic!("expected a navigation request");
        };
        assert_eq!(
            route,
            Route::Dashboard {
                tool: Some(ToolPanel::Jobs),
            }
        );

        // ...and the destination's load wiring opens the panel.
        dash.navigate(route, &local);
        assert_eq!(dash.modal, Modal::Jobs);
    }
}

mod chat_tests {
    use super::*;

    #[test]
    fn new_chat_off_dashboard_navigates_without_touching_state() {
        let mut dash = Dashboard::new(Route::Login);
        let before = dash.chat.clone();

        let nav = dash.start_new_chat();
        assert_eq!(nav, Nav::Goto(Route::dashboard()));
        assert_eq!(dash.chat, before);
    }

    #[test]
    fn new_chat_on_dashboard_resets_to_the_greeting() {
        let local = StorageArea::in_memory("it-new-chat");
        let mut dash = Dashboard::new(Route::dashboard());
        dash.send_message(&local, "hello there");
        dash.show_tool("jobs");

        assert_eq!(dash.start_new_chat(), Nav::Stay);
        assert_eq!(dash.chat.conversation_id, None);
        assert_eq!(dash.chat.transcript.len(), 1);
        assert_eq!(dash.chat.transcript[0].content, GREETING);
        assert_eq!(dash.modal, Modal::None);
    }

    #[test]
    fn declined_clear_changes_nothing() {
        let local = StorageArea::in_memory("it-declined-clear");
        let mut dash = Dashboard::new(Route::dashboard());
        dash.send_message(&local, "do not lose this");
        let before = dash.chat.clone();

        dash.clear_current_chat(&DeclineAll);
        assert_eq!(dash.chat, before);
    }

    #[test]
    fn declined_clear_history_keeps_storage() {
        let local = StorageArea::in_memory("it-declined-history");
        let mut dash = Dashboard::new(Route::dashboard());
        dash.send_message(&local, "still here");

        dash.clear_history(&local, &DeclineAll);
        assert_eq!(dash.history.len(), 1);
        assert_eq!(local.keys().len(), 1);
    }
}

mod history_tests {
    use super::*;

    #[test]
    fn clear_history_removes_exactly_the_prefixed_keys() {
        let local = StorageArea::in_memory("it-clear-history");
        local.set("chat_1", "[]").expect("set failed");
        local.set("conversation_2", "[]").expect("set failed");
        local.set("other_3", "keep").expect("set failed");

        let mut dash = Dashboard::new(Route::dashboard());
        dash.refresh_history(&local);
        let prompter = Recording::accepting();
        dash.clear_history(&local, &prompter);

        assert_eq!(local.keys(), vec!["other_3".to_string()]);
        assert!(dash.history.is_empty());
        assert_eq!(dash.chat.transcript.len(), 1);
        assert_eq!(dash.chat.transcript[0].content, GREETING);
        assert_eq!(dash.chat.conversation_id, None);

        // Completion notification after the confirm.
        assert_eq!(prompter.confirms.borrow().len(), 1);
        assert_eq!(prompter.alerts.borrow().as_slice(), ["All history cleared!"]);
    }

    #[test]
    fn history_round_trips_through_storage() {
        let local = StorageArea::in_memory("it-history-roundtrip");
        let mut dash = Dashboard::new(Route::dashboard());
        dash.send_message(&local, "plan a product launch");
        dash.send_message(&local, "with a checklist");
        let id = dash.chat.conversation_id.clone().expect("id assigned");

        let mut revisit = Dashboard::new(Route::dashboard());
        revisit.refresh_history(&local);
        assert_eq!(revisit.history.len(), 1);
        assert_eq!(revisit.history[0].id, id);

        revisit.open_conversation(&local, &id);
        assert_eq!(revisit.chat.transcript, dash.chat.transcript);
    }

    #[test]
    fn key_prefixes_match_the_storage_contract() {
        assert_eq!(CHAT_KEY_PREFIX, "chat_");
        assert_eq!(CONVERSATION_KEY_PREFIX, "conversation_");
    }
}

mod logout_tests {
    use super::*;

    #[test]
    fn logout_empties_both_areas_and_goes_to_login() {
        let local = StorageArea::in_memory("it-logout-local");
        let session = StorageArea::in_memory("it-logout-session");
        local.set("theme", "dark").expect("set failed");
        local.set("conversation_1", "[]").expect("set failed");
        session.set("session_user", "sam").expect("set failed");

        let mut dash = Dashboard::new(Route::dashboard());
        let nav = dash.logout(&local, &session);

        assert_eq!(nav, Nav::Goto(Route::Login));
        assert!(local.keys().is_empty());
        assert!(session.keys().is_empty());
    }

    #[test]
    fn logout_clears_even_when_already_empty() {
        let local = StorageArea::in_memory("it-logout-empty");
        let session = StorageArea::in_memory("it-logout-empty-s");
        let mut dash = Dashboard::new(Route::dashboard());

        let nav = dash.logout(&local, &session);
        assert_eq!(nav, Nav::Goto(Route::Login));
        assert!(local.keys().is_empty());
        assert!(session.keys().is_empty());
    }
}
