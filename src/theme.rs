use crate::storage::StorageArea;
use crate::types::ThemeMode;

/// Storage key for the persisted theme preference.
pub const THEME_KEY: &str = "theme";

pub struct ThemeDefinition {
    pub css: &'static str,
    pub marker: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            marker: "dark",
        },
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            marker: "light",
        },
    }
}

/// Persisted theme preference over a storage area.
///
/// Every mutation goes through here, which keeps the rendered theme and the
/// stored value in agreement: the UI signal is seeded from [`load`] before
/// first paint and updated only with what [`toggle`] or [`save`] returns.
///
/// [`load`]: ThemeStore::load
/// [`toggle`]: ThemeStore::toggle
/// [`save`]: ThemeStore::save
#[derive(Clone, Debug)]
pub struct ThemeStore {
    area: StorageArea,
}

impl ThemeStore {
    pub fn new(area: StorageArea) -> Self {
        ThemeStore { area }
    }

    /// Stored preference, defaulting to light when absent or unrecognized.
    pub fn load(&self) -> ThemeMode {
        self.area
            .get(THEME_KEY)
            .map(|raw| ThemeMode::from_str_lossy(&raw))
            .unwrap_or_default()
    }

    pub fn save(&self, mode: ThemeMode) {
        if let Err(err) = self.area.set(THEME_KEY, mode.as_str()) {
            tracing::warn!(error = %err, "failed to persist theme preference");
        }
    }

    /// Flip the stored preference and return the new mode.
    pub fn toggle(&self) -> ThemeMode {
        let next = self.load().flipped();
        self.save(next);
        next
    }
}

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0d1117;
    --color-bg-secondary: #161b22;
    --color-bg-overlay: rgba(0, 0, 0, 0.72);
    --color-text-primary: #e6edf3;
    --color-text-muted: #8b949e;
    --color-border: #30363d;
    --color-surface-muted: #21262d;
    --color-input-border: #30363d;
    --color-input-bg: #0d1117;
    --color-chat-user-bg: #1f6feb;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #161b22;
    --color-chat-assistant-text: #e6edf3;
    --color-panel-bg: #161b22;
    --color-accent: #58a6ff;
    --color-timestamp: #6e7681;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { background: var(--color-bg-secondary); border-bottom-color: var(--color-border); }
.sidebar { background: var(--color-bg-secondary); border-right-color: var(--color-border); }
.btn:hover,
.btn-ghost:hover { background: var(--color-surface-muted); }
.composer textarea { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.composer textarea:focus { border-color: var(--color-accent); }
.modal-panel { background: var(--color-panel-bg); border-color: var(--color-border); }
"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-secondary: #f6f8fa;
    --color-bg-overlay: rgba(15, 23, 42, 0.45);
    --color-text-primary: #1f2328;
    --color-text-muted: #57606a;
    --color-border: #d0d7de;
    --color-surface-muted: #eaeef2;
    --color-input-border: #d0d7de;
    --color-input-bg: #ffffff;
    --color-chat-user-bg: #0969da;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #f6f8fa;
    --color-chat-assistant-text: #1f2328;
    --color-panel-bg: #ffffff;
    --color-accent: #0969da;
    --color-timestamp: #6e7781;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { background: var(--color-bg-secondary); border-bottom-color: var(--color-border); }
.sidebar { background: var(--color-bg-secondary); border-right-color: var(--color-border); }
.btn { color: var(--color-text-primary); }
.btn:hover,
.btn-ghost:hover { background: var(--color-surface-muted); }
.composer textarea { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.composer textarea:focus { border-color: var(--color-accent); }
.modal-panel { background: var(--color-panel-bg); border-color: var(--color-border); }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_defaults_to_light() {
        let store = ThemeStore::new(StorageArea::in_memory("theme-default"));
        assert_eq!(store.load(), ThemeMode::Light);
    }

    #[test]
    fn unrecognized_stored_value_reads_as_light() {
        let area = StorageArea::in_memory("theme-garbage");
        area.set(THEME_KEY, "mauve").expect("set failed");
        let store = ThemeStore::new(area);
        assert_eq!(store.load(), ThemeMode::Light);
    }

    #[test]
    fn toggle_persists_and_double_toggle_restores() {
        let store = ThemeStore::new(StorageArea::in_memory("theme-toggle"));
        let original = store.load();

        let flipped = store.toggle();
        assert_eq!(flipped, ThemeMode::Dark);
        assert_eq!(store.load(), ThemeMode::Dark);

        let restored = store.toggle();
        assert_eq!(restored, original);
        assert_eq!(store.load(), original);
    }
}
