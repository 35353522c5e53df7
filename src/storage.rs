//! Scoped key-value storage for preferences and chat history.
//!
//! Mirrors the browser split between persistent and per-session storage: the
//! local area is file-per-key under the platform data directory on native
//! builds, while the session area lives in a process-local map and dies with
//! the application. On wasm both areas are process-local.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

const LOCAL_SCOPE: &str = "local";
const SESSION_SCOPE: &str = "session";

/// Backing map for in-memory scopes, keyed by scope name.
static MEMORY: Lazy<Mutex<HashMap<String, HashMap<String, String>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage scope '{scope}' i/o failure: {source}")]
    Io {
        scope: String,
        #[source]
        source: std::io::Error,
    },
    #[error("storage scope '{0}' lock poisoned")]
    Poisoned(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Backend {
    #[cfg(not(target_arch = "wasm32"))]
    Disk,
    Memory,
}

/// Handle to one named storage scope. Handles are cheap to clone and carry
/// no state of their own; all state lives on disk or in [`MEMORY`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageArea {
    scope: String,
    backend: Backend,
}

impl StorageArea {
    /// The persistent area ("local storage"): survives restarts on native.
    pub fn local() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            StorageArea {
                scope: LOCAL_SCOPE.to_string(),
                backend: Backend::Disk,
            }
        }
        #[cfg(target_arch = "wasm32")]
        {
            StorageArea {
                scope: LOCAL_SCOPE.to_string(),
                backend: Backend::Memory,
            }
        }
    }

    /// The per-session area: always in-memory, gone when the process exits.
    pub fn session() -> Self {
        StorageArea {
            scope: SESSION_SCOPE.to_string(),
            backend: Backend::Memory,
        }
    }

    /// An isolated in-memory scope, for tests.
    pub fn in_memory(scope: &str) -> Self {
        StorageArea {
            scope: scope.to_string(),
            backend: Backend::Memory,
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match self.backend {
            #[cfg(not(target_arch = "wasm32"))]
            Backend::Disk => fs::read_to_string(self.entry_path(key)).ok(),
            Backend::Memory => {
                let store = MEMORY.lock().ok()?;
                store.get(&self.scope)?.get(key).cloned()
            }
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self.backend {
            #[cfg(not(target_arch = "wasm32"))]
            Backend::Disk => {
                let dir = self.scope_dir();
                fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
                    scope: self.scope.clone(),
                    source,
                })?;
                fs::write(self.entry_path(key), value).map_err(|source| StorageError::Io {
                    scope: self.scope.clone(),
                    source,
                })
            }
            Backend::Memory => {
                let mut store = self.lock_memory()?;
                store
                    .entry(self.scope.clone())
                    .or_default()
                    .insert(key.to_string(), value.to_string());
                Ok(())
            }
        }
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        match self.backend {
            #[cfg(not(target_arch = "wasm32"))]
            Backend::Disk => {
                let path = self.entry_path(key);
                if path.exists() {
                    fs::remove_file(path).map_err(|source| StorageError::Io {
                        scope: self.scope.clone(),
                        source,
                    })?;
                }
                Ok(())
            }
            Backend::Memory => {
                let mut store = self.lock_memory()?;
                if let Some(entries) = store.get_mut(&self.scope) {
                    entries.remove(key);
                }
                Ok(())
            }
        }
    }

    pub fn keys(&self) -> Vec<String> {
        match self.backend {
            #[cfg(not(target_arch = "wasm32"))]
            Backend::Disk => {
                let dir = self.scope_dir();
                if !dir.exists() {
                    return Vec::new();
                }
                fs::read_dir(dir)
                    .ok()
                    .map(|entries| {
                        entries
                            .flatten()
                            .filter_map(|entry| {
                                let path = entry.path();
                                if path.extension().and_then(|e| e.to_str()) == Some("json") {
                                    path.file_stem()
                                        .and_then(|s| s.to_str())
                                        .map(|s| s.to_string())
                                } else {
                                    None
                                }
                            })
                            .collect()
                    })
                    .unwrap_or_default()
            }
            Backend::Memory => MEMORY
                .lock()
                .ok()
                .and_then(|store| store.get(&self.scope).map(|s| s.keys().cloned().collect()))
                .unwrap_or_default(),
        }
    }

    /// Remove every key starting with one of `prefixes`; other keys are left
    /// untouched. Returns how many entries were removed.
    pub fn remove_prefixed(&self, prefixes: &[&str]) -> Result<usize, StorageError> {
        let doomed: Vec<String> = self
            .keys()
            .into_iter()
            .filter(|key| prefixes.iter().any(|prefix| key.starts_with(prefix)))
            .collect();
        for key in &doomed {
            self.remove(key)?;
        }
        Ok(doomed.len())
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        match self.backend {
            #[cfg(not(target_arch = "wasm32"))]
            Backend::Disk => {
                let dir = self.scope_dir();
                if dir.exists() {
                    fs::remove_dir_all(&dir).map_err(|source| StorageError::Io {
                        scope: self.scope.clone(),
                        source,
                    })?;
                }
                Ok(())
            }
            Backend::Memory => {
                let mut store = self.lock_memory()?;
                store.remove(&self.scope);
                Ok(())
            }
        }
    }

    fn lock_memory(
        &self,
    ) -> Result<std::sync::MutexGuard<'static, HashMap<String, HashMap<String, String>>>, StorageError>
    {
        MEMORY
            .lock()
            .map_err(|_| StorageError::Poisoned(self.scope.clone()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn scope_dir(&self) -> PathBuf {
        let safe_scope = sanitize(&self.scope);
        if let Some(data_dir) = dirs::data_local_dir() {
            return data_dir.join("atrium").join("storage").join(safe_scope);
        }
        PathBuf::from("cache").join("storage").join(safe_scope)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn entry_path(&self, key: &str) -> PathBuf {
        self.scope_dir().join(format!("{}.json", sanitize(key)))
    }
}

/// Sanitize a scope or key for filesystem use. The keys this application
/// owns (`theme`, `chat_*`, `conversation_*`) pass through unchanged.
#[cfg(not(target_arch = "wasm32"))]
fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn sanitize_passes_owned_keys_through() {
        assert_eq!(sanitize("theme"), "theme");
        assert_eq!(sanitize("conversation_1712000000"), "conversation_1712000000");
        assert_eq!(sanitize("user:preferences"), "user_preferences");
    }

    #[test]
    fn set_get_remove_roundtrip() {
        let area = StorageArea::in_memory("storage-roundtrip");
        area.set("theme", "dark").expect("set failed");
        assert_eq!(area.get("theme"), Some("dark".to_string()));
        area.remove("theme").expect("remove failed");
        assert_eq!(area.get("theme"), None);
    }

    #[test]
    fn scopes_are_isolated() {
        let a = StorageArea::in_memory("storage-iso-a");
        let b = StorageArea::in_memory("storage-iso-b");
        a.set("key", "a-value").expect("set failed");
        b.set("key", "b-value").expect("set failed");
        assert_eq!(a.get("key"), Some("a-value".to_string()));
        assert_eq!(b.get("key"), Some("b-value".to_string()));
        a.clear().expect("clear failed");
        assert_eq!(a.get("key"), None);
        assert_eq!(b.get("key"), Some("b-value".to_string()));
    }

    #[test]
    fn remove_prefixed_spares_other_keys() {
        let area = StorageArea::in_memory("storage-prefixed");
        area.set("chat_1", "x").expect("set failed");
        area.set("conversation_2", "y").expect("set failed");
        area.set("other_3", "z").expect("set failed");

        let removed = area
            .remove_prefixed(&["chat_", "conversation_"])
            .expect("remove_prefixed failed");
        assert_eq!(removed, 2);

        assert_eq!(area.keys(), vec!["other_3".to_string()]);
        assert_eq!(area.get("other_3"), Some("z".to_string()));
    }
}
