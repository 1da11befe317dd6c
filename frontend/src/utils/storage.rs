#[cfg(test)]
use std::{cell::RefCell, rc::Rc};
use web_sys::{Storage, Window};

use crate::config;

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Persistence for the single bearer token the client keeps.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), String>;
    fn clear(&self);
}

/// Token kept in `window.localStorage` under a fixed key.
#[derive(Debug, Clone)]
pub struct LocalTokenStore {
    key: &'static str,
}

impl LocalTokenStore {
    pub fn new() -> Self {
        Self {
            key: config::ACCESS_TOKEN_KEY,
        }
    }
}

impl Default for LocalTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        local_storage()
            .ok()?
            .get_item(self.key)
            .ok()
            .flatten()
            .filter(|token| !token.trim().is_empty())
    }

    fn save(&self, token: &str) -> Result<(), String> {
        local_storage()?
            .set_item(self.key, token)
            .map_err(|_| "Failed to store token".to_string())
    }

    fn clear(&self) {
        if let Ok(storage) = local_storage() {
            let _ = storage.remove_item(self.key);
        }
    }
}

/// In-memory store for host tests.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
}

#[cfg(test)]
impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Rc::new(RefCell::new(Some(token.into()))),
        }
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) -> Result<(), String> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_and_clears() {
        let store = MemoryTokenStore::default();
        assert!(store.load().is_none());
        store.save("abc").unwrap();
        assert_eq!(store.load().as_deref(), Some("abc"));

        let shared = store.clone();
        shared.clear();
        assert!(store.load().is_none());
    }
}
