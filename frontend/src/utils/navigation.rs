#[cfg(test)]
use std::{cell::RefCell, rc::Rc};

pub const SIGN_IN_PATH: &str = "/sign-in";
pub const SIGN_UP_PATH: &str = "/sign-up";
pub const FORBIDDEN_PATH: &str = "/forbidden";
pub const HOME_PATH: &str = "/items/all";

pub const PUBLIC_PATHS: &[&str] = &[SIGN_IN_PATH, SIGN_UP_PATH, FORBIDDEN_PATH];

pub fn is_public_path(path: &str) -> bool {
    let trimmed = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };
    PUBLIC_PATHS.contains(&trimmed)
}

/// Where the app is and how it moves somewhere else.
pub trait Navigator {
    fn current_path(&self) -> Option<String>;
    fn redirect(&self, path: &str);
}

/// Full-page navigation through `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> Option<String> {
        web_sys::window()?.location().pathname().ok()
    }

    fn redirect(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            log::debug!("redirecting to {}", path);
            let _ = window.location().set_href(path);
        }
    }
}

/// Navigator that only records where it was sent.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    path: Rc<RefCell<String>>,
    visits: Rc<RefCell<Vec<String>>>,
}

#[cfg(test)]
impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self {
            path: Rc::new(RefCell::new(path.to_string())),
            visits: Rc::default(),
        }
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }

    pub fn last_visit(&self) -> Option<String> {
        self.visits.borrow().last().cloned()
    }
}

#[cfg(test)]
impl Navigator for RecordingNavigator {
    fn current_path(&self) -> Option<String> {
        Some(self.path.borrow().clone())
    }

    fn redirect(&self, path: &str) {
        *self.path.borrow_mut() = path.to_string();
        self.visits.borrow_mut().push(path.to_string());
    }
}
