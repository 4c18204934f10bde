// src/views/mod.rs
//! Form state for the four tools and the tab bar that switches between them
//!
//! Each view owns its fields for the whole session. Switching tabs only
//! changes which view is active; nothing is cleared.

pub mod asymmetric;
pub mod hash;
pub mod symmetric;

pub use asymmetric::{AsymmetricTab, AsymmetricView, CopyTarget};
pub use hash::{HashView, PendingLoad};
pub use symmetric::SymmetricView;

use crate::config::Config;

/// Top-level navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Symmetric,
    Asymmetric,
    Hash,
    About,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Home,
        Tab::Symmetric,
        Tab::Asymmetric,
        Tab::Hash,
        Tab::About,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Symmetric => "Symmetric encryption",
            Tab::Asymmetric => "Asymmetric encryption",
            Tab::Hash => "Hash functions",
            Tab::About => "About",
        }
    }

    fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or_default()
    }
}

/// The whole application state: active tab plus one view per tool
#[derive(Debug)]
pub struct Workbench {
    active: Tab,
    pub symmetric: SymmetricView,
    pub asymmetric: AsymmetricView,
    pub hash: HashView,
}

impl Workbench {
    pub fn new(config: &Config) -> Self {
        Self {
            active: Tab::Home,
            symmetric: SymmetricView::new(config.defaults.symmetric_algorithm),
            asymmetric: AsymmetricView::new(config.rsa.key_bits),
            hash: HashView::new(config.defaults.digest_algorithm, &config.limits),
        }
    }

    /// Workbench built from the process-wide config
    pub fn from_loaded_config() -> Self {
        Self::new(crate::config::load())
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn select(&mut self, tab: Tab) {
        self.active = tab;
    }

    /// Move right, wrapping from About back to Home
    pub fn next(&mut self) {
        let i = (self.active.index() + 1) % Tab::ALL.len();
        self.active = Tab::ALL[i];
    }

    pub fn previous(&mut self) {
        let len = Tab::ALL.len();
        let i = (self.active.index() + len - 1) % len;
        self.active = Tab::ALL[i];
    }
}
