//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`session`,
//! `chat`) so rendering controls can evolve independently of backend data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::dark_mode;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// Mobile navigation menu expanded.
    pub nav_open: bool,
}

impl UiState {
    /// State seeded from the stored theme preference.
    pub fn from_preference() -> Self {
        Self { dark_mode: dark_mode::read_preference(), nav_open: false }
    }

    /// Flip the theme and persist the choice.
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = dark_mode::toggle(self.dark_mode);
    }
}
