use super::*;

#[test]
fn ui_state_default_is_light_with_closed_nav() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.nav_open);
}

#[test]
fn toggle_dark_mode_flips_flag() {
    let mut state = UiState::default();
    state.toggle_dark_mode();
    assert!(state.dark_mode);
    state.toggle_dark_mode();
    assert!(!state.dark_mode);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn from_preference_is_light_outside_browser() {
    assert!(!UiState::from_preference().dark_mode);
}
