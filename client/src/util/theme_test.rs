#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_dark_outside_browser() {
    assert_eq!(read_preference(), ThemeMode::Dark);
}

#[test]
fn stored_preference_wins_and_defaults_to_dark() {
    assert_eq!(preference_from_stored(Some("light")), ThemeMode::Light);
    assert_eq!(preference_from_stored(Some("dark")), ThemeMode::Dark);
    assert_eq!(preference_from_stored(Some("sepia")), ThemeMode::Dark);
    assert_eq!(preference_from_stored(None), ThemeMode::Dark);
}

#[test]
fn toggle_flips_mode() {
    assert_eq!(toggle(ThemeMode::Dark), ThemeMode::Light);
    assert_eq!(toggle(ThemeMode::Light), ThemeMode::Dark);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(ThemeMode::Dark);
    apply(ThemeMode::Light);
}
