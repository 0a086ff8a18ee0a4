#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}

#[test]
fn dark_class_matches_stylesheet() {
    assert_eq!(DARK_CLASS, "dark-mode");
}
