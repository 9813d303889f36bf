//! Dark mode preference.
//!
//! Dark is the default. The toggle adds or removes the `dark` class on the
//! `<html>` element and remembers the choice in `localStorage`.

use web_sys::window;

const STORAGE_KEY: &str = "foundersmith_dark";
const DARK_CLASS: &str = "dark";
pub const DEFAULT_DARK: bool = true;

pub fn parse_preference(stored: Option<&str>) -> bool {
    match stored {
        Some("true") => true,
        Some("false") => false,
        _ => DEFAULT_DARK,
    }
}

pub fn logo_src(dark: bool) -> &'static str {
    if dark {
        "/foundersmith-logo-dark.svg"
    } else {
        "/foundersmith-logo.svg"
    }
}

pub fn read_preference() -> bool {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
    parse_preference(stored.as_deref())
}

/// Applies the theme class to `<html>` and persists it.
pub fn apply(dark: bool) {
    let Some(window) = window() else {
        return;
    };
    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let classes = root.class_list();
        let _ = if dark {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
    }
    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.set_item(STORAGE_KEY, if dark { "true" } else { "false" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_garbled_preference_is_dark() {
        assert!(parse_preference(None));
        assert!(parse_preference(Some("")));
        assert!(parse_preference(Some("TRUE?")));
    }

    #[test]
    fn stored_preference_round_trips() {
        assert!(parse_preference(Some("true")));
        assert!(!parse_preference(Some("false")));
    }

    #[test]
    fn logo_follows_theme() {
        assert_eq!(logo_src(true), "/foundersmith-logo-dark.svg");
        assert_eq!(logo_src(false), "/foundersmith-logo.svg");
    }
}
