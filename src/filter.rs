//! Text search over projected views

use crate::view::KeyBindingView;

/// Whether `view` matches a search string.
///
/// Action, area, category and both key labels are searched, ignoring case.
/// Blank search text matches everything.
pub fn matches(view: &KeyBindingView, text: &str) -> bool {
    if text.trim().is_empty() {
        return true;
    }
    let needle = text.to_lowercase();
    let contains = |field: &str| field.to_lowercase().contains(&needle);

    contains(&view.action)
        || contains(&view.primary_key)
        || view.secondary_key.as_deref().is_some_and(contains)
        || contains(&view.area)
        || contains(&view.category)
}

/// Views matching `text`, in input order
pub fn apply<'a>(views: &'a [KeyBindingView], text: &str) -> Vec<&'a KeyBindingView> {
    views.iter().filter(|v| matches(v, text)).collect()
}
