//! Selection rules for the tab strip.
//!
//! Kept as pure functions so the resolution laws stay testable off the DOM;
//! the widget wires them to its selection signal and event handlers.

use crate::item::{TabItem, TabValue};

/// Resolves the initially selected key, once, at widget construction.
///
/// An absent or unknown default falls back to the first tab. `None` only
/// when the list itself is empty.
pub(crate) fn resolve_initial_value(
    tabs: &[TabItem],
    default: Option<&TabValue>,
) -> Option<TabValue> {
    let first = tabs.first()?;
    let value = match default {
        Some(value) if tabs.iter().any(|item| item.value == *value) => value.clone(),
        _ => first.value.clone(),
    };
    Some(value)
}

/// First item carrying `value`, if any. Duplicate keys resolve to the first
/// occurrence.
pub(crate) fn find_tab<'a>(tabs: &'a [TabItem], value: &TabValue) -> Option<&'a TabItem> {
    tabs.iter().find(|item| item.value == *value)
}

/// Relative move of the selection, for keyboard navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Next,
    Prev,
    First,
    Last,
}

/// Key reached by stepping from `current`. Arrows wrap around the ends; an
/// unknown `current` lands on the first tab. `None` only for an empty list.
pub(crate) fn step_value(tabs: &[TabItem], current: &TabValue, step: Step) -> Option<TabValue> {
    if tabs.is_empty() {
        return None;
    }
    let last = tabs.len() - 1;
    let position = tabs.iter().position(|item| item.value == *current);
    let target = match step {
        Step::First => 0,
        Step::Last => last,
        Step::Next => match position {
            Some(index) if index < last => index + 1,
            Some(_) => 0,
            None => 0,
        },
        Step::Prev => match position {
            Some(index) if index > 0 => index - 1,
            Some(_) => last,
            None => 0,
        },
    };
    Some(tabs[target].value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tabs() -> Vec<TabItem> {
        vec![
            TabItem::new("Tab 1", "1"),
            TabItem::new("Tab 2", "2"),
            TabItem::new("Tab 3", "3"),
        ]
    }

    #[test]
    fn test_initial_selection_defaults_to_first() {
        let tabs = sample_tabs();
        assert_eq!(resolve_initial_value(&tabs, None), Some(TabValue::from("1")));
    }

    #[test]
    fn test_initial_selection_honors_known_default() {
        let tabs = sample_tabs();
        let default = TabValue::from("2");
        assert_eq!(
            resolve_initial_value(&tabs, Some(&default)),
            Some(TabValue::from("2"))
        );
    }

    #[test]
    fn test_initial_selection_falls_back_on_unknown_default() {
        let tabs = sample_tabs();
        let default = TabValue::from("wrongKey");
        assert_eq!(
            resolve_initial_value(&tabs, Some(&default)),
            Some(TabValue::from("1"))
        );
    }

    #[test]
    fn test_initial_selection_distinguishes_key_kinds() {
        // A numeric default does not match a textual key of the same digits.
        let tabs = sample_tabs();
        let default = TabValue::from(2);
        assert_eq!(
            resolve_initial_value(&tabs, Some(&default)),
            Some(TabValue::from("1"))
        );
    }

    #[test]
    fn test_initial_selection_empty_list() {
        assert_eq!(resolve_initial_value(&[], None), None);
        assert_eq!(resolve_initial_value(&[], Some(&TabValue::from("1"))), None);
    }

    #[test]
    fn test_find_tab_first_match_wins() {
        let tabs = vec![TabItem::new("First", "dup"), TabItem::new("Second", "dup")];
        let found = find_tab(&tabs, &TabValue::from("dup")).unwrap();
        assert_eq!(found.label, "First");
    }

    #[test]
    fn test_find_tab_unknown_value() {
        let tabs = sample_tabs();
        assert!(find_tab(&tabs, &TabValue::from("missing")).is_none());
    }

    #[test]
    fn test_step_arrows_wrap_around() {
        let tabs = sample_tabs();
        assert_eq!(
            step_value(&tabs, &TabValue::from("1"), Step::Next),
            Some(TabValue::from("2"))
        );
        assert_eq!(
            step_value(&tabs, &TabValue::from("3"), Step::Next),
            Some(TabValue::from("1"))
        );
        assert_eq!(
            step_value(&tabs, &TabValue::from("1"), Step::Prev),
            Some(TabValue::from("3"))
        );
        assert_eq!(
            step_value(&tabs, &TabValue::from("2"), Step::Prev),
            Some(TabValue::from("1"))
        );
    }

    #[test]
    fn test_step_home_end() {
        let tabs = sample_tabs();
        assert_eq!(
            step_value(&tabs, &TabValue::from("2"), Step::First),
            Some(TabValue::from("1"))
        );
        assert_eq!(
            step_value(&tabs, &TabValue::from("2"), Step::Last),
            Some(TabValue::from("3"))
        );
    }

    #[test]
    fn test_step_from_unknown_value_lands_on_first() {
        let tabs = sample_tabs();
        assert_eq!(
            step_value(&tabs, &TabValue::from("missing"), Step::Next),
            Some(TabValue::from("1"))
        );
        assert_eq!(
            step_value(&tabs, &TabValue::from("missing"), Step::Prev),
            Some(TabValue::from("1"))
        );
    }

    #[test]
    fn test_step_single_tab_stays_put() {
        let tabs = vec![TabItem::new("Only", "only")];
        assert_eq!(
            step_value(&tabs, &TabValue::from("only"), Step::Next),
            Some(TabValue::from("only"))
        );
        assert_eq!(
            step_value(&tabs, &TabValue::from("only"), Step::Prev),
            Some(TabValue::from("only"))
        );
    }

    #[test]
    fn test_step_empty_list() {
        assert_eq!(step_value(&[], &TabValue::from("1"), Step::Next), None);
    }
}
