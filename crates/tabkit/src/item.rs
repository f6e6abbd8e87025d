use std::fmt;

use leptos::prelude::*;

/// Identifying key of a tab.
///
/// Tab lists are commonly keyed by either strings or numbers, so both forms
/// are first-class. Keys are compared with plain equality for selection;
/// [`TabValue::as_key`] derives the DOM-id-safe form used in element ids.
///
/// ```
/// use tabkit::TabValue;
///
/// assert_eq!(TabValue::from("overview"), TabValue::from("overview"));
/// // A textual "1" and a numeric 1 are different keys.
/// assert_ne!(TabValue::from("1"), TabValue::from(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TabValue {
    Text(String),
    Number(i64),
}

impl TabValue {
    /// DOM-id-safe rendering of the key: ASCII alphanumerics, `-` and `_`
    /// pass through, everything else becomes `-`.
    ///
    /// ```
    /// use tabkit::TabValue;
    ///
    /// assert_eq!(TabValue::from("wb finance/2024").as_key(), "wb-finance-2024");
    /// assert_eq!(TabValue::from(-7).as_key(), "-7");
    /// ```
    pub fn as_key(&self) -> String {
        let raw = match self {
            TabValue::Text(text) => text.clone(),
            TabValue::Number(number) => number.to_string(),
        };
        raw.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '-'
                }
            })
            .collect()
    }
}

impl fmt::Display for TabValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabValue::Text(text) => f.write_str(text),
            TabValue::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for TabValue {
    fn from(value: &str) -> Self {
        TabValue::Text(value.to_string())
    }
}

impl From<String> for TabValue {
    fn from(value: String) -> Self {
        TabValue::Text(value)
    }
}

impl From<i64> for TabValue {
    fn from(value: i64) -> Self {
        TabValue::Number(value)
    }
}

impl From<i32> for TabValue {
    fn from(value: i32) -> Self {
        TabValue::Number(i64::from(value))
    }
}

impl From<u32> for TabValue {
    fn from(value: u32) -> Self {
        TabValue::Number(i64::from(value))
    }
}

/// One entry in the tab list.
///
/// The label doubles as the accessible name of the header button. Icons and
/// panel content are stored as [`ViewFn`] producers so the descriptor stays
/// cloneable and a fresh view can be built whenever the tab renders.
///
/// ```
/// use leptos::prelude::*;
/// use tabkit::TabItem;
///
/// let item = TabItem::new("Tab 1", "1").with_content(|| view! { <p>"A"</p> });
/// assert!(item.content.is_some());
/// ```
#[derive(Clone)]
pub struct TabItem {
    /// Display text of the header button.
    pub label: String,
    /// Unique key; uniqueness across the list is the caller's invariant.
    pub value: TabValue,
    /// Optional decoration rendered before the label.
    pub start_icon: Option<ViewFn>,
    /// Optional decoration rendered after the label.
    pub end_icon: Option<ViewFn>,
    /// Optional panel payload shown while this tab is selected.
    pub content: Option<ViewFn>,
}

impl TabItem {
    /// Creates an item with no icons and no content of its own.
    pub fn new(label: impl Into<String>, value: impl Into<TabValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            start_icon: None,
            end_icon: None,
            content: None,
        }
    }

    /// Sets the panel content shown while this tab is selected.
    pub fn with_content(mut self, content: impl Into<ViewFn>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the decoration rendered before the label.
    pub fn with_start_icon(mut self, icon: impl Into<ViewFn>) -> Self {
        self.start_icon = Some(icon.into());
        self
    }

    /// Sets the decoration rendered after the label.
    pub fn with_end_icon(mut self, icon: impl Into<ViewFn>) -> Self {
        self.end_icon = Some(icon.into());
        self
    }
}
