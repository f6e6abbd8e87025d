//! Tabbed-navigation widget for Leptos.
//!
//! One reusable component, [`Tabs`]: a horizontal strip of selectable header
//! buttons over a single panel showing the selected tab's content. The
//! caller supplies an ordered list of [`TabItem`] descriptors (label, key,
//! optional icons and content); the widget owns nothing but the currently
//! selected key.
//!
//! The rendered tree follows the tablist / tab / tabpanel role structure,
//! so hosts and tests can query it by role and text rather than by markup
//! details.
//!
//! # Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use tabkit::{TabItem, Tabs};
//!
//! view! {
//!     <Tabs tabs=vec![
//!         TabItem::new("Tab 1", "1").with_content(|| view! { <div>"Tab content 1"</div> }),
//!         TabItem::new("Tab 2", "2").with_content(|| view! { <div>"Tab content 2"</div> }),
//!         TabItem::new("Tab 3", "3").with_content(|| view! { <div>"Tab content 3"</div> }),
//!     ] />
//! }
//! ```
//!
//! Items without `content` fall back to the widget's children; passing the
//! `panel` render function instead makes the panel a pure function of the
//! selected key:
//!
//! ```rust,ignore
//! view! {
//!     <Tabs tabs=tabs panel=Callback::new(|value| {
//!         view! { <p>"Active: " {value.to_string()}</p> }.into_any()
//!     }) />
//! }
//! ```

mod item;
mod selection;
mod widget;

pub use item::{TabItem, TabValue};
pub use widget::Tabs;
