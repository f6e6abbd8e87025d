//! The `Tabs` component and its header buttons.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen::JsCast;

use crate::item::{TabItem, TabValue};
use crate::selection::{find_tab, resolve_initial_value, step_value, Step};

/// Tabbed navigation widget: a horizontal strip of header buttons plus a
/// single panel showing the selected tab's content.
///
/// Selection lives in one signal per instance. It is resolved once at
/// construction (`default_selected_value`, falling back to the first tab
/// when absent or unknown) and afterwards changes only through user
/// activation; later prop changes never re-run the resolution.
///
/// Panel content resolves in precedence order: the `panel` render function
/// if given (item `content` is then ignored entirely), else the selected
/// item's own `content`, else the static `children` fallback, else an empty
/// panel. None of the inputs can make the widget fail: unknown keys and
/// missing content degrade to the fallback rules.
#[component]
pub fn Tabs(
    /// Ordered tab descriptors; one header button is rendered per item, in
    /// list order. An empty list renders an empty container.
    tabs: Vec<TabItem>,
    /// Key of the tab to preselect. Unknown keys fall back to the first tab.
    #[prop(optional, into)]
    default_selected_value: Option<TabValue>,
    /// Render function mapping the selected key to the panel view. Takes
    /// precedence over every item's own `content`.
    #[prop(optional)]
    panel: Option<Callback<TabValue, AnyView>>,
    /// Static fallback markup for selected items without `content`.
    #[prop(optional)]
    children: Option<ChildrenFn>,
    /// Prefix for the generated element ids. Defaults to a unique
    /// per-instance prefix so several widgets can share a page.
    #[prop(optional, into)]
    id: Option<String>,
    /// Extra class on the root container.
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    match resolve_initial_value(&tabs, default_selected_value.as_ref()) {
        None => {
            log::warn!("tabs: empty tab list, rendering a bare container");
            view! { <div class="tab-container tab-container--empty"></div> }.into_any()
        }
        Some(initial) => {
            let widget_id = id.unwrap_or_else(|| {
                let mut uid = Uuid::new_v4().simple().to_string();
                uid.truncate(8);
                format!("tabs-{uid}")
            });
            log::debug!("tabs[{widget_id}]: initial selection '{initial}'");

            let selected = RwSignal::new(initial);

            // Arrows and Home/End move relative to the current selection
            // (automatic activation); Enter/Space come free with <button>.
            let tabs_for_arrows = tabs.clone();
            let widget_id_for_focus = widget_id.clone();
            let on_keydown = move |ev: KeyboardEvent| {
                let step = match ev.key().as_str() {
                    "ArrowRight" => Step::Next,
                    "ArrowLeft" => Step::Prev,
                    "Home" => Step::First,
                    "End" => Step::Last,
                    _ => return,
                };
                ev.prevent_default();
                if let Some(next) = step_value(&tabs_for_arrows, &selected.get_untracked(), step) {
                    select_tab(selected, next.clone());
                    focus_tab(&widget_id_for_focus, &next);
                }
            };

            let tabs_for_panel = tabs.clone();
            let panel_content = move || match panel {
                Some(render) => render.run(selected.get()),
                None => {
                    let selected_value = selected.get();
                    match find_tab(&tabs_for_panel, &selected_value)
                        .and_then(|item| item.content.clone())
                    {
                        Some(content) => content.run(),
                        None => match &children {
                            Some(fallback) => fallback(),
                            None => ().into_any(),
                        },
                    }
                }
            };

            let widget_id_for_panel = widget_id.clone();
            let panel_dom_id =
                move || format!("{}-panel-{}", widget_id_for_panel, selected.get().as_key());
            let widget_id_for_label = widget_id.clone();
            let panel_labelledby =
                move || format!("{}-tab-{}", widget_id_for_label, selected.get().as_key());

            let headers = tabs
                .into_iter()
                .map(move |item| {
                    view! { <TabHeader item=item widget_id=widget_id.clone() selected=selected /> }
                })
                .collect_view();

            view! {
                <div class=move || format!("tab-container {}", class.get().unwrap_or_default())>
                    <div class="tabs" role="tablist" on:keydown=on_keydown>
                        {headers}
                    </div>
                    <div
                        class="tabpanel"
                        role="tabpanel"
                        id=panel_dom_id
                        aria-labelledby=panel_labelledby
                    >
                        {panel_content}
                    </div>
                </div>
            }
            .into_any()
        }
    }
}

/// One header button of the strip: start icon, label, end icon, with the
/// selected flag mirrored into class, aria state, and roving tabindex.
#[component]
fn TabHeader(item: TabItem, widget_id: String, selected: RwSignal<TabValue>) -> impl IntoView {
    let value = item.value.clone();
    let key = value.as_key();
    let tab_id = format!("{widget_id}-tab-{key}");
    let panel_id = format!("{widget_id}-panel-{key}");

    let value_for_selected = value.clone();
    let is_selected = Memo::new(move |_| selected.get() == value_for_selected);

    let value_for_click = value.clone();
    let on_click = move |_| select_tab(selected, value_for_click.clone());

    view! {
        <button
            type="button"
            id=tab_id
            class="tabs__item"
            class=("tabs__item--active", move || is_selected.get())
            role="tab"
            aria-selected=move || if is_selected.get() { "true" } else { "false" }
            aria-controls=panel_id
            tabindex=move || if is_selected.get() { "0" } else { "-1" }
            on:click=on_click
        >
            {item.start_icon.map(|icon| icon.run())}
            {item.label}
            {item.end_icon.map(|icon| icon.run())}
        </button>
    }
}

/// The selection write shared by pointer and keyboard activation.
/// Unconditional: unknown keys are absorbed by the content fallback rules.
fn select_tab(selected: RwSignal<TabValue>, value: TabValue) {
    log::debug!("tabs: select '{value}'");
    selected.set(value);
}

/// Moves focus to the header with `value` so focus follows keyboard
/// selection. Lookup by id, so no element refs are threaded through.
fn focus_tab(widget_id: &str, value: &TabValue) {
    let id = format!("{}-tab-{}", widget_id, value.as_key());
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(&id));
    if let Some(element) = element {
        if let Ok(button) = element.dyn_into::<web_sys::HtmlElement>() {
            let _ = button.focus();
        }
    }
}
