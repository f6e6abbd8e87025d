use leptos::prelude::*;
use tabkit::{TabItem, TabValue, Tabs};

use crate::icons::icon;

/// Gallery page exercising every part of the tabs widget.
#[component]
pub fn App() -> impl IntoView {
    let basic_tabs = vec![
        TabItem::new("Overview", "overview")
            .with_content(|| view! { <p>"General information about the product."</p> }),
        TabItem::new("Details", "details")
            .with_content(|| view! { <p>"Full specification, dimensions and materials."</p> }),
        TabItem::new("Reviews", "reviews")
            .with_content(|| view! { <p>"What customers say about it."</p> }),
    ];

    let year_tabs = vec![
        TabItem::new("2023", 2023).with_content(|| view! { <p>"Archived reports for 2023."</p> }),
        TabItem::new("2024", 2024).with_content(|| view! { <p>"Archived reports for 2024."</p> }),
        TabItem::new("2025", 2025).with_content(|| view! { <p>"Reports still being collected."</p> }),
    ];

    let misconfigured_tabs = vec![
        TabItem::new("First", "first").with_content(|| view! { <p>"The widget landed here."</p> }),
        TabItem::new("Second", "second").with_content(|| view! { <p>"Second panel."</p> }),
    ];

    let icon_tabs = vec![
        TabItem::new("Inbox", "inbox")
            .with_start_icon(|| icon("bell"))
            .with_content(|| view! { <p>"Three unread notifications."</p> }),
        TabItem::new("Settings", "settings")
            .with_start_icon(|| icon("settings"))
            .with_content(|| view! { <p>"Account and security settings."</p> }),
        TabItem::new("Done", "done")
            .with_end_icon(|| icon("check"))
            .with_content(|| view! { <p>"Nothing left to do."</p> }),
    ];

    let routed_tabs = vec![
        TabItem::new("Alpha", "alpha"),
        TabItem::new("Beta", "beta"),
        TabItem::new("Gamma", "gamma"),
    ];

    let partial_tabs = vec![
        TabItem::new("Documented", "documented")
            .with_content(|| view! { <p>"This tab brings its own panel."</p> }),
        TabItem::new("Pending", "pending"),
        TabItem::new("Draft", "draft"),
    ];

    view! {
        <div style="padding: 20px; max-width: 900px; margin: 0 auto;">
            <h1 style="margin-bottom: 20px; font-size: 24px; font-weight: bold;">
                "Tabs widget showcase"
            </h1>

            // Plain items, first tab selected on mount
            <div style="margin-bottom: 30px; padding: 20px; border: 1px solid #e0e0e0; border-radius: 8px;">
                <h2 style="margin-bottom: 15px; font-size: 18px; font-weight: 600;">
                    "1. Basic usage"
                </h2>
                <Tabs tabs=basic_tabs />
            </div>

            // Numeric keys plus an explicit default
            <div style="margin-bottom: 30px; padding: 20px; border: 1px solid #e0e0e0; border-radius: 8px;">
                <h2 style="margin-bottom: 15px; font-size: 18px; font-weight: 600;">
                    "2. Default selection with numeric values"
                </h2>
                <Tabs tabs=year_tabs default_selected_value=TabValue::from(2024) />
                <div style="margin-top: 10px; padding: 10px; background-color: #f5f5f5; border-radius: 4px;">
                    <p>"Opens on 2024 because the default names an existing value."</p>
                </div>
            </div>

            // Unknown default, widget recovers on its own
            <div style="margin-bottom: 30px; padding: 20px; border: 1px solid #e0e0e0; border-radius: 8px;">
                <h2 style="margin-bottom: 15px; font-size: 18px; font-weight: 600;">
                    "3. Unknown default value"
                </h2>
                <Tabs tabs=misconfigured_tabs default_selected_value=TabValue::from("archive") />
                <div style="margin-top: 10px; padding: 10px; background-color: #f5f5f5; border-radius: 4px;">
                    <p>"No tab is called 'archive', so the first tab wins and a warning goes to the console."</p>
                </div>
            </div>

            // Icons on either side of the label
            <div style="margin-bottom: 30px; padding: 20px; border: 1px solid #e0e0e0; border-radius: 8px;">
                <h2 style="margin-bottom: 15px; font-size: 18px; font-weight: 600;">
                    "4. Icons around labels"
                </h2>
                <Tabs tabs=icon_tabs />
            </div>

            // Single render function instead of per-item content
            <div style="margin-bottom: 30px; padding: 20px; border: 1px solid #e0e0e0; border-radius: 8px;">
                <h2 style="margin-bottom: 15px; font-size: 18px; font-weight: 600;">
                    "5. Panel render function"
                </h2>
                <Tabs
                    tabs=routed_tabs
                    panel=Callback::new(|value: TabValue| {
                        view! {
                            <p>
                                "One function renders every panel. Active tab: "
                                <strong>{value.to_string()}</strong>
                            </p>
                        }
                        .into_any()
                    })
                />
                <div style="margin-top: 10px; padding: 10px; background-color: #f5f5f5; border-radius: 4px;">
                    <p>"When a render function is given it takes over the panel entirely."</p>
                </div>
            </div>

            // Shared fallback for items without their own content
            <div style="margin-bottom: 30px; padding: 20px; border: 1px solid #e0e0e0; border-radius: 8px;">
                <h2 style="margin-bottom: 15px; font-size: 18px; font-weight: 600;">
                    "6. Shared fallback content"
                </h2>
                <Tabs tabs=partial_tabs>
                    <p style="color: #666;">"Nothing here yet. Check back soon."</p>
                </Tabs>
                <div style="margin-top: 10px; padding: 10px; background-color: #f5f5f5; border-radius: 4px;">
                    <p>"'Pending' and 'Draft' have no content of their own, so the fallback shows."</p>
                </div>
            </div>

            <div style="margin-top: 30px; padding: 20px; background-color: #e8f1fb; border-radius: 8px;">
                <h2 style="margin-bottom: 10px; font-size: 18px; font-weight: 600; color: #1a56a0;">
                    "Keyboard support"
                </h2>
                <p style="margin: 5px 0;">
                    "Focus any tab and use Left/Right to step through, Home/End to jump to the edges. "
                    "The arrows wrap around at either end."
                </p>
            </div>
        </div>
    }
}
