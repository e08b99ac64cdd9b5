//! Sidebar navigation: one entry per portal section, grouped.

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (href, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "overview",
            label: "Overview",
            items: vec![("/", "Dashboard", "layout-dashboard")],
        },
        MenuGroup {
            id: "sales",
            label: "Sales",
            items: vec![
                ("/deals", "Deals", "briefcase"),
                ("/customers", "Customers", "customers"),
                ("/quotes", "Quotes & Pricing", "file-text"),
                ("/revenue", "Revenue", "dollar-sign"),
            ],
        },
        MenuGroup {
            id: "enablement",
            label: "Enablement",
            items: vec![
                ("/enablement", "Resources", "folder-open"),
                ("/training", "Training", "award"),
                ("/announcements", "Announcements", "bell"),
            ],
        },
        MenuGroup {
            id: "help",
            label: "Help",
            items: vec![
                ("/support", "Support", "life-buoy"),
                ("/settings", "Settings", "settings"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let groups = get_menu_groups();

    view! {
        <nav class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                view! {
                    <div class="app-sidebar__group" data-group=group.id>
                        <div class="app-sidebar__group-label">{group.label}</div>
                        {group.items.into_iter().map(|(href, label, icon_name)| {
                            view! {
                                // A ставит aria-current="page" для активного маршрута
                                <A href=href exact={href == "/"} attr:class="app-sidebar__item">
                                    <div class="app-sidebar__item-content">
                                        {icon(icon_name)}
                                        <span>{label}</span>
                                    </div>
                                </A>
                            }
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
