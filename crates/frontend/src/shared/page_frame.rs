//! PageFrame: root wrapper of every routed page.
//!
//! Sets `id="{entity}--{category}"` (e.g. `"a001_deal--list"`) and
//! `data-page-category` on the root element.
//!
//! ```ignore
//! view! {
//!     <PageFrame page_id="a001_deal--list" category=PAGE_CAT_LIST>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use leptos::prelude::*;

pub const PAGE_CAT_LIST: &str = "list";
pub const PAGE_CAT_DETAIL: &str = "detail";
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";
/// Pages built from cards and forms rather than one table
pub const PAGE_CAT_CUSTOM: &str = "custom";
pub const PAGE_CAT_SYSTEM: &str = "system";

fn base_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_CUSTOM => "page page--custom",
        _ => "page",
    }
}

#[component]
pub fn PageFrame(
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        base_class(category).to_string()
    } else {
        format!("{} {}", base_class(category), class)
    };

    view! {
        <div id=page_id data-page-category=category class=full_class>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_modifiers() {
        assert_eq!(base_class(PAGE_CAT_LIST), "page");
        assert_eq!(base_class(PAGE_CAT_DETAIL), "page page--detail");
        assert_eq!(base_class("unknown"), "page");
    }
}
