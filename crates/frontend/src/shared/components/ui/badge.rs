use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || badge_class(variant.get().as_deref().unwrap_or("neutral"));

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

fn badge_class(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

#[cfg(test)]
mod tests {
    use super::badge_class;

    #[test]
    fn unknown_variant_is_neutral() {
        assert_eq!(badge_class("success"), "badge--success");
        assert_eq!(badge_class("purple"), "badge--neutral");
    }
}
