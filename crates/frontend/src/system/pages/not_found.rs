use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="empty-state">
                <h1 class="page__title">"Page not found"</h1>
                <p class="text-muted">"The page you are looking for does not exist."</p>
                <A href="/">"Back to dashboard"</A>
            </div>
        </div>
    }
}
