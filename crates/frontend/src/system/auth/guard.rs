use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

/// Renders children only for a signed-in user; otherwise redirects to the
/// login page once the session check has finished.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let children = StoredValue::new(children);

    move || {
        let state = auth_state.get();
        if !state.checked {
            view! { <div class="page-loading">"Loading..."</div> }.into_any()
        } else if state.is_authenticated() {
            children.with_value(|children| children()).into_any()
        } else {
            view! { <Redirect path="/login" /> }.into_any()
        }
    }
}
