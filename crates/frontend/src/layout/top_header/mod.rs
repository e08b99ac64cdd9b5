//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the portal title, the signed-in user and
//! the logout button.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let toggle_sidebar = move |_| ctx.toggle_left();

    let logout = move |_| {
        spawn_local(async move {
            if let Err(e) = do_logout(set_auth_state).await {
                log::warn!("Logout request failed: {}", e);
            }
        });
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    let initials = move || {
        auth_state
            .get()
            .user
            .map(|u| u.initials())
            .unwrap_or_default()
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Partner Portal"</span>
            </div>

            <div class="top-header__actions">
                <A href="/announcements" attr:class="top-header__icon-btn" attr:title="Announcements">
                    {icon("bell")}
                </A>
                <A href="/settings" attr:class="top-header__icon-btn" attr:title="Settings">
                    {icon("settings")}
                </A>

                <div class="top-header__user">
                    <span class="top-header__avatar">{initials}</span>
                    <span>
                        {move || auth_state.get().user
                            .map(|u| u.full_name)
                            .unwrap_or_default()}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
