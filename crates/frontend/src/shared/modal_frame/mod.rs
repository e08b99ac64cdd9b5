use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay with a side sheet: title bar with a close button, scrollable
/// body. Used for the deal registration, quote request and ticket forms.
#[component]
pub fn ModalFrame(
    #[prop(into)] title: String,
    /// Called when the sheet should close (overlay click, close button).
    on_close: Callback<()>,
    /// Extra class for the surface (`div.modal`), e.g. "modal--wide".
    #[prop(optional)]
    modal_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Закрываем, только если и нажатие, и отпускание были на подложке
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // next tick: the overlay must not be removed inside its own click dispatch
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_class = match modal_class {
        Some(cls) => format!("modal {}", cls),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=surface_class role="dialog" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal__header">
                    <h2 class="modal__title">{title}</h2>
                    <button
                        class="modal__close"
                        title="Close"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal__body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
