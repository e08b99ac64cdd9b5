use crate::domain::a001_deal::api as deal_api;
use crate::domain::a005_ticket::api;
use crate::shared::components::ui::form_field::{pair_options, SelectField, TextAreaField, TextField};
use crate::shared::modal_frame::ModalFrame;
use crate::system::auth::context::{handle_api_error, use_auth};
use contracts::domain::a005_ticket::new_ticket::{NO_DEAL, PRIORITIES};
use contracts::domain::a005_ticket::NewTicketRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn NewTicketForm(
    /// (id, name) of the support categories
    #[prop(into)]
    categories: Signal<Vec<(String, String)>>,
    on_close: Callback<()>,
    on_submitted: Callback<String>,
) -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let form = RwSignal::new(NewTicketRequest {
        priority: "normal".to_string(),
        related_deal_id: NO_DEAL.to_string(),
        ..NewTicketRequest::default()
    });
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (submitting, set_submitting) = signal(false);
    let (deal_options, set_deal_options) = signal(vec![(NO_DEAL.to_string(), "Not related to a deal".to_string())]);

    Effect::new(move |_| {
        spawn_local(async move {
            match deal_api::get_deals().await {
                Ok(deals) => set_deal_options.update(|opts| {
                    opts.extend(deals.into_iter().map(|d| (d.deal_id.clone(), format!("{} ({})", d.account, d.deal_id))))
                }),
                Err(e) => log::warn!("Deals for the ticket form unavailable: {}", e),
            }
        });
    });

    let submit = move || {
        let request = form.get_untracked();
        let known = categories.with_untracked(|c| c.iter().map(|(id, _)| id.clone()).collect::<Vec<_>>());
        let known: Vec<&str> = known.iter().map(String::as_str).collect();
        if let Err(e) = request.validate(&known) {
            set_errors.set(e.errors);
            return;
        }
        set_errors.set(Vec::new());
        set_submitting.set(true);
        spawn_local(async move {
            match api::create_ticket(&request).await {
                Ok(ack) => on_submitted.run(ack.message),
                Err(e) => {
                    handle_api_error(&e, set_auth_state);
                    set_errors.set(vec![e]);
                }
            }
            set_submitting.set(false);
        });
    };

    let (category, set_category) = crate::bind_field!(form, category);
    let (priority, set_priority) = crate::bind_field!(form, priority);
    let (subject, set_subject) = crate::bind_field!(form, subject);
    let (related_deal, set_related_deal) = crate::bind_field!(form, related_deal_id);
    let (description, set_description) = crate::bind_field!(form, description);

    view! {
        <ModalFrame title="New Support Ticket" on_close=on_close>
            <Show when=move || !errors.get().is_empty()>
                <div class="warning-box warning-box--error">
                    <ul class="form__errors">
                        {move || errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                    </ul>
                </div>
            </Show>

            <div class="form__row">
                <SelectField
                    label="Category"
                    value=category
                    on_change=set_category
                    options=categories
                    placeholder="Select category"
                    required=true
                />
                <SelectField
                    label="Priority"
                    value=priority
                    on_change=set_priority
                    options=pair_options(PRIORITIES)
                    required=true
                />
            </div>
            <TextField label="Subject" value=subject on_input=set_subject required=true />
            <SelectField label="Related deal" value=related_deal on_change=set_related_deal options=deal_options />
            <TextAreaField
                label="Description"
                value=description
                on_input=set_description
                rows=5
                placeholder="Describe the issue, steps to reproduce and affected users"
                required=true
            />

            <div class="form__actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| submit()
                    disabled=Signal::derive(move || submitting.get())
                >
                    {move || if submitting.get() { "Submitting..." } else { "Submit Ticket" }}
                </Button>
            </div>
        </ModalFrame>
    }
}
