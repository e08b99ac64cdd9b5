use crate::domain::a001_deal::api as deal_api;
use crate::domain::a003_quote::api;
use crate::shared::components::ui::form_field::{pair_options, SelectField, TextAreaField, TextField};
use crate::shared::icons::icon;
use crate::system::auth::context::{handle_api_error, use_auth};
use contracts::domain::a003_quote::request::{NEW_DEAL, PLANS, REGIONS, TERMS};
use contracts::domain::a003_quote::QuoteRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn blank_request() -> QuoteRequest {
    QuoteRequest {
        deal_id: NEW_DEAL.to_string(),
        ..QuoteRequest::default()
    }
}

/// Inline quote request form. Deals feed the "link to deal" selector.
#[component]
pub fn QuoteRequestForm(on_submitted: Callback<String>) -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let form = RwSignal::new(blank_request());
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (submitting, set_submitting) = signal(false);
    let (deal_options, set_deal_options) = signal(vec![(NEW_DEAL.to_string(), "New deal".to_string())]);

    Effect::new(move |_| {
        spawn_local(async move {
            // селектор сделок необязателен, ошибка только в лог
            match deal_api::get_deals().await {
                Ok(deals) => set_deal_options.update(|opts| {
                    opts.extend(
                        deals
                            .into_iter()
                            .map(|d| (d.deal_id.clone(), format!("{} ({})", d.account, d.deal_id))),
                    )
                }),
                Err(e) => log::warn!("Deals for the quote form unavailable: {}", e),
            }
        });
    });

    let submit = move || {
        let request = form.get_untracked();
        if let Err(e) = request.validate() {
            set_errors.set(e.errors);
            return;
        }
        set_errors.set(Vec::new());
        set_submitting.set(true);
        spawn_local(async move {
            match api::request_quote(&request).await {
                Ok(ack) => {
                    form.set(blank_request());
                    on_submitted.run(ack.message);
                }
                Err(e) => {
                    handle_api_error(&e, set_auth_state);
                    set_errors.set(vec![e]);
                }
            }
            set_submitting.set(false);
        });
    };

    let (customer, set_customer) = crate::bind_field!(form, customer);
    let (deal_id, set_deal_id) = crate::bind_field!(form, deal_id);
    let (plan, set_plan) = crate::bind_field!(form, plan);
    let (seats, set_seats) = crate::bind_field!(form, seats);
    let (term, set_term) = crate::bind_field!(form, term);
    let (region, set_region) = crate::bind_field!(form, region);
    let (notes, set_notes) = crate::bind_field!(form, notes);

    view! {
        <section class="card">
            <div class="card__header">
                {icon("file-text")}
                <h2 class="card__title">"Request a Quote"</h2>
            </div>

            <Show when=move || !errors.get().is_empty()>
                <div class="warning-box warning-box--error">
                    <ul class="form__errors">
                        {move || errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                    </ul>
                </div>
            </Show>

            <div class="form__row">
                <TextField label="Customer name" value=customer on_input=set_customer required=true />
                <SelectField label="Link to deal" value=deal_id on_change=set_deal_id options=deal_options />
            </div>
            <div class="form__row">
                <SelectField
                    label="Plan"
                    value=plan
                    on_change=set_plan
                    options=pair_options(PLANS)
                    placeholder="Select plan"
                    required=true
                />
                <TextField label="Seats" value=seats on_input=set_seats input_type="number" required=true />
            </div>
            <div class="form__row">
                <SelectField
                    label="Contract term"
                    value=term
                    on_change=set_term
                    options=pair_options(TERMS)
                    placeholder="Select term"
                    required=true
                />
                <SelectField
                    label="Region"
                    value=region
                    on_change=set_region
                    options=pair_options(REGIONS)
                    placeholder="Select region"
                    required=true
                />
            </div>
            <TextAreaField label="Notes" value=notes on_input=set_notes rows=3 />

            <div class="form__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| submit()
                    disabled=Signal::derive(move || submitting.get())
                >
                    {move || if submitting.get() { "Submitting..." } else { "Request Quote" }}
                </Button>
            </div>
        </section>
    }
}
