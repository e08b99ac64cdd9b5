use crate::domain::a001_deal::api;
use crate::shared::components::ui::form_field::{
    plain_options, SelectField, TextAreaField, TextField,
};
use crate::shared::modal_frame::ModalFrame;
use crate::system::auth::context::{handle_api_error, use_auth};
use contracts::domain::a001_deal::registration::{EXPANSION_OPTIONS, PACKAGES, REGIONS, TERMS};
use contracts::domain::a001_deal::DealRegistrationRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Deal registration sheet. Validates locally, then posts; the backend
/// acknowledges without storing anything.
#[component]
pub fn DealRegistrationForm(on_close: Callback<()>, on_submitted: Callback<String>) -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let form = RwSignal::new(DealRegistrationRequest::default());
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (submitting, set_submitting) = signal(false);

    let submit = move || {
        let request = form.get_untracked();
        if let Err(e) = request.validate() {
            set_errors.set(e.errors);
            return;
        }
        set_errors.set(Vec::new());
        set_submitting.set(true);
        spawn_local(async move {
            match api::register_deal(&request).await {
                Ok(ack) => on_submitted.run(ack.message),
                Err(e) => {
                    handle_api_error(&e, set_auth_state);
                    set_errors.set(vec![e]);
                }
            }
            set_submitting.set(false);
        });
    };

    let (account_name, set_account_name) = crate::bind_field!(form, account_name);
    let (account_domain, set_account_domain) = crate::bind_field!(form, account_domain);
    let (package, set_package) = crate::bind_field!(form, package);
    let (seats, set_seats) = crate::bind_field!(form, seats);
    let (contract_term, set_contract_term) = crate::bind_field!(form, contract_term);
    let (deal_value, set_deal_value) = crate::bind_field!(form, deal_value);
    let (region, set_region) = crate::bind_field!(form, region);
    let (close_date, set_close_date) = crate::bind_field!(form, close_date);
    let (use_case, set_use_case) = crate::bind_field!(form, use_case);
    let (competitor, set_competitor) = crate::bind_field!(form, competitor);
    let (expansion, set_expansion) = crate::bind_field!(form, expansion_potential);
    let (notes, set_notes) = crate::bind_field!(form, notes);

    view! {
        <ModalFrame title="Register New Deal" on_close=on_close modal_class="modal--sheet">
            <p class="text-muted">
                "Register a new opportunity to protect your deal and receive partner pricing."
            </p>

            <Show when=move || !errors.get().is_empty()>
                <div class="warning-box warning-box--error">
                    <ul class="form__errors">
                        {move || errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                    </ul>
                </div>
            </Show>

            <h3 class="form__section-title">"Account"</h3>
            <TextField label="Account name" value=account_name on_input=set_account_name required=true />
            <TextField
                label="Account domain"
                value=account_domain
                on_input=set_account_domain
                placeholder="example.com"
                required=true
            />

            <h3 class="form__section-title">"Opportunity"</h3>
            <div class="form__row">
                <SelectField
                    label="Package"
                    value=package
                    on_change=set_package
                    options=plain_options(PACKAGES)
                    placeholder="Select package"
                    required=true
                />
                <TextField label="Seats" value=seats on_input=set_seats input_type="number" required=true />
            </div>
            <div class="form__row">
                <SelectField
                    label="Contract term"
                    value=contract_term
                    on_change=set_contract_term
                    options=plain_options(TERMS)
                    placeholder="Select term"
                    required=true
                />
                <TextField
                    label="Estimated deal value (USD)"
                    value=deal_value
                    on_input=set_deal_value
                    input_type="number"
                    required=true
                />
            </div>
            <div class="form__row">
                <SelectField
                    label="Region"
                    value=region
                    on_change=set_region
                    options=plain_options(REGIONS)
                    placeholder="Select region"
                    required=true
                />
                <TextField
                    label="Expected close date"
                    value=close_date
                    on_input=set_close_date
                    input_type="date"
                    required=true
                />
            </div>

            <h3 class="form__section-title">"Additional details"</h3>
            <TextAreaField label="Use case" value=use_case on_input=set_use_case />
            <TextField label="Competitor" value=competitor on_input=set_competitor />
            <SelectField
                label="Expansion potential"
                value=expansion
                on_change=set_expansion
                options=plain_options(EXPANSION_OPTIONS)
                placeholder="Not specified"
            />
            <TextAreaField label="Notes" value=notes on_input=set_notes rows=4 />

            <div class="form__actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| submit()
                    disabled=Signal::derive(move || submitting.get())
                >
                    {move || if submitting.get() { "Submitting..." } else { "Submit Registration" }}
                </Button>
            </div>
        </ModalFrame>
    }
}
