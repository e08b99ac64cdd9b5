use super::{report_save, FormErrors};
use crate::domain::a009_settings::api;
use crate::shared::components::ui::form_field::{pair_options, SelectField, TextField};
use contracts::domain::a009_settings::{AccountForm, UserSettings, LANGUAGES, TIMEZONES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn AccountSection(user: UserSettings, set_notice: WriteSignal<Option<String>>) -> impl IntoView {
    let form = RwSignal::new(AccountForm::from_user(&user));
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (saving, set_saving) = signal(false);

    let save = move || {
        let current = form.get_untracked();
        if let Err(e) = current.validate() {
            set_errors.set(e.errors);
            return;
        }
        set_saving.set(true);
        spawn_local(async move {
            let result = api::save_account(&current).await.map(|ack| ack.message);
            report_save(result, set_notice, set_errors);
            set_saving.set(false);
        });
    };

    let (name, set_name) = crate::bind_field!(form, name);
    let (email, set_email) = crate::bind_field!(form, email);
    let (phone, set_phone) = crate::bind_field!(form, phone);
    let (timezone, set_timezone) = crate::bind_field!(form, timezone);
    let (language, set_language) = crate::bind_field!(form, language);

    view! {
        <section class="card">
            <h2 class="card__title">"Account"</h2>
            <p class="text-muted">{format!("Signed in with {}", user.auth_provider.display_label())}</p>
            <FormErrors errors=errors />
            <div class="form__row">
                <TextField label="Full name" value=name on_input=set_name required=true />
                <TextField label="Email" value=email on_input=set_email input_type="email" required=true />
            </div>
            <TextField label="Phone" value=phone on_input=set_phone input_type="tel" />
            <div class="form__row">
                <SelectField label="Timezone" value=timezone on_change=set_timezone options=pair_options(TIMEZONES) />
                <SelectField label="Language" value=language on_change=set_language options=pair_options(LANGUAGES) />
            </div>
            <div class="form__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| save()
                    disabled=Signal::derive(move || saving.get())
                >
                    "Save Changes"
                </Button>
            </div>
        </section>
    }
}
