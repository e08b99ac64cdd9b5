use super::{report_save, FormErrors};
use crate::domain::a009_settings::api;
use crate::shared::components::ui::form_field::{pair_options, CheckboxField, SelectField};
use contracts::domain::a009_settings::NotificationSettings;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

macro_rules! bind_flag {
    ($form:ident, $field:ident) => {
        (
            Signal::derive(move || $form.with(|f| f.$field)),
            Callback::new(move |v: bool| $form.update(|f| f.$field = v)),
        )
    };
}

#[component]
pub fn NotificationsSection(
    settings: NotificationSettings,
    set_notice: WriteSignal<Option<String>>,
) -> impl IntoView {
    let form = RwSignal::new(settings);
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (saving, set_saving) = signal(false);

    let save = move || {
        let current = form.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            let result = api::save_notifications(&current).await.map(|ack| ack.message);
            report_save(result, set_notice, set_errors);
            set_saving.set(false);
        });
    };

    let (deal_updates, set_deal_updates) = bind_flag!(form, deal_updates);
    let (conflict_alerts, set_conflict_alerts) = bind_flag!(form, conflict_alerts);
    let (quote_approvals, set_quote_approvals) = bind_flag!(form, quote_approvals);
    let (commission_updates, set_commission_updates) = bind_flag!(form, commission_updates);
    let (support_tickets, set_support_tickets) = bind_flag!(form, support_tickets);
    let (announcements, set_announcements) = crate::bind_field!(form, announcements);
    let (email_digest, set_email_digest) = crate::bind_field!(form, email_digest);

    view! {
        <section class="card">
            <h2 class="card__title">"Notifications"</h2>
            <FormErrors errors=errors />
            <CheckboxField
                label="Deal updates"
                checked=deal_updates
                on_change=set_deal_updates
                description="Stage changes and approvals on your registered deals"
            />
            <CheckboxField
                label="Conflict alerts"
                checked=conflict_alerts
                on_change=set_conflict_alerts
                description="Another partner registered the same account"
            />
            <CheckboxField label="Quote approvals" checked=quote_approvals on_change=set_quote_approvals />
            <CheckboxField label="Commission updates" checked=commission_updates on_change=set_commission_updates />
            <CheckboxField label="Support tickets" checked=support_tickets on_change=set_support_tickets />
            <div class="form__row">
                <SelectField
                    label="Announcements"
                    value=announcements
                    on_change=set_announcements
                    options=pair_options(NotificationSettings::ANNOUNCEMENT_LEVELS)
                />
                <SelectField
                    label="Email digest"
                    value=email_digest
                    on_change=set_email_digest
                    options=pair_options(NotificationSettings::DIGEST_OPTIONS)
                />
            </div>
            <div class="form__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| save()
                    disabled=Signal::derive(move || saving.get())
                >
                    "Save Preferences"
                </Button>
            </div>
        </section>
    }
}
