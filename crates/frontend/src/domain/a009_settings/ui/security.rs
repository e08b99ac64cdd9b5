use super::{report_save, FormErrors};
use crate::domain::a009_settings::api;
use crate::shared::components::ui::form_field::{CheckboxField, TextField};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::system::auth::context::{handle_api_error, use_auth};
use contracts::domain::a009_settings::{AuthProvider, SecurityForm, SecuritySettings, SessionInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn SecuritySection(
    security: SecuritySettings,
    provider: AuthProvider,
    set_notice: WriteSignal<Option<String>>,
) -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let form = RwSignal::new(SecurityForm {
        mfa_enabled: security.mfa_enabled,
        ..SecurityForm::default()
    });
    let sessions = RwSignal::new(security.active_sessions.clone());
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (saving, set_saving) = signal(false);
    let manages_password = provider.manages_password();
    let provider_label = provider.display_label().to_string();

    let save = move || {
        let current = form.get_untracked();
        if let Err(e) = current.validate(&provider) {
            set_errors.set(e.errors);
            return;
        }
        set_saving.set(true);
        spawn_local(async move {
            let result = api::save_security(&current).await.map(|ack| ack.message);
            if result.is_ok() {
                form.update(|f| *f = f.cleared());
            }
            report_save(result, set_notice, set_errors);
            set_saving.set(false);
        });
    };

    let revoke = move |session_id: String| {
        spawn_local(async move {
            match api::revoke_session(&session_id).await {
                Ok(ack) => {
                    sessions.update(|s| s.retain(|x| x.id != session_id));
                    set_notice.set(Some(ack.message));
                }
                Err(e) => {
                    handle_api_error(&e, set_auth_state);
                    set_errors.set(vec![e]);
                }
            }
        });
    };

    let (current_password, set_current_password) = crate::bind_field!(form, current_password);
    let (new_password, set_new_password) = crate::bind_field!(form, new_password);
    let (confirm_password, set_confirm_password) = crate::bind_field!(form, confirm_password);
    let mfa = Signal::derive(move || form.with(|f| f.mfa_enabled));
    let set_mfa = Callback::new(move |v: bool| form.update(|f| f.mfa_enabled = v));

    view! {
        <section class="card">
            <h2 class="card__title">"Security"</h2>
            <p class="text-muted">{format!("Last login {}", format_datetime(&security.last_login))}</p>
            <FormErrors errors=errors />

            {if manages_password {
                view! {
                    <h3 class="form__section-title">"Change password"</h3>
                    <TextField
                        label="Current password"
                        value=current_password
                        on_input=set_current_password
                        input_type="password"
                    />
                    <div class="form__row">
                        <TextField label="New password" value=new_password on_input=set_new_password input_type="password" />
                        <TextField
                            label="Confirm new password"
                            value=confirm_password
                            on_input=set_confirm_password
                            input_type="password"
                        />
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <div class="warning-box warning-box--info">
                        <span class="warning-box__icon">{icon("shield")}</span>
                        <span class="warning-box__text">
                            {format!("Your password is managed by {}.", provider_label)}
                        </span>
                    </div>
                }
                .into_any()
            }}

            <CheckboxField
                label="Two-factor authentication"
                checked=mfa
                on_change=set_mfa
                description="Require a verification code at sign in"
            />

            <div class="form__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| save()
                    disabled=Signal::derive(move || saving.get())
                >
                    "Save Security Settings"
                </Button>
            </div>

            <h3 class="form__section-title">"Active sessions"</h3>
            <ul class="session-list">
                <For
                    each=move || sessions.get()
                    key=|s: &SessionInfo| s.id.clone()
                    children=move |s: SessionInfo| {
                        let id = s.id.clone();
                        view! {
                            <li class="session-list__item">
                                <div>
                                    <strong>{s.device}</strong>
                                    <div class="text-muted">
                                        {format!("{} · {}", s.location, format_datetime(&s.last_active))}
                                    </div>
                                </div>
                                {if s.current {
                                    view! { <span class="badge badge--success">"This device"</span> }.into_any()
                                } else {
                                    view! {
                                        <button
                                            class="button button--ghost button--small"
                                            on:click=move |_| revoke(id.clone())
                                        >
                                            "Revoke"
                                        </button>
                                    }
                                    .into_any()
                                }}
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
