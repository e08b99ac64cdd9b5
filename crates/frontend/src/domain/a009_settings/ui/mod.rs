mod account;
mod notifications;
mod organization;
mod security;

use self::account::AccountSection;
use self::notifications::NotificationsSection;
use self::organization::OrganizationSection;
use self::security::SecuritySection;
use crate::domain::a009_settings::api;
use crate::shared::components::page_header::{ErrorBox, NoticeBox};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::auth::context::{handle_api_error, use_auth};
use contracts::domain::a009_settings::{SettingsData, SettingsTab};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

fn tab_label(tab: SettingsTab) -> &'static str {
    match tab {
        SettingsTab::Account => "Account",
        SettingsTab::Notifications => "Notifications",
        SettingsTab::Security => "Security",
        SettingsTab::Organization => "Organization",
    }
}

/// Результат сохранения любой формы настроек
pub(crate) fn report_save(
    result: Result<String, String>,
    set_notice: WriteSignal<Option<String>>,
    set_errors: WriteSignal<Vec<String>>,
) {
    match result {
        Ok(message) => {
            set_errors.set(Vec::new());
            set_notice.set(Some(message));
        }
        Err(e) => {
            set_notice.set(None);
            set_errors.set(vec![e]);
        }
    }
}

/// Validation errors of one form.
#[component]
pub(crate) fn FormErrors(#[prop(into)] errors: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <Show when=move || !errors.with(|e| e.is_empty())>
            <div class="warning-box warning-box--error">
                <ul class="form__errors">
                    {move || errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                </ul>
            </div>
        </Show>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let query = use_query_map();
    let (data, set_data) = signal(None::<SettingsData>);
    let (error, set_error) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_settings().await {
                Ok(d) => set_data.set(Some(d)),
                Err(e) => {
                    log::error!("Failed to load settings: {}", e);
                    handle_api_error(&e, set_auth_state);
                    set_error.set(Some(e));
                }
            }
        });
    });

    let active_tab = Memo::new(move |_| {
        let key = query.with(|q| q.get("tab"));
        data.with(|d| match d {
            Some(d) => SettingsTab::resolve(key.as_deref(), &d.organization),
            None => SettingsTab::Account,
        })
    });

    // уведомление от прошлой вкладки не переносится
    Effect::new(move |_| {
        active_tab.track();
        set_notice.set(None);
    });

    let tabs = Memo::new(move |_| {
        data.with(|d| d.as_ref().map(|d| SettingsTab::available(&d.organization)).unwrap_or_default())
    });

    view! {
        <PageFrame page_id="a009_settings--page" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Settings"</h1>
                </div>
            </div>

            <div class="page__content">
                <ErrorBox error=error />
                <NoticeBox message=notice />

                <nav class="preset-tabs" role="tablist">
                    {move || tabs.get().into_iter().map(|tab| view! {
                        <A
                            href=format!("/settings?tab={}", tab.key())
                            attr:class=move || if active_tab.get() == tab {
                                "preset-tabs__tab preset-tabs__tab--active"
                            } else {
                                "preset-tabs__tab"
                            }
                        >
                            {tab_label(tab)}
                        </A>
                    }).collect_view()}
                </nav>

                {move || data.get().map(|d| match active_tab.get() {
                    SettingsTab::Account => view! {
                        <AccountSection user=d.user set_notice=set_notice />
                    }
                    .into_any(),
                    SettingsTab::Notifications => view! {
                        <NotificationsSection settings=d.notifications set_notice=set_notice />
                    }
                    .into_any(),
                    SettingsTab::Security => view! {
                        <SecuritySection
                            security=d.security
                            provider=d.user.auth_provider
                            set_notice=set_notice
                        />
                    }
                    .into_any(),
                    SettingsTab::Organization => view! {
                        <OrganizationSection organization=d.organization />
                    }
                    .into_any(),
                })}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_labels() {
        assert_eq!(tab_label(SettingsTab::Security), "Security");
        assert_eq!(tab_label(SettingsTab::Organization), "Organization");
    }
}
