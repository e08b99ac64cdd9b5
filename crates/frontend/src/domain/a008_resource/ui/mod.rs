use crate::domain::a008_resource::api;
use crate::shared::components::page_header::ErrorBox;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_opt_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_CUSTOM};
use crate::system::auth::context::{handle_api_error, use_auth};
use contracts::domain::a008_resource::{Resource, ResourceCategory, ResourcesData};
use contracts::shared::table_view::ALL;
use contracts::shared::text::to_slug;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn resource_icon(resource_type: &str) -> &'static str {
    match resource_type.to_lowercase().as_str() {
        "video" | "recording" => "eye",
        "guide" | "playbook" => "book-open",
        _ => "file-text",
    }
}

#[component]
fn ResourceCard(resource: Resource) -> impl IntoView {
    let updated = format_opt_date(resource.updated_at.as_deref().or(resource.date.as_deref()));
    let type_icon = resource_icon(&resource.resource_type);

    view! {
        <div class="resource-card">
            <div class="resource-card__header">
                {icon(type_icon)}
                <strong class="resource-card__title">{resource.title}</strong>
            </div>
            <p class="text-muted">{resource.description}</p>
            {(!resource.highlights.is_empty()).then(|| view! {
                <ul class="resource-card__highlights">
                    {resource.highlights.iter().map(|h| view! { <li>{h.clone()}</li> }).collect_view()}
                </ul>
            })}
            <div class="resource-card__meta">
                <Badge variant="neutral".to_string()>{resource.resource_type.clone()}</Badge>
                {resource.format.map(|f| view! { <span class="text-muted">{f}</span> })}
                {resource.duration.map(|d| view! { <span class="text-muted">{d}</span> })}
                <span class="text-muted">{format!("Updated {}", updated)}</span>
            </div>
            <a class="button button--secondary button--small" href=resource.download_url target="_blank" rel="noopener">
                {icon("download")}
                " Open"
            </a>
        </div>
    }
}

/// Enablement library: one tab per category plus "All", search across
/// title, description and type.
#[component]
pub fn ResourcesPage() -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let (data, set_data) = signal(ResourcesData::default());
    let (error, set_error) = signal(None::<String>);
    let (tab, set_tab) = signal(ALL.to_string());
    let (query, set_query) = signal(String::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_resources().await {
                Ok(d) => set_data.set(d),
                Err(e) => {
                    log::error!("Failed to load resources: {}", e);
                    handle_api_error(&e, set_auth_state);
                    set_error.set(Some(e));
                }
            }
        });
    });

    let sections = Memo::new(move |_| {
        data.with(|d| {
            tab.with(|t| {
                query.with(|q| {
                    d.sections(t, q)
                        .into_iter()
                        .map(|(c, items)| (c, items.into_iter().cloned().collect::<Vec<_>>()))
                        .collect::<Vec<_>>()
                })
            })
        })
    });

    let mut tabs = vec![(ALL, "All")];
    tabs.extend(ResourceCategory::ALL.iter().map(|c| (c.key(), c.tab_label())));

    view! {
        <PageFrame page_id="a008_resource--page" category=PAGE_CAT_CUSTOM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Enablement Resources"</h1>
                    <Badge variant="primary".to_string()>{move || data.with(|d| d.total()).to_string()}</Badge>
                </div>
            </div>

            <div class="page__content">
                <ErrorBox error=error />

                <div class="announcements__toolbar">
                    <div class="preset-tabs" role="tablist">
                        {tabs.into_iter().map(|(key, label)| view! {
                            <button
                                role="tab"
                                class="preset-tabs__tab"
                                class:preset-tabs__tab--active=move || tab.get() == key
                                on:click=move |_| set_tab.set(key.to_string())
                            >
                                {label}
                            </button>
                        }).collect_view()}
                    </div>
                    <SearchInput
                        value=query
                        on_change=Callback::new(move |q: String| set_query.set(q))
                        placeholder="Search resources..."
                    />
                </div>

                <Show
                    when=move || !sections.with(|s| s.is_empty())
                    fallback=|| view! {
                        <div class="empty-state">
                            <div class="empty-state__message">"No resources match your search."</div>
                        </div>
                    }
                >
                    <For
                        each=move || sections.get()
                        key=|(c, items)| format!("{}:{}", c.key(), items.len())
                        children=|(category, items)| view! {
                            <section class="card" id=to_slug(category.title())>
                                <div class="card__header">
                                    <h2 class="card__title">{category.title()}</h2>
                                </div>
                                <p class="text-muted">{category.description()}</p>
                                <div class="resource-grid">
                                    {items.into_iter().map(|r| view! { <ResourceCard resource=r /> }).collect_view()}
                                </div>
                            </section>
                        }
                    />
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::resource_icon;

    #[test]
    fn icon_by_type() {
        assert_eq!(resource_icon("Video"), "eye");
        assert_eq!(resource_icon("Playbook"), "book-open");
        assert_eq!(resource_icon("PDF"), "file-text");
    }
}
