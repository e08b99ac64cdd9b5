mod card;

use self::card::AnnouncementCard;
use crate::domain::a006_announcement::api;
use crate::shared::components::page_header::ErrorBox;
use crate::shared::components::table::preset_tabs::PresetTabs;
use crate::shared::date_utils::now;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_CUSTOM};
use crate::system::auth::context::{handle_api_error, use_auth};
use contracts::domain::a006_announcement::feed::{category_counts, feed_items, initial_state, PRESETS};
use contracts::domain::a006_announcement::{Announcement, AnnouncementsData};
use contracts::shared::table_view::{ViewContext, ALL};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AnnouncementsPage() -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let (data, set_data) = signal(None::<AnnouncementsData>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let state = RwSignal::new(initial_state());
    let ctx = Signal::derive(move || ViewContext::at(now()));

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_announcements().await {
                Ok(d) => set_data.set(Some(d)),
                Err(e) => {
                    log::error!("Failed to load announcements: {}", e);
                    handle_api_error(&e, set_auth_state);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let announcements = Signal::derive(move || {
        data.with(|d| d.as_ref().map(|d| d.announcements.clone()).unwrap_or_default())
    });
    let pinned = Signal::derive(move || {
        data.with(|d| d.as_ref().map(|d| d.pinned_announcements.clone()).unwrap_or_default())
    });

    let items = Memo::new(move |_| {
        announcements.with(|all| {
            state.with(|s| {
                ctx.with(|ctx| feed_items(all, s, ctx).into_iter().cloned().collect::<Vec<Announcement>>())
            })
        })
    });

    // (id, name, count), первым идёт "All"
    let category_chips = Memo::new(move |_| {
        data.with(|d| {
            let Some(d) = d else { return Vec::new() };
            let counts = category_counts(&d.announcements, &d.categories);
            let mut chips = vec![(ALL.to_string(), "All".to_string(), d.announcements.len())];
            chips.extend(d.categories.iter().map(|c| {
                (c.id.clone(), c.name.clone(), counts.get(&c.id).copied().unwrap_or(0))
            }));
            chips
        })
    });

    let category_name = move |id: &str| {
        data.with_untracked(|d| {
            d.as_ref()
                .and_then(|d| d.category(id))
                .map(|c| c.name.clone())
                .unwrap_or_else(|| id.to_string())
        })
    };

    view! {
        <PageFrame page_id="a006_announcement--page" category=PAGE_CAT_CUSTOM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Announcements"</h1>
                </div>
            </div>

            <div class="page__content">
                <ErrorBox error=error />

                <Show when=move || !pinned.with(|p| p.is_empty())>
                    <section class="pinned">
                        <h2 class="card__subtitle">{icon("pin")}" Pinned"</h2>
                        <For
                            each=move || pinned.get()
                            key=|a| a.id.clone()
                            children=move |a| {
                                let name = category_name(&a.category);
                                view! { <AnnouncementCard announcement=a category_name=name pinned=true /> }
                            }
                        />
                    </section>
                </Show>

                <div class="announcements__toolbar">
                    <PresetTabs records=announcements presets=PRESETS state=state ctx=ctx />
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.filters.search.clone()))
                        on_change=Callback::new(move |q: String| state.update(|s| s.set_search(q)))
                        placeholder="Search announcements..."
                    />
                </div>

                <div class="chip-group">
                    <For
                        each=move || category_chips.get()
                        key=|(id, _, n)| format!("{}:{}", id, n)
                        children=move |(id, name, count)| {
                            let selected_id = id.clone();
                            let is_active = move || state.with(|s| s.filters.categorical("category") == selected_id);
                            view! {
                                <button
                                    class="chip"
                                    class:chip--active=is_active
                                    on:click=move |_| state.update(|s| s.set_categorical("category", id.clone()))
                                >
                                    {name}
                                    <span class="chip__count">{count}</span>
                                </button>
                            }
                        }
                    />
                </div>

                <Show
                    when=move || !items.with(|i| i.is_empty())
                    fallback=move || view! {
                        <div class="empty-state">
                            <div class="empty-state__message">
                                {move || if loading.get() { "Loading..." } else { "No announcements found." }}
                            </div>
                        </div>
                    }
                >
                    <For
                        each=move || items.get()
                        key=|a| a.id.clone()
                        children=move |a| {
                            let name = category_name(&a.category);
                            view! { <AnnouncementCard announcement=a category_name=name /> }
                        }
                    />
                </Show>
            </div>
        </PageFrame>
    }
}
