use crate::shared::components::table::FilterSelect;
use crate::shared::date_utils::now;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::domain::a005_ticket::KbArticle;
use contracts::shared::table_view::{distinct_values, filter_records, TableState, ViewContext};
use leptos::prelude::*;

/// Knowledge base: search over title and summary plus a category dropdown.
/// Uses the same filter state as the tables, without paging.
#[component]
pub fn KnowledgeBase(#[prop(into)] articles: Signal<Vec<KbArticle>>) -> impl IntoView {
    let state = RwSignal::new(TableState::default());
    let (open_id, set_open_id) = signal(None::<String>);

    let categories = Signal::derive(move || {
        articles.with(|a| {
            distinct_values(a, "category")
                .into_iter()
                .map(|c| (c.clone(), c))
                .collect::<Vec<_>>()
        })
    });

    let visible = Memo::new(move |_| {
        let ctx = ViewContext::at(now());
        articles.with(|a| {
            state.with(|s| filter_records(a, s, &[], &ctx).into_iter().cloned().collect::<Vec<_>>())
        })
    });

    view! {
        <section class="card">
            <div class="card__header">
                {icon("book-open")}
                <h2 class="card__title">"Knowledge Base"</h2>
            </div>
            <div class="kb__filters">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.filters.search.clone()))
                    on_change=Callback::new(move |q: String| state.update(|s| s.set_search(q)))
                    placeholder="Search articles..."
                />
                <FilterSelect label="Category" field="category" options=categories state=state />
            </div>

            <Show
                when=move || !visible.with(|v| v.is_empty())
                fallback=|| view! { <div class="text-muted">"No articles match your search."</div> }
            >
                <ul class="kb__list">
                    <For
                        each=move || visible.get()
                        key=|a| a.id.clone()
                        children=move |article| {
                            let id = article.id.clone();
                            let toggle_id = id.clone();
                            let is_open = move || open_id.get().as_deref() == Some(id.as_str());
                            view! {
                                <li class="kb__item">
                                    <button
                                        class="kb__title"
                                        on:click=move |_| {
                                            let id = toggle_id.clone();
                                            set_open_id.update(|cur| {
                                                *cur = if cur.as_deref() == Some(id.as_str()) { None } else { Some(id) };
                                            })
                                        }
                                    >
                                        {article.title.clone()}
                                    </button>
                                    <span class="badge badge--neutral">{article.category.clone()}</span>
                                    <p class="text-muted">{article.summary.clone()}</p>
                                    <Show when=is_open.clone()>
                                        <div class="kb__content">{article.content.clone()}</div>
                                        <ul class="kb__links">
                                            {article.related_links.iter().map(|l| view! {
                                                <li><a href=l.clone() target="_blank" rel="noopener">{l.clone()}</a></li>
                                            }).collect_view()}
                                        </ul>
                                    </Show>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
