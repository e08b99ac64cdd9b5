use crate::shared::components::ui::Badge;
use crate::shared::date_utils::{format_date, now};
use crate::shared::icons::icon;
use contracts::domain::a006_announcement::feed::relative_date_label;
use contracts::domain::a006_announcement::Announcement;
use contracts::shared::text::to_slug;
use leptos::prelude::*;

#[component]
pub fn AnnouncementCard(
    announcement: Announcement,
    category_name: String,
    #[prop(optional)] pinned: bool,
) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let a = announcement;
    let anchor = to_slug(&a.title);
    let when = relative_date_label(&a.date, now());

    // Блоки "что изменилось / зачем / что говорить"
    let talking_points: Vec<(&'static str, String)> = [
        ("What changed", a.what_changed.clone()),
        ("Why it matters", a.why_it_matters.clone()),
        ("What to say to customers", a.what_to_say.clone()),
    ]
    .into_iter()
    .filter_map(|(label, text)| text.map(|t| (label, t)))
    .collect();

    let event = a.event_date.clone().map(|date| {
        let mut line = format_date(&date);
        if let Some(time) = &a.event_time {
            line.push_str(&format!(" {}", time));
        }
        if let Some(place) = &a.event_location {
            line.push_str(&format!(" · {}", place));
        }
        line
    });

    view! {
        <article id=anchor class="announcement" class:announcement--pinned=pinned>
            <header class="announcement__header">
                <div class="announcement__meta">
                    <Badge variant="neutral".to_string()>{category_name}</Badge>
                    <span class="text-muted">{when}</span>
                    {a.action_required.then(|| view! {
                        <Badge variant="warning".to_string()>"Action required"</Badge>
                    })}
                </div>
                <h3 class="announcement__title">{a.title.clone()}</h3>
                <p class="announcement__summary">{a.summary.clone()}</p>
            </header>

            <button class="button button--ghost button--small" on:click=move |_| expanded.update(|e| *e = !*e)>
                {move || if expanded.get() { "Show less" } else { "Read more" }}
                {icon("chevron-down")}
            </button>

            <Show when=move || expanded.get()>
                <div class="announcement__body">
                    <p>{a.content.clone()}</p>
                    {talking_points.iter().map(|(label, text)| view! {
                        <div class="announcement__point">
                            <div class="announcement__point-label">{*label}</div>
                            <div>{text.clone()}</div>
                        </div>
                    }).collect_view()}
                    {a.action_text.clone().map(|t| view! {
                        <div class="warning-box warning-box--warning">
                            <span class="warning-box__text">{t}</span>
                        </div>
                    })}
                    {event.clone().map(|e| view! {
                        <div class="announcement__event">{icon("calendar")}{e}</div>
                    })}
                    {a.effective_date.clone().map(|d| view! {
                        <div class="text-muted">{format!("Effective {}", format_date(&d))}</div>
                    })}
                    {(!a.applies_to.is_empty()).then(|| view! {
                        <div class="text-muted">{format!("Applies to: {}", a.applies_to.join(", "))}</div>
                    })}
                    <div class="announcement__links">
                        {a.registration_link.clone().map(|l| view! {
                            <a href=l target="_blank" rel="noopener">{icon("external-link")}" Register"</a>
                        })}
                        {a.resource_link.clone().map(|l| view! {
                            <a href=l target="_blank" rel="noopener">{icon("external-link")}" Learn more"</a>
                        })}
                    </div>
                    <div class="announcement__footer">
                        <span class="text-muted">{format!("{} · {}", a.author, format_date(&a.date))}</span>
                        <span class="announcement__tags">
                            {a.tags.iter().map(|t| view! { <span class="tag">{format!("#{}", t)}</span> }).collect_view()}
                        </span>
                    </div>
                </div>
            </Show>
        </article>
    }
}
