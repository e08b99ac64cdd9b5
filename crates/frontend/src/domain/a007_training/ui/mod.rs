use crate::domain::a007_training::api;
use crate::shared::components::page_header::ErrorBox;
use crate::shared::components::stat_card::SummaryCards;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::{format_date, format_opt_date};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_CUSTOM};
use crate::system::auth::context::{handle_api_error, use_auth};
use contracts::domain::a007_training::aggregate::EarnedBadge;
use contracts::domain::a007_training::summary::summary;
use contracts::domain::a007_training::{TrackStatus, TrainingData, TrainingModule, TrainingTrack};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn track_status_variant(status: &TrackStatus) -> &'static str {
    match status {
        TrackStatus::Completed => "success",
        TrackStatus::InProgress => "primary",
        _ => "neutral",
    }
}

fn module_type_icon(module_type: &str) -> &'static str {
    match module_type {
        "video" => "eye",
        "assessment" | "quiz" => "check-circle",
        _ => "book-open",
    }
}

fn metric_icon(id: &str) -> &'static str {
    match id {
        "certifications" => "award",
        "in_progress" => "clock",
        "modules_completed" => "book-open",
        _ => "activity",
    }
}

#[component]
fn ModuleRow(module: TrainingModule) -> impl IntoView {
    view! {
        <li class="module-row">
            <span class="module-row__icon">{icon(module_type_icon(&module.module_type))}</span>
            <div class="module-row__body">
                <div class="module-row__title">
                    {module.title}
                    {module.required_for_tier.then(|| view! {
                        <Badge variant="warning".to_string()>"Required"</Badge>
                    })}
                </div>
                <div class="text-muted">{module.description}</div>
                {(!module.objectives.is_empty()).then(|| view! {
                    <ul class="module-row__objectives">
                        {module.objectives.iter().map(|o| view! { <li>{o.clone()}</li> }).collect_view()}
                    </ul>
                })}
            </div>
            <div class="module-row__meta">
                <span class="text-muted">{module.duration}</span>
                <Badge variant=track_status_variant(&module.status).to_string()>
                    {module.status.display_label().to_string()}
                </Badge>
            </div>
        </li>
    }
}

#[component]
fn TrackCard(track: TrainingTrack) -> impl IntoView {
    let open = RwSignal::new(track.starts_open());
    let progress = track.progress_percent();
    let counter = format!("{} / {} modules", track.completed_modules(), track.modules.len());
    let modules = track.modules.clone();

    view! {
        <div class="track-card">
            <button class="track-card__header" on:click=move |_| open.update(|o| *o = !*o)>
                <div class="track-card__title">
                    {icon("award")}
                    <strong>{track.title.clone()}</strong>
                    {track.required_for_tier.then(|| view! {
                        <Badge variant="warning".to_string()>"Required for tier"</Badge>
                    })}
                </div>
                <Badge variant=track_status_variant(&track.status).to_string()>
                    {track.status.display_label().to_string()}
                </Badge>
            </button>
            <p class="text-muted">{track.description.clone()}</p>
            <div class="progress">
                <div class="progress__bar" style=format!("width: {:.0}%;", progress)></div>
            </div>
            <div class="track-card__meta">
                <span>{counter}</span>
                {track.completed_date.clone().map(|d| view! {
                    <span class="text-muted">{format!("Completed {}", format_date(&d))}</span>
                })}
                {track.expiry_date.clone().map(|d| view! {
                    <span class="text-muted">{format!("Expires {}", format_date(&d))}</span>
                })}
            </div>
            <Show when=move || open.get()>
                <ul class="module-list">
                    {modules.iter().cloned().map(|m| view! { <ModuleRow module=m /> }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}

#[component]
fn BadgeShelf(badges: Vec<EarnedBadge>) -> impl IntoView {
    view! {
        <section class="card">
            <div class="card__header">
                {icon("award")}
                <h2 class="card__title">"Earned Badges"</h2>
            </div>
            {if badges.is_empty() {
                view! { <div class="text-muted">"Complete a track to earn your first badge."</div> }.into_any()
            } else {
                view! {
                    <div class="badge-shelf">
                        {badges.into_iter().map(|b| view! {
                            <div class="badge-shelf__item">
                                <div class="badge-shelf__icon">{icon("award")}</div>
                                <div class="badge-shelf__name">{b.name}</div>
                                <div class="text-muted">{b.track}</div>
                                <div class="text-muted">{format!("Earned {}", format_date(&b.earned_date))}</div>
                                <div class="text-muted">{format!("Expires {}", format_opt_date(b.expiry_date.as_deref()))}</div>
                            </div>
                        }).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </section>
    }
}

#[component]
pub fn TrainingPage() -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let (data, set_data) = signal(None::<TrainingData>);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_training().await {
                Ok(d) => set_data.set(Some(d)),
                Err(e) => {
                    log::error!("Failed to load training: {}", e);
                    handle_api_error(&e, set_auth_state);
                    set_error.set(Some(e));
                }
            }
        });
    });

    let metrics = Memo::new(move |_| data.with(|d| d.as_ref().map(summary).unwrap_or_default()));

    view! {
        <PageFrame page_id="a007_training--page" category=PAGE_CAT_CUSTOM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Training & Certification"</h1>
                </div>
            </div>

            <div class="page__content">
                <ErrorBox error=error />
                <SummaryCards metrics=metrics icon_for=metric_icon />

                {move || data.get().map(|d| {
                    let next = d.partner_progress.next_tier_requirement.clone();
                    view! {
                        <div class="warning-box warning-box--info">
                            <span class="warning-box__icon">{icon("trending-up")}</span>
                            <span class="warning-box__text">{next}</span>
                        </div>

                        <section class="card">
                            <div class="card__header">
                                {icon("book-open")}
                                <h2 class="card__title">"Learning Tracks"</h2>
                            </div>
                            {d.tracks.into_iter().map(|t| view! { <TrackCard track=t /> }).collect_view()}
                        </section>

                        <BadgeShelf badges=d.earned_badges />
                    }
                })}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_icons_and_badges() {
        assert_eq!(module_type_icon("video"), "eye");
        assert_eq!(module_type_icon("reading"), "book-open");
        assert_eq!(track_status_variant(&TrackStatus::Other("paused".into())), "neutral");
    }
}
