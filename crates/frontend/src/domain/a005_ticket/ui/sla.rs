use crate::shared::icons::icon;
use contracts::domain::a005_ticket::aggregate::Sla;
use leptos::prelude::*;

#[component]
pub fn SlaSection(sla: Sla) -> impl IntoView {
    let groups = sla
        .grouped()
        .into_iter()
        .map(|(category, rows)| (category.to_string(), rows.into_iter().cloned().collect::<Vec<_>>()))
        .collect::<Vec<_>>();

    view! {
        <section class="card">
            <div class="card__header">
                {icon("clock")}
                <h2 class="card__title">"Service Levels"</h2>
            </div>
            <div class="text-muted">{format!("Business hours: {}", sla.business_hours)}</div>
            <table class="simple-table">
                <thead>
                    <tr>
                        <th>"Category"</th>
                        <th>"Priority"</th>
                        <th>"First response"</th>
                        <th>"Resolution"</th>
                    </tr>
                </thead>
                <tbody>
                    {groups.into_iter().map(|(category, rows)| {
                        let span = rows.len().to_string();
                        rows.into_iter().enumerate().map(|(i, row)| view! {
                            <tr>
                                {(i == 0).then(|| view! {
                                    <td rowspan=span.clone()><strong>{category.clone()}</strong></td>
                                })}
                                <td>{row.priority}</td>
                                <td>{row.response_time}</td>
                                <td>{row.resolution_time}</td>
                            </tr>
                        }).collect_view()
                    }).collect_view()}
                </tbody>
            </table>
            <div class="warning-box warning-box--info">
                <span class="warning-box__icon">{icon("alert-triangle")}</span>
                <span class="warning-box__text">{sla.escalation.clone()}</span>
            </div>
        </section>
    }
}
