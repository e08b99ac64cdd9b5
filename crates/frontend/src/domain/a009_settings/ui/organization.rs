use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use contracts::domain::a009_settings::OrganizationSettings;
use leptos::prelude::*;

fn user_status_variant(status: &str) -> &'static str {
    match status {
        "Active" => "success",
        "Invited" => "warning",
        _ => "neutral",
    }
}

/// Read-only view of the partner organization and its users.
#[component]
pub fn OrganizationSection(organization: OrganizationSettings) -> impl IntoView {
    let OrganizationSettings {
        company_name,
        tier,
        partner_id,
        regions,
        users,
        ..
    } = organization;

    view! {
        <section class="card">
            <div class="card__header">
                {icon("building")}
                <h2 class="card__title">{company_name}</h2>
            </div>
            <dl class="details-list">
                <dt class="details-list__label">"Partner ID"</dt>
                <dd class="details-list__value text-mono">{partner_id}</dd>
                <dt class="details-list__label">"Tier"</dt>
                <dd class="details-list__value">{tier}</dd>
                <dt class="details-list__label">"Regions"</dt>
                <dd class="details-list__value">{regions.join(", ")}</dd>
            </dl>

            <h3 class="form__section-title">{format!("Users ({})", users.len())}</h3>
            <table class="simple-table">
                <thead>
                    <tr><th>"Name"</th><th>"Email"</th><th>"Role"</th><th>"Status"</th></tr>
                </thead>
                <tbody>
                    {users.into_iter().map(|u| view! {
                        <tr>
                            <td><strong>{u.name}</strong></td>
                            <td>{u.email}</td>
                            <td>{u.role}</td>
                            <td>
                                <Badge variant=user_status_variant(&u.status).to_string()>{u.status.clone()}</Badge>
                            </td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::user_status_variant;

    #[test]
    fn status_badges() {
        assert_eq!(user_status_variant("Invited"), "warning");
        assert_eq!(user_status_variant("Inactive"), "neutral");
    }
}
