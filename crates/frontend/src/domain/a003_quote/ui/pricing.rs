use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use contracts::domain::a003_quote::pricing::{DiscountRules, Pricing};
use leptos::prelude::*;

#[component]
pub fn PricingSection(pricing: Pricing) -> impl IntoView {
    let Pricing { overview, plans, factors } = pricing;

    view! {
        <section class="card">
            <div class="card__header">
                {icon("dollar-sign")}
                <h2 class="card__title">{overview.title}</h2>
            </div>
            <p class="text-muted">{overview.description}</p>
            <p class="pricing__model">{overview.pricing_model}</p>

            <div class="plan-grid">
                {plans.into_iter().map(|plan| {
                    let highlights = plan.card_highlights().to_vec();
                    view! {
                        <div class="plan-card" class:plan-card--recommended=plan.recommended>
                            <div class="plan-card__header">
                                <h3 class="plan-card__name">{plan.name.clone()}</h3>
                                {plan.recommended.then(|| view! {
                                    <Badge variant="primary".to_string()>"Recommended"</Badge>
                                })}
                            </div>
                            <div class="plan-card__seats">{plan.seat_range.clone()}</div>
                            <p class="text-muted">{plan.description.clone()}</p>
                            <ul class="plan-card__highlights">
                                {highlights.into_iter().map(|h| view! {
                                    <li>{icon("check-circle")}{h}</li>
                                }).collect_view()}
                            </ul>
                            <dl class="plan-card__limits">
                                <dt>"AI summaries"</dt>
                                <dd>{plan.usage_limits.ai_summaries.clone()}</dd>
                                <dt>"Translation"</dt>
                                <dd>{plan.usage_limits.translation_minutes.clone()}</dd>
                                <dt>"Storage"</dt>
                                <dd>{plan.usage_limits.storage_per_user.clone()}</dd>
                            </dl>
                        </div>
                    }
                }).collect_view()}
            </div>

            {(!factors.is_empty()).then(|| view! {
                <h3 class="card__subtitle">"Pricing factors"</h3>
                <table class="simple-table">
                    <thead>
                        <tr><th>"Factor"</th><th>"Description"</th><th>"Impact"</th></tr>
                    </thead>
                    <tbody>
                        {factors.into_iter().map(|f| view! {
                            <tr>
                                <td><strong>{f.factor}</strong></td>
                                <td>{f.description}</td>
                                <td>{f.impact}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            })}
        </section>
    }
}

#[component]
pub fn DiscountRulesSection(rules: DiscountRules) -> impl IntoView {
    let current = rules.current_tier().cloned();
    let current_name = rules.current_partner_tier.clone();

    view! {
        <section class="card">
            <div class="card__header">
                {icon("percent")}
                <h2 class="card__title">"Discount Rules"</h2>
            </div>

            {match current {
                Some(tier) => view! {
                    <div class="warning-box warning-box--info">
                        <span class="warning-box__icon">{icon("award")}</span>
                        <span class="warning-box__text">
                            {format!(
                                "Your partner tier: {}. Base discount {}, up to {} without approval.",
                                tier.tier, tier.base_discount, tier.max_without_approval
                            )}
                        </span>
                    </div>
                }
                .into_any(),
                None => view! {
                    <div class="text-muted">{format!("Partner tier: {}", current_name)}</div>
                }
                .into_any(),
            }}

            <h3 class="card__subtitle">"Partner tiers"</h3>
            <table class="simple-table">
                <thead>
                    <tr>
                        <th>"Tier"</th>
                        <th>"Base discount"</th>
                        <th>"Max without approval"</th>
                        <th>"Description"</th>
                    </tr>
                </thead>
                <tbody>
                    {rules.partner_tiers.iter().map(|t| {
                        let is_current = t.tier.eq_ignore_ascii_case(&rules.current_partner_tier);
                        view! {
                            <tr class:simple-table__row--highlight=is_current>
                                <td><strong>{t.tier.clone()}</strong></td>
                                <td>{t.base_discount.clone()}</td>
                                <td>{t.max_without_approval.clone()}</td>
                                <td>{t.description.clone()}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            <h3 class="card__subtitle">"Approval thresholds"</h3>
            <table class="simple-table">
                <thead>
                    <tr>
                        <th>"Condition"</th>
                        <th>"Approval"</th>
                        <th>"Approver"</th>
                        <th>"SLA"</th>
                    </tr>
                </thead>
                <tbody>
                    {rules.approval_thresholds.iter().map(|a| view! {
                        <tr>
                            <td>{a.condition.clone()}</td>
                            <td>{if a.approval_required { "Required" } else { "Not required" }}</td>
                            <td>{a.approver.clone()}</td>
                            <td>{a.sla.clone()}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </section>
    }
}
