use yew::prelude::*;

use crate::components::intro_call_modal::IntroCallModal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonStyle {
    Border,
    Gradient,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanPrice {
    Monthly(&'static str),
    Custom,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    pub title: &'static str,
    pub price: PlanPrice,
    pub subtitle: &'static str,
    pub button_text: &'static str,
    pub button_style: ButtonStyle,
    pub popular: bool,
    pub features: [&'static str; 3],
}

impl Plan {
    pub fn price_label(&self) -> String {
        match self.price {
            PlanPrice::Monthly(amount) => format!("${}/month", amount),
            PlanPrice::Custom => "Custom".to_string(),
        }
    }

    /// Custom engagements go through an intro call instead of checkout.
    pub fn opens_intro_call(&self) -> bool {
        self.price == PlanPrice::Custom
    }
}

pub fn plans() -> Vec<Plan> {
    vec![
        Plan {
            title: "Standard",
            price: PlanPrice::Monthly("3,900"),
            subtitle: "Billed monthly",
            button_text: "Get started",
            button_style: ButtonStyle::Border,
            popular: false,
            features: ["Unlimited requests", "Unlimited users", "Pause or cancel anytime"],
        },
        Plan {
            title: "Quarterly",
            price: PlanPrice::Monthly("2,900"),
            subtitle: "Commit to 3 months",
            button_text: "Sign up now →",
            button_style: ButtonStyle::Gradient,
            popular: true,
            features: ["Unlimited requests", "Unlimited users", "Pause or cancel anytime"],
        },
        Plan {
            title: "Ad-hoc",
            price: PlanPrice::Custom,
            subtitle: "For one-off needs, contact sales",
            button_text: "Contact sales",
            button_style: ButtonStyle::Border,
            popular: false,
            features: [
                "Documentation with every project",
                "45-minute project consultation",
                "Discounted subscription transition",
            ],
        },
    ]
}

#[function_component(PricingSection)]
pub fn pricing_section() -> Html {
    let is_modal_open = use_state(|| false);
    let close_modal = {
        let is_modal_open = is_modal_open.clone();
        Callback::from(move |_: ()| is_modal_open.set(false))
    };

    html! {
        <section id="pricing" class="pricing-section">
            <style>
                {r#"
                    .pricing-section {
                        padding: 6rem 1rem;
                        background: #0A192F;
                    }
                    .pricing-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .section-tag {
                        display: inline-block;
                        padding: 0.5rem 1rem;
                        margin-bottom: 1rem;
                        background: #112240;
                        color: #BD34FE;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .pricing-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                        gap: 2rem;
                        margin-top: 4rem;
                    }
                    .plan-card {
                        position: relative;
                        padding: 2rem;
                        border-radius: 8px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(0, 0, 0, 0.2);
                    }
                    .plan-card.popular {
                        border-color: #BD34FE;
                        background: #112240;
                    }
                    .popular-tag {
                        position: absolute;
                        top: 0;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        padding: 0.25rem 1rem;
                        background: #112240;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                    }
                    .plan-price {
                        font-size: 2.25rem;
                        font-weight: 700;
                    }
                    .plan-subtitle {
                        color: #9ca3af;
                        margin-top: 0.5rem;
                    }
                    .plan-button {
                        width: 100%;
                        padding: 0.75rem 1.5rem;
                        margin: 2rem 0;
                        border-radius: 8px;
                        font-weight: 500;
                        cursor: pointer;
                    }
                    .plan-button.border {
                        color: #fff;
                        background: transparent;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                    }
                    .plan-button.gradient {
                        color: #0A192F;
                        border: none;
                        background: linear-gradient(to right, #7FE7D9, #7FE7D9);
                    }
                    .plan-features {
                        list-style: none;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .plan-features li::before {
                        content: "✓ ";
                        color: #7FE7D9;
                    }
                "#}
            </style>
            <div class="pricing-inner">
                <span class="section-tag">{"PRICING"}</span>
                <h2>{"Your investment"}</h2>
                <div class="pricing-grid">
                    { for plans().into_iter().map(|plan| {
                        let onclick = {
                            let is_modal_open = is_modal_open.clone();
                            let opens = plan.opens_intro_call();
                            Callback::from(move |_: MouseEvent| {
                                if opens {
                                    is_modal_open.set(true);
                                }
                            })
                        };
                        let button_class = match plan.button_style {
                            ButtonStyle::Border => "border",
                            ButtonStyle::Gradient => "gradient",
                        };
                        html! {
                            <div key={plan.title} class={classes!("plan-card", plan.popular.then(|| "popular"))}>
                                if plan.popular {
                                    <div class="popular-tag">{"POPULAR"}</div>
                                }
                                <h3>{plan.title}</h3>
                                <div class="plan-price">{plan.price_label()}</div>
                                <p class="plan-subtitle">{plan.subtitle}</p>
                                <button class={classes!("plan-button", button_class)} {onclick}>
                                    {plan.button_text}
                                </button>
                                <ul class="plan-features">
                                    { for plan.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                                </ul>
                            </div>
                        }
                    }) }
                </div>
            </div>
            <IntroCallModal is_open={*is_modal_open} on_close={close_modal} />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_popular_plan() {
        let popular: Vec<&str> = plans().iter().filter(|p| p.popular).map(|p| p.title).collect();
        assert_eq!(popular, vec!["Quarterly"]);
    }

    #[test]
    fn price_labels() {
        let labels: Vec<String> = plans().iter().map(Plan::price_label).collect();
        assert_eq!(labels, vec!["$3,900/month", "$2,900/month", "Custom"]);
    }

    #[test]
    fn only_custom_plan_books_a_call() {
        let booking: Vec<&str> = plans().iter().filter(|p| p.opens_intro_call()).map(|p| p.title).collect();
        assert_eq!(booking, vec!["Ad-hoc"]);
    }
}
