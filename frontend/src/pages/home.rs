use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::hero::Hero;
use crate::components::pricing::PricingSection;

struct Service {
    title: &'static str,
    description: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        title: "Workflow Automation",
        description: "Replace repetitive manual work with systems that run on their own, from intake forms to invoicing.",
    },
    Service {
        title: "AI Assistants",
        description: "Custom language-model agents that answer customers, qualify leads and draft documents in your voice.",
    },
    Service {
        title: "Document Processing",
        description: "Extract, classify and summarize contracts, reports and emails so your team only reads what matters.",
    },
    Service {
        title: "Systems Integration",
        description: "Connect your CRM, billing and support tools so data flows without copy and paste.",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .services {
                        padding: 6rem 1rem;
                        background: #0A192F;
                    }
                    .services-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                        gap: 2rem;
                        margin-top: 3rem;
                    }
                    .service-item {
                        padding: 2rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 8px;
                        background: rgba(0, 0, 0, 0.2);
                    }
                    .service-item p {
                        color: #9ca3af;
                    }
                    .landing-footer {
                        padding: 3rem 1rem;
                        text-align: center;
                        color: #9ca3af;
                        background: #000;
                    }
                    .landing-footer a {
                        color: #7FE7D9;
                    }
                "#}
            </style>
            <Hero />

            <section id="services" class="services">
                <div class="services-inner">
                    <span class="section-tag">{"SERVICES"}</span>
                    <h2>{"What we automate"}</h2>
                    <div class="services-grid">
                        { for SERVICES.iter().map(|service| html! {
                            <div class="service-item" key={service.title}>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <PricingSection />

            <footer class="landing-footer">
                <p>
                    {"Curious what AI can do with your paperwork? Try the "}
                    <Link<Route> to={Route::Demo}>{"document analysis demo"}</Link<Route>>
                    {"."}
                </p>
            </footer>
        </div>
    }
}
