use yew::prelude::*;
use web_sys::{window, ScrollBehavior, ScrollToOptions};

use crate::config;
use crate::components::intro_call_modal::IntroCallModal;

/// Page offset that puts a section's top edge just under the fixed nav.
pub fn section_scroll_target(element_top: f64, page_offset: f64, navbar_height: f64) -> f64 {
    element_top + page_offset - navbar_height
}

/// Smooth-scrolls to the element with `id`, if it exists.
pub fn scroll_to_section(id: &str) {
    let Some(window) = window() else { return };
    let Some(section) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        log::warn!("No section with id {}", id);
        return;
    };
    let top = section_scroll_target(
        section.get_bounding_client_rect().top(),
        window.scroll_y().unwrap_or(0.0),
        config::NAVBAR_HEIGHT_PX,
    );
    let mut options = ScrollToOptions::new();
    options.top(top).behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let is_modal_open = use_state(|| false);

    let open_modal = {
        let is_modal_open = is_modal_open.clone();
        Callback::from(move |_: MouseEvent| is_modal_open.set(true))
    };
    let close_modal = {
        let is_modal_open = is_modal_open.clone();
        Callback::from(move |_: ()| is_modal_open.set(false))
    };
    let view_solutions = Callback::from(|_: MouseEvent| scroll_to_section("services"));

    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        position: relative;
                        overflow: hidden;
                        background: #0A192F;
                    }
                    .hero-gradient {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, #0A192F, #0A192F, #000);
                        opacity: 0.9;
                        animation: heroFade 1s ease-out;
                    }
                    @keyframes heroFade {
                        from { opacity: 0; }
                        to { opacity: 0.9; }
                    }
                    @keyframes heroRise {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                        text-align: center;
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                        animation: heroRise 0.8s ease-out;
                    }
                    .hero-tag {
                        align-self: center;
                        padding: 0.5rem 1rem;
                        background: #112240;
                        color: #BD34FE;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .hero h1 {
                        font-size: clamp(2.25rem, 6vw, 4.5rem);
                        font-weight: 700;
                        line-height: 1.1;
                        margin: 0;
                    }
                    .hero-subtitle {
                        font-size: clamp(1.25rem, 2.5vw, 1.5rem);
                        color: #9ca3af;
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                    }
                    .hero-cta, .hero-secondary {
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        font-weight: 600;
                        color: #fff;
                        cursor: pointer;
                        transition: transform 0.2s ease, background 0.2s ease;
                    }
                    .hero-cta:hover, .hero-secondary:hover {
                        transform: scale(1.05);
                    }
                    .hero-cta:active, .hero-secondary:active {
                        transform: scale(0.95);
                    }
                    .hero-cta {
                        background: #BD34FE;
                        border: none;
                    }
                    .hero-cta:hover {
                        background: #A020F0;
                    }
                    .hero-secondary {
                        background: transparent;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                    }
                "#}
            </style>
            <div class="hero-gradient"></div>
            <div class="hero-content">
                <span class="hero-tag">{"INTELLIGENT AUTOMATION SOLUTIONS"}</span>
                <h1>{"Scale your business with"}<br/>{"intelligent automation"}</h1>
                <p class="hero-subtitle">
                    {"Transform your operations with "}<em>{"custom"}</em>
                    {" AI-powered automation systems that reduce costs, eliminate bottlenecks, and accelerate growth."}
                </p>
                <div class="hero-actions">
                    <button class="hero-cta" onclick={open_modal}>{"Schedule Strategy Call →"}</button>
                    <button class="hero-secondary" onclick={view_solutions}>{"View Solutions"}</button>
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
    fn scroll_target_accounts_for_nav_bar() {
        assert_eq!(section_scroll_target(500.0, 0.0, 80.0), 420.0);
        assert_eq!(section_scroll_target(-200.0, 1000.0, 80.0), 720.0);
    }
}
