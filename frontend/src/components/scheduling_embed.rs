use yew::prelude::*;
use web_sys::window;

use crate::config;
use crate::wizard::prefill::PrefillPayload;

#[derive(Properties, PartialEq)]
pub struct SchedulingEmbedProps {
    pub prefill: PrefillPayload,
    #[prop_or_else(|| config::SCHEDULING_URL.to_string())]
    pub url: String,
}

/// Inline booking calendar, pre-filled with the wizard's answers.
#[function_component(SchedulingEmbed)]
pub fn scheduling_embed(props: &SchedulingEmbedProps) -> Html {
    let embed_domain = window().and_then(|w| w.location().host().ok());
    let src = props.prefill.embed_url(&props.url, embed_domain.as_deref());

    html! {
        <div class="scheduling-embed">
            <style>
                {r#"
                    .scheduling-embed {
                        height: 600px;
                        width: 100%;
                    }
                    .scheduling-embed iframe {
                        width: 100%;
                        height: 100%;
                        border: none;
                        border-radius: 8px;
                    }
                "#}
            </style>
            <iframe src={src} title="Schedule your intro call" />
        </div>
    }
}
