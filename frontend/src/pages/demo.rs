use yew::prelude::*;

use crate::components::document_analyzer::DocumentAnalyzer;

#[function_component(Demo)]
pub fn demo() -> Html {
    html! {
        <div class="demo-page" style="padding: 6rem 0; min-height: 100vh; background: #0A192F;">
            <DocumentAnalyzer />
        </div>
    }
}
