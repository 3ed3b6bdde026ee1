use yew::prelude::*;
use web_sys::HtmlTextAreaElement;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use gloo_console::log;

use crate::config;

#[derive(Serialize)]
struct AnalyzeRequest {
    text: String,
}

#[derive(Deserialize)]
struct AnalyzeResponse {
    analysis: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

async fn request_analysis(text: String) -> Result<String, String> {
    let response = Request::post(&format!("{}/api/analyze", config::get_backend_url()))
        .json(&AnalyzeRequest { text })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.ok() {
        response
            .json::<AnalyzeResponse>()
            .await
            .map(|r| r.analysis)
            .map_err(|_| "Failed to parse response".to_string())
    } else {
        log!("Analysis failed with status: {}", response.status());
        match response.json::<ErrorResponse>().await {
            Ok(err) => Err(err.error),
            Err(_) => Err("Failed to analyze document. Please try again.".to_string()),
        }
    }
}

#[function_component(DocumentAnalyzer)]
pub fn document_analyzer() -> Html {
    let text = use_state(String::new);
    let analysis = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let oninput = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            text.set(input.value());
        })
    };

    let onclick = {
        let text = text.clone();
        let analysis = analysis.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        Callback::from(move |_: MouseEvent| {
            if text.trim().is_empty() || *is_loading {
                return;
            }
            let body = (*text).clone();
            let analysis = analysis.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            is_loading.set(true);
            error.set(None);
            spawn_local(async move {
                match request_analysis(body).await {
                    Ok(result) => analysis.set(Some(result)),
                    Err(e) => {
                        log!("Analysis error: {}", &e);
                        analysis.set(None);
                        error.set(Some(e));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    let disabled = text.trim().is_empty() || *is_loading;

    html! {
        <div class="analyzer">
            <style>
                {r#"
                    .analyzer {
                        max-width: 48rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                        color: #fff;
                    }
                    .analyzer textarea {
                        width: 100%;
                        box-sizing: border-box;
                        height: 16rem;
                        padding: 1rem;
                        color: #fff;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 8px;
                        resize: vertical;
                    }
                    .analyze-button {
                        margin-top: 1rem;
                        padding: 0.75rem 2rem;
                        border: none;
                        border-radius: 9999px;
                        color: #fff;
                        background: #BD34FE;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .analyze-button:disabled {
                        background: #4b5563;
                        cursor: not-allowed;
                    }
                    .analysis-result {
                        margin-top: 2rem;
                        padding: 1.5rem;
                        background: #112240;
                        border-radius: 8px;
                        white-space: pre-wrap;
                    }
                    .analysis-error {
                        margin-top: 1rem;
                        color: #ef4444;
                    }
                "#}
            </style>
            <h1>{"Document Analysis"}</h1>
            <p>{"Paste a document below and get a concise, structured analysis of its key points."}</p>
            <textarea
                placeholder="Paste your document text here..."
                value={(*text).clone()}
                {oninput}
            />
            <button class="analyze-button" {disabled} {onclick}>
                { if *is_loading { "Analyzing..." } else { "Analyze" } }
            </button>
            if let Some(e) = (*error).as_ref() {
                <div class="analysis-error">{e.clone()}</div>
            }
            if let Some(result) = (*analysis).as_ref() {
                <div class="analysis-result">{result.clone()}</div>
            }
        </div>
    }
}
