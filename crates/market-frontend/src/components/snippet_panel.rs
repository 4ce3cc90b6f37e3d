use leptos::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use market_model::{integration_snippets, CopyState, ProviderOffer, SnippetKind, COPY_RESET_MS};

use super::CodeBlock;

fn write_clipboard(text: String) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let clipboard = window.navigator().clipboard();
    spawn_local(async move {
        // Fire-and-forget; a failed write is not surfaced here.
        let _ = JsFuture::from(clipboard.write_text(&text)).await;
    });
}

/// Integration snippets for the three supported client profiles, each with
/// its own copy action. The copied acknowledgment is the panel's only state:
/// it self-clears after COPY_RESET_MS, and a newer copy supersedes any
/// pending reset.
#[component]
pub fn SnippetPanel(
    #[prop(optional, into)] offer: Option<ProviderOffer>,
    #[prop(optional, into)] endpoint: Option<String>,
) -> impl IntoView {
    let copy_state = RwSignal::new(CopyState::default());

    let copy = move |kind: SnippetKind, text: String| {
        write_clipboard(text);
        let ticket = copy_state.write().mark(kind);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(COPY_RESET_MS).await;
            // Stale tickets from superseded copies expire without effect.
            copy_state.update(|state| state.expire(ticket));
        });
    };

    let snippets = integration_snippets(offer.as_ref(), endpoint.as_deref());

    view! {
        <div class="card snippet-panel">
            <div class="panel-header">
                <span class="panel-icon">"\u{1F916}"</span>
                <div>
                    <h3>"AI Agent Integration"</h3>
                    <p>"Connect your agent in minutes"</p>
                </div>
            </div>

            {snippets.into_iter().map(|snippet| {
                let kind = snippet.kind;
                let body = snippet.body.clone();
                let copied = Signal::derive(move || copy_state.get().is_copied(kind));
                view! {
                    <div class="snippet-section">
                        <h4>{kind.title()}</h4>
                        <CodeBlock
                            code=snippet.body
                            copied=copied
                            on_copy=move |_| copy(kind, body.clone())
                        />
                    </div>
                }
            }).collect::<Vec<_>>()}

            <div class="panel-links">
                <a href="https://docs.arkeo.network/agents" target="_blank" rel="noopener">
                    "Full Documentation"
                </a>
                <a href="https://github.com/arkeonetwork/arkeo-agents" target="_blank" rel="noopener">
                    "GitHub"
                </a>
                <a href="https://discord.gg/arkeo" target="_blank" rel="noopener">
                    "Discord Support"
                </a>
            </div>
        </div>
    }
}
