use leptos::prelude::*;

/// Literal snippet text with a copy button and a transient acknowledgment.
#[component]
pub fn CodeBlock(
    code: String,
    #[prop(into)] copied: Signal<bool>,
    #[prop(into)] on_copy: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="code-block">
            <pre><code>{code}</code></pre>
            <button class="copy-btn" on:click=move |_| on_copy.run(())>
                {move || if copied.get() { "\u{2713}" } else { "copy" }}
            </button>
        </div>
    }
}
