use leptos::prelude::*;

/// Static hero surface inviting AI agents; one outbound learn-more intent.
#[component]
pub fn PromoBanner(#[prop(into)] on_learn_more: Callback<()>) -> impl IntoView {
    view! {
        <div class="promo-banner">
            <div class="promo-copy">
                <span class="promo-pill">"NEW"</span>
                <h2>"AI Agents Welcome"</h2>
                <p>
                    "Pay for blockchain data with "
                    <span class="accent-blue">"USDC"</span>
                    " via x402. No token buying. No accounts. Just HTTP requests."
                </p>
                <div class="promo-points">
                    <span>"\u{26A1} Instant access"</span>
                    <span>"$ Pay with stablecoins"</span>
                    <span>"\u{1F916} Agent-native"</span>
                </div>
            </div>
            <div class="promo-actions">
                <button class="promo-cta" on:click=move |_| on_learn_more.run(())>
                    "Get Started \u{2192}"
                </button>
                <a class="promo-docs" href="https://docs.arkeo.network/agents" target="_blank" rel="noopener">
                    "View Docs"
                </a>
            </div>
        </div>
    }
}
