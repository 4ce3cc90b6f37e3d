use leptos::prelude::*;

use market_model::{format_usd, PriceInput};

/// Controlled editor over parent-owned (enabled, price) state. Emits intents
/// upward and re-renders only when the parent feeds new values back down.
/// Price input is parsed here but validated by whoever owns the config.
#[component]
pub fn PaymentToggle(
    #[prop(into)] enabled: Signal<bool>,
    #[prop(into)] price_usd: Signal<f64>,
    #[prop(into)] on_toggle: Callback<bool>,
    #[prop(into)] on_price_change: Callback<PriceInput>,
) -> impl IntoView {
    view! {
        <div class="card payment-toggle">
            <div class="toggle-header">
                <div>
                    <p class="toggle-title">"x402 Payments"</p>
                    <p class="toggle-subtitle">"Accept USDC from AI agents"</p>
                </div>
                <button
                    class="switch"
                    class:active=move || enabled.get()
                    on:click=move |_| on_toggle.run(!enabled.get_untracked())
                >
                    <span class="switch-knob"></span>
                </button>
            </div>

            {move || enabled.get().then(|| view! {
                <div class="price-editor">
                    <label class="price-label">"Price per request (USD)"</label>
                    <div class="price-row">
                        <span>"$"</span>
                        <input
                            type="number"
                            step="0.0001"
                            min="0.0001"
                            prop:value=move || format_usd(price_usd.get())
                            on:input=move |ev| {
                                on_price_change.run(PriceInput::parse(&event_target_value(&ev)));
                            }
                        />
                        <span class="price-caption">"per request"</span>
                    </div>
                </div>
            })}
        </div>
    }
}
