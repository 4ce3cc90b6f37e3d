use leptos::prelude::*;

use market_model::format_usd;

/// Pure price summary for one offer. A zero discount suppresses the chip
/// entirely.
#[component]
pub fn PricingBadge(
    #[prop(into)] price_usd: Signal<f64>,
    #[prop(default = 0)] discount_percent: u8,
) -> impl IntoView {
    view! {
        <div class="pricing-badge">
            <span class="usdc-mark">"$"</span>
            <div>
                <p class="pricing-amount">"$" {move || format_usd(price_usd.get())}</p>
                <p class="pricing-caption">"per request (USDC)"</p>
            </div>
            {(discount_percent > 0).then(|| view! {
                <span class="pricing-discount">
                    {format!("{discount_percent}% off with ARKEO")}
                </span>
            })}
        </div>
    }
}
