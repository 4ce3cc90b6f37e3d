use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

mod components;
use components::*;

use market_model::{format_usd, ActivityRecord, PayError, PaymentConfig, ProviderOffer};

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("console_log init");
    leptos::mount::mount_to_body(App);
}

/// Demo marketplace page. The parent owns every piece of durable state and
/// applies the intents the components emit; nothing below this level holds
/// more than transient UI state.
#[component]
fn App() -> impl IntoView {
    let offer = ProviderOffer {
        moniker: "Red_5".to_string(),
        endpoint: "https://eth.arkeo.network".to_string(),
        price_usd: 0.001,
        discount_percent: 15,
    };

    let config = RwSignal::new(PaymentConfig {
        enabled: true,
        price_usd: offer.price_usd,
    });
    // Empty on purpose: the feed falls back to its demo records.
    let (activities, _set_activities) = signal(Vec::<ActivityRecord>::new());

    let on_toggle = Callback::new(move |next| config.update(|c| c.set_enabled(next)));
    let on_price_change = Callback::new(move |input| {
        config.update(|c| {
            if !c.set_price(input) {
                log::debug!("rejected price input {input:?}");
            }
        });
    });
    let on_learn_more = Callback::new(|_| log::info!("learn more requested"));

    // Stand-in for the wallet/facilitator round trip.
    let on_pay = PayHandler::new(|offer: ProviderOffer| async move {
        log::info!(
            "paying {} request for ${}",
            offer.moniker,
            format_usd(offer.price_usd)
        );
        TimeoutFuture::new(1200).await;
        Ok::<(), PayError>(())
    });

    view! {
        <div class="app-shell">
            <PromoBanner on_learn_more=on_learn_more />

            <div class="market-grid">
                <div class="market-main">
                    <PricingBadge
                        price_usd=Signal::derive(move || config.get().price_usd)
                        discount_percent=offer.discount_percent
                    />
                    <PaymentToggle
                        enabled=Signal::derive(move || config.get().enabled)
                        price_usd=Signal::derive(move || config.get().price_usd)
                        on_toggle=on_toggle
                        on_price_change=on_price_change
                    />
                    <PayButton offer=offer.clone() on_pay=on_pay />
                </div>
                <ActivityFeed activities=activities />
            </div>

            <SnippetPanel offer=offer.clone() endpoint=offer.endpoint.clone() />
        </div>
    }
}
