use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use market_model::{PayError, PayLifecycle, ProviderOffer};

/// Boxed settlement future returned by a caller-supplied payment handler.
pub type PayFuture = Pin<Box<dyn Future<Output = Result<(), PayError>>>>;

/// Caller-supplied payment invocation. The button never looks inside the
/// result; only settlement matters to it.
#[derive(Clone)]
pub struct PayHandler(Rc<dyn Fn(ProviderOffer) -> PayFuture>);

impl PayHandler {
    pub fn new<F, Fut>(handler: F) -> Self
    where
        F: Fn(ProviderOffer) -> Fut + 'static,
        Fut: Future<Output = Result<(), PayError>> + 'static,
    {
        Self(Rc::new(move |offer| Box::pin(handler(offer))))
    }

    pub fn invoke(&self, offer: ProviderOffer) -> PayFuture {
        (self.0)(offer)
    }
}

/// Pay action over a caller-supplied async invocation. The in-flight flag is
/// this component's only state; activation while in flight is a no-op, and
/// the flag is released on every settlement path.
#[component]
pub fn PayButton(offer: ProviderOffer, on_pay: PayHandler) -> impl IntoView {
    let lifecycle = RwSignal::new(PayLifecycle::Idle);
    let offer = StoredValue::new(offer);
    let on_pay = StoredValue::new_local(on_pay);

    let on_click = move |_| {
        let began = lifecycle.try_update(|l| l.try_begin()).unwrap_or(false);
        if !began {
            return;
        }
        spawn_local(async move {
            let result = on_pay.get_value().invoke(offer.get_value()).await;
            if let Err(err) = result {
                // Error UI is the caller's concern; the button only reverts
                // to idle.
                log::warn!("payment settled with error: {err}");
            }
            lifecycle.update(|l| l.settle());
        });
    };

    view! {
        <button
            class="pay-btn"
            disabled=move || lifecycle.get().is_in_flight()
            on:click=on_click
        >
            {move || lifecycle.get().is_in_flight().then(|| view! {
                <span class="spinner"></span>
            })}
            {move || (!lifecycle.get().is_in_flight()).then(|| view! {
                <span class="usdc-mark">"$"</span>
                <span>"Pay with USDC"</span>
                <span class="bolt">"\u{26A1}"</span>
            })}
        </button>
    }
}
