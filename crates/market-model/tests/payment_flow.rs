//! Drives the parent-owned state the way the view wires it: components emit
//! intents, the parent applies them, and new state flows back down.

use market_model::{
    demo_activities, format_usd, visible_activities, PayLifecycle, PaymentConfig, PriceInput,
};

#[test]
fn test_toggle_enable_then_edit_price() {
    let mut config = PaymentConfig {
        enabled: false,
        price_usd: 0.001,
    };

    // Activating the toggle emits the negation of the current value.
    let intent = !config.enabled;
    assert!(intent);
    config.set_enabled(intent);
    assert!(config.enabled);

    // The editor becomes visible showing the stored price at four decimals.
    assert_eq!(format_usd(config.price_usd), "0.0010");

    // Editing to a parseable value updates the config.
    assert!(config.set_price(PriceInput::parse("0.002")));
    assert_eq!(config.price_usd, 0.002);

    // Junk input reaches the parent as NotANumber and is rejected there,
    // never silently dropped in the toggle.
    assert_eq!(PriceInput::parse("not-a-price"), PriceInput::NotANumber);
    assert!(!config.set_price(PriceInput::parse("not-a-price")));
    assert_eq!(config.price_usd, 0.002);

    // Toggling off hides the editor without clearing the stored price.
    config.set_enabled(false);
    assert_eq!(config.price_usd, 0.002);
}

#[test]
fn test_pay_activation_is_single_flight() {
    let mut lifecycle = PayLifecycle::default();
    let mut invocations = 0;

    // Rapid double activation: only the first one invokes the handler.
    if lifecycle.try_begin() {
        invocations += 1;
    }
    if lifecycle.try_begin() {
        invocations += 1;
    }
    assert_eq!(invocations, 1);

    // After settlement, success or failure, activation is accepted again.
    lifecycle.settle();
    if lifecycle.try_begin() {
        invocations += 1;
    }
    assert_eq!(invocations, 2);
}

#[test]
fn test_feed_fallback_is_transparent() {
    let shown = visible_activities(&[]);
    assert_eq!(shown.as_ref(), demo_activities().as_slice());

    let records = demo_activities();
    let shown = visible_activities(&records[..2]);
    assert_eq!(shown.len(), 2);
    assert_eq!(shown.as_ref(), &records[..2]);
}
