mod promo_banner;
mod pricing_badge;
mod payment_toggle;
mod pay_button;
mod snippet_panel;
mod activity_feed;
mod code_block;

pub use promo_banner::PromoBanner;
pub use pricing_badge::PricingBadge;
pub use payment_toggle::PaymentToggle;
pub use pay_button::{PayButton, PayHandler};
pub use snippet_panel::SnippetPanel;
pub use activity_feed::ActivityFeed;
pub use code_block::CodeBlock;
