use leptos::prelude::*;

use market_model::{format_usd, visible_activities, ActivityRecord};

/// Bounded, scrolling list of recent agent activity. An empty list is
/// transparently replaced by the built-in demo records; a non-empty list is
/// rendered verbatim in the order given.
#[component]
pub fn ActivityFeed(#[prop(into)] activities: Signal<Vec<ActivityRecord>>) -> impl IntoView {
    view! {
        <div class="card activity-feed">
            <div class="feed-header">
                <div class="feed-title">
                    <span class="live-dot"></span>
                    <h3>"Live Activity"</h3>
                </div>
                <span class="feed-caption">"Real-time x402 payments"</span>
            </div>

            <div class="feed-list">
                {move || {
                    let current = activities.get();
                    visible_activities(&current)
                        .iter()
                        .map(|record| {
                            let route = format!("{} \u{2192} {}", record.chain, record.provider);
                            let amount = format!("${}", format_usd(record.amount_usd));
                            view! {
                                <div class="feed-row">
                                    <div class="feed-agent">
                                        <p class="feed-agent-name">{record.agent.clone()}</p>
                                        <p class="feed-route">{route}</p>
                                    </div>
                                    <div class="feed-amount">
                                        <p class="feed-usd">{amount}</p>
                                        <p class="feed-time">{record.time.clone()}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
