use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// What an activity row represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Request,
    Payment,
}

/// One row of agent/provider interaction shown in the live feed. Immutable
/// once created; the list itself is owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub id: u64,
    pub kind: ActivityKind,
    pub agent: String,
    pub provider: String,
    pub chain: String,
    pub amount_usd: f64,
    pub time: String,
}

fn demo(
    id: u64,
    kind: ActivityKind,
    agent: &str,
    provider: &str,
    chain: &str,
    amount_usd: f64,
    time: &str,
) -> ActivityRecord {
    ActivityRecord {
        id,
        kind,
        agent: agent.to_string(),
        provider: provider.to_string(),
        chain: chain.to_string(),
        amount_usd,
        time: time.to_string(),
    }
}

/// Fixed demonstration records shown while no real activity is available.
pub fn demo_activities() -> Vec<ActivityRecord> {
    vec![
        demo(1, ActivityKind::Request, "ElizaBot", "Red_5", "ethereum", 0.001, "2s ago"),
        demo(2, ActivityKind::Request, "AutoGPT-7", "Node_42", "bitcoin", 0.0005, "5s ago"),
        demo(3, ActivityKind::Payment, "LangChain-Agent", "Arkeo_1", "cosmos", 0.001, "8s ago"),
        demo(4, ActivityKind::Request, "CrewAI", "Red_5", "ethereum", 0.001, "12s ago"),
    ]
}

/// Feed normalization: a non-empty list is shown verbatim (borrowed, never
/// cloned or reordered); an empty list is transparently replaced by the demo
/// set.
pub fn visible_activities(activities: &[ActivityRecord]) -> Cow<'_, [ActivityRecord]> {
    if activities.is_empty() {
        Cow::Owned(demo_activities())
    } else {
        Cow::Borrowed(activities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_falls_back_to_demo() {
        let shown = visible_activities(&[]);
        assert_eq!(shown.len(), 4);
        let agents: Vec<&str> = shown.iter().map(|a| a.agent.as_str()).collect();
        assert_eq!(agents, ["ElizaBot", "AutoGPT-7", "LangChain-Agent", "CrewAI"]);
    }

    #[test]
    fn test_non_empty_list_passes_through_borrowed() {
        let records = vec![
            demo(9, ActivityKind::Payment, "Claude-Scout", "Node_42", "base", 0.002, "1s ago"),
            demo(7, ActivityKind::Request, "ElizaBot", "Red_5", "ethereum", 0.001, "4s ago"),
        ];
        let shown = visible_activities(&records);
        assert!(matches!(shown, Cow::Borrowed(_)));
        assert_eq!(shown.as_ref(), records.as_slice());
        // Order is preserved as given, no re-sorting by id.
        assert_eq!(shown[0].id, 9);
    }

    #[test]
    fn test_record_wire_names() {
        let record = demo(1, ActivityKind::Request, "ElizaBot", "Red_5", "ethereum", 0.001, "2s ago");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "request");
        assert_eq!(json["amountUsd"], 0.001);
    }
}
