use crate::offer::ProviderOffer;

/// Endpoint substituted into snippets when none is supplied.
pub const DEFAULT_ENDPOINT: &str = "https://eth.arkeo.network";

/// Provider moniker substituted into the plugin profile when no offer is
/// supplied.
pub const DEFAULT_MONIKER: &str = "auto";

/// The client profiles a snippet is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnippetKind {
    Curl,
    Python,
    Eliza,
}

impl SnippetKind {
    pub fn title(self) -> &'static str {
        match self {
            SnippetKind::Curl => "Quick Start (cURL)",
            SnippetKind::Python => "Python SDK",
            SnippetKind::Eliza => "Eliza Framework",
        }
    }

    pub fn language(self) -> &'static str {
        match self {
            SnippetKind::Curl => "bash",
            SnippetKind::Python => "python",
            SnippetKind::Eliza => "typescript",
        }
    }
}

/// A literal, parameterized block of example client code. Generation is
/// templating, not execution.
#[derive(Debug, Clone, PartialEq)]
pub struct Snippet {
    pub kind: SnippetKind,
    pub body: String,
}

/// Render the three integration snippets for an offer. Deterministic: the
/// same inputs always produce the same text.
pub fn integration_snippets(offer: Option<&ProviderOffer>, endpoint: Option<&str>) -> Vec<Snippet> {
    let endpoint = endpoint.unwrap_or(DEFAULT_ENDPOINT);
    let moniker = offer.map(|o| o.moniker.as_str()).unwrap_or(DEFAULT_MONIKER);
    vec![
        Snippet {
            kind: SnippetKind::Curl,
            body: curl_snippet(endpoint),
        },
        Snippet {
            kind: SnippetKind::Python,
            body: python_snippet(endpoint),
        },
        Snippet {
            kind: SnippetKind::Eliza,
            body: eliza_snippet(moniker),
        },
    ]
}

fn curl_snippet(endpoint: &str) -> String {
    format!(
        r#"curl -X POST {endpoint} \
  -H "Content-Type: application/json" \
  -H "X-PAYMENT: <your-x402-signature>" \
  -d '{{"jsonrpc":"2.0","method":"eth_blockNumber","params":[],"id":1}}'"#
    )
}

fn python_snippet(endpoint: &str) -> String {
    format!(
        r#"from x402 import Client

client = Client(
    wallet_key="YOUR_PRIVATE_KEY",
    network="base"  # or "ethereum"
)

response = client.request(
    url="{endpoint}",
    method="POST",
    json={{"jsonrpc": "2.0", "method": "eth_blockNumber", "params": [], "id": 1}}
)

print(response.json())"#
    )
}

fn eliza_snippet(moniker: &str) -> String {
    format!(
        r#"// eliza.config.ts
import {{ arkeoPlugin }} from '@arkeo/eliza-plugin';

export default {{
  plugins: [
    arkeoPlugin({{
      walletKey: process.env.WALLET_KEY,
      defaultProvider: "{moniker}",
      network: "base"
    }})
  ]
}};"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer() -> ProviderOffer {
        ProviderOffer {
            moniker: "Red_5".to_string(),
            endpoint: "https://btc.arkeo.network".to_string(),
            price_usd: 0.001,
            discount_percent: 0,
        }
    }

    #[test]
    fn test_defaults_when_nothing_supplied() {
        let snippets = integration_snippets(None, None);
        assert_eq!(snippets.len(), 3);
        assert!(snippets[0].body.contains(DEFAULT_ENDPOINT));
        assert!(snippets[1].body.contains(DEFAULT_ENDPOINT));
        assert!(snippets[2].body.contains(r#"defaultProvider: "auto""#));
    }

    #[test]
    fn test_endpoint_substitution() {
        let snippets = integration_snippets(None, Some("https://btc.arkeo.network"));
        assert!(snippets[0].body.starts_with("curl -X POST https://btc.arkeo.network"));
        assert!(snippets[1].body.contains(r#"url="https://btc.arkeo.network""#));
    }

    #[test]
    fn test_moniker_substitution() {
        let offer = offer();
        let snippets = integration_snippets(Some(&offer), Some(offer.endpoint.as_str()));
        assert!(snippets[2].body.contains(r#"defaultProvider: "Red_5""#));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let offer = offer();
        let a = integration_snippets(Some(&offer), None);
        let b = integration_snippets(Some(&offer), None);
        assert_eq!(a, b);
    }
}
