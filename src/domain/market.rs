use serde::{Deserialize, Serialize};

/// Deserialize optional number that could be string or number
fn deserialize_optional_number<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(serde_json::Value::Number(n)) => Ok(n.as_f64()),
        Some(serde_json::Value::String(s)) => Ok(s.parse::<f64>().ok()),
        Some(_) => Ok(None),
    }
}

/// Event returned by the Gamma `/events?slug=` endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GammaEvent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Kept as raw values so one bad record does not sink the whole event
    #[serde(default)]
    pub markets: Vec<serde_json::Value>,
}

/// One candidate contract inside a race's event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketRecord {
    /// Candidate label (e.g., "J.D. Vance")
    #[serde(rename = "groupItemTitle", default)]
    pub group_item_title: Option<String>,

    /// Whether the market is open for trading
    #[serde(default)]
    pub active: bool,

    /// Outcome prices, normally a JSON string "[\"0.52\", \"0.48\"]"
    #[serde(rename = "outcomePrices", default)]
    pub outcome_prices: Option<serde_json::Value>,

    /// Price of the most recent fill
    #[serde(
        rename = "lastTradePrice",
        default,
        deserialize_with = "deserialize_optional_number"
    )]
    pub last_trade_price: Option<f64>,
}

impl MarketRecord {
    /// Parse outcome prices as (yes, no).
    ///
    /// Accepts the JSON-encoded string Gamma sends as well as a plain array, with
    /// elements given either as decimal strings or numbers.
    pub fn get_prices(&self) -> Option<(f64, f64)> {
        let prices: Vec<serde_json::Value> = match self.outcome_prices.as_ref()? {
            serde_json::Value::String(encoded) => serde_json::from_str(encoded).ok()?,
            serde_json::Value::Array(items) => items.clone(),
            _ => return None,
        };
        if prices.len() < 2 {
            return None;
        }
        let yes = price_value(&prices[0])?;
        let no = price_value(&prices[1])?;
        Some((yes, no))
    }
}

fn price_value(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        serde_json::Value::Number(n) => n.as_f64(),
        _ => None,
    }
}
