//! Yes-probability extraction for a single market record.

use crate::domain::MarketRecord;

/// Probability that the market resolves YES.
///
/// Precedence: a positive last trade price is taken as-is; otherwise the quoted
/// outcome prices are renormalized as `yes / (yes + no)`; otherwise 0.0.
pub fn yes_probability(market: &MarketRecord) -> f64 {
    if let Some(last_trade) = market.last_trade_price {
        if last_trade > 0.0 {
            return last_trade;
        }
    }

    match market.get_prices() {
        Some((yes, no)) => {
            let total = yes + no;
            if total > 0.0 {
                yes / total
            } else {
                0.0
            }
        }
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn market(prices: Option<&str>, last_trade: Option<f64>) -> MarketRecord {
        MarketRecord {
            group_item_title: Some("Jane Doe".to_string()),
            active: true,
            outcome_prices: prices.map(|p| json!(p)),
            last_trade_price: last_trade,
        }
    }

    #[test]
    fn test_last_trade_takes_precedence() {
        let m = market(Some(r#"["0.6", "0.4"]"#), Some(0.15));
        assert_eq!(yes_probability(&m), 0.15);
    }

    #[test]
    fn test_last_trade_without_quotes() {
        let m = market(None, Some(0.42));
        assert_eq!(yes_probability(&m), 0.42);
    }

    #[test]
    fn test_falls_back_to_quotes() {
        let m = market(Some(r#"["0.6", "0.4"]"#), None);
        assert!((yes_probability(&m) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_zero_last_trade_ignored() {
        let m = market(Some(r#"["0.3", "0.7"]"#), Some(0.0));
        assert!((yes_probability(&m) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_quotes_are_renormalized() {
        // Book quotes with vig: 0.55 + 0.55 = 1.10
        let m = market(Some(r#"["0.55", "0.55"]"#), None);
        assert!((yes_probability(&m) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_sum_is_zero() {
        let m = market(Some(r#"["0", "0"]"#), None);
        assert_eq!(yes_probability(&m), 0.0);
    }

    #[test]
    fn test_no_price_data_is_zero() {
        assert_eq!(yes_probability(&market(None, None)), 0.0);
        assert_eq!(yes_probability(&market(Some("{broken"), None)), 0.0);
        assert_eq!(yes_probability(&market(Some("[]"), Some(-1.0))), 0.0);
    }
}
