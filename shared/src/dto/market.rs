//! Market price, trend, and forecast DTOs.

use serde::{Deserialize, Serialize};

/// One mandi quote for a crop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub market: String,
    #[serde(default)]
    pub variety: String,
    #[serde(default)]
    pub quality: String,
    /// Rupees per quintal.
    pub price: f64,
    /// Percent change since yesterday.
    #[serde(default)]
    pub change: f64,
}

/// One point of historical price data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
}

/// One point of the model-generated forecast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub date: String,
    pub predicted_price: f64,
}

/// State-level market summary for a crop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummary {
    pub min_price: f64,
    pub modal_price: f64,
    pub max_price: f64,
    #[serde(default)]
    pub min_price_change: f64,
    #[serde(default)]
    pub modal_price_change: f64,
    #[serde(default)]
    pub max_price_change: f64,
    #[serde(default)]
    pub weekly_high: f64,
    #[serde(default)]
    pub weekly_low: f64,
    #[serde(default)]
    pub monthly_avg: f64,
    #[serde(default)]
    pub volatility: f64,
    #[serde(default)]
    pub markets: Vec<MarketRow>,
}

/// One row of the top-markets table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketRow {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub change: f64,
    #[serde(default)]
    pub updated_at: String,
}

/// Trend point used by the market intelligence screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: String,
    pub modal_price: f64,
}

/// Backend recommendation on when to sell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SellingAdvice {
    pub recommendation: SellingSignal,
    /// Percent confidence in the signal.
    pub confidence: f64,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub expected_trend: String,
    #[serde(default)]
    pub best_time: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SellingSignal {
    Sell,
    Hold,
    Wait,
}

impl SellingSignal {
    pub fn label(self) -> &'static str {
        match self {
            SellingSignal::Sell => "SELL NOW",
            SellingSignal::Hold => "HOLD",
            SellingSignal::Wait => "WAIT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_summary_reads_camel_case() {
        let json = r#"{
            "minPrice": 1800.0,
            "modalPrice": 2100.0,
            "maxPrice": 2350.0,
            "modalPriceChange": -1.4,
            "weeklyHigh": 2400.0,
            "markets": [
                {"name": "Azadpur", "price": 2150.0, "change": 0.8, "updatedAt": "2h ago"}
            ]
        }"#;
        let summary: MarketSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.modal_price, 2100.0);
        assert_eq!(summary.modal_price_change, -1.4);
        assert_eq!(summary.markets.len(), 1);
        assert_eq!(summary.markets[0].name, "Azadpur");
        // absent fields default rather than fail
        assert_eq!(summary.volatility, 0.0);
    }

    #[test]
    fn selling_signal_round_trips_lowercase() {
        let advice: SellingAdvice = serde_json::from_str(
            r#"{"recommendation": "hold", "confidence": 72.0}"#,
        )
        .unwrap();
        assert_eq!(advice.recommendation, SellingSignal::Hold);
        assert_eq!(advice.recommendation.label(), "HOLD");
    }
}
