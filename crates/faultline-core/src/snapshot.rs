//! The external input to one analysis run.
//!
//! Every field is optional on the wire: absent arrays decode as empty and
//! absent numbers as zero, so a sparse snapshot still analyzes cleanly.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::SnapshotError;

/// Named arrays of domain records supplied whole by upstream collectors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataSnapshot {
    pub markets: Vec<MarketQuote>,
    pub sectors: Vec<SectorQuote>,
    pub commodities: Vec<CommodityQuote>,
    pub crypto: Vec<CryptoQuote>,
    pub economic_indicators: Vec<EconomicIndicator>,
    pub predictions: Vec<PredictionMarket>,
    pub earthquakes: Vec<Earthquake>,
    pub protests: Vec<ProtestEvent>,
    pub outages: Vec<Outage>,
    pub military_vessels: Vec<MilitaryVessel>,
    pub military_flights: Vec<MilitaryFlight>,
    pub weather_alerts: Vec<WeatherAlert>,
    pub news: Vec<NewsItem>,
    /// Alert count per news category.
    pub alert_counts: BTreeMap<String, u32>,
}

impl DataSnapshot {
    /// Decode a snapshot from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and decode a snapshot from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Total number of records across all arrays (alert counts excluded).
    pub fn record_count(&self) -> usize {
        self.markets.len()
            + self.sectors.len()
            + self.commodities.len()
            + self.crypto.len()
            + self.economic_indicators.len()
            + self.predictions.len()
            + self.earthquakes.len()
            + self.protests.len()
            + self.outages.len()
            + self.military_vessels.len()
            + self.military_flights.len()
            + self.weather_alerts.len()
            + self.news.len()
    }
}

/// Equity index or single-name quote. `change` is a percent move.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarketQuote {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
}

/// Sector ETF quote. `change` is a percent move.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectorQuote {
    pub symbol: String,
    pub name: String,
    pub change: f64,
}

/// Commodity futures quote. `change` is a percent move.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommodityQuote {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
}

const OIL_SYMBOLS: &[&str] = &["CL=F", "BZ=F", "WTI", "BRENT"];
const GOLD_SYMBOLS: &[&str] = &["GC=F", "XAU", "XAUUSD"];

impl CommodityQuote {
    /// Crude oil contract, by symbol or name.
    pub fn is_oil(&self) -> bool {
        let name = self.name.to_lowercase();
        OIL_SYMBOLS.iter().any(|s| s.eq_ignore_ascii_case(&self.symbol))
            || name.contains("oil")
            || name.contains("crude")
    }

    /// Gold contract, by symbol or name.
    pub fn is_gold(&self) -> bool {
        GOLD_SYMBOLS.iter().any(|s| s.eq_ignore_ascii_case(&self.symbol))
            || self.name.to_lowercase().contains("gold")
    }
}

/// Crypto asset quote. `change` is a 24h percent move.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CryptoQuote {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
}

/// Latest observation of a macro series (FRED-style ids).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EconomicIndicator {
    pub id: String,
    pub name: String,
    pub value: f64,
    /// Change against the previous observation.
    pub change: f64,
}

/// Well-known economic series ids.
pub mod series {
    /// CBOE volatility index.
    pub const VIX: &str = "VIXCLS";
    /// 10-year minus 2-year treasury spread.
    pub const YIELD_SPREAD_10Y2Y: &str = "T10Y2Y";
    /// Civilian unemployment rate.
    pub const UNEMPLOYMENT: &str = "UNRATE";
}

impl DataSnapshot {
    /// Look up an economic series by id (case-insensitive).
    pub fn indicator(&self, id: &str) -> Option<&EconomicIndicator> {
        self.economic_indicators
            .iter()
            .find(|i| i.id.eq_ignore_ascii_case(id))
    }
}

/// Prediction-market contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PredictionMarket {
    pub title: String,
    /// Price of the YES share in [0, 1].
    pub yes_price: f64,
    pub volume: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Earthquake {
    pub id: String,
    pub place: String,
    pub magnitude: f64,
    pub lat: f64,
    pub lon: f64,
    pub depth_km: f64,
    pub time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtestEvent {
    pub id: String,
    pub event_type: String,
    pub summary: String,
    pub country: String,
    pub location: String,
    pub lat: f64,
    pub lon: f64,
    pub fatalities: u32,
    pub time: Option<DateTime<Utc>>,
}

impl ProtestEvent {
    /// Best available place name for this event.
    pub fn place_name(&self) -> &str {
        if self.location.is_empty() {
            &self.country
        } else {
            &self.location
        }
    }
}

/// Reported severity of an internet/power outage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutageSeverity {
    Total,
    Major,
    Partial,
    Minor,
    #[default]
    #[serde(other)]
    Unknown,
}

impl OutageSeverity {
    /// Total or major outages drive the infrastructure rule.
    pub fn is_severe(self) -> bool {
        matches!(self, Self::Total | Self::Major)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Outage {
    pub id: String,
    pub title: String,
    pub country: String,
    pub severity: OutageSeverity,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MilitaryVessel {
    pub id: String,
    pub name: String,
    pub operator: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MilitaryFlight {
    pub id: String,
    pub callsign: String,
    pub operator: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeatherAlert {
    pub id: String,
    pub event: String,
    pub severity: String,
    pub area: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsItem {
    pub title: String,
    pub source: String,
    pub category: String,
    pub published: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_decodes_to_empty_snapshot() {
        let snapshot = DataSnapshot::from_json("{}").unwrap();
        assert_eq!(snapshot, DataSnapshot::default());
        assert_eq!(snapshot.record_count(), 0);
    }

    #[test]
    fn missing_numeric_fields_default_to_zero() {
        let snapshot =
            DataSnapshot::from_json(r#"{"markets":[{"symbol":"SPY"}],"earthquakes":[{}]}"#)
                .unwrap();
        assert_eq!(snapshot.markets[0].change, 0.0);
        assert_eq!(snapshot.earthquakes[0].magnitude, 0.0);
    }

    #[test]
    fn unknown_outage_severity_decodes_as_unknown() {
        let snapshot =
            DataSnapshot::from_json(r#"{"outages":[{"severity":"catastrophic"},{"severity":"major"}]}"#)
                .unwrap();
        assert_eq!(snapshot.outages[0].severity, OutageSeverity::Unknown);
        assert_eq!(snapshot.outages[1].severity, OutageSeverity::Major);
    }

    #[test]
    fn commodity_classification_by_symbol_and_name() {
        let wti = CommodityQuote {
            symbol: "CL=F".into(),
            ..Default::default()
        };
        let gold = CommodityQuote {
            name: "Gold Futures".into(),
            ..Default::default()
        };
        assert!(wti.is_oil() && !wti.is_gold());
        assert!(gold.is_gold() && !gold.is_oil());
    }

    #[test]
    fn malformed_json_is_decode_error() {
        let err = DataSnapshot::from_json("{not json").unwrap_err();
        assert!(matches!(err, SnapshotError::Decode(_)));
    }
}
