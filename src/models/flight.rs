//! Simulated flight price estimates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Estimated flight from an origin code to a destination
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FlightEstimate {
    pub destination_id: String,
    pub destination_name: String,
    /// Origin city code as given by the caller, e.g. `"NYC"`
    pub origin: String,
    pub price_estimate: PriceEstimate,
    /// e.g. `"8 hours"`
    pub flight_time_estimate: String,
    pub price_trend: PriceTrend,
    pub best_time_to_book: BookingAdvice,
    pub data_source: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PriceEstimate {
    pub currency: String,
    /// Rounded to the nearest 10
    pub amount: f64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Rising,
    Stable,
    Falling,
}

impl PriceTrend {
    /// Draw order used by the simulator
    pub const ALL: [PriceTrend; 3] = [PriceTrend::Rising, PriceTrend::Stable, PriceTrend::Falling];
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum BookingAdvice {
    #[serde(rename = "Now")]
    Now,
    #[serde(rename = "1 week ahead")]
    OneWeekAhead,
    #[serde(rename = "1 month ahead")]
    OneMonthAhead,
}

impl BookingAdvice {
    /// Draw order used by the simulator
    pub const ALL: [BookingAdvice; 3] = [
        BookingAdvice::Now,
        BookingAdvice::OneWeekAhead,
        BookingAdvice::OneMonthAhead,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_serialization() {
        assert_eq!(serde_json::to_string(&PriceTrend::Falling).unwrap(), "\"falling\"");
        assert_eq!(
            serde_json::to_string(&BookingAdvice::OneWeekAhead).unwrap(),
            "\"1 week ahead\""
        );
        assert_eq!(serde_json::to_string(&BookingAdvice::Now).unwrap(), "\"Now\"");
    }
}
