//! Deterministic flight price simulator
//!
//! Prices are pseudo-random but reproducible: the generator is seeded from the
//! origin code and the calendar day, so the same request on the same day always
//! yields the same estimates.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use sha2::{Digest, Sha256};

use crate::models::{BookingAdvice, Destination, FlightEstimate, PriceEstimate, PriceTrend};

const SEED_MODULUS: u64 = 100_000_000;
const BASE_FARE: f64 = 250.0;
const CURRENCY: &str = "USD";
const DATA_SOURCE: &str = "Simulated data";

/// Seed for `origin` on `date`, in `0..10^8`.
///
/// The SHA-256 digest of `"{origin}_{YYYY-MM-DD}"` read as a big-endian
/// integer, reduced modulo 10^8.
#[must_use]
pub fn flight_seed(origin: &str, date: NaiveDate) -> u64 {
    let digest = Sha256::digest(format!("{origin}_{}", date.format("%Y-%m-%d")).as_bytes());
    digest
        .iter()
        .fold(0, |acc, &byte| (acc * 256 + u64::from(byte)) % SEED_MODULUS)
}

#[must_use]
pub fn flight_rng(origin: &str, date: NaiveDate) -> StdRng {
    StdRng::seed_from_u64(flight_seed(origin, date))
}

/// Relative trip length from `origin` to a destination in `region`
#[must_use]
pub fn distance_factor(region: &str, origin: &str) -> f64 {
    match region {
        "Europe" if matches!(origin, "NYC" | "BOS" | "MIA") => 1.5,
        "Europe" => 2.5,
        "Asia" if matches!(origin, "LAX" | "SFO") => 2.5,
        "Asia" => 3.0,
        "Africa" => 2.8,
        "Oceania" => 3.2,
        "South America" if matches!(origin, "MIA" | "ATL") => 1.8,
        "South America" => 2.2,
        _ => 1.0,
    }
}

#[must_use]
pub fn popularity_factor(population: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let factor = 1.0 + population as f64 / 50_000_000.0;
    factor.min(1.5)
}

/// Summer premium for Europe and North America, holiday premium in Nov-Jan
#[must_use]
pub fn seasonal_factor(region: &str, month: u32) -> f64 {
    match month {
        6..=8 if matches!(region, "Europe" | "North America") => 1.3,
        11 | 12 | 1 => 1.25,
        _ => 1.0,
    }
}

fn round_to_ten(amount: f64) -> f64 {
    (amount / 10.0).round_ties_even() * 10.0
}

/// Estimates for the first `limit` destinations, cheapest first.
///
/// Per destination the generator is drawn three times, in this order: the
/// price jitter, the price trend, the booking advice.
#[must_use]
pub fn simulate_flights(
    destinations: &[Destination],
    origin: &str,
    limit: usize,
    now: DateTime<Utc>,
) -> Vec<FlightEstimate> {
    let mut rng = flight_rng(origin, now.date_naive());
    let month = now.month();

    let mut estimates: Vec<FlightEstimate> = destinations
        .iter()
        .take(limit)
        .map(|destination| {
            let distance = distance_factor(&destination.region, origin);
            let random_factor = 0.8 + rng.random::<f64>() * 0.4;
            let amount = round_to_ten(
                BASE_FARE
                    * distance
                    * popularity_factor(destination.population)
                    * seasonal_factor(&destination.region, month)
                    * random_factor,
            );
            let price_trend = PriceTrend::ALL[rng.random_range(0..PriceTrend::ALL.len())];
            let best_time_to_book =
                BookingAdvice::ALL[rng.random_range(0..BookingAdvice::ALL.len())];

            FlightEstimate {
                destination_id: destination.id.clone(),
                destination_name: destination.name.clone(),
                origin: origin.to_string(),
                price_estimate: PriceEstimate {
                    currency: CURRENCY.to_string(),
                    amount,
                    updated_at: now,
                },
                flight_time_estimate: format!("{} hours", (distance * 3.0).round_ties_even()),
                price_trend,
                best_time_to_book,
                data_source: DATA_SOURCE.to_string(),
            }
        })
        .collect();

    estimates.sort_by(|a, b| a.price_estimate.amount.total_cmp(&b.price_estimate.amount));
    estimates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, FixedClock};
    use crate::seed::sample_destinations;
    use rstest::rstest;

    fn noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        FixedClock::on(year, month, day).unwrap().now() + chrono::Duration::hours(12)
    }

    #[test]
    fn test_seed_is_stable_and_bounded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let seed = flight_seed("NYC", date);
        assert_eq!(seed, flight_seed("NYC", date));
        assert!(seed < SEED_MODULUS);
        assert_ne!(seed, flight_seed("LAX", date));
        assert_ne!(seed, flight_seed("NYC", date.succ_opt().unwrap()));
    }

    #[test]
    fn test_same_day_same_origin_is_identical() {
        let destinations = sample_destinations();
        let first = simulate_flights(&destinations, "NYC", 10, noon(2024, 3, 9));
        let second = simulate_flights(&destinations, "NYC", 10, noon(2024, 3, 9));
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_sorted_cheapest_first_and_rounded() {
        let estimates = simulate_flights(&sample_destinations(), "SFO", 10, noon(2024, 7, 1));
        assert_eq!(estimates.len(), 10);
        for pair in estimates.windows(2) {
            assert!(pair[0].price_estimate.amount <= pair[1].price_estimate.amount);
        }
        for estimate in &estimates {
            assert_eq!(estimate.price_estimate.amount % 10.0, 0.0);
            assert_eq!(estimate.price_estimate.currency, "USD");
            assert_eq!(estimate.data_source, "Simulated data");
            assert_eq!(estimate.origin, "SFO");
        }
    }

    #[test]
    fn test_takes_first_destinations_in_store_order() {
        let estimates = simulate_flights(&sample_destinations(), "NYC", 2, noon(2024, 3, 9));
        let mut ids: Vec<&str> = estimates.iter().map(|e| e.destination_id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["dest-001", "dest-002"]);
    }

    #[test]
    fn test_flight_time_follows_distance() {
        let estimates = simulate_flights(&sample_destinations(), "LAX", 10, noon(2024, 3, 9));
        let time_for = |id: &str| {
            estimates
                .iter()
                .find(|e| e.destination_id == id)
                .map(|e| e.flight_time_estimate.clone())
                .unwrap()
        };
        // Americas falls through to the default factor
        assert_eq!(time_for("dest-001"), "3 hours");
        assert_eq!(time_for("dest-002"), "8 hours");
        assert_eq!(time_for("dest-003"), "8 hours");
        assert_eq!(time_for("dest-004"), "10 hours");
    }

    #[test]
    fn test_price_stays_within_jitter_bounds() {
        // France from NYC in March: 250 * 1.5 * 1.5 (capped) * 1.0
        let estimates = simulate_flights(&sample_destinations(), "NYC", 2, noon(2024, 3, 9));
        let france = estimates.iter().find(|e| e.destination_id == "dest-002").unwrap();
        let amount = france.price_estimate.amount;
        assert!((450.0..=680.0).contains(&amount), "amount was {amount}");
    }

    #[rstest]
    #[case("Europe", "NYC", 1.5)]
    #[case("Europe", "LAX", 2.5)]
    #[case("Asia", "SFO", 2.5)]
    #[case("Asia", "NYC", 3.0)]
    #[case("Africa", "NYC", 2.8)]
    #[case("Oceania", "NYC", 3.2)]
    #[case("South America", "ATL", 1.8)]
    #[case("South America", "NYC", 2.2)]
    #[case("Americas", "NYC", 1.0)]
    fn test_distance_factor(#[case] region: &str, #[case] origin: &str, #[case] expected: f64) {
        assert!((distance_factor(region, origin) - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case("Europe", 7, 1.3)]
    #[case("Asia", 7, 1.0)]
    #[case("Asia", 12, 1.25)]
    #[case("Europe", 1, 1.25)]
    #[case("Europe", 4, 1.0)]
    fn test_seasonal_factor(#[case] region: &str, #[case] month: u32, #[case] expected: f64) {
        assert!((seasonal_factor(region, month) - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn test_popularity_factor_is_capped() {
        assert!((popularity_factor(0) - 1.0).abs() < f64::EPSILON);
        assert!((popularity_factor(25_000_000) - 1.5).abs() < f64::EPSILON);
        assert!((popularity_factor(331_002_651) - 1.5).abs() < f64::EPSILON);
    }
}
