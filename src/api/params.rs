//! Query-string parameters and their validation

use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use serde::Deserialize;

use crate::catalog::{DestinationPredicate, GuidePredicate, GuideSort, TourPredicate, TourSort};
use crate::{Result, TourEaseError};

pub const DEFAULT_RANKING_LIMIT: usize = 5;
pub const MAX_RANKING_LIMIT: usize = 20;
pub const DEFAULT_LISTING_LIMIT: usize = 10;
pub const MAX_LISTING_LIMIT: usize = 50;

const DEFAULT_SORT: &str = "rating";

/// Unwrap an extracted query, turning malformed or missing parameters into a
/// validation error
pub fn extract<T>(query: std::result::Result<Query<T>, QueryRejection>) -> Result<T> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| TourEaseError::validation(rejection.body_text()))
}

/// `limit` or its default, rejected outside `1..=max`
pub fn bounded_limit(limit: Option<usize>, default: usize, max: usize) -> Result<usize> {
    let limit = limit.unwrap_or(default);
    if (1..=max).contains(&limit) {
        Ok(limit)
    } else {
        Err(TourEaseError::validation(format!(
            "limit must be between 1 and {max}"
        )))
    }
}

fn non_negative(name: &str, value: Option<f64>) -> Result<Option<f64>> {
    match value {
        Some(v) if v < 0.0 || v.is_nan() => Err(TourEaseError::validation(format!(
            "{name} must be greater than or equal to 0"
        ))),
        other => Ok(other),
    }
}

/// Empty query values count as absent
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn sort_name(sort_by: &Option<String>) -> &str {
    sort_by.as_deref().unwrap_or(DEFAULT_SORT)
}

#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct FlightParams {
    /// Origin city code, e.g. `NYC`
    pub origin: String,
    pub limit: Option<usize>,
}

impl FlightParams {
    pub fn origin(&self) -> Result<&str> {
        let origin = self.origin.trim();
        if origin.is_empty() {
            return Err(TourEaseError::validation("origin must not be empty"));
        }
        Ok(origin)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DestinationParams {
    pub query: Option<String>,
    pub country: Option<String>,
    pub limit: Option<usize>,
}

impl DestinationParams {
    #[must_use]
    pub fn predicates(&self) -> Vec<DestinationPredicate> {
        let mut predicates = Vec::new();
        if let Some(query) = present(&self.query) {
            predicates.push(DestinationPredicate::Query(query.to_string()));
        }
        if let Some(country) = present(&self.country) {
            predicates.push(DestinationPredicate::Country(country.to_string()));
        }
        predicates
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GuideParams {
    pub specialization: Option<String>,
    pub language: Option<String>,
    pub min_rating: Option<f64>,
    pub sort_by: Option<String>,
}

impl GuideParams {
    pub fn predicates(&self) -> Result<Vec<GuidePredicate>> {
        let mut predicates = Vec::new();
        if let Some(specialization) = present(&self.specialization) {
            predicates.push(GuidePredicate::Specialization(specialization.to_string()));
        }
        if let Some(language) = present(&self.language) {
            predicates.push(GuidePredicate::Language(language.to_string()));
        }
        if let Some(min_rating) = self.min_rating {
            if !(0.0..=5.0).contains(&min_rating) {
                return Err(TourEaseError::validation(
                    "min_rating must be between 0 and 5",
                ));
            }
            predicates.push(GuidePredicate::MinRating(min_rating));
        }
        Ok(predicates)
    }

    /// Unknown sort names keep file order
    #[must_use]
    pub fn sort(&self) -> Option<GuideSort> {
        sort_name(&self.sort_by).parse().ok()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TourParams {
    pub location: Option<String>,
    pub guide_id: Option<String>,
    pub language: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort_by: Option<String>,
}

impl TourParams {
    pub fn predicates(&self) -> Result<Vec<TourPredicate>> {
        let mut predicates = Vec::new();
        if let Some(location) = present(&self.location) {
            predicates.push(TourPredicate::Location(location.to_string()));
        }
        if let Some(guide_id) = present(&self.guide_id) {
            predicates.push(TourPredicate::GuideId(guide_id.to_string()));
        }
        if let Some(language) = present(&self.language) {
            predicates.push(TourPredicate::Language(language.to_string()));
        }
        if let Some(min_price) = non_negative("min_price", self.min_price)? {
            predicates.push(TourPredicate::MinPrice(min_price));
        }
        if let Some(max_price) = non_negative("max_price", self.max_price)? {
            predicates.push(TourPredicate::MaxPrice(max_price));
        }
        Ok(predicates)
    }

    /// Unknown sort names keep file order
    #[must_use]
    pub fn sort(&self) -> Option<TourSort> {
        sort_name(&self.sort_by).parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, 5)]
    #[case(Some(1), 1)]
    #[case(Some(20), 20)]
    fn test_limit_in_range(#[case] limit: Option<usize>, #[case] expected: usize) {
        assert_eq!(
            bounded_limit(limit, DEFAULT_RANKING_LIMIT, MAX_RANKING_LIMIT).unwrap(),
            expected
        );
    }

    #[rstest]
    #[case(Some(0))]
    #[case(Some(21))]
    fn test_limit_out_of_range(#[case] limit: Option<usize>) {
        let err = bounded_limit(limit, DEFAULT_RANKING_LIMIT, MAX_RANKING_LIMIT).unwrap_err();
        assert!(matches!(err, TourEaseError::Validation { .. }));
    }

    #[test]
    fn test_guide_defaults_to_rating_sort() {
        let params = GuideParams::default();
        assert_eq!(params.sort(), Some(GuideSort::Rating));
        assert!(params.predicates().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_sort_keeps_order() {
        let params = TourParams {
            sort_by: Some("popularity".into()),
            ..TourParams::default()
        };
        assert_eq!(params.sort(), None);
    }

    #[test]
    fn test_min_rating_bounds() {
        let params = GuideParams {
            min_rating: Some(5.5),
            ..GuideParams::default()
        };
        assert!(params.predicates().is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let params = TourParams {
            max_price: Some(-1.0),
            ..TourParams::default()
        };
        assert!(params.predicates().is_err());
    }

    #[test]
    fn test_empty_text_filters_are_ignored() {
        let params = DestinationParams {
            query: Some(String::new()),
            country: Some("fra".into()),
            limit: None,
        };
        assert_eq!(
            params.predicates(),
            vec![DestinationPredicate::Country("fra".into())]
        );
    }

    #[test]
    fn test_blank_origin_rejected() {
        let params = FlightParams {
            origin: "   ".into(),
            limit: None,
        };
        assert!(params.origin().is_err());
    }
}
