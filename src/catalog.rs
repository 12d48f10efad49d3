//! Catalog query engine
//!
//! Pure filtering and ordering over loaded catalog records. Predicates are
//! combined with logical AND, so the order they are supplied in never changes
//! the result. Sorting is stable: records with equal keys keep their input order.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::models::{Destination, Tour, TourGuide};

/// A filter over one kind of record
pub trait Predicate<T> {
    fn matches(&self, record: &T) -> bool;
}

/// A total order over one kind of record
pub trait SortKey<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Keep the records matching every predicate, then stable-sort by `sort`.
///
/// No predicates means no constraint; no sort key keeps input order.
pub fn filter_and_sort<T, P, S>(records: Vec<T>, predicates: &[P], sort: Option<&S>) -> Vec<T>
where
    P: Predicate<T>,
    S: SortKey<T>,
{
    let mut selected: Vec<T> = records
        .into_iter()
        .filter(|record| predicates.iter().all(|p| p.matches(record)))
        .collect();

    if let Some(sort) = sort {
        selected.sort_by(|a, b| sort.compare(a, b));
    }
    selected
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn speaks(languages: &[String], language: &str) -> bool {
    let language = language.to_lowercase();
    languages.iter().any(|l| l.to_lowercase() == language)
}

// Tour guides

#[derive(Debug, Clone, PartialEq)]
pub enum GuidePredicate {
    /// Case-insensitive substring of the specialization
    Specialization(String),
    Language(String),
    MinRating(f64),
}

impl Predicate<TourGuide> for GuidePredicate {
    fn matches(&self, guide: &TourGuide) -> bool {
        match self {
            GuidePredicate::Specialization(s) => contains_ignore_case(&guide.specialization, s),
            GuidePredicate::Language(l) => speaks(&guide.languages, l),
            GuidePredicate::MinRating(min) => guide.rating >= *min,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideSort {
    /// Highest rated first
    Rating,
    /// Most experienced first
    Experience,
    Name,
}

impl SortKey<TourGuide> for GuideSort {
    fn compare(&self, a: &TourGuide, b: &TourGuide) -> Ordering {
        match self {
            GuideSort::Rating => b.rating.total_cmp(&a.rating),
            GuideSort::Experience => b.experience_years.cmp(&a.experience_years),
            GuideSort::Name => a.name.cmp(&b.name),
        }
    }
}

impl FromStr for GuideSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(GuideSort::Rating),
            "experience" => Ok(GuideSort::Experience),
            "name" => Ok(GuideSort::Name),
            other => Err(format!("unknown guide sort '{other}'")),
        }
    }
}

// Tours

#[derive(Debug, Clone, PartialEq)]
pub enum TourPredicate {
    /// Case-insensitive substring of the location
    Location(String),
    /// Exact guide id
    GuideId(String),
    Language(String),
    MinPrice(f64),
    MaxPrice(f64),
}

impl Predicate<Tour> for TourPredicate {
    fn matches(&self, tour: &Tour) -> bool {
        match self {
            TourPredicate::Location(l) => contains_ignore_case(&tour.location, l),
            TourPredicate::GuideId(id) => tour.guide_id == *id,
            TourPredicate::Language(l) => speaks(&tour.languages, l),
            TourPredicate::MinPrice(min) => tour.price >= *min,
            TourPredicate::MaxPrice(max) => tour.price <= *max,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourSort {
    /// Highest rated first
    Rating,
    PriceLow,
    PriceHigh,
    /// Shortest first
    Duration,
}

impl SortKey<Tour> for TourSort {
    fn compare(&self, a: &Tour, b: &Tour) -> Ordering {
        match self {
            TourSort::Rating => b.rating.total_cmp(&a.rating),
            TourSort::PriceLow => a.price.total_cmp(&b.price),
            TourSort::PriceHigh => b.price.total_cmp(&a.price),
            TourSort::Duration => a.duration_hours.total_cmp(&b.duration_hours),
        }
    }
}

impl FromStr for TourSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(TourSort::Rating),
            "price_low" => Ok(TourSort::PriceLow),
            "price_high" => Ok(TourSort::PriceHigh),
            "duration" => Ok(TourSort::Duration),
            other => Err(format!("unknown tour sort '{other}'")),
        }
    }
}

// Destinations

#[derive(Debug, Clone, PartialEq)]
pub enum DestinationPredicate {
    /// Substring of name, capital or region
    Query(String),
    /// Substring of the country name
    Country(String),
}

impl Predicate<Destination> for DestinationPredicate {
    fn matches(&self, destination: &Destination) -> bool {
        match self {
            DestinationPredicate::Query(q) => {
                contains_ignore_case(&destination.name, q)
                    || contains_ignore_case(&destination.capital, q)
                    || contains_ignore_case(&destination.region, q)
            }
            DestinationPredicate::Country(c) => contains_ignore_case(&destination.name, c),
        }
    }
}

/// Largest population first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByPopulation;

impl SortKey<Destination> for ByPopulation {
    fn compare(&self, a: &Destination, b: &Destination) -> Ordering {
        b.population.cmp(&a.population)
    }
}

/// The `limit` most populous destinations, largest first
#[must_use]
pub fn most_populous(destinations: Vec<Destination>, limit: usize) -> Vec<Destination> {
    let mut ranked =
        filter_and_sort::<_, DestinationPredicate, _>(destinations, &[], Some(&ByPopulation));
    ranked.truncate(limit);
    ranked
}
