//! Seasonal trending heuristic

use crate::catalog;
use crate::models::{Destination, RankedDestination};

/// Population at which the population factor saturates is ten times this
const POPULATION_UNIT: f64 = 10_000_000.0;
const MAX_POPULATION_FACTOR: f64 = 10.0;

/// Northern-hemisphere season, three calendar months each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    #[must_use]
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }

    #[must_use]
    pub fn trending_regions(self) -> &'static [&'static str] {
        match self {
            Season::Spring => &["Europe", "Asia"],
            Season::Summer => &["Europe", "North America"],
            Season::Fall => &["Asia", "Oceania"],
            Season::Winter => &["North America", "Asia", "Oceania"],
        }
    }

    #[must_use]
    pub fn trending_subregions(self) -> &'static [&'static str] {
        match self {
            Season::Spring => &["Southern Europe", "Eastern Asia", "South-Eastern Asia"],
            Season::Summer => &[
                "Mediterranean",
                "Northern Europe",
                "Western Europe",
                "Caribbean",
            ],
            Season::Fall => &["South-Eastern Asia", "Australia and New Zealand"],
            Season::Winter => &["Caribbean", "South-Eastern Asia", "Polynesia"],
        }
    }

    fn has_region(self, region: &str) -> bool {
        self.trending_regions().contains(&region)
    }

    fn has_subregion(self, subregion: &str) -> bool {
        self.trending_subregions().contains(&subregion)
    }
}

#[must_use]
pub fn is_trending(destination: &Destination, season: Season) -> bool {
    season.has_region(&destination.region) || season.has_subregion(&destination.subregion)
}

#[must_use]
pub fn trending_score(destination: &Destination, season: Season) -> f64 {
    let region_score = if season.has_region(&destination.region) { 2.0 } else { 1.0 };
    let subregion_score = if season.has_subregion(&destination.subregion) { 3.0 } else { 1.0 };
    #[allow(clippy::cast_precision_loss)]
    let population_factor =
        (destination.population as f64 / POPULATION_UNIT).min(MAX_POPULATION_FACTOR);
    region_score * subregion_score * population_factor
}

/// Top `limit` trending destinations for `season`.
///
/// When fewer than `limit` destinations are in season, returns the most
/// populous destinations instead, and those carry no score.
#[must_use]
pub fn rank_trending(
    destinations: &[Destination],
    season: Season,
    limit: usize,
) -> Vec<RankedDestination> {
    let mut scored: Vec<RankedDestination> = destinations
        .iter()
        .filter(|d| is_trending(d, season))
        .map(|d| RankedDestination::scored(d.clone(), trending_score(d, season)))
        .collect();

    if scored.len() < limit {
        return catalog::most_populous(destinations.to_vec(), limit)
            .into_iter()
            .map(RankedDestination::unscored)
            .collect();
    }

    scored.sort_by(|a, b| {
        let a = a.trending_score.unwrap_or_default();
        let b = b.trending_score.unwrap_or_default();
        b.total_cmp(&a)
    });
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_destinations;
    use rstest::rstest;

    fn names(ranked: &[RankedDestination]) -> Vec<&str> {
        ranked.iter().map(|r| r.destination.name.as_str()).collect()
    }

    #[rstest]
    #[case(3, Season::Spring)]
    #[case(5, Season::Spring)]
    #[case(6, Season::Summer)]
    #[case(8, Season::Summer)]
    #[case(9, Season::Fall)]
    #[case(11, Season::Fall)]
    #[case(12, Season::Winter)]
    #[case(1, Season::Winter)]
    #[case(2, Season::Winter)]
    fn test_season_buckets(#[case] month: u32, #[case] expected: Season) {
        assert_eq!(Season::from_month(month), expected);
    }

    #[test]
    fn test_score_components() {
        let destinations = sample_destinations();
        let thailand = &destinations[6];
        // region and subregion both trending in fall: 2 * 3 * 6.96
        let score = trending_score(thailand, Season::Fall);
        assert!((score - 41.775_349_2).abs() < 1e-6);

        // Japan's population factor is capped at 10
        let japan = &destinations[2];
        assert!((trending_score(japan, Season::Fall) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_non_decreasing_in_population() {
        let mut small = sample_destinations()[5].clone();
        let mut large = small.clone();
        for population in [0, 1_000, 9_999_999, 50_000_000, 99_999_999, 100_000_000, 400_000_000] {
            small.population = population;
            large.population = population + 1;
            for season in [Season::Spring, Season::Summer, Season::Fall, Season::Winter] {
                assert!(trending_score(&small, season) <= trending_score(&large, season));
            }
        }
    }

    #[test]
    fn test_rank_sorts_by_score() {
        let ranked = rank_trending(&sample_destinations(), Season::Spring, 4);
        assert_eq!(names(&ranked), vec!["Japan", "Thailand", "Italy", "France"]);
        assert!(ranked.iter().all(|r| r.trending_score.is_some()));
    }

    #[test]
    fn test_rank_truncates() {
        let ranked = rank_trending(&sample_destinations(), Season::Fall, 2);
        assert_eq!(names(&ranked), vec!["Thailand", "Japan"]);
    }

    #[test]
    fn test_fallback_is_by_population_without_score() {
        // only France and Italy are in season for summer
        let ranked = rank_trending(&sample_destinations(), Season::Summer, 5);
        assert_eq!(
            names(&ranked),
            vec!["United States", "Brazil", "Mexico", "Japan", "Egypt"]
        );
        assert!(ranked.iter().all(|r| r.trending_score.is_none()));
    }
}
