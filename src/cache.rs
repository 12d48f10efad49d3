use std::fmt;

use chrono::NaiveDate;
use dashmap::DashMap;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{Result, TourEaseError};

/// Key of a cached enrichment result.
///
/// Time-sensitive keys carry the calendar day, so yesterday's entries are
/// shadowed rather than evicted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Trending {
        limit: usize,
    },
    Flights {
        origin: String,
        limit: usize,
        date: NaiveDate,
    },
    Weather {
        destination_id: String,
        date: NaiveDate,
    },
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Trending { limit } => write!(f, "trending:{limit}"),
            CacheKey::Flights {
                origin,
                limit,
                date,
            } => write!(f, "flights:{origin}:{limit}:{}", date.format("%Y-%m-%d")),
            CacheKey::Weather {
                destination_id,
                date,
            } => write!(f, "weather:{destination_id}:{}", date.format("%Y-%m-%d")),
        }
    }
}

/// Process-wide response cache.
///
/// Entries never expire. Two requests racing on the same missing key both
/// compute and the later write wins.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: DashMap<String, Value>,
}

impl ResponseCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(name = "query_cache", level = "debug", skip_all, fields(key = %key))]
    pub fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> Result<Option<T>> {
        let Some(value) = self.entries.get(&key.to_string()).map(|v| v.value().clone()) else {
            tracing::debug!("Key not found");
            return Ok(None);
        };
        tracing::debug!("Key found");
        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| TourEaseError::cache(format!("Cached entry has unexpected shape: {e}")))
    }

    #[tracing::instrument(name = "put_cache", level = "debug", skip_all, fields(key = %key))]
    pub fn put<T: Serialize>(&self, key: &CacheKey, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(&key.to_string())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(CacheKey::Trending { limit: 5 }, "trending:5")]
    #[case(
        CacheKey::Flights { origin: "NYC".into(), limit: 10, date: date(2024, 3, 9) },
        "flights:NYC:10:2024-03-09"
    )]
    #[case(
        CacheKey::Weather { destination_id: "dest-002".into(), date: date(2024, 12, 31) },
        "weather:dest-002:2024-12-31"
    )]
    fn test_cache_key_format(#[case] key: CacheKey, #[case] expected: &str) {
        assert_eq!(key.to_string(), expected);
    }

    #[test]
    fn test_put_then_get() {
        let cache = ResponseCache::new();
        let key = CacheKey::Trending { limit: 3 };
        assert!(cache.get::<Vec<String>>(&key).unwrap().is_none());

        cache.put(&key, &vec!["dest-001".to_string()]).unwrap();
        let cached: Option<Vec<String>> = cache.get(&key).unwrap();
        assert_eq!(cached, Some(vec!["dest-001".to_string()]));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_day_change_shadows_old_entry() {
        let cache = ResponseCache::new();
        let monday = CacheKey::Weather {
            destination_id: "dest-003".into(),
            date: date(2024, 5, 6),
        };
        let tuesday = CacheKey::Weather {
            destination_id: "dest-003".into(),
            date: date(2024, 5, 7),
        };
        cache.put(&monday, &1).unwrap();

        assert!(!cache.contains(&tuesday));
        // the old day stays around
        assert!(cache.contains(&monday));
    }

    #[test]
    fn test_type_mismatch_is_an_error() {
        let cache = ResponseCache::new();
        let key = CacheKey::Trending { limit: 1 };
        cache.put(&key, &"not a number").unwrap();
        assert!(matches!(
            cache.get::<u32>(&key),
            Err(TourEaseError::Cache { .. })
        ));
    }
}
