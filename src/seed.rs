//! Sample catalog data written on first start.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::models::{Destination, GuideAvailability, GuideContact, Tour, TourGuide};
use crate::store::{RecordKind, RecordStore};

/// Write the sample data for every kind whose file is missing.
///
/// Returns the kinds that were written.
pub fn ensure_seeded(store: &RecordStore, now: DateTime<Utc>) -> Vec<RecordKind> {
    let mut written = Vec::new();

    if !store.exists(RecordKind::Guides) && store.save(RecordKind::Guides, &stamp_guides(now)) {
        written.push(RecordKind::Guides);
    }
    if !store.exists(RecordKind::Tours) && store.save(RecordKind::Tours, &stamp_tours(now)) {
        written.push(RecordKind::Tours);
    }
    if !store.exists(RecordKind::Destinations)
        && store.save(RecordKind::Destinations, &stamp_destinations(now))
    {
        written.push(RecordKind::Destinations);
    }

    for kind in &written {
        info!(
            "Seeded {} in {}",
            kind.file_name(),
            store.data_dir().display()
        );
    }
    written
}

fn stamp_guides(now: DateTime<Utc>) -> Vec<TourGuide> {
    sample_guides()
        .into_iter()
        .map(|mut guide| {
            guide.created_at = Some(now);
            guide.updated_at = Some(now);
            guide
        })
        .collect()
}

fn stamp_tours(now: DateTime<Utc>) -> Vec<Tour> {
    sample_tours()
        .into_iter()
        .map(|mut tour| {
            tour.created_at = Some(now);
            tour.updated_at = Some(now);
            tour
        })
        .collect()
}

fn stamp_destinations(now: DateTime<Utc>) -> Vec<Destination> {
    sample_destinations()
        .into_iter()
        .map(|mut destination| {
            destination.created_at = Some(now);
            destination.updated_at = Some(now);
            destination
        })
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn guide(
    id: &str,
    name: &str,
    age: u8,
    languages: &[&str],
    specialization: &str,
    experience_years: u32,
    rating: f64,
    bio: &str,
    email: &str,
    phone: &str,
    days: &[&str],
    hours: &str,
    certifications: &[&str],
    tours_conducted: u32,
) -> TourGuide {
    TourGuide {
        id: id.to_string(),
        name: name.to_string(),
        age,
        languages: strings(languages),
        specialization: specialization.to_string(),
        experience_years,
        rating,
        bio: bio.to_string(),
        contact: GuideContact {
            email: email.to_string(),
            phone: phone.to_string(),
        },
        availability: GuideAvailability {
            days: strings(days),
            hours: hours.to_string(),
        },
        certifications: strings(certifications),
        profile_image: "/placeholders/profile-placeholder.jpg".to_string(),
        tours_conducted,
        created_at: None,
        updated_at: None,
    }
}

#[must_use]
pub fn sample_guides() -> Vec<TourGuide> {
    vec![
        guide(
            "tg-001",
            "Emma Rodriguez",
            32,
            &["English", "Spanish", "French"],
            "Historical Tours",
            8,
            4.9,
            "Passionate historian with extensive knowledge of European architecture and cultural heritage.",
            "emma.r@tourease.com",
            "+1-555-123-4567",
            &["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
            "9:00 AM - 6:00 PM",
            &["Licensed Tour Guide", "First Aid Certified", "History Major"],
            245,
        ),
        guide(
            "tg-002",
            "David Chen",
            29,
            &["English", "Mandarin", "Japanese"],
            "Adventure Tours",
            5,
            4.7,
            "Adventure enthusiast specialized in hiking, mountain climbing, and outdoor survival.",
            "david.c@tourease.com",
            "+1-555-987-6543",
            &["Wednesday", "Thursday", "Friday", "Saturday", "Sunday"],
            "8:00 AM - 5:00 PM",
            &["Wilderness First Responder", "Rock Climbing Instructor", "Survival Training"],
            132,
        ),
        guide(
            "tg-003",
            "Sophie Martin",
            35,
            &["English", "French", "German"],
            "Culinary Tours",
            10,
            4.8,
            "Former chef turned tour guide with expertise in local cuisines and food markets across Europe.",
            "sophie.m@tourease.com",
            "+1-555-456-7890",
            &["Monday", "Tuesday", "Friday", "Saturday", "Sunday"],
            "10:00 AM - 7:00 PM",
            &["Culinary Arts Degree", "Food Safety Certificate", "Wine Sommelier"],
            189,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn tour(
    id: &str,
    name: &str,
    description: &str,
    duration_hours: f64,
    price: f64,
    location: &str,
    max_participants: u32,
    guide_id: &str,
    rating: f64,
    languages: &[&str],
    includes: &[&str],
    meeting_point: &str,
) -> Tour {
    Tour {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        duration_hours,
        price,
        location: location.to_string(),
        max_participants,
        guide_id: guide_id.to_string(),
        rating,
        languages: strings(languages),
        includes: strings(includes),
        meeting_point: meeting_point.to_string(),
        created_at: None,
        updated_at: None,
    }
}

#[must_use]
pub fn sample_tours() -> Vec<Tour> {
    vec![
        tour(
            "tour-001",
            "Historical Rome Walking Tour",
            "Explore ancient Rome's most significant sites with expert historical commentary.",
            3.0,
            49.99,
            "Rome, Italy",
            12,
            "tg-001",
            4.8,
            &["English", "Spanish"],
            &["Professional guide", "Small group experience", "Entry tickets"],
            "Spanish Steps, Rome",
        ),
        tour(
            "tour-002",
            "Mount Fuji Hiking Adventure",
            "A challenging day hike on Japan's iconic mountain with stunning views.",
            8.0,
            89.99,
            "Mount Fuji, Japan",
            8,
            "tg-002",
            4.7,
            &["English", "Japanese"],
            &["Expert guide", "Safety equipment", "Lunch box", "Transportation"],
            "Fujinomiya 5th Station",
        ),
        tour(
            "tour-003",
            "Paris Gourmet Food Tour",
            "Taste your way through Parisian markets, bakeries, and specialty food shops.",
            4.0,
            69.99,
            "Paris, France",
            10,
            "tg-003",
            4.9,
            &["English", "French"],
            &["Food tastings", "Wine samples", "Market tour", "Recipe booklet"],
            "Le Marais district, Paris",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn destination(
    id: &str,
    name: &str,
    capital: &str,
    region: &str,
    subregion: &str,
    population: u64,
    languages: &[&str],
    currencies: &[&str],
    flag_code: &str,
    coordinates: [f64; 2],
    timezones: &[&str],
) -> Destination {
    Destination {
        id: id.to_string(),
        name: name.to_string(),
        capital: capital.to_string(),
        region: region.to_string(),
        subregion: subregion.to_string(),
        population,
        languages: strings(languages),
        currencies: strings(currencies),
        flag: format!("https://flagcdn.com/w320/{flag_code}.png"),
        coordinates: coordinates.to_vec(),
        timezones: strings(timezones),
        created_at: None,
        updated_at: None,
    }
}

#[must_use]
pub fn sample_destinations() -> Vec<Destination> {
    vec![
        destination(
            "dest-001",
            "United States",
            "Washington, D.C.",
            "Americas",
            "North America",
            331_002_651,
            &["English"],
            &["United States Dollar"],
            "us",
            [38.0, -97.0],
            &[
                "UTC-12:00", "UTC-11:00", "UTC-10:00", "UTC-09:00", "UTC-08:00", "UTC-07:00",
                "UTC-06:00", "UTC-05:00", "UTC-04:00", "UTC+10:00", "UTC+12:00",
            ],
        ),
        destination(
            "dest-002",
            "France",
            "Paris",
            "Europe",
            "Western Europe",
            67_391_582,
            &["French"],
            &["Euro"],
            "fr",
            [46.0, 2.0],
            &[
                "UTC-10:00", "UTC-09:30", "UTC-09:00", "UTC-08:00", "UTC-04:00", "UTC-03:00",
                "UTC+01:00", "UTC+02:00", "UTC+03:00", "UTC+04:00", "UTC+05:00", "UTC+10:00",
                "UTC+11:00", "UTC+12:00",
            ],
        ),
        destination(
            "dest-003",
            "Japan",
            "Tokyo",
            "Asia",
            "Eastern Asia",
            125_836_021,
            &["Japanese"],
            &["Japanese Yen"],
            "jp",
            [36.0, 138.0],
            &["UTC+09:00"],
        ),
        destination(
            "dest-004",
            "Australia",
            "Canberra",
            "Oceania",
            "Australia and New Zealand",
            25_687_041,
            &["English"],
            &["Australian Dollar"],
            "au",
            [-27.0, 133.0],
            &[
                "UTC+05:00", "UTC+06:30", "UTC+07:00", "UTC+08:00", "UTC+09:30", "UTC+10:00",
                "UTC+10:30", "UTC+11:30",
            ],
        ),
        destination(
            "dest-005",
            "South Africa",
            "Pretoria",
            "Africa",
            "Southern Africa",
            59_308_690,
            &[
                "Afrikaans", "English", "Southern Ndebele", "Northern Sotho", "Southern Sotho",
                "Swazi", "Tswana", "Tsonga", "Venda", "Xhosa", "Zulu",
            ],
            &["South African Rand"],
            "za",
            [-29.0, 24.0],
            &["UTC+02:00"],
        ),
        destination(
            "dest-006",
            "Italy",
            "Rome",
            "Europe",
            "Southern Europe",
            59_554_023,
            &["Italian"],
            &["Euro"],
            "it",
            [42.833_333_33, 12.833_333_33],
            &["UTC+01:00"],
        ),
        destination(
            "dest-007",
            "Thailand",
            "Bangkok",
            "Asia",
            "South-Eastern Asia",
            69_625_582,
            &["Thai"],
            &["Thai baht"],
            "th",
            [15.0, 100.0],
            &["UTC+07:00"],
        ),
        destination(
            "dest-008",
            "Brazil",
            "Brasília",
            "Americas",
            "South America",
            212_559_409,
            &["Portuguese"],
            &["Brazilian real"],
            "br",
            [-10.0, -55.0],
            &["UTC-05:00", "UTC-04:00", "UTC-03:00", "UTC-02:00"],
        ),
        destination(
            "dest-009",
            "Egypt",
            "Cairo",
            "Africa",
            "Northern Africa",
            102_334_403,
            &["Arabic"],
            &["Egyptian pound"],
            "eg",
            [27.0, 30.0],
            &["UTC+02:00"],
        ),
        destination(
            "dest-010",
            "Mexico",
            "Mexico City",
            "Americas",
            "North America",
            128_932_753,
            &["Spanish"],
            &["Mexican peso"],
            "mx",
            [23.0, -102.0],
            &["UTC-08:00", "UTC-07:00", "UTC-06:00"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_seeds_only_missing_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::new(temp_dir.path());
        let now = Utc::now();

        assert!(store.save(RecordKind::Tours, &Vec::<Tour>::new()));
        let written = ensure_seeded(&store, now);

        assert_eq!(written, vec![RecordKind::Guides, RecordKind::Destinations]);
        let tours: Vec<Tour> = store.load(RecordKind::Tours);
        assert!(tours.is_empty());

        let guides: Vec<TourGuide> = store.load(RecordKind::Guides);
        assert_eq!(guides.len(), 3);
        assert_eq!(guides[0].created_at, Some(now));

        let destinations: Vec<Destination> = store.load(RecordKind::Destinations);
        assert_eq!(destinations.len(), 10);
        assert!(
            destinations
                .iter()
                .all(|d| d.created_at == Some(now) && d.updated_at == Some(now))
        );
    }

    #[test]
    fn test_sample_data_is_consistent() {
        let guide_ids: Vec<String> = sample_guides().into_iter().map(|g| g.id).collect();
        for tour in sample_tours() {
            assert!(guide_ids.contains(&tour.guide_id), "{} has no guide", tour.id);
        }
        assert_eq!(sample_destinations().len(), 10);
    }
}
