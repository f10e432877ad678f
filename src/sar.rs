//! Mock SAR sample generator
//! Jitters a handful of anchor coordinates into tagged, timestamped points for the globe view.

use chrono::{Duration, Local, NaiveDateTime};
use rand::Rng;
use serde::{Serialize, Serializer};

use crate::error::SarError;

/// Maximum jitter applied to each coordinate, in degrees.
pub const JITTER_DEGREES: f64 = 0.5;
pub const MIN_INTENSITY: f64 = 0.3;
pub const MAX_INTENSITY: f64 = 1.0;
/// Records are back-dated by up to this many whole days.
pub const MAX_AGE_DAYS: i64 = 30;
/// Largest batch `generate_at` will build; bigger requests are rejected up front.
pub const MAX_BATCH_RECORDS: usize = 1_000_000;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// A named anchor point that samples are scattered around.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseLocation {
    pub name: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl BaseLocation {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        BaseLocation {
            name: name.into(),
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FrequencyBand {
    #[serde(rename = "L-band")]
    L,
    #[serde(rename = "C-band")]
    C,
    #[serde(rename = "X-band")]
    X,
}

impl FrequencyBand {
    pub const ALL: [FrequencyBand; 3] = [FrequencyBand::L, FrequencyBand::C, FrequencyBand::X];

    pub fn as_str(self) -> &'static str {
        match self {
            FrequencyBand::L => "L-band",
            FrequencyBand::C => "C-band",
            FrequencyBand::X => "X-band",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Polarization {
    HH,
    HV,
    VV,
    VH,
}

impl Polarization {
    pub const ALL: [Polarization; 4] = [
        Polarization::HH,
        Polarization::HV,
        Polarization::VV,
        Polarization::VH,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Polarization::HH => "HH",
            Polarization::HV => "HV",
            Polarization::VV => "VV",
            Polarization::VH => "VH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceType {
    Urban,
    Forest,
    Water,
    Agriculture,
    Mountain,
}

impl SurfaceType {
    pub const ALL: [SurfaceType; 5] = [
        SurfaceType::Urban,
        SurfaceType::Forest,
        SurfaceType::Water,
        SurfaceType::Agriculture,
        SurfaceType::Mountain,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SurfaceType::Urban => "urban",
            SurfaceType::Forest => "forest",
            SurfaceType::Water => "water",
            SurfaceType::Agriculture => "agriculture",
            SurfaceType::Mountain => "mountain",
        }
    }
}

/// One generated point. Field names on the wire follow the globe client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRecord {
    pub id: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
    pub intensity: f64,
    #[serde(rename = "frequency")]
    pub frequency_band: FrequencyBand,
    pub polarization: Polarization,
    #[serde(rename = "timestamp", serialize_with = "serialize_timestamp")]
    pub captured_at: NaiveDateTime,
    pub surface_type: SurfaceType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchMetadata {
    pub collection_period: &'static str,
    pub satellite_source: &'static str,
    pub coverage_area: &'static str,
}

impl Default for BatchMetadata {
    fn default() -> Self {
        BatchMetadata {
            collection_period: "2024-09-01 to 2024-10-01",
            satellite_source: "Synthetic Aperture Radar Network",
            coverage_area: "Japan Archipelago",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SarBatch {
    pub total_points: usize,
    pub data: Vec<SampleRecord>,
    pub metadata: BatchMetadata,
}

fn serialize_timestamp<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&ts.format(TIMESTAMP_FORMAT))
}

fn pick<T: Copy, R: Rng + ?Sized>(choices: &[T], rng: &mut R) -> T {
    choices[rng.gen_range(0..choices.len())]
}

/// Generate `samples_per_location` records around every base location,
/// back-dated from the current local time.
pub fn generate<R: Rng + ?Sized>(
    base_locations: &[BaseLocation],
    samples_per_location: i64,
    rng: &mut R,
) -> Result<SarBatch, SarError> {
    generate_at(
        base_locations,
        samples_per_location,
        rng,
        Local::now().naive_local(),
    )
}

/// Same as [`generate`] with an explicit reference time.
///
/// Records come out grouped by location in input order, then by sample index.
/// Record `j` of location `i` gets the id `sar_{i}_{j}`.
///
/// Fails with [`SarError::InvalidArgument`] when the count is negative or the
/// batch would exceed [`MAX_BATCH_RECORDS`].
pub fn generate_at<R: Rng + ?Sized>(
    base_locations: &[BaseLocation],
    samples_per_location: i64,
    rng: &mut R,
    now: NaiveDateTime,
) -> Result<SarBatch, SarError> {
    let per_location = usize::try_from(samples_per_location).map_err(|_| {
        SarError::InvalidArgument(format!(
            "samples_per_location must be non-negative, got {samples_per_location}"
        ))
    })?;
    let total = base_locations
        .len()
        .checked_mul(per_location)
        .filter(|&total| total <= MAX_BATCH_RECORDS)
        .ok_or_else(|| {
            SarError::InvalidArgument(format!(
                "{} locations x {per_location} samples exceeds {MAX_BATCH_RECORDS} records",
                base_locations.len()
            ))
        })?;

    let mut data = Vec::with_capacity(total);
    for (i, base) in base_locations.iter().enumerate() {
        for j in 0..per_location {
            let age_days = rng.gen_range(0..=MAX_AGE_DAYS);
            data.push(SampleRecord {
                id: format!("sar_{i}_{j}"),
                latitude: base.latitude + rng.gen_range(-JITTER_DEGREES..=JITTER_DEGREES),
                longitude: base.longitude + rng.gen_range(-JITTER_DEGREES..=JITTER_DEGREES),
                intensity: rng.gen_range(MIN_INTENSITY..=MAX_INTENSITY),
                frequency_band: pick(&FrequencyBand::ALL, rng),
                polarization: pick(&Polarization::ALL, rng),
                captured_at: now - Duration::days(age_days),
                surface_type: pick(&SurfaceType::ALL, rng),
            });
        }
    }

    tracing::debug!(
        locations = base_locations.len(),
        per_location,
        total = data.len(),
        "generated SAR batch"
    );

    Ok(SarBatch {
        total_points: data.len(),
        data,
        metadata: BatchMetadata::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    // Offsets are added to the base before comparing, so allow for rounding.
    const EPS: f64 = 1e-9;

    fn japan() -> Vec<BaseLocation> {
        vec![
            BaseLocation::new("Tokyo", 35.6762, 139.6503),
            BaseLocation::new("Osaka", 34.6937, 135.5023),
            BaseLocation::new("Kyoto", 35.0116, 135.7681),
            BaseLocation::new("Central Japan", 36.2048, 138.2529),
            BaseLocation::new("Sapporo", 43.0642, 141.3469),
        ]
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 10, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_batch_size_and_unique_ids() {
        let mut rng = StdRng::seed_from_u64(7);
        for k in [0_i64, 1, 5, 12] {
            let batch = generate(&japan(), k, &mut rng).unwrap();
            assert_eq!(batch.data.len(), 5 * k as usize);
            assert_eq!(batch.total_points, batch.data.len());
            let ids: HashSet<_> = batch.data.iter().map(|r| r.id.as_str()).collect();
            assert_eq!(ids.len(), batch.data.len());
        }
    }

    #[test]
    fn test_records_stay_in_bounds() {
        let locations = japan();
        let mut rng = StdRng::seed_from_u64(42);
        let now = noon();
        let batch = generate_at(&locations, 50, &mut rng, now).unwrap();

        for (idx, record) in batch.data.iter().enumerate() {
            let base = &locations[idx / 50];
            assert!((record.latitude - base.latitude).abs() <= JITTER_DEGREES + EPS);
            assert!((record.longitude - base.longitude).abs() <= JITTER_DEGREES + EPS);
            assert!((MIN_INTENSITY..=MAX_INTENSITY).contains(&record.intensity));
            let age = now - record.captured_at;
            assert!(age >= Duration::zero() && age <= Duration::days(MAX_AGE_DAYS));
            assert_eq!(age.num_seconds() % 86_400, 0);
        }
    }

    #[test]
    fn test_location_major_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let batch = generate(&japan(), 3, &mut rng).unwrap();
        let ids: Vec<_> = batch.data.iter().map(|r| r.id.clone()).collect();
        assert_eq!(&ids[..4], ["sar_0_0", "sar_0_1", "sar_0_2", "sar_1_0"]);
        assert_eq!(ids.last().map(String::as_str), Some("sar_4_2"));
    }

    #[test]
    fn test_tokyo_example() {
        let tokyo = vec![BaseLocation::new("Tokyo", 35.6762, 139.6503)];
        let mut rng = StdRng::seed_from_u64(2024);
        let batch = generate(&tokyo, 5, &mut rng).unwrap();
        let ids: Vec<_> = batch.data.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["sar_0_0", "sar_0_1", "sar_0_2", "sar_0_3", "sar_0_4"]);
        for record in &batch.data {
            assert!((record.latitude - 35.6762).abs() <= 0.5 + EPS);
            assert!((record.longitude - 139.6503).abs() <= 0.5 + EPS);
        }
    }

    #[test]
    fn test_empty_inputs() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(generate(&japan(), 0, &mut rng).unwrap().data.is_empty());
        let batch = generate(&[], 5, &mut rng).unwrap();
        assert_eq!(batch.total_points, 0);
        assert_eq!(batch.metadata, BatchMetadata::default());
    }

    #[test]
    fn test_negative_count_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        let err = generate(&japan(), -1, &mut rng).unwrap_err();
        assert!(matches!(err, SarError::InvalidArgument(_)));
        assert!(matches!(
            generate(&[], -1, &mut rng),
            Err(SarError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_batch_size_limit() {
        let mut rng = StdRng::seed_from_u64(3);
        let err = generate(&japan(), 1_i64 << 60, &mut rng).unwrap_err();
        assert!(matches!(err, SarError::InvalidArgument(_)));

        let per_location = (MAX_BATCH_RECORDS / 5 + 1) as i64;
        assert!(matches!(
            generate(&japan(), per_location, &mut rng),
            Err(SarError::InvalidArgument(_))
        ));
        // An empty location list never grows, whatever the count.
        let huge = i64::from(i32::MAX);
        assert!(generate(&[], huge, &mut rng).unwrap().data.is_empty());
    }

    #[test]
    fn test_seeded_output_reproducible() {
        let now = noon();
        let a = generate_at(&japan(), 4, &mut StdRng::seed_from_u64(99), now).unwrap();
        let b = generate_at(&japan(), 4, &mut StdRng::seed_from_u64(99), now).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_wire_format() {
        let tokyo = vec![BaseLocation::new("Tokyo", 35.6762, 139.6503)];
        let batch = generate_at(&tokyo, 1, &mut StdRng::seed_from_u64(5), noon()).unwrap();
        let value = serde_json::to_value(&batch).unwrap();

        assert_eq!(value["total_points"], 1);
        assert_eq!(value["metadata"]["coverage_area"], "Japan Archipelago");
        let record = &value["data"][0];
        for key in [
            "id", "lat", "lng", "intensity", "frequency", "polarization", "timestamp",
            "surface_type",
        ] {
            assert!(record.get(key).is_some(), "missing {key}");
        }
        let band = record["frequency"].as_str().unwrap();
        assert!(FrequencyBand::ALL.iter().any(|b| b.as_str() == band));
        let surface = record["surface_type"].as_str().unwrap();
        assert!(SurfaceType::ALL.iter().any(|s| s.as_str() == surface));
        let pol = record["polarization"].as_str().unwrap();
        assert!(Polarization::ALL.iter().any(|p| p.as_str() == pol));

        let ts = record["timestamp"].as_str().unwrap();
        assert!(NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT).is_ok());
        assert!(ts.ends_with("12:00:00.000000"));
    }
}
