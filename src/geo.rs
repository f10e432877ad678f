use serde::Serialize;

use crate::config::MapCenter;
use crate::sar::BaseLocation;

/// Anchor points used for `/api/sar-data`, in id order.
pub fn japan_base_locations() -> Vec<BaseLocation> {
    vec![
        BaseLocation::new("Tokyo", 35.6762, 139.6503),
        BaseLocation::new("Osaka", 34.6937, 135.5023),
        BaseLocation::new("Kyoto", 35.0116, 135.7681),
        BaseLocation::new("Central Japan", 36.2048, 138.2529),
        BaseLocation::new("Sapporo", 43.0642, 141.3469),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

/// A zone with ongoing acquisitions; `activity` is in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveZone {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub activity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JapanCoordinates {
    pub country: &'static str,
    pub coordinates: LatLng,
    pub regions: Vec<Region>,
    pub sar_active_zones: Vec<ActiveZone>,
}

impl JapanCoordinates {
    pub fn new(center: MapCenter) -> Self {
        JapanCoordinates {
            country: "Japan",
            coordinates: LatLng {
                lat: center.lat,
                lng: center.lng,
            },
            regions: vec![
                Region { name: "Hokkaido", lat: 43.2203, lng: 142.8635 },
                Region { name: "Honshu", lat: 36.2048, lng: 138.2529 },
                Region { name: "Kyushu", lat: 31.7917, lng: 130.7633 },
                Region { name: "Shikoku", lat: 33.7838, lng: 133.6585 },
            ],
            sar_active_zones: vec![
                ActiveZone { name: "Tokyo Bay", lat: 35.5494, lng: 139.7798, activity: 0.95 },
                ActiveZone { name: "Osaka Bay", lat: 34.6197, lng: 135.4305, activity: 0.87 },
                ActiveZone { name: "Sendai Plains", lat: 38.2682, lng: 140.8694, activity: 0.72 },
            ],
        }
    }
}
