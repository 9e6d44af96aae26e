//! # Bounding Box Parsing
//!
//! Parses the `bounding_box` query parameter used when listing locations.
//! The literal form is `min_lat,min_lon,max_lat,max_lon`; the resulting
//! [`BoundingBox`] is an inclusive, rectangular (non-geodesic) region.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

const LATITUDE_LIMIT: f64 = 90.0;
const LONGITUDE_LIMIT: f64 = 180.0;

static BOUNDING_BOX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let number = r"([-+]?(?:\d+\.?\d*|\.\d+))";
    Regex::new(&format!("^{number},{number},{number},{number}$"))
        .expect("bounding box pattern is a valid regex")
});

/// Coordinate axis named in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn short_name(self) -> &'static str {
        match self {
            Axis::Latitude => "lat",
            Axis::Longitude => "lon",
        }
    }

    fn limit(self) -> f64 {
        match self {
            Axis::Latitude => LATITUDE_LIMIT,
            Axis::Longitude => LONGITUDE_LIMIT,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("Latitude"),
            Axis::Longitude => f.write_str("Longitude"),
        }
    }
}

/// Reasons a bounding box literal is rejected. All of them are client errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundingBoxError {
    #[error("Bounding box must be in format: min_lat,min_lon,max_lat,max_lon")]
    MalformedInput,
    #[error("{0} must be between -{limit} and {limit}", limit = .0.limit())]
    OutOfRange(Axis),
    #[error("max_{short} must be greater than min_{short}", short = .0.short_name())]
    InvalidOrdering(Axis),
}

/// Inclusive latitude/longitude rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Validates ranges and ordering of already-parsed bounds.
    ///
    /// Longitude range is checked before latitude range, and both ranges
    /// before either ordering, so the first reported error is stable.
    pub fn new(
        min_lat: f64,
        min_lon: f64,
        max_lat: f64,
        max_lon: f64,
    ) -> Result<Self, BoundingBoxError> {
        if !within(min_lon, LONGITUDE_LIMIT) || !within(max_lon, LONGITUDE_LIMIT) {
            return Err(BoundingBoxError::OutOfRange(Axis::Longitude));
        }
        if !within(min_lat, LATITUDE_LIMIT) || !within(max_lat, LATITUDE_LIMIT) {
            return Err(BoundingBoxError::OutOfRange(Axis::Latitude));
        }
        if max_lon <= min_lon {
            return Err(BoundingBoxError::InvalidOrdering(Axis::Longitude));
        }
        if max_lat <= min_lat {
            return Err(BoundingBoxError::InvalidOrdering(Axis::Latitude));
        }

        Ok(Self {
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        })
    }

    /// Returns the bounds in wire order: `(min_lat, min_lon, max_lat, max_lon)`.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.min_lat, self.min_lon, self.max_lat, self.max_lon)
    }

    /// Inclusive containment check, identical to the predicate applied in SQL.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&latitude)
            && (self.min_lon..=self.max_lon).contains(&longitude)
    }
}

impl FromStr for BoundingBox {
    type Err = BoundingBoxError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();

        let captures = BOUNDING_BOX_PATTERN
            .captures(&compact)
            .ok_or(BoundingBoxError::MalformedInput)?;

        let mut bounds = [0.0_f64; 4];
        for (slot, group) in bounds.iter_mut().zip(captures.iter().skip(1)) {
            *slot = group
                .and_then(|m| m.as_str().parse::<f64>().ok())
                .ok_or(BoundingBoxError::MalformedInput)?;
        }

        let [min_lat, min_lon, max_lat, max_lon] = bounds;
        BoundingBox::new(min_lat, min_lon, max_lat, max_lon)
    }
}

/// Parses an optional bounding box literal.
///
/// An empty input means "do not filter" and yields `Ok(None)`.
pub fn parse_bounding_box(input: &str) -> Result<Option<BoundingBox>, BoundingBoxError> {
    if input.is_empty() {
        return Ok(None);
    }

    input.parse().map(Some)
}

fn within(value: f64, limit: f64) -> bool {
    (-limit..=limit).contains(&value)
}
