use std::collections::HashMap;

use geo::Coord;

/// A bare WGS84 coordinate in degrees.
///
/// # Examples
/// ```
/// use georoute_core::LatLng;
///
/// let coord = LatLng::new(51.1483, -115.57);
/// assert_eq!(coord.lat, 51.1483);
/// assert_eq!(coord.lng, -115.57);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLng {
    /// Latitude in degrees, `[-90, 90]`.
    pub lat: f64,
    /// Longitude in degrees, `[-180, 180]`.
    pub lng: f64,
}

impl LatLng {
    /// Construct a coordinate from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components are finite and inside the WGS84 ranges.
    ///
    /// # Examples
    /// ```
    /// use georoute_core::LatLng;
    ///
    /// assert!(LatLng::new(90.0, -180.0).is_valid());
    /// assert!(!LatLng::new(90.5, 0.0).is_valid());
    /// assert!(!LatLng::new(f64::NAN, 0.0).is_valid());
    /// ```
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<LatLng> for Coord<f64> {
    fn from(value: LatLng) -> Self {
        Self {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl From<Coord<f64>> for LatLng {
    fn from(value: Coord<f64>) -> Self {
        Self {
            lat: value.y,
            lng: value.x,
        }
    }
}

/// A named place to visit, or the start location of a trip.
///
/// Identifiers are opaque strings supplied by the caller and must be unique
/// within a request. Serialised field names follow the HTTP contract
/// (`id`, `name`, `lat`, `lng`).
///
/// # Examples
/// ```
/// use georoute_core::Point;
///
/// let poi = Point::new("p1", "Banff Gondola", 51.1483, -115.57);
///
/// assert_eq!(poi.id, "p1");
/// assert_eq!(poi.position().lat, 51.1483);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Unique identifier within the request.
    pub id: String,
    /// Display name used by the itinerary.
    pub name: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl Point {
    /// Construct a point from its identifier, name and coordinates.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lat,
            lng,
        }
    }

    /// The point's coordinates.
    #[must_use]
    pub const fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// The point as a `geo` coordinate (`x = lng`, `y = lat`).
    #[must_use]
    pub const fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.lng,
            y: self.lat,
        }
    }
}

/// Points of one request keyed by identifier.
///
/// Built once per request so repeated lookups avoid a linear scan. When an
/// identifier repeats, the first point carrying it wins.
///
/// # Examples
/// ```
/// use georoute_core::{Point, PointIndex};
///
/// let points = vec![Point::new("a", "Alpha", 1.0, 2.0)];
/// let index = PointIndex::new(&points);
/// assert_eq!(index.get("a").map(|p| p.name.as_str()), Some("Alpha"));
/// assert!(index.get("b").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PointIndex<'a> {
    points: &'a [Point],
    by_id: HashMap<&'a str, usize>,
}

impl<'a> PointIndex<'a> {
    /// Index `points` by identifier.
    #[must_use]
    pub fn new(points: &'a [Point]) -> Self {
        let mut by_id = HashMap::with_capacity(points.len());
        for (position, point) in points.iter().enumerate() {
            by_id.entry(point.id.as_str()).or_insert(position);
        }
        Self { points, by_id }
    }

    /// The point carrying `id`, if any.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'a Point> {
        self.by_id
            .get(id)
            .and_then(|&position| self.points.get(position))
    }
}
