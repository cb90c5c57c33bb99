//! Lodging suggestions around the geometric centre of a trip.
//!
//! A [`CentroidCalculator`] reduces the trip's points to a single meeting
//! point and attaches pre-formatted search links for accommodation sites.

use geo::{Centroid, MultiPoint};
use thiserror::Error;
use url::form_urlencoded;

use crate::{LatLng, Point};

/// Search radius applied when the caller does not provide one.
pub const DEFAULT_BUFFER_RADIUS_KM: f64 = 5.0;

const BOOKING_COM_SEARCH_URL: &str = "https://www.booking.com/searchresults.html";
const AIRBNB_SEARCH_URL: &str = "https://www.airbnb.com/s/homes";

/// Parameters for a lodging calculation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct LodgingRequest {
    /// Points whose centre is sought.
    pub points: Vec<Point>,
    /// Radius around the centroid to search for lodging.
    pub buffer_radius_km: f64,
}

impl Default for LodgingRequest {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            buffer_radius_km: DEFAULT_BUFFER_RADIUS_KM,
        }
    }
}

/// Pre-built accommodation search links for a lodging zone.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BookingLinks {
    /// Booking.com search around the centroid.
    pub booking_com: String,
    /// Airbnb search centred on the centroid.
    pub airbnb: String,
}

impl BookingLinks {
    /// Format search links for `centroid` and `radius_km`.
    ///
    /// Coordinates are rendered with four decimal places.
    ///
    /// # Examples
    /// ```
    /// use georoute_core::{BookingLinks, LatLng};
    ///
    /// let links = BookingLinks::for_centroid(LatLng::new(51.1483, -115.57), 5.0);
    /// assert_eq!(
    ///     links.booking_com,
    ///     "https://www.booking.com/searchresults.html?ss=51.1483%2C-115.5700&radius=5"
    /// );
    /// assert_eq!(
    ///     links.airbnb,
    ///     "https://www.airbnb.com/s/homes?lat=51.1483&lng=-115.5700"
    /// );
    /// ```
    #[must_use]
    pub fn for_centroid(centroid: LatLng, radius_km: f64) -> Self {
        let lat = format!("{:.4}", centroid.lat);
        let lng = format!("{:.4}", centroid.lng);
        let search: String =
            form_urlencoded::byte_serialize(format!("{lat},{lng}").as_bytes()).collect();
        Self {
            booking_com: format!("{BOOKING_COM_SEARCH_URL}?ss={search}&radius={radius_km}"),
            airbnb: format!("{AIRBNB_SEARCH_URL}?lat={lat}&lng={lng}"),
        }
    }
}

/// A suggested lodging area for a trip.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LodgingZone {
    /// Geometric centre of the trip's points.
    pub centroid: LatLng,
    /// Search radius around the centroid.
    pub buffer_radius_km: f64,
    /// Accommodation search links for the zone.
    pub booking_links: BookingLinks,
}

/// Errors returned by [`CentroidCalculator::calculate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LodgingError {
    /// No points were supplied.
    #[error("at least one point required")]
    EmptyPoints,
    /// A point lay outside the WGS84 ranges.
    #[error("point {id} has coordinates outside latitude [-90, 90] / longitude [-180, 180]")]
    InvalidCoordinate {
        /// Identifier of the offending point.
        id: String,
    },
}

/// Compute a lodging zone from a set of points.
///
/// Implementations must return [`LodgingError::EmptyPoints`] for an empty
/// slice and must echo `buffer_radius_km` unchanged.
pub trait CentroidCalculator: Send + Sync {
    /// Return the lodging zone for `points`.
    fn calculate(&self, points: &[Point], buffer_radius_km: f64)
    -> Result<LodgingZone, LodgingError>;
}

/// Planar centroid of the points' coordinates.
///
/// For the small extents of a day trip the planar centroid is
/// indistinguishable from a spherical one.
///
/// # Examples
/// ```
/// use georoute_core::{CentroidCalculator, GeometricCentroid, Point};
///
/// let zone = GeometricCentroid
///     .calculate(
///         &[Point::new("a", "A", 0.0, 0.0), Point::new("b", "B", 10.0, 10.0)],
///         5.0,
///     )
///     .expect("non-empty input");
/// assert_eq!(zone.centroid.lat, 5.0);
/// assert_eq!(zone.centroid.lng, 5.0);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct GeometricCentroid;

impl CentroidCalculator for GeometricCentroid {
    fn calculate(
        &self,
        points: &[Point],
        buffer_radius_km: f64,
    ) -> Result<LodgingZone, LodgingError> {
        if let Some(point) = points.iter().find(|p| !p.position().is_valid()) {
            return Err(LodgingError::InvalidCoordinate {
                id: point.id.clone(),
            });
        }

        let centroid = match points {
            [] => return Err(LodgingError::EmptyPoints),
            [single] => single.position(),
            many => {
                let multi: MultiPoint<f64> = many.iter().map(Point::coord).collect();
                multi
                    .centroid()
                    .map(|c| LatLng::from(c.0))
                    .ok_or(LodgingError::EmptyPoints)?
            }
        };

        Ok(LodgingZone {
            centroid,
            buffer_radius_km,
            booking_links: BookingLinks::for_centroid(centroid, buffer_radius_km),
        })
    }
}
