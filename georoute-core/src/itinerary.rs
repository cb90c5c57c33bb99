//! Printable itineraries.
//!
//! An [`ItineraryRenderer`] turns a sequenced route into document bytes.
//! Rendering is pure and must tolerate missing optional inputs.

use thiserror::Error;

use crate::{OptimizedRoute, Point, PointIndex, RouteMetrics};

/// Everything needed to render an itinerary.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItineraryRequest {
    /// The sequenced route.
    pub route: OptimizedRoute,
    /// Points referenced by the route's sequence.
    pub points: Vec<Point>,
    /// Where the trip starts, if anywhere.
    pub start_location: Option<Point>,
    /// Client-measured route totals and legs.
    pub metrics: Option<RouteMetrics>,
    /// Map snapshot as bare base64 or a `data:` URL.
    pub map_image_base64: Option<String>,
}

impl ItineraryRequest {
    /// Index the request's points by identifier.
    #[must_use]
    pub fn point_index(&self) -> PointIndex<'_> {
        PointIndex::new(&self.points)
    }
}

/// Wire form of an export request, before boundary validation.
///
/// # Examples
/// ```
/// use georoute_core::{ExportRequest, ExportRequestError, ItineraryRequest};
///
/// let missing_route = ExportRequest::default();
/// assert_eq!(
///     ItineraryRequest::try_from(missing_route),
///     Err(ExportRequestError::MissingRoute)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ExportRequest {
    /// The sequenced route; required.
    pub route: Option<OptimizedRoute>,
    /// Points referenced by the route; at least one required.
    pub points: Vec<Point>,
    /// Where the trip starts, if anywhere.
    pub start_location: Option<Point>,
    /// Client-measured route totals and legs.
    pub metrics: Option<RouteMetrics>,
    /// Map snapshot as bare base64 or a `data:` URL.
    pub map_image_base64: Option<String>,
}

/// Errors raised when an [`ExportRequest`] fails boundary validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportRequestError {
    /// The request carried no route.
    #[error("route is required")]
    MissingRoute,
    /// The request carried no points.
    #[error("at least one point required")]
    EmptyPoints,
}

impl TryFrom<ExportRequest> for ItineraryRequest {
    type Error = ExportRequestError;

    fn try_from(request: ExportRequest) -> Result<Self, Self::Error> {
        let route = request.route.ok_or(ExportRequestError::MissingRoute)?;
        if request.points.is_empty() {
            return Err(ExportRequestError::EmptyPoints);
        }
        Ok(Self {
            route,
            points: request.points,
            start_location: request.start_location,
            metrics: request.metrics,
            map_image_base64: request.map_image_base64,
        })
    }
}

/// Errors from [`ItineraryRenderer::render`].
///
/// These indicate a failure inside the document engine, not bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Page content could not be encoded.
    #[error("failed to encode page content: {0}")]
    Encode(String),
    /// The finished document could not be serialised.
    #[error("failed to write document: {0}")]
    Write(String),
}

/// Render an itinerary document.
///
/// Implementations must not fail because optional inputs are absent or
/// malformed: an empty sequence, no start location, no metrics or an
/// undecodable image all produce a smaller document instead.
pub trait ItineraryRenderer: Send + Sync {
    /// Render `request` to document bytes.
    fn render(&self, request: &ItineraryRequest) -> Result<Vec<u8>, RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RouteMode;
    use rstest::rstest;

    #[rstest]
    fn empty_points_are_rejected() {
        let request = ExportRequest {
            route: Some(OptimizedRoute::new(Vec::new(), RouteMode::Loop)),
            ..ExportRequest::default()
        };
        assert_eq!(
            ItineraryRequest::try_from(request),
            Err(ExportRequestError::EmptyPoints)
        );
    }

    #[rstest]
    fn valid_request_converts() {
        let request = ExportRequest {
            route: Some(OptimizedRoute::new(vec!["a".into()], RouteMode::OneWay)),
            points: vec![Point::new("a", "A", 1.0, 2.0)],
            ..ExportRequest::default()
        };
        let itinerary = ItineraryRequest::try_from(request).expect("request should convert");
        let index = itinerary.point_index();
        assert_eq!(index.get("a").map(|p| p.name.as_str()), Some("A"));
        assert!(index.get("b").is_none());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn null_route_decodes_as_missing() {
        let request: ExportRequest = serde_json::from_str(
            r#"{"route":null,"points":[{"id":"a","name":"A","lat":1.0,"lng":2.0}]}"#,
        )
        .expect("request should decode");
        assert!(request.route.is_none());
    }
}
