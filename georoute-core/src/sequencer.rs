//! Route sequencing requests and the engine boundary.
//!
//! [`OptimizeRequest::validate`] performs every boundary check and reports
//! which ordering policy applies as a [`SequencePlan`]. Implementations of
//! [`RouteSequencer`] run only after validation succeeds.

use std::collections::HashSet;

use thiserror::Error;

use crate::{OptimizedRoute, Point, RouteMode};

/// Parameters for a sequencing request.
///
/// # Examples
/// ```
/// use georoute_core::{OptimizeRequest, Point, RouteMode, SequencePlan};
///
/// let request = OptimizeRequest {
///     points: vec![Point::new("a", "A", 0.0, 1.0)],
///     start_location: Some(Point::new("start", "Hotel", 0.0, 0.0)),
///     route_mode: RouteMode::OneWay,
///     optimize_sequence: true,
///     manual_sequence: None,
/// };
/// assert_eq!(request.validate(), Ok(SequencePlan::Optimise));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct OptimizeRequest {
    /// Points of interest to visit.
    pub points: Vec<Point>,
    /// Fixed anchor for the first edge and, in loop mode, the last.
    pub start_location: Option<Point>,
    /// Loop or one-way boundary policy.
    pub route_mode: RouteMode,
    /// Reorder the points when `true`; otherwise honour `manual_sequence`.
    pub optimize_sequence: bool,
    /// Caller-supplied ordering used when `optimize_sequence` is `false`.
    pub manual_sequence: Option<Vec<String>>,
}

impl Default for OptimizeRequest {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            start_location: None,
            route_mode: RouteMode::Loop,
            optimize_sequence: true,
            manual_sequence: None,
        }
    }
}

/// Ordering policy selected by a validated [`OptimizeRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencePlan<'a> {
    /// Run the construction and improvement heuristics.
    Optimise,
    /// Use the caller's ids verbatim.
    ///
    /// Only id existence is checked; ids may repeat or omit points.
    Manual(&'a [String]),
    /// Keep the input order of the points.
    InputOrder,
}

/// Errors returned when a sequencing request is rejected.
///
/// Every variant is an invalid-input condition the caller can correct.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The request had no points to visit.
    #[error("at least one point required")]
    EmptyPoints,
    /// Two points shared the same identifier.
    #[error("duplicate POI id: {id}")]
    DuplicatePointId {
        /// The repeated identifier.
        id: String,
    },
    /// A point or the start location lay outside the WGS84 ranges.
    #[error("point {id} has coordinates outside latitude [-90, 90] / longitude [-180, 180]")]
    InvalidCoordinate {
        /// Identifier of the offending point.
        id: String,
    },
    /// Manual ordering was requested with an empty id list.
    #[error("manual sequence must contain at least one POI id")]
    MissingManualSequence,
    /// The manual ordering named an id absent from the points.
    #[error("unknown POI id in manual sequence: {id}")]
    UnknownPointId {
        /// The unknown identifier.
        id: String,
    },
}

impl OptimizeRequest {
    /// Validate the request and select its ordering policy.
    ///
    /// Checks run in order: non-empty points, unique ids, coordinate ranges
    /// (points then start location), then the manual sequence when
    /// `optimize_sequence` is `false`.
    pub fn validate(&self) -> Result<SequencePlan<'_>, SequenceError> {
        if self.points.is_empty() {
            return Err(SequenceError::EmptyPoints);
        }

        let mut ids = HashSet::with_capacity(self.points.len());
        for point in &self.points {
            if !ids.insert(point.id.as_str()) {
                return Err(SequenceError::DuplicatePointId {
                    id: point.id.clone(),
                });
            }
        }

        if let Some(point) = self
            .points
            .iter()
            .chain(self.start_location.as_ref())
            .find(|point| !point.position().is_valid())
        {
            return Err(SequenceError::InvalidCoordinate {
                id: point.id.clone(),
            });
        }

        if self.optimize_sequence {
            return Ok(SequencePlan::Optimise);
        }

        match self.manual_sequence.as_deref() {
            None => Ok(SequencePlan::InputOrder),
            Some([]) => Err(SequenceError::MissingManualSequence),
            Some(manual) => {
                if let Some(unknown) = manual.iter().find(|id| !ids.contains(id.as_str())) {
                    return Err(SequenceError::UnknownPointId {
                        id: unknown.clone(),
                    });
                }
                Ok(SequencePlan::Manual(manual))
            }
        }
    }
}

/// Produce a visiting order for a set of points.
///
/// Implementations must be deterministic for identical input, must not
/// include the start location in the output, and must return
/// [`SequenceError`] rather than panicking on invalid requests. Sequencers
/// must be `Send + Sync` so servers can share one instance across requests.
pub trait RouteSequencer: Send + Sync {
    /// Sequence the request's points.
    fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizedRoute, SequenceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn request() -> OptimizeRequest {
        OptimizeRequest {
            points: vec![Point::new("a", "A", 0.0, 1.0), Point::new("b", "B", 0.0, 10.0)],
            ..OptimizeRequest::default()
        }
    }

    #[rstest]
    fn defaults_to_optimised_loop() {
        let defaults = OptimizeRequest::default();
        assert!(defaults.optimize_sequence);
        assert_eq!(defaults.route_mode, RouteMode::Loop);
    }

    #[rstest]
    fn rejects_empty_points() {
        let empty = OptimizeRequest::default();
        assert_eq!(empty.validate(), Err(SequenceError::EmptyPoints));
    }

    #[rstest]
    fn rejects_duplicate_ids(mut request: OptimizeRequest) {
        request.points.push(Point::new("a", "Again", 1.0, 1.0));
        assert_eq!(
            request.validate(),
            Err(SequenceError::DuplicatePointId { id: "a".into() })
        );
    }

    #[rstest]
    fn rejects_out_of_range_start(mut request: OptimizeRequest) {
        request.start_location = Some(Point::new("start", "Nowhere", 120.0, 0.0));
        assert_eq!(
            request.validate(),
            Err(SequenceError::InvalidCoordinate { id: "start".into() })
        );
    }

    #[rstest]
    fn manual_order_is_passed_through(mut request: OptimizeRequest) {
        request.optimize_sequence = false;
        request.manual_sequence = Some(vec!["b".into(), "a".into()]);
        let plan = request.validate().expect("manual order should validate");
        assert_eq!(plan, SequencePlan::Manual(&["b".to_owned(), "a".to_owned()]));
    }

    #[rstest]
    fn manual_order_may_repeat_and_omit_ids(mut request: OptimizeRequest) {
        request.optimize_sequence = false;
        request.manual_sequence = Some(vec!["b".into(), "b".into()]);
        assert!(matches!(request.validate(), Ok(SequencePlan::Manual(ids)) if ids.len() == 2));
    }

    #[rstest]
    fn unknown_manual_id_is_rejected(mut request: OptimizeRequest) {
        request.optimize_sequence = false;
        request.manual_sequence = Some(vec!["a".into(), "zzz".into()]);
        assert_eq!(
            request.validate(),
            Err(SequenceError::UnknownPointId { id: "zzz".into() })
        );
    }

    #[rstest]
    fn empty_manual_sequence_is_rejected(mut request: OptimizeRequest) {
        request.optimize_sequence = false;
        request.manual_sequence = Some(Vec::new());
        assert_eq!(request.validate(), Err(SequenceError::MissingManualSequence));
    }

    #[rstest]
    fn missing_manual_sequence_falls_back_to_input_order(mut request: OptimizeRequest) {
        request.optimize_sequence = false;
        assert_eq!(request.validate(), Ok(SequencePlan::InputOrder));
    }

    #[rstest]
    fn optimise_ignores_manual_sequence(mut request: OptimizeRequest) {
        request.manual_sequence = Some(vec!["unknown".into()]);
        assert_eq!(request.validate(), Ok(SequencePlan::Optimise));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn decodes_with_wire_defaults() {
        let request: OptimizeRequest = serde_json::from_str(
            r#"{"points":[{"id":"a","name":"A","lat":0.0,"lng":1.0}]}"#,
        )
        .expect("request should decode");
        assert!(request.optimize_sequence);
        assert_eq!(request.route_mode, RouteMode::Loop);
        assert!(request.start_location.is_none());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn decodes_camel_case_fields() {
        let request: OptimizeRequest = serde_json::from_str(
            r#"{
                "points": [{"id":"a","name":"A","lat":0.0,"lng":1.0}],
                "startLocation": {"id":"s","name":"Hotel","lat":0.0,"lng":0.0},
                "routeMode": "OneWay",
                "optimizeSequence": false,
                "manualSequence": ["a"]
            }"#,
        )
        .expect("request should decode");
        assert_eq!(request.route_mode, RouteMode::OneWay);
        assert!(!request.optimize_sequence);
        assert_eq!(request.manual_sequence, Some(vec!["a".to_owned()]));
        assert_eq!(request.start_location.map(|s| s.name), Some("Hotel".into()));
    }
}
