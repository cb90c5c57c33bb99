//! Test-only helpers shared by unit and behaviour tests across the workspace.

use crate::{
    ItineraryRenderer, ItineraryRequest, OptimizeRequest, OptimizedRoute, Point, RenderError,
    RouteSequencer, SequenceError, SequencePlan,
};

/// Build a point whose display name is its upper-cased identifier.
#[must_use]
pub fn point(id: &str, lat: f64, lng: f64) -> Point {
    Point::new(id, id.to_uppercase(), lat, lng)
}

/// Sequencer that validates the request and then keeps the input order.
///
/// Manual sequences are still honoured, so the stub is a faithful stand-in
/// wherever the optimised ordering itself is not under test.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputOrderSequencer;

impl RouteSequencer for InputOrderSequencer {
    fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizedRoute, SequenceError> {
        let sequence = match request.validate()? {
            SequencePlan::Manual(ids) => ids.to_vec(),
            SequencePlan::Optimise | SequencePlan::InputOrder => {
                request.points.iter().map(|p| p.id.clone()).collect()
            }
        };
        Ok(OptimizedRoute::new(sequence, request.route_mode))
    }
}

/// Renderer that emits the sequence as newline-separated ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextRenderer;

impl ItineraryRenderer for PlainTextRenderer {
    fn render(&self, request: &ItineraryRequest) -> Result<Vec<u8>, RenderError> {
        Ok(request.route.sequence.join("\n").into_bytes())
    }
}

/// Renderer that always fails, for exercising error paths.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingRenderer;

impl ItineraryRenderer for FailingRenderer {
    fn render(&self, _request: &ItineraryRequest) -> Result<Vec<u8>, RenderError> {
        Err(RenderError::Write("renderer unavailable".into()))
    }
}
