//! Route modes, optimised sequences and client-supplied route metrics.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How a route treats the start location once the last stop is reached.
///
/// Serialises as `"Loop"` or `"OneWay"`.
///
/// # Examples
/// ```
/// use georoute_core::RouteMode;
///
/// assert_eq!(RouteMode::default(), RouteMode::Loop);
/// assert_eq!(RouteMode::OneWay.to_string(), "OneWay");
/// assert_eq!("loop".parse::<RouteMode>(), Ok(RouteMode::Loop));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteMode {
    /// Return to the start location after the last stop.
    #[default]
    Loop,
    /// Finish at the last stop.
    OneWay,
}

impl RouteMode {
    /// Return the wire name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Loop => "Loop",
            Self::OneWay => "OneWay",
        }
    }

    /// Whether the route closes back onto the start location.
    #[must_use]
    pub const fn returns_to_start(self) -> bool {
        matches!(self, Self::Loop)
    }
}

impl fmt::Display for RouteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`RouteMode`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown route mode '{0}' (expected Loop or OneWay)")]
pub struct RouteModeParseError(pub String);

impl FromStr for RouteMode {
    type Err = RouteModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "loop" => Ok(Self::Loop),
            "oneway" | "one-way" | "one_way" => Ok(Self::OneWay),
            _ => Err(RouteModeParseError(s.to_owned())),
        }
    }
}

/// An ordered visiting sequence of point identifiers.
///
/// The start location never appears in `sequence`.
///
/// # Examples
/// ```
/// use georoute_core::{OptimizedRoute, RouteMode};
///
/// let route = OptimizedRoute::new(vec!["a".into(), "b".into()], RouteMode::OneWay);
/// assert_eq!(route.len(), 2);
/// assert!(!route.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OptimizedRoute {
    /// Point identifiers in visiting order.
    pub sequence: Vec<String>,
    /// Mode the sequence was computed for.
    #[cfg_attr(feature = "serde", serde(default))]
    pub route_mode: RouteMode,
}

impl OptimizedRoute {
    /// Construct a route from an ordered id list and mode.
    #[must_use]
    pub const fn new(sequence: Vec<String>, route_mode: RouteMode) -> Self {
        Self {
            sequence,
            route_mode,
        }
    }

    /// Number of stops in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Whether the sequence has no stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// A single leg between two consecutive stops, as measured by the client.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouteLeg {
    /// Identifier or name of the leg's origin.
    pub from_id: String,
    /// Identifier or name of the leg's destination.
    pub to_id: String,
    /// Road distance in kilometres.
    #[cfg_attr(feature = "serde", serde(default))]
    pub distance_km: f64,
    /// Travel time in minutes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration_min: f64,
}

/// Route totals computed by a road-network service on the client.
///
/// The engine never produces these; they are only rendered.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouteMetrics {
    /// Total route distance in kilometres.
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_distance_km: f64,
    /// Total route duration in minutes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_duration_min: f64,
    /// Optional per-leg breakdown.
    #[cfg_attr(feature = "serde", serde(default))]
    pub legs: Option<Vec<RouteLeg>>,
}

impl RouteMetrics {
    /// Find the leg joining `from` to `to`, matching either ids or names.
    ///
    /// # Examples
    /// ```
    /// use georoute_core::{RouteLeg, RouteMetrics};
    ///
    /// let metrics = RouteMetrics {
    ///     total_distance_km: 3.0,
    ///     total_duration_min: 12.0,
    ///     legs: Some(vec![RouteLeg {
    ///         from_id: "Hotel".into(),
    ///         to_id: "p1".into(),
    ///         distance_km: 3.0,
    ///         duration_min: 12.0,
    ///     }]),
    /// };
    /// assert!(metrics.find_leg(&["Hotel"], &["p1", "Museum"]).is_some());
    /// assert!(metrics.find_leg(&["p1"], &["Hotel"]).is_none());
    /// ```
    #[must_use]
    pub fn find_leg(&self, from: &[&str], to: &[&str]) -> Option<&RouteLeg> {
        self.legs.as_deref()?.iter().find(|leg| {
            from.contains(&leg.from_id.as_str()) && to.contains(&leg.to_id.as_str())
        })
    }
}
