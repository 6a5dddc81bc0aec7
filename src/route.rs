//! Routes: chains of segments from one schedule group.

use std::ptr;

use itertools::Itertools;

use crate::{
    time::ClockTime,
    timetable::{point::PointId, price::Price, segment::Segment},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("route must have at least one segment")]
    Empty,

    #[error("segment {index} leaves {found} but the previous one arrives at {expected}")]
    Disconnected {
        index: usize,
        expected: PointId,
        found: PointId,
    },
}

/// An ordered chain of segments where each one leaves from where the previous
/// one arrived.
///
/// Routes borrow their segments from the schedule group they were found in,
/// so two routes share a leg exactly when they hold the same segment instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Route<'a> {
    // Never empty
    segments: Vec<&'a Segment>,
}

impl<'a> Route<'a> {
    pub fn new(segments: Vec<&'a Segment>) -> Result<Self, RouteError> {
        if segments.is_empty() {
            return Err(RouteError::Empty);
        }

        for (index, (prev, next)) in segments.iter().tuple_windows().enumerate() {
            if prev.destination() != next.origin() {
                return Err(RouteError::Disconnected {
                    index: index + 1,
                    expected: prev.destination().clone(),
                    found: next.origin().clone(),
                });
            }
        }

        Ok(Self { segments })
    }

    /// Builds a route from a chain already known to be connected.
    pub(crate) fn from_chain(segments: Vec<&'a Segment>) -> Self {
        debug_assert!(Route::new(segments.clone()).is_ok());
        Self { segments }
    }

    pub fn segments(&self) -> &[&'a Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    fn first(&self) -> &'a Segment {
        self.segments[0]
    }

    fn last(&self) -> &'a Segment {
        self.segments[self.segments.len() - 1]
    }

    pub fn origin(&self) -> &'a PointId {
        self.first().origin()
    }

    pub fn destination(&self) -> &'a PointId {
        self.last().destination()
    }

    pub fn departure(&self) -> ClockTime {
        self.first().departure()
    }

    pub fn arrival(&self) -> ClockTime {
        self.last().arrival()
    }

    pub fn connects(&self, origin: &PointId, destination: &PointId) -> bool {
        self.origin() == origin && self.destination() == destination
    }

    pub fn price(&self) -> Price {
        self.segments.iter().map(|s| s.price()).sum()
    }

    /// Hours from the first departure to the last arrival, wrapping past midnight.
    pub fn duration(&self) -> f64 {
        self.arrival().elapsed_since(self.departure())
    }

    pub fn duration_minutes(&self) -> u32 {
        self.arrival().minutes_since(self.departure())
    }

    /// Whether every connection can be made: no leg departs before the previous
    /// one arrives. Times are compared on the same day, without wraparound.
    pub fn is_feasible(&self) -> bool {
        self.segments
            .iter()
            .tuple_windows()
            .all(|(prev, next)| next.departure() >= prev.arrival())
    }

    /// Whether this exact segment instance is one of the route's legs.
    pub fn uses(&self, segment: &Segment) -> bool {
        self.segments.iter().any(|s| ptr::eq(*s, segment))
    }
}
