use std::str::FromStr;

use serde::Serialize;

use crate::{
    time::{ClockTime, ParseError},
    timetable::{
        point::PointId,
        price::{Price, PriceError},
    },
};

/// Error building a [`Segment`] from timetable text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SegmentError {
    #[error("expected 5 fields (origin destination departure arrival price), found {0}")]
    FieldCount(usize),

    #[error(transparent)]
    Time(#[from] ParseError),

    #[error(transparent)]
    Price(#[from] PriceError),
}

/// One directly-travelled leg between two points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    origin: PointId,
    destination: PointId,
    departure: ClockTime,
    arrival: ClockTime,
    price: Price,
}

impl Segment {
    pub fn new(
        origin: PointId,
        destination: PointId,
        departure: ClockTime,
        arrival: ClockTime,
        price: Price,
    ) -> Self {
        Self {
            origin,
            destination,
            departure,
            arrival,
            price,
        }
    }

    pub fn origin(&self) -> &PointId {
        &self.origin
    }

    pub fn destination(&self) -> &PointId {
        &self.destination
    }

    pub fn departure(&self) -> ClockTime {
        self.departure
    }

    pub fn arrival(&self) -> ClockTime {
        self.arrival
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Hours in the air, wrapping past midnight.
    pub fn duration(&self) -> f64 {
        self.arrival.elapsed_since(self.departure)
    }
}

/// Parses a timetable row such as `A B 09:00 10:00 100.00`.
impl FromStr for Segment {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s.split_whitespace().collect::<Vec<_>>();
        let [origin, destination, departure, arrival, price] = fields[..] else {
            return Err(SegmentError::FieldCount(fields.len()));
        };

        Ok(Segment::new(
            PointId::new(origin),
            PointId::new(destination),
            departure.parse()?,
            arrival.parse()?,
            price.parse()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_timetable_row() {
        let segment: Segment = "a b 09:00 10:30 100.00".parse().unwrap();
        assert_eq!(segment.origin(), &PointId::new("A"));
        assert_eq!(segment.destination(), &PointId::new("B"));
        assert_eq!(segment.departure().to_string(), "09:00");
        assert_eq!(segment.arrival().to_string(), "10:30");
        assert_eq!(segment.price(), Price::from_cents(10000));
        assert_eq!(segment.duration(), 1.5);
    }

    #[test]
    fn overnight_duration_wraps() {
        let segment: Segment = "A B 23:00 01:00 80".parse().unwrap();
        assert_eq!(segment.duration(), 2.0);
    }

    #[test]
    fn self_loop_is_allowed() {
        let segment: Segment = "A a 10:00 11:00 10".parse().unwrap();
        assert_eq!(segment.origin(), segment.destination());
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(
            "A B 09:00 10:00".parse::<Segment>(),
            Err(SegmentError::FieldCount(4))
        );
        assert_eq!(
            "A B 09:00 10:00 1 extra".parse::<Segment>(),
            Err(SegmentError::FieldCount(6))
        );
    }

    #[test]
    fn rejects_bad_times() {
        let err = "A B 9am 10:00 100".parse::<Segment>().unwrap_err();
        assert!(matches!(err, SegmentError::Time(_)));
        assert_eq!(err.to_string(), "invalid clock time \"9am\": expected HH:MM");
    }

    #[test]
    fn rejects_bad_prices() {
        for row in [
            "A B 09:00 10:00 cheap",
            "A B 09:00 10:00 -5",
            "A B 09:00 10:00 NaN",
            "A B 09:00 10:00 inf",
        ] {
            let err = row.parse::<Segment>().unwrap_err();
            assert!(matches!(err, SegmentError::Price(_)), "{row}: {err}");
        }
    }

    #[test]
    fn free_segments_are_valid() {
        let free: Segment = "A B 09:00 10:00 0".parse().unwrap();
        let signed: Segment = "A B 09:00 10:00 -0".parse().unwrap();
        assert_eq!(free.price(), Price::ZERO);
        assert_eq!(signed.price(), Price::ZERO);
    }
}
