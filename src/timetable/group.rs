use std::collections::BTreeSet;

use crate::timetable::{point::PointId, segment::Segment};

/// One independent block of the timetable: the pool of segments that routes
/// are searched over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleGroup {
    segments: Vec<Segment>,
}

impl ScheduleGroup {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments leaving `point`, in timetable order.
    pub fn departures_from<'a>(&'a self, point: &PointId) -> impl Iterator<Item = &'a Segment> + 'a {
        let point = point.clone();
        self.segments.iter().filter(move |s| s.origin() == &point)
    }

    /// Every point named as an origin or destination.
    pub fn points(&self) -> BTreeSet<&PointId> {
        self.segments
            .iter()
            .flat_map(|s| [s.origin(), s.destination()])
            .collect()
    }
}

impl FromIterator<Segment> for ScheduleGroup {
    fn from_iter<T: IntoIterator<Item = Segment>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(rows: &[&str]) -> ScheduleGroup {
        rows.iter().map(|row| row.parse().unwrap()).collect()
    }

    #[test]
    fn departures_keep_parallel_edges() {
        let g = group(&[
            "A B 08:00 09:00 50",
            "A B 12:00 13:00 300",
            "A C 14:00 15:30 175",
            "B C 10:00 11:00 75",
        ]);

        let a = PointId::new("A");
        let prices = g
            .departures_from(&a)
            .map(|s| s.price().to_string())
            .collect::<Vec<_>>();
        assert_eq!(prices, vec!["50.00", "300.00", "175.00"]);

        let c = PointId::new("C");
        assert_eq!(g.departures_from(&c).count(), 0);
    }

    #[test]
    fn points_are_deduplicated() {
        let g = group(&["A B 08:00 09:00 50", "B A 10:00 11:00 50", "B C 10:00 11:00 75"]);
        let names = g.points().into_iter().map(PointId::as_str).collect::<Vec<_>>();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn empty_group() {
        let g = ScheduleGroup::default();
        assert!(g.is_empty());
        assert_eq!(g.len(), 0);
        assert!(g.points().is_empty());
    }
}
