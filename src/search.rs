//! Exhaustive enumeration of simple routes through a schedule group.

use std::ptr;

use tracing::{debug, trace};

use crate::{
    route::Route,
    timetable::{group::ScheduleGroup, point::PointId, segment::Segment},
};

/// Depth-first route search over the segments of one schedule group.
pub struct RouteSearch<'a> {
    group: &'a ScheduleGroup,
}

impl<'a> RouteSearch<'a> {
    pub fn new(group: &'a ScheduleGroup) -> Self {
        Self { group }
    }

    /// Every route found by following connections from `seed` until no unused
    /// segment continues it.
    ///
    /// Only complete branches are returned, not their prefixes. A route never
    /// uses the same segment instance twice.
    pub fn routes_from(&self, seed: &'a Segment) -> Vec<Route<'a>> {
        let pool = self
            .group
            .segments()
            .iter()
            .filter(|s| !ptr::eq(*s, seed))
            .collect();

        let mut routes = vec![];
        extend(vec![seed], pool, &mut routes);
        routes
    }

    /// Every complete route starting at `origin` that ends at `destination`.
    pub fn routes_between(&self, origin: &PointId, destination: &PointId) -> Vec<Route<'a>> {
        let routes = self
            .group
            .departures_from(origin)
            .flat_map(|seed| self.routes_from(seed))
            .filter(|route| route.connects(origin, destination))
            .collect::<Vec<_>>();

        debug!(
            "Found {} routes from {origin} to {destination} over {} segments",
            routes.len(),
            self.group.len()
        );

        routes
    }
}

/// Grows `path` with every segment in `pool` leaving where it ends.
///
/// All of those segments are taken out of the pool before branching, so
/// sibling branches cannot pick up each other's next leg either. Each branch
/// owns its copy of what is left, and the pool shrinks on every call.
fn extend<'a>(path: Vec<&'a Segment>, pool: Vec<&'a Segment>, routes: &mut Vec<Route<'a>>) {
    let Some(last) = path.last() else {
        return;
    };

    let (adjacent, remaining): (Vec<_>, Vec<_>) = pool
        .into_iter()
        .partition(|s| s.origin() == last.destination());

    if adjacent.is_empty() {
        trace!("Route complete after {} segments", path.len());
        routes.push(Route::from_chain(path));
        return;
    }

    for next in adjacent {
        let mut branch = path.clone();
        branch.push(next);
        extend(branch, remaining.clone(), routes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timetable::price::Price;

    fn group(rows: &[&str]) -> ScheduleGroup {
        rows.iter().map(|row| row.parse().unwrap()).collect()
    }

    fn p(name: &str) -> PointId {
        PointId::new(name)
    }

    fn hops(route: &Route) -> String {
        let mut names = vec![route.origin().as_str()];
        names.extend(route.segments().iter().map(|s| s.destination().as_str()));
        names.join("")
    }

    #[test]
    fn single_segment() {
        let g = group(&["A B 09:00 10:00 100"]);
        let routes = RouteSearch::new(&g).routes_between(&p("A"), &p("B"));

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].len(), 1);
    }

    #[test]
    fn branching_network() {
        let g = group(&[
            "A B 08:00 09:00 50",
            "B C 10:00 11:00 75",
            "B Z 15:00 16:30 250",
            "C B 15:45 16:45 50",
            "C Z 16:00 19:00 100",
        ]);
        let search = RouteSearch::new(&g);

        let all = search.routes_from(&g.segments()[0]);
        let names = all.iter().map(hops).collect::<Vec<_>>();
        assert_eq!(names, vec!["ABCB", "ABCZ", "ABZ"]);

        let to_z = search.routes_between(&p("A"), &p("Z"));
        let names = to_z.iter().map(hops).collect::<Vec<_>>();
        assert_eq!(names, vec!["ABCZ", "ABZ"]);
        assert_eq!(to_z[0].price(), Price::from_cents(22500));
        assert_eq!(to_z[0].duration(), 11.0);
        assert_eq!(to_z[1].price(), Price::from_cents(30000));
        assert_eq!(to_z[1].duration(), 8.5);
    }

    #[test]
    fn self_loop() {
        let g = group(&["A A 10:00 11:00 10"]);
        let routes = RouteSearch::new(&g).routes_between(&p("A"), &p("A"));

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].len(), 1);
        assert_eq!(routes[0].price(), Price::from_cents(1000));
    }

    #[test]
    fn cycle_back_to_start() {
        let g = group(&["A B 08:00 09:00 10", "B C 10:00 11:00 10", "C A 12:00 13:00 10"]);
        let routes = RouteSearch::new(&g).routes_between(&p("A"), &p("A"));

        assert_eq!(routes.len(), 1);
        assert_eq!(hops(&routes[0]), "ABCA");
    }

    #[test]
    fn parallel_edges_are_distinct() {
        let g = group(&["A B 08:00 09:00 50", "A B 08:00 09:00 50", "B Z 10:00 11:00 10"]);
        let routes = RouteSearch::new(&g).routes_between(&p("A"), &p("Z"));

        assert_eq!(routes.len(), 2);
        assert!(routes[0].uses(&g.segments()[0]));
        assert!(routes[1].uses(&g.segments()[1]));
        assert!(routes.iter().all(|r| r.uses(&g.segments()[2])));
    }

    #[test]
    fn siblings_share_the_shrunk_pool() {
        // Both B legs are consumed before branching, so neither branch can
        // come back through B.
        let g = group(&[
            "A B 08:00 09:00 10",
            "B C 10:00 11:00 10",
            "B D 10:00 11:00 10",
            "C B 12:00 13:00 10",
        ]);
        let routes = RouteSearch::new(&g).routes_from(&g.segments()[0]);
        let names = routes.iter().map(hops).collect::<Vec<_>>();

        assert_eq!(names, vec!["ABCB", "ABD"]);
    }

    #[test]
    fn destination_passed_through_is_not_a_result() {
        let g = group(&["A Z 08:00 09:00 10", "Z X 10:00 11:00 10"]);
        let routes = RouteSearch::new(&g).routes_between(&p("A"), &p("Z"));

        assert!(routes.is_empty());
    }

    #[test]
    fn no_departures_from_origin() {
        let g = group(&["B Z 08:00 09:00 10"]);
        assert!(RouteSearch::new(&g).routes_between(&p("A"), &p("Z")).is_empty());
        assert!(RouteSearch::new(&ScheduleGroup::default())
            .routes_between(&p("A"), &p("Z"))
            .is_empty());
    }

    #[test]
    fn endpoints_are_case_insensitive() {
        let g = group(&["a b 08:00 09:00 10"]);
        assert_eq!(RouteSearch::new(&g).routes_between(&p("A"), &p("b")).len(), 1);
    }
}
