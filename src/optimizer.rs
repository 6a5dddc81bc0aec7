//! Picking the best routes by price and by duration.

use clap::ValueEnum;
use itertools::Itertools;
use tracing::debug;

use crate::{
    route::Route,
    search::RouteSearch,
    timetable::{group::ScheduleGroup, point::PointId},
};

/// A cost that routes are ranked by. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Metric {
    Price,
    Duration,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Price, Metric::Duration];

    /// The route's cost in exact units: cents for price, minutes for duration.
    pub fn cost(self, route: &Route) -> u64 {
        match self {
            Metric::Price => route.price().cents(),
            Metric::Duration => u64::from(route.duration_minutes()),
        }
    }
}

/// Routes whose connections can all be made.
pub fn feasible<'a>(routes: Vec<Route<'a>>) -> Vec<Route<'a>> {
    routes.into_iter().filter(Route::is_feasible).collect()
}

/// All routes sharing the lowest value of `metric`. Ties are kept in their
/// original order.
pub fn lowest_by<'a>(metric: Metric, routes: &[Route<'a>]) -> Vec<Route<'a>> {
    routes
        .iter()
        .min_set_by_key(|route| metric.cost(route))
        .into_iter()
        .cloned()
        .collect()
}

/// Cheapest routes followed by fastest routes from `origin` to `destination`.
///
/// A route that wins on both counts appears twice. No connecting or feasible
/// route gives an empty result.
pub fn solve<'a>(group: &'a ScheduleGroup, origin: &PointId, destination: &PointId) -> Vec<Route<'a>> {
    solve_by(group, origin, destination, &Metric::ALL)
}

/// Like [`solve`], with the winners of each metric concatenated in the given order.
pub fn solve_by<'a>(
    group: &'a ScheduleGroup,
    origin: &PointId,
    destination: &PointId,
    metrics: &[Metric],
) -> Vec<Route<'a>> {
    let routes = feasible(RouteSearch::new(group).routes_between(origin, destination));
    debug!("{} feasible routes from {origin} to {destination}", routes.len());

    metrics
        .iter()
        .flat_map(|&metric| lowest_by(metric, &routes))
        .collect()
}
