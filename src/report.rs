//! Rendering solved schedule groups for output.

use anyhow::Context;
use clap::ValueEnum;
use itertools::Itertools;
use serde::Serialize;

use crate::{
    route::Route,
    time::ClockTime,
    timetable::{price::Price, segment::Segment},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One `departure arrival price` line per route, groups separated by a blank line
    #[default]
    Text,
    /// An array per group of route objects
    Json,
}

#[derive(Serialize)]
struct RouteSummary<'a> {
    departure: ClockTime,
    arrival: ClockTime,
    price: Price,
    duration: f64,
    legs: &'a [&'a Segment],
}

impl<'a, 'r: 'a> From<&'a Route<'r>> for RouteSummary<'a> {
    fn from(route: &'a Route<'r>) -> Self {
        Self {
            departure: route.departure(),
            arrival: route.arrival(),
            price: route.price(),
            duration: route.duration(),
            legs: route.segments(),
        }
    }
}

pub fn render(format: Format, solutions: &[Vec<Route>]) -> anyhow::Result<String> {
    match format {
        Format::Text => Ok(render_text(solutions)),
        Format::Json => render_json(solutions),
    }
}

pub fn render_text(solutions: &[Vec<Route>]) -> String {
    solutions
        .iter()
        .map(|routes| {
            routes
                .iter()
                .map(|route| format!("{} {} {}\n", route.departure(), route.arrival(), route.price()))
                .collect::<String>()
        })
        .join("\n")
}

pub fn render_json(solutions: &[Vec<Route>]) -> anyhow::Result<String> {
    let summaries = solutions
        .iter()
        .map(|routes| routes.iter().map(RouteSummary::from).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    serde_json::to_string_pretty(&summaries).context("Failed to serialize routes")
}
