//! Route finding over flight timetables.
//!
//! Enumerates every simple route between two points in a schedule group,
//! drops routes whose connections cannot be made, and keeps the cheapest and
//! the fastest.

pub mod optimizer;
pub mod report;
pub mod route;
pub mod search;
pub mod time;
pub mod timetable;
