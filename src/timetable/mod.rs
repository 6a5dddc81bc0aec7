pub mod group;
pub mod io;
pub mod point;
pub mod price;
pub mod segment;

use std::path::Path;

use crate::timetable::{group::ScheduleGroup, io::parse_groups, io::read_groups};

/// A timetable: independent schedule groups, each solved on its own.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    pub groups: Vec<ScheduleGroup>,
}

impl Timetable {
    pub fn read<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let groups = read_groups(path)?;
        Ok(Self { groups })
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let groups = parse_groups(text.as_bytes())?;
        Ok(Self { groups })
    }
}
