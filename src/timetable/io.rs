use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{bail, ensure, Context};

use crate::timetable::{group::ScheduleGroup, segment::Segment};

pub fn read_groups<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<ScheduleGroup>> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

    parse_groups(BufReader::new(f)).with_context(|| format!("Failed to read {}", path.display()))
}

/// Parses a grouped timetable.
///
/// The first non-blank line holds the number of schedule groups. Each group is
/// a line holding its segment count followed by that many segment rows.
pub fn parse_groups<R: BufRead>(rdr: R) -> anyhow::Result<Vec<ScheduleGroup>> {
    let mut expected_groups = None;
    let mut groups = vec![];
    // Segments still owed to the group being read, and those read so far
    let mut current: Option<(usize, Vec<Segment>)> = None;

    for (idx, l) in rdr.lines().enumerate() {
        let line_no = idx + 1;
        let line = l?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if expected_groups.is_none() {
            let count = line
                .parse::<usize>()
                .with_context(|| format!("line {line_no}: expected number of schedule groups, found {line:?}"))?;
            expected_groups = Some(count);
            continue;
        }

        let Some((remaining, segments)) = current.as_mut() else {
            let count = line
                .parse::<usize>()
                .with_context(|| format!("line {line_no}: expected segment count, found {line:?}"))?;

            if count == 0 {
                groups.push(ScheduleGroup::default());
            } else {
                current = Some((count, Vec::with_capacity(count)));
            }
            continue;
        };

        let segment = line
            .parse::<Segment>()
            .with_context(|| format!("line {line_no}: invalid segment {line:?}"))?;
        segments.push(segment);
        *remaining -= 1;

        if *remaining == 0 {
            if let Some((_, segments)) = current.take() {
                groups.push(ScheduleGroup::new(segments));
            }
        }
    }

    if let Some((remaining, _)) = current {
        bail!("last schedule group is missing {remaining} segment(s)");
    }

    let expected = expected_groups.unwrap_or(0);
    ensure!(
        groups.len() == expected,
        "expected {expected} schedule groups, found {}",
        groups.len()
    );

    Ok(groups)
}
