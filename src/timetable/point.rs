use std::fmt;

use serde::Serialize;

/// A named point in the timetable, such as an airport code.
///
/// Names are case-insensitive: they are normalised once here so that
/// comparisons elsewhere can be exact.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PointId(String);

impl PointId {
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PointId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
