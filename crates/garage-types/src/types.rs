//! Shared value types

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Default number of spaces in the lane
pub const MAX_CAPACITY: usize = 10;

/// Vehicle identifier.
///
/// Opaque and case-sensitive: `"abc 123"` and `"ABC 123"` are different
/// vehicles. No format is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plate(String);

impl Plate {
    pub fn new(plate: impl Into<String>) -> Self {
        Plate(plate.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Plate {
    fn from(s: &str) -> Self {
        Plate(s.to_string())
    }
}

impl From<String> for Plate {
    fn from(s: String) -> Self {
        Plate(s)
    }
}

impl AsRef<str> for Plate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Plate {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Plate {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Plate {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// How full the lane is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyGrade {
    /// Under half full (0-50%)
    Plenty,
    /// Half full (50-80%)
    Filling,
    /// Nearly full or full (80-100%)
    NearlyFull,
}

impl OccupancyGrade {
    pub fn from_ratio(ratio: f64) -> Self {
        match ratio {
            r if r < 0.50 => OccupancyGrade::Plenty,
            r if r < 0.80 => OccupancyGrade::Filling,
            _ => OccupancyGrade::NearlyFull,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OccupancyGrade::Plenty => "plenty of space",
            OccupancyGrade::Filling => "filling up",
            OccupancyGrade::NearlyFull => "nearly full",
        }
    }
}

/// Marker for the two ends of the lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotLabel {
    Exit,
    Entrance,
}

impl SpotLabel {
    /// Label for queue index `index` in a lane holding `len` vehicles.
    ///
    /// A lone vehicle sits at the exit.
    pub fn for_index(index: usize, len: usize) -> Option<Self> {
        if index == 0 && len > 0 {
            Some(SpotLabel::Exit)
        } else if len > 0 && index == len - 1 {
            Some(SpotLabel::Entrance)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpotLabel::Exit => "(Exit)",
            SpotLabel::Entrance => "(Entrance)",
        }
    }
}
