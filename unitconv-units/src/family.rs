//! Unit families
//!
//! A family is a closed set of mutually convertible units. Conversions
//! never cross families.

use std::fmt;
use serde::{Serialize, Deserialize};

/// The kind of quantity a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Length,
    Area,
    Volume,
    Mass,
    Time,
    Temperature,
}

impl Family {
    /// Every family, in display order
    pub const ALL: [Family; 6] = [
        Family::Length,
        Family::Area,
        Family::Volume,
        Family::Mass,
        Family::Time,
        Family::Temperature,
    ];

    /// Lowercase family name
    pub fn name(&self) -> &'static str {
        match self {
            Family::Length => "length",
            Family::Area => "area",
            Family::Volume => "volume",
            Family::Mass => "mass",
            Family::Time => "time",
            Family::Temperature => "temperature",
        }
    }

    /// Key of the unit every factor in this family is relative to
    pub fn base_unit(&self) -> &'static str {
        match self {
            Family::Length => "meter",
            Family::Area => "square_meter",
            Family::Volume => "litre",
            Family::Mass => "gram",
            Family::Time => "second",
            Family::Temperature => "kelvin",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
