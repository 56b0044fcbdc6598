use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ParseCompartmentError;

/// One of the five fixed cargo positions, front to back.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Compartment {
    #[serde(rename = "CP1")]
    First,
    #[serde(rename = "CP2")]
    Second,
    #[default]
    #[serde(rename = "CP3")]
    Third,
    #[serde(rename = "CP4")]
    Fourth,
    #[serde(rename = "CP5")]
    Fifth,
}

impl Compartment {
    pub const ALL: [Compartment; 5] = [
        Compartment::First,
        Compartment::Second,
        Compartment::Third,
        Compartment::Fourth,
        Compartment::Fifth,
    ];

    pub fn index(self) -> usize {
        match self {
            Compartment::First => 0,
            Compartment::Second => 1,
            Compartment::Third => 2,
            Compartment::Fourth => 3,
            Compartment::Fifth => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Compartment::First => "CP1",
            Compartment::Second => "CP2",
            Compartment::Third => "CP3",
            Compartment::Fourth => "CP4",
            Compartment::Fifth => "CP5",
        }
    }
}

impl fmt::Display for Compartment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Compartment {
    type Err = ParseCompartmentError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let digits = match trimmed.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("cp") => &trimmed[2..],
            _ => trimmed,
        };
        match digits {
            "1" => Ok(Compartment::First),
            "2" => Ok(Compartment::Second),
            "3" => Ok(Compartment::Third),
            "4" => Ok(Compartment::Fourth),
            "5" => Ok(Compartment::Fifth),
            _ => Err(ParseCompartmentError::Unknown(raw.to_string())),
        }
    }
}

/// Fixed five-slot map keyed by [`Compartment`].
///
/// Every compartment always has a value, so lookups cannot miss.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CompartmentMap<T> {
    slots: [T; 5],
}

impl<T> CompartmentMap<T> {
    pub fn from_fn(f: impl FnMut(Compartment) -> T) -> Self {
        Self {
            slots: Compartment::ALL.map(f),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Compartment, &T)> {
        Compartment::ALL.into_iter().zip(self.slots.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.slots.iter()
    }
}

impl<T> Index<Compartment> for CompartmentMap<T> {
    type Output = T;

    fn index(&self, compartment: Compartment) -> &T {
        &self.slots[compartment.index()]
    }
}

impl<T> IndexMut<Compartment> for CompartmentMap<T> {
    fn index_mut(&mut self, compartment: Compartment) -> &mut T {
        &mut self.slots[compartment.index()]
    }
}

impl<T: Serialize> Serialize for CompartmentMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for (compartment, value) in self.iter() {
            map.serialize_entry(compartment.label(), value)?;
        }
        map.end()
    }
}

pub type PieceAllocation = CompartmentMap<u32>;
pub type WeightMap = CompartmentMap<f64>;
pub type ExceedsMap = CompartmentMap<bool>;

impl CompartmentMap<u32> {
    pub fn total_pieces(&self) -> u32 {
        self.slots.iter().sum()
    }
}

impl CompartmentMap<bool> {
    pub fn any(&self) -> bool {
        self.slots.iter().any(|flag| *flag)
    }
}

/// Piece counts together with the weights derived from them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Distribution {
    pub allocation: PieceAllocation,
    pub weights: WeightMap,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct DerivedTotals {
    pub pieces: u32,
    pub per_piece_kg: f64,
    /// CP1 through CP4, reserved item excluded.
    pub adjusted_kg: f64,
    /// Adjusted total plus CP5 including the reserved item.
    pub shown_kg: f64,
    /// CP2 through CP4 only.
    pub distributed_kg: f64,
}
