// src/geos.rs

use crate::domain::ArgumentError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Dashboard key -> `neighborhoods_analysis_boundaries` value in the dataset.
pub const SF_NEIGHBORHOODS: &[(&str, &str)] = &[
    ("FiDi", "Financial District/South Beach"),
    ("Western Addition", "Western Addition"),
    ("West of Twin Peaks", "West of Twin Peaks"),
    ("Visitacion Valley", "Visitacion Valley"),
    ("Twin Peaks", "Twin Peaks"),
    ("SoMa", "South of Market"),
    ("Treasure Island", "Treasure Island"),
    ("Presidio Heights", "Presidio Heights"),
    ("Presidio", "Presidio"),
    ("Potrero Hill", "Potrero Hill"),
    ("Portola", "Portola"),
    ("Pacific Heights", "Pacific Heights"),
    ("Outer Richmond", "Outer Richmond"),
    ("Outer Mission", "Outer Mission"),
    ("Sunset", "Sunset/Parkside"),
    ("OMI", "Oceanview/Merced/Ingleside"),
    ("North Beach", "North Beach"),
    ("Noe Valley", "Noe Valley"),
    ("Lone Mountain/USF", "Lone Mountain/USF"),
    ("Lincoln Park", "Lincoln Park"),
    ("Seacliff", "Seacliff"),
    ("Nob Hill", "Nob Hill"),
    ("Mission Bay", "Mission Bay"),
    ("Mission", "Mission"),
    ("Russian Hill", "Russian Hill"),
    ("Marina", "Marina"),
    ("Lakeshore", "Lakeshore"),
    ("Tenderloin", "Tenderloin"),
    ("McLaren Park", "McLaren Park"),
    ("Japantown", "Japantown"),
    ("Inner Sunset", "Inner Sunset"),
    ("Hayes Valley", "Hayes Valley"),
    ("Haight Ashbury", "Haight Ashbury"),
    ("Golden Gate Park", "Golden Gate Park"),
    ("Inner Richmond", "Inner Richmond"),
    ("Glen Park", "Glen Park"),
    ("Excelsior", "Excelsior"),
    ("Chinatown", "Chinatown"),
    ("Castro", "Castro/Upper Market"),
    ("Bernal Heights", "Bernal Heights"),
    ("Bayview", "Bayview Hunters Point"),
];

/// A neighborhood the dashboard knows how to query. Only obtainable through
/// [`FromStr`] or [`Neighborhood::all`], so it always names a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Neighborhood {
    key: &'static str,
    label: &'static str,
}

impl Neighborhood {
    pub fn all() -> impl Iterator<Item = Neighborhood> {
        SF_NEIGHBORHOODS
            .iter()
            .map(|&(key, label)| Neighborhood { key, label })
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Value of `neighborhoods_analysis_boundaries` to filter on.
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl FromStr for Neighborhood {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Neighborhood::all()
            .find(|n| n.key == s)
            .ok_or_else(|| ArgumentError::UnknownNeighborhood(s.to_string()))
    }
}

impl fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key)
    }
}
