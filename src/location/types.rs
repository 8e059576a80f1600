//! Named fishing locations and what lives in them.

use std::fmt;

/// Land-generation family for a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    Stream,
    River,
    Lake,
}

impl Archetype {
    /// Maps a location name onto an archetype by substring: "Stream" wins
    /// over "Lake", anything else is a river.
    pub fn from_location_name(name: &str) -> Archetype {
        if name.contains("Stream") {
            Archetype::Stream
        } else if name.contains("Lake") {
            Archetype::Lake
        } else {
            Archetype::River
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Archetype::Stream => "stream",
            Archetype::River => "river",
            Archetype::Lake => "lake",
        }
    }
}

pub const MOUNTAIN_STREAM_SPECIES: [&str; 4] = [
    "Brook Trout",
    "Brown Trout",
    "Rainbow Trout",
    "Cutthroat Trout",
];
pub const RIVER_BEND_SPECIES: [&str; 4] = [
    "Brown Trout",
    "Rainbow Trout",
    "Smallmouth Bass",
    "Mountain Whitefish",
];
pub const ALPINE_LAKE_SPECIES: [&str; 4] = [
    "Lake Trout",
    "Golden Trout",
    "Arctic Grayling",
    "Brook Trout",
];
pub const COASTAL_ESTUARY_SPECIES: [&str; 4] = [
    "Striped Bass",
    "Sea-run Cutthroat",
    "Redfish",
    "Largemouth Bass",
];
pub const FALLBACK_SPECIES: [&str; 1] = ["Generic Fish"];

/// A place to fish. Unrecognised names still fish, with a generic species
/// table and an archetype taken from the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    MountainStream,
    RiverBend,
    AlpineLake,
    CoastalEstuary,
    Other(String),
}

impl Location {
    pub const KNOWN: [Location; 4] = [
        Location::MountainStream,
        Location::RiverBend,
        Location::AlpineLake,
        Location::CoastalEstuary,
    ];

    /// Exact, case-insensitive match against the known names.
    pub fn from_name(name: &str) -> Location {
        let trimmed = name.trim();
        Location::KNOWN
            .into_iter()
            .find(|loc| loc.name().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| Location::Other(trimmed.to_string()))
    }

    pub fn name(&self) -> &str {
        match self {
            Location::MountainStream => "Mountain Stream",
            Location::RiverBend => "River Bend",
            Location::AlpineLake => "Alpine Lake",
            Location::CoastalEstuary => "Coastal Estuary",
            Location::Other(name) => name,
        }
    }

    pub fn archetype(&self) -> Archetype {
        Archetype::from_location_name(self.name())
    }

    pub fn species(&self) -> &'static [&'static str] {
        match self {
            Location::MountainStream => &MOUNTAIN_STREAM_SPECIES,
            Location::RiverBend => &RIVER_BEND_SPECIES,
            Location::AlpineLake => &ALPINE_LAKE_SPECIES,
            Location::CoastalEstuary => &COASTAL_ESTUARY_SPECIES,
            Location::Other(_) => &FALLBACK_SPECIES,
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::MountainStream
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
