use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ModeSetError;

/// bit positions for each atomic travel mode. these values are a stability
/// contract: raw masks are compared and stored by callers holding only the
/// integer, so a bit, once assigned, is never moved or reused. 0x008 is a
/// retired position and must stay unassigned.
pub mod mask {
    pub const BICYCLE: u32 = 0x001;
    pub const WALK: u32 = 0x002;
    pub const CAR: u32 = 0x004;
    pub const BUS: u32 = 0x010;
    pub const TRAM: u32 = 0x020;
    pub const SUBWAY: u32 = 0x040;
    pub const RAIL: u32 = 0x080;
    pub const FERRY: u32 = 0x100;
    pub const CABLE_CAR: u32 = 0x200;
    pub const GONDOLA: u32 = 0x400;
    pub const FUNICULAR: u32 = 0x800;

    /// train-like modes as a group. owns no bit of its own.
    pub const TRAINISH: u32 = TRAM | RAIL | SUBWAY | FUNICULAR | GONDOLA;
    /// bus-like modes as a group. owns no bit of its own.
    pub const BUSISH: u32 = CABLE_CAR | BUS;
    /// every scheduled transit mode as a group. owns no bit of its own.
    pub const TRANSIT: u32 = TRAINISH | BUSISH | FERRY;
}

/// a way of traveling along the network. atomic variants (walk, bus, ...)
/// each map to one dedicated mask bit; the trailing group variants
/// (trainish, busish, transit) map to unions of their members' bits and are
/// a convenience for enabling or testing whole families of modes at once.
///
/// declaration order is observable: it fixes the ordering of
/// [`TravelModeSet::modes`] output and of rendered mode lists.
///
/// [`TravelModeSet::modes`]: super::TravelModeSet::modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    Walk,
    Bicycle,
    Car,
    Bus,
    Tram,
    Subway,
    Rail,
    Ferry,
    CableCar,
    Gondola,
    Funicular,
    Trainish,
    Busish,
    Transit,
}

impl TravelMode {
    /// every variant in declaration order, groups last.
    pub const ALL: [TravelMode; 14] = [
        TravelMode::Walk,
        TravelMode::Bicycle,
        TravelMode::Car,
        TravelMode::Bus,
        TravelMode::Tram,
        TravelMode::Subway,
        TravelMode::Rail,
        TravelMode::Ferry,
        TravelMode::CableCar,
        TravelMode::Gondola,
        TravelMode::Funicular,
        TravelMode::Trainish,
        TravelMode::Busish,
        TravelMode::Transit,
    ];

    /// the bitmask for this mode. single source of truth for the
    /// variant-to-bits mapping; every set/contains operation resolves
    /// through here.
    pub fn mask(&self) -> u32 {
        match self {
            TravelMode::Walk => mask::WALK,
            TravelMode::Bicycle => mask::BICYCLE,
            TravelMode::Car => mask::CAR,
            TravelMode::Bus => mask::BUS,
            TravelMode::Tram => mask::TRAM,
            TravelMode::Subway => mask::SUBWAY,
            TravelMode::Rail => mask::RAIL,
            TravelMode::Ferry => mask::FERRY,
            TravelMode::CableCar => mask::CABLE_CAR,
            TravelMode::Gondola => mask::GONDOLA,
            TravelMode::Funicular => mask::FUNICULAR,
            TravelMode::Trainish => mask::TRAINISH,
            TravelMode::Busish => mask::BUSISH,
            TravelMode::Transit => mask::TRANSIT,
        }
    }

    /// true if this mode rides on scheduled transit (any bit within the
    /// transit group).
    pub fn is_transit(&self) -> bool {
        self.mask() & mask::TRANSIT != 0
    }
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelMode::Walk => write!(f, "WALK"),
            TravelMode::Bicycle => write!(f, "BICYCLE"),
            TravelMode::Car => write!(f, "CAR"),
            TravelMode::Bus => write!(f, "BUS"),
            TravelMode::Tram => write!(f, "TRAM"),
            TravelMode::Subway => write!(f, "SUBWAY"),
            TravelMode::Rail => write!(f, "RAIL"),
            TravelMode::Ferry => write!(f, "FERRY"),
            TravelMode::CableCar => write!(f, "CABLE_CAR"),
            TravelMode::Gondola => write!(f, "GONDOLA"),
            TravelMode::Funicular => write!(f, "FUNICULAR"),
            TravelMode::Trainish => write!(f, "TRAINISH"),
            TravelMode::Busish => write!(f, "BUSISH"),
            TravelMode::Transit => write!(f, "TRANSIT"),
        }
    }
}

impl FromStr for TravelMode {
    type Err = ModeSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "WALK" => Ok(TravelMode::Walk),
            "BICYCLE" => Ok(TravelMode::Bicycle),
            "CAR" => Ok(TravelMode::Car),
            "BUS" => Ok(TravelMode::Bus),
            "TRAM" => Ok(TravelMode::Tram),
            "SUBWAY" => Ok(TravelMode::Subway),
            "RAIL" => Ok(TravelMode::Rail),
            "FERRY" => Ok(TravelMode::Ferry),
            "CABLE_CAR" => Ok(TravelMode::CableCar),
            "GONDOLA" => Ok(TravelMode::Gondola),
            "FUNICULAR" => Ok(TravelMode::Funicular),
            "TRAINISH" => Ok(TravelMode::Trainish),
            "BUSISH" => Ok(TravelMode::Busish),
            "TRANSIT" => Ok(TravelMode::Transit),
            other => Err(ModeSetError::UnknownModeName {
                name: other.to_string(),
            }),
        }
    }
}
