use std::collections::HashSet;
use std::fmt::{self, Display};
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{ModeSetError, TravelMode};

/// the set of travel modes a search is allowed to use. typically one
/// non-transit mode (walk, bicycle, car) plus zero or more transit modes.
/// stored as a single bitmask so that adding, removing, and testing modes
/// are single bitwise operations.
///
/// only atomic mode bits are ever stored; group membership (transit,
/// trainish, busish) is derived from member bits on every query. serde
/// support is transparent over the raw mask, which is the one storage
/// representation callers may persist.
///
/// the set is a plain `Copy` value. callers needing a divergent
/// configuration (e.g. a restricted fork of a base query) copy it rather
/// than sharing one mutable instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TravelModeSet {
    modes: u32,
}

impl TravelModeSet {
    /// a set with no modes enabled. not valid for searching until at least
    /// one mode is set.
    pub fn empty() -> TravelModeSet {
        TravelModeSet::default()
    }

    /// builds a set enabling each of the given modes. duplicates are
    /// harmless; group modes enable all of their members.
    pub fn new(modes: &[TravelMode]) -> TravelModeSet {
        let mut result = TravelModeSet::empty();
        for mode in modes {
            result.set_mode(*mode, true);
        }
        result
    }

    /// the raw bitmask. escape hatch for bulk comparison and persistence;
    /// see [`TravelMode`] mask docs for the bit stability contract.
    pub fn mask(&self) -> u32 {
        self.modes
    }

    /// enables or disables a mode. the one general-purpose mutation entry
    /// point: named setters delegate here. for group modes this sets or
    /// clears exactly the members' bits.
    pub fn set_mode(&mut self, mode: TravelMode, enabled: bool) {
        if enabled {
            self.modes |= mode.mask();
        } else {
            self.modes &= !mode.mask();
        }
    }

    /// true if any bit of the mode is enabled. for group modes this is
    /// "any member present", not "all members present".
    pub fn contains(&self, mode: TravelMode) -> bool {
        self.modes & mode.mask() != 0
    }

    /// true if any bit of the given raw mask is enabled.
    pub fn intersects(&self, raw_mask: u32) -> bool {
        self.modes & raw_mask != 0
    }

    /// a set with no modes cannot match any edge or trip, so it is not
    /// valid as a search configuration.
    pub fn is_valid(&self) -> bool {
        self.modes != 0
    }

    /// every variant whose mask intersects this set, in declaration order,
    /// groups included.
    pub fn modes(&self) -> Vec<TravelMode> {
        TravelMode::ALL
            .into_iter()
            .filter(|mode| self.contains(*mode))
            .collect()
    }

    /// a copy of this set with every transit bit cleared, keeping only the
    /// non-transit modes (walk, bicycle, car).
    pub fn non_transit_set(&self) -> TravelModeSet {
        let mut result = *self;
        result.set_transit(false);
        result
    }

    /// tests this set against a collection of restricted modes. returns
    /// false if at least one non-transit mode (walk, bicycle, car) is
    /// enabled here and not restricted, since the trip can then proceed on
    /// an unrestricted ground mode. transit and group bits are ignored; a
    /// set with no ground mode at all is vacuously restricted.
    pub fn is_restricted(&self, restricted_modes: &HashSet<TravelMode>) -> bool {
        if self.walk() && !restricted_modes.contains(&TravelMode::Walk) {
            return false;
        }
        if self.bicycle() && !restricted_modes.contains(&TravelMode::Bicycle) {
            return false;
        }
        if self.car() && !restricted_modes.contains(&TravelMode::Car) {
            return false;
        }
        true
    }

    pub fn walk(&self) -> bool {
        self.contains(TravelMode::Walk)
    }

    pub fn set_walk(&mut self, enabled: bool) {
        self.set_mode(TravelMode::Walk, enabled);
    }

    pub fn bicycle(&self) -> bool {
        self.contains(TravelMode::Bicycle)
    }

    pub fn set_bicycle(&mut self, enabled: bool) {
        self.set_mode(TravelMode::Bicycle, enabled);
    }

    pub fn car(&self) -> bool {
        self.contains(TravelMode::Car)
    }

    pub fn set_car(&mut self, enabled: bool) {
        self.set_mode(TravelMode::Car, enabled);
    }

    pub fn bus(&self) -> bool {
        self.contains(TravelMode::Bus)
    }

    pub fn set_bus(&mut self, enabled: bool) {
        self.set_mode(TravelMode::Bus, enabled);
    }

    pub fn tram(&self) -> bool {
        self.contains(TravelMode::Tram)
    }

    pub fn set_tram(&mut self, enabled: bool) {
        self.set_mode(TravelMode::Tram, enabled);
    }

    pub fn subway(&self) -> bool {
        self.contains(TravelMode::Subway)
    }

    pub fn set_subway(&mut self, enabled: bool) {
        self.set_mode(TravelMode::Subway, enabled);
    }

    pub fn rail(&self) -> bool {
        self.contains(TravelMode::Rail)
    }

    pub fn set_rail(&mut self, enabled: bool) {
        self.set_mode(TravelMode::Rail, enabled);
    }

    pub fn ferry(&self) -> bool {
        self.contains(TravelMode::Ferry)
    }

    pub fn set_ferry(&mut self, enabled: bool) {
        self.set_mode(TravelMode::Ferry, enabled);
    }

    pub fn cable_car(&self) -> bool {
        self.contains(TravelMode::CableCar)
    }

    pub fn set_cable_car(&mut self, enabled: bool) {
        self.set_mode(TravelMode::CableCar, enabled);
    }

    pub fn gondola(&self) -> bool {
        self.contains(TravelMode::Gondola)
    }

    pub fn set_gondola(&mut self, enabled: bool) {
        self.set_mode(TravelMode::Gondola, enabled);
    }

    pub fn funicular(&self) -> bool {
        self.contains(TravelMode::Funicular)
    }

    pub fn set_funicular(&mut self, enabled: bool) {
        self.set_mode(TravelMode::Funicular, enabled);
    }

    /// true if any train-like mode (tram, rail, subway, funicular, gondola)
    /// is enabled.
    pub fn trainish(&self) -> bool {
        self.contains(TravelMode::Trainish)
    }

    pub fn set_trainish(&mut self, enabled: bool) {
        self.set_mode(TravelMode::Trainish, enabled);
    }

    /// true if any bus-like mode (bus, cable car) is enabled.
    pub fn busish(&self) -> bool {
        self.contains(TravelMode::Busish)
    }

    pub fn set_busish(&mut self, enabled: bool) {
        self.set_mode(TravelMode::Busish, enabled);
    }

    /// true if the trip may use any scheduled transit mode.
    pub fn transit(&self) -> bool {
        self.contains(TravelMode::Transit)
    }

    pub fn set_transit(&mut self, enabled: bool) {
        self.set_mode(TravelMode::Transit, enabled);
    }
}

impl FromStr for TravelModeSet {
    type Err = ModeSetError;

    /// parses a comma-separated list of mode names, e.g. "WALK,BUS".
    /// all-or-nothing: an unknown token fails the whole parse and no
    /// partially-populated set is produced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut result = TravelModeSet::empty();
        for token in s.split(',') {
            let mode = TravelMode::from_str(token)?;
            result.set_mode(mode, true);
        }
        Ok(result)
    }
}

impl Display for TravelModeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TravelModeSet ({})",
            self.modes().iter().map(|mode| mode.to_string()).join(", ")
        )
    }
}
