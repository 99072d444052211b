//! Ship definitions, orientation and per-ship health tracking.

use core::fmt;

/// Index of a ship within a fleet (position in [`crate::SHIPS`]).
pub type ShipId = usize;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn rotated(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    pub fn is_vertical(self) -> bool {
        self == Orientation::Vertical
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Bow cell and heading of a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub x: usize,
    pub y: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(x: usize, y: usize, orientation: Orientation) -> Self {
        Self { x, y, orientation }
    }

    /// Cells covered by a ship of `length` anchored here. Vertical ships grow
    /// along `y`, horizontal ones along `x`. Coordinates may fall off the
    /// board; callers bounds-check them.
    pub fn cells(&self, length: usize) -> impl Iterator<Item = (usize, usize)> {
        let Placement { x, y, orientation } = *self;
        (0..length).map(move |i| match orientation {
            Orientation::Horizontal => (x.saturating_add(i), y),
            Orientation::Vertical => (x, y.saturating_add(i)),
        })
    }
}

/// A ship record in a fleet: type, remaining hit points and position.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    hit_points: usize,
    placement: Option<Placement>,
}

impl Ship {
    /// An unplaced ship at full health.
    pub fn new(ship_type: ShipType) -> Self {
        Self {
            ship_type,
            hit_points: ship_type.length(),
            placement: None,
        }
    }

    /// Ship's type.
    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    /// Hit points left; equals length minus the number of hit cells.
    pub fn hit_points(&self) -> usize {
        self.hit_points
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Anchor and orientation, once placed.
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// True once every segment has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.hit_points == 0
    }

    pub(crate) fn set_placement(&mut self, placement: Placement) {
        self.placement = Some(placement);
    }

    /// Take one hit. Returns `true` if it was the last hit point.
    pub(crate) fn take_hit(&mut self) -> bool {
        assert!(self.hit_points > 0, "{} hit after destruction", self.name());
        self.hit_points -= 1;
        self.hit_points == 0
    }

    pub(crate) fn reset(&mut self) {
        *self = Ship::new(self.ship_type);
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.placement {
            Some(p) => write!(
                f,
                "Ship {{ name: \"{}\", anchor: ({}, {}), orientation: {:?}, hp: {}/{} }}",
                self.name(),
                p.x,
                p.y,
                p.orientation,
                self.hit_points,
                self.length(),
            ),
            None => write!(f, "Ship {{ name: \"{}\", unplaced }}", self.name()),
        }
    }
}
