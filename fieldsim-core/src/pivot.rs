use crate::body::SatelliteId;

/// A symmetric bond between two satellites.
///
/// Both satellites hold a copy; membership tests accept either ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pivot {
    pub item_a: SatelliteId,
    pub item_b: SatelliteId,
}

impl Pivot {
    pub fn new(item_a: SatelliteId, item_b: SatelliteId) -> Self {
        Self { item_a, item_b }
    }

    /// True if this pivot bonds exactly `a` and `b`, in any order
    pub fn binds(&self, a: SatelliteId, b: SatelliteId) -> bool {
        (self.item_a == a && self.item_b == b) || (self.item_a == b && self.item_b == a)
    }

    pub fn contains(&self, id: SatelliteId) -> bool {
        self.item_a == id || self.item_b == id
    }

    /// The other member of the bond, if `id` is part of it
    pub fn partner(&self, id: SatelliteId) -> Option<SatelliteId> {
        if self.item_a == id {
            Some(self.item_b)
        } else if self.item_b == id {
            Some(self.item_a)
        } else {
            None
        }
    }
}
