use std::fmt;

/// Identifier assigned to a catalog entity once it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntityId(pub u64);

impl EntityId {
    pub fn new(value: u64) -> Self {
        EntityId(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// The following id, or `None` once the id space is exhausted.
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(EntityId)
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        EntityId(value)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_increments() {
        assert_eq!(EntityId(0).next(), Some(EntityId(1)));
        assert_eq!(EntityId(41).next(), Some(EntityId(42)));
    }

    #[test]
    fn next_stops_at_max() {
        assert_eq!(EntityId(u64::MAX).next(), None);
    }
}
