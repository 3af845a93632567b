//! Per-instance identity tokens used to namespace generated styles.

use std::fmt::{self, Display, Formatter};
use uuid::Uuid;

/// Opaque identity for one mounted widget instance.
///
/// Allocated once when the instance is created and never regenerated; it is a
/// namespacing token only and is never shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InstanceIdentity(Uuid);

impl InstanceIdentity {
    /// Allocate a fresh random identity (UUID v4).
    #[must_use]
    pub fn allocate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap a known UUID, mainly for deterministic fixtures.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Underlying UUID value.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Display for InstanceIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[cfg(test)]
mod tests {
    use super::InstanceIdentity;
    use std::collections::HashSet;
    use uuid::Uuid;

    #[test]
    fn allocations_are_pairwise_distinct() {
        let count = 20_000;
        let ids: HashSet<InstanceIdentity> =
            (0..count).map(|_| InstanceIdentity::allocate()).collect();
        assert_eq!(ids.len(), count);
    }

    #[test]
    fn display_is_stable_for_an_instance() {
        let id = InstanceIdentity::allocate();
        assert_eq!(id.to_string(), id.to_string());
        assert_eq!(id.to_string(), id.as_uuid().hyphenated().to_string());
    }

    #[test]
    fn display_uses_hyphenated_lowercase() {
        let id = InstanceIdentity::from_uuid(Uuid::from_u128(0xABCD));
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-00000000abcd");
    }
}
