//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Values are assigned by the caller
//! (topology files, unit rosters) and carry no dense-index meaning — the
//! network and registries key maps by them rather than indexing arrays.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> Self {
                Self(raw)
            }
        }
    };
}

typed_id! {
    /// Identity of a network location (city, dispatch center, incident site).
    /// Location equality throughout the workspace is by this id alone.
    pub struct LocationId(u32);
}

typed_id! {
    /// Identity of a reported incident.
    pub struct IncidentId(u32);
}

typed_id! {
    /// Identity of a mobile response unit.
    pub struct UnitId(u32);
}
