//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `TeamId` where an
//! `OriginId` is expected. They also give origins and destinations a stable
//! identity independent of their display name, so renaming an entry never
//! requires rewriting the fare or band maps keyed by it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(OriginId, "Unique identifier for a travel origin.");
typed_id!(DestinationId, "Unique identifier for a travel destination.");
typed_id!(SegmentId, "Unique identifier for a job-training segment.");
typed_id!(TeamId, "Unique identifier for a team.");
typed_id!(PlanRowId, "Unique identifier for a plan row.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_id_roundtrip_through_string() {
        let id = TeamId::new();
        let parsed = TeamId::from_str(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::now_v7();
        let id = OriginId::from_uuid(uuid);
        assert_eq!(id.into_inner(), uuid);
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(PlanRowId::new(), PlanRowId::new());
    }

    #[test]
    fn test_id_parse_rejects_garbage() {
        assert!(DestinationId::from_str("not-a-uuid").is_err());
    }
}
