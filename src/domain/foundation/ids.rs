//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Declares a UUID-backed identifier newtype.
///
/// Every identifier gets the same surface: random construction, wrapping an
/// existing UUID (rows read back from the store), `Display` and `FromStr`.
macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            #[doc = concat!("Creates a new random ", stringify!($name), ".")]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            #[doc = concat!("Creates a ", stringify!($name), " from an existing UUID.")]
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_id! {
    /// Unique identifier for a registered user.
    UserId
}

uuid_id! {
    /// Unique identifier for an exercise (reference data).
    ExerciseId
}

uuid_id! {
    /// Unique identifier for a workout record.
    RecordId
}

uuid_id! {
    /// Unique identifier for a single set within a workout record.
    SetId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(RecordId::new(), RecordId::new());
        assert_ne!(UserId::new(), UserId::new());
    }

    #[test]
    fn id_parses_from_its_display_form() {
        let id = ExerciseId::new();
        let parsed: ExerciseId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn id_rejects_garbage() {
        assert!("not-a-uuid".parse::<RecordId>().is_err());
        assert!("42".parse::<UserId>().is_err());
    }

    #[test]
    fn id_serializes_transparently() {
        let uuid = Uuid::parse_str("6f1c1f5e-7d0b-4a4c-9a39-2d4bb1f0a111").unwrap();
        let id = SetId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"6f1c1f5e-7d0b-4a4c-9a39-2d4bb1f0a111\"");
    }
}
