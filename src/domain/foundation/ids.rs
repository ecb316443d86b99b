//! Strongly-typed identifier value objects.
//!
//! Every identifier wraps a UUID and serializes as a bare string, so the
//! same value can travel through a URL path, a JSON body and a database row.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wraps an existing UUID.
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

uuid_identifier!(
    /// Identifier of a gym. Every revenue query is scoped to one gym (tenant).
    GymId
);

uuid_identifier!(
    /// Identifier of a single membership period.
    MembershipId
);

uuid_identifier!(
    /// Identifier of a payment record.
    PaymentId
);

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn gym_id_generates_unique_values() {
        assert_ne!(GymId::new(), GymId::new());
    }

    #[test]
    fn membership_id_parses_from_valid_string() {
        let id: MembershipId = SAMPLE.parse().unwrap();
        assert_eq!(id.to_string(), SAMPLE);
    }

    #[test]
    fn payment_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<PaymentId>().is_err());
    }

    #[test]
    fn gym_id_from_uuid_preserves_value() {
        let uuid = Uuid::new_v4();
        assert_eq!(GymId::from_uuid(uuid).as_uuid(), &uuid);
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id: MembershipId = SAMPLE.parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", SAMPLE));

        let back: MembershipId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
